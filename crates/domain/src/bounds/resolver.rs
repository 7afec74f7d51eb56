// crates/domain/src/bounds/resolver.rs
//! Turns a partial comparison into the inclusive `[min, max]` pair expected by
//! a range-only filter API.
//!
//! Strict inequalities are simulated by moving the bound one step inwards.
//! The step is only taken while there is room for it: a `Greater` value already
//! sitting on the default max stays where it is, and ranged edges are only
//! adjusted when the working bounds differ.

use std::fmt;

use sphinx_filtration_shared_kernel::{DomainError, DomainResult};

use crate::filter::{Comparison, RangedFromType, RangedToType};

/// Value domain a filter resolves bounds in.
pub trait BoundsDomain {
    type Value: Copy + PartialOrd + fmt::Display;

    fn default_min(&self) -> Self::Value;

    fn default_max(&self) -> Self::Value;

    /// Smallest value strictly greater than `value`.
    fn step_up(&self, value: Self::Value) -> Self::Value;

    /// Largest value strictly less than `value`.
    fn step_down(&self, value: Self::Value) -> Self::Value;
}

/// Inclusive bounds handed to the range call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<V> {
    pub min: V,
    pub max: V,
}

impl<V> Bounds<V> {
    pub const fn new(min: V, max: V) -> Self {
        Self { min, max }
    }
}

/// Fails when the configured default min lies above the default max.
pub fn ensure_ordered_defaults<D: BoundsDomain>(domain: &D) -> DomainResult<()> {
    let (min, max) = (domain.default_min(), domain.default_max());
    if min > max {
        return Err(DomainError::logic(format!(
            "Default min value ({min}) must not be greater than default max value ({max})."
        )));
    }
    Ok(())
}

/// Bounds for a single non-exact comparison against `value`.
pub fn resolve_single<D: BoundsDomain>(
    domain: &D,
    value: D::Value,
    comparison: Comparison,
) -> DomainResult<Bounds<D::Value>> {
    ensure_ordered_defaults(domain)?;

    let mut min = domain.default_min();
    let mut max = domain.default_max();

    if comparison.is_lower_bound() {
        if value > max {
            return Err(DomainError::logic(format!(
                "Single value ({value}) cannot exceed default max ({max})."
            )));
        }
    } else if value < min {
        return Err(DomainError::logic(format!(
            "Single value ({value}) cannot be below default min ({min})."
        )));
    }

    match comparison {
        Comparison::Greater => {
            min = if value < max { domain.step_up(value) } else { value };
        }
        Comparison::GreaterOrEqual => min = value,
        Comparison::Less => {
            max = if value > min { domain.step_down(value) } else { value };
        }
        Comparison::LessOrEqual => max = value,
    }

    Ok(Bounds { min, max })
}

/// Bounds for a from/to pair; missing edges fall back to the defaults.
pub fn resolve_ranged<D: BoundsDomain>(
    domain: &D,
    from: Option<D::Value>,
    to: Option<D::Value>,
    from_type: RangedFromType,
    to_type: RangedToType,
) -> DomainResult<Bounds<D::Value>> {
    ensure_ordered_defaults(domain)?;

    let mut min = domain.default_min();
    let mut max = domain.default_max();

    match (from, to) {
        (Some(from), Some(to)) if to >= from => {
            min = from;
            max = to;
        }
        (None, Some(to)) => max = to,
        (Some(from), None) => min = from,
        // inverted or empty pairs keep both defaults
        _ => {}
    }

    if min != max {
        if from_type == RangedFromType::Greater && min < max {
            min = domain.step_up(min);
        }
        if to_type == RangedToType::Less && max > min {
            max = domain.step_down(max);
        }
    }

    Ok(Bounds { min, max })
}
