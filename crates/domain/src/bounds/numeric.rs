// crates/domain/src/bounds/numeric.rs
use sphinx_filtration_shared_kernel::{DomainError, DomainResult};

use super::resolver::BoundsDomain;
use crate::value_objects::Number;

pub const DEFAULT_FLOAT_STEP: f64 = 0.01;

/// Default sentinel bounds of a numeric filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericBounds {
    default_min: Number,
    default_max: Number,
    default_float_step: f64,
}

impl Default for NumericBounds {
    fn default() -> Self {
        Self {
            default_min: Number::Int(0),
            default_max: Number::Int(i64::MAX),
            default_float_step: DEFAULT_FLOAT_STEP,
        }
    }
}

impl NumericBounds {
    pub fn default_min(&self) -> Number {
        self.default_min
    }

    pub fn set_default_min(&mut self, default_min: impl Into<Number>) -> DomainResult<&mut Self> {
        self.default_min = finite("default_min", default_min.into())?;
        Ok(self)
    }

    pub fn default_max(&self) -> Number {
        self.default_max
    }

    pub fn set_default_max(&mut self, default_max: impl Into<Number>) -> DomainResult<&mut Self> {
        self.default_max = finite("default_max", default_max.into())?;
        Ok(self)
    }

    pub fn default_float_step(&self) -> f64 {
        self.default_float_step
    }

    pub fn set_default_float_step(&mut self, step: f64) -> DomainResult<&mut Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(DomainError::invalid_argument(
                "default_float_step",
                format!("must be a finite float greater than 0, got {step}"),
            ));
        }
        self.default_float_step = step;
        Ok(self)
    }

    /// Defaults converted to integer working mode; step is always 1.
    pub fn int_domain(&self) -> IntDomain {
        IntDomain {
            min: self.default_min.to_int(),
            max: self.default_max.to_int(),
        }
    }

    /// Defaults converted to float working mode, stepping by `default_float_step`.
    pub fn float_domain(&self) -> FloatDomain {
        FloatDomain {
            min: self.default_min.to_float(),
            max: self.default_max.to_float(),
            step: self.default_float_step,
        }
    }
}

fn finite(option: &str, value: Number) -> DomainResult<Number> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::invalid_argument(option, format!("must be a finite int or float, got {value}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntDomain {
    pub min: i64,
    pub max: i64,
}

impl BoundsDomain for IntDomain {
    type Value = i64;

    fn default_min(&self) -> i64 {
        self.min
    }

    fn default_max(&self) -> i64 {
        self.max
    }

    fn step_up(&self, value: i64) -> i64 {
        value.saturating_add(1)
    }

    fn step_down(&self, value: i64) -> i64 {
        value.saturating_sub(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatDomain {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl BoundsDomain for FloatDomain {
    type Value = f64;

    fn default_min(&self) -> f64 {
        self.min
    }

    fn default_max(&self) -> f64 {
        self.max
    }

    fn step_up(&self, value: f64) -> f64 {
        value + self.step
    }

    fn step_down(&self, value: f64) -> f64 {
        value - self.step
    }
}
