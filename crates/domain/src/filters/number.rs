// crates/domain/src/filters/number.rs
use sphinx_filtration_shared_kernel::{DomainResult, FieldName};

use crate::{
    bounds::{BoundsDomain, NumericBounds, resolve_ranged, resolve_single},
    filter::{
        Comparison, Configurable, Filter, FilterCall, OptionDescriptor, OptionKind, OptionValue, RangeOrSingle,
        RangeOrSingleFilter,
        options::{exclude_option, expect_bool, expect_float, expect_number, expect_text, range_or_single_options},
    },
    value_objects::Number,
};

/// Integer or float filter resolved into `SetFilterRange` / `SetFilterFloatRange`.
#[derive(Debug, Clone, Default)]
pub struct NumberFilter {
    field_name: FieldName,
    values: RangeOrSingle<Number>,
    float: bool,
    exclude: bool,
    bounds: NumericBounds,
}

impl NumberFilter {
    pub fn new(field_name: impl Into<FieldName>) -> Self {
        Self {
            field_name: field_name.into(),
            ..Self::default()
        }
    }

    pub fn set_field_name(&mut self, field_name: impl Into<FieldName>) -> &mut Self {
        self.field_name = field_name.into();
        self
    }

    pub fn is_float(&self) -> bool {
        self.float
    }

    pub fn set_float(&mut self, float: bool) -> &mut Self {
        self.float = float;
        self
    }

    pub fn set_exclude(&mut self, exclude: bool) -> &mut Self {
        self.exclude = exclude;
        self
    }

    pub fn bounds(&self) -> &NumericBounds {
        &self.bounds
    }

    pub fn default_min(&self) -> Number {
        self.bounds.default_min()
    }

    pub fn set_default_min(&mut self, default_min: impl Into<Number>) -> DomainResult<&mut Self> {
        self.bounds.set_default_min(default_min)?;
        Ok(self)
    }

    pub fn default_max(&self) -> Number {
        self.bounds.default_max()
    }

    pub fn set_default_max(&mut self, default_max: impl Into<Number>) -> DomainResult<&mut Self> {
        self.bounds.set_default_max(default_max)?;
        Ok(self)
    }

    pub fn default_float_step(&self) -> f64 {
        self.bounds.default_float_step()
    }

    pub fn set_default_float_step(&mut self, step: f64) -> DomainResult<&mut Self> {
        self.bounds.set_default_float_step(step)?;
        Ok(self)
    }

    /// Step used to turn a strict comparison into an inclusive one.
    pub fn value_min_step(&self) -> Number {
        if self.float {
            Number::Float(self.bounds.default_float_step())
        } else {
            Number::Int(1)
        }
    }

    fn resolve_single(&self, value: Number) -> DomainResult<FilterCall> {
        let Some(comparison) = self.values.single_type().comparison() else {
            return Ok(FilterCall::Exact {
                field: self.field_name.clone(),
                values: vec![value.to_attribute(self.float)],
                exclude: self.exclude,
            });
        };

        if self.float {
            let bounds = single_bounds(&self.bounds.float_domain(), value.to_float(), comparison)?;
            Ok(self.float_range(bounds))
        } else {
            let bounds = single_bounds(&self.bounds.int_domain(), value.to_int(), comparison)?;
            Ok(self.int_range(bounds))
        }
    }

    fn resolve_ranged(&self) -> DomainResult<FilterCall> {
        let from = self.values.from_value().copied();
        let to = self.values.to_value().copied();
        let (from_type, to_type) = (self.values.ranged_from_type(), self.values.ranged_to_type());

        if self.float {
            let domain = self.bounds.float_domain();
            let bounds = resolve_ranged(&domain, from.map(Number::to_float), to.map(Number::to_float), from_type, to_type)?;
            Ok(self.float_range((bounds.min, bounds.max)))
        } else {
            let domain = self.bounds.int_domain();
            let bounds = resolve_ranged(&domain, from.map(Number::to_int), to.map(Number::to_int), from_type, to_type)?;
            Ok(self.int_range((bounds.min, bounds.max)))
        }
    }

    fn int_range(&self, (min, max): (i64, i64)) -> FilterCall {
        FilterCall::Range {
            field: self.field_name.clone(),
            min,
            max,
            exclude: self.exclude,
        }
    }

    fn float_range(&self, (min, max): (f64, f64)) -> FilterCall {
        FilterCall::FloatRange {
            field: self.field_name.clone(),
            min,
            max,
            exclude: self.exclude,
        }
    }
}

fn single_bounds<D: BoundsDomain>(
    domain: &D,
    value: D::Value,
    comparison: Comparison,
) -> DomainResult<(D::Value, D::Value)> {
    resolve_single(domain, value, comparison).map(|bounds| (bounds.min, bounds.max))
}

impl RangeOrSingleFilter for NumberFilter {
    type Value = Number;

    fn range_or_single(&self) -> &RangeOrSingle<Number> {
        &self.values
    }

    fn range_or_single_mut(&mut self) -> &mut RangeOrSingle<Number> {
        &mut self.values
    }
}

impl Configurable for NumberFilter {
    fn valid_options(&self) -> Vec<OptionDescriptor> {
        let mut options = range_or_single_options();
        options.extend([
            OptionDescriptor::new("float", &[OptionKind::Bool]),
            exclude_option(),
            OptionDescriptor::new("default_min", &[OptionKind::Int, OptionKind::Float]),
            OptionDescriptor::new("default_max", &[OptionKind::Int, OptionKind::Float]),
            OptionDescriptor::new("default_float_step", &[OptionKind::Float]),
        ]);
        options
    }

    fn set_option(&mut self, name: &str, value: &OptionValue) -> DomainResult<()> {
        match name {
            "field_name" => {
                self.set_field_name(expect_text(name, value)?);
            }
            "float" => {
                self.set_float(expect_bool(name, value)?);
            }
            "exclude" => {
                self.set_exclude(expect_bool(name, value)?);
            }
            "default_min" => {
                self.set_default_min(expect_number(name, value)?)?;
            }
            "default_max" => {
                self.set_default_max(expect_number(name, value)?)?;
            }
            "default_float_step" => {
                self.set_default_float_step(expect_float(name, value)?)?;
            }
            other => self.values.set_option(other, value)?,
        }
        Ok(())
    }
}

impl Filter for NumberFilter {
    fn field_name(&self) -> &FieldName {
        &self.field_name
    }

    fn is_exclude(&self) -> bool {
        self.exclude
    }

    fn has_applied_value(&self) -> bool {
        self.values.has_applied_value()
    }

    fn resolve(&self) -> DomainResult<Option<FilterCall>> {
        if !self.has_applied_value() {
            return Ok(None);
        }
        let call = match self.values.value().copied() {
            Some(value) if self.values.is_single() => self.resolve_single(value)?,
            _ => self.resolve_ranged()?,
        };
        Ok(Some(call))
    }
}
