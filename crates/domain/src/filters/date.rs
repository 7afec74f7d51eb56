// crates/domain/src/filters/date.rs
use chrono::{NaiveDate, NaiveDateTime};
use sphinx_filtration_shared_kernel::{AttributeValue, DomainError, DomainResult, FieldName};

use crate::{
    bounds::{
        DateBounds, resolve_ranged, resolve_single,
        date::{end_of_day, parse_datetime, start_of_day, timestamp},
    },
    filter::{
        Configurable, Filter, FilterCall, OptionDescriptor, OptionKind, OptionValue, RangeOrSingle,
        RangeOrSingleFilter,
        options::{exclude_option, expect_bool, expect_text, range_or_single_options},
    },
};

/// Day-granular date filter; every call carries Unix timestamps.
#[derive(Debug, Clone, Default)]
pub struct DateFilter {
    field_name: FieldName,
    values: RangeOrSingle<NaiveDateTime>,
    exclude: bool,
    bounds: DateBounds,
}

impl DateFilter {
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

    pub fn set_exclude(&mut self, exclude: bool) -> &mut Self {
        self.exclude = exclude;
        self
    }

    pub fn bounds(&self) -> &DateBounds {
        &self.bounds
    }

    pub fn default_min(&self) -> NaiveDate {
        self.bounds.default_min()
    }

    pub fn set_default_min(&mut self, default_min: NaiveDate) -> &mut Self {
        self.bounds.set_default_min(default_min);
        self
    }

    pub fn default_max(&self) -> NaiveDate {
        self.bounds.default_max()
    }

    pub fn set_default_max(&mut self, default_max: NaiveDate) -> &mut Self {
        self.bounds.set_default_max(default_max);
        self
    }

    fn resolve_single(&self, value: NaiveDateTime) -> DomainResult<FilterCall> {
        let Some(comparison) = self.values.single_type().comparison() else {
            // exact matches keep whatever time of day the value carries
            return Ok(FilterCall::Exact {
                field: self.field_name.clone(),
                values: vec![AttributeValue::Int(timestamp(value))],
                exclude: self.exclude,
            });
        };

        let bounds = resolve_single(&self.bounds.domain(), midnight(value), comparison)?;
        Ok(FilterCall::Range {
            field: self.field_name.clone(),
            min: timestamp(bounds.min),
            max: timestamp(bounds.max),
            exclude: self.exclude,
        })
    }

    fn resolve_ranged(&self) -> DomainResult<FilterCall> {
        let bounds = resolve_ranged(
            &self.bounds.domain(),
            self.values.from_value().copied().map(midnight),
            self.values.to_value().copied().map(midnight),
            self.values.ranged_from_type(),
            self.values.ranged_to_type(),
        )?;
        Ok(FilterCall::Range {
            field: self.field_name.clone(),
            min: timestamp(bounds.min),
            max: timestamp(end_of_day(bounds.max)),
            exclude: self.exclude,
        })
    }
}

/// Bounds are resolved per calendar day.
fn midnight(value: NaiveDateTime) -> NaiveDateTime {
    start_of_day(value.date())
}

fn expect_date(name: &str, value: &OptionValue) -> DomainResult<NaiveDate> {
    let text = expect_text(name, value)?;
    parse_datetime(text)
        .map(|value| value.date())
        .ok_or_else(|| DomainError::invalid_argument(name, format!("'{text}' is not a date")))
}

impl RangeOrSingleFilter for DateFilter {
    type Value = NaiveDateTime;

    fn range_or_single(&self) -> &RangeOrSingle<NaiveDateTime> {
        &self.values
    }

    fn range_or_single_mut(&mut self) -> &mut RangeOrSingle<NaiveDateTime> {
        &mut self.values
    }
}

impl Configurable for DateFilter {
    fn valid_options(&self) -> Vec<OptionDescriptor> {
        let mut options = range_or_single_options();
        options.extend([
            exclude_option(),
            OptionDescriptor::new("default_min", &[OptionKind::Date]),
            OptionDescriptor::new("default_max", &[OptionKind::Date]),
        ]);
        options
    }

    fn set_option(&mut self, name: &str, value: &OptionValue) -> DomainResult<()> {
        match name {
            "field_name" => {
                self.set_field_name(expect_text(name, value)?);
            }
            "exclude" => {
                self.set_exclude(expect_bool(name, value)?);
            }
            "default_min" => {
                self.set_default_min(expect_date(name, value)?);
            }
            "default_max" => {
                self.set_default_max(expect_date(name, value)?);
            }
            other => self.values.set_option(other, value)?,
        }
        Ok(())
    }
}

impl Filter for DateFilter {
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
