// crates/domain/src/filters/choice.rs
use sphinx_filtration_shared_kernel::{AttributeValue, DomainResult, FieldName};

use crate::filter::{
    Configurable, Filter, FilterCall, OptionDescriptor, OptionValue,
    options::{exclude_option, expect_bool, expect_text, field_name_option, unknown_option},
};

/// Discrete-choice filter emitted as a single set-membership call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceFilter {
    field_name: FieldName,
    values: Vec<i64>,
    exclude: bool,
}

impl ChoiceFilter {
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

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn set_values(&mut self, values: impl IntoIterator<Item = i64>) -> &mut Self {
        self.values = values.into_iter().collect();
        self
    }

    pub fn set_exclude(&mut self, exclude: bool) -> &mut Self {
        self.exclude = exclude;
        self
    }
}

impl Configurable for ChoiceFilter {
    fn valid_options(&self) -> Vec<OptionDescriptor> {
        vec![field_name_option(), exclude_option()]
    }

    fn set_option(&mut self, name: &str, value: &OptionValue) -> DomainResult<()> {
        match name {
            "field_name" => {
                self.set_field_name(expect_text(name, value)?);
            }
            "exclude" => {
                self.set_exclude(expect_bool(name, value)?);
            }
            other => return Err(unknown_option(other)),
        }
        Ok(())
    }
}

impl Filter for ChoiceFilter {
    fn field_name(&self) -> &FieldName {
        &self.field_name
    }

    fn is_exclude(&self) -> bool {
        self.exclude
    }

    fn has_applied_value(&self) -> bool {
        !self.values.is_empty()
    }

    fn resolve(&self) -> DomainResult<Option<FilterCall>> {
        if !self.has_applied_value() {
            return Ok(None);
        }
        Ok(Some(FilterCall::Exact {
            field: self.field_name.clone(),
            values: self.values.iter().copied().map(AttributeValue::Int).collect(),
            exclude: self.exclude,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_choice_is_a_no_op() {
        let filter = ChoiceFilter::new("color");
        assert!(!filter.has_applied_value());
        assert_eq!(filter.resolve(), Ok(None));
    }

    #[test]
    fn emits_every_value_in_one_call() {
        let mut filter = ChoiceFilter::new("color");
        filter.set_values([1, 2, 3]).set_exclude(true);
        assert_eq!(
            filter.resolve(),
            Ok(Some(FilterCall::Exact {
                field: "color".into(),
                values: vec![AttributeValue::Int(1), AttributeValue::Int(2), AttributeValue::Int(3)],
                exclude: true,
            }))
        );
    }

    #[test]
    fn only_exclude_is_added_to_the_base_options() {
        let filter = ChoiceFilter::default();
        let names: Vec<_> = filter.valid_options().iter().map(|o| o.name).collect();
        assert_eq!(names, ["field_name", "exclude"]);
    }
}
