// crates/domain/src/filters/text.rs
use sphinx_filtration_shared_kernel::{DomainResult, FieldName};

use crate::filter::{
    Configurable, Filter, FilterCall, OptionDescriptor, OptionValue,
    options::{expect_text, field_name_option, unknown_option},
};

/// Free-text filter. The range/exact filter API cannot express text search,
/// so resolution never emits a call; callers read [`TextFilter::value`] and
/// build the full-text query themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFilter {
    field_name: FieldName,
    value: Option<String>,
    exclude: bool,
}

impl TextFilter {
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

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = Some(value.into());
        self
    }

    pub fn clear_value(&mut self) -> &mut Self {
        self.value = None;
        self
    }

    pub fn set_exclude(&mut self, exclude: bool) -> &mut Self {
        self.exclude = exclude;
        self
    }
}

impl Configurable for TextFilter {
    fn valid_options(&self) -> Vec<OptionDescriptor> {
        vec![field_name_option()]
    }

    fn set_option(&mut self, name: &str, value: &OptionValue) -> DomainResult<()> {
        match name {
            "field_name" => {
                self.set_field_name(expect_text(name, value)?);
            }
            other => return Err(unknown_option(other)),
        }
        Ok(())
    }
}

impl Filter for TextFilter {
    fn field_name(&self) -> &FieldName {
        &self.field_name
    }

    fn is_exclude(&self) -> bool {
        self.exclude
    }

    fn has_applied_value(&self) -> bool {
        self.value.as_deref().is_some_and(|text| !text.trim().is_empty())
    }

    fn resolve(&self) -> DomainResult<Option<FilterCall>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_emits_a_call() {
        let mut filter = TextFilter::new("title");
        filter.set_value("rust book").set_exclude(true);
        assert!(filter.has_applied_value());
        assert_eq!(filter.value(), Some("rust book"));
        assert_eq!(filter.resolve(), Ok(None));
    }

    #[test]
    fn blank_text_is_not_applied() {
        let mut filter = TextFilter::new("title");
        assert!(!filter.has_applied_value());
        filter.set_value("   ");
        assert!(!filter.has_applied_value());
        filter.clear_value();
        assert_eq!(filter.value(), None);
    }

    #[test]
    fn exclude_is_not_a_declared_option() {
        let mut filter = TextFilter::default();
        assert_eq!(filter.valid_options().len(), 1);
        assert!(filter.set_option("exclude", &OptionValue::Bool(true)).is_err());
    }
}
