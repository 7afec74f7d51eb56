// crates/domain/src/filters/entity.rs
use sphinx_filtration_shared_kernel::{AttributeValue, DomainResult, FieldName};

use crate::filter::{
    Configurable, Filter, FilterCall, OptionDescriptor, OptionValue,
    options::{exclude_option, expect_bool, expect_text, field_name_option, unknown_option},
};

/// Exposes the index identifier of a referenced entity.
pub trait Identifiable {
    fn identifier(&self) -> i64;
}

impl<T: Identifiable + ?Sized> Identifiable for &T {
    fn identifier(&self) -> i64 {
        (**self).identifier()
    }
}

/// Entity-reference filter; entities are reduced to their identifiers and
/// emitted as one set-membership call.
#[derive(Debug, Clone)]
pub struct EntityFilter<E> {
    field_name: FieldName,
    entities: Vec<E>,
    exclude: bool,
}

impl<E> Default for EntityFilter<E> {
    fn default() -> Self {
        Self {
            field_name: FieldName::default(),
            entities: Vec::new(),
            exclude: false,
        }
    }
}

impl<E> EntityFilter<E> {
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

    pub fn entities(&self) -> &[E] {
        &self.entities
    }

    pub fn set_entities(&mut self, entities: impl IntoIterator<Item = E>) -> &mut Self {
        self.entities = entities.into_iter().collect();
        self
    }

    pub fn set_exclude(&mut self, exclude: bool) -> &mut Self {
        self.exclude = exclude;
        self
    }
}

impl<E> Configurable for EntityFilter<E> {
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

impl<E: Identifiable> Filter for EntityFilter<E> {
    fn field_name(&self) -> &FieldName {
        &self.field_name
    }

    fn is_exclude(&self) -> bool {
        self.exclude
    }

    fn has_applied_value(&self) -> bool {
        !self.entities.is_empty()
    }

    fn resolve(&self) -> DomainResult<Option<FilterCall>> {
        if !self.has_applied_value() {
            return Ok(None);
        }
        Ok(Some(FilterCall::Exact {
            field: self.field_name.clone(),
            values: self
                .entities
                .iter()
                .map(|entity| AttributeValue::Int(entity.identifier()))
                .collect(),
            exclude: self.exclude,
        }))
    }
}
