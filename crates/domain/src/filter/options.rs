// crates/domain/src/filter/options.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sphinx_filtration_shared_kernel::{DomainError, DomainResult};

use crate::value_objects::Number;

/// Value kinds an option may accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    Bool,
    Int,
    Float,
    Text,
    /// Text holding `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`.
    Date,
}

/// Raw option value as it arrives from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl OptionValue {
    pub fn kind(&self) -> OptionKind {
        match self {
            Self::Bool(_) => OptionKind::Bool,
            Self::Int(_) => OptionKind::Int,
            Self::Float(_) => OptionKind::Float,
            Self::Text(_) => OptionKind::Text,
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "string",
        }
    }

    fn is_empty(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Declares one option a filter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDescriptor {
    pub name: &'static str,
    pub kinds: &'static [OptionKind],
    pub allow_empty: bool,
}

impl OptionDescriptor {
    pub const fn new(name: &'static str, kinds: &'static [OptionKind]) -> Self {
        Self { name, kinds, allow_empty: false }
    }

    pub fn accepts(&self, value: &OptionValue) -> bool {
        let kind = value.kind();
        self.kinds
            .iter()
            .any(|accepted| *accepted == kind || (*accepted == OptionKind::Date && kind == OptionKind::Text))
    }
}

/// Something that can be configured from an option map.
pub trait Configurable {
    /// Every option this filter understands, base options first.
    fn valid_options(&self) -> Vec<OptionDescriptor>;

    fn set_option(&mut self, name: &str, value: &OptionValue) -> DomainResult<()>;
}

/// Validates every entry against the declared options and forwards it to the setter.
pub fn apply_options<C>(target: &mut C, options: &BTreeMap<String, OptionValue>) -> DomainResult<()>
where
    C: Configurable + ?Sized,
{
    let descriptors = target.valid_options();
    for (name, value) in options {
        let Some(descriptor) = descriptors.iter().find(|d| d.name == name) else {
            return Err(unknown_option(name));
        };
        if !descriptor.accepts(value) {
            return Err(DomainError::invalid_argument(
                name.as_str(),
                format!("unexpected {} value", value.type_name()),
            ));
        }
        if !descriptor.allow_empty && value.is_empty() {
            return Err(DomainError::invalid_argument(name.as_str(), "must not be empty"));
        }
        target.set_option(name, value)?;
    }
    Ok(())
}

pub const fn field_name_option() -> OptionDescriptor {
    OptionDescriptor::new("field_name", &[OptionKind::Text])
}

pub const fn exclude_option() -> OptionDescriptor {
    OptionDescriptor::new("exclude", &[OptionKind::Bool])
}

/// Options understood by every filter embedding a range-or-single value.
pub fn range_or_single_options() -> Vec<OptionDescriptor> {
    vec![
        field_name_option(),
        OptionDescriptor::new("single", &[OptionKind::Bool]),
        OptionDescriptor::new("single_type", &[OptionKind::Text]),
        OptionDescriptor::new("ranged_from_type", &[OptionKind::Text]),
        OptionDescriptor::new("ranged_to_type", &[OptionKind::Text]),
    ]
}

pub(crate) fn unknown_option(name: &str) -> DomainError {
    DomainError::invalid_argument(name, "unknown option")
}

pub(crate) fn expect_bool(name: &str, value: &OptionValue) -> DomainResult<bool> {
    match value {
        OptionValue::Bool(flag) => Ok(*flag),
        other => Err(mismatch(name, "bool", other)),
    }
}

pub(crate) fn expect_number(name: &str, value: &OptionValue) -> DomainResult<Number> {
    match value {
        OptionValue::Int(int) => Ok(Number::Int(*int)),
        OptionValue::Float(float) => Ok(Number::Float(*float)),
        other => Err(mismatch(name, "int or float", other)),
    }
}

pub(crate) fn expect_float(name: &str, value: &OptionValue) -> DomainResult<f64> {
    match value {
        OptionValue::Float(float) => Ok(*float),
        other => Err(mismatch(name, "float", other)),
    }
}

pub(crate) fn expect_text<'a>(name: &str, value: &'a OptionValue) -> DomainResult<&'a str> {
    match value {
        OptionValue::Text(text) => Ok(text),
        other => Err(mismatch(name, "string", other)),
    }
}

fn mismatch(name: &str, expected: &str, value: &OptionValue) -> DomainError {
    DomainError::invalid_argument(name, format!("expected {expected}, got {}", value.type_name()))
}
