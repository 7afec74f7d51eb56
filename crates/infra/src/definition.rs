// crates/infra/src/definition.rs
//! Filter definitions read from JSON or YAML documents.
//!
//! ```json
//! { "filters": [
//!     { "kind": "number", "name": "price",
//!       "options": { "default_max": 999, "ranged_to_type": "less" },
//!       "to": 200 }
//! ] }
//! ```

use std::{collections::BTreeMap, path::Path};

use chrono::NaiveDateTime;
use log::debug;
use serde::{Deserialize, Serialize};
use sphinx_filtration_domain::{
    ChoiceFilter, DateFilter, Filter, Number, NumberFilter, OptionValue, RangeOrSingleFilter, TextFilter,
    apply_options, bounds::date::parse_datetime,
};
use sphinx_filtration_shared_kernel::{DomainError, DomainResult, ErrorContext, InfrastructureError, Result};

use crate::persistence::FileReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Number,
    Date,
    Choice,
    Text,
}

/// One filter as written in a definition document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterDefinition {
    pub kind: FilterKind,
    /// Attribute the filter targets.
    pub name: String,
    #[serde(default)]
    pub options: BTreeMap<String, OptionValue>,
    /// Applied value in single mode, or the text of a text filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<OptionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<OptionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<OptionValue>,
    /// Selected identifiers of a choice filter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefinitionDocument {
    #[serde(default)]
    pub filters: Vec<FilterDefinition>,
}

impl DefinitionDocument {
    /// Builds every filter, in document order.
    pub fn build(&self) -> Result<Vec<Box<dyn Filter>>> {
        self.filters.iter().map(build_filter).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl DefinitionFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(Self::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(InfrastructureError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }
            .into()),
        }
    }

    pub fn parse(self, text: &str) -> Result<DefinitionDocument> {
        match self {
            Self::Json => Ok(serde_json::from_str(text)?),
            #[cfg(feature = "yaml")]
            Self::Yaml => Ok(serde_yaml::from_str(text)?),
        }
    }
}

/// Reads and parses the definition document at `path`.
pub fn load_definitions(path: &Path) -> Result<DefinitionDocument> {
    let format = DefinitionFormat::from_path(path)?;
    let text = FileReader::read_to_string(path)?;
    let document = format
        .parse(&text)
        .with_context(|| format!("Failed to load filter definitions from {}", path.display()))?;
    debug!("loaded {} filter definition(s) from {}", document.filters.len(), path.display());
    Ok(document)
}

/// Constructs and configures the filter described by `definition`.
pub fn build_filter(definition: &FilterDefinition) -> Result<Box<dyn Filter>> {
    build(definition).with_context(|| format!("Invalid definition for filter \"{}\"", definition.name))
}

fn build(definition: &FilterDefinition) -> DomainResult<Box<dyn Filter>> {
    let name = definition.name.as_str();
    let filter: Box<dyn Filter> = match definition.kind {
        FilterKind::Number => {
            let mut filter = NumberFilter::new(name);
            apply_options(&mut filter, &definition.options)?;
            apply_values(&mut filter, definition, number_value)?;
            Box::new(filter)
        }
        FilterKind::Date => {
            let mut filter = DateFilter::new(name);
            apply_options(&mut filter, &definition.options)?;
            apply_values(&mut filter, definition, date_value)?;
            Box::new(filter)
        }
        FilterKind::Choice => {
            let mut filter = ChoiceFilter::new(name);
            apply_options(&mut filter, &definition.options)?;
            filter.set_values(definition.values.iter().copied());
            Box::new(filter)
        }
        FilterKind::Text => {
            let mut filter = TextFilter::new(name);
            apply_options(&mut filter, &definition.options)?;
            match &definition.value {
                Some(OptionValue::Text(text)) => {
                    filter.set_value(text.as_str());
                }
                Some(other) => {
                    return Err(DomainError::invalid_argument("value", format!("expected text, got {other:?}")));
                }
                None => {}
            }
            Box::new(filter)
        }
    };
    Ok(filter)
}

fn apply_values<F, V>(
    filter: &mut F,
    definition: &FilterDefinition,
    convert: fn(&str, &OptionValue) -> DomainResult<V>,
) -> DomainResult<()>
where
    F: RangeOrSingleFilter<Value = V>,
{
    if let Some(value) = &definition.value {
        filter.set_value(convert("value", value)?);
    }
    if let Some(from) = &definition.from {
        filter.set_from_value(convert("from", from)?);
    }
    if let Some(to) = &definition.to {
        filter.set_to_value(convert("to", to)?);
    }
    Ok(())
}

fn number_value(field: &str, value: &OptionValue) -> DomainResult<Number> {
    match value {
        OptionValue::Int(int) => Ok(Number::Int(*int)),
        OptionValue::Float(float) if float.is_finite() => Ok(Number::Float(*float)),
        other => Err(DomainError::invalid_argument(field, format!("expected a finite number, got {other:?}"))),
    }
}

fn date_value(field: &str, value: &OptionValue) -> DomainResult<NaiveDateTime> {
    match value {
        OptionValue::Text(text) => parse_datetime(text)
            .ok_or_else(|| DomainError::invalid_argument(field, format!("expected a date, got \"{text}\""))),
        other => Err(DomainError::invalid_argument(field, format!("expected a date, got {other:?}"))),
    }
}
