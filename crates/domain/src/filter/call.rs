// crates/domain/src/filter/call.rs
use serde::{Deserialize, Serialize};
use sphinx_filtration_shared_kernel::{AttributeValue, FieldName};

/// Resolved filter call, independent of any concrete search client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum FilterCall {
    /// Set membership / equality.
    Exact {
        field: FieldName,
        values: Vec<AttributeValue>,
        exclude: bool,
    },
    /// Inclusive integer range.
    Range {
        field: FieldName,
        min: i64,
        max: i64,
        exclude: bool,
    },
    /// Inclusive float range.
    FloatRange {
        field: FieldName,
        min: f64,
        max: f64,
        exclude: bool,
    },
}

impl FilterCall {
    pub fn field(&self) -> &FieldName {
        match self {
            Self::Exact { field, .. } | Self::Range { field, .. } | Self::FloatRange { field, .. } => field,
        }
    }

    pub fn exclude(&self) -> bool {
        match self {
            Self::Exact { exclude, .. } | Self::Range { exclude, .. } | Self::FloatRange { exclude, .. } => *exclude,
        }
    }

    /// Name of the client operation this call maps to.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Exact { .. } => "SetFilter",
            Self::Range { .. } => "SetFilterRange",
            Self::FloatRange { .. } => "SetFilterFloatRange",
        }
    }
}
