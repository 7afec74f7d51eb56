// crates/domain/src/value_objects/number.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use sphinx_filtration_shared_kernel::AttributeValue;

/// Numeric filter value as supplied by the caller, before it is converted to
/// the integer or float working mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Integer view; floats truncate toward zero and saturate at the `i64` limits.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_int(self) -> i64 {
        match self {
            Self::Int(value) => value,
            Self::Float(value) => value as i64,
        }
    }

    #[inline]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_float(self) -> f64 {
        match self {
            Self::Int(value) => value as f64,
            Self::Float(value) => value,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Float(value) => value.is_finite(),
        }
    }

    /// Converts to the exact-match payload for the given working mode.
    #[inline]
    pub fn to_attribute(self, float: bool) -> AttributeValue {
        if float {
            AttributeValue::Float(self.to_float())
        } else {
            AttributeValue::Int(self.to_int())
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}
