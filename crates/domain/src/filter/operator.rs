// crates/domain/src/filter/operator.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Operator of a single-value filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingleType {
    #[default]
    Exact,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

/// Non-exact comparison; the part of [`SingleType`] that needs bounds resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

/// Operator on the lower edge of a ranged filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangedFromType {
    Greater,
    #[default]
    GreaterOrEqual,
}

/// Operator on the upper edge of a ranged filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangedToType {
    Less,
    #[default]
    LessOrEqual,
}

impl SingleType {
    pub const ALL: [Self; 5] = [Self::Exact, Self::Greater, Self::GreaterOrEqual, Self::Less, Self::LessOrEqual];

    /// `None` for [`SingleType::Exact`].
    pub const fn comparison(self) -> Option<Comparison> {
        match self {
            Self::Exact => None,
            Self::Greater => Some(Comparison::Greater),
            Self::GreaterOrEqual => Some(Comparison::GreaterOrEqual),
            Self::Less => Some(Comparison::Less),
            Self::LessOrEqual => Some(Comparison::LessOrEqual),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Greater => "greater",
            Self::GreaterOrEqual => "greater_or_equal",
            Self::Less => "less",
            Self::LessOrEqual => "less_or_equal",
        }
    }
}

impl Comparison {
    /// `true` when the single value becomes the lower bound.
    pub const fn is_lower_bound(self) -> bool {
        matches!(self, Self::Greater | Self::GreaterOrEqual)
    }
}

impl RangedFromType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Greater => "greater",
            Self::GreaterOrEqual => "greater_or_equal",
        }
    }
}

impl RangedToType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Less => "less",
            Self::LessOrEqual => "less_or_equal",
        }
    }
}

impl FromStr for SingleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "greater" => Ok(Self::Greater),
            "greater_or_equal" => Ok(Self::GreaterOrEqual),
            "less" => Ok(Self::Less),
            "less_or_equal" => Ok(Self::LessOrEqual),
            other => Err(format!("Unknown single type: {other}")),
        }
    }
}

impl FromStr for RangedFromType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greater" => Ok(Self::Greater),
            "greater_or_equal" => Ok(Self::GreaterOrEqual),
            other => Err(format!("Unknown ranged from type: {other}")),
        }
    }
}

impl FromStr for RangedToType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "less" => Ok(Self::Less),
            "less_or_equal" => Ok(Self::LessOrEqual),
            other => Err(format!("Unknown ranged to type: {other}")),
        }
    }
}

impl fmt::Display for SingleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RangedFromType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RangedToType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
