// crates/domain/src/filter/range_or_single.rs
use super::{
    operator::{RangedFromType, RangedToType, SingleType},
    options::{OptionValue, expect_bool, expect_text, unknown_option},
};
use sphinx_filtration_shared_kernel::{DomainError, DomainResult};

/// Applied value(s) of a filter that works either on one value with an
/// operator, or on a from/to pair with independent edge operators.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeOrSingle<T> {
    single: bool,
    value: Option<T>,
    single_type: SingleType,
    from_value: Option<T>,
    to_value: Option<T>,
    ranged_from_type: RangedFromType,
    ranged_to_type: RangedToType,
}

impl<T> Default for RangeOrSingle<T> {
    fn default() -> Self {
        Self {
            single: false,
            value: None,
            single_type: SingleType::default(),
            from_value: None,
            to_value: None,
            ranged_from_type: RangedFromType::default(),
            ranged_to_type: RangedToType::default(),
        }
    }
}

impl<T> RangeOrSingle<T> {
    pub fn is_single(&self) -> bool {
        self.single
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn single_type(&self) -> SingleType {
        self.single_type
    }

    pub fn from_value(&self) -> Option<&T> {
        self.from_value.as_ref()
    }

    pub fn to_value(&self) -> Option<&T> {
        self.to_value.as_ref()
    }

    pub fn ranged_from_type(&self) -> RangedFromType {
        self.ranged_from_type
    }

    pub fn ranged_to_type(&self) -> RangedToType {
        self.ranged_to_type
    }

    /// Single mode looks at `value` only; ranged mode at either edge.
    pub fn has_applied_value(&self) -> bool {
        if self.single {
            self.value.is_some()
        } else {
            self.from_value.is_some() || self.to_value.is_some()
        }
    }

    /// Applies one of the shared `single`/`*_type` options.
    pub fn set_option(&mut self, name: &str, value: &OptionValue) -> DomainResult<()> {
        match name {
            "single" => self.single = expect_bool(name, value)?,
            "single_type" => self.single_type = parse_operator(name, expect_text(name, value)?)?,
            "ranged_from_type" => self.ranged_from_type = parse_operator(name, expect_text(name, value)?)?,
            "ranged_to_type" => self.ranged_to_type = parse_operator(name, expect_text(name, value)?)?,
            other => return Err(unknown_option(other)),
        }
        Ok(())
    }
}

fn parse_operator<O>(name: &str, text: &str) -> DomainResult<O>
where
    O: std::str::FromStr<Err = String>,
{
    text.parse().map_err(|reason| DomainError::invalid_argument(name, reason))
}

/// Setters shared by every filter that embeds a [`RangeOrSingle`].
pub trait RangeOrSingleFilter {
    type Value;

    fn range_or_single(&self) -> &RangeOrSingle<Self::Value>;

    fn range_or_single_mut(&mut self) -> &mut RangeOrSingle<Self::Value>;

    fn set_single(&mut self, single: bool) -> &mut Self {
        self.range_or_single_mut().single = single;
        self
    }

    fn set_value(&mut self, value: impl Into<Self::Value>) -> &mut Self {
        self.range_or_single_mut().value = Some(value.into());
        self
    }

    fn clear_value(&mut self) -> &mut Self {
        self.range_or_single_mut().value = None;
        self
    }

    fn set_single_type(&mut self, single_type: SingleType) -> &mut Self {
        self.range_or_single_mut().single_type = single_type;
        self
    }

    fn set_from_value(&mut self, value: impl Into<Self::Value>) -> &mut Self {
        self.range_or_single_mut().from_value = Some(value.into());
        self
    }

    fn clear_from_value(&mut self) -> &mut Self {
        self.range_or_single_mut().from_value = None;
        self
    }

    fn set_to_value(&mut self, value: impl Into<Self::Value>) -> &mut Self {
        self.range_or_single_mut().to_value = Some(value.into());
        self
    }

    fn clear_to_value(&mut self) -> &mut Self {
        self.range_or_single_mut().to_value = None;
        self
    }

    fn set_ranged_from_type(&mut self, from_type: RangedFromType) -> &mut Self {
        self.range_or_single_mut().ranged_from_type = from_type;
        self
    }

    fn set_ranged_to_type(&mut self, to_type: RangedToType) -> &mut Self {
        self.range_or_single_mut().ranged_to_type = to_type;
        self
    }
}
