//! # Domain
//!
//! Filter value objects and the bounds resolution that turns them into
//! inclusive `[min, max]` calls.
//!
//! - [`filter`]: the [`Filter`] capability, operators, the range-or-single value holder
//!   and declared options
//! - [`bounds`]: default bounds and the generic resolver shared by every value domain
//! - [`filters`]: number, date, choice, entity and text filters
//!
//! Nothing here talks to a search client; resolution yields a [`FilterCall`] that the
//! binding layer dispatches.

#![allow(clippy::multiple_crate_versions)]

pub mod bounds;
pub mod filter;
pub mod filters;
pub mod value_objects;

pub use bounds::{Bounds, BoundsDomain, DateBounds, NumericBounds};
pub use filter::{
    Comparison, Configurable, Filter, FilterCall, OptionDescriptor, OptionKind, OptionValue, RangeOrSingle,
    RangeOrSingleFilter, RangedFromType, RangedToType, SingleType, apply_options,
};
pub use filters::{ChoiceFilter, DateFilter, EntityFilter, Identifiable, NumberFilter, TextFilter};
pub use value_objects::Number;
