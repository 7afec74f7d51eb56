//! # Use Cases
//!
//! Binding of resolved filters onto a query handler.
//!
//! - [`binding`]: target-type guard, resolution and dispatch of one filter
//! - [`orchestrator`]: a full pass over the filters of one query
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod binding;
pub mod dto;
pub mod orchestrator;

pub use binding::{ApplyFilter, EXPECTED_HANDLER, bind, dispatch, ensure_sphinx_client};
pub use dto::ApplyOutcome;
pub use orchestrator::ApplyFilters;
