//! # Ports
//!
//! Interface definitions for the search client the filters are bound to.
//!
//! - [`sphinx`]: the three filter calls a Sphinx-style client accepts
//! - [`handler`]: query handlers presented to the binding step, which may or
//!   may not be a Sphinx client
//!
//! Neither trait executes queries; adapters live in the infrastructure crate.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod handler;
pub mod sphinx;

pub use handler::QueryHandler;
pub use sphinx::SphinxClient;
