// tests/common/mod.rs
//! Shared test utilities

pub mod fixtures;
pub mod mocks;
pub mod temp;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mocks::*;
#[allow(unused_imports)]
pub use temp::DefinitionFile;
