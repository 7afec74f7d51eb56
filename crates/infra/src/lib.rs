// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod definition;
pub mod persistence;
pub mod recording;

pub use definition::{DefinitionDocument, DefinitionFormat, FilterDefinition, FilterKind, build_filter, load_definitions};
pub use recording::RecordingSphinxClient;
