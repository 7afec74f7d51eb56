// crates/domain/src/filters.rs
pub mod choice;
pub mod date;
pub mod entity;
pub mod number;
pub mod text;

pub use choice::ChoiceFilter;
pub use date::DateFilter;
pub use entity::{EntityFilter, Identifiable};
pub use number::NumberFilter;
pub use text::TextFilter;
