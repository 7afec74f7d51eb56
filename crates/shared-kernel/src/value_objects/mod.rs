// crates/shared-kernel/src/value_objects/mod.rs
pub mod attribute_value;
pub mod field_name;

pub use attribute_value::AttributeValue;
pub use field_name::FieldName;
