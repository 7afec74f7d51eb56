// crates/ports/src/sphinx.rs
use sphinx_filtration_shared_kernel::{AttributeValue, FieldName, Result};

/// Filter surface of a Sphinx-style search client.
///
/// Only exact/set-membership filters and inclusive ranges exist; open-ended
/// and strict comparisons are resolved into these before they reach the client.
pub trait SphinxClient {
    fn set_filter(&mut self, field: &FieldName, values: &[AttributeValue], exclude: bool) -> Result<()>;

    fn set_filter_range(&mut self, field: &FieldName, min: i64, max: i64, exclude: bool) -> Result<()>;

    fn set_filter_float_range(&mut self, field: &FieldName, min: f64, max: f64, exclude: bool) -> Result<()>;
}

impl<C: SphinxClient + ?Sized> SphinxClient for &mut C {
    fn set_filter(&mut self, field: &FieldName, values: &[AttributeValue], exclude: bool) -> Result<()> {
        (**self).set_filter(field, values, exclude)
    }

    fn set_filter_range(&mut self, field: &FieldName, min: i64, max: i64, exclude: bool) -> Result<()> {
        (**self).set_filter_range(field, min, max, exclude)
    }

    fn set_filter_float_range(&mut self, field: &FieldName, min: f64, max: f64, exclude: bool) -> Result<()> {
        (**self).set_filter_float_range(field, min, max, exclude)
    }
}
