// crates/domain/src/filter.rs
pub mod call;
pub mod operator;
pub mod options;
pub mod range_or_single;

pub use call::FilterCall;
pub use operator::{Comparison, RangedFromType, RangedToType, SingleType};
pub use options::{Configurable, OptionDescriptor, OptionKind, OptionValue, apply_options};
pub use range_or_single::{RangeOrSingle, RangeOrSingleFilter};
use sphinx_filtration_shared_kernel::{DomainResult, FieldName};

/// A single filter criterion, consumed once per query-build pass.
pub trait Filter: Configurable {
    fn field_name(&self) -> &FieldName;

    fn is_exclude(&self) -> bool;

    fn has_applied_value(&self) -> bool;

    /// Resolves the applied value into the call to emit, or `None` when the
    /// filter contributes nothing to the query.
    fn resolve(&self) -> DomainResult<Option<FilterCall>>;
}
