// crates/usecase/src/dto.rs
use serde::Serialize;
use sphinx_filtration_domain::FilterCall;
use sphinx_filtration_shared_kernel::FieldName;

/// Result of applying a set of filters to one handler.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApplyOutcome {
    /// Calls forwarded to the client, in filter order.
    pub emitted: Vec<FilterCall>,
    /// Fields whose filter contributed nothing to the query.
    pub skipped: Vec<FieldName>,
}
