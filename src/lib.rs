//! # sphinx_filtration
//!
//! Resolves user filter criteria into the inclusive filter calls a
//! Sphinx-style search client understands.
//!
//! The client only accepts exact/set-membership filters and inclusive
//! integer or float ranges. Open-ended ranges and strict comparisons are
//! turned into concrete `[min, max]` pairs against configurable default
//! bounds before anything reaches the client.
//!
//! ```
//! use sphinx_filtration::{ApplyFilter, FilterCall, NumberFilter, RangeOrSingleFilter, RecordingSphinxClient, SingleType};
//!
//! let mut price = NumberFilter::new("price");
//! price.set_single(true).set_single_type(SingleType::Greater).set_value(100);
//! price.set_default_max(999)?;
//!
//! let mut client = RecordingSphinxClient::new();
//! price.apply_filter(&mut client)?;
//! assert_eq!(
//!     client.calls(),
//!     [FilterCall::Range { field: "price".into(), min: 101, max: 999, exclude: false }]
//! );
//! # Ok::<(), sphinx_filtration::FiltrationError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub use sphinx_filtration_domain as domain;
pub use sphinx_filtration_infra as infra;
pub use sphinx_filtration_ports as ports;
pub use sphinx_filtration_shared_kernel as shared_kernel;
pub use sphinx_filtration_usecase as usecase;

pub use sphinx_filtration_domain::{
    Bounds, BoundsDomain, ChoiceFilter, Comparison, Configurable, DateBounds, DateFilter, EntityFilter, Filter,
    FilterCall, Identifiable, Number, NumberFilter, NumericBounds, OptionDescriptor, OptionKind, OptionValue,
    RangeOrSingle, RangeOrSingleFilter, RangedFromType, RangedToType, SingleType, TextFilter,
    apply_options,
};
pub use sphinx_filtration_infra::{
    DefinitionDocument, DefinitionFormat, FilterDefinition, FilterKind, RecordingSphinxClient, build_filter,
    load_definitions,
};
pub use sphinx_filtration_ports::{QueryHandler, SphinxClient};
pub use sphinx_filtration_shared_kernel::{
    ApplicationError, AttributeValue, DomainError, ErrorContext, FieldName, FiltrationError, InfrastructureError, Result,
};
pub use sphinx_filtration_usecase::{ApplyFilter, ApplyFilters, ApplyOutcome, bind, ensure_sphinx_client};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
