// crates/domain/src/bounds.rs
pub mod date;
pub mod numeric;
pub mod resolver;

pub use date::{DateBounds, DateDomain};
pub use numeric::{FloatDomain, IntDomain, NumericBounds};
pub use resolver::{Bounds, BoundsDomain, ensure_ordered_defaults, resolve_ranged, resolve_single};
