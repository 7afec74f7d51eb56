// crates/usecase/src/orchestrator.rs
use log::debug;
use sphinx_filtration_domain::Filter;
use sphinx_filtration_ports::QueryHandler;
use sphinx_filtration_shared_kernel::Result;

use crate::{
    binding::{bind, ensure_sphinx_client},
    dto::ApplyOutcome,
};

/// Applies every filter of one query to a single handler.
pub struct ApplyFilters<'a, H: QueryHandler + ?Sized> {
    handler: &'a mut H,
}

impl<'a, H: QueryHandler + ?Sized> ApplyFilters<'a, H> {
    pub fn new(handler: &'a mut H) -> Self {
        Self { handler }
    }

    /// Stops at the first failing filter; calls already forwarded stay with the client.
    pub fn run(&mut self, filters: &[Box<dyn Filter>]) -> Result<ApplyOutcome> {
        ensure_sphinx_client(&mut *self.handler)?;

        let mut outcome = ApplyOutcome::default();
        for filter in filters {
            match bind(&**filter, &mut *self.handler)? {
                Some(call) => outcome.emitted.push(call),
                None => outcome.skipped.push(filter.field_name().clone()),
            }
        }
        debug!(
            "applied {} filter(s): {} emitted, {} skipped",
            filters.len(),
            outcome.emitted.len(),
            outcome.skipped.len()
        );
        Ok(outcome)
    }
}
