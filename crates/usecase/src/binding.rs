// crates/usecase/src/binding.rs
use log::{debug, trace};
use sphinx_filtration_domain::{Filter, FilterCall};
use sphinx_filtration_ports::{QueryHandler, SphinxClient};
use sphinx_filtration_shared_kernel::{ApplicationError, ApplicationResult, Result};

/// Capability every filter handler must expose.
pub const EXPECTED_HANDLER: &str = "SphinxClient";

/// Narrows `handler` to the Sphinx client it must be.
pub fn ensure_sphinx_client<H>(handler: &mut H) -> ApplicationResult<&mut dyn SphinxClient>
where
    H: QueryHandler + ?Sized,
{
    let name = handler.handler_name().to_owned();
    handler.as_sphinx_client().ok_or(ApplicationError::InvalidHandler {
        handler: name,
        expected: EXPECTED_HANDLER.to_owned(),
    })
}

/// Forwards one resolved call to the matching client method.
pub fn dispatch(client: &mut dyn SphinxClient, call: &FilterCall) -> Result<()> {
    match call {
        FilterCall::Exact { field, values, exclude } => client.set_filter(field, values, *exclude),
        FilterCall::Range { field, min, max, exclude } => client.set_filter_range(field, *min, *max, *exclude),
        FilterCall::FloatRange { field, min, max, exclude } => {
            client.set_filter_float_range(field, *min, *max, *exclude)
        }
    }
}

/// Guards the handler, resolves `filter` and emits at most one call.
///
/// The guard runs even when the filter has nothing to contribute.
pub fn bind<F, H>(filter: &F, handler: &mut H) -> Result<Option<FilterCall>>
where
    F: Filter + ?Sized,
    H: QueryHandler + ?Sized,
{
    let client = ensure_sphinx_client(handler)?;

    let Some(call) = filter.resolve()? else {
        trace!("filter on \"{}\" has no applied value", filter.field_name());
        return Ok(None);
    };

    debug!(
        "{} on \"{}\" (exclude: {})",
        call.operation(),
        call.field(),
        call.exclude()
    );
    dispatch(client, &call).map_err(|source| ApplicationError::FilterApplyFailed {
        field: call.field().to_string(),
        reason: format!("{} was rejected", call.operation()),
        source: Some(Box::new(source)),
    })?;

    Ok(Some(call))
}

/// `apply_filter(handler)` on every filter, returning the filter for chaining.
pub trait ApplyFilter {
    fn apply_filter<H: QueryHandler + ?Sized>(&self, handler: &mut H) -> Result<&Self>;
}

impl<F: Filter + ?Sized> ApplyFilter for F {
    fn apply_filter<H: QueryHandler + ?Sized>(&self, handler: &mut H) -> Result<&Self> {
        bind(self, handler)?;
        Ok(self)
    }
}
