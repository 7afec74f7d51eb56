// crates/ports/src/handler.rs
use crate::sphinx::SphinxClient;

/// Any query builder a filter may be presented to.
///
/// Filters only know how to talk to a [`SphinxClient`]; a handler opts in by
/// overriding [`QueryHandler::as_sphinx_client`].
pub trait QueryHandler {
    /// Name reported when the handler is rejected.
    fn handler_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn as_sphinx_client(&mut self) -> Option<&mut dyn SphinxClient> {
        None
    }
}
