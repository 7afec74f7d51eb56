use sphinx_filtration::QueryHandler;

/// Handler that is not a Sphinx client.
#[allow(dead_code)]
pub struct SqlQueryBuilder;

impl QueryHandler for SqlQueryBuilder {
    fn handler_name(&self) -> &str {
        "SqlQueryBuilder"
    }
}
