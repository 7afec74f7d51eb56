// crates/infra/src/recording.rs
use log::debug;
use sphinx_filtration_domain::FilterCall;
use sphinx_filtration_ports::{QueryHandler, SphinxClient};
use sphinx_filtration_shared_kernel::{AttributeValue, FieldName, Result};

/// In-memory Sphinx client that records every filter call it receives.
///
/// Used by the CLI to show what a set of filters would send to a real
/// client, and by tests as a handler that passes the type guard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSphinxClient {
    calls: Vec<FilterCall>,
}

impl RecordingSphinxClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[FilterCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<FilterCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    fn record(&mut self, call: FilterCall) -> Result<()> {
        debug!("recorded {} on \"{}\"", call.operation(), call.field());
        self.calls.push(call);
        Ok(())
    }
}

impl SphinxClient for RecordingSphinxClient {
    fn set_filter(&mut self, field: &FieldName, values: &[AttributeValue], exclude: bool) -> Result<()> {
        self.record(FilterCall::Exact {
            field: field.clone(),
            values: values.to_vec(),
            exclude,
        })
    }

    fn set_filter_range(&mut self, field: &FieldName, min: i64, max: i64, exclude: bool) -> Result<()> {
        self.record(FilterCall::Range {
            field: field.clone(),
            min,
            max,
            exclude,
        })
    }

    fn set_filter_float_range(&mut self, field: &FieldName, min: f64, max: f64, exclude: bool) -> Result<()> {
        self.record(FilterCall::FloatRange {
            field: field.clone(),
            min,
            max,
            exclude,
        })
    }
}

impl QueryHandler for RecordingSphinxClient {
    fn handler_name(&self) -> &str {
        "RecordingSphinxClient"
    }

    fn as_sphinx_client(&mut self) -> Option<&mut dyn SphinxClient> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let mut client = RecordingSphinxClient::new();
        let field = FieldName::from("price");
        client.set_filter_range(&field, 1, 2, false).unwrap();
        client.set_filter_float_range(&field, 0.5, 1.5, true).unwrap();
        client.set_filter(&field, &[AttributeValue::Int(3)], false).unwrap();

        let operations: Vec<_> = client.calls().iter().map(FilterCall::operation).collect();
        assert_eq!(operations, ["SetFilterRange", "SetFilterFloatRange", "SetFilter"]);

        let taken = client.take_calls();
        assert_eq!(taken.len(), 3);
        assert!(client.is_empty());
    }

    #[test]
    fn passes_the_type_guard() {
        let mut client = RecordingSphinxClient::new();
        assert!(client.as_sphinx_client().is_some());
    }
}
