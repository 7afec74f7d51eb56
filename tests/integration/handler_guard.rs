// tests/integration/handler_guard.rs
use sphinx_filtration::{ApplyFilter, ChoiceFilter, NumberFilter, TextFilter, ensure_sphinx_client};

#[path = "../common/mod.rs"]
mod common;
use common::SqlQueryBuilder;

#[test]
fn every_filter_kind_rejects_a_foreign_handler() {
    let mut choice = ChoiceFilter::new("color");
    choice.set_values([1]);

    let results = [
        NumberFilter::new("price").apply_filter(&mut SqlQueryBuilder).map(|_| ()),
        choice.apply_filter(&mut SqlQueryBuilder).map(|_| ()),
        TextFilter::new("title").apply_filter(&mut SqlQueryBuilder).map(|_| ()),
    ];
    for result in results {
        let err = result.unwrap_err();
        assert!(err.is_invalid_handler());
        assert!(err.to_string().contains("Handler \"SqlQueryBuilder\" is not an instance of SphinxClient"));
    }
}

#[test]
fn guard_names_the_handler() {
    let err = ensure_sphinx_client(&mut SqlQueryBuilder).err().unwrap();
    assert_eq!(err.to_string(), "Handler \"SqlQueryBuilder\" is not an instance of SphinxClient");
}
