// tests/integration/bounds_scenarios.rs
use sphinx_filtration::{
    ApplyFilter, AttributeValue, DateFilter, FilterCall, NumberFilter, RangeOrSingleFilter, RangedFromType,
    RangedToType, RecordingSphinxClient, SingleType,
};

#[path = "../common/mod.rs"]
mod common;
use common::{at, day};

fn apply(filter: &impl ApplyFilter) -> Vec<FilterCall> {
    let mut client = RecordingSphinxClient::new();
    filter.apply_filter(&mut client).expect("filter applies");
    client.take_calls()
}

#[test]
fn greater_than_steps_past_the_value() {
    let mut filter = NumberFilter::new("price");
    filter.set_single(true).set_single_type(SingleType::Greater).set_value(100);
    filter.set_default_min(0).unwrap().set_default_max(999).unwrap();

    assert_eq!(
        apply(&filter),
        [FilterCall::Range { field: "price".into(), min: 101, max: 999, exclude: false }]
    );
}

#[test]
fn open_ranged_upper_edge_uses_default_min() {
    let mut filter = NumberFilter::new("price");
    filter
        .set_to_value(200)
        .set_ranged_from_type(RangedFromType::GreaterOrEqual)
        .set_ranged_to_type(RangedToType::Less);
    filter.set_default_max(999).unwrap();

    assert_eq!(
        apply(&filter),
        [FilterCall::Range { field: "price".into(), min: 0, max: 199, exclude: false }]
    );
}

#[test]
fn value_above_default_max_is_a_logic_error() {
    let mut filter = NumberFilter::new("price");
    filter.set_single(true).set_single_type(SingleType::Greater).set_value(11);
    filter.set_default_max(10).unwrap();

    let err = filter.apply_filter(&mut RecordingSphinxClient::new()).err().expect("rejected");
    assert!(err.is_logic());
}

#[test]
fn unordered_defaults_fail_in_both_modes() {
    let mut single = NumberFilter::new("price");
    single.set_single(true).set_single_type(SingleType::LessOrEqual).set_value(50);
    single.set_default_min(100).unwrap().set_default_max(10).unwrap();
    assert!(single.apply_filter(&mut RecordingSphinxClient::new()).err().expect("rejected").is_logic());

    let mut ranged = DateFilter::new("published_at");
    ranged.set_from_value(at(2015, 6, 1, 0, 0, 0));
    ranged.set_default_min(day(2016, 1, 1)).set_default_max(day(2015, 1, 1));
    assert!(ranged.apply_filter(&mut RecordingSphinxClient::new()).err().expect("rejected").is_logic());
}

#[test]
fn float_mode_uses_the_float_step() {
    let mut filter = NumberFilter::new("rating");
    filter.set_float(true).set_exclude(true);
    filter.set_single(true).set_single_type(SingleType::Greater).set_value(4.5);
    filter.set_default_max(5.0).unwrap().set_default_float_step(0.1).unwrap();

    let calls = apply(&filter);
    assert!(matches!(
        calls.as_slice(),
        [FilterCall::FloatRange { min, max, exclude: true, .. }] if (min - 4.6).abs() < 1e-9 && (max - 5.0).abs() < 1e-9
    ));
}

#[test]
fn exact_date_emits_its_timestamp() {
    let mut filter = DateFilter::new("published_at");
    filter.set_single(true).set_value(at(2015, 1, 1, 0, 0, 0));

    assert_eq!(
        apply(&filter),
        [FilterCall::Exact {
            field: "published_at".into(),
            values: vec![AttributeValue::Int(1_420_070_400)],
            exclude: false,
        }]
    );
}

#[test]
fn ranged_date_max_is_the_end_of_its_day() {
    let mut filter = DateFilter::new("published_at");
    filter.set_from_value(at(2015, 3, 1, 0, 0, 0)).set_to_value(at(2015, 3, 31, 0, 0, 0));

    let expected_max = at(2015, 3, 31, 23, 59, 59).and_utc().timestamp();
    assert_eq!(
        apply(&filter),
        [FilterCall::Range {
            field: "published_at".into(),
            min: 1_425_168_000,
            max: expected_max,
            exclude: false,
        }]
    );
}

#[test]
fn resolving_twice_is_stable() {
    let mut filter = NumberFilter::new("price");
    filter.set_from_value(10).set_to_value(20).set_ranged_from_type(RangedFromType::Greater);

    let mut client = RecordingSphinxClient::new();
    filter.apply_filter(&mut client).unwrap().apply_filter(&mut client).unwrap();
    let calls = client.take_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}
