use chrono::{NaiveDate, NaiveDateTime};

#[allow(dead_code)]
pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[allow(dead_code)]
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    day(y, m, d).and_hms_opt(h, min, s).unwrap()
}

/// One filter of every kind that definitions support.
#[allow(dead_code)]
pub const MIXED_DEFINITIONS_JSON: &str = r#"{
  "filters": [
    { "kind": "number", "name": "price",
      "options": { "default_max": 999, "ranged_to_type": "less" },
      "to": 200 },
    { "kind": "date", "name": "published_at",
      "options": { "default_min": "2015-01-01", "default_max": "2015-12-31" },
      "from": "2015-03-01", "to": "2015-03-31" },
    { "kind": "choice", "name": "color", "options": { "exclude": true }, "values": [3, 5] },
    { "kind": "text", "name": "title", "value": "manual" }
  ]
}"#;

#[allow(dead_code)]
pub const MIXED_DEFINITIONS_YAML: &str = "filters:
  - kind: number
    name: rating
    options:
      float: true
      single: true
      single_type: less
      default_max: 5.0
    value: 3
";
