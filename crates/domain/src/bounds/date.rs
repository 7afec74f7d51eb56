// crates/domain/src/bounds/date.rs
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

use super::resolver::BoundsDomain;

/// Start of Unix time.
pub const DEFAULT_MIN: (i32, u32, u32) = (1970, 1, 1);
/// Last day representable by a signed 32-bit Unix timestamp.
pub const DEFAULT_MAX: (i32, u32, u32) = (2038, 1, 19);

/// Default sentinel dates of a date filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    default_min: NaiveDate,
    default_max: NaiveDate,
}

impl Default for DateBounds {
    fn default() -> Self {
        let (y, m, d) = DEFAULT_MIN;
        let default_min = NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
        let (y, m, d) = DEFAULT_MAX;
        let default_max = NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MAX);
        Self { default_min, default_max }
    }
}

impl DateBounds {
    pub fn default_min(&self) -> NaiveDate {
        self.default_min
    }

    pub fn set_default_min(&mut self, default_min: NaiveDate) -> &mut Self {
        self.default_min = default_min;
        self
    }

    pub fn default_max(&self) -> NaiveDate {
        self.default_max
    }

    pub fn set_default_max(&mut self, default_max: NaiveDate) -> &mut Self {
        self.default_max = default_max;
        self
    }

    /// Both defaults at 00:00:00.
    pub fn domain(&self) -> DateDomain {
        DateDomain {
            min: start_of_day(self.default_min),
            max: start_of_day(self.default_max),
        }
    }
}

/// Day-granular domain; stepping moves by one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateDomain {
    pub min: NaiveDateTime,
    pub max: NaiveDateTime,
}

impl BoundsDomain for DateDomain {
    type Value = NaiveDateTime;

    fn default_min(&self) -> NaiveDateTime {
        self.min
    }

    fn default_max(&self) -> NaiveDateTime {
        self.max
    }

    fn step_up(&self, value: NaiveDateTime) -> NaiveDateTime {
        value.checked_add_days(Days::new(1)).unwrap_or(value)
    }

    fn step_down(&self, value: NaiveDateTime) -> NaiveDateTime {
        value.checked_sub_days(Days::new(1)).unwrap_or(value)
    }
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Same date at 23:59:59.
pub fn end_of_day(value: NaiveDateTime) -> NaiveDateTime {
    value.date().and_hms_opt(23, 59, 59).unwrap_or(value)
}

/// Seconds since the Unix epoch, reading `value` as UTC.
pub fn timestamp(value: NaiveDateTime) -> i64 {
    value.and_utc().timestamp()
}

/// Parses `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| NaiveDate::parse_from_str(text, "%Y-%m-%d").ok().map(start_of_day))
}
