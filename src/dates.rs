//! Calendar-date primitives shared by the calendar and itinerary modules.
//!
//! All dates are timezone-naive calendar dates. Values coming from the travel
//! API are parsed leniently: anything that is not a recognizable date becomes
//! `None` instead of an error.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Returned when a range would end before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid date range: end {end} is before start {start}")]
pub struct InvalidRangeError {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `end < start`. Dates are never swapped.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidRangeError> {
        if end < start {
            return Err(InvalidRangeError { start, end });
        }
        Ok(Self { start, end })
    }

    /// The whole calendar month, first to last day inclusive.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        let end = next.pred_opt()?;
        Some(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, always >= 1.
    pub fn num_days(&self) -> u32 {
        ((self.end - self.start).num_days() + 1) as u32
    }

    /// Date of the 1-based `day_number`, if it falls inside the range.
    pub fn nth_day(&self, day_number: u32) -> Option<NaiveDate> {
        if day_number == 0 || day_number > self.num_days() {
            return None;
        }
        self.start
            .checked_add_days(chrono::Days::new(u64::from(day_number - 1)))
    }

    /// Every day of the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// Parse a calendar date from an API value.
///
/// Accepts `YYYY-MM-DD`, naive ISO-8601 date-times and RFC 3339 date-times.
/// For offset-carrying values the date is read in the value's own offset.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Some(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local().date());
    }
    None
}

/// `YYYY-MM` key used for monthly grouping.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Serde adapter: lenient optional date. Non-string or unparsable values
/// deserialize to `None`.
pub fn deserialize_lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(parse_calendar_date))
}
