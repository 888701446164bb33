//! Request and response DTOs for calendar endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Trip;

use super::aggregator::{CalendarCell, DayAgenda, TripCounts};

/// Optional `today` / `selected` overrides (`YYYY-MM-DD`)
#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    #[serde(default)]
    pub today: Option<NaiveDate>,
    #[serde(default)]
    pub selected: Option<NaiveDate>,
}

/// Month grid over trips supplied by the caller
#[derive(Debug, Deserialize)]
pub struct MonthGridRequest {
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub trips: Vec<Trip>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
    #[serde(default)]
    pub selected: Option<NaiveDate>,
}

/// Everything the calendar screen shows for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,
    pub days: Vec<CalendarCell>,
    pub selected: DayAgenda,
    pub counts: TripCounts,
}
