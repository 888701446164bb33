//! Trip records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dates::{deserialize_lenient_date, DateRange, InvalidRangeError};

/// Kind of trip sold by the agency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripType {
    Cruise,
    Resort,
    Tour,
    Custom,
}

/// Trip lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    #[default]
    Draft,
    Active,
    Completed,
    Cancelled,
}

/// Trip as returned by `GET /trips`
///
/// Dates are calendar dates; values the API sends in an unexpected shape
/// are kept as `None` so the trip simply never matches a calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub end_date: Option<NaiveDate>,
    pub trip_type: TripType,
    #[serde(default)]
    pub status: TripStatus,
    #[serde(default)]
    pub client_id: Option<Uuid>,
    #[serde(default)]
    pub agent_id: Option<Uuid>,
}

impl Trip {
    /// Inclusive span of the trip, if both dates are known and ordered.
    pub fn date_range(&self) -> Option<Result<DateRange, InvalidRangeError>> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        }
    }

    /// Whether the trip is under way on `date` (both ends inclusive).
    pub fn is_on(&self, date: NaiveDate) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }

    pub fn starts_on(&self, date: NaiveDate) -> bool {
        self.start_date == Some(date)
    }

    pub fn ends_on(&self, date: NaiveDate) -> bool {
        self.end_date == Some(date)
    }
}
