//! Itinerary planning: one slot per calendar day of a trip.

pub mod expander;
pub mod requests;
pub mod routes;
pub mod services;

use uuid::Uuid;

use crate::dates::InvalidRangeError;

pub use expander::{day_to_save, expand_days, DaySlot, DefaultItineraryTypes, MAX_TRIP_DAYS};
pub use routes::router;

/// Errors raised while laying out a trip's days
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error(transparent)]
    InvalidRange(#[from] InvalidRangeError),

    #[error("trip {trip_id} has no usable start or end date")]
    MissingDates { trip_id: Uuid },

    #[error("day {day_number} is outside the trip ({total_days} days)")]
    DayOutOfRange { day_number: u32, total_days: u32 },

    #[error("trip spans {total_days} days, at most {max_days} can be planned")]
    TooLong { total_days: u32, max_days: u32 },
}
