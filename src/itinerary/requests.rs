//! Request and response DTOs for itinerary endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ItineraryDay, ItineraryType, Trip};

use super::DaySlot;

/// Expand a trip supplied by the caller
#[derive(Debug, Deserialize)]
pub struct ExpandDaysRequest {
    pub trip: Trip,
    #[serde(default)]
    pub itineraries: Vec<ItineraryDay>,
}

/// Save one day of a trip's itinerary
#[derive(Debug, Deserialize)]
pub struct SaveDayRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub itinerary_type: Option<ItineraryType>,
}

/// Day layout of one trip
#[derive(Debug, Serialize)]
pub struct TripDaysResponse {
    pub trip_id: Uuid,
    pub total_days: usize,
    pub planned_days: usize,
    pub days: Vec<DaySlot>,
}

impl TripDaysResponse {
    pub fn new(trip_id: Uuid, days: Vec<DaySlot>) -> Self {
        Self {
            trip_id,
            total_days: days.len(),
            planned_days: days.iter().filter(|d| d.planned).count(),
            days,
        }
    }
}
