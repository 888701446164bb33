//! Itinerary day records

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::dates::deserialize_lenient_date;

/// What kind of day an itinerary entry describes.
///
/// The travel API historically used `port_day`/`sea_day`/`free_day`; those
/// names are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItineraryType {
    #[serde(alias = "port_day")]
    CruisePort,
    #[serde(alias = "sea_day")]
    CruiseSea,
    ResortDay,
    TourDay,
    #[serde(alias = "free_day")]
    GenericDay,
}

impl ItineraryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItineraryType::CruisePort => "cruise_port",
            ItineraryType::CruiseSea => "cruise_sea",
            ItineraryType::ResortDay => "resort_day",
            ItineraryType::TourDay => "tour_day",
            ItineraryType::GenericDay => "generic_day",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cruise_port" | "port_day" => Some(ItineraryType::CruisePort),
            "cruise_sea" | "sea_day" => Some(ItineraryType::CruiseSea),
            "resort_day" => Some(ItineraryType::ResortDay),
            "tour_day" => Some(ItineraryType::TourDay),
            "generic_day" | "free_day" => Some(ItineraryType::GenericDay),
            _ => None,
        }
    }
}

/// Itinerary entry from `GET /trips/{id}/itineraries`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub trip_id: Option<Uuid>,
    pub day_number: u32,
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// `None` when the API sent no type or one this service does not know
    #[serde(default, deserialize_with = "deserialize_lenient_itinerary_type")]
    pub itinerary_type: Option<ItineraryType>,
}

/// Serde adapter: unknown, empty or non-string types become `None`.
fn deserialize_lenient_itinerary_type<'de, D>(deserializer: D) -> Result<Option<ItineraryType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(ItineraryType::parse))
}

/// Full-record body for `POST /itineraries` and `PUT /itineraries/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct SaveItineraryDay {
    pub trip_id: Uuid,
    pub day_number: u32,
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
    pub itinerary_type: ItineraryType,
}
