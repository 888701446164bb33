//! Itinerary operations backed by the travel API.

use std::sync::Arc;
use uuid::Uuid;

use crate::cache::AppCache;
use crate::error::Result;
use crate::models::ItineraryDay;
use crate::AppState;

use super::expander::{day_to_save, expand_days};
use super::requests::{SaveDayRequest, TripDaysResponse};

/// Itinerary entries of a trip, cache first
pub async fn load_itineraries(
    state: &AppState,
    auth: Option<&str>,
    trip_id: Uuid,
) -> Result<Arc<Vec<ItineraryDay>>> {
    let key = AppCache::itinerary_key(auth, trip_id);
    if let Some(cached) = state.cache.itineraries.get(&key).await {
        tracing::debug!("Cache HIT for itinerary: {}", trip_id);
        return Ok(cached);
    }

    tracing::debug!("Cache MISS for itinerary: {}", trip_id);
    let days = Arc::new(state.api.list_itineraries(trip_id, auth).await?);
    state.cache.itineraries.insert(key, days.clone()).await;
    Ok(days)
}

/// Fetch a trip and its itinerary and lay out every day
pub async fn trip_days(state: &AppState, auth: Option<&str>, trip_id: Uuid) -> Result<TripDaysResponse> {
    let trip = state.api.get_trip(trip_id, auth).await?;
    let existing = load_itineraries(state, auth, trip_id).await?;
    let days = expand_days(&trip, &existing, &state.itinerary_defaults)?;
    Ok(TripDaysResponse::new(trip_id, days))
}

/// Create or fully replace the itinerary entry of one day
pub async fn save_day(
    state: &AppState,
    auth: Option<&str>,
    trip_id: Uuid,
    day_number: u32,
    request: SaveDayRequest,
) -> Result<TripDaysResponse> {
    let trip = state.api.get_trip(trip_id, auth).await?;

    // read fresh: the id of an entry created elsewhere must not be missed
    state.cache.invalidate_itinerary(auth, trip_id).await;
    let existing = load_itineraries(state, auth, trip_id).await?;
    let existing_id = existing
        .iter()
        .find(|e| e.day_number == day_number)
        .and_then(|e| e.id);

    let body = day_to_save(
        &trip,
        day_number,
        request.title,
        request.description,
        request.itinerary_type,
        &state.itinerary_defaults,
    )?;

    state.api.save_itinerary(existing_id, &body, auth).await?;
    tracing::info!(
        trip_id = %trip_id,
        day_number,
        replaced = existing_id.is_some(),
        "Itinerary day saved"
    );

    state.cache.invalidate_itinerary(auth, trip_id).await;
    let refreshed = load_itineraries(state, auth, trip_id).await?;
    let days = expand_days(&trip, &refreshed, &state.itinerary_defaults)?;
    Ok(TripDaysResponse::new(trip_id, days))
}
