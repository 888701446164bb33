//! Calendar assembly and trip loading.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::cache::AppCache;
use crate::dates::DateRange;
use crate::error::{AppError, Result};
use crate::models::Trip;
use crate::AppState;

use super::aggregator::{day_agenda, month_grid, trip_counts};
use super::requests::CalendarResponse;

/// Trip list visible to the caller, cache first
pub async fn load_trips(state: &AppState, auth: Option<&str>) -> Result<Arc<Vec<Trip>>> {
    let key = AppCache::trips_key(auth);
    if let Some(cached) = state.cache.trips.get(&key).await {
        tracing::debug!("Cache HIT for trip listing");
        return Ok(cached);
    }

    tracing::debug!("Cache MISS for trip listing");
    let trips = Arc::new(state.api.list_trips(auth).await?);
    state.cache.trips.insert(key, trips.clone()).await;
    Ok(trips)
}

/// Month grid, selected-day agenda and counts.
///
/// `selected` defaults to `today`.
pub fn build_calendar(
    trips: &[Trip],
    year: i32,
    month: u32,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> Result<CalendarResponse> {
    let range = DateRange::month(year, month)
        .ok_or_else(|| AppError::BadRequest(format!("invalid month {}-{}", year, month)))?;
    let selected = selected.unwrap_or(today);

    Ok(CalendarResponse {
        year,
        month,
        days: month_grid(trips, range, today, selected),
        selected: day_agenda(trips, selected),
        counts: trip_counts(trips),
    })
}

/// Local calendar date of the server
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_calendar_rejects_bad_month() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(matches!(
            build_calendar(&[], 2024, 13, today, None),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_selected_defaults_to_today() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let calendar = build_calendar(&[], 2024, 6, today, None).unwrap();
        assert_eq!(calendar.selected.date, today);
        assert_eq!(calendar.days.len(), 30);
        assert!(calendar.days[14].is_today && calendar.days[14].is_selected);
        assert_eq!(calendar.counts.total, 0);
    }
}
