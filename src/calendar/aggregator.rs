//! Calendar aggregation over an in-memory trip list.
//!
//! Pure functions; trips whose dates are missing never match any day.

use chrono::NaiveDate;
use serde::Serialize;

use crate::dates::DateRange;
use crate::models::{Trip, TripStatus, TripType};

/// Trips under way on `date`, both ends inclusive
pub fn trips_on_date(trips: &[Trip], date: NaiveDate) -> Vec<&Trip> {
    trips.iter().filter(|t| t.is_on(date)).collect()
}

/// Trips whose first day is `date`
pub fn trips_starting_on(trips: &[Trip], date: NaiveDate) -> Vec<&Trip> {
    trips.iter().filter(|t| t.starts_on(date)).collect()
}

/// Trips whose last day is `date`
pub fn trips_ending_on(trips: &[Trip], date: NaiveDate) -> Vec<&Trip> {
    trips.iter().filter(|t| t.ends_on(date)).collect()
}

pub fn has_trips_on(trips: &[Trip], date: NaiveDate) -> bool {
    trips.iter().any(|t| t.is_on(date))
}

/// One day of a month view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub trips: Vec<Trip>,
    pub has_trips: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

/// One cell per day of `month`, first to last, no padding days.
pub fn month_grid(trips: &[Trip], month: DateRange, today: NaiveDate, selected: NaiveDate) -> Vec<CalendarCell> {
    month
        .days()
        .map(|date| {
            let active: Vec<Trip> = trips_on_date(trips, date).into_iter().cloned().collect();
            CalendarCell {
                date,
                has_trips: !active.is_empty(),
                trips: active,
                is_today: date == today,
                is_selected: date == selected,
            }
        })
        .collect()
}

/// A trip on the selected day, with boundary flags
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgendaEntry {
    pub trip: Trip,
    pub starts_today: bool,
    pub ends_today: bool,
}

/// Detail of one day: every trip under way, flagged when it starts or ends
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayAgenda {
    pub date: NaiveDate,
    pub entries: Vec<AgendaEntry>,
}

pub fn day_agenda(trips: &[Trip], date: NaiveDate) -> DayAgenda {
    let entries = trips_on_date(trips, date)
        .into_iter()
        .map(|trip| AgendaEntry {
            starts_today: trip.starts_on(date),
            ends_today: trip.ends_on(date),
            trip: trip.clone(),
        })
        .collect();

    DayAgenda { date, entries }
}

/// Headline counts shown under the calendar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TripCounts {
    pub total: usize,
    pub active: usize,
    pub cruise: usize,
    pub resort: usize,
    pub tour: usize,
    pub custom: usize,
}

pub fn trip_counts(trips: &[Trip]) -> TripCounts {
    trips.iter().fold(TripCounts::default(), |mut counts, trip| {
        counts.total += 1;
        if trip.status == TripStatus::Active {
            counts.active += 1;
        }
        match trip.trip_type {
            TripType::Cruise => counts.cruise += 1,
            TripType::Resort => counts.resort += 1,
            TripType::Tour => counts.tour += 1,
            TripType::Custom => counts.custom += 1,
        }
        counts
    })
}
