//! Expansion of a trip's date span into itinerary day slots.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::dates::DateRange;
use crate::models::{ItineraryDay, ItineraryType, SaveItineraryDay, Trip, TripType};

use super::ScheduleError;

/// Longest trip, in days, that can be laid out.
pub const MAX_TRIP_DAYS: u32 = 366;

/// Itinerary type pre-selected for days that have no entry yet.
///
/// `custom` trips fall back to `cruise_port` unless configured otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultItineraryTypes {
    pub cruise: ItineraryType,
    pub resort: ItineraryType,
    pub tour: ItineraryType,
    pub custom: ItineraryType,
}

impl Default for DefaultItineraryTypes {
    fn default() -> Self {
        Self {
            cruise: ItineraryType::CruisePort,
            resort: ItineraryType::ResortDay,
            tour: ItineraryType::TourDay,
            custom: ItineraryType::CruisePort,
        }
    }
}

impl DefaultItineraryTypes {
    pub fn with_custom(custom: ItineraryType) -> Self {
        Self {
            custom,
            ..Self::default()
        }
    }

    pub fn for_trip(&self, trip_type: TripType) -> ItineraryType {
        match trip_type {
            TripType::Cruise => self.cruise,
            TripType::Resort => self.resort,
            TripType::Tour => self.tour,
            TripType::Custom => self.custom,
        }
    }
}

/// One calendar day of a trip, merged with its itinerary entry if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySlot {
    pub day_number: u32,
    pub date: NaiveDate,
    /// Id of the stored itinerary entry backing this slot
    pub itinerary_id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub itinerary_type: ItineraryType,
    pub planned: bool,
}

fn trip_range(trip: &Trip) -> Result<DateRange, ScheduleError> {
    let range = match trip.date_range() {
        Some(range) => range?,
        None => return Err(ScheduleError::MissingDates { trip_id: trip.id }),
    };
    if range.num_days() > MAX_TRIP_DAYS {
        return Err(ScheduleError::TooLong {
            total_days: range.num_days(),
            max_days: MAX_TRIP_DAYS,
        });
    }
    Ok(range)
}

/// Lay out every day of `trip`, day 1 first.
///
/// Existing entries are matched by `day_number`; when the input holds more
/// than one entry for a day, the first one wins. Entries outside the trip
/// span are ignored. The input slice is never modified.
pub fn expand_days(
    trip: &Trip,
    existing: &[ItineraryDay],
    defaults: &DefaultItineraryTypes,
) -> Result<Vec<DaySlot>, ScheduleError> {
    let range = trip_range(trip)?;

    let mut by_day: HashMap<u32, &ItineraryDay> = HashMap::with_capacity(existing.len());
    for entry in existing {
        by_day.entry(entry.day_number).or_insert(entry);
    }

    let default_type = defaults.for_trip(trip.trip_type);

    let slots = range
        .days()
        .zip(1u32..)
        .map(|(date, day_number)| match by_day.get(&day_number) {
            Some(entry) => DaySlot {
                day_number,
                date,
                itinerary_id: entry.id,
                title: entry.title.clone(),
                description: entry.description.clone(),
                itinerary_type: entry.itinerary_type.unwrap_or(default_type),
                planned: true,
            },
            None => DaySlot {
                day_number,
                date,
                itinerary_id: None,
                title: String::new(),
                description: String::new(),
                itinerary_type: default_type,
                planned: false,
            },
        })
        .collect();

    Ok(slots)
}

/// Build the full record for saving one itinerary day.
///
/// The date is always derived from the trip start; the type falls back to
/// the trip's default when not given.
pub fn day_to_save(
    trip: &Trip,
    day_number: u32,
    title: String,
    description: String,
    itinerary_type: Option<ItineraryType>,
    defaults: &DefaultItineraryTypes,
) -> Result<SaveItineraryDay, ScheduleError> {
    let range = trip_range(trip)?;
    let date = range.nth_day(day_number).ok_or(ScheduleError::DayOutOfRange {
        day_number,
        total_days: range.num_days(),
    })?;

    Ok(SaveItineraryDay {
        trip_id: trip.id,
        day_number,
        date,
        title,
        description,
        itinerary_type: itinerary_type.unwrap_or_else(|| defaults.for_trip(trip.trip_type)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::InvalidRangeError;
    use crate::models::TripStatus;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn trip(trip_type: TripType, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Trip {
        Trip {
            id: Uuid::new_v4(),
            title: "Trip".to_string(),
            destination: "Somewhere".to_string(),
            description: String::new(),
            start_date: start,
            end_date: end,
            trip_type,
            status: TripStatus::Active,
            client_id: None,
            agent_id: None,
        }
    }

    fn entry(day_number: u32, title: &str, itinerary_type: ItineraryType) -> ItineraryDay {
        ItineraryDay {
            id: Some(Uuid::new_v4()),
            trip_id: None,
            day_number,
            date: None,
            title: title.to_string(),
            description: format!("{} description", title),
            itinerary_type: Some(itinerary_type),
        }
    }

    #[test]
    fn test_three_day_trip() {
        let t = trip(TripType::Cruise, Some(d(2024, 6, 1)), Some(d(2024, 6, 3)));
        let slots = expand_days(&t, &[], &DefaultItineraryTypes::default()).unwrap();

        assert_eq!(slots.len(), 3);
        assert_eq!(
            slots.iter().map(|s| s.day_number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(
            slots.iter().map(|s| s.date).collect::<Vec<_>>(),
            vec![d(2024, 6, 1), d(2024, 6, 2), d(2024, 6, 3)]
        );
        assert!(slots.iter().all(|s| !s.planned));
        assert!(slots.iter().all(|s| s.itinerary_type == ItineraryType::CruisePort));
    }

    #[test]
    fn test_single_day_trip() {
        let t = trip(TripType::Tour, Some(d(2024, 6, 1)), Some(d(2024, 6, 1)));
        let slots = expand_days(&t, &[], &DefaultItineraryTypes::default()).unwrap();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].date, d(2024, 6, 1));
    }

    #[test]
    fn test_end_before_start_is_invalid_range() {
        let t = trip(TripType::Tour, Some(d(2024, 6, 3)), Some(d(2024, 6, 1)));
        let err = expand_days(&t, &[], &DefaultItineraryTypes::default()).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InvalidRange(InvalidRangeError {
                start: d(2024, 6, 3),
                end: d(2024, 6, 1),
            })
        );
    }

    #[test]
    fn test_missing_dates() {
        let t = trip(TripType::Tour, Some(d(2024, 6, 3)), None);
        let err = expand_days(&t, &[], &DefaultItineraryTypes::default()).unwrap_err();
        assert_eq!(err, ScheduleError::MissingDates { trip_id: t.id });
    }

    #[test]
    fn test_merges_existing_entries_out_of_order() {
        let t = trip(TripType::Cruise, Some(d(2024, 6, 1)), Some(d(2024, 6, 4)));
        let existing = vec![
            entry(3, "Napoli", ItineraryType::CruisePort),
            entry(1, "Imbarco", ItineraryType::CruisePort),
            entry(2, "Navigazione", ItineraryType::CruiseSea),
        ];
        let before = existing.clone();

        let slots = expand_days(&t, &existing, &DefaultItineraryTypes::default()).unwrap();

        assert_eq!(existing, before);
        assert_eq!(slots.len(), 4);
        assert_eq!(slots[0].title, "Imbarco");
        assert_eq!(slots[0].itinerary_id, existing[1].id);
        assert_eq!(slots[1].title, "Navigazione");
        assert_eq!(slots[1].itinerary_type, ItineraryType::CruiseSea);
        assert_eq!(slots[2].title, "Napoli");
        assert_eq!(slots[2].description, "Napoli description");
        assert!(slots[..3].iter().all(|s| s.planned));
        assert!(!slots[3].planned);
        assert_eq!(slots[3].title, "");
        assert_eq!(slots[3].itinerary_type, ItineraryType::CruisePort);
    }

    #[test]
    fn test_duplicate_and_out_of_span_entries() {
        let t = trip(TripType::Resort, Some(d(2024, 6, 1)), Some(d(2024, 6, 2)));
        let existing = vec![
            entry(1, "First", ItineraryType::ResortDay),
            entry(1, "Second", ItineraryType::ResortDay),
            entry(5, "Too late", ItineraryType::ResortDay),
        ];

        let slots = expand_days(&t, &existing, &DefaultItineraryTypes::default()).unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].title, "First");
        assert!(!slots[1].planned);
    }

    #[test]
    fn test_default_types_per_trip_type() {
        let defaults = DefaultItineraryTypes::default();
        assert_eq!(defaults.for_trip(TripType::Cruise), ItineraryType::CruisePort);
        assert_eq!(defaults.for_trip(TripType::Resort), ItineraryType::ResortDay);
        assert_eq!(defaults.for_trip(TripType::Tour), ItineraryType::TourDay);
        assert_eq!(defaults.for_trip(TripType::Custom), ItineraryType::CruisePort);

        let configured = DefaultItineraryTypes::with_custom(ItineraryType::GenericDay);
        assert_eq!(configured.for_trip(TripType::Custom), ItineraryType::GenericDay);
        assert_eq!(configured.for_trip(TripType::Cruise), ItineraryType::CruisePort);
    }

    #[test]
    fn test_expansion_is_repeatable() {
        let t = trip(TripType::Custom, Some(d(2024, 12, 30)), Some(d(2025, 1, 2)));
        let existing = vec![entry(2, "Capodanno", ItineraryType::GenericDay)];
        let a = expand_days(&t, &existing, &DefaultItineraryTypes::default()).unwrap();
        let b = expand_days(&t, &existing, &DefaultItineraryTypes::default()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
        assert_eq!(a[3].date, d(2025, 1, 2));
    }

    #[test]
    fn test_day_to_save_derives_date() {
        let t = trip(TripType::Tour, Some(d(2024, 6, 1)), Some(d(2024, 6, 3)));
        let defaults = DefaultItineraryTypes::default();

        let day = day_to_save(&t, 3, "Roma".to_string(), String::new(), None, &defaults).unwrap();
        assert_eq!(day.date, d(2024, 6, 3));
        assert_eq!(day.itinerary_type, ItineraryType::TourDay);
        assert_eq!(day.trip_id, t.id);

        let err = day_to_save(&t, 4, String::new(), String::new(), None, &defaults).unwrap_err();
        assert_eq!(err, ScheduleError::DayOutOfRange { day_number: 4, total_days: 3 });

        let err = day_to_save(&t, 0, String::new(), String::new(), None, &defaults).unwrap_err();
        assert_eq!(err, ScheduleError::DayOutOfRange { day_number: 0, total_days: 3 });
    }

    #[test]
    fn test_entry_without_type_gets_trip_default() {
        let t = trip(TripType::Resort, Some(d(2024, 6, 1)), Some(d(2024, 6, 2)));
        let mut untyped = entry(1, "Arrivo", ItineraryType::CruiseSea);
        untyped.itinerary_type = None;

        let slots = expand_days(&t, &[untyped], &DefaultItineraryTypes::default()).unwrap();
        assert!(slots[0].planned);
        assert_eq!(slots[0].title, "Arrivo");
        assert_eq!(slots[0].itinerary_type, ItineraryType::ResortDay);
    }

    #[test]
    fn test_trip_span_is_capped() {
        let defaults = DefaultItineraryTypes::default();

        // 2024 is a leap year: exactly the limit
        let year = trip(TripType::Tour, Some(d(2024, 1, 1)), Some(d(2024, 12, 31)));
        assert_eq!(expand_days(&year, &[], &defaults).unwrap().len(), 366);

        let longer = trip(TripType::Tour, Some(d(2024, 1, 1)), Some(d(2025, 1, 1)));
        assert_eq!(
            expand_days(&longer, &[], &defaults).unwrap_err(),
            ScheduleError::TooLong { total_days: 367, max_days: MAX_TRIP_DAYS }
        );

        let huge = trip(TripType::Tour, Some(d(1, 1, 1)), Some(d(9999, 12, 31)));
        assert!(matches!(
            expand_days(&huge, &[], &defaults),
            Err(ScheduleError::TooLong { .. })
        ));
        assert!(matches!(
            day_to_save(&huge, 1, String::new(), String::new(), None, &defaults),
            Err(ScheduleError::TooLong { .. })
        ));
    }
}
