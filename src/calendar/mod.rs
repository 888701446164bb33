//! Trip calendar: month grids and day lookups over the trip list.

pub mod aggregator;
pub mod requests;
pub mod routes;
pub mod services;

pub use aggregator::{
    day_agenda, has_trips_on, month_grid, trip_counts, trips_ending_on, trips_on_date,
    trips_starting_on, CalendarCell, DayAgenda, TripCounts,
};
pub use routes::router;
