//! Domain records exchanged with the travel API

pub mod analytics;
pub mod financials;
pub mod itinerary;
pub mod trip;

pub use analytics::{AgentCommissions, CommissionEntry, YearlySummary};
pub use financials::{NewPayment, Payment, PaymentType, SaveTripFinancials, TripFinancials};
pub use itinerary::{ItineraryDay, ItineraryType, SaveItineraryDay};
pub use trip::{Trip, TripStatus, TripType};
