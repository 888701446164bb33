//! Financial reports over the travel API's yearly analytics.

pub mod breakdown;
pub mod routes;
pub mod services;

pub use breakdown::{monthly_breakdown, yearly_ratios, MonthlySummary, YearlyRatios};
pub use routes::router;
pub use services::{ReportQuery, YearlyReportResponse};
