//! Yearly report assembly.
//!
//! Reports are informational: when the analytics endpoints fail for any
//! reason other than the caller's credentials, an all-zero summary is
//! returned and flagged unavailable instead of an error.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::commission::AmountOutOfRange;
use crate::error::{AppError, Result};
use crate::models::{AgentCommissions, CommissionEntry, YearlySummary};
use crate::AppState;

use super::breakdown::{monthly_breakdown, yearly_ratios, MonthlySummary, YearlyRatios};

/// Query parameters for the yearly report
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    /// Restrict the commission listing to one agent
    pub agent_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct YearlyReportResponse {
    pub year: i32,
    /// False when the travel API could not provide the figures
    pub available: bool,
    pub summary: YearlySummary,
    pub ratios: YearlyRatios,
    pub monthly: Vec<MonthlySummary>,
    pub trips: Vec<CommissionEntry>,
}

impl YearlyReportResponse {
    pub fn build(
        year: i32,
        summary: Option<YearlySummary>,
        commissions: Option<AgentCommissions>,
    ) -> Result<Self, AmountOutOfRange> {
        let available = summary.is_some() && commissions.is_some();
        let summary = summary.unwrap_or_else(|| YearlySummary::empty(year));
        let trips = commissions.map(|c| c.trips).unwrap_or_default();

        Ok(Self {
            year,
            available,
            ratios: yearly_ratios(&summary),
            monthly: monthly_breakdown(&trips)?,
            summary,
            trips,
        })
    }
}

/// Credential failures propagate; anything else degrades to `None`
fn degrade<T>(result: Result<T>, what: &str, year: i32) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(AppError::Upstream { status, path }) if status == 401 || status == 403 => {
            Err(AppError::Upstream { status, path })
        }
        Err(e) => {
            tracing::warn!(year, "Falling back to empty {}: {}", what, e);
            Ok(None)
        }
    }
}

pub async fn yearly_report(
    state: &AppState,
    auth: Option<&str>,
    year: i32,
    query: ReportQuery,
) -> Result<YearlyReportResponse> {
    let (summary, commissions) = tokio::join!(
        state.api.yearly_summary(year, auth),
        state.api.agent_commissions(year, query.agent_id, auth),
    );

    let summary = degrade(summary, "yearly summary", year)?;
    let commissions = degrade(commissions, "agent commissions", year)?;

    Ok(YearlyReportResponse::build(year, summary, commissions)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn summary() -> YearlySummary {
        YearlySummary {
            year: 2024,
            total_confirmed_trips: 2,
            total_revenue: dec!(6000),
            total_gross_commission: dec!(1200),
            total_supplier_commission: dec!(240),
            total_agent_commission: dec!(960),
        }
    }

    #[test]
    fn test_build_full_report() {
        let commissions = AgentCommissions {
            summary: summary(),
            trips: vec![CommissionEntry {
                trip_id: None,
                practice_number: "P-7".to_string(),
                practice_confirm_date: NaiveDate::from_ymd_opt(2024, 4, 9),
                gross_amount: dec!(6000),
                agent_commission: dec!(960),
            }],
        };

        let report = YearlyReportResponse::build(2024, Some(summary()), Some(commissions)).unwrap();
        assert!(report.available);
        assert_eq!(report.summary.total_confirmed_trips, 2);
        assert_eq!(report.ratios.average_revenue_per_trip, dec!(3000));
        assert_eq!(report.ratios.gross_commission_on_revenue, "20.0%");
        assert_eq!(report.monthly.len(), 1);
        assert_eq!(report.monthly[0].month, "2024-04");
    }

    #[test]
    fn test_build_degraded_report() {
        let report = YearlyReportResponse::build(2023, None, None).unwrap();
        assert!(!report.available);
        assert_eq!(report.year, 2023);
        assert_eq!(report.summary, YearlySummary::empty(2023));
        assert!(report.monthly.is_empty());
        assert!(report.trips.is_empty());
        assert_eq!(report.ratios.agent_share_of_gross_commission, "0%");
    }

    #[test]
    fn test_degrade_keeps_credential_errors() {
        let unauthorized: Result<()> = Err(AppError::Upstream {
            status: 401,
            path: "/analytics/yearly-summary/2024".to_string(),
        });
        assert!(degrade(unauthorized, "yearly summary", 2024).is_err());

        let failing: Result<()> = Err(AppError::Upstream {
            status: 500,
            path: "/analytics/yearly-summary/2024".to_string(),
        });
        assert!(matches!(degrade(failing, "yearly summary", 2024), Ok(None)));

        let missing: Result<()> = Err(AppError::NotFound("/analytics".to_string()));
        assert!(matches!(degrade(missing, "yearly summary", 2024), Ok(None)));
    }
}
