//! Presentation figures derived from trusted server totals.
//!
//! Totals across trips are never recomputed here; only the per-month
//! grouping of the report's own entries and ratios over its totals.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::commission::{format_percentage, round_money, AmountOutOfRange};
use crate::dates::month_key;
use crate::models::{CommissionEntry, YearlySummary};

/// Confirmed trips of one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    /// `YYYY-MM`
    pub month: String,
    pub trips: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub commission: Decimal,
}

/// Group entries by the month of their confirmation date, oldest first.
/// Entries without a confirmation date are left out.
pub fn monthly_breakdown(entries: &[CommissionEntry]) -> Result<Vec<MonthlySummary>, AmountOutOfRange> {
    let mut months: BTreeMap<String, MonthlySummary> = BTreeMap::new();

    for entry in entries {
        let Some(date) = entry.practice_confirm_date else {
            tracing::debug!(
                practice_number = %entry.practice_number,
                "Skipping commission entry without confirmation date"
            );
            continue;
        };

        let key = month_key(date);
        let month = months.entry(key.clone()).or_insert_with(|| MonthlySummary {
            month: key,
            trips: 0,
            revenue: Decimal::ZERO,
            commission: Decimal::ZERO,
        });
        month.trips += 1;
        month.revenue = month
            .revenue
            .checked_add(entry.gross_amount)
            .ok_or(AmountOutOfRange)?;
        month.commission = month
            .commission
            .checked_add(entry.agent_commission)
            .ok_or(AmountOutOfRange)?;
    }

    Ok(months.into_values().collect())
}

/// Key performance ratios of a year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearlyRatios {
    #[serde(with = "rust_decimal::serde::str")]
    pub average_revenue_per_trip: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub average_agent_commission_per_trip: Decimal,
    /// Gross commission as a share of revenue
    pub gross_commission_on_revenue: String,
    /// Agent commission as a share of gross commission
    pub agent_share_of_gross_commission: String,
}

pub fn yearly_ratios(summary: &YearlySummary) -> YearlyRatios {
    let trips = Decimal::from(summary.total_confirmed_trips);
    let per_trip = |total: Decimal| {
        if trips.is_zero() {
            Decimal::ZERO
        } else {
            round_money(total / trips, 2)
        }
    };

    YearlyRatios {
        average_revenue_per_trip: per_trip(summary.total_revenue),
        average_agent_commission_per_trip: per_trip(summary.total_agent_commission),
        gross_commission_on_revenue: format_percentage(
            summary.total_gross_commission,
            summary.total_revenue,
        ),
        agent_share_of_gross_commission: format_percentage(
            summary.total_agent_commission,
            summary.total_gross_commission,
        ),
    }
}
