//! Pre-aggregated analytics returned by the travel API.
//!
//! These totals are computed server-side across many trips and are trusted
//! as-is; only presentation ratios and the per-month grouping of the
//! per-trip entries are derived locally.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dates::deserialize_lenient_date;

/// `GET /analytics/yearly-summary/{year}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySummary {
    pub year: i32,
    #[serde(default)]
    pub total_confirmed_trips: u32,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total_gross_commission: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total_supplier_commission: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total_agent_commission: Decimal,
}

impl YearlySummary {
    /// All-zero summary shown when analytics are unavailable.
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            total_confirmed_trips: 0,
            total_revenue: Decimal::ZERO,
            total_gross_commission: Decimal::ZERO,
            total_supplier_commission: Decimal::ZERO,
            total_agent_commission: Decimal::ZERO,
        }
    }
}

/// One confirmed trip inside the agent commission report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionEntry {
    #[serde(default)]
    pub trip_id: Option<Uuid>,
    #[serde(default)]
    pub practice_number: String,
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub practice_confirm_date: Option<NaiveDate>,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub gross_amount: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub agent_commission: Decimal,
}

/// `GET /analytics/agent-commissions?year&agent_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentCommissions {
    #[serde(flatten)]
    pub summary: YearlySummary,
    #[serde(default)]
    pub trips: Vec<CommissionEntry>,
}
