//! Response DTOs for commission endpoints.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::Payment;

use super::calculators::{BalanceStatus, CommissionShares, Commissions};
use super::services::ParityMismatch;

/// Money value for JSON responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

/// The three commission figures as money values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommissionBreakdown {
    pub gross_commission: MoneyResponse,
    pub supplier_commission: MoneyResponse,
    pub agent_commission: MoneyResponse,
    /// Display strings, Italian locale
    pub formatted: FormattedCommissions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedCommissions {
    pub gross_commission: String,
    pub supplier_commission: String,
    pub agent_commission: String,
}

/// Response for commission calculation: signed figures for bookkeeping,
/// clamped figures for screens that hide losses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommissionsResponse {
    pub signed: CommissionBreakdown,
    pub clamped: CommissionBreakdown,
    pub shares: CommissionShares,
    pub is_loss: bool,
}

/// Response for balance computation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceResponse {
    pub gross_amount: MoneyResponse,
    pub paid_total: MoneyResponse,
    pub balance_due: MoneyResponse,
    pub status: BalanceStatus,
}

/// Bookkeeping view of one trip with locally recomputed figures
#[derive(Debug, Clone, Serialize)]
pub struct FinancialSummaryResponse {
    pub trip_id: Uuid,
    pub financials_id: Uuid,
    pub practice_number: String,
    pub booking_number: String,
    pub status: String,
    pub gross_amount: MoneyResponse,
    pub net_amount: MoneyResponse,
    pub discount: MoneyResponse,
    pub confirmation_deposit: MoneyResponse,
    pub commissions: CommissionsResponse,
    pub balance: BalanceResponse,
    pub payments: Vec<Payment>,
    /// Derived fields where the stored server value disagrees
    pub parity_mismatches: Vec<ParityMismatch>,
}

impl From<&Commissions> for CommissionBreakdown {
    fn from(c: &Commissions) -> Self {
        use super::calculators::{eur, format_currency};

        CommissionBreakdown {
            gross_commission: eur(c.gross_commission),
            supplier_commission: eur(c.supplier_commission),
            agent_commission: eur(c.agent_commission),
            formatted: FormattedCommissions {
                gross_commission: format_currency(c.gross_commission),
                supplier_commission: format_currency(c.supplier_commission),
                agent_commission: format_currency(c.agent_commission),
            },
        }
    }
}
