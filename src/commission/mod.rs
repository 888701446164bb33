//! Commission engine for trip bookkeeping.
//!
//! One shared implementation of the commission formulas, used by the live
//! calculator, the per-trip financial view and the parity check against the
//! figures the travel API stores.

pub mod calculators;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{
    balance_due, compute_commissions, format_currency, format_percentage, round_money,
    sum_amounts, AmountOutOfRange, BalanceStatus, Commissions, SUPPLIER_RATE,
};
pub use routes::router;
pub use services::{check_parity, ParityMismatch};
