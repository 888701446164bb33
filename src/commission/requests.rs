//! Request DTOs for commission endpoints.
//!
//! Amounts accept JSON numbers or decimal strings.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::PaymentType;

/// Request to calculate commissions for a booking
#[derive(Debug, Deserialize)]
pub struct CalculateCommissionsRequest {
    pub gross_amount: Decimal,
    pub net_amount: Decimal,
    #[serde(default)]
    pub discount: Decimal,
}

impl CalculateCommissionsRequest {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("gross_amount", self.gross_amount)?;
        ensure_non_negative("net_amount", self.net_amount)?;
        ensure_non_negative("discount", self.discount)
    }
}

/// Request to compute the outstanding balance
#[derive(Debug, Deserialize)]
pub struct BalanceRequest {
    pub gross_amount: Decimal,
    #[serde(default)]
    pub payments: Vec<Decimal>,
}

impl BalanceRequest {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("gross_amount", self.gross_amount)?;
        for amount in &self.payments {
            ensure_positive("payments", *amount)?;
        }
        Ok(())
    }
}

/// Request to record a payment against a trip
#[derive(Debug, Deserialize)]
pub struct RecordPaymentRequest {
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    #[serde(default)]
    pub payment_type: PaymentType,
    #[serde(default)]
    pub notes: Option<String>,
}

impl RecordPaymentRequest {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("amount", self.amount)
    }
}

fn default_status() -> String {
    "draft".to_string()
}

/// Request to create or replace a trip's administrative record
#[derive(Debug, Deserialize)]
pub struct SaveFinancialsRequest {
    pub practice_number: String,
    pub booking_number: String,
    pub gross_amount: Decimal,
    #[serde(default)]
    pub net_amount: Decimal,
    #[serde(default)]
    pub discount: Decimal,
    #[serde(default)]
    pub practice_confirm_date: Option<NaiveDate>,
    #[serde(default)]
    pub client_departure_date: Option<NaiveDate>,
    #[serde(default)]
    pub confirmation_deposit: Decimal,
    #[serde(default = "default_status")]
    pub status: String,
}

impl SaveFinancialsRequest {
    pub fn validate(&self) -> Result<()> {
        if self.practice_number.trim().is_empty() {
            return Err(AppError::BadRequest("practice_number is required".to_string()));
        }
        if self.booking_number.trim().is_empty() {
            return Err(AppError::BadRequest("booking_number is required".to_string()));
        }
        ensure_positive("gross_amount", self.gross_amount)?;
        ensure_non_negative("net_amount", self.net_amount)?;
        ensure_non_negative("discount", self.discount)?;
        ensure_non_negative("confirmation_deposit", self.confirmation_deposit)
    }
}

fn ensure_non_negative(field: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(AppError::BadRequest(format!("{} must not be negative", field)));
    }
    Ok(())
}

fn ensure_positive(field: &str, value: Decimal) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(AppError::BadRequest(format!("{} must be greater than zero", field)));
    }
    Ok(())
}
