//! Trip bookkeeping records: financials and payments

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dates::deserialize_lenient_date;

/// Administrative record of a booked trip (`GET /trips/{id}/admin`).
///
/// The four derived fields are whatever the server stored; they are
/// recomputed locally and compared, never trusted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripFinancials {
    pub id: Uuid,
    #[serde(default)]
    pub trip_id: Option<Uuid>,
    #[serde(default)]
    pub practice_number: String,
    #[serde(default)]
    pub booking_number: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_amount: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub discount: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub gross_commission: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub supplier_commission: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub agent_commission: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub balance_due: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub confirmation_deposit: Decimal,
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub practice_confirm_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub client_departure_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: String,
}

/// Full-record body for `POST /trips/{id}/admin` and `PUT /trip-admin/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct SaveTripFinancials {
    pub trip_id: Uuid,
    pub practice_number: String,
    pub booking_number: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practice_confirm_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_departure_date: Option<NaiveDate>,
    #[serde(with = "rust_decimal::serde::float")]
    pub confirmation_deposit: Decimal,
    pub status: String,
}

/// How a payment was booked against the trip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    #[default]
    Installment,
    Balance,
    Deposit,
}

/// Payment recorded against a trip (`GET /trip-admin/{id}/payments`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    #[serde(default)]
    pub trip_admin_id: Option<Uuid>,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub payment_date: Option<NaiveDate>,
    #[serde(default)]
    pub payment_type: PaymentType,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Body for `POST /trip-admin/{id}/payments`
#[derive(Debug, Clone, Serialize)]
pub struct NewPayment {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub payment_type: PaymentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
