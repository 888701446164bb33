//! Core commission calculation functions.
//!
//! Pure functions for commission math - no network access. Every screen that
//! shows commissions goes through `compute_commissions`; negative results are
//! kept (a loss-making booking) and only hidden by `clamp_non_negative`.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::commission::responses::MoneyResponse;

/// Share of the gross amount attributed to the supplier relationship.
pub const SUPPLIER_RATE: Decimal = dec!(0.04);

/// An amount too large for the 96-bit decimal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("amount out of range")]
pub struct AmountOutOfRange;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use travel_desk::commission::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// The three derived commission figures of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Commissions {
    #[serde(with = "rust_decimal::serde::str")]
    pub gross_commission: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub supplier_commission: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub agent_commission: Decimal,
}

impl Commissions {
    /// Presentation variant: every figure floored at zero.
    pub fn clamp_non_negative(self) -> Self {
        Self {
            gross_commission: self.gross_commission.max(Decimal::ZERO),
            supplier_commission: self.supplier_commission.max(Decimal::ZERO),
            agent_commission: self.agent_commission.max(Decimal::ZERO),
        }
    }

    /// True when the booking loses money for the agent.
    pub fn is_loss(&self) -> bool {
        self.agent_commission < Decimal::ZERO
    }
}

/// Compute gross, supplier and agent commission. Signed, unrounded.
///
/// ```
/// use rust_decimal_macros::dec;
/// use travel_desk::commission::compute_commissions;
///
/// let c = compute_commissions(dec!(1000), dec!(800), dec!(0)).unwrap();
/// assert_eq!(c.gross_commission, dec!(200));
/// assert_eq!(c.supplier_commission, dec!(40));
/// assert_eq!(c.agent_commission, dec!(160));
/// ```
pub fn compute_commissions(
    gross_amount: Decimal,
    net_amount: Decimal,
    discount: Decimal,
) -> Result<Commissions, AmountOutOfRange> {
    let gross_commission = gross_amount
        .checked_sub(discount)
        .and_then(|v| v.checked_sub(net_amount))
        .ok_or(AmountOutOfRange)?;
    let supplier_commission = gross_amount
        .checked_mul(SUPPLIER_RATE)
        .ok_or(AmountOutOfRange)?;
    let agent_commission = gross_commission
        .checked_sub(supplier_commission)
        .ok_or(AmountOutOfRange)?;

    Ok(Commissions {
        gross_commission,
        supplier_commission,
        agent_commission,
    })
}

/// Outstanding balance: gross minus everything paid. Negative means credit.
pub fn balance_due<I>(gross_amount: Decimal, payments: I) -> Result<Decimal, AmountOutOfRange>
where
    I: IntoIterator<Item = Decimal>,
{
    let paid = sum_amounts(payments)?;
    gross_amount.checked_sub(paid).ok_or(AmountOutOfRange)
}

/// Sum of amounts, failing instead of overflowing
pub fn sum_amounts<I>(amounts: I) -> Result<Decimal, AmountOutOfRange>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
        .ok_or(AmountOutOfRange)
}

/// Where a trip stands with respect to its balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    Due,
    Settled,
    Credit,
}

impl BalanceStatus {
    pub fn of(balance: Decimal) -> Self {
        if balance > Decimal::ZERO {
            BalanceStatus::Due
        } else if balance < Decimal::ZERO {
            BalanceStatus::Credit
        } else {
            BalanceStatus::Settled
        }
    }
}

/// `value` as a percentage of `total`, one decimal digit, `%` appended.
///
/// A zero total yields `"0%"` instead of dividing by zero.
pub fn format_percentage(value: Decimal, total: Decimal) -> String {
    if total.is_zero() {
        return "0%".to_string();
    }
    let Some(scaled) = value.checked_mul(dec!(100)).and_then(|v| v.checked_div(total)) else {
        return "0%".to_string();
    };
    let mut pct = scaled.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    pct.rescale(1);
    if pct.is_zero() {
        pct.set_sign_positive(true);
    }
    format!("{}%", pct)
}

/// Italian-locale EUR rendering, e.g. `1.234,56 €`.
pub fn format_currency(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!(
        "{}{},{}\u{a0}€",
        if negative { "-" } else { "" },
        grouped,
        frac_part
    )
}

/// Each commission as a share of the gross amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommissionShares {
    pub gross_commission_pct: String,
    pub supplier_commission_pct: String,
    pub agent_commission_pct: String,
}

pub fn commission_shares(gross_amount: Decimal, commissions: &Commissions) -> CommissionShares {
    CommissionShares {
        gross_commission_pct: format_percentage(commissions.gross_commission, gross_amount),
        supplier_commission_pct: format_percentage(commissions.supplier_commission, gross_amount),
        agent_commission_pct: format_percentage(commissions.agent_commission, gross_amount),
    }
}

/// Wrap an amount as a EUR money value
pub fn eur(amount: Decimal) -> MoneyResponse {
    MoneyResponse {
        amount,
        currency: "EUR".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_bankers_rounding_to_even() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(2));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(2.25), 1), dec!(2.2));
        assert_eq!(round_money(dec!(2.35), 1), dec!(2.4));
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
        assert_eq!(round_money(dec!(-1.234), 2), dec!(-1.23));
    }

    // ==================== compute_commissions tests ====================

    #[test]
    fn test_compute_commissions_reference_bookings() {
        let c = compute_commissions(dec!(1000), dec!(800), dec!(0)).unwrap();
        assert_eq!(c.gross_commission, dec!(200));
        assert_eq!(c.supplier_commission, dec!(40));
        assert_eq!(c.agent_commission, dec!(160));

        let c = compute_commissions(dec!(2500), dec!(2000), dec!(100)).unwrap();
        assert_eq!(c.gross_commission, dec!(400));
        assert_eq!(c.supplier_commission, dec!(100));
        assert_eq!(c.agent_commission, dec!(300));

        let c = compute_commissions(dec!(5000), dec!(3800), dec!(200)).unwrap();
        assert_eq!(c.gross_commission, dec!(1000));
        assert_eq!(c.supplier_commission, dec!(200));
        assert_eq!(c.agent_commission, dec!(800));
    }

    #[test]
    fn test_supplier_commission_is_exactly_four_percent() {
        for gross in [dec!(0), dec!(0.01), dec!(33.33), dec!(1234.56), dec!(99999999.99)] {
            let c = compute_commissions(gross, dec!(0), dec!(0)).unwrap();
            assert_eq!(c.supplier_commission, gross * dec!(0.04));
        }
        assert_eq!(compute_commissions(dec!(33.33), dec!(0), dec!(0)).unwrap().supplier_commission, dec!(1.3332));
    }

    #[test]
    fn test_agent_commission_is_gross_minus_supplier() {
        let cases = [
            (dec!(1000), dec!(800), dec!(0)),
            (dec!(100), dec!(150), dec!(10)),
            (dec!(0), dec!(0), dec!(50)),
            (dec!(1234.56), dec!(1000.01), dec!(12.34)),
        ];
        for (gross, net, discount) in cases {
            let c = compute_commissions(gross, net, discount).unwrap();
            assert_eq!(c.agent_commission, c.gross_commission - c.supplier_commission);
        }
    }

    #[test]
    fn test_loss_making_booking_stays_negative() {
        // net above gross: signed result is kept
        let c = compute_commissions(dec!(1000), dec!(1100), dec!(50)).unwrap();
        assert_eq!(c.gross_commission, dec!(-150));
        assert_eq!(c.supplier_commission, dec!(40));
        assert_eq!(c.agent_commission, dec!(-190));
        assert!(c.is_loss());
    }

    #[test]
    fn test_supplier_share_can_push_agent_negative() {
        // gross commission positive but smaller than the supplier share
        let c = compute_commissions(dec!(1000), dec!(980), dec!(0)).unwrap();
        assert_eq!(c.gross_commission, dec!(20));
        assert_eq!(c.agent_commission, dec!(-20));

        let clamped = c.clamp_non_negative();
        assert_eq!(clamped.gross_commission, dec!(20));
        assert_eq!(clamped.supplier_commission, dec!(40));
        assert_eq!(clamped.agent_commission, dec!(0));
    }

    #[test]
    fn test_clamp_non_negative() {
        let c = compute_commissions(dec!(1000), dec!(1100), dec!(50)).unwrap().clamp_non_negative();
        assert_eq!(c.gross_commission, dec!(0));
        assert_eq!(c.supplier_commission, dec!(40));
        assert_eq!(c.agent_commission, dec!(0));
        assert!(!c.is_loss());

        // positive values pass through untouched
        let c = compute_commissions(dec!(2500), dec!(2000), dec!(100)).unwrap();
        assert_eq!(c.clamp_non_negative(), c);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let a = compute_commissions(dec!(777.77), dec!(500.5), dec!(7)).unwrap();
        let b = compute_commissions(dec!(777.77), dec!(500.5), dec!(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_compute_commissions_out_of_range() {
        assert_eq!(
            compute_commissions(dec!(0), Decimal::MAX, Decimal::MAX),
            Err(AmountOutOfRange)
        );
        assert_eq!(
            compute_commissions(Decimal::MIN, dec!(0), Decimal::MAX),
            Err(AmountOutOfRange)
        );
        // the largest gross amount still computes
        assert!(compute_commissions(Decimal::MAX, dec!(0), dec!(0)).is_ok());
    }

    // ==================== balance_due tests ====================

    #[test]
    fn test_balance_due() {
        assert_eq!(balance_due(dec!(1000), [dec!(300), dec!(200)]).unwrap(), dec!(500));
        assert_eq!(balance_due(dec!(1000), Vec::new()).unwrap(), dec!(1000));
    }

    #[test]
    fn test_balance_due_overpayment_is_not_clamped() {
        let balance = balance_due(dec!(1000), [dec!(600), dec!(600)]).unwrap();
        assert_eq!(balance, dec!(-200));
        assert_eq!(BalanceStatus::of(balance), BalanceStatus::Credit);
    }

    #[test]
    fn test_balance_due_out_of_range() {
        assert_eq!(
            balance_due(Decimal::MAX, [Decimal::MAX, Decimal::MAX]),
            Err(AmountOutOfRange)
        );
        assert_eq!(balance_due(Decimal::MIN, [Decimal::MAX]), Err(AmountOutOfRange));
        assert_eq!(sum_amounts([dec!(1.5), dec!(2.5)]), Ok(dec!(4)));
    }

    #[test]
    fn test_balance_status() {
        assert_eq!(BalanceStatus::of(dec!(0.01)), BalanceStatus::Due);
        assert_eq!(BalanceStatus::of(dec!(0)), BalanceStatus::Settled);
        assert_eq!(BalanceStatus::of(dec!(-0.01)), BalanceStatus::Credit);
    }

    // ==================== formatting tests ====================

    #[test]
    fn test_format_percentage_zero_total() {
        assert_eq!(format_percentage(dec!(0), dec!(0)), "0%");
        assert_eq!(format_percentage(dec!(150), dec!(0)), "0%");
        assert_eq!(format_percentage(dec!(-150), dec!(0)), "0%");
    }

    #[test]
    fn test_format_percentage_one_decimal() {
        assert_eq!(format_percentage(dec!(160), dec!(1000)), "16.0%");
        assert_eq!(format_percentage(dec!(1), dec!(3)), "33.3%");
        assert_eq!(format_percentage(dec!(2), dec!(3)), "66.7%");
        assert_eq!(format_percentage(dec!(1000), dec!(1000)), "100.0%");
        assert_eq!(format_percentage(dec!(-190), dec!(1000)), "-19.0%");
        assert_eq!(format_percentage(dec!(0), dec!(1000)), "0.0%");
    }

    #[test]
    fn test_format_currency_italian_locale() {
        assert_eq!(format_currency(dec!(1234.56)), "1.234,56\u{a0}€");
        assert_eq!(format_currency(dec!(0)), "0,00\u{a0}€");
        assert_eq!(format_currency(dec!(40)), "40,00\u{a0}€");
        assert_eq!(format_currency(dec!(1234567.891)), "1.234.567,89\u{a0}€");
        assert_eq!(format_currency(dec!(-190)), "-190,00\u{a0}€");
        assert_eq!(format_currency(dec!(0.005)), "0,01\u{a0}€");
    }

    #[test]
    fn test_commission_shares() {
        let c = compute_commissions(dec!(1000), dec!(800), dec!(0)).unwrap();
        let shares = commission_shares(dec!(1000), &c);
        assert_eq!(shares.gross_commission_pct, "20.0%");
        assert_eq!(shares.supplier_commission_pct, "4.0%");
        assert_eq!(shares.agent_commission_pct, "16.0%");

        let shares = commission_shares(dec!(0), &compute_commissions(dec!(0), dec!(0), dec!(0)).unwrap());
        assert_eq!(shares.agent_commission_pct, "0%");
    }
}
