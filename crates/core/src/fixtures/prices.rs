//! Price strings

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};

use crate::fixtures::FixtureError;

/// Parse an `"AMOUNT CURRENCY"` string (e.g. `"2.99 USD"`) into money.
///
/// # Errors
///
/// Returns [`FixtureError::InvalidPrice`] if the string is malformed, the
/// amount is negative or has more than the currency's minor units, and
/// [`FixtureError::UnknownCurrency`] for an unrecognised ISO code.
pub fn parse_money(s: &str) -> Result<Money<'static, Currency>, FixtureError> {
    let invalid = || FixtureError::InvalidPrice(s.to_string());

    let (amount, code) = s.trim().split_once(char::is_whitespace).ok_or_else(invalid)?;
    let code = code.trim();

    if code.contains(char::is_whitespace) {
        return Err(invalid());
    }

    let currency = iso::find(code).ok_or_else(|| FixtureError::UnknownCurrency(code.to_string()))?;

    let amount = amount.parse::<Decimal>().map_err(|_err| invalid())?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(invalid());
    }

    let scale = Decimal::from(10_i64.pow(currency.exponent));

    let minor = amount.checked_mul(scale).ok_or_else(invalid)?;

    if minor.fract() != Decimal::ZERO {
        return Err(invalid());
    }

    let minor = minor.to_i64().ok_or_else(invalid)?;

    Ok(Money::from_minor(minor, currency))
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, JPY, USD};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_amount_and_currency() -> TestResult {
        assert_eq!(parse_money("2.99 USD")?, Money::from_minor(299, USD));
        assert_eq!(parse_money("  32.5 GBP ")?, Money::from_minor(3250, GBP));

        Ok(())
    }

    #[test]
    fn respects_currency_exponent() -> TestResult {
        assert_eq!(parse_money("500 JPY")?, Money::from_minor(500, JPY));

        Ok(())
    }

    #[test]
    fn rejects_missing_currency() {
        assert!(matches!(
            parse_money("2.99USD"),
            Err(FixtureError::InvalidPrice(_))
        ));
    }

    #[test]
    fn rejects_sub_minor_amounts() {
        assert!(matches!(
            parse_money("2.999 USD"),
            Err(FixtureError::InvalidPrice(_))
        ));
    }

    #[test]
    fn rejects_negative_amounts() -> TestResult {
        assert!(matches!(
            parse_money("-2.99 USD"),
            Err(FixtureError::InvalidPrice(price)) if price == "-2.99 USD"
        ));
        assert_eq!(parse_money("0.00 USD")?, Money::from_minor(0, USD));

        Ok(())
    }

    #[test]
    fn rejects_unknown_currency() {
        assert!(matches!(
            parse_money("2.99 ABC"),
            Err(FixtureError::UnknownCurrency(code)) if code == "ABC"
        ));
    }

    #[test]
    fn rejects_extra_tokens() {
        assert!(matches!(
            parse_money("2.99 USD each"),
            Err(FixtureError::InvalidPrice(_))
        ));
    }
}
