//! Currency and decimal rounding.
//!
//! Two-place rounding is banker's rounding (midpoint to even): `2.005`
//! becomes `2.00` and `2.015` becomes `2.02`. The one-place display format
//! rounds midpoints away from zero, as a `0.#` format string does.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::FormatConfig;

/// Text shown for an absent amount.
pub const ABSENT_DECIMAL: &str = "0.00";

/// `"RM " + value`, with the value in its natural scale.
pub fn currency(value: Decimal) -> String {
    currency_with(&FormatConfig::default(), value)
}

/// Currency text using the configured prefix.
pub fn currency_with(config: &FormatConfig, value: Decimal) -> String {
    format!("{} {value}", config.currency_prefix)
}

/// Round to two places (half-to-even) and render; `"0.00"` when absent.
///
/// Values already at two places or fewer keep their scale, so `3.1`
/// renders as `3.1`, not `3.10`.
pub fn decimal_to_string(value: Option<Decimal>) -> String {
    match value {
        Some(v) => round_two(v).to_string(),
        None => ABSENT_DECIMAL.to_string(),
    }
}

/// Render with at most one fractional digit and no trailing zero.
pub fn round_to_one_decimal(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return "0".to_string();
    }
    rounded.normalize().to_string()
}

/// Round to one place, half-to-even.
pub fn round_one(value: Decimal) -> Decimal {
    value.round_dp(1)
}

/// Round to two places, half-to-even.
pub fn round_two(value: Decimal) -> Decimal {
    value.round_dp(2)
}

pub fn int_to_two_decimals(value: i32) -> Decimal {
    round_two(Decimal::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_prefixes_ringgit() {
        assert_eq!(currency(Decimal::new(150050, 2)), "RM 1500.50");
        assert_eq!(currency(Decimal::new(12, 0)), "RM 12");
        assert_eq!(currency(Decimal::new(-5, 1)), "RM -0.5");
    }

    #[test]
    fn currency_uses_configured_prefix() {
        let config = FormatConfig {
            currency_prefix: "USD".into(),
        };
        assert_eq!(currency_with(&config, Decimal::new(999, 2)), "USD 9.99");
    }

    #[test]
    fn absent_decimal_renders_zero() {
        assert_eq!(decimal_to_string(None), "0.00");
    }

    #[test]
    fn decimal_to_string_rounds_to_two_places() {
        assert_eq!(decimal_to_string(Some(Decimal::new(314159, 5))), "3.14");
        assert_eq!(decimal_to_string(Some(Decimal::new(31, 1))), "3.1");
        assert_eq!(decimal_to_string(Some(Decimal::new(7, 0))), "7");
    }

    #[test]
    fn decimal_to_string_rounds_midpoint_to_even() {
        assert_eq!(decimal_to_string(Some(Decimal::new(2005, 3))), "2.00");
        assert_eq!(decimal_to_string(Some(Decimal::new(2015, 3))), "2.02");
        assert_eq!(decimal_to_string(Some(Decimal::new(2025, 3))), "2.02");
        assert_eq!(decimal_to_string(Some(Decimal::new(-2005, 3))), "-2.00");
        assert_eq!(decimal_to_string(Some(Decimal::new(20051, 4))), "2.01");
    }

    #[test]
    fn one_decimal_drops_trailing_zero() {
        assert_eq!(round_to_one_decimal(Decimal::new(340, 2)), "3.4");
        assert_eq!(round_to_one_decimal(Decimal::new(300, 2)), "3");
        assert_eq!(round_to_one_decimal(Decimal::new(396, 2)), "4");
        assert_eq!(round_to_one_decimal(Decimal::new(4, 2)), "0");
        assert_eq!(round_to_one_decimal(Decimal::new(-4, 2)), "0");
    }

    #[test]
    fn one_decimal_rounds_midpoint_away_from_zero() {
        assert_eq!(round_to_one_decimal(Decimal::new(225, 2)), "2.3");
        assert_eq!(round_to_one_decimal(Decimal::new(-225, 2)), "-2.3");
    }

    #[test]
    fn decimal_rounding_helpers_use_bankers_rounding() {
        assert_eq!(round_one(Decimal::new(225, 2)), Decimal::new(22, 1));
        assert_eq!(round_one(Decimal::new(235, 2)), Decimal::new(24, 1));
        assert_eq!(round_two(Decimal::new(1125, 3)), Decimal::new(112, 2));
        assert_eq!(int_to_two_decimals(42), Decimal::from(42));
    }
}
