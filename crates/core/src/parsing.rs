//! Numeric parsing and validity checks for user-entered text.
//!
//! Parsers accept surrounding whitespace. Conversion helpers propagate a
//! [`CoreError`] on bad input; the `is_valid_*` checks never fail.
//!
//! Decimal text is an optional sign, digits with optional `,` group
//! separators and an optional `.fraction`. Doubles additionally allow an
//! exponent. Underscores and `inf`/`NaN` words are rejected.

use std::num::IntErrorKind;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::CoreError;

static DECIMAL_TEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9][0-9,]*)?(?:\.[0-9]*)?$").expect("valid regex")
});

static DOUBLE_TEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9][0-9,]*)?(?:\.[0-9]*)?(?:[eE][+-]?[0-9]+)?$").expect("valid regex")
});

/// Whether `value` matches `re` and has at least one mantissa digit.
fn is_number_text(re: &Regex, value: &str) -> bool {
    let mantissa = value.split(['e', 'E']).next().unwrap_or_default();
    re.is_match(value) && mantissa.chars().any(|c| c.is_ascii_digit())
}

/// Parse a 32-bit signed integer.
pub fn to_int(value: &str) -> Result<i32, CoreError> {
    let trimmed = value.trim();
    trimmed.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            CoreError::OutOfRange(format!("\"{trimmed}\" does not fit in a 32-bit integer"))
        }
        _ => CoreError::Format(format!("\"{trimmed}\" is not a valid integer")),
    })
}

/// The value, or 0 when absent.
pub fn to_int_or_zero(value: Option<i32>) -> i32 {
    value.unwrap_or(0)
}

/// Parse a double. Thousands separators (`,`) are ignored.
pub fn to_double(value: &str) -> Result<f64, CoreError> {
    let trimmed = value.trim();
    let invalid = || CoreError::Format(format!("\"{trimmed}\" is not a valid number"));
    if !is_number_text(&DOUBLE_TEXT_RE, trimmed) {
        return Err(invalid());
    }
    strip_group_separators(trimmed)
        .parse::<f64>()
        .map_err(|_| invalid())
}

/// Convert a decimal to the nearest double.
pub fn decimal_to_f64(value: Decimal) -> f64 {
    // Every Decimal is within f64 range.
    value.to_f64().unwrap_or_default()
}

/// Whether `value` parses as an unsigned 64-bit integer.
pub fn is_valid_int(value: &str) -> bool {
    value.trim().parse::<u64>().is_ok()
}

/// Whether `value` parses as a decimal number. Thousands separators are
/// accepted.
pub fn is_valid_decimal(value: &str) -> bool {
    let trimmed = value.trim();
    is_number_text(&DECIMAL_TEXT_RE, trimmed)
        && Decimal::from_str(&canonical_decimal_text(trimmed)).is_ok()
}

/// Drop group separators, a leading `+` and a trailing `.`, and give a bare
/// `.fraction` its leading zero.
fn canonical_decimal_text(value: &str) -> String {
    let digits = strip_group_separators(value);
    let (sign, body) = match digits.strip_prefix(['+', '-']) {
        Some(rest) if digits.starts_with('-') => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", digits.as_str()),
    };
    let body = body.strip_suffix('.').unwrap_or(body);
    if body.starts_with('.') {
        format!("{sign}0{body}")
    } else {
        format!("{sign}{body}")
    }
}

fn strip_group_separators(value: &str) -> String {
    value.chars().filter(|&c| c != ',').collect()
}
