//! Small text conversions: yes/no flags, ordinals, optional values and
//! random tokens.

use std::fmt::Display;

use rand::Rng;

/// Length of a token produced by [`random_token`].
pub const RANDOM_TOKEN_LENGTH: usize = 11;

const TOKEN_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// `"Yes"` for `true`, `"No"` for `false`.
pub fn bool_flag(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// English ordinal: `1st`, `2nd`, `3rd`, `4th`, `11th`, `21st`, `111th`.
pub fn ordinal(number: u64) -> String {
    let ones = number % 10;
    let tens = (number / 10) % 10;

    let suffix = if tens == 1 {
        "th"
    } else {
        match ones {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };

    format!("{number}{suffix}")
}

/// The value's display text, or `""` when absent.
pub fn display_or_empty<T: Display + ?Sized>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

/// A random lowercase alphanumeric token, suitable as a file name stem.
pub fn random_token() -> String {
    let mut rng = rand::rng();
    (0..RANDOM_TOKEN_LENGTH)
        .map(|_| TOKEN_CHARSET[rng.random_range(0..TOKEN_CHARSET.len())] as char)
        .collect()
}
