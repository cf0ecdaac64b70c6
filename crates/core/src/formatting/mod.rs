//! Display formatting for dates, durations, decimals and small scalars.
//!
//! Output formats match what the application has always shown its users,
//! including two legacy quirks: the detailed timestamp uses a 12-hour clock
//! without an AM/PM marker, and two-place decimal rounding is half-to-even.

pub mod datetime;
pub mod decimal;
pub mod text;

pub use datetime::{
    current_time_string, date_time_detailed, date_time_to_string, date_to_string,
    future_date_time, matches_date_format, time_span_to_days, time_to_string, DatePattern,
};
pub use decimal::{
    currency, currency_with, decimal_to_string, int_to_two_decimals, round_one,
    round_to_one_decimal, round_two,
};
pub use text::{bool_flag, display_or_empty, ordinal, random_token};
