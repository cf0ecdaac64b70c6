//! Date, time and duration formatting.
//!
//! Patterns are written in the .NET custom date format syntax the
//! application's screens and upload templates use (`dd/MM/yyyy`), and are
//! compiled to chrono strftime items by [`DatePattern`].

use std::borrow::Cow;

use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::{Local, NaiveDateTime, NaiveTime, TimeDelta};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Built-in patterns
// ---------------------------------------------------------------------------

/// Compact timestamp. Uses the 12-hour clock with no AM/PM marker, so
/// 01:00 and 13:00 render identically. Kept for compatibility with existing
/// file names and references.
pub const DETAILED_PATTERN: &str = "yyyyMMddhhmmss";
/// Date and time as shown on screens and reports.
pub const DATE_TIME_PATTERN: &str = "dd/MM/yyyy hh:mm:ss tt";
/// Date as shown on screens and reports.
pub const DATE_PATTERN: &str = "dd/MM/yyyy";
/// Compact 24-hour time.
pub const TIME_PATTERN: &str = "HHmmss";

const DETAILED: DatePattern = DatePattern::compiled("%Y%m%d%I%M%S", true, true, true);
const DATE_TIME: DatePattern = DatePattern::compiled("%d/%m/%Y %I:%M:%S %p", true, true, false);
const DATE: DatePattern = DatePattern::compiled("%d/%m/%Y", true, false, false);
const TIME: DatePattern = DatePattern::compiled("%H%M%S", false, true, false);

// ---------------------------------------------------------------------------
// DatePattern
// ---------------------------------------------------------------------------

/// A .NET-style custom date/time pattern compiled to chrono strftime syntax.
///
/// Supported tokens: `y yy yyyy M MM MMM MMMM d dd ddd dddd h hh H HH m mm
/// s ss tt fff ffffff fffffffff`, `'quoted'` or `"quoted"` literals and `\`
/// escapes. Any other character is copied literally. Time zone, era,
/// single-letter AM/PM and year fields wider than four digits are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    strftime: Cow<'static, str>,
    has_date: bool,
    has_time: bool,
    /// 12-hour hour field with no AM/PM field; parsing assumes AM.
    hour_without_meridiem: bool,
}

impl DatePattern {
    const fn compiled(
        strftime: &'static str,
        has_date: bool,
        has_time: bool,
        hour_without_meridiem: bool,
    ) -> Self {
        Self {
            strftime: Cow::Borrowed(strftime),
            has_date,
            has_time,
            hour_without_meridiem,
        }
    }

    /// Compile a .NET-style pattern.
    pub fn parse(pattern: &str) -> Result<Self, CoreError> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut out = String::with_capacity(pattern.len() * 2);
        let mut has_date = false;
        let mut has_time = false;
        let mut twelve_hour = false;
        let mut meridiem = false;

        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            match c {
                '\'' | '"' => {
                    let close = chars[i + 1..]
                        .iter()
                        .position(|&q| q == c)
                        .ok_or_else(|| {
                            CoreError::Format(format!(
                                "Unterminated quoted literal in date pattern \"{pattern}\""
                            ))
                        })?;
                    for &lit in &chars[i + 1..i + 1 + close] {
                        push_literal(&mut out, lit);
                    }
                    i += close + 2;
                    continue;
                }
                '\\' => {
                    let lit = chars.get(i + 1).ok_or_else(|| {
                        CoreError::Format(format!("Dangling escape in date pattern \"{pattern}\""))
                    })?;
                    push_literal(&mut out, *lit);
                    i += 2;
                    continue;
                }
                // Single-specifier prefix, e.g. "%d".
                '%' => {
                    i += 1;
                    continue;
                }
                _ => {}
            }

            let run = chars[i..].iter().take_while(|&&r| r == c).count();
            let spec = match (c, run) {
                ('y', 1) => "%-y",
                ('y', 2) => "%y",
                ('y', 3 | 4) => "%Y",
                ('M', 1) => "%-m",
                ('M', 2) => "%m",
                ('M', 3) => "%b",
                ('M', _) => "%B",
                ('d', 1) => "%-d",
                ('d', 2) => "%d",
                ('d', 3) => "%a",
                ('d', _) => "%A",
                ('h', 1) => "%-I",
                ('h', _) => "%I",
                ('H', 1) => "%-H",
                ('H', _) => "%H",
                ('m', 1) => "%-M",
                ('m', _) => "%M",
                ('s', 1) => "%-S",
                ('s', _) => "%S",
                ('t', 2..) => "%p",
                ('f', 3) => "%3f",
                ('f', 6) => "%6f",
                ('f', 9) => "%9f",
                ('y' | 't' | 'f' | 'F' | 'z' | 'K' | 'g', _) => {
                    let token: String = std::iter::repeat(c).take(run).collect();
                    return Err(CoreError::Format(format!(
                        "Unsupported token \"{token}\" in date pattern \"{pattern}\""
                    )));
                }
                _ => {
                    for _ in 0..run {
                        push_literal(&mut out, c);
                    }
                    i += run;
                    continue;
                }
            };

            match c {
                'y' | 'M' => has_date = true,
                'd' if run <= 2 => has_date = true,
                'h' => {
                    has_time = true;
                    twelve_hour = true;
                }
                'H' | 'm' | 's' | 'f' => has_time = true,
                't' => meridiem = true,
                _ => {}
            }

            out.push_str(spec);
            i += run;
        }

        Ok(Self {
            strftime: Cow::Owned(out),
            has_date,
            has_time,
            hour_without_meridiem: twelve_hour && !meridiem,
        })
    }

    /// The compiled chrono strftime string.
    pub fn as_strftime(&self) -> &str {
        &self.strftime
    }

    pub fn format(&self, value: &NaiveDateTime) -> String {
        value.format(&self.strftime).to_string()
    }

    /// Parse `value`, which must match the pattern exactly.
    ///
    /// Missing time fields default to midnight. A 12-hour hour without an
    /// AM/PM field is read as AM. Patterns without a date component cannot
    /// be parsed into a date-time and fail.
    pub fn parse_exact(&self, value: &str) -> Result<NaiveDateTime, CoreError> {
        let invalid = |reason: String| {
            CoreError::Format(format!(
                "\"{value}\" does not match date pattern \"{}\": {reason}",
                self.strftime
            ))
        };

        if !self.has_date {
            return Err(invalid("pattern has no date component".into()));
        }

        let mut parsed = Parsed::new();
        parse(&mut parsed, value, StrftimeItems::new(&self.strftime))
            .map_err(|e| invalid(e.to_string()))?;
        if self.hour_without_meridiem {
            parsed.set_ampm(false).map_err(|e| invalid(e.to_string()))?;
        }

        let date = parsed.to_naive_date().map_err(|e| invalid(e.to_string()))?;
        let time = if self.has_time {
            parsed.to_naive_time().map_err(|e| invalid(e.to_string()))?
        } else {
            NaiveTime::MIN
        };
        Ok(date.and_time(time))
    }
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

/// Whether `value` parses exactly with the .NET-style `format`.
///
/// Used to check dates typed into upload templates. An invalid pattern is
/// treated as a non-match.
pub fn matches_date_format(format: &str, value: &str) -> bool {
    DatePattern::parse(format)
        .and_then(|pattern| pattern.parse_exact(value))
        .is_ok()
}

// ---------------------------------------------------------------------------
// Formatters
// ---------------------------------------------------------------------------

/// `yyyyMMddhhmmss`, 12-hour clock without AM/PM.
pub fn date_time_detailed(value: &NaiveDateTime) -> String {
    DETAILED.format(value)
}

/// `dd/MM/yyyy hh:mm:ss tt`, or `""` when absent.
pub fn date_time_to_string(value: Option<&NaiveDateTime>) -> String {
    value.map(|v| DATE_TIME.format(v)).unwrap_or_default()
}

/// `dd/MM/yyyy`, or `""` when absent.
pub fn date_to_string(value: Option<&NaiveDateTime>) -> String {
    value.map(|v| DATE.format(v)).unwrap_or_default()
}

/// `HHmmss`.
pub fn time_to_string(value: &NaiveDateTime) -> String {
    TIME.format(value)
}

/// Current local time as `HHmmss`.
pub fn current_time_string() -> String {
    time_to_string(&Local::now().naive_local())
}

/// Zero-pad to two digits, keeping the sign in front (`-01`).
fn pad2(value: i64) -> String {
    if value < 0 {
        format!("-{:02}", value.unsigned_abs())
    } else {
        format!("{value:02}")
    }
}

/// `"DD days, HH hrs, MM mins"` from the duration's whole components.
///
/// Components are truncated, never rounded: 1 day 23h 59m 59s renders as
/// `01 days, 23 hrs, 59 mins`.
pub fn time_span_to_days(value: TimeDelta) -> String {
    let days = value.num_days();
    let hours = value.num_hours() - days * 24;
    let minutes = value.num_minutes() - value.num_hours() * 60;
    format!(
        "{} days, {} hrs, {} mins",
        pad2(days),
        pad2(hours),
        pad2(minutes)
    )
}

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// `start` plus a fractional number of hours, rounded to the nearest
/// millisecond.
pub fn future_date_time(start: NaiveDateTime, hours: Decimal) -> Result<NaiveDateTime, CoreError> {
    let out_of_range = || CoreError::OutOfRange(format!("{start} + {hours} hours"));

    let millis = hours
        .checked_mul(Decimal::from(MILLIS_PER_HOUR))
        .map(|ms| ms.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|ms| ms.to_i64())
        .ok_or_else(out_of_range)?;

    let delta = TimeDelta::try_milliseconds(millis).ok_or_else(out_of_range)?;
    start.checked_add_signed(delta).ok_or_else(out_of_range)
}
