//! Duration strings such as `2s`, `1h30m` or `1.5h`.
//!
//! A duration is an optionally signed sequence of decimal numbers, each with a
//! unit suffix. Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`.
//! Whitespace is not part of the grammar anywhere in the string.

use crate::error::DurationError;
use serde::Serializer;
use std::time::Duration;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        // U+00B5 micro sign and U+03BC Greek mu
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60 * NANOS_PER_SEC),
        "h" => Some(3600 * NANOS_PER_SEC),
        _ => None,
    }
}

/// Split `s` at the first char that does not satisfy `pred`.
fn take_while(s: &str, pred: impl Fn(char) -> bool) -> (&str, &str) {
    let end = s.find(|c: char| !pred(c)).unwrap_or(s.len());
    s.split_at(end)
}

/// Scale the fractional digits of a component into nanoseconds of `unit`.
fn fraction_nanos(digits: &str, unit: u64) -> u64 {
    let mut value: u64 = 0;
    let mut scale = 1f64;
    for b in digits.bytes() {
        // Further digits are below nanosecond precision anyway.
        if value > (u64::MAX - 9) / 10 {
            break;
        }
        value = value * 10 + u64::from(b - b'0');
        scale *= 10.0;
    }
    (value as f64 * (unit as f64 / scale)) as u64
}

/// Parse a duration string.
///
/// # Example
/// ```
/// use notify_slack_config::duration::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5400));
/// assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
/// assert!(parse_duration("xyz").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    if input.is_empty() {
        return Err(DurationError::Empty);
    }

    let (negative, mut rest) = match input.as_bytes()[0] {
        b'-' => (true, &input[1..]),
        b'+' => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(DurationError::MissingNumber(input.len()));
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let start = input.len() - rest.len();

        let (whole, after_whole) = take_while(rest, |c| c.is_ascii_digit());
        rest = after_whole;
        let mut fraction = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let (digits, after_fraction) = take_while(after_dot, |c| c.is_ascii_digit());
            fraction = digits;
            rest = after_fraction;
        }
        if whole.is_empty() && fraction.is_empty() {
            return Err(DurationError::MissingNumber(start));
        }
        let number = &input[start..input.len() - rest.len()];

        let (unit, after_unit) = take_while(rest, |c| {
            c != '.' && !c.is_ascii_digit() && !c.is_whitespace()
        });
        rest = after_unit;
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(number.to_string()));
        }
        let unit_ns =
            unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit(unit.to_string()))?;

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| DurationError::Overflow)?
        };
        let mut component = whole.checked_mul(unit_ns).ok_or(DurationError::Overflow)?;
        if !fraction.is_empty() {
            component = component
                .checked_add(fraction_nanos(fraction, unit_ns))
                .ok_or(DurationError::Overflow)?;
        }
        total = total.checked_add(component).ok_or(DurationError::Overflow)?;
    }

    if negative && total != 0 {
        return Err(DurationError::Negative);
    }
    Ok(Duration::from_nanos(total))
}

/// Render a duration compactly, e.g. `1h30m`.
///
/// Durations under a day parse back with [`parse_duration`]. Longer ones use
/// humantime's `days`/`months`/`years` units, which are display-only.
pub fn format_duration(duration: Duration) -> String {
    humantime::format_duration(duration)
        .to_string()
        .replace(' ', "")
}

/// Serde `serialize_with` helper emitting [`format_duration`] output.
pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_duration(*duration))
}
