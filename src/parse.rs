//! Parse-or-default helpers for the loosely typed strings that upstream
//! listing data carries (bid amounts, supply counts, dates).
//!
//! Every helper is total: bad input becomes `None` and never a panic or an
//! error. A `None` amount or count behaves like `NaN` downstream, so any
//! comparison that involves it is false.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Naive datetime layouts accepted besides RFC 3339. Read as UTC.
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

/// Scan the number that leads `raw`, skipping leading whitespace.
///
/// Returns a normalized copy (no `+` sign, a `0` before a bare fraction)
/// or `None` when no digit is found. With `fraction` off, scanning stops
/// at the first non-digit.
fn leading_number(raw: &str, fraction: bool) -> Option<String> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut out = String::new();
    let mut i = 0;
    match bytes.first() {
        Some(b'-') => {
            out.push('-');
            i += 1;
        }
        Some(b'+') => i += 1,
        _ => {}
    }

    let int_end = digits_from(i);
    let mut digit_count = int_end - i;
    out.push_str(&text[i..int_end]);
    i = int_end;

    if fraction && bytes.get(i) == Some(&b'.') {
        let frac_end = digits_from(i + 1);
        if frac_end > i + 1 {
            if digit_count == 0 {
                out.push('0');
            }
            out.push_str(&text[i..frac_end]);
            digit_count += frac_end - i - 1;
        }
        i = frac_end;
    }

    if digit_count == 0 {
        return None;
    }

    if fraction && matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        let negative = bytes.get(j) == Some(&b'-');
        if matches!(bytes.get(j), Some(b'-') | Some(b'+')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            out.push('e');
            if negative {
                out.push('-');
            }
            out.push_str(&text[j..exp_end]);
        }
    }

    Some(out)
}

/// Parse a decimal amount such as a bid (`"0.5"`, `"1.25 ETH"`, `"2e-1"`).
///
/// Values beyond the `Decimal` range, including a leading `Infinity`,
/// saturate to `Decimal::MAX` / `Decimal::MIN`. Values too small to
/// represent read as zero.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    if let Some(infinite) = leading_infinity(raw) {
        return Some(infinite);
    }

    let number = leading_number(raw, true)?;
    let parsed = if number.contains('e') {
        Decimal::from_scientific(&number)
    } else {
        Decimal::from_str(&number)
    };
    Some(parsed.unwrap_or_else(|_| saturate_amount(&number)))
}

/// `Infinity` with an optional sign, as a lenient float reader accepts it.
fn leading_infinity(raw: &str) -> Option<Decimal> {
    let text = raw.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if !rest.starts_with("Infinity") {
        return None;
    }
    Some(if negative { Decimal::MIN } else { Decimal::MAX })
}

/// Bound for a well-formed number that `Decimal` cannot hold.
fn saturate_amount(number: &str) -> Decimal {
    let (mantissa, exponent) = number.split_once('e').unwrap_or((number, ""));
    let is_zero = !mantissa.bytes().any(|b| matches!(b, b'1'..=b'9'));
    if is_zero || exponent.starts_with('-') {
        Decimal::ZERO
    } else if mantissa.starts_with('-') {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

/// Parse an integer count such as a supply figure. `"12.7"` reads as 12.
/// Counts beyond the `i64` range saturate.
pub fn parse_count(raw: &str) -> Option<i64> {
    let number = leading_number(raw, false)?;
    Some(number.parse().unwrap_or(if number.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}

/// Parse a timestamp. Accepts RFC 3339, naive date-times (as UTC) and
/// bare `YYYY-MM-DD` dates (UTC midnight).
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Optional-string variant of [`parse_instant`].
pub fn parse_optional_instant(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(parse_instant)
}
