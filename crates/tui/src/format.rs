//! Display formatting for amounts and dates.
//!
//! Mirrors the web dashboard's presentation exactly: a fixed `USD` label with
//! comma grouping and a suppressed `.00`, and `Mon D, YYYY` dates with a
//! literal `Invalid Date` marker for malformed input.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};

/// Fixed currency label; the dashboard presents a single home currency.
pub const CURRENCY_LABEL: &str = "USD";

const INVALID_DATE: &str = "Invalid Date";

/// Formats an amount as e.g. `USD 1,234.56`, `USD 1,000` or `-USD 1,000`.
///
/// The fractional part is omitted when the value is integral, otherwise
/// exactly two digits are shown. The sign precedes the currency label.
/// Non-finite input is treated as 0; there is no error path.
#[must_use]
pub fn format_money(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = (amount.abs() * 100.0).round() as i64;
    let sign = if amount.is_sign_negative() && cents != 0 {
        "-"
    } else {
        ""
    };

    let whole = group_thousands(cents / 100);
    let frac = cents % 100;
    if frac == 0 {
        format!("{sign}{CURRENCY_LABEL} {whole}")
    } else {
        format!("{sign}{CURRENCY_LABEL} {whole}.{frac:02}")
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats an ISO-8601 timestamp as e.g. `Jan 15, 2024`.
///
/// Malformed or empty input yields the literal `Invalid Date` marker; this is
/// documented behavior, not an error.
#[must_use]
pub fn format_date(iso: &str) -> String {
    match parse_date(iso) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Boundary parser shared by the formatter and the filter predicate.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (read as midnight
/// UTC). Returns `None` for anything else.
#[must_use]
pub fn parse_date(iso: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(iso) {
        return Some(parsed);
    }
    iso.parse::<NaiveDate>()
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_money_groups_thousands() {
        assert_eq!(format_money(1000.0), "USD 1,000");
        assert_eq!(format_money(1234.56), "USD 1,234.56");
        assert_eq!(format_money(1000000.0), "USD 1,000,000");
        assert_eq!(format_money(1234567.89), "USD 1,234,567.89");
    }

    #[test]
    fn format_money_zero() {
        assert_eq!(format_money(0.0), "USD 0");
    }

    #[test]
    fn format_money_sign_precedes_label() {
        assert_eq!(format_money(-1000.0), "-USD 1,000");
        assert_eq!(format_money(-1234.56), "-USD 1,234.56");
    }

    #[test]
    fn format_money_omits_zero_fraction_only() {
        assert_eq!(format_money(100.0), "USD 100");
        assert_eq!(format_money(1234.5), "USD 1,234.50");
        assert_eq!(format_money(99.99), "USD 99.99");
    }

    #[test]
    fn format_money_treats_non_finite_as_zero() {
        assert_eq!(format_money(f64::NAN), "USD 0");
        assert_eq!(format_money(f64::INFINITY), "USD 0");
        assert_eq!(format_money(-0.0), "USD 0");
    }

    #[test]
    fn format_date_short_month_unpadded_day() {
        assert_eq!(format_date("2024-01-15T00:00:00.000Z"), "Jan 15, 2024");
        assert_eq!(format_date("2024-12-25T00:00:00.000Z"), "Dec 25, 2024");
        assert_eq!(format_date("2023-06-30T12:00:00.000Z"), "Jun 30, 2023");
        assert_eq!(format_date("2024-03-05"), "Mar 5, 2024");
    }

    #[test]
    fn format_date_marks_invalid_input() {
        assert_eq!(format_date(""), "Invalid Date");
        assert_eq!(format_date("not-a-date"), "Invalid Date");
        assert_eq!(format_date("2024-13-40"), "Invalid Date");
    }

    #[test]
    fn parse_date_keeps_offset() {
        let parsed = parse_date("2024-01-15T10:30:00+02:00").unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 2 * 3600);
    }
}
