//! Calendar and rounding helpers shared by the reporting services.

use chrono::{Datelike, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name of a month, 1-based. Returns `None` outside 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// First day of the month `date` falls in.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    // Day 1 always exists
    date.with_day(1).unwrap_or(date)
}

/// First and last day of the given month.
pub fn month_span(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next.pred_opt()?))
}

/// Round to two decimal places, the precision every percentage in the
/// reports is expressed with.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// round(actual / plan * 100, 2), or 0 when the denominator is zero.
pub fn percentage_of(actual: f64, total: f64) -> f64 {
    if total != 0.0 {
        round2(actual / total * 100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_month_start() {
        assert_eq!(month_start(date(2024, 3, 15)), date(2024, 3, 1));
        assert_eq!(month_start(date(2024, 3, 1)), date(2024, 3, 1));
    }

    #[test]
    fn test_month_span() {
        assert_eq!(month_span(2024, 2), Some((date(2024, 2, 1), date(2024, 2, 29))));
        assert_eq!(month_span(2025, 2), Some((date(2025, 2, 1), date(2025, 2, 28))));
        assert_eq!(month_span(2024, 12), Some((date(2024, 12, 1), date(2024, 12, 31))));
        assert_eq!(month_span(2024, 13), None);
    }

    #[test]
    fn test_percentage_of() {
        assert_eq!(percentage_of(450.0, 1000.0), 45.0);
        assert_eq!(percentage_of(1.0, 3.0), 33.33);
        assert_eq!(percentage_of(2.0, 3.0), 66.67);
        assert_eq!(percentage_of(100.0, 0.0), 0.0);
    }
}
