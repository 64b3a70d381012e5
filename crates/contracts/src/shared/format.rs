//! Short date formats used by the pickers and list pages.

use super::calendar::YearMonth;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// `dd.mm.yy`, e.g. 2024-03-05 -> "05.03.24".
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{:02}.{:02}.{:02}",
        date.day(),
        date.month(),
        date.year().rem_euclid(100)
    )
}

/// `mm.yy`, e.g. March 2024 -> "03.24".
pub fn format_month(value: YearMonth) -> String {
    format!(
        "{:02}.{:02}",
        value.month.number(),
        value.year.rem_euclid(100)
    )
}

/// Full years between `birth` and `today`.
pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> u32 {
    today.years_since(birth).unwrap_or(0)
}

/// Date part of an ISO-8601 string: `2024-03-15`, `2024-03-15T14:02:26`
/// or an RFC 3339 timestamp with offset.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    None
}

/// ISO-8601 midnight UTC timestamp for a picked date, as the API stores dates.
pub fn to_iso_datetime(date: NaiveDate) -> String {
    format!("{}T00:00:00Z", date.format("%Y-%m-%d"))
}

/// Сумма с двумя знаками после запятой: 1234.5 -> "1234.50".
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::calendar::Month;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2024, 3, 5)), "05.03.24");
        assert_eq!(format_date(date(2009, 12, 31)), "31.12.09");
        assert_eq!(format_date(date(2000, 1, 1)), "01.01.00");
    }

    #[test]
    fn test_format_month() {
        let value = YearMonth::new(2024, Month::new(2).unwrap());
        assert_eq!(format_month(value), "03.24");
    }

    #[test]
    fn test_calculate_age() {
        assert_eq!(calculate_age(date(1990, 10, 20), date(2026, 10, 19)), 35);
        assert_eq!(calculate_age(date(1990, 10, 19), date(2026, 10, 19)), 36);
        assert_eq!(calculate_age(date(2030, 1, 1), date(2026, 10, 19)), 0);
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2024-03-15"), Some(date(2024, 3, 15)));
        assert_eq!(parse_iso_date("2024-03-15T14:02:26.123Z"), Some(date(2024, 3, 15)));
        assert_eq!(parse_iso_date("2024-03-15T14:02:26"), Some(date(2024, 3, 15)));
        assert_eq!(parse_iso_date("15.03.2024"), None);
        assert_eq!(to_iso_datetime(date(2024, 3, 15)), "2024-03-15T00:00:00Z");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1234.5), "1234.50");
        assert_eq!(format_amount(-3.0), "-3.00");
    }
}
