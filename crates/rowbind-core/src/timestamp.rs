//! Tiered timestamp parsing with ordered layout fallback.
//!
//! Layouts are grouped in three tiers tried in order: combined date+time,
//! date-only, time-only. Within a tier the first matching layout wins, and a
//! hit in one tier stops the search entirely. Date-only hits land at
//! midnight, time-only hits on the epoch date, so partial inputs stay on the
//! same axis as the zero timestamp.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Default combined date+time layouts.
///
/// Two-digit-year layouts come before the four-digit ones: `%Y` also accepts
/// two digits and would otherwise claim `15/01/24 10:30` as year 0024.
pub const DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%y %H:%M",    // 15/01/24 10:30
    "%d/%m/%y %H:%M:%S", // 15/01/24 10:30:00
    "%d/%m/%Y %H:%M",    // 15/01/2024 10:30
    "%d/%m/%Y %H:%M:%S", // 15/01/2024 10:30:00
    "%Y-%m-%d %H:%M",    // 2024-01-15 10:30
    "%Y-%m-%d %H:%M:%S", // 2024-01-15 10:30:00
];

/// Default date-only layouts.
pub const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", // 2024-01-15
    "%d/%m/%y", // 15/01/24
    "%d/%m/%Y", // 15/01/2024
];

/// Default time-only layouts.
pub const TIME_FORMATS: &[&str] = &[
    "%H:%M:%S", // 10:30:00
    "%H:%M",    // 10:30
];

/// Replaceable layout configuration for timestamp coercion.
///
/// A plain value: callers extend or swap the recognized layouts by handing a
/// modified copy to the binder options, nothing is process-global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampFormats {
    /// Combined date+time layouts, tried first.
    pub datetime: Vec<String>,
    /// Date-only layouts, bound at midnight.
    pub date: Vec<String>,
    /// Time-only layouts, bound on the epoch date.
    pub time: Vec<String>,
}

impl Default for TimestampFormats {
    fn default() -> Self {
        Self {
            datetime: owned(DATETIME_FORMATS),
            date: owned(DATE_FORMATS),
            time: owned(TIME_FORMATS),
        }
    }
}

/// Parse `text` through the tiered layout fallback.
///
/// Returns `None` when no layout in any tier matches.
#[must_use]
pub fn parse_timestamp(text: &str, formats: &TimestampFormats) -> Option<NaiveDateTime> {
    if let Some(datetime) = try_datetime(text, &formats.datetime) {
        return Some(datetime);
    }
    if let Some(date) = try_date(text, &formats.date) {
        return Some(date.and_time(NaiveTime::MIN));
    }
    if let Some(time) = try_time(text, &formats.time) {
        return Some(NaiveDate::default().and_time(time));
    }
    None
}

fn try_datetime(text: &str, formats: &[String]) -> Option<NaiveDateTime> {
    formats
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(text, f).ok())
}

fn try_date(text: &str, formats: &[String]) -> Option<NaiveDate> {
    formats
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(text, f).ok())
}

fn try_time(text: &str, formats: &[String]) -> Option<NaiveTime> {
    formats
        .iter()
        .find_map(|f| NaiveTime::parse_from_str(text, f).ok())
}

fn owned(formats: &[&str]) -> Vec<String> {
    formats.iter().map(|f| (*f).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Option<NaiveDateTime> {
        parse_timestamp(text, &TimestampFormats::default())
    }

    fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn combined_layouts_cover_both_orders() {
        assert_eq!(parse("15/01/2024 10:30"), Some(datetime(2024, 1, 15, 10, 30, 0)));
        assert_eq!(
            parse("2024-01-15 10:30:00"),
            Some(datetime(2024, 1, 15, 10, 30, 0))
        );
    }

    #[test]
    fn two_digit_years_map_into_the_current_century() {
        assert_eq!(parse("02/01/06 15:04:05"), Some(datetime(2006, 1, 2, 15, 4, 5)));
        assert_eq!(parse("15/01/24 10:30"), Some(datetime(2024, 1, 15, 10, 30, 0)));
    }

    #[test]
    fn date_only_binds_at_midnight() {
        assert_eq!(parse("2006-01-02"), Some(datetime(2006, 1, 2, 0, 0, 0)));
        assert_eq!(parse("02/01/2006"), Some(datetime(2006, 1, 2, 0, 0, 0)));
        assert_eq!(parse("02/01/06"), Some(datetime(2006, 1, 2, 0, 0, 0)));
    }

    #[test]
    fn time_only_binds_on_the_epoch_date() {
        assert_eq!(parse("15:04"), Some(datetime(1970, 1, 1, 15, 4, 0)));
        assert_eq!(parse("15:04:05"), Some(datetime(1970, 1, 1, 15, 4, 5)));
    }

    #[test]
    fn unrecognized_text_is_none() {
        assert_eq!(parse("March 3rd"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("2024-13-40"), None);
    }

    #[test]
    fn trailing_text_does_not_match() {
        assert_eq!(parse("2024-01-15 extra"), None);
    }

    #[test]
    fn custom_formats_replace_the_defaults() {
        let formats = TimestampFormats {
            datetime: Vec::new(),
            date: vec!["%d-%b-%Y".to_string()],
            time: Vec::new(),
        };
        assert_eq!(
            parse_timestamp("15-Jan-2024", &formats),
            Some(datetime(2024, 1, 15, 0, 0, 0))
        );
        // The defaults no longer apply once replaced.
        assert_eq!(parse_timestamp("2024-01-15", &formats), None);
    }
}
