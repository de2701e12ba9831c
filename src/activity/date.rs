use crate::entity::DisplayTimestamp;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;

const LOCAL_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Normalize a raw backend date: calendar formats first, then epoch millis.
pub fn normalize(raw: &str) -> DisplayTimestamp {
    let raw = raw.trim();
    if raw.is_empty() {
        return DisplayTimestamp::Unparseable;
    }

    parse_calendar(raw)
        .or_else(|| parse_epoch_millis(raw))
        .map(DisplayTimestamp::Parsed)
        .unwrap_or(DisplayTimestamp::Unparseable)
}

fn parse_calendar(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }

    // Offset-less timestamps are read as UTC
    for format in LOCAL_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    // Reduced precision ISO dates: `YYYY` and `YYYY-MM` start on the 1st
    lazy_static! {
        static ref YEAR_MONTH: Regex = Regex::new(r"^(\d{4})(?:-(\d{2}))?$").unwrap();
    }
    if let Some(caps) = YEAR_MONTH.captures(raw) {
        let year = caps[1].parse::<i32>().ok()?;
        let month = match caps.get(2) {
            Some(month) => month.as_str().parse::<u32>().ok()?,
            None => 1,
        };
        return NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc());
    }

    DateTime::parse_from_rfc2822(raw)
        .ok()
        .map(|instant| instant.with_timezone(&Utc))
}

fn parse_epoch_millis(raw: &str) -> Option<DateTime<Utc>> {
    lazy_static! {
        static ref EPOCH: Regex = Regex::new(r"^[+-]?\d+(?:\.\d+)?$").unwrap();
    }

    if !EPOCH.is_match(raw) {
        return None;
    }

    let millis = raw.parse::<f64>().ok()?.trunc();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return None;
    }

    DateTime::from_timestamp_millis(millis as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DisplayTimestamp {
        DisplayTimestamp::Parsed(Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap())
    }

    #[rstest]
    #[case("2024-03-01T12:30:00Z", utc(2024, 3, 1, 12, 30, 0))]
    #[case("2024-03-01T09:30:00-03:00", utc(2024, 3, 1, 12, 30, 0))]
    #[case("2024-03-01T12:30:00.250", utc(2024, 3, 1, 12, 30, 0))]
    #[case("2024-03-01 12:30:00", utc(2024, 3, 1, 12, 30, 0))]
    #[case("2024-03-01", utc(2024, 3, 1, 0, 0, 0))]
    #[case("2024-03", utc(2024, 3, 1, 0, 0, 0))]
    #[case("2024", utc(2024, 1, 1, 0, 0, 0))]
    #[case("Fri, 01 Mar 2024 12:30:00 +0000", utc(2024, 3, 1, 12, 30, 0))]
    fn parses_calendar_formats(#[case] raw: &str, #[case] expected: DisplayTimestamp) {
        let parsed = normalize(raw);
        assert_eq!(
            parsed.instant().map(|i| i.timestamp()),
            expected.instant().map(|i| i.timestamp())
        );
    }

    #[test]
    fn falls_back_to_epoch_millis() {
        assert_eq!(normalize("1709296200000"), utc(2024, 3, 1, 12, 30, 0));
        assert_eq!(normalize("  1709296200000  "), utc(2024, 3, 1, 12, 30, 0));
        assert_eq!(normalize("1709296200000.9"), utc(2024, 3, 1, 12, 30, 0));
        assert_eq!(normalize("0"), utc(1970, 1, 1, 0, 0, 0));
        assert_eq!(normalize("20240"), DisplayTimestamp::Parsed(DateTime::from_timestamp_millis(20240).unwrap()));
    }

    #[rstest]
    #[case("not-a-date")]
    #[case("")]
    #[case("   ")]
    #[case("12abc")]
    #[case("2024-13-45")]
    #[case("2024-13")]
    #[case("1e400")]
    #[case("99999999999999999999999999")]
    fn unparseable_input_yields_sentinel(#[case] raw: &str) {
        assert_eq!(normalize(raw), DisplayTimestamp::Unparseable);
    }

    #[test]
    fn sentinel_renders_placeholder() {
        assert_eq!(normalize("garbage").render("%d/%m/%Y"), "Fecha no válida");
        assert_eq!(normalize("2024-03-01").render("%d/%m/%Y"), "01/03/2024");
    }
}
