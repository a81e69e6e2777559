//! Time arithmetic shared by every part of the engine: defensive timestamp
//! parsing, owner-local calendar days, hour conversion and truncation.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::warn;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Naive layouts accepted besides RFC 3339. They are read as owner-local time.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Strict parse: `None` when `raw` matches no supported layout.
pub fn parse_timestamp(raw: &str, offset: &FixedOffset) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(raw, fmt)
            .ok()
            .and_then(|ndt| offset.from_local_datetime(&ndt).single())
            .map(|dt| dt.with_timezone(&Utc))
    })
}

/// Parse `raw`, or log a warning and return `fallback`. Never fails.
pub fn parse_safe(raw: &str, fallback: DateTime<Utc>, offset: &FixedOffset) -> DateTime<Utc> {
    match parse_timestamp(raw, offset) {
        Some(dt) => dt,
        None => {
            warn!(raw, %fallback, "malformed timestamp, using fallback");
            fallback
        }
    }
}

/// Owner-local calendar day an instant belongs to.
pub fn local_calendar_day(instant: DateTime<Utc>, offset: &FixedOffset) -> NaiveDate {
    instant.with_timezone(offset).date_naive()
}

/// `YYYY-MM-DD` grouping key for `instant`.
pub fn calendar_day_key(instant: DateTime<Utc>, offset: &FixedOffset) -> String {
    local_calendar_day(instant, offset)
        .format("%Y-%m-%d")
        .to_string()
}

/// Truncate toward zero at `precision` decimal digits. Never rounds:
/// `truncate(1.2399, 2) == 1.23`. Non-finite input yields 0.
pub fn truncate(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }

    let factor = 10f64.powi(precision as i32);
    let raw = value * factor;
    // 1.15 * 100 is 114.999..., snap binary noise unless that lands above the input
    let snapped = (raw * 1e6).round() / 1e6;
    let scaled = if snapped.abs() / factor <= value.abs() { snapped } else { raw };
    scaled.trunc() / factor
}

pub fn ms_to_hours(ms: i64) -> f64 {
    ms as f64 / MS_PER_HOUR
}

/// Hours between `start` and `end`, clamped to 0 when negative.
pub fn duration_hours(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let hours = ms_to_hours((end - start).num_milliseconds());
    if hours.is_nan() || hours < 0.0 {
        0.0
    } else {
        hours
    }
}

/// Instant `hours` after `start`, at millisecond resolution. `None` when
/// the result falls outside the representable range.
pub fn add_hours(start: DateTime<Utc>, hours: f64) -> Option<DateTime<Utc>> {
    let ms = (hours.max(0.0) * MS_PER_HOUR).round();
    if !ms.is_finite() || ms >= i64::MAX as f64 {
        return None;
    }
    let delta = chrono::TimeDelta::try_milliseconds(ms as i64)?;
    start.checked_add_signed(delta)
}

/// `09h 30m` style rendering of a decimal hour value.
pub fn format_hours(hours: f64) -> String {
    let mins = (hours.max(0.0) * 60.0 + 1e-6).floor() as i64;
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}

/// Fixed-precision decimal rendering, truncated rather than rounded.
pub fn format_decimal(hours: f64, precision: u32) -> String {
    format!(
        "{:.prec$}",
        truncate(hours, precision),
        prec = precision as usize
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manila() -> FixedOffset {
        FixedOffset::east_opt(8 * 3600).unwrap()
    }

    #[test]
    fn truncate_never_rounds_up() {
        assert_eq!(truncate(1.2399, 2), 1.23);
        assert_eq!(truncate(1.236, 2), 1.23);
        assert_ne!(truncate(1.236, 2), 1.24);
    }

    #[test]
    fn truncate_absorbs_binary_noise() {
        assert_eq!(truncate(1.15, 2), 1.15);
        assert_eq!(truncate(9.0, 2), 9.0);
    }

    #[test]
    fn truncate_goes_toward_zero_for_negatives() {
        assert_eq!(truncate(-1.239, 2), -1.23);
    }

    #[test]
    fn truncate_never_exceeds_input() {
        for x in [0.001, 0.999, 1.005, 2.675, 7.4999, 8.999999, 12.3456] {
            assert!(truncate(x, 2) <= x, "truncate({x}) exceeded input");
        }
    }

    #[test]
    fn truncate_does_not_snap_past_the_input() {
        let x = 1.239999999_f64;
        let t = truncate(x, 2);
        assert!(t <= x, "truncate({x}) = {t}");
        assert_eq!(t, 1.23);
        assert_eq!(truncate(8.9999999, 2), 8.99);
        assert_eq!(truncate(-1.239999999, 2), -1.23);
    }

    #[test]
    fn truncate_non_finite_is_zero() {
        assert_eq!(truncate(f64::NAN, 2), 0.0);
        assert_eq!(truncate(f64::INFINITY, 2), 0.0);
    }

    #[test]
    fn duration_clamps_negative_to_zero() {
        let off = manila();
        let a = parse_timestamp("2025-03-03T09:00:00+08:00", &off).unwrap();
        let b = parse_timestamp("2025-03-03T08:00:00+08:00", &off).unwrap();
        assert_eq!(duration_hours(a, b), 0.0);
        assert_eq!(duration_hours(b, a), 1.0);
    }

    #[test]
    fn naive_timestamps_use_owner_offset() {
        let off = manila();
        let naive = parse_timestamp("2025-03-03 09:00:00", &off).unwrap();
        let explicit = parse_timestamp("2025-03-03T01:00:00Z", &off).unwrap();
        assert_eq!(naive, explicit);
    }

    #[test]
    fn calendar_day_follows_owner_offset() {
        let off = manila();
        // 17:30 UTC is already the next day in UTC+8
        let t = parse_timestamp("2025-03-03T17:30:00Z", &off).unwrap();
        assert_eq!(calendar_day_key(t, &off), "2025-03-04");
    }

    #[test]
    fn parse_safe_falls_back() {
        let off = manila();
        let fallback = parse_timestamp("2025-01-01T00:00:00Z", &off).unwrap();
        assert_eq!(parse_safe("not-a-date", fallback, &off), fallback);
        assert_eq!(parse_safe("", fallback, &off), fallback);
    }

    #[test]
    fn format_helpers() {
        assert_eq!(format_hours(9.5), "09h 30m");
        assert_eq!(format_hours(0.75), "00h 45m");
        assert_eq!(format_decimal(1.236, 2), "1.23");
    }

    #[test]
    fn add_hours_round_trips_duration() {
        let off = manila();
        let start = parse_timestamp("2025-03-03T09:00:00+08:00", &off).unwrap();
        let end = add_hours(start, 8.25).unwrap();
        assert_eq!(duration_hours(start, end), 8.25);
    }

    #[test]
    fn add_hours_out_of_range_is_none() {
        let off = manila();
        let start = parse_timestamp("2025-03-03T09:00:00+08:00", &off).unwrap();
        assert_eq!(add_hours(start, 1e12), None);
        assert_eq!(add_hours(start, f64::INFINITY), None);
    }
}
