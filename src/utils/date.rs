//! Calendar helpers for `--period` filters.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Inclusive date bounds for a period expression.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - any of the above as `start:end`, both sides in the same shape
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = p.trim();

    if let Some((start, end)) = p.split_once(':') {
        let (start, end) = (start.trim(), end.trim());
        if start.len() != end.len() {
            return Err(AppError::InvalidPeriod(format!(
                "start and end must have the same format: {p}"
            )));
        }
        let (d1, _) = single_period(start)?;
        let (_, d2) = single_period(end)?;
        if d2 < d1 {
            return Err(AppError::InvalidPeriod(format!("end precedes start: {p}")));
        }
        return Ok((d1, d2));
    }

    single_period(p)
}

fn single_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(p.to_string());

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = parse_date(&format!("{p}-01")).ok_or_else(invalid)?;
            Ok((d1, last_day_of_month(d1).ok_or_else(invalid)?))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

pub fn last_day_of_month(d: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1).and_then(|first| first.pred_opt())
}

pub fn in_period(d: NaiveDate, bounds: Option<(NaiveDate, NaiveDate)>) -> bool {
    match bounds {
        Some((from, to)) => d >= from && d <= to,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn month_period_covers_whole_month() {
        assert_eq!(
            parse_period("2024-02").unwrap(),
            (d("2024-02-01"), d("2024-02-29"))
        );
        assert_eq!(
            parse_period("2025-12").unwrap(),
            (d("2025-12-01"), d("2025-12-31"))
        );
    }

    #[test]
    fn range_periods() {
        assert_eq!(
            parse_period("2025-01:2025-03").unwrap(),
            (d("2025-01-01"), d("2025-03-31"))
        );
        assert_eq!(
            parse_period("2025-01-05:2025-01-09").unwrap(),
            (d("2025-01-05"), d("2025-01-09"))
        );
    }

    #[test]
    fn rejects_mixed_or_reversed_ranges() {
        assert!(parse_period("2025:2025-03").is_err());
        assert!(parse_period("2025-03-01:2025-01-01").is_err());
        assert!(parse_period("March").is_err());
    }
}
