//! Duration splitter: regular vs. overtime per session under a daily cap
//! threaded through the day's sessions in chronological order.

use crate::core::calculator::realtime::{Clock, raw_session_hours};
use crate::models::accounting::DailyAccounting;
use crate::models::policy::Policy;
use crate::models::session::{AccurateDuration, RawDuration, Session, SessionDurations};
use crate::models::time_log::OvertimeStatus;
use crate::utils::time::truncate;
use tracing::debug;

/// Fold state carried from one session to the next within a day.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CapAccumulator {
    pub regular_consumed_so_far: f64,
}

/// Split one session's worked hours.
///
/// The accumulator advances by the capped, truncated regular figure, so
/// truncation error never compounds beyond one unit of precision.
pub fn split_hours(
    raw_hours: f64,
    overtime_status: OvertimeStatus,
    acc: CapAccumulator,
    policy: &Policy,
) -> (SessionDurations, CapAccumulator) {
    let raw_hours = if raw_hours.is_finite() {
        raw_hours.max(0.0)
    } else {
        0.0
    };
    let remaining = policy.daily_regular_cap_hours - acc.regular_consumed_so_far;

    let regular = truncate(raw_hours.min(remaining), policy.precision).max(0.0);
    let overtime = truncate((raw_hours - regular).max(0.0), policy.precision);

    let durations = SessionDurations {
        accurate: AccurateDuration {
            regular_hours: regular,
        },
        raw: RawDuration {
            total_hours: truncate(raw_hours, policy.precision),
            overtime_hours: overtime,
            overtime_status,
        },
    };

    let next = CapAccumulator {
        regular_consumed_so_far: acc.regular_consumed_so_far + regular,
    };

    (durations, next)
}

/// Fill `durations` for each session of one owner/day, in order.
pub fn split_day(mut sessions: Vec<Session>, clock: &Clock, policy: &Policy) -> DailyAccounting {
    let owner_id = sessions
        .first()
        .map(|s| s.owner_id.clone())
        .unwrap_or_default();
    let date = sessions.first().map(|s| s.date).unwrap_or_default();

    let acc = sessions
        .iter_mut()
        .fold(CapAccumulator::default(), |acc, session| {
            let raw = raw_session_hours(session, clock);
            let (durations, next) =
                split_hours(raw, session.effective_overtime_status(), acc, policy);

            debug!(
                owner_id = %session.owner_id,
                date = %session.date,
                raw,
                regular = durations.accurate.regular_hours,
                overtime = durations.raw.overtime_hours,
                "session split"
            );

            session.durations = durations;
            next
        });

    DailyAccounting {
        owner_id,
        date,
        regular_consumed: truncate(acc.regular_consumed_so_far, policy.precision),
        sessions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> Policy {
        Policy::default()
    }

    #[test]
    fn long_regular_session_overflows_into_overtime() {
        let (d, acc) = split_hours(
            9.5,
            OvertimeStatus::Pending,
            CapAccumulator::default(),
            &policy(),
        );
        assert_eq!(d.accurate.regular_hours, 9.0);
        assert_eq!(d.raw.overtime_hours, 0.5);
        assert_eq!(d.raw.total_hours, 9.5);
        assert_eq!(d.raw.overtime_status, OvertimeStatus::Pending);
        assert_eq!(acc.regular_consumed_so_far, 9.0);
    }

    #[test]
    fn cap_is_threaded_across_sessions() {
        let p = policy();
        let mut acc = CapAccumulator::default();
        let mut regulars = Vec::new();

        for raw in [4.0, 3.5, 2.25] {
            let (d, next) = split_hours(raw, OvertimeStatus::Pending, acc, &p);
            regulars.push(d.accurate.regular_hours);
            acc = next;
            assert!(acc.regular_consumed_so_far <= p.daily_regular_cap_hours);
        }

        assert_eq!(regulars, vec![4.0, 3.5, 1.5]);
    }

    #[test]
    fn session_after_cap_is_all_overtime() {
        let p = policy();
        let acc = CapAccumulator {
            regular_consumed_so_far: 9.0,
        };
        let (d, next) = split_hours(2.0, OvertimeStatus::Approved, acc, &p);
        assert_eq!(d.accurate.regular_hours, 0.0);
        assert_eq!(d.raw.overtime_hours, 2.0);
        assert_eq!(next, acc);
    }

    #[test]
    fn regular_hours_are_truncated_not_rounded() {
        // 1h 14m 23s = 1.2397h
        let raw = 1.0 + 14.0 / 60.0 + 23.0 / 3600.0;
        let (d, _) = split_hours(
            raw,
            OvertimeStatus::Pending,
            CapAccumulator::default(),
            &policy(),
        );
        assert_eq!(d.accurate.regular_hours, 1.23);
        assert_eq!(d.raw.overtime_hours, 0.0);
    }

    #[test]
    fn non_finite_input_counts_as_zero() {
        let (d, _) = split_hours(
            f64::NAN,
            OvertimeStatus::Pending,
            CapAccumulator::default(),
            &policy(),
        );
        assert_eq!(d, SessionDurations::default());
    }
}
