//! Engine entry points. Every consumer that shows sessions or "hours
//! completed" goes through `Core` so all screens report the same numbers.

use crate::core::calculator::progress::{self, ProgressOptions};
use crate::core::calculator::realtime::{self, Clock, ClockState};
use crate::models::accounting::{DailyAccounting, InternshipProgress, OwnerSummary};
use crate::models::policy::Policy;
use crate::models::session::Session;
use crate::models::time_log::TimeLogRecord;
use chrono::{DateTime, NaiveDate, Utc};

pub struct Core;

impl Core {
    /// Sessions with durations filled, extending open ones to `as_of`
    /// (or to `freeze_at` once the caller has frozen the timer).
    pub fn build_sessions(
        logs: &[TimeLogRecord],
        as_of: DateTime<Utc>,
        freeze_at: Option<DateTime<Utc>>,
        policy: &Policy,
    ) -> Vec<Session> {
        Self::daily_accounting(logs, as_of, freeze_at, policy)
            .into_iter()
            .flat_map(|day| day.sessions)
            .collect()
    }

    /// Same as `build_sessions`, keeping the per-day fold results.
    pub fn daily_accounting(
        logs: &[TimeLogRecord],
        as_of: DateTime<Utc>,
        freeze_at: Option<DateTime<Utc>>,
        policy: &Policy,
    ) -> Vec<DailyAccounting> {
        let clock = Clock::at(as_of).frozen_at(freeze_at);
        progress::daily_accounting(logs, &clock, policy)
    }

    pub fn compute_progress(
        logs: &[TimeLogRecord],
        owner_id: &str,
        options: &ProgressOptions<'_>,
        policy: &Policy,
    ) -> InternshipProgress {
        progress::compute_progress(logs, owner_id, options, policy)
    }

    pub fn summarize_owner(
        logs: &[TimeLogRecord],
        owner_id: &str,
        options: &ProgressOptions<'_>,
        policy: &Policy,
    ) -> OwnerSummary {
        progress::summarize_owner(logs, owner_id, options, policy)
    }

    /// Observed clock-in state for `owner_id` on `date`, plus the instant at
    /// which an open regular session reaches the daily cap.
    pub fn clock_status(
        logs: &[TimeLogRecord],
        owner_id: &str,
        date: NaiveDate,
        as_of: DateTime<Utc>,
        policy: &Policy,
    ) -> (ClockState, Option<DateTime<Utc>>) {
        let owned: Vec<TimeLogRecord> = logs
            .iter()
            .filter(|l| l.owner_id == owner_id)
            .cloned()
            .collect();

        let days = progress::daily_accounting(&owned, &Clock::at(as_of), policy);
        match days.iter().find(|d| d.date == date) {
            Some(day) => (
                realtime::observe_clock_state(day, policy),
                realtime::day_cap_crossing_at(day, policy),
            ),
            None => (ClockState::NotClockedIn, None),
        }
    }
}
