//! Live extension of open sessions and observation of the caller-owned
//! clock-in state machine.
//!
//! The engine never reads the wall clock. Callers pass `as_of` (usually
//! "now", refreshed every second while a timer is shown) and, once the
//! daily cap has been crossed, `freeze_at` so the displayed duration stops
//! at the crossing instant while the automatic time-out is being written.

use crate::models::accounting::DailyAccounting;
use crate::models::policy::Policy;
use crate::models::session::Session;
use crate::utils::time::{add_hours, duration_hours};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Instants an open session is measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clock {
    pub as_of: Option<DateTime<Utc>>,
    pub freeze_at: Option<DateTime<Utc>>,
}

impl Clock {
    pub fn at(as_of: DateTime<Utc>) -> Self {
        Self {
            as_of: Some(as_of),
            freeze_at: None,
        }
    }

    /// Measure open sessions as zero-length; used for completed-only totals.
    pub fn snapshot() -> Self {
        Self::default()
    }

    pub fn frozen_at(mut self, freeze_at: Option<DateTime<Utc>>) -> Self {
        self.freeze_at = freeze_at;
        self
    }

    /// The instant an open session is extended to, if any.
    pub fn effective(&self) -> Option<DateTime<Utc>> {
        match (self.as_of, self.freeze_at) {
            (Some(a), Some(f)) => Some(a.min(f)),
            (a, f) => a.or(f),
        }
    }
}

/// Uncapped worked hours of `session`, extending an open one to the clock.
pub fn raw_session_hours(session: &Session, clock: &Clock) -> f64 {
    let end = match session.time_out {
        Some(out) => out,
        None => match clock.effective() {
            Some(t) => t,
            None => return 0.0,
        },
    };
    duration_hours(session.time_in, end)
}

/// Instant at which an open session reaches the daily cap, given the regular
/// hours already consumed that day before it started.
pub fn cap_crossing_at(
    session: &Session,
    regular_consumed_before: f64,
    policy: &Policy,
) -> Option<DateTime<Utc>> {
    if !session.is_active {
        return None;
    }
    let remaining = (policy.daily_regular_cap_hours - regular_consumed_before).max(0.0);
    add_hours(session.time_in, remaining)
}

/// Cap-crossing instant of the active session of a day, if one is open.
pub fn day_cap_crossing_at(day: &DailyAccounting, policy: &Policy) -> Option<DateTime<Utc>> {
    let mut consumed = 0.0;
    for s in &day.sessions {
        if s.is_active {
            return cap_crossing_at(s, consumed, policy);
        }
        consumed += s.durations.accurate.regular_hours;
    }
    None
}

pub fn cap_reached(consumed: f64, policy: &Policy) -> bool {
    consumed + 1e-9 >= policy.daily_regular_cap_hours
}

/// Clock-in state of one owner on one day, as the UI drives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClockState {
    NotClockedIn,
    ClockedIn,
    /// Regular session still open although the cap was reached; the
    /// automatic time-out has not been persisted yet.
    AutoTimedOut,
    OvertimeEligible,
    OvertimeClockedIn,
    OvertimeClockedOut,
}

impl ClockState {
    pub fn label(&self) -> &'static str {
        match self {
            ClockState::NotClockedIn => "not clocked in",
            ClockState::ClockedIn => "clocked in",
            ClockState::AutoTimedOut => "auto timed out",
            ClockState::OvertimeEligible => "overtime eligible",
            ClockState::OvertimeClockedIn => "overtime clocked in",
            ClockState::OvertimeClockedOut => "overtime clocked out",
        }
    }
}

/// Observe the state for a day whose durations have been split.
pub fn observe_clock_state(day: &DailyAccounting, policy: &Policy) -> ClockState {
    let Some(last) = day.sessions.last() else {
        return ClockState::NotClockedIn;
    };

    let capped = cap_reached(day.regular_consumed, policy);

    match (last.is_active, last.session_type.is_overtime()) {
        (true, true) => ClockState::OvertimeClockedIn,
        (true, false) if capped => ClockState::AutoTimedOut,
        (true, false) => ClockState::ClockedIn,
        (false, true) => ClockState::OvertimeClockedOut,
        (false, false) if capped => ClockState::OvertimeEligible,
        (false, false) => ClockState::NotClockedIn,
    }
}
