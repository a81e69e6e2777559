use super::time_log::{LogType, OvertimeStatus, TimeLogRecord};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Regular-hours figure shown to users: capped at the remaining daily
/// allowance and truncated to policy precision.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AccurateDuration {
    pub regular_hours: f64,
}

/// Uncapped worked time and the overtime derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RawDuration {
    pub total_hours: f64,
    pub overtime_hours: f64,
    pub overtime_status: OvertimeStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SessionDurations {
    pub accurate: AccurateDuration,
    pub raw: RawDuration,
}

/// One continuous block of work for one owner on one owner-local day.
///
/// Built fresh from a snapshot on every call; `durations` is filled by the
/// splitter and stays zeroed for sessions that have not been through it.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub owner_id: String,
    pub date: NaiveDate,
    pub time_in: DateTime<Utc>,
    pub time_out: Option<DateTime<Utc>>,
    pub session_type: LogType,
    pub overtime_status: Option<OvertimeStatus>,
    pub is_continuous_session: bool,
    pub is_active: bool,
    pub logs: Vec<TimeLogRecord>,
    pub durations: SessionDurations,
}

impl Session {
    pub fn log_ids(&self) -> Vec<&str> {
        self.logs.iter().map(|l| l.id.as_str()).collect()
    }

    /// Overtime status used for classification; untagged overtime is pending.
    pub fn effective_overtime_status(&self) -> OvertimeStatus {
        self.overtime_status.unwrap_or_default()
    }

    pub fn is_rejected_overtime(&self) -> bool {
        self.session_type.is_overtime()
            && self.effective_overtime_status() == OvertimeStatus::Rejected
    }

    /// Hours this session credits toward the internship requirement.
    ///
    /// Open sessions credit nothing. Regular hours count unless the session
    /// is overtime-tagged and rejected; overtime counts only once approved.
    pub fn credited_hours(&self) -> f64 {
        if self.is_active {
            return 0.0;
        }

        let regular = if self.is_rejected_overtime() {
            0.0
        } else {
            self.durations.accurate.regular_hours
        };

        let overtime = if self.durations.raw.overtime_status == OvertimeStatus::Approved {
            self.durations.raw.overtime_hours
        } else {
            0.0
        };

        regular + overtime
    }
}
