use super::session::Session;
use chrono::NaiveDate;
use serde::Serialize;

/// Fold result for one owner on one owner-local day.
#[derive(Debug, Clone, Serialize)]
pub struct DailyAccounting {
    pub owner_id: String,
    pub date: NaiveDate,
    /// Regular hours consumed against the daily cap, in session order.
    pub regular_consumed: f64,
    pub sessions: Vec<Session>,
}

/// Per-owner totals over a whole log history.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OwnerSummary {
    pub owner_id: String,
    pub regular_hours: f64,
    pub approved_overtime_hours: f64,
    pub pending_overtime_hours: f64,
    pub rejected_overtime_hours: f64,
    pub open_sessions: usize,
    pub days_worked: usize,
    pub days: Vec<DailyAccounting>,
}

/// The one figure every screen reports for "hours completed".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InternshipProgress {
    pub internship_progress: f64,
    pub progress_percentage: f64,
    pub required_hours: f64,
}

impl InternshipProgress {
    /// Percentage clamped to 100 for rendering; the stored value is not.
    pub fn display_percentage(&self) -> f64 {
        self.progress_percentage.clamp(0.0, 100.0)
    }

    pub fn remaining_hours(&self) -> f64 {
        (self.required_hours - self.internship_progress).max(0.0)
    }
}
