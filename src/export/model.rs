// src/export/model.rs

use crate::models::policy::Policy;
use crate::models::session::Session;
use crate::utils::time::format_decimal;
use serde::Serialize;

/// Flat daily-time-record row, one per session.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub owner_id: String,
    pub date: String,
    pub time_in: String,
    pub time_out: String,
    pub session_type: String,
    pub overtime_status: String,
    pub continuous: bool,
    pub active: bool,
    pub log_ids: String,
    pub regular_hours: String,
    pub raw_hours: String,
    pub overtime_hours: String,
    pub credited_hours: String,
}

impl SessionExport {
    pub fn from_session(s: &Session, policy: &Policy) -> Self {
        let local = |t: chrono::DateTime<chrono::Utc>| {
            t.with_timezone(&policy.utc_offset)
                .format("%H:%M:%S")
                .to_string()
        };
        let hours = |h: f64| format_decimal(h, policy.precision);

        Self {
            owner_id: s.owner_id.clone(),
            date: s.date.format("%Y-%m-%d").to_string(),
            time_in: local(s.time_in),
            time_out: s.time_out.map(local).unwrap_or_default(),
            session_type: s.session_type.as_str().to_string(),
            overtime_status: s.durations.raw.overtime_status.as_str().to_string(),
            continuous: s.is_continuous_session,
            active: s.is_active,
            log_ids: s.log_ids().join(";"),
            regular_hours: hours(s.durations.accurate.regular_hours),
            raw_hours: hours(s.durations.raw.total_hours),
            overtime_hours: hours(s.durations.raw.overtime_hours),
            credited_hours: hours(s.credited_hours()),
        }
    }
}
