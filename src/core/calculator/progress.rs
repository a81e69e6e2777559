//! Statistics aggregator: folds an owner's whole log history, optionally
//! corrected by approved edit requests, into one progress figure.

use crate::core::calculator::realtime::Clock;
use crate::core::calculator::sessions::{build_day_sessions, group_by_owner_day, parse_records};
use crate::core::calculator::splitter::split_day;
use crate::models::accounting::{DailyAccounting, InternshipProgress, OwnerSummary};
use crate::models::edit_request::EditRequest;
use crate::models::policy::Policy;
use crate::models::time_log::{LogStatus, OvertimeStatus, TimeLogRecord};
use crate::utils::time::{local_calendar_day, parse_timestamp, truncate};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Caller-supplied options for `compute_progress`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressOptions<'a> {
    pub required_hours: f64,
    pub include_edit_requests: bool,
    pub edit_requests: Option<&'a [EditRequest]>,
}

/// Copy of `logs` with every approved edit request applied exactly once.
///
/// When several approved requests target the same log, the last one wins.
pub fn apply_edit_overlay(
    logs: &[TimeLogRecord],
    requests: &[EditRequest],
    policy: &Policy,
) -> Vec<TimeLogRecord> {
    let mut by_log: HashMap<&str, &EditRequest> = HashMap::new();
    for req in requests.iter().filter(|r| r.is_approved()) {
        if let Some(prev) = by_log.insert(req.log_id.as_str(), req) {
            warn!(
                log_id = %req.log_id,
                superseded = %prev.id,
                kept = %req.id,
                "several approved edit requests for one log, keeping the last"
            );
        }
    }

    logs.iter()
        .map(|log| match by_log.get(log.id.as_str()) {
            Some(req) => apply_one(log, req, policy),
            None => log.clone(),
        })
        .collect()
}

fn apply_one(log: &TimeLogRecord, req: &EditRequest, policy: &Policy) -> TimeLogRecord {
    let mut edited = log.clone();

    if let Some(tin) = &req.requested_time_in {
        edited.time_in = tin.clone();
    }
    if let Some(tout) = &req.requested_time_out {
        edited.time_out = Some(tout.clone());
    }
    edited.status = if edited.time_out.is_some() {
        LogStatus::Completed
    } else {
        LogStatus::Pending
    };

    let offset = &policy.utc_offset;
    let before = parse_timestamp(&log.time_in, offset).map(|t| local_calendar_day(t, offset));
    let after = parse_timestamp(&edited.time_in, offset).map(|t| local_calendar_day(t, offset));
    if let (Some(before), Some(after)) = (before, after)
        && before != after
    {
        warn!(
            log_id = %log.id,
            request_id = %req.id,
            %before,
            %after,
            "approved edit moves the log to another day, hours attributed to the corrected day"
        );
    }

    debug!(log_id = %log.id, request_id = %req.id, "edit request applied");
    edited
}

/// Split accounting for every owner/day in `logs`.
pub fn daily_accounting(
    logs: &[TimeLogRecord],
    clock: &Clock,
    policy: &Policy,
) -> Vec<DailyAccounting> {
    group_by_owner_day(parse_records(logs, policy))
        .into_iter()
        .map(|group| split_day(build_day_sessions(group), clock, policy))
        .filter(|day| !day.sessions.is_empty())
        .collect()
}

fn owner_logs(
    logs: &[TimeLogRecord],
    owner_id: &str,
    options: &ProgressOptions<'_>,
    policy: &Policy,
) -> Vec<TimeLogRecord> {
    let owned: Vec<TimeLogRecord> = logs
        .iter()
        .filter(|l| l.owner_id == owner_id)
        .cloned()
        .collect();

    match (options.include_edit_requests, options.edit_requests) {
        (true, Some(requests)) => apply_edit_overlay(&owned, requests, policy),
        _ => owned,
    }
}

/// Per-owner totals over the completed history. Open sessions are counted
/// but credit nothing.
pub fn summarize_owner(
    logs: &[TimeLogRecord],
    owner_id: &str,
    options: &ProgressOptions<'_>,
    policy: &Policy,
) -> OwnerSummary {
    let owned = owner_logs(logs, owner_id, options, policy);
    let days = daily_accounting(&owned, &Clock::snapshot(), policy);

    let mut summary = OwnerSummary {
        owner_id: owner_id.to_string(),
        ..OwnerSummary::default()
    };

    for day in &days {
        let mut worked = false;

        for s in &day.sessions {
            if s.is_active {
                summary.open_sessions += 1;
                continue;
            }
            worked = true;

            if !s.is_rejected_overtime() {
                summary.regular_hours += s.durations.accurate.regular_hours;
            }

            let ot = s.durations.raw.overtime_hours;
            match s.durations.raw.overtime_status {
                OvertimeStatus::Approved => summary.approved_overtime_hours += ot,
                OvertimeStatus::Pending => summary.pending_overtime_hours += ot,
                OvertimeStatus::Rejected => summary.rejected_overtime_hours += ot,
            }
        }

        if worked {
            summary.days_worked += 1;
        }
    }

    summary.regular_hours = truncate(summary.regular_hours, policy.precision);
    summary.approved_overtime_hours = truncate(summary.approved_overtime_hours, policy.precision);
    summary.pending_overtime_hours = truncate(summary.pending_overtime_hours, policy.precision);
    summary.rejected_overtime_hours = truncate(summary.rejected_overtime_hours, policy.precision);
    summary.days = days;
    summary
}

/// The single "hours completed" figure for one owner.
pub fn compute_progress(
    logs: &[TimeLogRecord],
    owner_id: &str,
    options: &ProgressOptions<'_>,
    policy: &Policy,
) -> InternshipProgress {
    let summary = summarize_owner(logs, owner_id, options, policy);
    progress_from_summary(&summary, options.required_hours, policy)
}

pub fn progress_from_summary(
    summary: &OwnerSummary,
    required_hours: f64,
    policy: &Policy,
) -> InternshipProgress {
    let credited: f64 = summary
        .days
        .iter()
        .flat_map(|d| d.sessions.iter())
        .map(|s| s.credited_hours())
        .sum();
    let internship_progress = truncate(credited, policy.precision);

    let progress_percentage = if required_hours > 0.0 && required_hours.is_finite() {
        (internship_progress / required_hours) * 100.0
    } else {
        0.0
    };

    InternshipProgress {
        internship_progress,
        progress_percentage,
        required_hours: if required_hours.is_finite() {
            required_hours.max(0.0)
        } else {
            0.0
        },
    }
}
