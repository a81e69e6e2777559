//! Session builder: turns raw clock-in/out records into ordered, per-day
//! sessions, stitching zero-gap neighbours into one continuous session.

use crate::models::policy::Policy;
use crate::models::session::{Session, SessionDurations};
use crate::models::time_log::{LogStatus, TimeLogRecord};
use crate::utils::time::{local_calendar_day, parse_safe, parse_timestamp};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// A record whose timestamps have been parsed and attributed to a day.
#[derive(Debug, Clone)]
pub struct ParsedRecord {
    pub record: TimeLogRecord,
    pub time_in: DateTime<Utc>,
    pub time_out: Option<DateTime<Utc>>,
    pub date: NaiveDate,
}

/// Records of one owner on one owner-local day.
#[derive(Debug, Clone)]
pub struct DayGroup {
    pub owner_id: String,
    pub date: NaiveDate,
    pub records: Vec<ParsedRecord>,
}

/// Parse every record and drop the ones that cannot contribute.
///
/// - malformed `time_in`: record skipped
/// - malformed `time_out`: replaced by `time_in` (zero duration)
/// - several open records for one owner: only the most recently started
///   stays open, the others are skipped
pub fn parse_records(records: &[TimeLogRecord], policy: &Policy) -> Vec<ParsedRecord> {
    let offset = &policy.utc_offset;
    let mut parsed = Vec::with_capacity(records.len());

    for rec in records {
        let Some(time_in) = parse_timestamp(&rec.time_in, offset) else {
            warn!(log_id = %rec.id, raw = %rec.time_in, "malformed time_in, record ignored");
            continue;
        };

        let time_out = rec
            .time_out
            .as_deref()
            .map(|raw| parse_safe(raw, time_in, offset));

        let expected = if time_out.is_some() {
            LogStatus::Completed
        } else {
            LogStatus::Pending
        };
        if rec.status != expected {
            debug!(
                log_id = %rec.id,
                status = rec.status.as_str(),
                "status disagrees with time_out, time_out wins"
            );
        }

        parsed.push(ParsedRecord {
            record: rec.clone(),
            time_in,
            time_out,
            date: local_calendar_day(time_in, offset),
        });
    }

    keep_latest_open_per_owner(parsed)
}

fn keep_latest_open_per_owner(parsed: Vec<ParsedRecord>) -> Vec<ParsedRecord> {
    let mut latest_open: BTreeMap<String, (DateTime<Utc>, String)> = BTreeMap::new();

    for p in parsed.iter().filter(|p| p.time_out.is_none()) {
        let candidate = (p.time_in, p.record.id.clone());
        latest_open
            .entry(p.record.owner_id.clone())
            .and_modify(|cur| {
                if candidate > *cur {
                    *cur = candidate.clone();
                }
            })
            .or_insert(candidate);
    }

    parsed
        .into_iter()
        .filter(|p| {
            if p.time_out.is_some() {
                return true;
            }
            let keep = latest_open
                .get(&p.record.owner_id)
                .is_some_and(|(_, id)| *id == p.record.id);
            if !keep {
                warn!(
                    log_id = %p.record.id,
                    owner_id = %p.record.owner_id,
                    "owner has a more recent open record, stale open record ignored"
                );
            }
            keep
        })
        .collect()
}

/// Group parsed records by `(owner, day)`, ordered by owner then day.
pub fn group_by_owner_day(parsed: Vec<ParsedRecord>) -> Vec<DayGroup> {
    let mut groups: BTreeMap<(String, NaiveDate), Vec<ParsedRecord>> = BTreeMap::new();

    for p in parsed {
        groups
            .entry((p.record.owner_id.clone(), p.date))
            .or_default()
            .push(p);
    }

    groups
        .into_iter()
        .map(|((owner_id, date), records)| DayGroup {
            owner_id,
            date,
            records,
        })
        .collect()
}

/// Order a day's records: completed ones by `time_in`, the open one last.
fn order_day(records: &mut [ParsedRecord]) {
    records.sort_by(|a, b| {
        a.time_out
            .is_none()
            .cmp(&b.time_out.is_none())
            .then(a.time_in.cmp(&b.time_in))
            .then(a.time_out.cmp(&b.time_out))
            .then(a.record.id.cmp(&b.record.id))
    });

    if let Some(open) = records.last().filter(|r| r.time_out.is_none())
        && records
            .iter()
            .any(|r| r.time_out.is_some() && r.time_in > open.time_in)
    {
        warn!(
            log_id = %open.record.id,
            "completed record starts after the open record, open record kept last"
        );
    }
}

fn can_continue(session: &Session, next: &ParsedRecord) -> bool {
    !session.is_active
        && session.time_out == Some(next.time_in)
        && session.session_type == next.record.log_type
        && session.overtime_status == next.record.overtime_status
}

fn start_session(owner_id: &str, date: NaiveDate, p: ParsedRecord) -> Session {
    Session {
        owner_id: owner_id.to_string(),
        date,
        time_in: p.time_in,
        time_out: p.time_out,
        session_type: p.record.log_type,
        overtime_status: p.record.overtime_status,
        is_continuous_session: false,
        is_active: p.time_out.is_none(),
        logs: vec![p.record],
        durations: SessionDurations::default(),
    }
}

/// Build the sessions of one day group, in chronological order.
pub fn build_day_sessions(group: DayGroup) -> Vec<Session> {
    let DayGroup {
        owner_id,
        date,
        mut records,
    } = group;

    if records.is_empty() {
        return Vec::new();
    }

    order_day(&mut records);

    let mut sessions: Vec<Session> = Vec::new();

    for p in records {
        match sessions.last_mut() {
            Some(current) if can_continue(current, &p) => {
                current.time_out = p.time_out;
                current.is_active = p.time_out.is_none();
                current.is_continuous_session = true;
                current.logs.push(p.record);
            }
            _ => sessions.push(start_session(&owner_id, date, p)),
        }
    }

    sessions
}

/// Sessions for every owner/day in `records`, without durations.
pub fn build_sessions(records: &[TimeLogRecord], policy: &Policy) -> Vec<Session> {
    group_by_owner_day(parse_records(records, policy))
        .into_iter()
        .flat_map(build_day_sessions)
        .collect()
}
