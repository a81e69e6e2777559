#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Utc};
use rinternhours::models::edit_request::{EditRequest, EditRequestStatus};
use rinternhours::models::policy::Policy;
use rinternhours::models::snapshot::Snapshot;
use rinternhours::models::time_log::{LogType, OvertimeStatus, TimeLogRecord};
use rinternhours::utils::time::parse_timestamp;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const OWNER: &str = "intern-1";

pub fn rih() -> Command {
    cargo_bin_cmd!("rinternhours")
}

/// `2025-03-03` + `09:00` in the default +08:00 policy offset.
pub fn at(day: &str, hm: &str) -> String {
    format!("{day}T{hm}:00+08:00")
}

pub fn instant(day: &str, hm: &str) -> DateTime<Utc> {
    parse_timestamp(&at(day, hm), &Policy::default().utc_offset).unwrap()
}

pub fn log(id: &str, day: &str, tin: &str, tout: &str) -> TimeLogRecord {
    TimeLogRecord::completed(id, OWNER, &at(day, tin), &at(day, tout))
}

pub fn open_log(id: &str, day: &str, tin: &str) -> TimeLogRecord {
    TimeLogRecord::open(id, OWNER, &at(day, tin))
}

pub fn overtime_log(
    id: &str,
    day: &str,
    tin: &str,
    tout: &str,
    status: OvertimeStatus,
) -> TimeLogRecord {
    log(id, day, tin, tout).with_type(LogType::Overtime, Some(status))
}

pub fn approved_edit(id: &str, log_id: &str, tin: Option<String>, tout: Option<String>) -> EditRequest {
    EditRequest {
        id: id.to_string(),
        log_id: log_id.to_string(),
        requested_time_in: tin,
        requested_time_out: tout,
        original_time_in: None,
        original_time_out: None,
        status: EditRequestStatus::Approved,
    }
}

/// Unique temp path, removed if it already exists.
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("rinternhours_{name}.{ext}"));
    fs::remove_file(&path).ok();
    path
}

pub fn write_snapshot(name: &str, snapshot: &Snapshot) -> String {
    let path = temp_path(name, "json");
    fs::write(&path, serde_json::to_string_pretty(snapshot).unwrap()).unwrap();
    path.to_string_lossy().to_string()
}

/// Empty config file so tests never read the user's real configuration.
pub fn test_config(name: &str) -> String {
    let path = temp_path(name, "conf");
    fs::write(&path, "").unwrap();
    path.to_string_lossy().to_string()
}
