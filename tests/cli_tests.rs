use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rinternhours::models::snapshot::Snapshot;
use rinternhours::models::time_log::OvertimeStatus;
use std::fs;

mod common;
use common::{approved_edit, at, log, open_log, overtime_log, rih, temp_path, test_config, write_snapshot};

const DAY: &str = "2025-03-03";

fn sample_snapshot() -> Snapshot {
    Snapshot {
        logs: vec![
            log("l1", DAY, "09:00", "12:00"),
            log("l2", DAY, "12:00", "18:30"),
            overtime_log("l3", DAY, "19:00", "20:00", OvertimeStatus::Rejected),
            log("l4", "2025-03-04", "09:00", "17:00"),
        ],
        edit_requests: vec![approved_edit("r1", "l4", None, Some(at("2025-03-04", "18:00")))],
    }
}

#[test]
fn progress_reports_credited_hours() {
    let cfg = test_config("progress_plain");
    let snap = write_snapshot("progress_plain", &sample_snapshot());

    rih()
        .args(["--config", &cfg, "progress", "--snapshot", &snap, "--owner", "intern-1"])
        .args(["--required", "520"])
        .assert()
        .success()
        .stdout(contains("Hours completed : 17.00 / 520.00"))
        .stdout(contains("3.26%"));
}

#[test]
fn progress_json_with_edits() {
    let cfg = test_config("progress_json");
    let snap = write_snapshot("progress_json", &sample_snapshot());

    let output = rih()
        .args(["--config", &cfg, "progress", "-s", &snap, "-o", "intern-1"])
        .args(["--required", "100", "--with-edits", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["internship_progress"], 18.0);
    assert!((v["progress_percentage"].as_f64().unwrap() - 18.0).abs() < 1e-9);
    assert_eq!(v["rejected_overtime_hours"], 1.0);
    assert_eq!(v["pending_overtime_hours"], 0.5);
    assert_eq!(v["days_worked"], 2);
}

#[test]
fn progress_for_unknown_owner_fails() {
    let cfg = test_config("progress_unknown");
    let snap = write_snapshot("progress_unknown", &sample_snapshot());

    rih()
        .args(["--config", &cfg, "progress", "-s", &snap, "-o", "nobody"])
        .assert()
        .failure()
        .stderr(contains("No logs found for owner nobody"));
}

#[test]
fn sessions_show_continuous_and_live_sessions() {
    let cfg = test_config("sessions_live");
    let mut snapshot = sample_snapshot();
    snapshot.logs.push(open_log("l5", "2025-03-05", "09:00"));
    let snap = write_snapshot("sessions_live", &snapshot);

    rih()
        .args(["--config", &cfg, "sessions", "-s", &snap, "-o", "intern-1"])
        .args(["--as-of", &at("2025-03-05", "09:45")])
        .assert()
        .success()
        .stdout(contains("intern-1 | 2025-03-03"))
        .stdout(contains("2 logs"))
        .stdout(contains("OT rejected"))
        .stdout(contains("0.75"))
        .stdout(contains("clocked in"))
        .stdout(contains("\u{1b}[32m● live"))
        .stdout(contains("Daily cap reached at 18:00"));
}

#[test]
fn sessions_filtered_by_period() {
    let cfg = test_config("sessions_period");
    let snap = write_snapshot("sessions_period", &sample_snapshot());

    rih()
        .args(["--config", &cfg, "sessions", "-s", &snap, "--period", "2025-03-04"])
        .args(["--as-of", &at("2025-03-06", "09:00")])
        .assert()
        .success()
        .stdout(contains("2025-03-04"))
        .stdout(contains("2025-03-03").not());
}

#[test]
fn sessions_reject_bad_as_of() {
    let cfg = test_config("sessions_bad_as_of");
    let snap = write_snapshot("sessions_bad_as_of", &sample_snapshot());

    rih()
        .args(["--config", &cfg, "sessions", "-s", &snap, "--as-of", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp"));
}

#[test]
fn export_csv_writes_one_row_per_session() {
    let cfg = test_config("export_csv");
    let snap = write_snapshot("export_csv", &sample_snapshot());
    let out = temp_path("export_csv_out", "csv");
    let out_str = out.to_string_lossy().to_string();

    rih()
        .args(["--config", &cfg, "export", "-s", &snap, "--format", "csv"])
        .args(["--file", &out_str, "--as-of", &at("2025-03-06", "09:00")])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert!(lines[0].starts_with("owner_id,date,time_in,time_out"));
    assert_eq!(lines.len(), 4);
    assert!(content.contains("l1;l2"));
    assert!(content.contains("9.00,9.50,0.50"));

    // refuses to overwrite without --force
    rih()
        .args(["--config", &cfg, "export", "-s", &snap, "--file", &out_str])
        .assert()
        .failure()
        .stderr(contains("--force"));
}

#[test]
fn export_json_with_edits() {
    let cfg = test_config("export_json");
    let snap = write_snapshot("export_json", &sample_snapshot());
    let out = temp_path("export_json_out", "json");
    let out_str = out.to_string_lossy().to_string();

    rih()
        .args(["--config", &cfg, "export", "-s", &snap, "--format", "json"])
        .args(["--file", &out_str, "--period", "2025-03-04", "--with-edits"])
        .assert()
        .success();

    let rows: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["time_out"], "18:00:00");
    assert_eq!(rows[0]["regular_hours"], "9.00");
}

#[test]
fn config_check_and_migrate() {
    let cfg = temp_path("config_migrate", "conf");
    let cfg_str = cfg.to_string_lossy().to_string();
    fs::write(&cfg, "required_hours: 486\n").unwrap();

    rih()
        .args(["--config", &cfg_str, "config", "--check"])
        .assert()
        .success()
        .stderr(contains("daily_regular_cap_hours"));

    rih()
        .args(["--config", &cfg_str, "config", "--migrate", "--print"])
        .assert()
        .success()
        .stdout(contains("required_hours: 486"));

    let content = fs::read_to_string(&cfg).unwrap();
    assert!(content.contains("daily_regular_cap_hours: 9"));
    assert!(content.contains("utc_offset:"));
    assert!(content.contains("+08:00"));
}

#[test]
fn invalid_policy_is_reported() {
    let cfg = temp_path("config_invalid", "conf");
    let cfg_str = cfg.to_string_lossy().to_string();
    fs::write(&cfg, "daily_regular_cap_hours: 0\n").unwrap();
    let snap = write_snapshot("config_invalid", &sample_snapshot());

    rih()
        .args(["--config", &cfg_str, "progress", "-s", &snap, "-o", "intern-1"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn init_in_test_mode_writes_nothing() {
    let cfg = temp_path("init_test_mode", "conf");
    let cfg_str = cfg.to_string_lossy().to_string();

    rih()
        .args(["--config", &cfg_str, "--test", "init"])
        .assert()
        .success();
    assert!(!cfg.exists());

    rih().args(["--config", &cfg_str, "init"]).assert().success();
    assert!(cfg.exists());
    fs::remove_file(&cfg).ok();
}
