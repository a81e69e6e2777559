use super::load_snapshot;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::progress::ProgressOptions;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::accounting::{InternshipProgress, OwnerSummary};
use crate::models::policy::Policy;
use crate::ui::messages::header;
use crate::utils::formatting::progress_bar;
use crate::utils::time::format_decimal;
use serde::Serialize;

#[derive(Serialize)]
struct ProgressReport<'a> {
    owner_id: &'a str,
    #[serde(flatten)]
    progress: InternshipProgress,
    regular_hours: f64,
    approved_overtime_hours: f64,
    pending_overtime_hours: f64,
    rejected_overtime_hours: f64,
    open_sessions: usize,
    days_worked: usize,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Progress {
        snapshot,
        owner,
        required,
        with_edits,
        json,
    } = cmd
    {
        let policy = cfg.policy()?;
        let snapshot = load_snapshot(snapshot, cfg)?;

        if !snapshot.has_owner(owner) {
            return Err(AppError::UnknownOwner(owner.clone()));
        }

        let options = ProgressOptions {
            required_hours: required.unwrap_or(cfg.required_hours),
            include_edit_requests: *with_edits,
            edit_requests: Some(snapshot.edit_requests.as_slice()),
        };

        let progress = Core::compute_progress(&snapshot.logs, owner, &options, &policy);
        let summary = Core::summarize_owner(&snapshot.logs, owner, &options, &policy);

        if *json {
            let report = ProgressReport {
                owner_id: owner,
                progress,
                regular_hours: summary.regular_hours,
                approved_overtime_hours: summary.approved_overtime_hours,
                pending_overtime_hours: summary.pending_overtime_hours,
                rejected_overtime_hours: summary.rejected_overtime_hours,
                open_sessions: summary.open_sessions,
                days_worked: summary.days_worked,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_progress(&summary, &progress, &policy);
        }
    }
    Ok(())
}

fn print_progress(summary: &OwnerSummary, progress: &InternshipProgress, policy: &Policy) {
    let h = |v: f64| format_decimal(v, policy.precision);

    header(format!("Progress for {}", summary.owner_id));
    println!(
        "Hours completed : {} / {}",
        h(progress.internship_progress),
        h(progress.required_hours)
    );
    println!(
        "Progress        : {} {}%",
        progress_bar(progress, 30),
        h(progress.progress_percentage)
    );
    println!("Remaining       : {}", h(progress.remaining_hours()));
    println!();
    println!("Regular         : {}", h(summary.regular_hours));
    println!(
        "Overtime        : {} approved | {} pending | {} rejected",
        h(summary.approved_overtime_hours),
        h(summary.pending_overtime_hours),
        h(summary.rejected_overtime_hours)
    );
    println!("Days worked     : {}", summary.days_worked);
    if summary.open_sessions > 0 {
        println!("Open sessions   : {} (not credited yet)", summary.open_sessions);
    }
}
