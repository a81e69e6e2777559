use super::{load_snapshot, parse_instant, resolve_as_of, resolve_period};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::progress::apply_edit_overlay;
use crate::core::calculator::realtime::{day_cap_crossing_at, observe_clock_state};
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::accounting::DailyAccounting;
use crate::models::policy::Policy;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{color_for_clock_state, paint};
use crate::utils::date::in_period;
use crate::utils::formatting::session_badges;
use crate::utils::table::Table;
use crate::utils::time::{format_decimal, format_hours, local_calendar_day};
use chrono::{DateTime, Utc};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sessions {
        snapshot,
        owner,
        period,
        as_of,
        freeze_at,
        with_edits,
    } = cmd
    {
        let policy = cfg.policy()?;
        let snapshot = load_snapshot(snapshot, cfg)?;
        let as_of = resolve_as_of(as_of, &policy)?;
        let freeze_at = freeze_at
            .as_deref()
            .map(|raw| parse_instant(raw, &policy))
            .transpose()?;
        let bounds = resolve_period(period)?;

        if let Some(o) = owner
            && !snapshot.has_owner(o)
        {
            return Err(AppError::UnknownOwner(o.clone()));
        }

        let logs = if *with_edits {
            apply_edit_overlay(&snapshot.logs, &snapshot.edit_requests, &policy)
        } else {
            snapshot.logs.clone()
        };

        let days: Vec<DailyAccounting> = Core::daily_accounting(&logs, as_of, freeze_at, &policy)
            .into_iter()
            .filter(|d| owner.as_ref().is_none_or(|o| d.owner_id == *o))
            .filter(|d| in_period(d.date, bounds))
            .collect();

        if days.is_empty() {
            warning("No sessions found for the selected owner/period.");
            return Ok(());
        }

        for day in &days {
            print_day(day, as_of, &policy);
        }
    }
    Ok(())
}

fn print_day(day: &DailyAccounting, as_of: DateTime<Utc>, policy: &Policy) {
    let offset = &policy.utc_offset;
    let hm = |t: DateTime<Utc>| t.with_timezone(offset).format("%H:%M").to_string();
    let hours = |h: f64| format_decimal(h, policy.precision);

    let mut title = format!("{} | {}", day.owner_id, day.date);
    if day.date == local_calendar_day(as_of, offset) {
        let state = observe_clock_state(day, policy);
        title.push_str(&format!(
            " | {}",
            paint(color_for_clock_state(state), state.label())
        ));
    }
    header(title);

    let mut table = Table::new(vec![
        "#", "IN", "OUT", "TYPE", "REGULAR", "RAW", "OVERTIME", "",
    ]);

    for (i, s) in day.sessions.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            hm(s.time_in),
            s.time_out.map(hm).unwrap_or_else(|| "--:--".to_string()),
            s.session_type.as_str().to_string(),
            hours(s.durations.accurate.regular_hours),
            hours(s.durations.raw.total_hours),
            hours(s.durations.raw.overtime_hours),
            session_badges(s),
        ]);
    }

    print!("{}", table.render());
    println!(
        "Regular: {} ({}) / cap {}",
        hours(day.regular_consumed),
        format_hours(day.regular_consumed),
        hours(policy.daily_regular_cap_hours)
    );

    if let Some(at) = day_cap_crossing_at(day, policy) {
        println!("Daily cap reached at {}", hm(at));
    }
    println!();
}
