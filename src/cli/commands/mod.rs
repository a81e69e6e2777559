pub mod config;
pub mod export;
pub mod init;
pub mod progress;
pub mod sessions;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::policy::Policy;
use crate::models::snapshot::Snapshot;
use crate::utils::date::parse_period;
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_timestamp;
use chrono::{DateTime, NaiveDate, Utc};

/// Load the snapshot named on the command line, or the configured default.
pub(crate) fn load_snapshot(arg: &Option<String>, cfg: &Config) -> AppResult<Snapshot> {
    let raw = arg
        .as_ref()
        .or(cfg.snapshot.as_ref())
        .ok_or_else(|| AppError::MissingArgument("--snapshot".to_string()))?;
    Snapshot::load(&expand_tilde(raw))
}

/// `--as-of` if given, otherwise the current instant. The command line is
/// the only place the wall clock is read.
pub(crate) fn resolve_as_of(arg: &Option<String>, policy: &Policy) -> AppResult<DateTime<Utc>> {
    match arg {
        Some(raw) => parse_instant(raw, policy),
        None => Ok(Utc::now()),
    }
}

pub(crate) fn parse_instant(raw: &str, policy: &Policy) -> AppResult<DateTime<Utc>> {
    parse_timestamp(raw, &policy.utc_offset)
        .ok_or_else(|| AppError::InvalidTimestamp(raw.to_string()))
}

pub(crate) fn resolve_period(arg: &Option<String>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match arg.as_deref() {
        None | Some("all") => Ok(None),
        Some(p) => parse_period(p).map(Some),
    }
}
