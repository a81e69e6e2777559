// src/export/logic.rs

use crate::core::calculator::progress::apply_edit_overlay;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::SessionExport;
use crate::models::policy::Policy;
use crate::models::snapshot::Snapshot;
use crate::ui::messages::warning;
use crate::utils::date::in_period;
use chrono::{DateTime, NaiveDate, Utc};
use std::path::Path;

/// What to export and how.
#[derive(Debug, Clone)]
pub struct ExportRequest<'a> {
    pub format: ExportFormat,
    pub file: &'a Path,
    pub owner: Option<&'a str>,
    pub period: Option<(NaiveDate, NaiveDate)>,
    pub with_edits: bool,
    pub as_of: DateTime<Utc>,
    pub force: bool,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Rows of the daily time record for the selected owner and period.
    pub fn rows(snapshot: &Snapshot, req: &ExportRequest<'_>, policy: &Policy) -> Vec<SessionExport> {
        let logs = if req.with_edits {
            apply_edit_overlay(&snapshot.logs, &snapshot.edit_requests, policy)
        } else {
            snapshot.logs.clone()
        };

        let logs: Vec<_> = match req.owner {
            Some(owner) => logs.into_iter().filter(|l| l.owner_id == owner).collect(),
            None => logs,
        };

        Core::build_sessions(&logs, req.as_of, None, policy)
            .iter()
            .filter(|s| in_period(s.date, req.period))
            .map(|s| SessionExport::from_session(s, policy))
            .collect()
    }

    pub fn export(snapshot: &Snapshot, req: &ExportRequest<'_>, policy: &Policy) -> AppResult<()> {
        if let Some(owner) = req.owner
            && !snapshot.has_owner(owner)
        {
            return Err(AppError::UnknownOwner(owner.to_string()));
        }

        ensure_writable(req.file, req.force)?;

        let rows = Self::rows(snapshot, req, policy);
        if rows.is_empty() {
            warning("No sessions found for the selected owner/period.");
            return Ok(());
        }

        match req.format {
            ExportFormat::Csv => export_csv(&rows, req.file),
            ExportFormat::Json => export_json(&rows, req.file),
        }
    }
}
