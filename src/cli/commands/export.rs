use super::{load_snapshot, resolve_as_of, resolve_period};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::logic::ExportRequest;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        snapshot,
        format,
        file,
        owner,
        period,
        as_of,
        with_edits,
        force,
    } = cmd
    {
        let policy = cfg.policy()?;
        let snapshot = load_snapshot(snapshot, cfg)?;
        let path = expand_tilde(file);

        let request = ExportRequest {
            format: *format,
            file: &path,
            owner: owner.as_deref(),
            period: resolve_period(period)?,
            with_edits: *with_edits,
            as_of: resolve_as_of(as_of, &policy)?,
            force: *force,
        };

        ExportLogic::export(&snapshot, &request, &policy)?;
    }
    Ok(())
}
