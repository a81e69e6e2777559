// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::path::Path;

/// Refuse to clobber an existing file unless `force` is set, and make sure
/// the parent directory exists.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() {
        if !force {
            return Err(AppError::Export(format!(
                "'{}' already exists, pass --force to overwrite",
                path.display()
            )));
        }
        warning(format!("Overwriting '{}'", path.display()));
    }

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        std::fs::create_dir_all(dir)?;
    }

    Ok(())
}
