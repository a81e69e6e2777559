use super::edit_request::EditRequest;
use super::time_log::TimeLogRecord;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// JSON document exported by the attendance backend: the raw logs plus the
/// edit requests filed against them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub logs: Vec<TimeLogRecord>,
    #[serde(default)]
    pub edit_requests: Vec<EditRequest>,
}

impl Snapshot {
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&content)?;
        Ok(snapshot)
    }

    pub fn has_owner(&self, owner_id: &str) -> bool {
        self.logs.iter().any(|l| l.owner_id == owner_id)
    }
}
