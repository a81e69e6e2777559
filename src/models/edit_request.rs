use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EditRequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Reverted,
}

/// Correction to a single `TimeLogRecord`.
///
/// Only `approved` requests take part in accounting. A `requested_*` value
/// that is absent leaves the corresponding original value untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditRequest {
    pub id: String,
    pub log_id: String,
    #[serde(default)]
    pub requested_time_in: Option<String>,
    #[serde(default)]
    pub requested_time_out: Option<String>,
    #[serde(default)]
    pub original_time_in: Option<String>,
    #[serde(default)]
    pub original_time_out: Option<String>,
    #[serde(default)]
    pub status: EditRequestStatus,
}

impl EditRequest {
    pub fn is_approved(&self) -> bool {
        self.status == EditRequestStatus::Approved
    }
}
