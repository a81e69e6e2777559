use serde::{Deserialize, Serialize};

/// Lifecycle of a clock-in/out record as persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogStatus {
    #[default]
    Pending,
    Completed,
}

impl LogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogStatus::Pending => "pending",
            LogStatus::Completed => "completed",
        }
    }
}

/// Classification of the work a record covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogType {
    #[default]
    Regular,
    Overtime,
    ExtendedOvertime,
}

impl LogType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogType::Regular => "regular",
            LogType::Overtime => "overtime",
            LogType::ExtendedOvertime => "extended_overtime",
        }
    }

    pub fn is_overtime(&self) -> bool {
        !matches!(self, LogType::Regular)
    }
}

/// Approval state of the overtime carried by a record or session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl OvertimeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OvertimeStatus::Pending => "pending",
            OvertimeStatus::Approved => "approved",
            OvertimeStatus::Rejected => "rejected",
        }
    }
}

/// One clock-in/out event, exactly as stored upstream.
///
/// Timestamps are kept as the persisted strings: a malformed value must not
/// prevent the rest of a snapshot from loading, so parsing is deferred to
/// `utils::time::parse_safe` at computation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeLogRecord {
    pub id: String,
    pub owner_id: String,
    pub time_in: String,
    #[serde(default)]
    pub time_out: Option<String>,
    #[serde(default)]
    pub status: LogStatus,
    #[serde(default)]
    pub log_type: LogType,
    #[serde(default)]
    pub overtime_status: Option<OvertimeStatus>,
}

impl TimeLogRecord {
    /// Completed record with the given bounds.
    pub fn completed(id: &str, owner_id: &str, time_in: &str, time_out: &str) -> Self {
        Self {
            id: id.to_string(),
            owner_id: owner_id.to_string(),
            time_in: time_in.to_string(),
            time_out: Some(time_out.to_string()),
            status: LogStatus::Completed,
            log_type: LogType::Regular,
            overtime_status: None,
        }
    }

    /// Record still clocked in.
    pub fn open(id: &str, owner_id: &str, time_in: &str) -> Self {
        Self {
            id: id.to_string(),
            owner_id: owner_id.to_string(),
            time_in: time_in.to_string(),
            time_out: None,
            status: LogStatus::Pending,
            log_type: LogType::Regular,
            overtime_status: None,
        }
    }

    pub fn with_type(mut self, log_type: LogType, status: Option<OvertimeStatus>) -> Self {
        self.log_type = log_type;
        self.overtime_status = status;
        self
    }
}
