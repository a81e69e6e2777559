use chrono::{FixedOffset, Offset, Utc};

pub const DEFAULT_DAILY_CAP_HOURS: f64 = 9.0;
pub const DEFAULT_PRECISION: u32 = 2;
pub const DEFAULT_UTC_OFFSET_SECS: i32 = 8 * 3600;

/// Accounting policy handed to the engine. Built from `Config::policy()`;
/// the engine never reads configuration on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Policy {
    pub daily_regular_cap_hours: f64,
    pub precision: u32,
    /// Offset defining the owner-local calendar day.
    pub utc_offset: FixedOffset,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            daily_regular_cap_hours: DEFAULT_DAILY_CAP_HOURS,
            precision: DEFAULT_PRECISION,
            utc_offset: FixedOffset::east_opt(DEFAULT_UTC_OFFSET_SECS).unwrap_or(Utc.fix()),
        }
    }
}
