use crate::errors::{AppError, AppResult};
use crate::models::policy::{DEFAULT_DAILY_CAP_HOURS, DEFAULT_PRECISION, Policy};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

const MAX_PRECISION: u32 = 6;
const MAX_DAILY_CAP_HOURS: f64 = 24.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_daily_cap")]
    pub daily_regular_cap_hours: f64,
    #[serde(default = "default_precision")]
    pub precision: u32,
    #[serde(default)]
    pub required_hours: f64,
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
    #[serde(default)]
    pub snapshot: Option<String>,
}

fn default_daily_cap() -> f64 {
    DEFAULT_DAILY_CAP_HOURS
}
fn default_precision() -> u32 {
    DEFAULT_PRECISION
}
fn default_utc_offset() -> String {
    "+08:00".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            daily_regular_cap_hours: default_daily_cap(),
            precision: default_precision(),
            required_hours: 0.0,
            utc_offset: default_utc_offset(),
            snapshot: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rinternhours")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rinternhours")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rinternhours.conf")
    }

    /// Load configuration from `path` (or the standard location), falling
    /// back to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Validate and convert into the policy handed to the engine.
    pub fn policy(&self) -> AppResult<Policy> {
        let cap = self.daily_regular_cap_hours;
        if !(cap.is_finite() && cap > 0.0 && cap <= MAX_DAILY_CAP_HOURS) {
            return Err(AppError::Config(format!(
                "daily_regular_cap_hours must be in (0, {MAX_DAILY_CAP_HOURS}], got {}",
                self.daily_regular_cap_hours
            )));
        }
        if self.precision > MAX_PRECISION {
            return Err(AppError::Config(format!(
                "precision must be at most {MAX_PRECISION}, got {}",
                self.precision
            )));
        }

        Ok(Policy {
            daily_regular_cap_hours: self.daily_regular_cap_hours,
            precision: self.precision,
            utc_offset: parse_utc_offset(&self.utc_offset)?,
        })
    }
}

/// Parse `+HH:MM`, `-HH:MM`, `+HHMM`, `Z` or `UTC`.
pub fn parse_utc_offset(s: &str) -> AppResult<FixedOffset> {
    let invalid = || AppError::Config(format!("invalid utc_offset: {s}"));
    let s = s.trim();

    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let (sign, rest) = match s.split_at_checked(1) {
        Some(("+", rest)) => (1, rest),
        Some(("-", rest)) => (-1, rest),
        _ => return Err(invalid()),
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: i32 = digits[0..2].parse().map_err(|_| invalid())?;
    let minutes: i32 = digits[2..4].parse().map_err(|_| invalid())?;
    if hours > 14 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}
