use super::Config;
use crate::errors::AppResult;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every up-to-date configuration file carries.
pub const KNOWN_KEYS: [&str; 5] = [
    "daily_regular_cap_hours",
    "precision",
    "required_hours",
    "utc_offset",
    "snapshot",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    if !path.exists() {
        return Ok(Mapping::new());
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        _ => Ok(Mapping::new()),
    }
}

/// Keys absent from the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(KNOWN_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Add missing keys with their defaults, keeping existing values and any
/// unknown keys untouched. Returns the keys that were added.
pub fn migrate_config(path: &Path) -> AppResult<Vec<&'static str>> {
    let missing = missing_keys(path)?;
    if missing.is_empty() {
        return Ok(missing);
    }

    let mut map = read_mapping(path)?;
    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => Mapping::new(),
    };

    for key in &missing {
        let k = Value::String((*key).to_string());
        if let Some(v) = defaults.get(&k) {
            map.insert(k, v.clone());
        }
    }

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, serde_yaml::to_string(&Value::Mapping(map))?)?;
    Ok(missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn migrate_fills_missing_keys_and_keeps_values() {
        let path = env::temp_dir().join("rinternhours_migrate_test.conf");
        fs::write(&path, "required_hours: 486\nlegacy_flag: true\n").unwrap();

        let added = migrate_config(&path).unwrap();
        assert!(added.contains(&"daily_regular_cap_hours"));
        assert!(!added.contains(&"required_hours"));
        assert!(missing_keys(&path).unwrap().is_empty());

        let cfg = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(cfg.required_hours, 486.0);
        assert_eq!(cfg.precision, 2);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("legacy_flag"));
        fs::remove_file(&path).ok();
    }
}
