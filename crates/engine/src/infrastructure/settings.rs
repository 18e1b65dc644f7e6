//! Rules configuration loading.
//!
//! Precedence, lowest first: built-in defaults, an optional JSON file,
//! then environment variables.

use std::path::Path;

use add2e_domain::RulesConfig;

/// Toggle for the exceptional strength table (true/false/1/0/yes/no).
pub const ENV_USE_EXCEPTIONAL_STRENGTH: &str = "ADD2E_USE_EXCEPTIONAL_STRENGTH";
/// Base of the maximum hit point formula.
pub const ENV_BASE_HIT_POINTS: &str = "ADD2E_BASE_HIT_POINTS";

/// Errors loading a rules configuration file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read rules config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid rules config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the rules configuration from `path` (if given) and the process
/// environment.
pub fn load_rules_config(path: Option<&Path>) -> Result<RulesConfig, SettingsError> {
    let base = match path {
        Some(path) => read_config_file(path)?,
        None => RulesConfig::default(),
    };
    Ok(apply_env_overrides(base, |key| std::env::var(key).ok()))
}

fn read_config_file(path: &Path) -> Result<RulesConfig, SettingsError> {
    let path_display = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path_display.clone(),
        source,
    })?;
    let config = serde_json::from_str(&text).map_err(|source| SettingsError::Parse {
        path: path_display.clone(),
        source,
    })?;
    tracing::info!(path = %path_display, "Loaded rules config file");
    Ok(config)
}

/// Apply environment overrides. Invalid values are logged and ignored.
pub fn apply_env_overrides(
    config: RulesConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> RulesConfig {
    let mut updated = config;

    if let Some(val) = lookup(ENV_USE_EXCEPTIONAL_STRENGTH) {
        match parse_flag(&val) {
            Some(enabled) => {
                updated = updated.with_exceptional_strength(enabled);
                tracing::info!(enabled, "Applied {} environment variable", ENV_USE_EXCEPTIONAL_STRENGTH);
            }
            None => tracing::warn!(
                value = %val,
                "{} is not a boolean, ignoring",
                ENV_USE_EXCEPTIONAL_STRENGTH
            ),
        }
    }

    if let Some(val) = lookup(ENV_BASE_HIT_POINTS) {
        match val.trim().parse::<i32>() {
            Ok(base) if base >= 1 => {
                updated = updated.with_base_hit_points(base);
                tracing::info!(base, "Applied {} environment variable", ENV_BASE_HIT_POINTS);
            }
            Ok(base) => tracing::warn!(
                base,
                "{} must be at least 1, ignoring",
                ENV_BASE_HIT_POINTS
            ),
            Err(_) => tracing::warn!(
                value = %val,
                "{} is not an integer, ignoring",
                ENV_BASE_HIT_POINTS
            ),
        }
    }

    updated
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn no_overrides_keeps_config() {
        let config = apply_env_overrides(RulesConfig::default(), env(&[]));
        assert_eq!(config, RulesConfig::default());
    }

    #[test]
    fn valid_overrides_apply() {
        let config = apply_env_overrides(
            RulesConfig::default(),
            env(&[
                (ENV_USE_EXCEPTIONAL_STRENGTH, "no"),
                (ENV_BASE_HIT_POINTS, " 8 "),
            ]),
        );
        assert!(!config.use_exceptional_strength);
        assert_eq!(config.base_hit_points, 8);
    }

    #[test]
    fn invalid_overrides_are_ignored() {
        let base = RulesConfig::default().with_base_hit_points(12);
        let config = apply_env_overrides(
            base,
            env(&[
                (ENV_USE_EXCEPTIONAL_STRENGTH, "maybe"),
                (ENV_BASE_HIT_POINTS, "0"),
            ]),
        );
        assert_eq!(config, base);

        let config = apply_env_overrides(base, env(&[(ENV_BASE_HIT_POINTS, "ten")]));
        assert_eq!(config, base);
    }

    #[test]
    fn config_file_is_read() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"baseHitPoints": 6}}"#).expect("write config");

        let config = read_config_file(file.path()).expect("config loads");
        assert_eq!(config.base_hit_points, 6);
        assert!(config.use_exceptional_strength);
    }

    #[test]
    fn missing_or_broken_files_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("rules.json");
        assert!(matches!(
            read_config_file(&missing),
            Err(SettingsError::Read { .. })
        ));

        std::fs::write(&missing, "not json").expect("write config");
        assert!(matches!(
            read_config_file(&missing),
            Err(SettingsError::Parse { .. })
        ));
    }
}
