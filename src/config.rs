use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use crate::policy::{LicenseHeaderPolicy, PathMatcher};

/// Name of the configuration file looked up in the scanned root
pub const CONFIG_FILE_NAME: &str = ".license-header.toml";

/// Values accepted for `format`
pub const OUTPUT_FORMATS: &[&str] = &["table", "json"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output format (table, json)
    pub format: Option<String>,

    /// Exit with a failure status when violations are found
    pub fail_on_violations: Option<bool>,

    /// License header policy
    #[serde(alias = "policy")]
    pub license: Option<LicenseHeaderPolicy>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: Some("table".to_string()),
            fail_on_violations: Some(true),
            license: None,
        }
    }
}

impl Config {
    /// The configured policy, or an empty one that reports the missing header
    pub fn policy(&self) -> LicenseHeaderPolicy {
        self.license.clone().unwrap_or_default()
    }

    /// Problems that would make `check` fail regardless of the scanned files
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if let Some(format) = self.format.as_deref() {
            if !OUTPUT_FORMATS.contains(&format) {
                problems.push(format!(
                    "unknown format {:?} (expected one of: {})",
                    format,
                    OUTPUT_FORMATS.join(", ")
                ));
            }
        }

        let policy = self.policy();
        if policy.header.is_empty() {
            problems.push("license header is not defined".to_string());
        }

        let (_, pattern_errors) = PathMatcher::new(&policy.skip_paths);
        problems.extend(pattern_errors.iter().map(|e| e.to_string()));

        problems
    }
}

/// Load `.license-header.toml` from `dir`, falling back to defaults when absent
pub fn load_config(dir: &Path) -> Result<Config> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        return Ok(Config::default());
    }

    load_config_from(&config_path)
}

/// Load configuration from an explicit file
pub fn load_config_from(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    // Unset keys keep their defaults
    let defaults = Config::default();
    config.format = config.format.or(defaults.format);
    config.fail_on_violations = config.fail_on_violations.or(defaults.fail_on_violations);

    Ok(config)
}
