use crate::constants;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct RetentionFileConfig {
    pub cleanup_interval_secs: Option<u64>,

    #[serde(default)]
    pub collections: HashMap<String, PolicyConfig>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    #[serde(default = "default_max_records")]
    pub max_records: u64,

    #[serde(default = "default_delete_count")]
    pub delete_count: u64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            max_records: default_max_records(),
            delete_count: default_delete_count(),
        }
    }
}

impl RetentionFileConfig {
    /// Policy for a collection key, falling back to the built-in defaults.
    pub fn policy_for(&self, key: &str) -> PolicyConfig {
        self.collections.get(key).copied().unwrap_or_default()
    }

    pub fn cleanup_interval(&self) -> Duration {
        self.cleanup_interval_secs
            .map(Duration::from_secs)
            .unwrap_or(constants::CLEANUP_JOB_INTERVAL)
    }
}

fn default_max_records() -> u64 {
    constants::DEFAULT_MAX_RECORDS
}

fn default_delete_count() -> u64 {
    constants::DEFAULT_DELETE_COUNT
}

pub async fn parse_retention_toml(config_path: &Path) -> std::io::Result<RetentionFileConfig> {
    if !config_path.exists() {
        info!(
            "No retention config at {:?}, using default policies",
            config_path
        );
        return Ok(RetentionFileConfig::default());
    }

    let content = tokio::fs::read_to_string(config_path).await?;
    parse_retention_str(&content)
}

/// Parses retention TOML and rejects settings the cleanup job cannot run with.
pub fn parse_retention_str(content: &str) -> std::io::Result<RetentionFileConfig> {
    let config: RetentionFileConfig = toml::from_str(content)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    if config.cleanup_interval_secs == Some(0) {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "cleanup_interval_secs must be greater than zero",
        ));
    }

    Ok(config)
}
