use sitewatch_config::{RetentionFileConfig, constants};
use sitewatch_retention::{PolicyRegistry, RegisteredCollection, RetentionPolicy};
use sitewatch_store::{Store, TelemetryTable};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub async fn load_retention_config() -> anyhow::Result<RetentionFileConfig> {
    let path = std::env::var("RETENTION_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(constants::RETENTION_CONFIG_PATH));

    let config = sitewatch_config::parse_retention_toml(&path).await?;

    for key in config.collections.keys() {
        if key.parse::<TelemetryTable>().is_err() {
            warn!("Ignoring retention policy for unknown collection '{}'", key);
        }
    }

    Ok(config)
}

pub fn cleanup_interval(config: &RetentionFileConfig) -> anyhow::Result<Duration> {
    resolve_cleanup_interval(std::env::var("CLEANUP_INTERVAL_SECS").ok().as_deref(), config)
}

fn resolve_cleanup_interval(
    env_value: Option<&str>,
    config: &RetentionFileConfig,
) -> anyhow::Result<Duration> {
    let Some(raw) = env_value else {
        return Ok(config.cleanup_interval());
    };

    match raw.trim().parse::<u64>() {
        Ok(0) => anyhow::bail!("CLEANUP_INTERVAL_SECS must be greater than zero"),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(_) => {
            warn!(
                "Ignoring non-numeric CLEANUP_INTERVAL_SECS '{}', using {:?}",
                raw,
                config.cleanup_interval()
            );
            Ok(config.cleanup_interval())
        }
    }
}

pub fn create_policy_registry(
    store: &Store,
    config: &RetentionFileConfig,
) -> anyhow::Result<PolicyRegistry> {
    let mut collections = Vec::with_capacity(TelemetryTable::ALL.len());

    for (table, records) in store.record_stores() {
        let policy = config.policy_for(table.key());
        let policy = RetentionPolicy::new(policy.max_records, policy.delete_count)
            .map_err(|e| anyhow::anyhow!("collection {}: {}", table.key(), e))?;

        collections.push(RegisteredCollection::new(
            table.key(),
            table.display_name(),
            policy,
            records,
        ));
    }

    Ok(PolicyRegistry::new(collections)?)
}
