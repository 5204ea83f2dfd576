use std::time::Duration;

pub const DEFAULT_API_HOST: &str = "0.0.0.0";
pub const DEFAULT_API_PORT: &str = "3000";

pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

pub const RETENTION_CONFIG_PATH: &str = "/etc/sitewatch/retention.toml";

pub const CLEANUP_JOB_INTERVAL: Duration = Duration::from_secs(600);

pub const DEFAULT_MAX_RECORDS: u64 = 80;
pub const DEFAULT_DELETE_COUNT: u64 = 30;
