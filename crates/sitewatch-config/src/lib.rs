pub mod config;
pub mod constants;

pub use config::{PolicyConfig, RetentionFileConfig, parse_retention_str, parse_retention_toml};
