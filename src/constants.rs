//! Constants used throughout the application
//!
//! File names, defaults and limits shared by the configuration, storage and
//! logging layers.

/// Application name, also the config/cache directory name
pub const APP_NAME: &str = "thingstore";

// Files
pub const CONFIG_FILE_NAME: &str = "thingstore.toml";
pub const XDG_CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "thingstore.log";

// Database defaults
pub const DEFAULT_DATABASE_URL: &str = "sqlite://thingstore.db?mode=rwc";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 4;
pub const DEFAULT_MIN_CONNECTIONS: u32 = 1;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 8;

// Database limits
/// Upper bound accepted for `database.max_connections`
pub const MAX_POOL_CONNECTIONS: u32 = 64;
/// Upper bound accepted for `database.connect_timeout_secs`
pub const MAX_CONNECT_TIMEOUT_SECS: u64 = 300;

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

// Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
