//! Constants used throughout the crate
//!
//! Route paths, feed defaults, log targets and config file names live here so
//! the actions, config and logger agree on them.

// Routes invalidated after writes
pub const FEED_PATH: &str = "/feed";
pub const SNIPPET_PATH_PREFIX: &str = "/snippet";

// Feed pagination
pub const DEFAULT_PAGE_SIZE: u64 = 6;
pub const MAX_PAGE_SIZE: u64 = 100;

// Log targets
pub const WRITE_FAILURE_TARGET: &str = "snipshare::write";
pub const READ_FAILURE_TARGET: &str = "snipshare::read_failure";

// Configuration
pub const APP_DIR_NAME: &str = "snipshare";
pub const CONFIG_FILE_NAME: &str = "snipshare.toml";
pub const CONFIG_GENERATED: &str = "Configuration file generated";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://snipshare.db?mode=rwc";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_FILE_NAME: &str = "snipshare.log";

// Entries kept by the in-memory log buffer before the oldest are dropped
pub const MAX_LOG_ENTRIES: usize = 1000;
