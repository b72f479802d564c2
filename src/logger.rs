use anyhow::{Context, Result};
use chrono::Utc;
use once_cell::sync::OnceCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME, MAX_LOG_ENTRIES};

static GLOBAL_LOGGER: OnceCell<Logger> = OnceCell::new();

/// Shared logger that can be used across the application
///
/// Keeps the most recent records in memory (newest first on read) so hosts and
/// tests can inspect what the actions reported, in particular swallowed read
/// failures. At most `capacity` entries are retained; older ones are dropped.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
    enabled: bool,
    log_file: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_capacity(MAX_LOG_ENTRIES)
    }

    /// In-memory logger retaining at most `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            capacity: capacity.max(1),
            enabled: false,
            log_file: None,
        }
    }

    /// Build a logger from configuration; file output only when enabled
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let log_file = if config.enabled {
            Some(match &config.file {
                Some(path) => path.clone(),
                None => Self::get_log_file_path()?,
            })
        } else {
            None
        };

        Ok(Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            capacity: MAX_LOG_ENTRIES,
            enabled: config.enabled,
            log_file,
        })
    }

    /// Install the process-wide `log` backend.
    ///
    /// The first call wins; later calls return the already installed logger.
    pub fn init(config: &LoggingConfig) -> Result<Logger> {
        GLOBAL_LOGGER
            .get_or_try_init(|| -> Result<Logger> {
                let logger = Self::from_config(config)?;
                logger.dispatch(config.level_filter()?)?.apply()?;
                Ok(logger)
            })
            .cloned()
    }

    /// The logger installed by [`Logger::init`], if any
    pub fn global() -> Option<Logger> {
        GLOBAL_LOGGER.get().cloned()
    }

    fn dispatch(&self, level: log::LevelFilter) -> Result<fern::Dispatch> {
        let memory = self.clone();

        let mut dispatch = fern::Dispatch::new()
            .level(level)
            .level_for("sqlx", log::LevelFilter::Warn)
            .level_for("sea_orm", log::LevelFilter::Warn)
            .chain(fern::Output::call(move |record| {
                memory.log(format!("{} [{}] {}", record.level(), record.target(), record.args()));
            }))
            .chain(
                fern::Dispatch::new()
                    .level(log::LevelFilter::Warn)
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "{} {} [{}] {}",
                            Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .chain(std::io::stderr()),
            );

        if let Some(path) = &self.log_file {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file =
                fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "{} {} [{}] {}",
                            Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .chain(file),
            );
        }

        Ok(dispatch)
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            while logs.len() >= self.capacity {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Default log file location under the user cache directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
            .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
