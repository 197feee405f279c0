//! Debug logging
//!
//! Categorized log records forwarded to the `log` facade. Installing a
//! logger is left to the embedding application.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Debug log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    /// All internal state changes
    Trace,
    /// Development debugging information
    Debug,
    /// Important state changes
    Info,
    /// Potential issues
    Warn,
    /// Error situations
    Error,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

/// Debug log category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebugCategory {
    /// Queue mutations
    Queue,
    /// Drawing render passes
    Render,
    /// Drawing composition
    Builder,
}

impl DebugCategory {
    /// Log target used for records in this category
    pub fn target(self) -> &'static str {
        match self {
            DebugCategory::Queue => "lectern::queue",
            DebugCategory::Render => "lectern::render",
            DebugCategory::Builder => "lectern::builder",
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Enable debug logging
    pub enabled: bool,
    /// Minimum log level
    pub level: LogLevel,
    /// Enabled categories
    pub categories: HashSet<DebugCategory>,
}

impl DebugConfig {
    /// Config with every category enabled at the given level
    pub fn verbose(level: LogLevel) -> Self {
        Self {
            enabled: true,
            level,
            categories: [
                DebugCategory::Queue,
                DebugCategory::Render,
                DebugCategory::Builder,
            ]
            .into_iter()
            .collect(),
        }
    }

    /// Whether a record with this category and level would be emitted
    pub fn allows(&self, category: DebugCategory, level: LogLevel) -> bool {
        self.enabled && level >= self.level && self.categories.contains(&category)
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        let mut categories = HashSet::new();
        categories.insert(DebugCategory::Queue);
        categories.insert(DebugCategory::Render);

        Self {
            enabled: std::env::var("LECTERN_DEBUG").is_ok(),
            level: LogLevel::Debug,
            categories,
        }
    }
}

/// Log a debug message
pub fn log(config: &DebugConfig, category: DebugCategory, level: LogLevel, message: &str) {
    if !config.allows(category, level) {
        return;
    }

    log::log!(target: category.target(), log::Level::from(level), "{}", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_config_default() {
        let config = DebugConfig::default();
        assert!(!config.enabled || std::env::var("LECTERN_DEBUG").is_ok());
        assert!(config.categories.contains(&DebugCategory::Queue));
        assert!(config.categories.contains(&DebugCategory::Render));
        assert!(!config.categories.contains(&DebugCategory::Builder));
    }

    #[test]
    fn disabled_config_allows_nothing() {
        let mut config = DebugConfig::verbose(LogLevel::Trace);
        config.enabled = false;
        assert!(!config.allows(DebugCategory::Queue, LogLevel::Error));
    }

    #[test]
    fn level_threshold_filters_lower_levels() {
        let config = DebugConfig::verbose(LogLevel::Info);
        assert!(!config.allows(DebugCategory::Render, LogLevel::Debug));
        assert!(config.allows(DebugCategory::Render, LogLevel::Info));
        assert!(config.allows(DebugCategory::Render, LogLevel::Error));
    }

    #[test]
    fn missing_category_is_filtered() {
        let config = DebugConfig {
            enabled: true,
            level: LogLevel::Trace,
            categories: {
                let mut set = HashSet::new();
                set.insert(DebugCategory::Queue);
                set
            },
        };
        assert!(config.allows(DebugCategory::Queue, LogLevel::Trace));
        assert!(!config.allows(DebugCategory::Builder, LogLevel::Trace));
    }

    #[test]
    fn log_without_logger_does_not_panic() {
        let config = DebugConfig::verbose(LogLevel::Trace);
        log(&config, DebugCategory::Render, LogLevel::Debug, "render pass");
    }

    #[test]
    fn levels_map_onto_log_facade() {
        assert_eq!(log::Level::from(LogLevel::Warn), log::Level::Warn);
        assert_eq!(log::Level::from(LogLevel::Trace), log::Level::Trace);
    }
}
