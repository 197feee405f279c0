//! Crate configuration

use crate::debug::DebugConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LecternConfig {
    /// Logging configuration
    pub debug: DebugConfig,
    /// Drawing construction configuration
    pub drawing: DrawingConfig,
    /// Queue configuration
    pub queue: QueueConfig,
}

impl LecternConfig {
    /// Parse a configuration from JSON. Missing sections and fields fall
    /// back to their defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse lectern configuration")
    }

    /// Serialize the configuration as pretty JSON
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize lectern configuration")
    }
}

/// How checked repeat constructors treat a negative length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NegativeLengthPolicy {
    /// Return `DrawError::NegativeLength`
    #[default]
    Reject,
    /// Treat the length as zero
    Clamp,
}

/// Drawing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingConfig {
    /// Negative repeat length handling
    pub negative_length: NegativeLengthPolicy,
    /// Fill character for star runs
    pub fill: char,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            negative_length: NegativeLengthPolicy::Reject,
            fill: '*',
        }
    }
}

/// Queue configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QueueConfig {
    /// Capacity reserved when a queue is created from this config
    pub initial_capacity: usize,
}
