//! Common types used throughout schemalike
//!
//! This module contains shared enums used by the configuration layer,
//! the inference engine and the CLI.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

// ============================================================================
// Absent Reference Policy
// ============================================================================

/// How an absent reference (`None`) to a non-temporal type is described
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AbsentReferencePolicy {
    /// Describe the pointee from its static type, producing a record node
    /// for record types
    #[default]
    Shape,
    /// Describe the pointee by its static type name only
    Label,
}

impl std::fmt::Display for AbsentReferencePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbsentReferencePolicy::Shape => write!(f, "shape"),
            AbsentReferencePolicy::Label => write!(f, "label"),
        }
    }
}

// ============================================================================
// Log Level
// ============================================================================

/// Log level for the CLI subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

// ============================================================================
// Input Format
// ============================================================================

/// Document format accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Json,
    Yaml,
}

impl InputFormat {
    /// Guess the format from a file extension, defaulting to JSON
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => InputFormat::Yaml,
            _ => InputFormat::Json,
        }
    }
}
