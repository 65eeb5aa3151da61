// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Logging configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text or json)
    pub format: LogFormat,

    /// Output destination
    pub output: LogOutput,
}

/// Log format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Case-insensitive; anything other than `json` is text
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Log output destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LogOutput {
    /// Console only
    Stderr,
    /// Console plus this file
    File(PathBuf),
}

impl LoggingConfig {
    /// Build from the string form used in configuration files
    pub fn from_parts(level: &str, format: &str, file: Option<PathBuf>) -> Self {
        LoggingConfig {
            level: level.trim().to_lowercase(),
            format: LogFormat::parse(format),
            output: match file {
                Some(path) => LogOutput::File(path),
                None => LogOutput::Stderr,
            },
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            format: LogFormat::Text,
            output: LogOutput::Stderr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts() {
        let config = LoggingConfig::from_parts("DEBUG", "Json", Some(PathBuf::from("run.log")));
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.output, LogOutput::File(PathBuf::from("run.log")));

        assert_eq!(LoggingConfig::from_parts("info", "text", None), LoggingConfig::default());
    }
}
