// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Checks value ranges and cross-field constraints, collecting every problem
//! before reporting.

use crate::{CognonConfig, ConfigError, ConfigResult};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["text", "json"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    MissingRequired { field: String },
    InvalidValue { field: String, reason: String },
}

impl ConfigValidationError {
    fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every failed check
pub fn validate_config(config: &CognonConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_neuron(config, &mut errors);
    validate_words(config, &mut errors);
    validate_run(config, &mut errors);
    validate_logging(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn validate_neuron(config: &CognonConfig, errors: &mut Vec<ConfigValidationError>) {
    let neuron = &config.neuron;

    if !neuron.h.is_finite() || neuron.h <= 0.0 {
        errors.push(ConfigValidationError::invalid(
            "neuron.h",
            format!("must be positive, got {}", neuron.h),
        ));
    }
    if !neuron.g.is_finite() || neuron.g < 1.0 {
        errors.push(ConfigValidationError::invalid(
            "neuron.g",
            format!("must be >= 1, got {}", neuron.g),
        ));
    }
    if neuron.c == 0 {
        errors.push(ConfigValidationError::invalid("neuron.c", "must be at least 1"));
    }
    if neuron.d1 == 0 {
        errors.push(ConfigValidationError::invalid("neuron.d1", "must be at least 1"));
    }
    if neuron.d1 > neuron.d2 {
        errors.push(ConfigValidationError::invalid(
            "neuron.d2",
            format!("must be >= d1 ({}), got {}", neuron.d1, neuron.d2),
        ));
    }
    if !neuron.q.is_finite() || neuron.q <= 0.0 {
        errors.push(ConfigValidationError::invalid(
            "neuron.q",
            format!("must be positive, got {}", neuron.q),
        ));
    }
}

fn validate_words(config: &CognonConfig, errors: &mut Vec<ConfigValidationError>) {
    let words = &config.words;

    if words.w == 0 {
        errors.push(ConfigValidationError::invalid("words.w", "must be at least 1"));
    }
    if let Some(r) = words.r {
        if !r.is_finite() || r < 1.0 {
            errors.push(ConfigValidationError::invalid(
                "words.r",
                format!("must be >= 1, got {}", r),
            ));
        }
    }
    // num_active = 0 means "derive from r"
    let has_count = words.num_active.is_some_and(|n| n > 0);
    if !has_count && words.r.is_none() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "words.num_active or words.r".to_string(),
        });
    }
}

fn validate_run(config: &CognonConfig, errors: &mut Vec<ConfigValidationError>) {
    let run = &config.run;

    if run.repetitions == 0 {
        errors.push(ConfigValidationError::invalid(
            "run.repetitions",
            "must be at least 1",
        ));
    }
    if run.min_learn_words == 0 {
        errors.push(ConfigValidationError::invalid(
            "run.min_learn_words",
            "must be at least 1",
        ));
    }
    if run.min_test_words == 0 {
        errors.push(ConfigValidationError::invalid(
            "run.min_test_words",
            "must be at least 1",
        ));
    }
}

fn validate_logging(config: &CognonConfig, errors: &mut Vec<ConfigValidationError>) {
    let logging = &config.logging;

    if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
        errors.push(ConfigValidationError::invalid(
            "logging.level",
            format!("expected one of {:?}, got '{}'", LOG_LEVELS, logging.level),
        ));
    }
    if !LOG_FORMATS.contains(&logging.format.to_lowercase().as_str()) {
        errors.push(ConfigValidationError::invalid(
            "logging.format",
            format!("expected one of {:?}, got '{}'", LOG_FORMATS, logging.format),
        ));
    }
}
