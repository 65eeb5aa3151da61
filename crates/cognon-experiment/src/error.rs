// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for experiment runs

use cognon_neural::NeuralError;

#[derive(Debug, thiserror::Error)]
pub enum ExperimentError {
    #[error(transparent)]
    Neural(#[from] NeuralError),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Worker pool error: {0}")]
    WorkerPool(String),
}

pub type Result<T> = std::result::Result<T, ExperimentError>;
