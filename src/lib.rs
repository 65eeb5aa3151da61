// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Cognon
//!
//! Simulation of the Cognon binary-threshold neuron and a Monte-Carlo
//! harness that estimates how much information it can learn.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cognon::prelude::*;
//!
//! // Table 2.1 row: N=11, H=10, S0=1000, w=60, G=100
//! let config = Configuration::default()
//!     .with_neuron_params(1, 1, 1, 100.0, 100.0, 10.0)
//!     .with_test_params(Some(11), None, 60, 5000);
//!
//! let results = run_configuration(&config, &RunOptions::default())?;
//! let summary = results.summary();
//! println!("L = {:.1} bits (pF = {:.2}%)", summary.l.mean, summary.pf.mean * 100.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Foundation: cognon-config, cognon-observability        │
//! │  (TOML + overrides, tracing setup)                      │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Model: cognon-neural                                   │
//! │  (Word, WordSet, SynapseTable, Neuron)                  │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Harness: cognon-experiment                             │
//! │  (Alice, Bob, learned bits, parallel trial runner)      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## License
//!
//! Apache-2.0

pub use cognon_config as config;
pub use cognon_experiment as experiment;
pub use cognon_neural as neural;
pub use cognon_observability as observability;

pub mod report;

/// Prelude - commonly used types and traits
pub mod prelude {
    pub use crate::neural::{
        ActiveSynapses, FireResult, NeuralError, Neuron, NeuronModel, NeuronParams, Word, WordSet,
        WordSpec,
    };

    pub use crate::experiment::{
        learned_bits, run_configuration, run_experiment, Alice, Bob, ColumnStats, Configuration,
        ExperimentError, ResultSummary, RunOptions, TrialResult, TrialResults,
    };

    pub use crate::config::{load_config, validate_config, CognonConfig, ConfigError};
}
