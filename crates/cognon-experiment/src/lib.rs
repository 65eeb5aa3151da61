// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Cognon Experiment Harness
//!
//! Monte-Carlo estimation of what a Cognon neuron can learn:
//! - [`Configuration`]: free parameters and the derived synapse count
//! - [`Alice`] trains a neuron, [`Bob`] counts hits and false alarms
//! - [`run_experiment`] runs one trial, [`run_configuration`] runs many in
//!   parallel and returns every row
//! - [`TrialResults::summary`] reduces the rows to mean and standard deviation
//!
//! ## Example
//!
//! ```rust,no_run
//! use cognon_experiment::{run_configuration, Configuration, RunOptions};
//!
//! let config = Configuration::default()
//!     .with_neuron_params(1, 1, 1, 10.0, 100.0, 10.0)
//!     .with_test_params(Some(11), None, 60, 5000);
//! let results = run_configuration(&config, &RunOptions::default().with_seed(Some(1)))?;
//! let summary = results.summary();
//! println!("L = {:.1} bits, pF = {:.2}%", summary.l.mean, summary.pf.mean * 100.0);
//! # Ok::<(), cognon_experiment::ExperimentError>(())
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod configuration;
pub mod error;
pub mod evaluator;
pub mod metrics;
pub mod runner;
pub mod stats;
pub mod trainer;

pub use configuration::Configuration;
pub use error::{ExperimentError, Result};
pub use evaluator::Bob;
pub use metrics::{learned_bits, TrialResult};
pub use runner::{run_configuration, run_experiment, trial_seed, RunOptions};
pub use stats::{ColumnStats, ResultSummary, TrialResults};
pub use trainer::Alice;
