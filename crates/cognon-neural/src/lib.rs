// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Cognon Neural Model
//!
//! Everything a single trial needs to build and drive one neuron:
//! - **Types**: synapse firings, words, firing outcomes, errors
//! - **Word sets**: random training and test corpora
//! - **Synapse**: offset-indexed strength/delay/compartment table
//! - **Models**: the [`NeuronModel`] capability set and the [`Neuron`]
//!
//! Randomness is always supplied by the caller, so nothing here touches a
//! process-wide generator.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod models;
pub mod synapse;
pub mod types;
pub mod wordset;

pub use models::{Neuron, NeuronModel, NeuronParams};
pub use synapse::SynapseTable;
pub use types::{Error, FireResult, NeuralError, Result, Synapse, Word};
pub use wordset::{ActiveSynapses, WordSet, WordSpec};
