// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! Each struct maps to a section of `cognon_configuration.toml`. Missing keys
//! fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CognonConfig {
    pub neuron: NeuronSection,
    pub words: WordsSection,
    pub run: RunSection,
    pub logging: LoggingSection,
}

/// Free neuron parameters; S0 is derived from them
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NeuronSection {
    /// Synapses needed to fire
    pub h: f32,
    /// Strong/weak strength ratio
    pub g: f32,
    /// Dendrite compartments
    pub c: u32,
    /// Time slots where spikes can happen
    pub d1: u32,
    /// Delays available between two layers
    pub d2: u32,
    /// Synapse density, S0 / (H·C·R)
    pub q: f64,
}

impl Default for NeuronSection {
    fn default() -> Self {
        Self {
            h: 5.0,
            g: 2.0,
            c: 1,
            d1: 4,
            d2: 7,
            q: 40.0,
        }
    }
}

/// Training and test corpus parameters
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WordsSection {
    /// Active synapses per word
    pub num_active: Option<usize>,
    /// Average number of patterns per afferent synapse spike
    pub r: Option<f64>,
    /// Words to train the neuron with
    pub w: usize,
    /// Words to test with (0 = derive from `run.min_test_words`)
    pub num_test_words: usize,
}

impl Default for WordsSection {
    fn default() -> Self {
        Self {
            num_active: Some(4),
            r: None,
            w: 100,
            num_test_words: 0,
        }
    }
}

/// Repetition and worker-pool settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RunSection {
    pub repetitions: usize,
    /// Worker threads (0 = one per logical CPU)
    pub workers: usize,
    /// Base seed; unset means every trial seeds from OS entropy
    pub seed: Option<u64>,
    /// Minimum training presentations across the run
    pub min_learn_words: usize,
    /// Minimum test presentations across the run
    pub min_test_words: usize,
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            repetitions: 20,
            workers: 0,
            seed: None,
            min_learn_words: 1,
            min_test_words: 1_000_000,
        }
    }
}

/// Logging settings consumed by `cognon-observability`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSection {
    /// trace, debug, info, warn or error
    pub level: String,
    /// text or json
    pub format: String,
    /// Also write logs to this file
    pub file: Option<PathBuf>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            file: None,
        }
    }
}
