// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Experiment configuration
//!
//! Free parameters go in, the synapse count and the neuron/word shapes are
//! derived from them:
//!
//! ```text
//! S0 = trunc(Q · H · C)       without R
//! S0 = trunc(Q · H · C · R)   with R
//! ```

use cognon_config::CognonConfig;
use cognon_neural::{ActiveSynapses, NeuronParams, WordSpec};

use crate::error::{ExperimentError, Result};

/// Parameters of one experiment configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Configuration {
    /// Synapses needed to fire a neuron
    pub h: f32,
    /// Ratio of strong to weak synapse strength
    pub g: f32,
    /// Dendrite compartments
    pub c: u32,
    /// Time slots where spikes can happen
    pub d1: u32,
    /// Time delays available between two layers
    pub d2: u32,
    /// Synapse density, S0 / (H·R·C)
    pub q: f64,
    /// Active synapses per word; `None` (or 0) derives activity from `r`
    pub num_active: Option<usize>,
    /// Average number of patterns per afferent synapse spike
    pub r: Option<f64>,
    /// Words to train the neuron with
    pub w: usize,
    /// Words to test with; 0 lets the runner pick
    pub num_test_words: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            h: 5.0,
            g: 2.0,
            c: 1,
            d1: 4,
            d2: 7,
            q: 40.0,
            num_active: Some(4),
            r: None,
            w: 100,
            num_test_words: 0,
        }
    }
}

impl Configuration {
    /// Replace the neuron parameters
    pub fn with_neuron_params(mut self, c: u32, d1: u32, d2: u32, q: f64, g: f32, h: f32) -> Self {
        self.c = c;
        self.d1 = d1;
        self.d2 = d2;
        self.q = q;
        self.g = g;
        self.h = h;
        self
    }

    /// Replace the word-set parameters
    pub fn with_test_params(
        mut self,
        num_active: Option<usize>,
        r: Option<f64>,
        w: usize,
        num_test_words: usize,
    ) -> Self {
        self.num_active = num_active;
        self.r = r;
        self.w = w;
        self.num_test_words = num_test_words;
        self
    }

    /// Build from a loaded configuration file
    pub fn from_config(config: &CognonConfig) -> Self {
        let neuron = &config.neuron;
        let words = &config.words;
        Self::default()
            .with_neuron_params(neuron.c, neuron.d1, neuron.d2, neuron.q, neuron.g, neuron.h)
            .with_test_params(words.num_active, words.r, words.w, words.num_test_words)
    }

    /// Number of synapses
    pub fn s0(&self) -> usize {
        let base = self.q * f64::from(self.h) * f64::from(self.c);
        let s0 = match self.r {
            Some(r) => base * r,
            None => base,
        };
        // Float-to-int `as` truncates and saturates at 0
        s0 as usize
    }

    /// How words are populated; an explicit count wins over the density
    pub fn active_synapses(&self) -> Option<ActiveSynapses> {
        self.num_active
            .filter(|&n| n > 0)
            .map(ActiveSynapses::Count)
            .or_else(|| self.r.map(ActiveSynapses::Density))
    }

    pub fn neuron_params(&self) -> NeuronParams {
        NeuronParams {
            s0: self.s0(),
            h: self.h,
            g: self.g,
            c: self.c,
            d1: self.d1,
            d2: self.d2,
        }
    }

    /// Shape shared by the training and test word sets
    pub fn word_spec(&self) -> Result<WordSpec> {
        let active = self.active_synapses().ok_or_else(|| {
            ExperimentError::InvalidConfiguration(
                "either num_active or r must be set".to_string(),
            )
        })?;
        Ok(WordSpec::new(self.s0(), self.d1, active))
    }

    /// Check the derived parameters before any trial runs
    pub fn validate(&self) -> Result<()> {
        if self.w == 0 {
            return Err(ExperimentError::InvalidConfiguration(
                "w must be at least 1".to_string(),
            ));
        }
        if self.s0() == 0 {
            return Err(ExperimentError::InvalidConfiguration(format!(
                "S0 = trunc(Q·H·C·R) is 0 (Q={}, H={}, C={}, R={:?})",
                self.q, self.h, self.c, self.r
            )));
        }
        self.neuron_params().validate()?;
        self.word_spec()?.validate()?;
        Ok(())
    }
}
