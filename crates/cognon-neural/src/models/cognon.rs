// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Cognon Neuron
//!
//! Binary-threshold neuron with irreversible potentiation.
//!
//! ## Model
//!
//! ```text
//! For d in 0..D1+D2, then c in 0..C:
//!     sum(d, c) = weak(d, c) + G × strong(d, c)
//!                 counting synapses s in the word
//!                 with delay[s] + word_delay(s) == d
//!                 and  container[s] == c
//!     fire at the first (d, c) with sum(d, c) >= threshold
//!
//! threshold = H      while training
//!           = H × G  while recognising
//! ```
//!
//! Training raises every synapse that contributed to the winning `(d, c)`
//! from 1.0 to G. Strengths never decrease.
//!
//! Sums are formed from contributor counts in `f64`, so a word trained at
//! exactly H synapses reaches H × G after training for any G.

use std::collections::BTreeMap;

use rand::Rng;

use super::traits::NeuronModel;
use crate::synapse::table::WEAK_STRENGTH;
use crate::synapse::SynapseTable;
use crate::types::{FireResult, NeuralError, Result, Word};

/// Fixed parameters of a neuron
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeuronParams {
    /// Number of synapses
    pub s0: usize,
    /// Number of weak synapses needed to fire while training
    pub h: f32,
    /// Strong/weak strength ratio
    pub g: f32,
    /// Dendrite compartments able to fire independently
    pub c: u32,
    /// Time slots in which input spikes can arrive
    pub d1: u32,
    /// Propagation delays available between two layers
    pub d2: u32,
}

impl NeuronParams {
    /// Strength-only specialisation: one compartment, one delay slot
    pub fn simple(s0: usize, h: f32, g: f32) -> Self {
        Self {
            s0,
            h,
            g,
            c: 1,
            d1: 1,
            d2: 1,
        }
    }

    /// Number of output slots searched by `expose`
    #[inline]
    pub fn delay_slots(&self) -> u32 {
        self.d1.saturating_add(self.d2)
    }

    pub fn validate(&self) -> Result<()> {
        if self.s0 == 0 {
            return Err(NeuralError::InvalidParameters(
                "S0 must be at least 1".to_string(),
            ));
        }
        if !self.h.is_finite() || self.h <= 0.0 {
            return Err(NeuralError::InvalidParameters(format!(
                "H must be positive, got {}",
                self.h
            )));
        }
        if !self.g.is_finite() || self.g < 1.0 {
            return Err(NeuralError::InvalidParameters(format!(
                "G must be >= 1, got {}",
                self.g
            )));
        }
        if self.c == 0 {
            return Err(NeuralError::InvalidParameters(
                "C must be at least 1".to_string(),
            ));
        }
        if self.d1 == 0 || self.d1 > self.d2 {
            return Err(NeuralError::InvalidParameters(format!(
                "delays must satisfy 1 <= D1 <= D2, got D1={} D2={}",
                self.d1, self.d2
            )));
        }
        if self.d1.checked_add(self.d2).is_none() {
            return Err(NeuralError::InvalidParameters(format!(
                "D1 + D2 overflows the slot range, got D1={} D2={}",
                self.d1, self.d2
            )));
        }
        Ok(())
    }
}

impl Default for NeuronParams {
    fn default() -> Self {
        Self {
            s0: 200,
            h: 5.0,
            g: 2.0,
            c: 1,
            d1: 4,
            d2: 7,
        }
    }
}

/// Compartment + delay neuron
#[derive(Debug, Clone)]
pub struct Neuron {
    params: NeuronParams,
    synapses: SynapseTable,
    training: bool,
}

impl Neuron {
    /// Create a neuron with random delays and compartment assignments
    ///
    /// # Errors
    /// [`NeuralError::InvalidParameters`] if `params` fails validation.
    pub fn new<R: Rng + ?Sized>(params: NeuronParams, rng: &mut R) -> Result<Self> {
        params.validate()?;
        let synapses = SynapseTable::random(params.s0, params.d2, params.c, rng);
        Ok(Self {
            params,
            synapses,
            training: false,
        })
    }

    /// Strength-only neuron (C = 1, D1 = D2 = 1). Needs no randomness.
    ///
    /// # Example
    /// ```
    /// use cognon_neural::{Neuron, NeuronModel, Word};
    ///
    /// let neuron = Neuron::simple(16, 4.0, 2.0).unwrap();
    /// let word = Word::from_offsets([1, 3, 4, 5, 6, 8, 9, 14]).unwrap();
    /// assert!(neuron.expose(&word).unwrap().fired());
    /// ```
    pub fn simple(s0: usize, h: f32, g: f32) -> Result<Self> {
        let params = NeuronParams::simple(s0, h, g);
        params.validate()?;
        Ok(Self {
            params,
            synapses: SynapseTable::uniform(s0),
            training: false,
        })
    }

    pub fn params(&self) -> &NeuronParams {
        &self.params
    }

    pub fn synapse_count(&self) -> usize {
        self.params.s0
    }

    pub fn strengths(&self) -> &[f32] {
        &self.synapses.strengths
    }

    pub fn delays(&self) -> &[u32] {
        &self.synapses.delays
    }

    pub fn containers(&self) -> &[u32] {
        &self.synapses.containers
    }

    /// Replace the random delay assignment
    pub fn set_delays(&mut self, delays: Vec<u32>) -> Result<()> {
        self.synapses.assign_delays(delays, self.params.d2)
    }

    /// Replace the random compartment assignment
    pub fn set_containers(&mut self, containers: Vec<u32>) -> Result<()> {
        self.synapses.assign_containers(containers, self.params.c)
    }

    /// H while training, H × G while recognising
    #[inline]
    pub fn effective_threshold(&self) -> f64 {
        let h = f64::from(self.params.h);
        if self.training {
            h
        } else {
            h * f64::from(self.params.g)
        }
    }

    /// Find the first `(delay, container)` whose summed strength reaches the
    /// current threshold
    ///
    /// Only cells the word touches are tracked, keyed so that iteration runs
    /// lowest delay first, then lowest container.
    fn locate(&self, word: &Word) -> Result<FireResult> {
        let slots = self.params.delay_slots();
        // (delay, container) -> (weak, strong) contributor counts
        let mut cells: BTreeMap<(u32, u32), (usize, usize)> = BTreeMap::new();

        for synapse in word.synapses() {
            self.synapses.check_offset(synapse.offset)?;
            let slot = self.synapses.arrival_slot(synapse);
            if slot >= slots {
                continue;
            }
            let container = self.synapses.containers[synapse.offset];
            let cell = cells.entry((slot, container)).or_default();
            if self.synapses.strengths[synapse.offset] > WEAK_STRENGTH {
                cell.1 += 1;
            } else {
                cell.0 += 1;
            }
        }

        let g = f64::from(self.params.g);
        let threshold = self.effective_threshold();
        Ok(cells
            .into_iter()
            .find(|&(_, (weak, strong))| weak as f64 + strong as f64 * g >= threshold)
            .map(|((delay, container), _)| FireResult::Fired { delay, container })
            .unwrap_or(FireResult::Silent))
    }
}

impl NeuronModel for Neuron {
    fn model_name(&self) -> &'static str {
        "Cognon (compartments + delays)"
    }

    fn expose(&self, word: &Word) -> Result<FireResult> {
        self.locate(word)
    }

    fn potentiate(&mut self, word: &Word) -> Result<FireResult> {
        if !self.training {
            tracing::warn!(
                target: "cognon-neural",
                "train() called while not in training mode; word ignored"
            );
            return Ok(FireResult::Silent);
        }

        let result = self.locate(word)?;
        if let FireResult::Fired { delay, container } = result {
            let g = self.params.g;
            for synapse in word.synapses() {
                if self.synapses.arrival_slot(synapse) == delay
                    && self.synapses.containers[synapse.offset] == container
                {
                    self.synapses.potentiate(synapse.offset, g);
                }
            }
        }
        Ok(result)
    }

    fn start_training(&mut self) {
        self.training = true;
    }

    fn finish_training(&mut self) {
        self.training = false;
    }

    fn is_training(&self) -> bool {
        self.training
    }
}
