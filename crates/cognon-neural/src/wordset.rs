// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Random word generation
//!
//! A [`WordSet`] is the corpus a trial trains or tests with: `count`
//! independently drawn words over the same synapse universe, plus one
//! delay-slot label per word that training fills in.
//!
//! Generation never touches a global generator. Callers hand in the RNG so
//! that parallel trials can each own theirs.

use rand::Rng;

use crate::types::{NeuralError, Result, Synapse, Word};

/// How many synapses fire in a generated word
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActiveSynapses {
    /// Exactly this many distinct offsets per word
    Count(usize),
    /// Every offset fires independently with probability `1/R`
    Density(f64),
}

/// Shape of the words drawn for one trial
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordSpec {
    /// Offsets are drawn from `[0, universe_size)`
    pub universe_size: usize,
    /// Delays are drawn from `[0, delay_range)`
    pub delay_range: u32,
    pub active: ActiveSynapses,
}

impl WordSpec {
    pub fn new(universe_size: usize, delay_range: u32, active: ActiveSynapses) -> Self {
        Self {
            universe_size,
            delay_range,
            active,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.delay_range == 0 {
            return Err(NeuralError::InvalidParameters(
                "delay range must be at least 1".to_string(),
            ));
        }
        match self.active {
            ActiveSynapses::Count(count) if count > self.universe_size => {
                Err(NeuralError::InvalidParameters(format!(
                    "cannot draw {} distinct offsets from a universe of {}",
                    count, self.universe_size
                )))
            }
            ActiveSynapses::Density(r) if !r.is_finite() || r < 1.0 => {
                Err(NeuralError::InvalidParameters(format!(
                    "density factor must be a finite value >= 1, got {}",
                    r
                )))
            }
            _ => Ok(()),
        }
    }

    /// Draw one word. The spec must already be valid.
    pub fn generate_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        let delay_range = self.delay_range;
        match self.active {
            ActiveSynapses::Count(count) => {
                let offsets = rand::seq::index::sample(rng, self.universe_size, count);
                Word::from_synapses(
                    offsets
                        .into_iter()
                        .map(|offset| Synapse::new(offset, rng.gen_range(0..delay_range))),
                )
            }
            ActiveSynapses::Density(r) => {
                let p = 1.0 / r;
                let mut synapses = Vec::new();
                for offset in 0..self.universe_size {
                    if rng.gen_bool(p) {
                        synapses.push(Synapse::new(offset, rng.gen_range(0..delay_range)));
                    }
                }
                Word::from_synapses(synapses)
            }
        }
    }
}

/// A fixed-size batch of words plus their learned delay slots
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordSet {
    words: Vec<Word>,
    delays: Vec<u32>,
}

impl WordSet {
    /// Draw `count` independent words following `spec`
    ///
    /// # Errors
    /// Returns [`NeuralError::InvalidParameters`] if `spec` is not valid.
    pub fn generate<R: Rng + ?Sized>(count: usize, spec: &WordSpec, rng: &mut R) -> Result<Self> {
        spec.validate()?;
        let words = (0..count).map(|_| spec.generate_word(rng)).collect();
        Ok(Self::from_words(words))
    }

    /// Wrap hand-built words; every delay slot starts at 0
    pub fn from_words(words: Vec<Word>) -> Self {
        let delays = vec![0; words.len()];
        Self { words, delays }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn delays(&self) -> &[u32] {
        &self.delays
    }

    /// Record the delay slot learned for word `index`
    pub fn record_delay(&mut self, index: usize, delay: u32) {
        if let Some(slot) = self.delays.get_mut(index) {
            *slot = delay;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> + '_ {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
