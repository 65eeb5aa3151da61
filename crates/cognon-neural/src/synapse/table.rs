// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Offset-indexed synapse table
//!
//! Holds the three per-synapse fields of a neuron:
//! - `strengths`: 1.0 for weak synapses, G once potentiated
//! - `delays`: intrinsic propagation delay in `[0, D2)`
//! - `containers`: dendrite compartment in `[0, C)`
//!
//! Delays and containers are fixed at construction. Strengths only go up.

use rand::Rng;

use crate::types::{NeuralError, Result, Synapse};

/// Initial strength of every synapse
pub const WEAK_STRENGTH: f32 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SynapseTable {
    pub strengths: Vec<f32>,
    pub delays: Vec<u32>,
    pub containers: Vec<u32>,
}

impl SynapseTable {
    /// Weak synapses, all with delay 0 in compartment 0
    pub fn uniform(count: usize) -> Self {
        Self {
            strengths: vec![WEAK_STRENGTH; count],
            delays: vec![0; count],
            containers: vec![0; count],
        }
    }

    /// Weak synapses with delays drawn from `[0, delay_range)` and
    /// compartments drawn from `[0, container_count)`
    pub fn random<R: Rng + ?Sized>(
        count: usize,
        delay_range: u32,
        container_count: u32,
        rng: &mut R,
    ) -> Self {
        let delays = (0..count).map(|_| rng.gen_range(0..delay_range)).collect();
        let containers = (0..count)
            .map(|_| rng.gen_range(0..container_count))
            .collect();
        Self {
            strengths: vec![WEAK_STRENGTH; count],
            delays,
            containers,
        }
    }

    pub fn len(&self) -> usize {
        self.strengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty()
    }

    #[inline]
    pub fn check_offset(&self, offset: usize) -> Result<()> {
        if offset >= self.len() {
            return Err(NeuralError::OutOfRange {
                offset,
                synapse_count: self.len(),
            });
        }
        Ok(())
    }

    /// Time slot in which a firing reaches the soma: intrinsic delay plus the
    /// delay carried by the word
    #[inline]
    pub fn arrival_slot(&self, synapse: &Synapse) -> u32 {
        self.delays[synapse.offset].saturating_add(synapse.delay)
    }

    /// Raise a synapse to `strength`. Never lowers it.
    #[inline]
    pub fn potentiate(&mut self, offset: usize, strength: f32) {
        let current = &mut self.strengths[offset];
        if *current < strength {
            *current = strength;
        }
    }

    /// Replace the delay column, checking every value against `delay_range`
    pub fn assign_delays(&mut self, delays: Vec<u32>, delay_range: u32) -> Result<()> {
        Self::check_column("delay", &delays, self.len(), delay_range)?;
        self.delays = delays;
        Ok(())
    }

    /// Replace the container column, checking every value against `container_count`
    pub fn assign_containers(&mut self, containers: Vec<u32>, container_count: u32) -> Result<()> {
        Self::check_column("container", &containers, self.len(), container_count)?;
        self.containers = containers;
        Ok(())
    }

    fn check_column(name: &str, values: &[u32], expected_len: usize, bound: u32) -> Result<()> {
        if values.len() != expected_len {
            return Err(NeuralError::InvalidParameters(format!(
                "{} table has {} entries, expected {}",
                name,
                values.len(),
                expected_len
            )));
        }
        if let Some((index, value)) = values.iter().enumerate().find(|&(_, &v)| v >= bound) {
            return Err(NeuralError::InvalidParameters(format!(
                "{} {} at synapse {} is outside [0, {})",
                name, value, index, bound
            )));
        }
        Ok(())
    }
}
