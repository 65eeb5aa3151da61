// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Capability set shared by every neuron model
//!
//! Trainers and evaluators only talk to neurons through [`NeuronModel`].

use crate::types::{FireResult, Result, Word};

pub trait NeuronModel {
    /// Human-readable model name
    fn model_name(&self) -> &'static str;

    /// Decide whether `word` makes the neuron fire. Never mutates the neuron.
    ///
    /// # Errors
    /// [`NeuralError::OutOfRange`](crate::NeuralError::OutOfRange) if the word
    /// references a synapse the neuron does not have.
    fn expose(&self, word: &Word) -> Result<FireResult>;

    /// Training step reporting where the neuron fired
    ///
    /// Outside training mode this is a logged no-op returning
    /// [`FireResult::Silent`].
    fn potentiate(&mut self, word: &Word) -> Result<FireResult>;

    /// Training step reporting only whether the neuron fired
    fn train(&mut self, word: &Word) -> Result<bool> {
        Ok(self.potentiate(word)?.fired())
    }

    fn start_training(&mut self);

    fn finish_training(&mut self);

    fn is_training(&self) -> bool;
}
