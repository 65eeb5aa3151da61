// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for neuron and word operations

/// Errors raised while building words, word sets or neurons, or while
/// presenting a word to a neuron.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NeuralError {
    /// A word was constructed with a negative synapse offset
    #[error("Invalid input: synapse offset {offset} is negative")]
    InvalidInput { offset: i64 },

    /// A word references a synapse the neuron does not have
    #[error("Synapse offset {offset} out of range for a neuron with {synapse_count} synapses")]
    OutOfRange { offset: usize, synapse_count: usize },

    /// Parameters that violate the model's invariants
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}

pub type Result<T> = core::result::Result<T, NeuralError>;
pub type Error = NeuralError;
