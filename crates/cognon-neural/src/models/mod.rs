// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neuron Model Architecture
//!
//! [`NeuronModel`] is the capability set callers depend on. [`Neuron`] is the
//! canonical implementation: a binary-strength neuron with dendrite
//! compartments and per-synapse delays. The strength-only neuron is the same
//! model with one compartment and a single delay slot (see
//! [`Neuron::simple`]).

pub mod cognon;
pub mod traits;

pub use cognon::{Neuron, NeuronParams};
pub use traits::NeuronModel;
