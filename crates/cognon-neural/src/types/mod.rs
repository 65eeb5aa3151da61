// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neural Types Module
//!
//! Value types shared by the neuron model and the experiment harness.

pub mod error;
pub mod fire;
pub mod word;

pub use error::{Error, NeuralError, Result};
pub use fire::FireResult;
pub use word::{Synapse, Word};
