// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Synapse storage
//!
//! Per-synapse state is kept as a structure of arrays indexed by offset.

pub mod table;

pub use table::SynapseTable;
