// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # cognon-observability
//!
//! Logging setup shared by the Cognon binaries and tests.
//!
//! Every crate logs through `tracing` with its package name as the target.
//! This crate turns `--debug-<crate>` flags, the `COGNON_DEBUG` variable and
//! a [`LoggingConfig`] into an installed subscriber.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod init;

pub use cli::*;
pub use config::*;
pub use init::*;

/// Known Cognon crate names for debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "cognon-neural",
    "cognon-experiment",
    "cognon-config",
    "cognon-tables",
];
