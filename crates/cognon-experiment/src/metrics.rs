// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Per-trial metrics
//!
//! ## Learned bits
//!
//! The trained/untrained distinction is treated as a binary asymmetric
//! channel observed through pL (hit rate) and pF (false-alarm rate):
//!
//! ```text
//! L = w · [ (1-pL)·log2((1-pL)/(1-pF)) + pL·log2(pL/pF) ]    pL > pF
//! L = -w · log2(pF)                                            pL = 1, pF > 0
//! L = w                                                        pL = 1, pF = 0
//! L = 0                                                        pL <= pF
//! ```
//!
//! With `pF = 0` and `pL < 1` the `log2(pL/pF)` term is unbounded; it is
//! replaced by 1 (the same substitution that yields `L = w` at `pL = 1`) and
//! the estimate is floored at 0.

use std::f64::consts::LN_2;

/// Outcome of one train/evaluate trial
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialResult {
    /// Fraction of trained words recognised
    pub pl: f64,
    /// Fraction of unseen words that fired
    pub pf: f64,
    /// Estimated bits learned
    pub l: f64,
}

impl TrialResult {
    /// Derive L from the two rates
    pub fn new(pl: f64, pf: f64, w: usize) -> Self {
        Self {
            pl,
            pf,
            l: learned_bits(pl, pf, w),
        }
    }
}

/// Estimated information stored by a neuron trained on `w` words
pub fn learned_bits(pl: f64, pf: f64, w: usize) -> f64 {
    let w = w as f64;

    if pl >= 1.0 {
        if pf > 0.0 {
            -w * pf.log2()
        } else {
            w
        }
    } else if pl > pf {
        if pf <= 0.0 {
            let miss = 1.0 - pl;
            (w * (pl + miss * miss.log2())).max(0.0)
        } else {
            w / LN_2
                * ((1.0 - pl).ln() - (1.0 - pf).ln()
                    + pl * ((1.0 - pf).ln() - (1.0 - pl).ln() + pl.ln() - pf.ln()))
        }
    } else {
        0.0
    }
}
