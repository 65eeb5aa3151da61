// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Bob, the evaluator
//!
//! Exposes a trained neuron to the words it should recognise and to words it
//! has never seen, and tallies the four outcome classes.

use cognon_neural::{NeuronModel, Result, WordSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bob {
    /// Trained and fired
    pub true_positive: usize,
    /// Trained but silent
    pub false_negative: usize,
    /// Not trained but fired
    pub false_positive: usize,
    /// Not trained and silent
    pub true_negative: usize,
}

impl Bob {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count outcomes for both sets. The neuron is only exposed, never trained.
    pub fn test<N: NeuronModel + ?Sized>(
        &mut self,
        neuron: &N,
        train_wordset: &WordSet,
        test_wordset: &WordSet,
    ) -> Result<()> {
        for word in train_wordset.iter() {
            if neuron.expose(word)?.fired() {
                self.true_positive += 1;
            } else {
                self.false_negative += 1;
            }
        }

        for word in test_wordset.iter() {
            if neuron.expose(word)?.fired() {
                self.false_positive += 1;
            } else {
                self.true_negative += 1;
            }
        }

        Ok(())
    }

    /// pL, the fraction of trained words recognised (0 with no trained words)
    pub fn recognition_rate(&self) -> f64 {
        ratio(self.true_positive, self.true_positive + self.false_negative)
    }

    /// pF, the fraction of unseen words that fired (0 with no unseen words)
    pub fn false_alarm_rate(&self) -> f64 {
        ratio(self.false_positive, self.false_positive + self.true_negative)
    }
}

fn ratio(hits: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}
