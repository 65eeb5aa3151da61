// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Trial execution
//!
//! A trial builds one neuron and two word sets from scratch, trains with
//! [`Alice`], evaluates with [`Bob`] and reports `(pL, pF, L)`. Trials share
//! nothing, so [`run_configuration`] fans them out over a rayon pool and joins
//! the rows in trial order. The first failing trial fails the whole run.

use std::time::Instant;

use cognon_config::CognonConfig;
use cognon_neural::{Neuron, WordSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::configuration::Configuration;
use crate::error::{ExperimentError, Result};
use crate::evaluator::Bob;
use crate::metrics::TrialResult;
use crate::stats::TrialResults;
use crate::trainer::Alice;

/// Repetition, parallelism and seeding settings for a configuration run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunOptions {
    /// Minimum number of trials
    pub repetitions: usize,
    /// Worker threads; 0 uses one per logical CPU
    pub workers: usize,
    /// Base seed; `None` seeds every trial from OS entropy
    pub seed: Option<u64>,
    /// Minimum training presentations across all trials
    pub min_learn_words: usize,
    /// Minimum test presentations across all trials, used when the
    /// configuration leaves `num_test_words` at 0
    pub min_test_words: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            repetitions: 20,
            workers: 0,
            seed: None,
            min_learn_words: 1,
            min_test_words: 1_000_000,
        }
    }
}

impl RunOptions {
    pub fn from_config(config: &CognonConfig) -> Self {
        let run = &config.run;
        Self {
            repetitions: run.repetitions,
            workers: run.workers,
            seed: run.seed,
            min_learn_words: run.min_learn_words,
            min_test_words: run.min_test_words,
        }
    }

    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// `max(repetitions, ceil(min_learn_words / w))`
    pub fn trial_count(&self, w: usize) -> usize {
        self.repetitions.max(self.min_learn_words.div_ceil(w.max(1)))
    }

    /// `ceil(min_test_words / trials)`, at least 1
    pub fn test_words_per_trial(&self, trials: usize) -> usize {
        self.min_test_words.div_ceil(trials.max(1)).max(1)
    }

    fn validate(&self) -> Result<()> {
        if self.repetitions == 0 {
            return Err(ExperimentError::InvalidConfiguration(
                "repetitions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Seed for trial `index` of a run seeded with `base` (SplitMix64 finaliser)
pub fn trial_seed(base: u64, index: u64) -> u64 {
    let mut z = base.wrapping_add(index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn trial_rng(seed: Option<u64>, index: usize) -> StdRng {
    match seed {
        Some(base) => StdRng::seed_from_u64(trial_seed(base, index as u64)),
        None => StdRng::from_entropy(),
    }
}

/// Run one trial
///
/// All randomness (synapse wiring and both word sets) is drawn from `rng`.
pub fn run_experiment<R: Rng + ?Sized>(config: &Configuration, rng: &mut R) -> Result<TrialResult> {
    config.validate()?;

    let mut neuron = Neuron::new(config.neuron_params(), rng)?;
    let spec = config.word_spec()?;
    let mut train_wordset = WordSet::generate(config.w, &spec, rng)?;
    let test_wordset = WordSet::generate(config.num_test_words, &spec, rng)?;

    Alice::new().train(&mut neuron, &mut train_wordset)?;

    let mut bob = Bob::new();
    bob.test(&neuron, &train_wordset, &test_wordset)?;

    Ok(TrialResult::new(
        bob.recognition_rate(),
        bob.false_alarm_rate(),
        config.w,
    ))
}

/// Run every trial of a configuration on a worker pool
///
/// The trial count and, when the configuration leaves it at 0, the test-set
/// size are raised so the run meets the minimum presentation counts in
/// `options`.
pub fn run_configuration(config: &Configuration, options: &RunOptions) -> Result<TrialResults> {
    options.validate()?;
    config.validate()?;

    let trials = options.trial_count(config.w);
    if trials != options.repetitions {
        debug!(
            target: "cognon-experiment",
            "Raised trial count from {} to {} to train on at least {} words",
            options.repetitions, trials, options.min_learn_words
        );
    }

    let mut config = config.clone();
    if config.num_test_words == 0 {
        config.num_test_words = options.test_words_per_trial(trials);
        debug!(
            target: "cognon-experiment",
            "Using {} test words per trial", config.num_test_words
        );
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.workers)
        .thread_name(|index| format!("cognon-trial-{}", index))
        .build()
        .map_err(|e| ExperimentError::WorkerPool(e.to_string()))?;

    info!(
        target: "cognon-experiment",
        "Running {} trials: S0={}, H={}, G={}, C={}, w={}, test words={}, workers={}",
        trials,
        config.s0(),
        config.h,
        config.g,
        config.c,
        config.w,
        config.num_test_words,
        pool.current_num_threads()
    );
    let start = Instant::now();

    let rows = pool.install(|| {
        (0..trials)
            .into_par_iter()
            .map(|index| {
                let mut rng = trial_rng(options.seed, index);
                let result = run_experiment(&config, &mut rng)?;
                debug!(
                    target: "cognon-experiment",
                    "Trial {}: pL={:.4} pF={:.6} L={:.2}",
                    index, result.pl, result.pf, result.l
                );
                Ok(result)
            })
            .collect::<Result<Vec<_>>>()
    })?;

    info!(
        target: "cognon-experiment",
        "Finished {} trials in {:.2?}", rows.len(), start.elapsed()
    );

    Ok(TrialResults::from(rows))
}
