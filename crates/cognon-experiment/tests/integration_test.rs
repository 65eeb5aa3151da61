// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for cognon-experiment
//!
//! Full runs through the worker pool, checked for sizing, ranges and
//! reproducibility.

use cognon_experiment::*;

fn table21_config(n: usize, h: f32, s: usize, w: usize, g: f32) -> Configuration {
    Configuration::default()
        .with_neuron_params(1, 1, 1, s as f64 / f64::from(h), g, h)
        .with_test_params(Some(n), None, w, 500)
}

#[test]
fn test_aggregate_size_matches_repetitions() {
    let config = table21_config(4, 4.0, 10, 1, 100.0);
    let options = RunOptions::default().with_repetitions(12).with_workers(3).with_seed(Some(5));

    let results = run_configuration(&config, &options).unwrap();

    assert_eq!(results.len(), 12);
    for row in results.iter() {
        assert!((0.0..=1.0).contains(&row.pl));
        assert!((0.0..=1.0).contains(&row.pf));
        assert!(row.l >= 0.0);
    }
}

#[test]
fn test_minimum_learn_words_raises_trial_count() {
    let config = table21_config(4, 4.0, 10, 2, 100.0);
    let options = RunOptions {
        repetitions: 3,
        workers: 2,
        seed: Some(9),
        min_learn_words: 21,
        min_test_words: 1_000_000,
    };

    let results = run_configuration(&config, &options).unwrap();
    assert_eq!(results.len(), 11);
}

#[test]
fn test_seeded_runs_ignore_worker_count() {
    let config = table21_config(10, 10.0, 100, 4, 100.0);
    let base = RunOptions::default().with_repetitions(8).with_seed(Some(2024));

    let single = run_configuration(&config, &base.clone().with_workers(1)).unwrap();
    let many = run_configuration(&config, &base.with_workers(4)).unwrap();

    assert_eq!(single, many);
}

#[test]
fn test_single_word_full_recall() {
    // With one trained word and G = 100 the neuron always recognises it and
    // a 4-of-10 random word fires only when it is the same word
    let config = table21_config(4, 4.0, 10, 1, 100.0);
    let options = RunOptions::default().with_repetitions(10).with_seed(Some(1));

    let results = run_configuration(&config, &options).unwrap();
    let summary = results.summary();

    assert_eq!(summary.pl.mean, 1.0);
    assert_eq!(summary.pl.std, 0.0);
    assert!(summary.pf.mean < 0.05, "pF = {}", summary.pf.mean);
    assert!(summary.l.mean > 1.0);
}

#[test]
fn test_derived_test_set_size() {
    let config = Configuration::default()
        .with_neuron_params(1, 1, 1, 2.5, 2.0, 4.0)
        .with_test_params(Some(4), None, 2, 0);
    let options = RunOptions {
        repetitions: 4,
        workers: 1,
        seed: Some(3),
        min_learn_words: 1,
        min_test_words: 400,
    };

    // 100 test words per trial: every pF is a multiple of 1/100
    let results = run_configuration(&config, &options).unwrap();
    for pf in results.pf() {
        let scaled = pf * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-9, "pF = {}", pf);
    }
}

#[test]
fn test_density_words() {
    let config = Configuration::default()
        .with_neuron_params(1, 1, 1, 1000.0 / (10.0 * 111.0), 3.6, 10.0)
        .with_test_params(None, Some(111.0), 60, 200);
    let options = RunOptions::default().with_repetitions(2).with_seed(Some(8));

    let results = run_configuration(&config, &options).unwrap();
    assert_eq!(results.len(), 2);
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let config = Configuration::default().with_test_params(None, None, 10, 10);
    let err = run_configuration(&config, &RunOptions::default()).unwrap_err();
    assert!(matches!(err, ExperimentError::InvalidConfiguration(_)));
}
