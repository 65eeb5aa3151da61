// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Threshold and training scenarios for the strength-only specialisation.

use cognon_neural::{FireResult, NeuralError, Neuron, NeuronModel, NeuronParams, Word};

fn offsets(list: &[i64]) -> Word {
    Word::from_offsets(list.iter().copied()).unwrap()
}

#[test]
fn test_threshold_scenario() {
    let neuron = Neuron::simple(16, 4.0, 2.0).unwrap();
    assert_eq!(*neuron.params(), NeuronParams::simple(16, 4.0, 2.0));

    assert_eq!(neuron.expose(&offsets(&[1, 6, 9])).unwrap(), FireResult::Silent);
    assert_eq!(
        neuron.expose(&offsets(&[1, 3, 4, 5, 6, 8, 9, 14])).unwrap(),
        FireResult::Fired { delay: 0, container: 0 }
    );
}

#[test]
fn test_out_of_range_scenario() {
    let mut neuron = Neuron::simple(16, 4.0, 2.0).unwrap();
    let word = offsets(&[3, 16]);
    assert!(matches!(
        neuron.expose(&word),
        Err(NeuralError::OutOfRange { offset: 16, synapse_count: 16 })
    ));

    neuron.start_training();
    assert!(neuron.train(&word).is_err());
    assert!(neuron.strengths().iter().all(|&s| s == 1.0));
}

#[test]
fn test_end_to_end_training() {
    let mut neuron = Neuron::simple(16, 4.0, 2.0).unwrap();
    let trained = [offsets(&[1, 6, 9, 14]), offsets(&[3, 4, 9, 13])];

    neuron.start_training();
    for word in &trained {
        assert!(neuron.train(word).unwrap());
    }
    neuron.finish_training();

    for word in &trained {
        assert!(neuron.expose(word).unwrap().fired());
    }
    // Shares two offsets with each trained word
    assert!(!neuron.expose(&offsets(&[2, 6, 12, 14])).unwrap().fired());
    // Shares three offsets with a trained word: false alarm
    assert!(neuron.expose(&offsets(&[1, 4, 9, 14])).unwrap().fired());

    let strong: Vec<usize> = neuron
        .strengths()
        .iter()
        .enumerate()
        .filter(|&(_, &s)| s == 2.0)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(strong, vec![1, 3, 4, 6, 9, 13, 14]);
}

#[test]
fn test_trained_words_recognised_for_any_g() {
    for &h in &[3.0f32, 7.0, 10.0, 30.0] {
        for &g in &[1.1f32, 1.3, 1.5, 1.9, 3.6, 100.0] {
            let mut neuron = Neuron::simple(64, h, g).unwrap();
            let word = Word::from_offsets(0..h as i64).unwrap();

            neuron.start_training();
            assert!(neuron.train(&word).unwrap(), "H={} G={}", h, g);
            neuron.finish_training();

            assert!(neuron.expose(&word).unwrap().fired(), "H={} G={}", h, g);
        }
    }
}
