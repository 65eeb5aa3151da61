// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Alice, the trainer

use cognon_neural::{NeuronModel, Result, WordSet};

/// Presents a training set to a neuron, in order
#[derive(Debug, Clone, Copy, Default)]
pub struct Alice;

impl Alice {
    pub fn new() -> Self {
        Self
    }

    /// Train `neuron` on every word of `wordset`
    ///
    /// The neuron is in recognition mode again when this returns, even on
    /// error. The delay slot of every word that fired is recorded in
    /// `wordset`. Returns how many words fired.
    pub fn train<N: NeuronModel + ?Sized>(&self, neuron: &mut N, wordset: &mut WordSet) -> Result<usize> {
        neuron.start_training();
        let outcome = Self::present_all(neuron, wordset);
        neuron.finish_training();
        outcome
    }

    fn present_all<N: NeuronModel + ?Sized>(neuron: &mut N, wordset: &mut WordSet) -> Result<usize> {
        let mut fired = 0;
        for index in 0..wordset.len() {
            let result = neuron.potentiate(&wordset.words()[index])?;
            if let Some(delay) = result.delay() {
                wordset.record_delay(index, delay);
                fired += 1;
            }
        }
        Ok(fired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cognon_neural::{NeuralError, Neuron, NeuronParams, Word};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn word(offsets: &[i64]) -> Word {
        Word::from_offsets(offsets.iter().copied()).unwrap()
    }

    #[test]
    fn test_train() {
        let mut neuron = Neuron::simple(16, 4.0, 2.0).unwrap();
        let mut wordset = WordSet::from_words(vec![word(&[1, 6, 9, 14]), word(&[3, 4, 9, 13])]);

        let fired = Alice::new().train(&mut neuron, &mut wordset).unwrap();
        assert_eq!(fired, 2);
        assert!(!neuron.is_training());

        assert!(!neuron.expose(&word(&[2, 6, 12, 14])).unwrap().fired());
        assert!(!neuron.expose(&word(&[3, 7, 9, 13])).unwrap().fired());
        // False alarm
        assert!(neuron.expose(&word(&[1, 4, 9, 14])).unwrap().fired());
    }

    #[test]
    fn test_records_delay_slots() {
        let mut neuron = Neuron::simple(8, 2.0, 2.0).unwrap();
        neuron.set_delays(vec![0; 8]).unwrap();
        // Second word is too small to fire in training
        let mut wordset = WordSet::from_words(vec![word(&[0, 1]), word(&[2])]);

        let fired = Alice::new().train(&mut neuron, &mut wordset).unwrap();
        assert_eq!(fired, 1);
        assert_eq!(wordset.delays(), &[0, 0]);
    }

    #[test]
    fn test_records_nonzero_delay_slot() {
        let params = NeuronParams { s0: 4, h: 2.0, g: 2.0, c: 1, d1: 1, d2: 3 };
        let mut rng = StdRng::seed_from_u64(0);
        let mut neuron = Neuron::new(params, &mut rng).unwrap();
        neuron.set_delays(vec![2, 2, 0, 0]).unwrap();
        let mut wordset = WordSet::from_words(vec![word(&[0, 1])]);

        Alice::new().train(&mut neuron, &mut wordset).unwrap();
        assert_eq!(wordset.delays(), &[2]);
    }

    #[test]
    fn test_error_leaves_recognition_mode() {
        let mut neuron = Neuron::simple(4, 1.0, 2.0).unwrap();
        let mut wordset = WordSet::from_words(vec![word(&[0]), word(&[7])]);

        let err = Alice::new().train(&mut neuron, &mut wordset).unwrap_err();
        assert_eq!(err, NeuralError::OutOfRange { offset: 7, synapse_count: 4 });
        assert!(!neuron.is_training());
    }
}
