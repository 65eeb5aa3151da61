// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Property tests for words, word sets and potentiation.
*/

use cognon_neural::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #[test]
    fn negative_offset_always_rejected(
        good in prop::collection::vec(0i64..1000, 0..8),
        bad in i64::MIN..0,
    ) {
        let mut firings: Vec<(i64, u32)> = good.into_iter().map(|o| (o, 0)).collect();
        firings.push((bad, 0));
        prop_assert_eq!(Word::new(firings), Err(NeuralError::InvalidInput { offset: bad }));
    }

    #[test]
    fn generated_words_respect_spec(
        seed in any::<u64>(),
        universe in 1usize..300,
        delay_range in 1u32..8,
        active_frac in 0.0f64..1.0,
        count in 0usize..20,
    ) {
        let active = ((universe as f64) * active_frac) as usize;
        let spec = WordSpec::new(universe, delay_range, ActiveSynapses::Count(active));
        let mut rng = StdRng::seed_from_u64(seed);
        let ws = WordSet::generate(count, &spec, &mut rng).unwrap();

        prop_assert_eq!(ws.len(), count);
        prop_assert_eq!(ws.delays().len(), count);
        for word in ws.iter() {
            prop_assert_eq!(word.len(), active);
            for synapse in word.synapses() {
                prop_assert!(synapse.offset < universe);
                prop_assert!(synapse.delay < delay_range);
            }
        }
    }

    #[test]
    fn strengths_are_monotonic_and_binary(
        seed in any::<u64>(),
        c in 1u32..4,
        d1 in 1u32..3,
        extra_delay in 0u32..3,
        g in 1.0f32..4.0,
        words in 1usize..40,
    ) {
        let params = NeuronParams { s0: 64, h: 3.0, g, c, d1, d2: d1 + extra_delay };
        let mut rng = StdRng::seed_from_u64(seed);
        let mut neuron = Neuron::new(params, &mut rng).unwrap();
        let spec = WordSpec::new(64, d1, ActiveSynapses::Count(12));
        let ws = WordSet::generate(words, &spec, &mut rng).unwrap();

        neuron.start_training();
        let mut previous = neuron.strengths().to_vec();
        for word in ws.iter() {
            neuron.train(word).unwrap();
            for (before, after) in previous.iter().zip(neuron.strengths()) {
                prop_assert!(after >= before);
                prop_assert!(*after == 1.0 || *after == g);
            }
            previous = neuron.strengths().to_vec();
        }
        neuron.finish_training();
    }

    #[test]
    fn train_outside_training_mode_is_a_no_op(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut neuron = Neuron::new(NeuronParams::default(), &mut rng).unwrap();
        let spec = WordSpec::new(200, 4, ActiveSynapses::Count(50));
        let ws = WordSet::generate(10, &spec, &mut rng).unwrap();

        let before = neuron.strengths().to_vec();
        for word in ws.iter() {
            prop_assert_eq!(neuron.potentiate(word).unwrap(), FireResult::Silent);
        }
        prop_assert_eq!(neuron.strengths(), &before[..]);
    }
}
