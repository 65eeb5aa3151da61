// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Synapse firings and the words built from them
//!
//! A [`Word`] is the input presented to a neuron for one time period: the set
//! of input synapses that fired, each with the delay its spike needs to reach
//! the neuron.

use super::error::{NeuralError, Result};

/// A single synapse firing inside a word
///
/// `offset` identifies the input line (the synapse index inside the neuron),
/// `delay` is the time the signal takes to travel along the axon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Synapse {
    pub offset: usize,
    pub delay: u32,
}

impl Synapse {
    #[inline]
    pub fn new(offset: usize, delay: u32) -> Self {
        Self { offset, delay }
    }
}

/// An immutable set of synapse firings keyed by offset
///
/// Firings are kept sorted by offset. Repeating an offset does not add a
/// second firing; the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    synapses: Vec<Synapse>,
}

impl Word {
    /// Build a word from `(offset, delay)` pairs
    ///
    /// # Errors
    /// Returns [`NeuralError::InvalidInput`] if any offset is negative.
    ///
    /// # Example
    /// ```
    /// use cognon_neural::Word;
    ///
    /// let word = Word::new([(1, 0), (3, 2), (8, 0)]).unwrap();
    /// assert_eq!(word.len(), 3);
    /// assert!(Word::new([(-1, 0)]).is_err());
    /// ```
    pub fn new<I>(firings: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i64, u32)>,
    {
        let synapses = firings
            .into_iter()
            .map(|(offset, delay)| {
                usize::try_from(offset)
                    .map(|offset| Synapse::new(offset, delay))
                    .map_err(|_| NeuralError::InvalidInput { offset })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_synapses(synapses))
    }

    /// Build a word whose firings all carry delay 0
    ///
    /// This is the input of the reduced strength-only model.
    pub fn from_offsets<I>(offsets: I) -> Result<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        Self::new(offsets.into_iter().map(|offset| (offset, 0)))
    }

    /// Build a word from already validated synapses
    pub fn from_synapses<I>(synapses: I) -> Self
    where
        I: IntoIterator<Item = Synapse>,
    {
        let mut synapses: Vec<Synapse> = synapses.into_iter().collect();
        // Stable sort keeps the first occurrence at the head of each run
        synapses.sort_by_key(|s| s.offset);
        synapses.dedup_by_key(|s| s.offset);
        Self { synapses }
    }

    pub fn synapses(&self) -> &[Synapse] {
        &self.synapses
    }

    pub fn offsets(&self) -> impl Iterator<Item = usize> + '_ {
        self.synapses.iter().map(|s| s.offset)
    }

    pub fn contains_offset(&self, offset: usize) -> bool {
        self.synapses
            .binary_search_by_key(&offset, |s| s.offset)
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.synapses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synapses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let word = Word::new(std::iter::empty()).unwrap();
        assert!(word.is_empty());
        assert_eq!(Word::default(), word);
    }

    #[test]
    fn test_negative_offset() {
        let err = Word::new([(2, 0), (-1, 0)]).unwrap_err();
        assert_eq!(err, NeuralError::InvalidInput { offset: -1 });
    }

    #[test]
    fn test_fire_1_3_8() {
        let word = Word::new([(8, 0), (1, 0), (3, 0)]).unwrap();
        assert_eq!(word.len(), 3);
        assert!(word.contains_offset(1));
        assert!(word.contains_offset(3));
        assert!(word.contains_offset(8));
        assert!(!word.contains_offset(2));
        assert!(word.synapses().iter().all(|s| s.delay == 0));
    }

    #[test]
    fn test_duplicate_offsets_collapse() {
        let word = Word::new([(4, 1), (2, 0), (4, 3)]).unwrap();
        assert_eq!(word.len(), 2);
        assert_eq!(word.synapses(), &[Synapse::new(2, 0), Synapse::new(4, 1)]);
    }

    #[test]
    fn test_from_offsets() {
        let word = Word::from_offsets([1, 6, 9]).unwrap();
        assert_eq!(word.offsets().collect::<Vec<_>>(), vec![1, 6, 9]);
        assert!(Word::from_offsets([-3]).is_err());
    }
}
