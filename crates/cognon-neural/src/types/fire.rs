// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Outcome of presenting a word to a neuron

/// Result of [`expose`](crate::NeuronModel::expose)
///
/// A neuron fires at the first `(delay, container)` pair whose summed synaptic
/// strength reaches the effective threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FireResult {
    Fired {
        delay: u32,
        container: u32,
    },
    #[default]
    Silent,
}

impl FireResult {
    #[inline]
    pub fn fired(&self) -> bool {
        matches!(self, FireResult::Fired { .. })
    }

    /// Output time slot of the firing, `None` when silent
    #[inline]
    pub fn delay(&self) -> Option<u32> {
        match self {
            FireResult::Fired { delay, .. } => Some(*delay),
            FireResult::Silent => None,
        }
    }

    /// Dendrite compartment that fired, `None` when silent
    #[inline]
    pub fn container(&self) -> Option<u32> {
        match self {
            FireResult::Fired { container, .. } => Some(*container),
            FireResult::Silent => None,
        }
    }

    /// `(fired, delay, container)` triple
    pub fn as_tuple(&self) -> (bool, Option<u32>, Option<u32>) {
        (self.fired(), self.delay(), self.container())
    }
}
