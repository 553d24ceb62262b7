//! Weighted mixdown of the resonator bank.

// Based on MIT-licensed code (c) Romain Michon, CCRMA (Stanford University), GRAME

use crate::resources::modes::NUM_MODES;
use crate::resources::weights::{clamp_strike_position, weight_slice, WEIGHT_OFFSETS};

/// Fixed normalization of the summed modes.
pub const OUTPUT_SCALE: f32 = 0.02;

#[derive(Debug, Clone)]
pub struct Mixer {
    strike_position: usize,
    weights: [f32; NUM_MODES],
}

impl Default for Mixer {
    fn default() -> Self {
        let mut mixer = Self {
            strike_position: 0,
            weights: [0.0; NUM_MODES],
        };
        mixer.select(0);
        mixer
    }
}

impl Mixer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the weights of a strike position. Out of range positions are
    /// clamped.
    #[inline]
    pub fn select(&mut self, strike_position: usize) {
        self.strike_position = clamp_strike_position(strike_position);
        let slice = weight_slice(self.strike_position);
        for (weight, offset) in self.weights.iter_mut().zip(WEIGHT_OFFSETS.iter()) {
            *weight = slice[*offset];
        }
    }

    #[inline]
    pub fn strike_position(&self) -> usize {
        self.strike_position
    }

    /// Per-mode weights, indexed like the mode table.
    #[inline]
    pub fn weights(&self) -> &[f32; NUM_MODES] {
        &self.weights
    }

    #[inline]
    pub fn mix(&self, band_outputs: &[f32; NUM_MODES]) -> f32 {
        let sum: f32 = band_outputs
            .iter()
            .zip(self.weights.iter())
            .map(|(band_output, weight)| band_output * weight)
            .sum();

        OUTPUT_SCALE * sum
    }
}
