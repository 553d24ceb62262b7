//! Filter coefficients derived from the mode table and the sample rate.
//!
//! The mode poles and the DC blocker of the excitation only depend on the
//! sample rate and are computed when it changes. The strike low-pass depends on
//! the cutoff control and is refreshed once per block.

// Based on MIT-licensed code (c) Romain Michon, CCRMA (Stanford University), GRAME

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::resources::modes::{Mode, MODES, NUM_MODES};
use crate::utils::filter::{BiquadCoefficients, FilterMode};
use crate::SampleRate;

/// Cutoff of the high-pass section that removes DC from the noise source.
pub const DC_BLOCKER_CUTOFF_HZ: f32 = 10.0;

/// Default cutoff of the strike low-pass.
pub const DEFAULT_STRIKE_CUTOFF_HZ: f32 = 6500.0;

/// Amplitude ratio reached after one decay period (-60 dB).
const DECAY_LEVEL: f32 = 0.001;

const M_2PI_F: f32 = 2.0 * core::f32::consts::PI;

/// Pole of one mode resonator.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ModeCoefficients {
    /// Pole angle in radians per sample.
    pub angle: f32,
    /// Pole radius, always in `(0.0, 1.0)`.
    pub radius: f32,
    pub a1: f32,
    pub a2: f32,
}

impl ModeCoefficients {
    pub fn new(mode: &Mode, sample_rate: &SampleRate) -> Self {
        let angle = M_2PI_F * mode.frequency * sample_rate.inv_sr;
        // Heavily damped modes underflow to zero at low sample rates.
        let radius = DECAY_LEVEL
            .powf(mode.decay_rate * sample_rate.inv_sr)
            .max(f32::MIN_POSITIVE);

        Self {
            angle,
            radius,
            a1: -2.0 * radius * angle.cos(),
            a2: radius * radius,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CoefficientCache {
    sample_rate: SampleRate,
    modes: [ModeCoefficients; NUM_MODES],
    dc_blocker: BiquadCoefficients,
    strike_lowpass: BiquadCoefficients,
    strike_cutoff: f32,
}

impl CoefficientCache {
    pub fn new(sample_rate: SampleRate) -> Self {
        let mut cache = Self {
            sample_rate,
            modes: [ModeCoefficients::default(); NUM_MODES],
            dc_blocker: BiquadCoefficients::default(),
            strike_lowpass: BiquadCoefficients::default(),
            strike_cutoff: DEFAULT_STRIKE_CUTOFF_HZ,
        };
        cache.set_sample_rate(sample_rate);

        cache
    }

    /// Recomputes everything that depends on the sample rate.
    pub fn set_sample_rate(&mut self, sample_rate: SampleRate) {
        self.sample_rate = sample_rate;

        for (coefficients, mode) in self.modes.iter_mut().zip(MODES.iter()) {
            *coefficients = ModeCoefficients::new(mode, &sample_rate);
        }

        self.dc_blocker = BiquadCoefficients::butterworth(
            sample_rate.normalize(DC_BLOCKER_CUTOFF_HZ),
            FilterMode::HighPass,
        );
        self.update_strike_cutoff(self.strike_cutoff);
    }

    /// Recomputes the strike low-pass. Called once per block.
    #[inline]
    pub fn update_strike_cutoff(&mut self, cutoff_hz: f32) {
        self.strike_cutoff = cutoff_hz;
        self.strike_lowpass = BiquadCoefficients::butterworth(
            self.sample_rate.normalize(cutoff_hz),
            FilterMode::LowPass,
        );
    }

    #[inline]
    pub fn sample_rate(&self) -> &SampleRate {
        &self.sample_rate
    }

    #[inline]
    pub fn modes(&self) -> &[ModeCoefficients; NUM_MODES] {
        &self.modes
    }

    #[inline]
    pub fn dc_blocker(&self) -> &BiquadCoefficients {
        &self.dc_blocker
    }

    #[inline]
    pub fn strike_lowpass(&self) -> &BiquadCoefficients {
        &self.strike_lowpass
    }

    #[inline]
    pub fn strike_cutoff(&self) -> f32 {
        self.strike_cutoff
    }
}
