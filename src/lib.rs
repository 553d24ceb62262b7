#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

pub mod coefficients;
pub mod controls;
pub mod envelope;
pub mod error;
pub mod mixer;
pub mod noise;
pub mod physical_modelling;
pub mod resources;
pub mod utils;
pub mod voice;

pub use error::Error;
pub use voice::{BellVoice, Parameters};

/// Number of audio inputs consumed by a voice.
pub const NUM_INPUTS: usize = 0;

/// Number of audio outputs written by a voice. Both carry the same signal.
pub const NUM_OUTPUTS: usize = 2;

/// Lowest sample rate the model is evaluated at.
pub const MIN_SAMPLE_RATE: f32 = 1.0;

/// Highest sample rate the model is evaluated at.
pub const MAX_SAMPLE_RATE: f32 = 192000.0;

/// Sample rate context for DSP calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRate {
    /// Sample rate in Hz, clamped to the operating range.
    pub sample_rate_hz: f32,
    /// Reciprocal of sample rate (1.0 / sample_rate_hz) for fast multiplication
    pub inv_sr: f32,
}

impl SampleRate {
    /// Create a new sample rate context.
    ///
    /// Rates that are not finite or not positive are rejected. Everything
    /// else is clamped to `MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE`.
    pub fn new(sample_rate_hz: f32) -> Result<Self, Error> {
        if !sample_rate_hz.is_finite() || sample_rate_hz <= 0.0 {
            log::error!("Rejecting sample rate {} Hz", sample_rate_hz);
            return Err(Error::InvalidSampleRate(sample_rate_hz));
        }

        let clamped = sample_rate_hz.clamp(MIN_SAMPLE_RATE, MAX_SAMPLE_RATE);
        if clamped != sample_rate_hz {
            log::warn!(
                "Sample rate {} Hz out of range, using {} Hz",
                sample_rate_hz,
                clamped
            );
        }

        Ok(Self {
            sample_rate_hz: clamped,
            inv_sr: 1.0 / clamped,
        })
    }

    /// Converts a frequency in Hz to a normalized frequency.
    #[inline]
    pub fn normalize(&self, frequency_hz: f32) -> f32 {
        frequency_hz * self.inv_sr
    }
}
