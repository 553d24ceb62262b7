//! Triangular strike envelope.
//!
//! A rising edge of the gate restarts a ramp that rises linearly to 1.0 over
//! the first half of the strike window and falls back to 0.0 over the second
//! half. The window length scales with the sharpness control: short windows
//! give hard, bright strikes.

// Based on MIT-licensed code (c) Romain Michon, CCRMA (Stanford University), GRAME

use crate::SampleRate;

/// Strike window per unit of sharpness, in seconds.
pub const WINDOW_SECONDS: f32 = 0.004;

/// Default sharpness of the strike.
pub const DEFAULT_SHARPNESS: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopePhase {
    Rising,
    Falling,
    Idle,
}

/// Window geometry for one block, derived from sharpness and sample rate.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StrikeWindow {
    /// Samples of window per unit of sharpness.
    samples_per_sharpness: f32,
    sharpness: f32,
    length: f32,
    half_length: f32,
    slope: f32,
}

impl StrikeWindow {
    pub fn new(sharpness: f32, sample_rate: &SampleRate) -> Self {
        let samples_per_sharpness = WINDOW_SECONDS * sample_rate.sample_rate_hz;
        let length = samples_per_sharpness * sharpness;
        let half_length = 0.5 * length;

        Self {
            samples_per_sharpness,
            sharpness,
            length,
            half_length,
            slope: 1.0 / half_length,
        }
    }

    /// Window length in samples.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Position of the peak in samples.
    #[inline]
    pub fn half_length(&self) -> f32 {
        self.half_length
    }

    #[inline]
    pub fn sharpness(&self) -> f32 {
        self.sharpness
    }
}

#[derive(Debug, Default, Clone)]
pub struct StrikeEnvelope {
    accumulator: f32,
    previous_gate: f32,
    previous_sharpness: f32,
    value: f32,
}

impl StrikeEnvelope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        self.accumulator = 0.0;
        self.previous_gate = 0.0;
        self.previous_sharpness = 0.0;
        self.value = 0.0;
    }

    #[inline]
    pub fn process(&mut self, gate: f32, window: &StrikeWindow) -> f32 {
        let rising_edge = gate - self.previous_gate > 0.0;

        self.accumulator = if rising_edge {
            0.0
        } else {
            // A sharpness change moves the accumulator along with the window,
            // which also parks a freshly reset envelope at the window end.
            let drift =
                window.samples_per_sharpness * (window.sharpness - self.previous_sharpness);
            f32::min(window.length, self.accumulator + drift + 1.0)
        };

        self.previous_gate = gate;
        self.previous_sharpness = window.sharpness;

        self.value = if self.accumulator < window.half_length {
            if self.accumulator < 0.0 {
                0.0
            } else {
                window.slope * self.accumulator
            }
        } else if self.accumulator < window.length {
            1.0 - window.slope * (self.accumulator - window.half_length)
        } else {
            0.0
        };

        self.value
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Phase of the envelope at the last processed sample.
    #[inline]
    pub fn phase(&self, window: &StrikeWindow) -> EnvelopePhase {
        if self.accumulator >= window.length {
            EnvelopePhase::Idle
        } else if self.accumulator < window.half_length {
            EnvelopePhase::Rising
        } else {
            EnvelopePhase::Falling
        }
    }
}
