//! Second-order Butterworth sections designed with the bilinear transform.
//!
//! The sections are split into coefficients and state so that a coefficient
//! set computed once per block can drive a filter that runs every sample.

#[allow(unused_imports)]
use num_traits::float::Float;

const M_PI_F: f32 = core::f32::consts::PI;
const M_SQRT_2_F: f32 = core::f32::consts::SQRT_2;

/// Highest normalized frequency accepted by [`prewarp`].
pub const MAX_NORMALIZED_FREQUENCY: f32 = 0.497;

/// Lowest normalized frequency accepted by [`prewarp`].
pub const MIN_NORMALIZED_FREQUENCY: f32 = 1.0e-7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    LowPass,
    HighPass,
}

/// Bilinear prewarping of a normalized frequency (`f / sample_rate`).
#[inline]
pub fn prewarp(f: f32) -> f32 {
    // Clip coefficient to about 100.
    let f = f.clamp(MIN_NORMALIZED_FREQUENCY, MAX_NORMALIZED_FREQUENCY);
    (M_PI_F * f).tan()
}

/// Direct form II coefficients. The feedback terms are already normalized,
/// i.e. `a0 == 1`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BiquadCoefficients {
    pub b0: f32,
    pub b1: f32,
    pub b2: f32,
    pub a1: f32,
    pub a2: f32,
}

impl BiquadCoefficients {
    /// 2-pole Butterworth section at normalized frequency `f`.
    pub fn butterworth(f: f32, mode: FilterMode) -> Self {
        let k = 1.0 / prewarp(f);
        let k2 = k * k;
        let norm = 1.0 / (k2 + M_SQRT_2_F * k + 1.0);

        let (b0, b1, b2) = match mode {
            FilterMode::LowPass => (norm, 2.0 * norm, norm),
            FilterMode::HighPass => (k2 * norm, -2.0 * k2 * norm, k2 * norm),
        };

        Self {
            b0,
            b1,
            b2,
            a1: 2.0 * (1.0 - k2) * norm,
            a2: (k2 - M_SQRT_2_F * k + 1.0) * norm,
        }
    }

    /// Magnitude of the response at DC.
    pub fn dc_gain(&self) -> f32 {
        (self.b0 + self.b1 + self.b2) / (1.0 + self.a1 + self.a2)
    }

    /// Magnitude of the response at Nyquist.
    pub fn nyquist_gain(&self) -> f32 {
        (self.b0 - self.b1 + self.b2) / (1.0 - self.a1 + self.a2)
    }
}

/// State of a direct form II section.
#[derive(Debug, Default, Clone)]
pub struct Biquad {
    state_1: f32,
    state_2: f32,
}

impl Biquad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        self.reset();
    }

    pub fn reset(&mut self) {
        self.state_1 = 0.0;
        self.state_2 = 0.0;
    }

    #[inline]
    pub fn process(&mut self, in_: f32, coefficients: &BiquadCoefficients) -> f32 {
        let w = in_ - (coefficients.a2 * self.state_2 + coefficients.a1 * self.state_1);
        let out = coefficients.b0 * w
            + coefficients.b1 * self.state_1
            + coefficients.b2 * self.state_2;
        self.state_2 = self.state_1;
        self.state_1 = w;
        out
    }
}
