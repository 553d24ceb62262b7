//! Bank of two-pole resonators, one per mode of the bell.
//!
//! All resonators are driven by the same excitation sample. Each one rings as
//! an exponentially decaying sinusoid at its mode frequency:
//!
//! `y[n] = x[n] - (a1 * y[n - 1] + a2 * y[n - 2])`
//!
//! The output of a resonator is taken as `y[n] - y[n - 2]`, which turns the
//! two-pole low-pass into a band-pass without DC.

use crate::coefficients::ModeCoefficients;
use crate::resources::modes::NUM_MODES;

#[derive(Debug, Default, Clone, Copy)]
pub struct ModeResonator {
    state_1: f32,
    state_2: f32,
}

impl ModeResonator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        self.state_1 = 0.0;
        self.state_2 = 0.0;
    }

    /// Runs one sample and returns the band-passed output.
    #[inline]
    pub fn process(&mut self, in_: f32, coefficients: &ModeCoefficients) -> f32 {
        let y = in_ - (coefficients.a1 * self.state_1 + coefficients.a2 * self.state_2);
        let band_pass = y - self.state_2;
        self.state_2 = self.state_1;
        self.state_1 = y;
        band_pass
    }

    /// Raw two-pole output of the last processed sample.
    #[inline]
    pub fn output(&self) -> f32 {
        self.state_1
    }
}

#[derive(Debug, Clone)]
pub struct ModalBank {
    resonators: [ModeResonator; NUM_MODES],
}

impl Default for ModalBank {
    fn default() -> Self {
        Self {
            resonators: [ModeResonator::default(); NUM_MODES],
        }
    }
}

impl ModalBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        for resonator in self.resonators.iter_mut() {
            resonator.init();
        }
    }

    /// Feeds `in_` to every resonator and writes the band-passed outputs.
    #[inline]
    pub fn process(
        &mut self,
        in_: f32,
        coefficients: &[ModeCoefficients; NUM_MODES],
        out: &mut [f32; NUM_MODES],
    ) {
        for ((resonator, coefficients), out_sample) in self
            .resonators
            .iter_mut()
            .zip(coefficients.iter())
            .zip(out.iter_mut())
        {
            *out_sample = resonator.process(in_, coefficients);
        }
    }

    #[inline]
    pub fn resonator(&self, index: usize) -> &ModeResonator {
        &self.resonators[index]
    }

    /// True when every resonator has fully come to rest.
    pub fn is_silent(&self) -> bool {
        self.resonators
            .iter()
            .all(|resonator| resonator.state_1 == 0.0 && resonator.state_2 == 0.0)
    }
}
