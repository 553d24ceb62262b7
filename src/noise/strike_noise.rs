//! Band-limited noise burst used to strike the bell.
//!
//! White noise from the LCG goes through a DC blocker and the strike low-pass.
//! The envelope is applied downstream.

// Based on MIT-licensed code (c) Romain Michon, CCRMA (Stanford University), GRAME

use crate::coefficients::CoefficientCache;
use crate::utils::filter::Biquad;
use crate::utils::random::Lcg;

#[derive(Debug, Default, Clone)]
pub struct StrikeNoise {
    rng: Lcg,
    dc_blocker: Biquad,
    lowpass: Biquad,
}

impl StrikeNoise {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        self.rng.init();
        self.dc_blocker.init();
        self.lowpass.init();
    }

    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self, coefficients: &CoefficientCache) -> f32 {
        let white = self.rng.get_float();
        let blocked = self.dc_blocker.process(white, coefficients.dc_blocker());
        self.lowpass.process(blocked, coefficients.strike_lowpass())
    }

    #[inline]
    pub fn render(&mut self, coefficients: &CoefficientCache, out: &mut [f32]) {
        for out_sample in out.iter_mut() {
            *out_sample = self.next(coefficients);
        }
    }
}
