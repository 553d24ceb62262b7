//! Linear congruential noise source.
//!
//! Every instance owns its generator, so two voices fed with the same
//! parameters render identical noise.

/// Scales a full-range `i32` to `[-1.0, 1.0)`.
const I32_TO_FLOAT: f32 = 1.0 / 2_147_483_648.0;

#[derive(Debug, Default, Clone)]
pub struct Lcg {
    state: i32,
}

impl Lcg {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        self.state = 0;
    }

    #[inline]
    pub fn seed(&mut self, seed: i32) {
        self.state = seed;
    }

    #[inline]
    pub fn state(&self) -> i32 {
        self.state
    }

    #[inline]
    pub fn get_word(&mut self) -> i32 {
        self.state = self.state.wrapping_mul(1103515245).wrapping_add(12345);
        self.state
    }

    #[inline]
    pub fn get_float(&mut self) -> f32 {
        self.get_word() as f32 * I32_TO_FLOAT
    }
}
