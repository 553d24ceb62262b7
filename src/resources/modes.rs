//! Partials of the bell.
//!
//! One entry per mode: resonant frequency in Hz and decay rate, the reciprocal
//! of the time in seconds the mode needs to fall by 60 dB. The ordering is the
//! one the weight offsets in [`super::weights::WEIGHT_OFFSETS`] refer to, so it
//! must not be re-sorted.

// Based on MIT-licensed code (c) Romain Michon, CCRMA (Stanford University), GRAME

#![allow(clippy::excessive_precision)]

/// Number of modes of the bell model.
pub const NUM_MODES: usize = 50;

/// Physical constants of one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mode {
    /// Resonant frequency in Hz.
    pub frequency: f32,

    /// Decay rate in 1/s. The pole radius is `0.001^(decay_rate / sample_rate)`.
    pub decay_rate: f32,
}

impl Mode {
    pub const fn new(frequency: f32, decay_rate: f32) -> Self {
        Self {
            frequency,
            decay_rate,
        }
    }

    /// Time in seconds until the mode has decayed by 60 dB.
    #[inline]
    pub fn t60(&self) -> f32 {
        1.0 / self.decay_rate
    }
}

pub const MODES: [Mode; NUM_MODES] = [
    Mode::new(4123.4099, 975.121521),
    Mode::new(3998.4301, 72.7954712),
    Mode::new(3993.5901, 68.4358597),
    Mode::new(3789.3800, 11.6631393),
    Mode::new(3786.2799, 11.4415998),
    Mode::new(3722.5900, 7.94609594),
    Mode::new(3719.0401, 7.79781151),
    Mode::new(3678.7102, 6.35503197),
    Mode::new(3485.9200, 2.86326194),
    Mode::new(3392.5200, 2.09878469),
    Mode::new(2925.6900, 0.664678693),
    Mode::new(2922.9999, 0.661161721),
    Mode::new(2874.1900, 0.601628184),
    Mode::new(2863.4200, 0.589509189),
    Mode::new(2827.2200, 0.551191032),
    Mode::new(1186.9400, 0.0766132995),
    Mode::new(1181.2100, 0.0762493014),
    Mode::new(927.7790, 0.0622998103),
    Mode::new(924.8380, 0.0621597022),
    Mode::new(493.6460, 0.0455945022),
    Mode::new(490.2500, 0.0454900004),
    Mode::new(2628.4001, 0.392319173),
    Mode::new(2623.2999, 0.389138192),
    Mode::new(2536.4200, 0.340076268),
    Mode::new(2534.1101, 0.338892877),
    Mode::new(2408.1601, 0.282201737),
    Mode::new(2151.3999, 0.201628014),
    Mode::new(2142.3699, 0.199414521),
    Mode::new(2053.8799, 0.179417238),
    Mode::new(2025.4700, 0.173593029),
    Mode::new(2005.5100, 0.169658288),
    Mode::new(1745.2501, 0.128075823),
    Mode::new(1745.0500, 0.128049657),
    Mode::new(1712.8900, 0.123937115),
    Mode::new(1706.7301, 0.123170547),
    Mode::new(1635.9700, 0.114822067),
    Mode::new(1560.3300, 0.106748313),
    Mode::new(1349.4999, 0.0880413875),
    Mode::new(1348.8400, 0.0879903063),
    Mode::new(2711.5700, 0.449765325),
    Mode::new(2712.4600, 0.450442016),
    Mode::new(3032.5200, 0.828528881),
    Mode::new(2823.2300, 0.547182798),
    Mode::new(3042.1501, 0.845986068),
    Mode::new(3208.5699, 1.25059175),
    Mode::new(3493.6499, 2.94316006),
    Mode::new(3539.7999, 3.49180698),
    Mode::new(3550.5600, 3.64010167),
    Mode::new(4164.8300, 9901.3584),
    Mode::new(4187.9799, 1207654.5),];
