//! Noise sources.

pub mod strike_noise;
