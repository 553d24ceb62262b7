//! Error types.

use thiserror::Error;

/// Errors that can occur while configuring a voice.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// The sample rate is zero, negative or not a finite number.
    #[error("invalid sample rate: {0} Hz")]
    InvalidSampleRate(f32),
}
