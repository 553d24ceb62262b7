//! Utility functions.
//!
//! Filter sections and the noise source shared by the excitation path.

pub mod filter;
pub mod random;
