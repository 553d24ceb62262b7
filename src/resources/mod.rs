//! Resources definitions.

pub mod modes;
pub mod weights;
