//! Physical modelling of the bell body.

pub mod modal_bank;
