//! CLI command implementations.

pub mod calibration;
pub mod check;
pub mod common;
pub mod gate;
pub mod state;
pub mod version;
