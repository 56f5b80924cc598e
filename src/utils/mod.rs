//! Utils Module - Helper Functions & Shared Utilities
//!
//! Constants and the timestamp formatter used by the renderer.

pub mod constants;
pub mod timestamp;

pub use constants::*;
pub use timestamp::*;
