//! Core Module - Proposal rendering
//!
//! Font metrics, logo decoding, the page canvas and the renderer that lays
//! the proposal out on it.

pub mod canvas;
pub mod fonts;
pub mod logo;
pub mod renderer;

pub use canvas::*;
pub use fonts::*;
pub use logo::*;
pub use renderer::*;
