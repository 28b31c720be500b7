#![forbid(unsafe_code)]

//! Core: opaque color model, geometry, window/cursor state, and glyph metadata.

pub mod color;
pub mod geometry;
pub mod glyph;
pub mod logging;
pub mod window;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
