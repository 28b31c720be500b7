#![forbid(unsafe_code)]

//! Rasterization kernel: canvas primitives, shape algorithms, and text
//! placement over the opaque color model.
//!
//! The [`canvas::Canvas`] trait is the adapter seam: a concrete display
//! supplies a single-pixel writer and a color-advance rule, and every default
//! primitive and every shape algorithm works on top of those two operations.
//! [`raster::Raster`] adds lines, circles, and polygons for free on any
//! canvas; [`text::TextRender`] (feature `text`) adds glyph placement with
//! cursor wrap.

pub mod canvas;
pub mod headless;
pub mod hooks;
pub mod raster;

#[cfg(feature = "text")]
pub mod text;
