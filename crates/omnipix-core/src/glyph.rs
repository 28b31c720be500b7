#![forbid(unsafe_code)]

//! Glyph placement metadata.

use crate::color::ColorValue;

/// Placement metadata for one character code.
///
/// Produced by the adapter's character lookup and consumed by the text
/// engine. The glyph's pixel data itself stays in the adapter's glyph table;
/// `data` is only the base token of that read-only stream, sized
/// `x_dim × y_dim` pixels row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterInfo {
    /// Base color token of the glyph's pixel stream.
    pub data: ColorValue,
    /// Number of pixels the stream covers.
    pub num_pixels: u32,
    /// Glyph width in pixels.
    pub x_dim: u16,
    /// Glyph height in pixels.
    pub y_dim: u16,
    /// Draw the glyph. When false the cursor still advances by `x_dim`
    /// (spacing-only codes).
    pub show: bool,
    /// Set by the text engine when placing this character wrapped the line.
    pub caused_newline: bool,
}

impl CharacterInfo {
    /// A spacing-only sentinel: advance the cursor `x_dim` pixels, draw
    /// nothing. The usual fallback for unknown character codes.
    #[inline]
    pub const fn blank(x_dim: u16, y_dim: u16) -> Self {
        Self {
            data: ColorValue::ZERO,
            num_pixels: 0,
            x_dim,
            y_dim,
            show: false,
            caused_newline: false,
        }
    }
}
