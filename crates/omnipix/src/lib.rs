#![forbid(unsafe_code)]

//! OmniPix public facade crate.
//!
//! Re-exports the adapter contract and drawing surface from the internal
//! crates, plus a lightweight prelude for day-to-day usage. A concrete
//! display implements [`ColorModel::advance`] and [`Canvas::pixel`] (and
//! [`TextRender::resolve_character`] when text placement is enabled);
//! everything else comes for free and stays overridable.

// --- Core re-exports -------------------------------------------------------

pub use omnipix_core::color::{ColorCycle, ColorModel, ColorValue};
pub use omnipix_core::geometry::Rect;
pub use omnipix_core::glyph::CharacterInfo;
pub use omnipix_core::window::Window;

// --- Raster re-exports -----------------------------------------------------

pub use omnipix_raster::canvas::Canvas;
pub use omnipix_raster::headless::HeadlessDisplay;
pub use omnipix_raster::hooks::{DrawHooks, FillEvent, RectEvent, RunEvent};
pub use omnipix_raster::raster::Raster;

#[cfg(feature = "text")]
pub use omnipix_raster::text::{DEFAULT_LINE_HEIGHT, TextRender};

/// Common imports for display adapters and drawing code.
pub mod prelude {
    pub use crate::{Canvas, CharacterInfo, ColorCycle, ColorModel, ColorValue, Raster, Rect, Window};

    #[cfg(feature = "text")]
    pub use crate::TextRender;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use super::HeadlessDisplay;

    #[test]
    fn prelude_covers_the_drawing_surface() {
        let mut d = HeadlessDisplay::new(16, 16);
        d.fill_window(ColorValue::from_raw(1));
        d.line(0, 0, 15, 15, ColorValue::from_raw(2), 1);
        d.circle(8, 8, 4, ColorValue::from_raw(3), false);
        assert_eq!(d.get(0, 0), Some(ColorValue::from_raw(2)));
    }
}
