#![forbid(unsafe_code)]

//! Window and cursor state.
//!
//! A window is a rectangular sub-region of device coordinate space plus the
//! text-placement state that lives inside it. All drawing coordinates are
//! window-relative; the adapter's pixel writer offsets them by the window
//! origin. Exactly one window is active at a time on a display; windows are
//! plain owned values the embedding application swaps in and out.

use core::any::Any;
use core::fmt;

use crate::geometry::Rect;
use crate::glyph::CharacterInfo;

/// A drawing window: device-space bounds plus cursor state.
///
/// The cursor is window-relative and signed: wrap logic may let it exit the
/// rectangle transiently before resetting it to the home position
/// (`x_reset`, `y_reset`).
pub struct Window {
    bounds: Rect,
    /// Cursor column, window-relative. May transiently exceed the bounds.
    pub cursor_x: i32,
    /// Cursor row, window-relative. May transiently exceed the bounds.
    pub cursor_y: i32,
    /// Home column the cursor returns to on wrap.
    pub x_reset: u16,
    /// Home row component of the home position.
    pub y_reset: u16,
    last_character: Option<CharacterInfo>,
    /// Adapter-owned slot for window-specific data. Ignored by the core.
    pub data: Option<Box<dyn Any>>,
}

impl Window {
    /// Create a window over `bounds` with the cursor at the home position
    /// (window origin).
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            cursor_x: 0,
            cursor_y: 0,
            x_reset: 0,
            y_reset: 0,
            last_character: None,
            data: None,
        }
    }

    /// The default full-extent window for a display of `x_ext × y_ext`
    /// pixels. Constructed at display initialization so a valid window is
    /// always active.
    pub fn full(x_ext: u16, y_ext: u16) -> Self {
        Self::new(Rect::from_extent(x_ext, y_ext))
    }

    /// Device-space bounds of the window.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Window width in pixels.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.bounds.width()
    }

    /// Window height in pixels.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.bounds.height()
    }

    /// Move the cursor to an arbitrary window-relative position.
    #[inline]
    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    /// Return the cursor to the home position.
    #[inline]
    pub fn home(&mut self) {
        self.cursor_x = self.x_reset as i32;
        self.cursor_y = self.y_reset as i32;
    }

    /// Move the home position and send the cursor there.
    pub fn set_home(&mut self, x_reset: u16, y_reset: u16) {
        self.x_reset = x_reset;
        self.y_reset = y_reset;
        self.home();
    }

    /// The most recently placed character, if any.
    ///
    /// Read-only lookback for diagnostics or kerning; recorded by the text
    /// engine on every placement.
    #[inline]
    pub const fn last_character(&self) -> Option<&CharacterInfo> {
        self.last_character.as_ref()
    }

    /// Record a placed character as the window's last character.
    #[inline]
    pub fn record_character(&mut self, info: CharacterInfo) {
        self.last_character = Some(info);
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("bounds", &self.bounds)
            .field("cursor_x", &self.cursor_x)
            .field("cursor_y", &self.cursor_y)
            .field("x_reset", &self.x_reset)
            .field("y_reset", &self.y_reset)
            .field("last_character", &self.last_character)
            .field("data", &self.data.as_ref().map(|_| "..."))
            .finish()
    }
}
