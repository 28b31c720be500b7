#![forbid(unsafe_code)]

//! In-memory reference adapter.
//!
//! `HeadlessDisplay` is a bus-free display backed by a row-major pixel store,
//! holding one raw color token per pixel. It exists for tests, host-side
//! snapshot rendering, and as the worked example of the adapter contract:
//! `advance` steps a token by the pixel count (the 1:1 packing of a stream
//! that stores one token per pixel), and `pixel` offsets window-relative
//! coordinates by the window origin and clips to both the window and the
//! device extent — the recommended drop-outside policy.

use omnipix_core::color::{ColorModel, ColorValue};
use omnipix_core::window::Window;

use crate::canvas::Canvas;
use crate::hooks::DrawHooks;

/// A bus-free display writing into host memory.
#[derive(Debug)]
pub struct HeadlessDisplay {
    width: u16,
    height: u16,
    pixels: Vec<ColorValue>,
    window: Window,
    hooks: DrawHooks,
}

impl HeadlessDisplay {
    /// Create a display of `width × height` pixels with the default
    /// full-extent window active and every pixel set to the zero token.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0, "display width must be > 0");
        assert!(height > 0, "display height must be > 0");

        let size = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![ColorValue::ZERO; size],
            window: Window::full(width, height),
            hooks: DrawHooks::none(),
        }
    }

    /// Display width in pixels.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Display height in pixels.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Read back the pixel at device coordinates `(x, y)`.
    ///
    /// Returns `None` outside the device extent.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<ColorValue> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Raw access to the row-major pixel store.
    #[inline]
    pub fn pixels(&self) -> &[ColorValue] {
        &self.pixels
    }

    /// Reset every pixel to the zero token.
    pub fn clear(&mut self) {
        self.pixels.fill(ColorValue::ZERO);
    }

    /// Make `window` the active window, returning the previous one.
    pub fn set_window(&mut self, window: Window) -> Window {
        core::mem::replace(&mut self.window, window)
    }

    /// Restore the default full-extent window, returning the previous one.
    pub fn reset_window(&mut self) -> Window {
        self.set_window(Window::full(self.width, self.height))
    }

    /// Install notification hooks for the default primitives.
    pub fn set_hooks(&mut self, hooks: DrawHooks) {
        self.hooks = hooks;
    }
}

impl ColorModel for HeadlessDisplay {
    /// One token per pixel: stepping `count` pixels adds `count` to the raw
    /// payload. Trivially satisfies the identity and associativity laws.
    fn advance(&self, base: ColorValue, count: u32) -> ColorValue {
        ColorValue::from_raw(base.raw().wrapping_add(count))
    }
}

impl Canvas for HeadlessDisplay {
    fn extent(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn window(&self) -> &Window {
        &self.window
    }

    fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    fn pixel(&mut self, x: u16, y: u16, color: ColorValue) {
        let bounds = self.window.bounds();
        let dx = bounds.x_min() as u32 + x as u32;
        let dy = bounds.y_min() as u32 + y as u32;
        if dx > bounds.x_max() as u32 || dy > bounds.y_max() as u32 {
            return;
        }
        if let Some(i) = self.index(dx as u16, dy as u16) {
            self.pixels[i] = color;
        }
    }

    fn hooks(&self) -> Option<&DrawHooks> {
        Some(&self.hooks)
    }
}
