#![forbid(unsafe_code)]

//! The canvas trait: the adapter seam between generic drawing code and one
//! concrete display.
//!
//! A concrete display implements [`Canvas`] by supplying its extent, its
//! active [`Window`], and a single-pixel writer (plus the color-advance rule
//! from [`ColorModel`]). Every other primitive has a default body built from
//! repeated `pixel` calls; adapters with a bulk-transfer path are expected to
//! override them.
//!
//! All coordinates are window-relative. Out-of-window writes are the
//! adapter's call to clip, wrap, or drop — the defaults here never panic on
//! them. Zero-length runs and zero widths draw nothing.

use omnipix_core::color::{ColorCycle, ColorModel, ColorValue};
use omnipix_core::window::Window;

use crate::hooks::{DrawHooks, FillEvent, RectEvent, RunEvent};

/// Primitive pixel-output operations over an active window.
///
/// Required operations: [`Canvas::extent`], [`Canvas::window`],
/// [`Canvas::window_mut`], and [`Canvas::pixel`]. Everything else is
/// provided, overridable, and documented to invoke its [`DrawHooks`]
/// notification only from the default body.
pub trait Canvas: ColorModel {
    /// Device extent in pixels, `(x_ext, y_ext)`.
    fn extent(&self) -> (u16, u16);

    /// The active window.
    fn window(&self) -> &Window;

    /// The active window, mutably.
    fn window_mut(&mut self) -> &mut Window;

    /// Write exactly one pixel at window-relative `(x, y)`.
    ///
    /// Clipping policy is the adapter's; the recommended policy is to drop
    /// writes outside the window and device extent.
    fn pixel(&mut self, x: u16, y: u16, color: ColorValue);

    /// Notification hooks consulted by the default primitive bodies.
    fn hooks(&self) -> Option<&DrawHooks> {
        None
    }

    /// Draw `len` pixels along the x axis starting at `(x0, y0)`.
    ///
    /// Pixel `i` takes the color `advance(color, cycle.position(i))`, so a
    /// run can sweep a repeating pattern. `width` replicates the run across
    /// `width` adjacent rows below `y0`. `len == 0` or `width == 0` draws
    /// nothing.
    fn xline(&mut self, x0: u16, y0: u16, len: u16, color: ColorValue, cycle: ColorCycle, width: u16) {
        if len == 0 || width == 0 {
            return;
        }
        for row in 0..width {
            let Some(y) = y0.checked_add(row) else { break };
            for i in 0..len {
                let Some(x) = x0.checked_add(i) else { break };
                let c = self.advance(color, cycle.position(i as u32));
                self.pixel(x, y, c);
            }
        }
        if let Some(hooks) = self.hooks()
            && let Some(hook) = &hooks.xline
        {
            hook(RunEvent {
                x0,
                y0,
                len,
                color,
                cycle,
                width,
            });
        }
    }

    /// Draw `len` pixels along the y axis starting at `(x0, y0)`.
    ///
    /// Same contract as [`Canvas::xline`] with axes exchanged: `width`
    /// replicates the run across `width` adjacent columns right of `x0`.
    fn yline(&mut self, x0: u16, y0: u16, len: u16, color: ColorValue, cycle: ColorCycle, width: u16) {
        if len == 0 || width == 0 {
            return;
        }
        for col in 0..width {
            let Some(x) = x0.checked_add(col) else { break };
            for i in 0..len {
                let Some(y) = y0.checked_add(i) else { break };
                let c = self.advance(color, cycle.position(i as u32));
                self.pixel(x, y, c);
            }
        }
        if let Some(hooks) = self.hooks()
            && let Some(hook) = &hooks.yline
        {
            hook(RunEvent {
                x0,
                y0,
                len,
                color,
                cycle,
                width,
            });
        }
    }

    /// Draw a rectangle with corners `(x0, y0)` and `(x1, y1)`, in any order.
    ///
    /// Unfilled: four border runs of thickness `stroke`, inset into the
    /// rectangle. A stroke thick enough to meet in the middle degrades to a
    /// full fill. Filled: interior sweep via `xline` rows.
    fn rectangle(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, color: ColorValue, stroke: u16, filled: bool) {
        let (xa, xb) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (ya, yb) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        let w = (xb - xa).saturating_add(1);
        let h = (yb - ya).saturating_add(1);

        let t = stroke.max(1);
        if filled || 2 * t as u32 >= w as u32 || 2 * t as u32 >= h as u32 {
            for y in ya..=yb {
                self.xline(xa, y, w, color, ColorCycle::SOLID, 1);
            }
        } else {
            // Top and bottom bands, then the side bands between them.
            self.xline(xa, ya, w, color, ColorCycle::SOLID, t);
            self.xline(xa, yb - t + 1, w, color, ColorCycle::SOLID, t);
            self.yline(xa, ya + t, h - 2 * t, color, ColorCycle::SOLID, t);
            self.yline(xb - t + 1, ya + t, h - 2 * t, color, ColorCycle::SOLID, t);
        }

        if let Some(hooks) = self.hooks()
            && let Some(hook) = &hooks.rectangle
        {
            hook(RectEvent {
                x0,
                y0,
                x1,
                y1,
                color,
                stroke,
                filled,
            });
        }
    }

    /// Stream colors from a packed array into the rectangle with corners
    /// `(x0, y0)` and `(x1, y1)`, row-major.
    ///
    /// Pixel `i` takes `advance(data, i)`. Exactly `min(size, area)` pixels
    /// are written; when `size` is smaller than the region, the remainder is
    /// left untouched. Callers wanting a complete fill must supply a
    /// complete array.
    fn fill_from_array(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, size: u32, data: ColorValue) {
        let (xa, xb) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (ya, yb) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        let w = (xb - xa) as u32 + 1;
        let h = (yb - ya) as u32 + 1;
        let n = size.min(w * h);

        for i in 0..n {
            let x = xa + (i % w) as u16;
            let y = ya + (i / w) as u16;
            let c = self.advance(data, i);
            self.pixel(x, y, c);
        }

        if let Some(hooks) = self.hooks()
            && let Some(hook) = &hooks.fill_from_array
        {
            hook(FillEvent {
                x0,
                y0,
                x1,
                y1,
                size,
                data,
            });
        }
    }
}
