#![forbid(unsafe_code)]

//! Shape algorithms built entirely on [`Canvas`] primitives.
//!
//! [`Raster`] is blanket-implemented for every canvas, so an adapter that
//! supplies `pixel` and `advance` gets lines, circles, polygons, and window
//! fills for free. The algorithms are integer-only: slope-adaptive Bresenham
//! stepping for lines and midpoint stepping with octant reflection for
//! circles.

use omnipix_core::color::{ColorCycle, ColorValue};

use crate::canvas::Canvas;

/// Higher-level shape drawing over any [`Canvas`].
pub trait Raster: Canvas {
    /// Draw a line segment from `(x0, y0)` to `(x1, y1)`.
    ///
    /// The segment is classified by its dominant axis and stepped with an
    /// incremental error term, normalized so the stepper always advances in
    /// increasing dominant-axis order. `line(a, b)` and `line(b, a)`
    /// therefore paint the identical pixel set. `width` replicates the
    /// stepped path across `width` parallel offsets along the positive minor
    /// axis. Coincident endpoints and `width == 0` draw nothing.
    fn line(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, color: ColorValue, width: u16) {
        if width == 0 || (x0 == x1 && y0 == y1) {
            return;
        }
        omnipix_core::trace!(x0, y0, x1, y1, width, "line");

        if y0 == y1 {
            let len = x0.abs_diff(x1).saturating_add(1);
            self.xline(x0.min(x1), y0, len, color, ColorCycle::SOLID, width);
            return;
        }
        if x0 == x1 {
            let len = y0.abs_diff(y1).saturating_add(1);
            self.yline(x0, y0.min(y1), len, color, ColorCycle::SOLID, width);
            return;
        }

        let (x0, y0, x1, y1) = (x0 as i32, y0 as i32, x1 as i32, y1 as i32);
        if (y1 - y0).abs() < (x1 - x0).abs() {
            if x0 > x1 {
                line_shallow(self, x1, y1, x0, y0, color, width);
            } else {
                line_shallow(self, x0, y0, x1, y1, color, width);
            }
        } else if y0 > y1 {
            line_steep(self, x1, y1, x0, y0, color, width);
        } else {
            line_steep(self, x0, y0, x1, y1, color, width);
        }
    }

    /// Draw a circle of `radius` centered at `(x0, y0)`.
    ///
    /// One octant is stepped with the midpoint rule; the remaining seven are
    /// produced by coordinate reflection, so 8-way symmetry holds by
    /// construction. When `filled`, each pair of symmetric points on a
    /// scanline is connected with a horizontal run instead of two isolated
    /// pixels. Portions falling outside coordinate space are clipped.
    fn circle(&mut self, x0: u16, y0: u16, radius: u16, color: ColorValue, filled: bool) {
        omnipix_core::trace!(x0, y0, radius, filled, "circle");
        let cx = x0 as i32;
        let cy = y0 as i32;

        let mut dx = 0i32;
        let mut dy = radius as i32;
        let mut d = 1 - dy;
        while dx <= dy {
            circle_octants(self, cx, cy, dx, dy, color, filled);
            if d < 0 {
                d += 2 * dx + 3;
            } else {
                d += 2 * (dx - dy) + 5;
                dy -= 1;
            }
            dx += 1;
        }
    }

    /// Draw a closed polygon connecting vertex `i` to `(i + 1) mod n`.
    ///
    /// `n` is the shorter of the two coordinate slices; matching lengths are
    /// the caller's contract. Fewer than two vertices draws nothing.
    fn polygon(&mut self, xs: &[u16], ys: &[u16], color: ColorValue, width: u16) {
        let n = xs.len().min(ys.len());
        if n < 2 {
            return;
        }
        for i in 0..n {
            let j = (i + 1) % n;
            self.line(xs[i], ys[i], xs[j], ys[j], color, width);
        }
    }

    /// Fill the entire active window with one color.
    fn fill_window(&mut self, color: ColorValue) {
        let w = self.window().width();
        let h = self.window().height();
        self.rectangle(0, 0, w - 1, h - 1, color, 1, true);
    }
}

impl<C: Canvas + ?Sized> Raster for C {}

/// x-dominant stepper; requires `x0 < x1`.
fn line_shallow<C: Canvas + ?Sized>(
    canvas: &mut C,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: ColorValue,
    width: u16,
) {
    let dx = x1 - x0;
    let mut dy = y1 - y0;
    let mut y_step = 1;
    if dy < 0 {
        y_step = -1;
        dy = -dy;
    }
    let mut err = 2 * dy - dx;
    let mut y = y0;

    for x in x0..=x1 {
        for off in 0..width as i32 {
            put_pixel(canvas, x, y + off, color);
        }
        if err > 0 {
            y += y_step;
            err -= 2 * dx;
        }
        err += 2 * dy;
    }
}

/// y-dominant stepper; requires `y0 < y1`.
fn line_steep<C: Canvas + ?Sized>(
    canvas: &mut C,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: ColorValue,
    width: u16,
) {
    let dy = y1 - y0;
    let mut dx = x1 - x0;
    let mut x_step = 1;
    if dx < 0 {
        x_step = -1;
        dx = -dx;
    }
    let mut err = 2 * dx - dy;
    let mut x = x0;

    for y in y0..=y1 {
        for off in 0..width as i32 {
            put_pixel(canvas, x + off, y, color);
        }
        if err > 0 {
            x += x_step;
            err -= 2 * dy;
        }
        err += 2 * dx;
    }
}

/// Paint one octant step and its seven reflections.
fn circle_octants<C: Canvas + ?Sized>(
    canvas: &mut C,
    cx: i32,
    cy: i32,
    dx: i32,
    dy: i32,
    color: ColorValue,
    filled: bool,
) {
    if filled {
        hspan(canvas, cx - dx, cx + dx, cy - dy, color);
        hspan(canvas, cx - dx, cx + dx, cy + dy, color);
        hspan(canvas, cx - dy, cx + dy, cy - dx, color);
        hspan(canvas, cx - dy, cx + dy, cy + dx, color);
    } else {
        put_pixel(canvas, cx + dx, cy + dy, color);
        put_pixel(canvas, cx - dx, cy + dy, color);
        put_pixel(canvas, cx + dx, cy - dy, color);
        put_pixel(canvas, cx - dx, cy - dy, color);
        put_pixel(canvas, cx + dy, cy + dx, color);
        put_pixel(canvas, cx - dy, cy + dx, color);
        put_pixel(canvas, cx + dy, cy - dx, color);
        put_pixel(canvas, cx - dy, cy - dx, color);
    }
}

/// Horizontal run from `x_left` to `x_right` inclusive, clipped to
/// non-negative coordinate space.
fn hspan<C: Canvas + ?Sized>(canvas: &mut C, x_left: i32, x_right: i32, y: i32, color: ColorValue) {
    if y < 0 || y > u16::MAX as i32 {
        return;
    }
    let xl = x_left.max(0);
    if xl > x_right || xl > u16::MAX as i32 {
        return;
    }
    let len = (x_right - xl + 1).min(u16::MAX as i32) as u16;
    canvas.xline(xl as u16, y as u16, len, color, ColorCycle::SOLID, 1);
}

/// Single pixel write, clipped to non-negative coordinate space.
#[inline]
fn put_pixel<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, color: ColorValue) {
    if (0..=u16::MAX as i32).contains(&x) && (0..=u16::MAX as i32).contains(&y) {
        canvas.pixel(x as u16, y as u16, color);
    }
}
