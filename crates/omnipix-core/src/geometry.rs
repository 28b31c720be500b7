#![forbid(unsafe_code)]

//! Geometric primitives.

/// A rectangular region of device coordinate space with inclusive edges.
///
/// Windows and clip regions are specified as `[x_min, x_max] × [y_min, y_max]`
/// where every edge coordinate is itself part of the region. The constructor
/// normalizes swapped corners, so `x_min <= x_max` and `y_min <= y_max` hold
/// for every constructed value. A `Rect` is never empty: the smallest one is
/// a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    x_min: u16,
    x_max: u16,
    y_min: u16,
    y_max: u16,
}

impl Rect {
    /// Create a rectangle from two corner points, in any order.
    #[inline]
    pub const fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        let (x_min, x_max) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (y_min, y_max) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Full-extent rectangle for a display of `x_ext × y_ext` pixels.
    ///
    /// Zero extents are treated as 1 so the result stays a valid region.
    #[inline]
    pub const fn from_extent(x_ext: u16, y_ext: u16) -> Self {
        Self {
            x_min: 0,
            x_max: x_ext.saturating_sub(1),
            y_min: 0,
            y_max: y_ext.saturating_sub(1),
        }
    }

    /// Left edge (inclusive).
    #[inline]
    pub const fn x_min(&self) -> u16 {
        self.x_min
    }

    /// Right edge (inclusive).
    #[inline]
    pub const fn x_max(&self) -> u16 {
        self.x_max
    }

    /// Top edge (inclusive).
    #[inline]
    pub const fn y_min(&self) -> u16 {
        self.y_min
    }

    /// Bottom edge (inclusive).
    #[inline]
    pub const fn y_max(&self) -> u16 {
        self.y_max
    }

    /// Width in pixels (at least 1, saturating at `u16::MAX`).
    #[inline]
    pub const fn width(&self) -> u16 {
        (self.x_max - self.x_min).saturating_add(1)
    }

    /// Height in pixels (at least 1, saturating at `u16::MAX`).
    #[inline]
    pub const fn height(&self) -> u16 {
        (self.y_max - self.y_min).saturating_add(1)
    }

    /// Area in pixels.
    #[inline]
    pub const fn area(&self) -> u32 {
        self.width() as u32 * self.height() as u32
    }

    /// Check if a point is inside the rectangle (edges included).
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns `None` if the rectangles do not overlap.
    #[inline]
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x_min = self.x_min.max(other.x_min);
        let y_min = self.y_min.max(other.y_min);
        let x_max = self.x_max.min(other.x_max);
        let y_max = self.y_max.min(other.y_max);

        if x_min <= x_max && y_min <= y_max {
            Some(Rect {
                x_min,
                x_max,
                y_min,
                y_max,
            })
        } else {
            None
        }
    }
}

impl Default for Rect {
    /// The single pixel at the origin.
    fn default() -> Self {
        Self::new(0, 0, 0, 0)
    }
}
