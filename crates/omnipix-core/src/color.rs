#![forbid(unsafe_code)]

//! Opaque color tokens and the adapter-supplied color model.
//!
//! Generic drawing code never knows how wide a pixel is: a monochrome panel
//! packs eight pixels into a byte, an RGB666 TFT spends three bytes on one.
//! [`ColorValue`] hides that behind a fixed-size token, and the one sanctioned
//! operation on tokens is [`ColorModel::advance`], which steps a token through
//! an underlying pixel stream by a pixel count. Everything else about the
//! payload is the adapter's business.

/// An opaque, fixed-size color token.
///
/// The 32-bit payload has no meaning to generic code. An adapter may store a
/// packed color directly (RGB565, a palette index, a 1-bit level) or an offset
/// into its own color data; [`ColorModel::advance`] is the only code that
/// interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct ColorValue(u32);

impl ColorValue {
    /// The all-zero token.
    pub const ZERO: Self = Self(0);

    /// Wrap a raw adapter-defined payload.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw adapter-defined payload.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Adapter contract for stepping through packed color data.
///
/// Required for every concrete display because only the adapter knows a
/// pixel's byte width. Implementations must be pure functions over the token
/// representation and uphold two laws:
///
/// - identity: `advance(c, 0) == c`
/// - associativity: `advance(advance(c, n), m) == advance(c, n + m)`
pub trait ColorModel {
    /// The color value `count` pixel-equivalents after `base` in an
    /// underlying data stream.
    fn advance(&self, base: ColorValue, count: u32) -> ColorValue;
}

/// A repeating color pattern along a run.
///
/// Pixel `i` of a run takes the color `advance(base, (offset + i) % length)`,
/// so a run can cycle through `length` consecutive colors of a packed
/// sequence starting `offset` entries in. [`ColorCycle::SOLID`] (length 1)
/// paints every pixel with the base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCycle {
    /// Number of consecutive colors in the pattern. Zero is treated as 1.
    pub length: u16,
    /// Starting position within the pattern.
    pub offset: u16,
}

impl ColorCycle {
    /// A single-color (non-cycling) run.
    pub const SOLID: Self = Self {
        length: 1,
        offset: 0,
    };

    /// Cycle through `length` colors starting at the beginning.
    #[inline]
    pub const fn new(length: u16) -> Self {
        Self { length, offset: 0 }
    }

    /// Cycle through `length` colors starting `offset` entries in.
    #[inline]
    pub const fn with_offset(length: u16, offset: u16) -> Self {
        Self { length, offset }
    }

    /// Pattern position for the `written`-th pixel of a run.
    ///
    /// A zero-length cycle degrades to a solid run rather than dividing by
    /// zero.
    #[inline]
    pub const fn position(&self, written: u32) -> u32 {
        let length = if self.length == 0 { 1 } else { self.length as u32 };
        (self.offset as u32 + written) % length
    }
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::SOLID
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorCycle, ColorModel, ColorValue};

    /// Reference model: tokens are indices into a packed stream.
    struct Stream;

    impl ColorModel for Stream {
        fn advance(&self, base: ColorValue, count: u32) -> ColorValue {
            ColorValue::from_raw(base.raw().wrapping_add(count))
        }
    }

    #[test]
    fn raw_round_trip() {
        let c = ColorValue::from_raw(0xDEAD_BEEF);
        assert_eq!(c.raw(), 0xDEAD_BEEF);
        assert_eq!(ColorValue::ZERO.raw(), 0);
        assert_eq!(ColorValue::default(), ColorValue::ZERO);
    }

    #[test]
    fn advance_identity() {
        let m = Stream;
        let c = ColorValue::from_raw(42);
        assert_eq!(m.advance(c, 0), c);
    }

    #[test]
    fn advance_associativity() {
        let m = Stream;
        let c = ColorValue::from_raw(7);
        for (n, k) in [(0u32, 0u32), (1, 5), (13, 29), (1000, 1)] {
            assert_eq!(m.advance(m.advance(c, n), k), m.advance(c, n + k));
        }
    }

    #[test]
    fn solid_cycle_stays_at_base() {
        let cycle = ColorCycle::SOLID;
        for i in 0..10 {
            assert_eq!(cycle.position(i), 0);
        }
    }

    #[test]
    fn cycle_wraps_modulo_length() {
        let cycle = ColorCycle::new(3);
        let positions: Vec<u32> = (0..7).map(|i| cycle.position(i)).collect();
        assert_eq!(positions, [0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn cycle_offset_shifts_start() {
        let cycle = ColorCycle::with_offset(4, 2);
        let positions: Vec<u32> = (0..6).map(|i| cycle.position(i)).collect();
        assert_eq!(positions, [2, 3, 0, 1, 2, 3]);
    }

    #[test]
    fn zero_length_cycle_degrades_to_solid() {
        let cycle = ColorCycle::with_offset(0, 5);
        assert_eq!(cycle.position(0), 0);
        assert_eq!(cycle.position(99), 0);
    }
}
