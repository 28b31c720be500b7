#![forbid(unsafe_code)]

//! Text placement over canvas primitives.
//!
//! The adapter supplies one operation — a deterministic map from character
//! code to [`CharacterInfo`] — and the engine handles the rest: painting the
//! glyph at the window cursor, advancing it, wrapping at the window's right
//! edge, and recording the placement for lookback.

use omnipix_core::glyph::CharacterInfo;

use crate::canvas::Canvas;

/// Cursor advance on a forced wrap when no glyph height is available.
pub const DEFAULT_LINE_HEIGHT: u16 = 8;

/// Glyph placement with cursor wrap.
///
/// Placement is a fixed state machine over the active window's cursor:
///
/// 1. Resolve the code to a [`CharacterInfo`].
/// 2. If `show`, paint the glyph at the cursor as a `fill_from_array` source
///    sized `x_dim × y_dim` (skipped while the cursor is transiently
///    outside non-negative space).
/// 3. Advance `cursor_x` by `x_dim` regardless of `show`.
/// 4. If the advanced cursor passed the window's last column, or the code is
///    a line break, return `cursor_x` to `x_reset` and advance `cursor_y` by
///    the glyph height (or [`TextRender::line_height`] when the glyph has
///    none); the returned info carries `caused_newline = true`.
/// 5. Record the returned info as the window's last character.
pub trait TextRender: Canvas {
    /// Map a character code to its placement metadata.
    ///
    /// Must be deterministic. Unknown codes map to whatever sentinel the
    /// adapter chooses — typically [`CharacterInfo::blank`] — and are never
    /// fatal.
    fn resolve_character(&self, code: u8) -> CharacterInfo;

    /// Cursor advance for a wrap without a resolved glyph height.
    fn line_height(&self) -> u16 {
        DEFAULT_LINE_HEIGHT
    }

    /// Whether `code` forces a line wrap regardless of cursor position.
    fn is_line_break(&self, code: u8) -> bool {
        code == b'\n'
    }

    /// Place one character at the window cursor.
    fn put_char(&mut self, code: u8) -> CharacterInfo {
        let mut info = self.resolve_character(code);
        info.caused_newline = false;

        let (cx, cy) = {
            let window = self.window();
            (window.cursor_x, window.cursor_y)
        };

        let paintable = info.show
            && info.x_dim > 0
            && info.y_dim > 0
            && (0..=u16::MAX as i32).contains(&cx)
            && (0..=u16::MAX as i32).contains(&cy);
        if paintable {
            let x0 = cx as u16;
            let y0 = cy as u16;
            let x1 = x0.saturating_add(info.x_dim - 1);
            let y1 = y0.saturating_add(info.y_dim - 1);
            self.fill_from_array(x0, y0, x1, y1, info.num_pixels, info.data);
        }

        let is_break = self.is_line_break(code);
        let line_height = self.line_height();
        let last_col = self.window().width() as i32 - 1;

        let window = self.window_mut();
        window.cursor_x += info.x_dim as i32;
        if is_break || window.cursor_x > last_col {
            omnipix_core::trace!(code, cursor_y = window.cursor_y, "line wrap");
            window.cursor_x = window.x_reset as i32;
            let dy = if info.y_dim > 0 { info.y_dim } else { line_height };
            window.cursor_y += dy as i32;
            info.caused_newline = true;
        }
        window.record_character(info);
        info
    }

    /// Stream a byte sequence through [`TextRender::put_char`].
    fn put_bytes(&mut self, bytes: &[u8]) {
        for &code in bytes {
            self.put_char(code);
        }
    }

    /// Stream a string's bytes through [`TextRender::put_char`].
    fn put_str(&mut self, text: &str) {
        self.put_bytes(text.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_LINE_HEIGHT, TextRender};
    use crate::canvas::Canvas;
    use crate::headless::HeadlessDisplay;
    use omnipix_core::color::{ColorModel, ColorValue};
    use omnipix_core::geometry::Rect;
    use omnipix_core::glyph::CharacterInfo;
    use omnipix_core::window::Window;

    /// Fixture adapter: every printable code is a shown 4x6 glyph whose
    /// pixel stream starts at `code * 1000`; space is spacing-only.
    struct FontDisplay {
        inner: HeadlessDisplay,
    }

    impl FontDisplay {
        fn new(width: u16, height: u16) -> Self {
            Self {
                inner: HeadlessDisplay::new(width, height),
            }
        }
    }

    impl ColorModel for FontDisplay {
        fn advance(&self, base: ColorValue, count: u32) -> ColorValue {
            self.inner.advance(base, count)
        }
    }

    impl Canvas for FontDisplay {
        fn extent(&self) -> (u16, u16) {
            self.inner.extent()
        }

        fn window(&self) -> &Window {
            self.inner.window()
        }

        fn window_mut(&mut self) -> &mut Window {
            self.inner.window_mut()
        }

        fn pixel(&mut self, x: u16, y: u16, color: ColorValue) {
            self.inner.pixel(x, y, color);
        }
    }

    impl TextRender for FontDisplay {
        fn resolve_character(&self, code: u8) -> CharacterInfo {
            match code {
                b'\n' => CharacterInfo::blank(0, 0),
                b' ' => CharacterInfo::blank(4, 6),
                _ => CharacterInfo {
                    data: ColorValue::from_raw(code as u32 * 1000),
                    num_pixels: 24,
                    x_dim: 4,
                    y_dim: 6,
                    show: true,
                    caused_newline: false,
                },
            }
        }

        fn line_height(&self) -> u16 {
            6
        }
    }

    #[test]
    fn glyph_paints_row_major_at_cursor() {
        let mut d = FontDisplay::new(20, 10);
        d.put_char(b'A');
        // Stream base is 65000; advance is token arithmetic
        assert_eq!(d.inner.get(0, 0), Some(ColorValue::from_raw(65000)));
        assert_eq!(d.inner.get(3, 0), Some(ColorValue::from_raw(65003)));
        assert_eq!(d.inner.get(0, 1), Some(ColorValue::from_raw(65004)));
        assert_eq!(d.inner.get(3, 5), Some(ColorValue::from_raw(65023)));
        // Next cell untouched
        assert_eq!(d.inner.get(4, 0), Some(ColorValue::ZERO));
    }

    #[test]
    fn cursor_advances_by_glyph_width() {
        let mut d = FontDisplay::new(20, 10);
        let info = d.put_char(b'A');
        assert!(!info.caused_newline);
        assert_eq!(d.window().cursor_x, 4);
        assert_eq!(d.window().cursor_y, 0);
    }

    #[test]
    fn spacing_only_code_advances_without_painting() {
        let mut d = FontDisplay::new(20, 10);
        d.put_char(b' ');
        assert_eq!(d.window().cursor_x, 4);
        assert!(d.inner.pixels().iter().all(|&p| p == ColorValue::ZERO));
    }

    #[test]
    fn wrap_sequence_matches_window_width() {
        // Window columns 0..=9, glyph width 4: cursors (4,0), (8,0), then
        // wrap to (0, y_dim) with caused_newline only on the third.
        let mut d = FontDisplay::new(10, 30);

        let a = d.put_char(b'a');
        assert!(!a.caused_newline);
        assert_eq!((d.window().cursor_x, d.window().cursor_y), (4, 0));

        let b = d.put_char(b'b');
        assert!(!b.caused_newline);
        assert_eq!((d.window().cursor_x, d.window().cursor_y), (8, 0));

        let c = d.put_char(b'c');
        assert!(c.caused_newline);
        assert_eq!((d.window().cursor_x, d.window().cursor_y), (0, 6));
    }

    #[test]
    fn explicit_line_break_wraps_with_line_height() {
        let mut d = FontDisplay::new(40, 40);
        d.put_char(b'x');
        let nl = d.put_char(b'\n');
        assert!(nl.caused_newline);
        // '\n' resolves with no glyph height, so line_height() applies
        assert_eq!((d.window().cursor_x, d.window().cursor_y), (0, 6));
    }

    #[test]
    fn wrap_returns_to_reset_column() {
        let mut d = FontDisplay::new(40, 40);
        d.window_mut().set_home(8, 0);
        d.put_str("abcdefgh");
        // 8 glyphs of width 4 from column 8: wrap happens when the cursor
        // passes column 39
        assert_eq!(d.window().cursor_x % 4, 0);
        assert!(d.window().cursor_y > 0);
        assert_eq!(d.window().x_reset, 8);
        // After any wrap the cursor restarts at the reset column
        let mut probe = FontDisplay::new(12, 40);
        probe.window_mut().set_home(4, 0);
        probe.put_char(b'a'); // cursor 8
        let wrapped = probe.put_char(b'b'); // 12 > 11: wrap
        assert!(wrapped.caused_newline);
        assert_eq!(probe.window().cursor_x, 4);
    }

    #[test]
    fn last_character_records_newline_flag() {
        let mut d = FontDisplay::new(10, 30);
        d.put_char(b'a');
        assert_eq!(d.window().last_character().map(|c| c.caused_newline), Some(false));
        d.put_char(b'b');
        d.put_char(b'c');
        assert_eq!(d.window().last_character().map(|c| c.caused_newline), Some(true));
    }

    #[test]
    fn negative_cursor_skips_painting_but_advances() {
        let mut d = FontDisplay::new(20, 10);
        d.window_mut().set_cursor(-8, 0);
        d.put_char(b'A');
        assert!(d.inner.pixels().iter().all(|&p| p == ColorValue::ZERO));
        assert_eq!(d.window().cursor_x, -4);
    }

    #[test]
    fn put_str_streams_through_put_char() {
        let mut d = FontDisplay::new(10, 30);
        d.put_str("abc");
        // Same end state as the wrap sequence test
        assert_eq!((d.window().cursor_x, d.window().cursor_y), (0, 6));
    }

    #[test]
    fn glyphs_paint_relative_to_sub_window() {
        let mut d = FontDisplay::new(30, 30);
        d.inner.set_window(Window::new(Rect::new(10, 12, 29, 29)));
        d.put_char(b'A');
        // Window origin offsets the glyph in device space
        assert_eq!(d.inner.get(10, 12), Some(ColorValue::from_raw(65000)));
        assert_eq!(d.inner.get(0, 0), Some(ColorValue::ZERO));
    }

    #[test]
    fn default_line_height_constant() {
        // The trait default applies when an adapter doesn't override it.
        struct Plain(HeadlessDisplay);
        impl ColorModel for Plain {
            fn advance(&self, base: ColorValue, count: u32) -> ColorValue {
                self.0.advance(base, count)
            }
        }
        impl Canvas for Plain {
            fn extent(&self) -> (u16, u16) {
                self.0.extent()
            }
            fn window(&self) -> &Window {
                self.0.window()
            }
            fn window_mut(&mut self) -> &mut Window {
                self.0.window_mut()
            }
            fn pixel(&mut self, x: u16, y: u16, color: ColorValue) {
                self.0.pixel(x, y, color);
            }
        }
        impl TextRender for Plain {
            fn resolve_character(&self, _code: u8) -> CharacterInfo {
                CharacterInfo::blank(0, 0)
            }
        }

        let mut d = Plain(HeadlessDisplay::new(20, 20));
        d.put_char(b'\n');
        assert_eq!(d.window().cursor_y, DEFAULT_LINE_HEIGHT as i32);
    }
}
