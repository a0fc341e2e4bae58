//! Text rendering with the built-in 5x8 font
//!
//! Characters are drawn cell by cell: each set bit of a glyph becomes a
//! foreground pixel, each clear bit a background pixel. Passing the same
//! color for foreground and background makes the background transparent, so
//! text can be drawn over existing content.
//!
//! At scale 1 every font pixel is one panel pixel. At larger scales every
//! font pixel becomes a `scale x scale` filled square. Characters advance by
//! `6 * scale` pixels; there is no wrapping, and characters running off the
//! panel are clipped like any other drawing.

use crate::color::Color;
use crate::display::{Display, DisplayResult};
use crate::font::{CHAR_ADVANCE, GLYPH_HEIGHT, glyph};
use crate::interface::DisplayInterface;

/// Width in pixels of `text` drawn at `scale`
///
/// Includes the blank column after the last character.
pub fn text_width(text: &str, scale: u8) -> u32 {
    let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    chars
        .saturating_mul(CHAR_ADVANCE)
        .saturating_mul(u32::from(scale))
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Draw one character with its top-left corner at `(x, y)`
    ///
    /// Characters outside `' '..='~'` are drawn as `'?'`. A `scale` of 0
    /// draws nothing.
    pub fn draw_char(
        &mut self,
        x: i32,
        y: i32,
        ch: char,
        fg: Color,
        bg: Color,
        scale: u8,
    ) -> DisplayResult<I> {
        self.ensure_initialized()?;
        if scale == 0 {
            return Ok(());
        }
        let size = i64::from(scale);

        for (col, bits) in (0i64..).zip(glyph(ch)) {
            for row in 0..i64::from(GLYPH_HEIGHT) {
                let color = if (bits >> row) & 1 != 0 {
                    fg
                } else if bg != fg {
                    bg
                } else {
                    continue;
                };

                let px = i64::from(x) + col * size;
                let py = i64::from(y) + row * size;
                let (Ok(px), Ok(py)) = (i32::try_from(px), i32::try_from(py)) else {
                    continue;
                };
                if scale == 1 {
                    self.draw_pixel(px, py, color)?;
                } else {
                    self.fill_rect(px, py, u32::from(scale), u32::from(scale), color)?;
                }
            }
        }
        Ok(())
    }

    /// Draw a string left to right starting at `(x, y)`
    pub fn draw_string(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        fg: Color,
        bg: Color,
        scale: u8,
    ) -> DisplayResult<I> {
        self.ensure_initialized()?;
        let advance = i64::from(CHAR_ADVANCE) * i64::from(scale);

        let mut cx = i64::from(x);
        for ch in text.chars() {
            // Past the coordinate range every further character is off-panel
            let Ok(px) = i32::try_from(cx) else {
                break;
            };
            self.draw_char(px, y, ch, fg, bg, scale)?;
            cx += advance;
        }
        Ok(())
    }
}
