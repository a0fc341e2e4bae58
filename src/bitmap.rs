//! Bulk pixel writes
//!
//! A bitmap is a `w x h` block of pixels in raster order (left to right, top
//! to bottom). The whole block is sent after a single window setup, which is
//! far cheaper than per-pixel writes for images and sprites.
//!
//! The data length is checked against `w * h` before anything is sent. A
//! bitmap hanging over the panel edge is clipped: only the visible part of
//! each row goes out, so the stream always matches the programmed window.

use crate::color::Color;
use crate::display::{Display, DisplayResult};
use crate::error::Error;
use crate::geometry::clip_rect;
use crate::interface::DisplayInterface;

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Draw a `w x h` block of colors with its top-left corner at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::BitmapSize`] without touching the bus if
    /// `pixels.len() != w * h`.
    pub fn draw_bitmap(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        pixels: &[Color],
    ) -> DisplayResult<I> {
        self.ensure_initialized()?;
        check_len::<I>(w, h, 1, pixels.len())?;
        self.write_block(x, y, w, h, |index| pixels[index].raw())
    }

    /// Draw a `w x h` block of big-endian RGB565 bytes
    ///
    /// This is the layout produced by common image-to-RGB565 converters:
    /// two bytes per pixel, high byte first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BitmapSize`] without touching the bus if
    /// `bytes.len() != w * h * 2`.
    pub fn draw_raw_bitmap(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        bytes: &[u8],
    ) -> DisplayResult<I> {
        self.ensure_initialized()?;
        check_len::<I>(w, h, 2, bytes.len())?;
        self.write_block(x, y, w, h, |index| {
            u16::from_be_bytes([bytes[2 * index], bytes[2 * index + 1]])
        })
    }

    /// Clip the block and stream the visible pixels, `pixel(index)` giving the
    /// raw color of source pixel `index` in raster order
    fn write_block<F>(&mut self, x: i32, y: i32, w: u32, h: u32, pixel: F) -> DisplayResult<I>
    where
        F: Fn(usize) -> u16,
    {
        let Some(window) = clip_rect(x, y, w, h, self.dimensions()) else {
            return Ok(());
        };
        self.set_window(window)?;

        let stride = w as usize;
        let visible_cols = usize::from(window.width());
        let visible_rows = usize::from(window.height());
        let pixel = &pixel;
        let pixels = (0..visible_rows)
            .flat_map(move |row| (row * stride..row * stride + visible_cols).map(pixel));

        self.interface_mut()
            .send_pixels(pixels)
            .map_err(Error::Interface)
    }
}

/// Check a buffer of `provided` elements against a `w x h` block using
/// `per_pixel` elements for each pixel
fn check_len<I>(w: u32, h: u32, per_pixel: usize, provided: usize) -> DisplayResult<I>
where
    I: DisplayInterface,
{
    let expected = (w as usize)
        .saturating_mul(h as usize)
        .saturating_mul(per_pixel);
    if provided == expected {
        Ok(())
    } else {
        Err(Error::BitmapSize { expected, provided })
    }
}
