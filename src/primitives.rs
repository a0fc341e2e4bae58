//! Drawing primitives
//!
//! Every primitive is built from two transfers: [`Display::draw_pixel`] for
//! isolated points and [`Display::fill_rect`] for solid areas. Shapes that
//! reach past the panel edge are clipped point by point; nothing outside the
//! panel is ever addressed.
//!
//! Positions are `i32` so shapes may start off-panel; extents and radii are
//! `u32`.

use crate::color::Color;
use crate::display::{Display, DisplayResult};
use crate::error::Error;
use crate::geometry::{clip_point, clip_rect};
use crate::interface::{CHUNK_SIZE, DisplayInterface};

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Set a single pixel
    ///
    /// Points off the panel are skipped without any bus traffic.
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> DisplayResult<I> {
        self.ensure_initialized()?;
        let Some(window) = clip_point(x, y, self.dimensions()) else {
            return Ok(());
        };
        self.set_window(window)?;
        self.interface_mut()
            .send_data16(color.raw())
            .map_err(Error::Interface)
    }

    /// Fill a `w x h` rectangle with one color
    ///
    /// The rectangle is clipped to the panel first. The pixel data is
    /// streamed from a small stack buffer, so the cost is independent of the
    /// rectangle size in memory.
    pub fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    ) -> DisplayResult<I> {
        self.ensure_initialized()?;
        let Some(window) = clip_rect(x, y, w, h, self.dimensions()) else {
            return Ok(());
        };
        self.set_window(window)?;

        let [hi, lo] = color.to_be_bytes();
        let mut chunk = [0u8; CHUNK_SIZE];
        for pair in chunk.chunks_exact_mut(2) {
            pair[0] = hi;
            pair[1] = lo;
        }
        let total_bytes = window.area() as usize * 2;
        self.interface_mut()
            .send_data_stream(&chunk, total_bytes)
            .map_err(Error::Interface)
    }

    /// Draw a straight line between two points, both ends included
    pub fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    ) -> DisplayResult<I> {
        self.ensure_initialized()?;
        let (mut x, mut y) = (i64::from(x0), i64::from(y0));
        let (x1, y1) = (i64::from(x1), i64::from(y1));

        let dx = (x1 - x).abs();
        let dy = (y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.plot(x, y, color)?;
            if x == x1 && y == y1 {
                return Ok(());
            }
            // Strict comparisons: ties step the major axis alone
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw the one-pixel outline of a `w x h` rectangle
    pub fn draw_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    ) -> DisplayResult<I> {
        self.ensure_initialized()?;
        if w == 0 || h == 0 {
            return Ok(());
        }
        let right = x.saturating_add_unsigned(w - 1);
        let bottom = y.saturating_add_unsigned(h - 1);

        self.draw_line(x, y, right, y, color)?;
        self.draw_line(right, y, right, bottom, color)?;
        self.draw_line(right, bottom, x, bottom, color)?;
        self.draw_line(x, bottom, x, y, color)
    }

    /// Draw a circle outline centered on `(x0, y0)`
    pub fn draw_circle(&mut self, x0: i32, y0: i32, r: u32, color: Color) -> DisplayResult<I> {
        self.ensure_initialized()?;
        let (cx, cy, r) = (i64::from(x0), i64::from(y0), i64::from(r));

        self.plot(cx, cy + r, color)?;
        self.plot(cx, cy - r, color)?;
        self.plot(cx + r, cy, color)?;
        self.plot(cx - r, cy, color)?;

        let mut f = 1 - r;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * r;
        let mut x = 0;
        let mut y = r;

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            for (px, py) in [
                (cx + x, cy + y),
                (cx - x, cy + y),
                (cx + x, cy - y),
                (cx - x, cy - y),
                (cx + y, cy + x),
                (cx - y, cy + x),
                (cx + y, cy - x),
                (cx - y, cy - x),
            ] {
                self.plot(px, py, color)?;
            }
        }
        Ok(())
    }

    /// Draw a filled circle centered on `(x0, y0)`
    ///
    /// Every pixel with `dx² + dy² <= r²` is set. Rows and columns that fall
    /// off the panel are not visited.
    pub fn fill_circle(&mut self, x0: i32, y0: i32, r: u32, color: Color) -> DisplayResult<I> {
        self.ensure_initialized()?;
        let dims = self.dimensions();
        let (cx, cy, r) = (i64::from(x0), i64::from(y0), i64::from(r));
        let r2 = r * r;

        let dy_range = (-r).max(-cy)..=r.min(i64::from(dims.height()) - 1 - cy);
        for dy in dy_range {
            let dx_range = (-r).max(-cx)..=r.min(i64::from(dims.width()) - 1 - cx);
            for dx in dx_range {
                if dx * dx + dy * dy <= r2 {
                    self.plot(cx + dx, cy + dy, color)?;
                }
            }
        }
        Ok(())
    }

    /// Plot a point computed in wide arithmetic, skipping anything that does
    /// not fit the coordinate range.
    fn plot(&mut self, x: i64, y: i64, color: Color) -> DisplayResult<I> {
        match (i32::try_from(x), i32::try_from(y)) {
            (Ok(x), Ok(y)) => self.draw_pixel(x, y, color),
            _ => Ok(()),
        }
    }
}
