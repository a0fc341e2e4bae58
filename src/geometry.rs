//! Clipping of drawing requests against the panel
//!
//! Drawing calls never report geometry errors. Before anything is sent to the
//! controller, the requested rectangle is reduced to a [`Window`] that lies
//! entirely on the panel, or to `None` when there is nothing to draw.
//!
//! ```
//! use ili9341_tft::{geometry::clip_rect, Dimensions};
//!
//! let dims = Dimensions::default(); // 320x240
//!
//! // Shrinks from the far edge, origin unchanged
//! let window = clip_rect(319, 0, 10, 1, dims).unwrap();
//! assert_eq!((window.x0, window.x1), (319, 319));
//!
//! // Origin off the panel: nothing to draw
//! assert!(clip_rect(-1, 0, 10, 10, dims).is_none());
//! ```

use crate::config::Dimensions;

/// Inclusive addressing window in panel coordinates
///
/// A `Window` produced by this module always satisfies
/// `x0 <= x1 < width` and `y0 <= y1 < height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// First column
    pub x0: u16,
    /// First row
    pub y0: u16,
    /// Last column (inclusive)
    pub x1: u16,
    /// Last row (inclusive)
    pub y1: u16,
}

impl Window {
    /// Window covering the whole panel
    pub fn full(dims: Dimensions) -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: dims.width() - 1,
            y1: dims.height() - 1,
        }
    }

    /// Number of columns
    pub fn width(&self) -> u16 {
        self.x1 - self.x0 + 1
    }

    /// Number of rows
    pub fn height(&self) -> u16 {
        self.y1 - self.y0 + 1
    }

    /// Number of pixels the controller expects after RAMWR
    pub fn area(&self) -> u32 {
        u32::from(self.width()) * u32::from(self.height())
    }

    /// Whether the window lies on a panel of the given size
    pub fn fits(&self, dims: Dimensions) -> bool {
        self.x0 <= self.x1
            && self.y0 <= self.y1
            && self.x1 < dims.width()
            && self.y1 < dims.height()
    }
}

/// Clip a `w x h` rectangle at `(x, y)` to the panel
///
/// Returns `None` when the origin is off the panel or either extent is zero.
/// Otherwise the far edges are pulled in to the panel boundary; the origin is
/// never moved.
pub fn clip_rect(x: i32, y: i32, w: u32, h: u32, dims: Dimensions) -> Option<Window> {
    if w == 0 || h == 0 {
        return None;
    }
    let x0 = u16::try_from(x).ok().filter(|x| *x < dims.width())?;
    let y0 = u16::try_from(y).ok().filter(|y| *y < dims.height())?;

    let w = w.min(u32::from(dims.width() - x0)) as u16;
    let h = h.min(u32::from(dims.height() - y0)) as u16;

    Some(Window {
        x0,
        y0,
        x1: x0 + w - 1,
        y1: y0 + h - 1,
    })
}

/// Single-pixel window at `(x, y)`, or `None` when the point is off the panel
pub fn clip_point(x: i32, y: i32, dims: Dimensions) -> Option<Window> {
    clip_rect(x, y, 1, 1, dims)
}
