//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Geometry is never an error: drawing outside the panel is clipped or
//! skipped silently.
//!
//! ## Example
//!
//! ```
//! use ili9341_tft::{BuilderError, Dimensions};
//!
//! // Larger than the controller's memory
//! let result = Dimensions::new(480, 320);
//! assert!(matches!(result, Err(BuilderError::InvalidDimensions { .. })));
//! ```

use crate::interface::DisplayInterface;

/// Long side of the controller's graphics RAM, in pixels
pub const MAX_LONG_SIDE: u16 = 320;

/// Short side of the controller's graphics RAM, in pixels
pub const MAX_SHORT_SIDE: u16 = 240;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    /// The controller's addressing window is undefined afterwards; the next
    /// draw call programs a fresh one.
    Interface(I::Error),
    /// A drawing call was made before [`Display::init`](crate::Display::init)
    NotInitialized,
    /// Bitmap data does not match the declared width and height
    BitmapSize {
        /// Number of elements required by `w * h`
        expected: usize,
        /// Number of elements provided
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::NotInitialized => write!(f, "Display not initialized"),
            Self::BitmapSize { expected, provided } => {
                write!(
                    f,
                    "Bitmap size mismatch: expected {expected} elements, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width requested
        width: u16,
        /// Height requested
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_LONG_SIDE}x{MAX_SHORT_SIDE} in either orientation)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
