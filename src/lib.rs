//! ILI9341 TFT Display Driver
//!
//! A driver for ILI9341 based 320x240 color TFT panels driven over a 4-wire
//! SPI bus (MOSI, SCK, CS, DC) with a dedicated reset line.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Pixel, line, rectangle and circle primitives
//! - Built-in 5x8 font with integer scaling
//! - Bitmap blits from RGB565 color or byte arrays
//! - Silent clipping of everything drawn off the panel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use ili9341_tft::{Builder, Color, Dimensions, Display, Interface};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _r: &mut [u8], _w: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let cs = MockPin;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let Ok(interface) = Interface::new(spi, cs, dc, rst) else {
//!     return;
//! };
//! let dims = match Dimensions::new(320, 240) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = Builder::new().dimensions(dims).madctl(0x88).build();
//!
//! let mut display = Display::new(interface, config);
//! if display.init(&mut delay).is_err() {
//!     return;
//! }
//!
//! let _ = display.fill_screen(Color::BLACK);
//! let _ = display.fill_rect(10, 10, 50, 50, Color::RED);
//! let _ = display.draw_circle(160, 120, 40, Color::YELLOW);
//! let _ = display.draw_string(10, 200, "Hello", Color::WHITE, Color::BLACK, 2);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Bulk pixel writes
pub mod bitmap;
/// RGB565 color type
pub mod color;
/// ILI9341 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Built-in 5x8 bitmap font
pub mod font;
/// Clipping of drawing requests against the panel
pub mod geometry;
/// Hardware interface abstraction
pub mod interface;
/// Drawing primitives
pub mod primitives;
/// Text rendering with the built-in font
pub mod text;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(test)]
mod mock;

pub use color::{Color, color565};
pub use config::{Builder, Config, Dimensions, MAX_LONG_SIDE, MAX_SHORT_SIDE};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use geometry::Window;
pub use interface::InterfaceError;
pub use interface::{CHUNK_SIZE, DisplayInterface, Interface};
pub use text::text_width;
