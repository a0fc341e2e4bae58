//! RGB565 color type
//!
//! The ILI9341 is driven in 16 bits per pixel mode. Every pixel on the wire is
//! a packed RGB565 value sent most significant byte first:
//!
//! | Bits  | Channel | Width |
//! |-------|---------|-------|
//! | 15-11 | Red     | 5     |
//! | 10-5  | Green   | 6     |
//! | 4-0   | Blue    | 5     |
//!
//! ## Example
//!
//! ```
//! use ili9341_tft::{color565, Color};
//!
//! let orange = color565(255, 140, 0);
//! assert_eq!(orange, Color::from_rgb888(255, 140, 0));
//! assert_eq!(orange.r(), 31);
//! assert_eq!(orange.g(), 140 >> 2);
//! assert_eq!(orange.b(), 0);
//! assert_eq!(orange.to_be_bytes(), [0xFC, 0x60]);
//! ```

/// A packed RGB565 color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(u16);

impl Color {
    /// Black (0x0000)
    pub const BLACK: Self = Self(0x0000);
    /// White (0xFFFF)
    pub const WHITE: Self = Self(0xFFFF);
    /// Red (0xF800)
    pub const RED: Self = Self(0xF800);
    /// Green (0x07E0)
    pub const GREEN: Self = Self(0x07E0);
    /// Blue (0x001F)
    pub const BLUE: Self = Self(0x001F);
    /// Yellow (0xFFE0)
    pub const YELLOW: Self = Self(0xFFE0);
    /// Cyan (0x07FF)
    pub const CYAN: Self = Self(0x07FF);
    /// Magenta (0xF81F)
    pub const MAGENTA: Self = Self(0xF81F);
    /// Dark grey (0x7BEF)
    pub const DARK_GREY: Self = Self(0x7BEF);
    /// Light grey (0xC618)
    pub const LIGHT_GREY: Self = Self(0xC618);

    /// Wrap an already packed RGB565 value
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Pack 8-bit channels into RGB565
    ///
    /// Each channel is truncated to its bit width (no rounding, no dithering).
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Self((((r & 0xF8) as u16) << 8) | (((g & 0xFC) as u16) << 3) | ((b >> 3) as u16))
    }

    /// Raw packed value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Red channel (0..=31)
    pub const fn r(self) -> u8 {
        (self.0 >> 11) as u8
    }

    /// Green channel (0..=63)
    pub const fn g(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    /// Blue channel (0..=31)
    pub const fn b(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    /// Wire representation, most significant byte first
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// Pack three 8-bit channels into an RGB565 [`Color`]
///
/// Shorthand for [`Color::from_rgb888`].
pub const fn color565(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb888(r, g, b)
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::IntoStorage;
        Self(color.into_storage())
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::Rgb565 {
    fn from(color: Color) -> Self {
        Self::new(color.r(), color.g(), color.b())
    }
}
