//! ILI9341 command definitions
//!
//! This module defines the command bytes used to control the ILI9341 TFT
//! controller, along with the fixed register tables sent during power-up.
//! Commands are sent over SPI with the DC pin low for commands and high for
//! data.
//!
//! ## Command Structure
//!
//! Every transfer is framed on its own:
//! 1. Set DC low (command) or high (data)
//! 2. Assert CS (drive low)
//! 3. Send the byte(s)
//! 4. Deassert CS (drive high)
//!
//! ## Example
//!
//! ```rust,no_run
//! use ili9341_tft::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::SpiBus;
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
//! # let Ok(mut interface) = Interface::new(MockSpi, MockPin, MockPin, MockPin) else { return };
//! // Column range 0..=319, big-endian start and end
//! let _ = interface.send_command(command::CASET);
//! let _ = interface.send_data(&[0x00, 0x00, 0x01, 0x3F]);
//! ```

// System control commands

/// No operation (0x00)
pub const NOP: u8 = 0x00;

/// Software reset (0x01)
///
/// Not part of the power-up sequence (a hardware reset is used instead) but
/// available to callers through [`DisplayInterface`](crate::DisplayInterface).
pub const SWRESET: u8 = 0x01;

/// Sleep out (0x11)
///
/// The controller needs at least [`SLEEP_OUT_DELAY_MS`] before the next
/// command that touches the panel.
pub const SLPOUT: u8 = 0x11;

/// Display inversion off (0x20)
pub const INVOFF: u8 = 0x20;

/// Display inversion on (0x21)
pub const INVON: u8 = 0x21;

/// Gamma curve select (0x26)
pub const GAMMASET: u8 = 0x26;

/// Display off (0x28)
pub const DISPOFF: u8 = 0x28;

/// Display on (0x29)
pub const DISPON: u8 = 0x29;

// Addressing and memory commands

/// Column address set (0x2A)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const CASET: u8 = 0x2A;

/// Page (row) address set (0x2B)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const PASET: u8 = 0x2B;

/// Memory write (0x2C)
///
/// Takes no parameters. Pixel data follows as the next data-phase transfers
/// and fills the current window in raster order.
pub const RAMWR: u8 = 0x2C;

/// Memory access control (0x36)
///
/// Row/column exchange, mirroring and RGB/BGR order. Requires 1 byte:
/// - 0x80: MY (row address order)
/// - 0x40: MX (column address order)
/// - 0x20: MV (row/column exchange)
/// - 0x08: BGR order
pub const MADCTL: u8 = 0x36;

/// Pixel format set (0x3A)
///
/// Requires 1 byte, [`PIXEL_FORMAT_16BPP`] for RGB565.
pub const PIXFMT: u8 = 0x3A;

// Panel control commands

/// Frame rate control, normal mode (0xB1)
pub const FRMCTR1: u8 = 0xB1;

/// Display function control (0xB6)
pub const DFUNCTR: u8 = 0xB6;

/// Power control 1 (0xC0)
pub const PWCTR1: u8 = 0xC0;

/// Power control 2 (0xC1)
pub const PWCTR2: u8 = 0xC1;

/// VCOM control 1 (0xC5)
pub const VMCTR1: u8 = 0xC5;

/// VCOM control 2 (0xC7)
pub const VMCTR2: u8 = 0xC7;

/// Positive gamma correction (0xE0)
pub const GMCTRP1: u8 = 0xE0;

/// Negative gamma correction (0xE1)
pub const GMCTRN1: u8 = 0xE1;

/// Enable 3-gamma control (0xF2)
pub const GAMMA3_ENABLE: u8 = 0xF2;

// Vendor registers without public documentation, kept as-is

/// Undocumented vendor register (0xEF)
pub const VENDOR_EF: u8 = 0xEF;
/// Power control B (0xCF)
pub const PWCTRB: u8 = 0xCF;
/// Power on sequence control (0xED)
pub const PWR_SEQ: u8 = 0xED;
/// Driver timing control A (0xE8)
pub const DTCA: u8 = 0xE8;
/// Power control A (0xCB)
pub const PWCTRA: u8 = 0xCB;
/// Pump ratio control (0xF7)
pub const PUMP_RATIO: u8 = 0xF7;
/// Driver timing control B (0xEA)
pub const DTCB: u8 = 0xEA;

/// Pixel format parameter selecting 16 bits per pixel for both interfaces
pub const PIXEL_FORMAT_16BPP: u8 = 0x55;

/// Minimum wait after [`SLPOUT`] before [`DISPON`], in milliseconds
pub const SLEEP_OUT_DELAY_MS: u32 = 120;

/// A register write: command byte followed by its parameter bytes
pub type RegisterWrite = (u8, &'static [u8]);

/// Power, VCOM and driver-timing setup sent right after reset
///
/// The byte values are controller-revision specific. They are kept as an
/// opaque table; do not reorder or edit them.
pub const POWER_SEQUENCE: &[RegisterWrite] = &[
    (VENDOR_EF, &[0x03, 0x80, 0x02]),
    (PWCTRB, &[0x00, 0xC1, 0x30]),
    (PWR_SEQ, &[0x64, 0x03, 0x12, 0x81]),
    (DTCA, &[0x85, 0x00, 0x78]),
    (PWCTRA, &[0x39, 0x2C, 0x00, 0x34, 0x02]),
    (PUMP_RATIO, &[0x20]),
    (DTCB, &[0x00, 0x00]),
    (PWCTR1, &[0x23]),
    (PWCTR2, &[0x10]),
    (VMCTR1, &[0x3E, 0x28]),
    (VMCTR2, &[0x86]),
];

/// Frame rate, display function and gamma setup sent after the pixel format
pub const GAMMA_SEQUENCE: &[RegisterWrite] = &[
    (FRMCTR1, &[0x00, 0x18]),
    (DFUNCTR, &[0x08, 0x82, 0x27]),
    (GAMMA3_ENABLE, &[0x00]),
    (GAMMASET, &[0x01]),
    (
        GMCTRP1,
        &[
            0x0F, 0x31, 0x2B, 0x0C, 0x0E, 0x08, 0x4E, 0xF1, 0x37, 0x07, 0x10, 0x03, 0x0E, 0x09,
            0x00,
        ],
    ),
    (
        GMCTRN1,
        &[
            0x00, 0x0E, 0x14, 0x03, 0x11, 0x07, 0x31, 0xC1, 0x48, 0x08, 0x0F, 0x0C, 0x31, 0x36,
            0x0F,
        ],
    ),
];
