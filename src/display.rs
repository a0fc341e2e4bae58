//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::command::{
    CASET, DISPOFF, DISPON, GAMMA_SEQUENCE, INVOFF, INVON, MADCTL, PASET, PIXEL_FORMAT_16BPP,
    PIXFMT, POWER_SEQUENCE, RAMWR, RegisterWrite, SLEEP_OUT_DELAY_MS, SLPOUT,
};
use crate::config::{Config, Dimensions};
use crate::error::Error;
use crate::geometry::Window;
use crate::interface::DisplayInterface;

pub(crate) type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Core display driver for the ILI9341
///
/// Owns the interface (bus and control pins) for its whole lifetime. Drawing
/// operations live in [`primitives`](crate::primitives), [`text`](crate::text)
/// and [`bitmap`](crate::bitmap); all of them program a fresh addressing
/// window before sending pixel data.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Whether the power-up sequence has completed
    initialized: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// No bus traffic happens until [`init`](Self::init).
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            initialized: false,
        }
    }

    /// Perform hardware reset and the full power-up sequence
    ///
    /// Order: reset pulse, power/VCOM table, memory access control, 16-bit
    /// pixel format, frame rate and gamma tables, sleep out, 120ms settle,
    /// display on. Calling it again repeats the whole sequence.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.initialized = false;
        log::debug!(
            "ili9341: reset and init, {}x{} @ {} Hz, MADCTL {:#04x}",
            self.config.dimensions.width(),
            self.config.dimensions.height(),
            self.config.bus_frequency_hz,
            self.config.madctl
        );

        self.interface.reset(delay).map_err(Error::Interface)?;

        self.write_registers(POWER_SEQUENCE)?;

        self.send_command(MADCTL)?;
        self.send_data(&[self.config.madctl])?;

        self.send_command(PIXFMT)?;
        self.send_data(&[PIXEL_FORMAT_16BPP])?;

        self.write_registers(GAMMA_SEQUENCE)?;

        self.send_command(SLPOUT)?;
        delay.delay_ms(SLEEP_OUT_DELAY_MS);

        self.send_command(DISPON)?;

        self.initialized = true;
        log::debug!("ili9341: display on");
        Ok(())
    }

    fn write_registers(&mut self, table: &[RegisterWrite]) -> DisplayResult<I> {
        for (register, data) in table {
            self.send_command(*register)?;
            self.send_data(data)?;
        }
        Ok(())
    }

    /// Program the addressing window and start a memory write
    ///
    /// Sends the column range, the row range and RAMWR. The controller then
    /// expects exactly `window.area()` pixels in raster order. The window must
    /// already be clipped to the panel, see [`geometry`](crate::geometry).
    pub fn set_window(&mut self, window: Window) -> DisplayResult<I> {
        self.ensure_initialized()?;
        debug_assert!(window.fits(self.config.dimensions));
        log::trace!(
            "ili9341: window x {}..={} y {}..={}",
            window.x0,
            window.x1,
            window.y0,
            window.y1
        );

        let [x0_hi, x0_lo] = window.x0.to_be_bytes();
        let [x1_hi, x1_lo] = window.x1.to_be_bytes();
        self.send_command(CASET)?;
        self.send_data(&[x0_hi, x0_lo, x1_hi, x1_lo])?;

        let [y0_hi, y0_lo] = window.y0.to_be_bytes();
        let [y1_hi, y1_lo] = window.y1.to_be_bytes();
        self.send_command(PASET)?;
        self.send_data(&[y0_hi, y0_lo, y1_hi, y1_lo])?;

        self.send_command(RAMWR)
    }

    /// Fill the whole panel with one color
    pub fn fill_screen(&mut self, color: Color) -> DisplayResult<I> {
        let dims = self.config.dimensions;
        self.fill_rect(
            0,
            0,
            u32::from(dims.width()),
            u32::from(dims.height()),
            color,
        )
    }

    /// Turn color inversion on or off
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        self.ensure_initialized()?;
        self.send_command(if inverted { INVON } else { INVOFF })
    }

    /// Turn the panel output on or off
    ///
    /// Graphics RAM keeps its content while the output is off.
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        self.ensure_initialized()?;
        self.send_command(if on { DISPON } else { DISPOFF })
    }

    /// Change the memory access control byte (orientation, BGR order)
    ///
    /// When the new value exchanges rows and columns differently from the old
    /// one, pass the matching `dimensions` so clipping follows the new
    /// orientation.
    pub fn set_memory_access_control(
        &mut self,
        madctl: u8,
        dimensions: Dimensions,
    ) -> DisplayResult<I> {
        self.ensure_initialized()?;
        self.send_command(MADCTL)?;
        self.send_data(&[madctl])?;
        self.config.madctl = madctl;
        self.config.dimensions = dimensions;
        Ok(())
    }

    pub(crate) fn ensure_initialized(&self) -> DisplayResult<I> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    pub(crate) fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Get panel dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether [`init`](Self::init) has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.interface
    }
}
