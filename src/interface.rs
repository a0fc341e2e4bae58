//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the ILI9341 controller over a 4-wire SPI bus.
//!
//! ## Hardware Requirements
//!
//! The ILI9341 requires:
//! - SPI bus (MOSI + SCK), write-only; MISO is not used
//! - 3 GPIO pins:
//!   - **CS**: Chip select (output, active low, frames every transfer)
//!   - **DC**: Data/Command select (output, low=command, high=data)
//!   - **RST**: Reset (output, active low)
//!
//! The driver controls CS itself, so the bus is taken as an
//! [`SpiBus`] rather than an `SpiDevice`. A multi-value payload such as a
//! 16-bit color or a pixel stream is sent inside a single CS-low span.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use ili9341_tft::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! # let mut delay = MockDelay;
//! // Create interface with SPI bus and CS, DC, RST pins
//! let Ok(mut interface) = Interface::new(MockSpi, MockPin, MockPin, MockPin) else {
//!     return;
//! };
//!
//! // Pulse the reset line
//! let _ = interface.reset(&mut delay);
//!
//! // Send command
//! let _ = interface.send_command(0x29); // Display on
//!
//! // Send a 16-bit value in one chip-select span
//! let _ = interface.send_data16(0xF800);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Size in bytes of the stack buffer used for streamed transfers
///
/// 64 bytes holds 32 RGB565 pixels.
pub const CHUNK_SIZE: usize = 64;

/// RST held high before the reset pulse, in milliseconds
pub const RESET_SETTLE_MS: u32 = 5;
/// RST held low (active pulse), in milliseconds
pub const RESET_PULSE_MS: u32 = 20;
/// Wait after releasing RST for the controller to self-initialize, in milliseconds
pub const RESET_RECOVERY_MS: u32 = 150;

/// Trait for hardware interface to the ILI9341 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If the bus is only
/// available through another API (a parallel bus, an asynchronous driver
/// wrapped to block until completion, ...), implement this trait on your own
/// type. Every method must block until the transfer has completed.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin low (command mode)
    /// 2. Frame the byte with CS low ... CS high
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin high (data mode)
    /// 2. Send all bytes inside one CS low ... CS high span
    ///
    /// # Arguments
    ///
    /// * `data` - Slice of bytes to send
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send a 16-bit value, most significant byte first, in one CS span
    fn send_data16(&mut self, value: u16) -> InterfaceResult<(), Self::Error> {
        self.send_data(&value.to_be_bytes())
    }

    /// Send `chunk` repeatedly until exactly `total_bytes` have been sent
    ///
    /// All bytes go out in data mode inside one CS span. The last transfer is
    /// a prefix of `chunk` when `total_bytes` is not a multiple of its length.
    /// Nothing is sent when either `chunk` or `total_bytes` is empty.
    fn send_data_stream(
        &mut self,
        chunk: &[u8],
        total_bytes: usize,
    ) -> InterfaceResult<(), Self::Error>;

    /// Stream RGB565 pixels in data mode, most significant byte first
    ///
    /// All pixels go out inside one CS span.
    fn send_pixels<P>(&mut self, pixels: P) -> InterfaceResult<(), Self::Error>
    where
        P: IntoIterator<Item = u16>;

    /// Perform hardware reset
    ///
    /// The implementation must:
    /// 1. Set RST pin high and wait at least 5ms
    /// 2. Set RST pin low and wait at least 20ms
    /// 3. Set RST pin high and wait at least 150ms
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay implementation for timing
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface implementation for the ILI9341
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI bus and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI bus implementing [`SpiBus`], already configured for clock
///   rate and mode 0
/// * `CS` - Chip-select pin implementing [`OutputPin`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
#[derive(Debug)]
pub struct Interface<SPI, CS, DC, RST> {
    /// SPI bus for communication
    spi: SPI,
    /// Chip select pin (active low)
    cs: CS,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
}

impl<SPI, CS, DC, RST, PinErr> Interface<SPI, CS, DC, RST>
where
    SPI: SpiBus,
    CS: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
{
    /// Create a new Interface
    ///
    /// Drives CS high so the controller starts deselected.
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI bus (must implement [`SpiBus`])
    /// * `cs` - Chip-select pin (output, active low)
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(
        spi: SPI,
        mut cs: CS,
        dc: DC,
        rst: RST,
    ) -> InterfaceResult<Self, InterfaceError<SPI::Error, PinErr>> {
        cs.set_high().map_err(InterfaceError::Pin)?;
        Ok(Self { spi, cs, dc, rst })
    }

    /// Consume the interface and return the bus and pins
    pub fn release(self) -> (SPI, CS, DC, RST) {
        (self.spi, self.cs, self.dc, self.rst)
    }

    /// Run `transfer` with DC at the requested level and CS held low
    ///
    /// CS is driven high again even if the transfer fails; the transfer
    /// error takes precedence over a failure to release CS.
    fn framed<F>(
        &mut self,
        data_mode: bool,
        transfer: F,
    ) -> InterfaceResult<(), InterfaceError<SPI::Error, PinErr>>
    where
        F: FnOnce(&mut SPI) -> Result<(), SPI::Error>,
    {
        let dc = if data_mode {
            self.dc.set_high()
        } else {
            self.dc.set_low()
        };
        dc.map_err(InterfaceError::Pin)?;
        self.cs.set_low().map_err(InterfaceError::Pin)?;

        let result = transfer(&mut self.spi).and_then(|()| self.spi.flush());
        let released = self.cs.set_high().map_err(InterfaceError::Pin);

        result.map_err(InterfaceError::Spi)?;
        released
    }
}

impl<SPI, CS, DC, RST, PinErr> DisplayInterface for Interface<SPI, CS, DC, RST>
where
    SPI: SpiBus,
    SPI::Error: Debug,
    CS: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.framed(false, |spi| spi.write(&[command]))
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.framed(true, |spi| spi.write(data))
    }

    fn send_data_stream(
        &mut self,
        chunk: &[u8],
        total_bytes: usize,
    ) -> InterfaceResult<(), Self::Error> {
        if chunk.is_empty() || total_bytes == 0 {
            return Ok(());
        }
        self.framed(true, |spi| {
            let mut remaining = total_bytes;
            while remaining > 0 {
                let len = remaining.min(chunk.len());
                spi.write(&chunk[..len])?;
                remaining -= len;
            }
            Ok(())
        })
    }

    fn send_pixels<P>(&mut self, pixels: P) -> InterfaceResult<(), Self::Error>
    where
        P: IntoIterator<Item = u16>,
    {
        self.framed(true, |spi| {
            let mut buffer = [0u8; CHUNK_SIZE];
            let mut len = 0;
            for pixel in pixels {
                let [hi, lo] = pixel.to_be_bytes();
                buffer[len] = hi;
                buffer[len + 1] = lo;
                len += 2;
                if len == CHUNK_SIZE {
                    spi.write(&buffer)?;
                    len = 0;
                }
            }
            if len > 0 {
                spi.write(&buffer[..len])?;
            }
            Ok(())
        })
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        // Reset sequence: HIGH -> 5ms -> LOW -> 20ms -> HIGH -> 150ms
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_RECOVERY_MS);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Cs(bool),
        Dc(bool),
        Rst(bool),
        Write(Vec<u8>),
        Flush,
        DelayMs(u32),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    #[derive(Debug, Clone, Copy)]
    struct MockError;

    impl embedded_hal::digital::Error for MockError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::spi::Error for MockError {
        fn kind(&self) -> embedded_hal::spi::ErrorKind {
            embedded_hal::spi::ErrorKind::Other
        }
    }

    struct MockSpi {
        log: Log,
        fail_writes: bool,
    }

    impl embedded_hal::spi::ErrorType for MockSpi {
        type Error = MockError;
    }

    impl SpiBus for MockSpi {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            if self.fail_writes {
                return Err(MockError);
            }
            self.log.borrow_mut().push(Event::Write(words.to_vec()));
            Ok(())
        }

        fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Flush);
            Ok(())
        }
    }

    #[derive(Clone, Copy)]
    enum Role {
        Cs,
        Dc,
        Rst,
    }

    struct MockPin {
        log: Log,
        role: Role,
    }

    impl MockPin {
        fn record(&self, level: bool) {
            let event = match self.role {
                Role::Cs => Event::Cs(level),
                Role::Dc => Event::Dc(level),
                Role::Rst => Event::Rst(level),
            };
            self.log.borrow_mut().push(event);
        }
    }

    impl embedded_hal::digital::ErrorType for MockPin {
        type Error = MockError;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.record(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.record(true);
            Ok(())
        }
    }

    struct MockDelay {
        log: Log,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Event::DelayMs(ms));
        }
    }

    fn test_interface(fail_writes: bool) -> (Interface<MockSpi, MockPin, MockPin, MockPin>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let pin = |role| MockPin {
            log: log.clone(),
            role,
        };
        let spi = MockSpi {
            log: log.clone(),
            fail_writes,
        };
        let interface = Interface::new(spi, pin(Role::Cs), pin(Role::Dc), pin(Role::Rst)).unwrap();
        log.borrow_mut().clear();
        (interface, log)
    }

    #[test]
    fn test_new_deselects_chip() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let pin = |role| MockPin {
            log: log.clone(),
            role,
        };
        let spi = MockSpi {
            log: log.clone(),
            fail_writes: false,
        };
        let _interface = Interface::new(spi, pin(Role::Cs), pin(Role::Dc), pin(Role::Rst)).unwrap();
        assert_eq!(*log.borrow(), [Event::Cs(true)]);
    }

    #[test]
    fn test_command_framing() {
        let (mut interface, log) = test_interface(false);
        interface.send_command(0x2C).unwrap();
        assert_eq!(
            *log.borrow(),
            [
                Event::Dc(false),
                Event::Cs(false),
                Event::Write(alloc::vec![0x2C]),
                Event::Flush,
                Event::Cs(true),
            ]
        );
    }

    #[test]
    fn test_data16_is_one_big_endian_transfer() {
        let (mut interface, log) = test_interface(false);
        interface.send_data16(0xF81F).unwrap();
        assert_eq!(
            *log.borrow(),
            [
                Event::Dc(true),
                Event::Cs(false),
                Event::Write(alloc::vec![0xF8, 0x1F]),
                Event::Flush,
                Event::Cs(true),
            ]
        );
    }

    #[test]
    fn test_data_stream_sends_final_partial_chunk() {
        let (mut interface, log) = test_interface(false);
        let chunk = [0xAAu8; CHUNK_SIZE];
        interface.send_data_stream(&chunk, 150).unwrap();

        let writes: Vec<usize> = log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Write(bytes) => Some(bytes.len()),
                _ => None,
            })
            .collect();
        assert_eq!(writes, [64, 64, 22]);

        let cs_lows = log
            .borrow()
            .iter()
            .filter(|e| **e == Event::Cs(false))
            .count();
        assert_eq!(cs_lows, 1);
    }

    #[test]
    fn test_data_stream_zero_bytes_is_silent() {
        let (mut interface, log) = test_interface(false);
        interface.send_data_stream(&[0x00; 4], 0).unwrap();
        interface.send_data_stream(&[], 10).unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_send_pixels_batches_into_chunks() {
        let (mut interface, log) = test_interface(false);
        let pixels = (0..40u16).map(|i| 0x0100 | i);
        interface.send_pixels(pixels).unwrap();

        let writes: Vec<Vec<u8>> = log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Write(bytes) => Some(bytes.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0].len(), CHUNK_SIZE);
        assert_eq!(writes[1].len(), 16);
        assert_eq!(&writes[0][..4], &[0x01, 0x00, 0x01, 0x01]);
        assert_eq!(&writes[1][14..], &[0x01, 39]);
    }

    #[test]
    fn test_reset_timing() {
        let (mut interface, log) = test_interface(false);
        let mut delay = MockDelay { log: log.clone() };
        interface.reset(&mut delay).unwrap();
        assert_eq!(
            *log.borrow(),
            [
                Event::Rst(true),
                Event::DelayMs(5),
                Event::Rst(false),
                Event::DelayMs(20),
                Event::Rst(true),
                Event::DelayMs(150),
            ]
        );
    }

    #[test]
    fn test_failed_transfer_still_releases_chip_select() {
        let (mut interface, log) = test_interface(true);
        let result = interface.send_data(&[0x01, 0x02]);
        assert!(matches!(result, Err(InterfaceError::Spi(MockError))));
        assert_eq!(log.borrow().last(), Some(&Event::Cs(true)));
    }
}
