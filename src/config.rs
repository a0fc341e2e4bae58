//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_LONG_SIDE, MAX_SHORT_SIDE};

/// Default memory access control byte (MY | BGR)
pub const DEFAULT_MADCTL: u8 = 0x88;

/// Default nominal SPI clock rate in Hz
pub const DEFAULT_BUS_FREQUENCY_HZ: u32 = 40_000_000;

/// Panel dimensions as seen by the drawing API
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    width: u16,
    height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width or height is 0
    /// - either side exceeds MAX_LONG_SIDE (320)
    /// - both sides exceed MAX_SHORT_SIDE (240)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        let invalid = width == 0
            || height == 0
            || width > MAX_LONG_SIDE
            || height > MAX_LONG_SIDE
            || width.min(height) > MAX_SHORT_SIDE;
        if invalid {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels (column count)
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels (row count)
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> u32 {
        u32::from(self.width) * u32::from(self.height)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: MAX_LONG_SIDE,
            height: MAX_SHORT_SIDE,
        }
    }
}

/// Display configuration
///
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Panel dimensions in the orientation selected by `madctl`
    pub dimensions: Dimensions,
    /// Memory access control byte (orientation and RGB/BGR order)
    pub madctl: u8,
    /// Nominal SPI clock rate the bus was configured with
    ///
    /// The rate itself is set on the `SpiBus` by the caller; this value is
    /// only reported in logs.
    pub bus_frequency_hz: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            madctl: DEFAULT_MADCTL,
            bus_frequency_hz: DEFAULT_BUS_FREQUENCY_HZ,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use ili9341_tft::{Builder, Dimensions};
///
/// let dims = match Dimensions::new(240, 320) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = Builder::new()
///     .dimensions(dims)
///     .madctl(0x48)
///     .bus_frequency_hz(20_000_000)
///     .build();
/// let _ = config;
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values (320x240, MADCTL 0x88)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set panel dimensions
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.config.dimensions = dims;
        self
    }

    /// Set the memory access control byte
    ///
    /// Pair a row/column exchange (0x20) with dimensions whose width and
    /// height match the resulting orientation.
    pub fn madctl(mut self, value: u8) -> Self {
        self.config.madctl = value;
        self
    }

    /// Record the nominal SPI clock rate
    pub fn bus_frequency_hz(mut self, hz: u32) -> Self {
        self.config.bus_frequency_hz = hz;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        self.config
    }
}
