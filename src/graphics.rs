//! Graphics support via embedded-graphics
//!
//! With the `graphics` feature, [`Display`] implements
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) for
//! [`Rgb565`], so shapes, text and images from the embedded-graphics
//! ecosystem draw straight to the panel. There is no frame buffer: every
//! draw call turns into window setup and pixel data on the bus.
//!
//! - Single pixels go through [`Display::draw_pixel`]
//! - Solid areas go through [`Display::fill_rect`]
//! - Contiguous areas (images) are streamed after one window setup; only
//!   the part on the panel is sent
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use ili9341_tft::{Builder, Display, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! let Ok(interface) = Interface::new(MockSpi, MockPin, MockPin, MockPin) else {
//!     return;
//! };
//! let mut display = Display::new(interface, Builder::new().build());
//! if display.init(&mut delay).is_err() {
//!     return;
//! }
//!
//! let _ = display.clear(Rgb565::BLACK);
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(100, 50), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb565::GREEN, 2))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello, TFT!",
//!     Point::new(10, 100),
//!     MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE),
//! )
//! .draw(&mut display);
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions as _, OriginDimensions, Point, Size},
    pixelcolor::{IntoStorage, Rgb565},
    prelude::Pixel,
    primitives::{PointsIter, Rectangle},
};

use crate::display::Display;
use crate::error::Error;
use crate::geometry::clip_rect;
use crate::interface::DisplayInterface;

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = Rgb565;
    type Error = Error<I>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.draw_pixel(x, y, color.into())?;
        }
        Ok(())
    }

    fn fill_contiguous<Iter>(&mut self, area: &Rectangle, colors: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Self::Color>,
    {
        self.ensure_initialized()?;
        let visible = area.intersection(&self.bounding_box());
        let Some(window) = clip_rect(
            visible.top_left.x,
            visible.top_left.y,
            visible.size.width,
            visible.size.height,
            self.dimensions(),
        ) else {
            return Ok(());
        };
        self.set_window(window)?;

        // Colors arrive in raster order over the whole area; keep the visible ones
        let raw = area
            .points()
            .zip(colors)
            .filter(|(point, _)| visible.contains(*point))
            .map(|(_, color)| color.into_storage());
        self.interface_mut()
            .send_pixels(raw)
            .map_err(Error::Interface)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let visible = area.intersection(&self.bounding_box());
        if visible.is_zero_sized() {
            // Still report a missing init even when nothing is visible
            return self.ensure_initialized();
        }
        self.fill_rect(
            visible.top_left.x,
            visible.top_left.y,
            visible.size.width,
            visible.size.height,
            color.into(),
        )
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_screen(color.into())
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(u32::from(dims.width()), u32::from(dims.height()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::geometry::Window;
    use crate::mock::{MockInterface, Op, ready_display};
    use alloc::vec::Vec;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{Line, PrimitiveStyle};

    #[test]
    fn test_size_matches_dimensions() {
        let display = ready_display();
        assert_eq!(display.size(), Size::new(320, 240));
    }

    #[test]
    fn test_filled_rectangle_is_one_window() {
        let mut display = ready_display();
        Rectangle::new(Point::new(10, 10), Size::new(50, 50))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
            .draw(&mut display)
            .unwrap();
        let interface = display.release();
        assert_eq!(
            interface.windows(),
            [Window {
                x0: 10,
                y0: 10,
                x1: 59,
                y1: 59
            }]
        );
        assert_eq!(interface.pixel_bytes(), 5000);
    }

    #[test]
    fn test_rectangle_overlapping_top_left_is_clipped_not_dropped() {
        let mut display = ready_display();
        Rectangle::new(Point::new(-5, -5), Size::new(20, 20))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::BLUE))
            .draw(&mut display)
            .unwrap();
        assert_eq!(
            display.release().windows(),
            [Window {
                x0: 0,
                y0: 0,
                x1: 14,
                y1: 14
            }]
        );
    }

    #[test]
    fn test_pixels_use_draw_pixel() {
        let mut display = ready_display();
        Pixel(Point::new(3, 4), Rgb565::RED)
            .draw(&mut display)
            .unwrap();
        Pixel(Point::new(-3, 4), Rgb565::RED)
            .draw(&mut display)
            .unwrap();
        let interface = display.release();
        assert_eq!(interface.plotted_points(), [(3, 4)]);
        assert_eq!(interface.ops.last(), Some(&Op::Data(alloc::vec![0xF8, 0x00])));
    }

    #[test]
    fn test_line_plots_every_point() {
        let mut display = ready_display();
        Line::new(Point::new(0, 0), Point::new(9, 0))
            .into_styled(PrimitiveStyle::with_stroke(Rgb565::WHITE, 1))
            .draw(&mut display)
            .unwrap();
        let interface = display.release();
        let xs: Vec<u16> = interface.windows().iter().map(|w| w.x0).collect();
        let mut sorted = xs.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, (0..10).collect::<Vec<u16>>());
    }

    #[test]
    fn test_contiguous_fill_streams_colors() {
        let mut display = ready_display();
        let area = Rectangle::new(Point::new(1, 2), Size::new(2, 2));
        let colors = [Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE, Rgb565::WHITE];
        display.fill_contiguous(&area, colors).unwrap();
        let interface = display.release();
        assert_eq!(
            interface.windows(),
            [Window {
                x0: 1,
                y0: 2,
                x1: 2,
                y1: 3
            }]
        );
        assert_eq!(
            interface.ops.last(),
            Some(&Op::Pixels(alloc::vec![0xF800, 0x07E0, 0x001F, 0xFFFF]))
        );
    }

    #[test]
    fn test_contiguous_fill_partly_off_panel_is_one_window() {
        let mut display = ready_display();
        let area = Rectangle::new(Point::new(318, 0), Size::new(3, 1));
        let colors = [Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE];
        display.fill_contiguous(&area, colors).unwrap();
        let interface = display.release();
        assert_eq!(
            interface.windows(),
            [Window {
                x0: 318,
                y0: 0,
                x1: 319,
                y1: 0
            }]
        );
        assert_eq!(
            interface.ops.last(),
            Some(&Op::Pixels(alloc::vec![0xF800, 0x07E0]))
        );
    }

    #[test]
    fn test_contiguous_fill_over_top_left_skips_hidden_colors() {
        let mut display = ready_display();
        let area = Rectangle::new(Point::new(-1, -1), Size::new(3, 2));
        let colors = [
            Rgb565::RED,
            Rgb565::GREEN,
            Rgb565::BLUE,
            Rgb565::WHITE,
            Rgb565::YELLOW,
            Rgb565::CYAN,
        ];
        display.fill_contiguous(&area, colors).unwrap();
        let interface = display.release();
        assert_eq!(
            interface.windows(),
            [Window {
                x0: 0,
                y0: 0,
                x1: 1,
                y1: 0
            }]
        );
        assert_eq!(
            interface.ops.last(),
            Some(&Op::Pixels(alloc::vec![
                Rgb565::YELLOW.into_storage(),
                Rgb565::CYAN.into_storage()
            ]))
        );
    }

    #[test]
    fn test_contiguous_fill_off_panel_sends_nothing() {
        let mut display = ready_display();
        let area = Rectangle::new(Point::new(400, 0), Size::new(2, 2));
        display.fill_contiguous(&area, [Rgb565::RED; 4]).unwrap();
        assert!(display.release().ops.is_empty());
    }

    #[test]
    fn test_clear_fills_screen() {
        let mut display = ready_display();
        display.clear(Rgb565::BLACK).unwrap();
        let interface = display.release();
        assert_eq!(interface.windows().len(), 1);
        assert_eq!(interface.pixel_bytes(), 320 * 240 * 2);
    }

    #[test]
    fn test_clear_before_init_fails() {
        let mut display = Display::new(MockInterface::default(), Builder::new().build());
        assert!(matches!(
            display.clear(Rgb565::BLACK),
            Err(Error::NotInitialized)
        ));
    }
}
