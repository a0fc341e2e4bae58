//! Recording interface shared by the unit tests

use alloc::vec::Vec;
use embedded_hal::delay::DelayNs;

use crate::command::{CASET, PASET, RAMWR};
use crate::config::{Builder, Dimensions};
use crate::display::Display;
use crate::geometry::Window;
use crate::interface::DisplayInterface;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Command(u8),
    Data(Vec<u8>),
    Stream { chunk: Vec<u8>, total_bytes: usize },
    Pixels(Vec<u16>),
    Reset,
}

#[derive(Debug, Default)]
pub struct MockInterface {
    pub ops: Vec<Op>,
}

impl DisplayInterface for MockInterface {
    type Error = core::convert::Infallible;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.ops.push(Op::Command(command));
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.ops.push(Op::Data(data.to_vec()));
        Ok(())
    }

    fn send_data_stream(&mut self, chunk: &[u8], total_bytes: usize) -> Result<(), Self::Error> {
        self.ops.push(Op::Stream {
            chunk: chunk.to_vec(),
            total_bytes,
        });
        Ok(())
    }

    fn send_pixels<P>(&mut self, pixels: P) -> Result<(), Self::Error>
    where
        P: IntoIterator<Item = u16>,
    {
        self.ops.push(Op::Pixels(pixels.into_iter().collect()));
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
        self.ops.push(Op::Reset);
        Ok(())
    }
}

impl MockInterface {
    /// Every addressing window programmed, in order
    pub fn windows(&self) -> Vec<Window> {
        let mut windows = Vec::new();
        for (i, op) in self.ops.iter().enumerate() {
            if *op != Op::Command(CASET) {
                continue;
            }
            let (Some(Op::Data(cols)), Some(Op::Command(PASET)), Some(Op::Data(rows))) =
                (self.ops.get(i + 1), self.ops.get(i + 2), self.ops.get(i + 3))
            else {
                continue;
            };
            let be = |d: &[u8], at: usize| u16::from_be_bytes([d[at], d[at + 1]]);
            windows.push(Window {
                x0: be(cols, 0),
                x1: be(cols, 2),
                y0: be(rows, 0),
                y1: be(rows, 2),
            });
        }
        windows
    }

    /// Pixels written one at a time with `send_data16` after a window
    pub fn plotted_points(&self) -> Vec<(u16, u16)> {
        self.windows()
            .iter()
            .filter(|w| w.area() == 1)
            .map(|w| (w.x0, w.y0))
            .collect()
    }

    /// Total pixel payload bytes sent after RAMWR commands
    pub fn pixel_bytes(&self) -> usize {
        let mut total = 0;
        let mut in_ram_write = false;
        for op in &self.ops {
            match op {
                Op::Command(cmd) => in_ram_write = *cmd == RAMWR,
                Op::Data(d) if in_ram_write => total += d.len(),
                Op::Stream { total_bytes, .. } if in_ram_write => total += total_bytes,
                Op::Pixels(p) if in_ram_write => total += p.len() * 2,
                _ => {}
            }
        }
        total
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

pub struct MockDelay;

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Initialized 320x240 display with the init traffic cleared
pub fn ready_display() -> Display<MockInterface> {
    let config = Builder::new()
        .dimensions(Dimensions::new(320, 240).unwrap())
        .build();
    let mut display = Display::new(MockInterface::default(), config);
    display.init(&mut MockDelay).unwrap();
    display.interface_mut().clear();
    display
}
