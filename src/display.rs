//! Sharp memory LCD driver.
//!
//! The panel takes its mode bits and line addresses LSB first; the SPI
//! peripheral shifts MSB first, so both are bit-reversed here. Pixel bytes
//! go out unchanged because the framebuffer already stores the leftmost
//! pixel in the MSB.

use embedded_hal::blocking::spi::Write;
use embedded_hal::digital::v2::OutputPin;

use crate::config::SCREEN_HEIGHT;
use crate::framebuffer::{FrameBuffer, LINE_BYTES};

pub const MODE_WRITE: u8 = 0x80;
pub const MODE_VCOM: u8 = 0x40;
pub const MODE_CLEAR: u8 = 0x20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayError<S, P> {
    Spi(S),
    Pin(P),
}

#[cfg(feature = "defmt")]
impl<S, P> defmt::Format for DisplayError<S, P> {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            DisplayError::Spi(_) => defmt::write!(f, "SPI write failed"),
            DisplayError::Pin(_) => defmt::write!(f, "chip select failed"),
        }
    }
}

/// Gate line address as sent on the wire; panel lines are numbered from 1.
pub const fn line_address(line: usize) -> u8 {
    ((line + 1) as u8).reverse_bits()
}

pub struct SharpMemoryDisplay<SPI, CS> {
    spi: SPI,
    cs: CS,
    vcom: bool,
}

impl<SPI, CS> SharpMemoryDisplay<SPI, CS>
where
    SPI: Write<u8>,
    CS: OutputPin,
{
    /// `cs` is active high and must start low.
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self {
            spi,
            cs,
            vcom: false,
        }
    }

    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }

    /// Sends every line of `frame`.
    pub fn write_frame(
        &mut self,
        frame: &FrameBuffer,
    ) -> Result<(), DisplayError<SPI::Error, CS::Error>> {
        let mode = self.mode(MODE_WRITE);
        self.transaction(|spi| {
            spi.write(&[mode])?;
            let mut packet = [0u8; LINE_BYTES + 2];
            for y in 0..SCREEN_HEIGHT as usize {
                let Some(line) = frame.line(y) else {
                    break;
                };
                packet[0] = line_address(y);
                packet[1..=LINE_BYTES].copy_from_slice(line);
                spi.write(&packet)?;
            }
            spi.write(&[0x00])
        })
    }

    /// Blanks the panel memory.
    pub fn clear(&mut self) -> Result<(), DisplayError<SPI::Error, CS::Error>> {
        let mode = self.mode(MODE_CLEAR);
        self.transaction(|spi| spi.write(&[mode, 0x00]))
    }

    /// Toggles VCOM without touching the pixels. The panel needs this about
    /// once a second to avoid DC bias.
    pub fn hold(&mut self) -> Result<(), DisplayError<SPI::Error, CS::Error>> {
        let mode = self.mode(0);
        self.transaction(|spi| spi.write(&[mode, 0x00]))
    }

    fn mode(&mut self, bits: u8) -> u8 {
        let mode = if self.vcom { bits | MODE_VCOM } else { bits };
        self.vcom = !self.vcom;
        mode
    }

    fn transaction<F>(&mut self, body: F) -> Result<(), DisplayError<SPI::Error, CS::Error>>
    where
        F: FnOnce(&mut SPI) -> Result<(), SPI::Error>,
    {
        self.cs.set_high().map_err(DisplayError::Pin)?;
        let sent = body(&mut self.spi).map_err(DisplayError::Spi);
        // Release the panel even when the transfer failed.
        self.cs.set_low().map_err(DisplayError::Pin)?;
        sent
    }
}
