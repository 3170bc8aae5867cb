use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Pixel, Point, Size};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Bytes per panel line.
pub const LINE_BYTES: usize = (SCREEN_WIDTH / 8) as usize;

const FRAME_BYTES: usize = LINE_BYTES * SCREEN_HEIGHT as usize;

/// 1 bpp copy of the panel contents. Lines are MSB-first and a set bit is
/// `BinaryColor::On`, which the memory LCD shows as white.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    bits: [u8; FRAME_BYTES],
}

impl FrameBuffer {
    pub const fn new() -> Self {
        Self {
            bits: [0; FRAME_BYTES],
        }
    }

    /// Raw bytes of panel line `y`.
    pub fn line(&self, y: usize) -> Option<&[u8]> {
        self.bits.get(y * LINE_BYTES..(y + 1) * LINE_BYTES)
    }

    pub fn pixel(&self, point: Point) -> Option<BinaryColor> {
        let (index, mask) = Self::locate(point)?;
        Some(BinaryColor::from(self.bits[index] & mask != 0))
    }

    fn locate(point: Point) -> Option<(usize, u8)> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as u32, point.y as u32);
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return None;
        }
        let index = y as usize * LINE_BYTES + (x / 8) as usize;
        Some((index, 0x80 >> (x % 8)))
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            let Some((index, mask)) = Self::locate(coord) else {
                continue;
            };
            match color {
                BinaryColor::On => self.bits[index] |= mask,
                BinaryColor::Off => self.bits[index] &= !mask,
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = match color {
            BinaryColor::On => 0xff,
            BinaryColor::Off => 0x00,
        };
        self.bits.fill(fill);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_pack_msb_first() {
        let mut fb = FrameBuffer::new();
        fb.draw_iter([
            Pixel(Point::new(0, 0), BinaryColor::On),
            Pixel(Point::new(9, 0), BinaryColor::On),
            Pixel(Point::new(143, 167), BinaryColor::On),
        ])
        .unwrap();

        let first = fb.line(0).unwrap();
        assert_eq!(first.len(), 18);
        assert_eq!(first[0], 0b1000_0000);
        assert_eq!(first[1], 0b0100_0000);
        assert_eq!(fb.line(167).unwrap()[17], 0b0000_0001);
        assert!(fb.line(168).is_none());
    }

    #[test]
    fn off_screen_pixels_are_clipped() {
        let mut fb = FrameBuffer::new();
        fb.draw_iter([
            Pixel(Point::new(-1, 0), BinaryColor::On),
            Pixel(Point::new(144, 0), BinaryColor::On),
            Pixel(Point::new(0, 168), BinaryColor::On),
        ])
        .unwrap();
        assert_eq!(fb, FrameBuffer::new());
        assert_eq!(fb.pixel(Point::new(-1, 0)), None);
    }

    #[test]
    fn clear_then_draw_off() {
        let mut fb = FrameBuffer::new();
        fb.clear(BinaryColor::On).unwrap();
        fb.draw_iter([Pixel(Point::new(3, 2), BinaryColor::Off)]).unwrap();
        assert_eq!(fb.pixel(Point::new(3, 2)), Some(BinaryColor::Off));
        assert_eq!(fb.pixel(Point::new(4, 2)), Some(BinaryColor::On));
        assert_eq!(fb.line(2).unwrap()[0], 0b1110_1111);
    }
}
