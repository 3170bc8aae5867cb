//! Sprite sheets and the (tier, digit) -> source rectangle mapping.

use core::fmt;

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::tier::{GlyphTier, GLYPH_HEIGHT};

/// Glyph columns per digit sheet.
pub const SPRITES_PER_ROW: u32 = 3;
/// Glyph rows per digit sheet: `1 2 3 / 4 5 6 / 7 8 9 / 0`.
pub const SPRITE_ROWS: u32 = 4;

pub const BADGE_WIDTH: u32 = 20;
pub const BADGE_HEIGHT: u32 = 14;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SheetKind {
    Digits(GlyphTier),
    AmPm,
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetKind::Digits(tier) => write!(f, "{} digit sheet", tier.name()),
            SheetKind::AmPm => f.write_str("AM/PM sheet"),
        }
    }
}

/// Reasons a single draw command is skipped. None of them abort a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    MissingResource {
        sheet: SheetKind,
    },
    InvalidSheetGeometry {
        sheet: SheetKind,
        width: u32,
        height: u32,
    },
    OutOfBoundsSprite {
        sheet: SheetKind,
        digit: u8,
        row: u32,
        col: u32,
        max_row: u32,
        max_col: u32,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MissingResource { sheet } => write!(f, "{sheet} not loaded"),
            RenderError::InvalidSheetGeometry {
                sheet,
                width,
                height,
            } => write!(f, "{sheet} has invalid dimensions {width}x{height}"),
            RenderError::OutOfBoundsSprite {
                sheet,
                digit,
                row,
                col,
                max_row,
                max_col,
            } => write!(
                f,
                "{sheet}: digit={digit}, row={row}/{max_row}, col={col}/{max_col} out of bounds"
            ),
        }
    }
}

/// A borrowed 1 bpp bitmap: rows are padded to whole bytes, MSB is the
/// leftmost pixel, a set bit is ink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteSheet<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> SpriteSheet<'a> {
    /// Geometry is not checked here; see [`SpriteSheet::validate`].
    pub const fn new(data: &'a [u8], width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    const fn stride(&self) -> usize {
        self.width.div_ceil(8) as usize
    }

    pub fn validate(&self, sheet: SheetKind) -> Result<(), RenderError> {
        let needed = self.stride() * self.height as usize;
        if self.width == 0 || self.height == 0 || self.data.len() < needed {
            return Err(RenderError::InvalidSheetGeometry {
                sheet,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Whether the pixel at `(x, y)` is ink. Off-sheet reads are blank.
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y as usize * self.stride() + (x / 8) as usize;
        self.data
            .get(index)
            .is_some_and(|byte| byte & (0x80 >> (x % 8)) != 0)
    }

    /// Source rectangle of `digit` drawn in `tier`.
    pub fn glyph_rect(&self, tier: GlyphTier, digit: u8) -> Result<Rectangle, RenderError> {
        let sheet = SheetKind::Digits(tier);
        self.validate(sheet)?;

        let (row, col) = glyph_cell(digit);
        let max_col = self.width / tier.width();
        let max_row = self.height / GLYPH_HEIGHT;
        if digit > 9 || col >= max_col || row >= max_row {
            return Err(RenderError::OutOfBoundsSprite {
                sheet,
                digit,
                row,
                col,
                max_row,
                max_col,
            });
        }

        Ok(Rectangle::new(
            Point::new((col * tier.width()) as i32, (row * GLYPH_HEIGHT) as i32),
            Size::new(tier.width(), GLYPH_HEIGHT),
        ))
    }

    /// Source rectangle of the badge: row 0 is "PM", row 1 is "AM".
    pub fn badge_rect(&self, is_pm: bool) -> Result<Rectangle, RenderError> {
        let sheet = SheetKind::AmPm;
        self.validate(sheet)?;

        let row = if is_pm { 0 } else { 1 };
        let max_row = self.height / BADGE_HEIGHT;
        let max_col = self.width / BADGE_WIDTH;
        if max_col == 0 || row >= max_row {
            return Err(RenderError::OutOfBoundsSprite {
                sheet,
                digit: 0,
                row,
                col: 0,
                max_row,
                max_col,
            });
        }

        Ok(Rectangle::new(
            Point::new(0, (row * BADGE_HEIGHT) as i32),
            Size::new(BADGE_WIDTH, BADGE_HEIGHT),
        ))
    }
}

/// Grid cell `(row, col)` of a digit. Zero sits alone on the last row.
pub const fn glyph_cell(digit: u8) -> (u32, u32) {
    if digit == 0 {
        (SPRITE_ROWS - 1, 0)
    } else {
        let index = digit as u32 - 1;
        (index / SPRITES_PER_ROW, index % SPRITES_PER_ROW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAST_SHEET: [u8; 2 * 72] = [0xff; 2 * 72];

    fn least() -> SpriteSheet<'static> {
        SpriteSheet::new(&LEAST_SHEET, 13, 72)
    }

    #[test]
    fn digit_cells_follow_keypad_order() {
        assert_eq!(glyph_cell(1), (0, 0));
        assert_eq!(glyph_cell(3), (0, 2));
        assert_eq!(glyph_cell(5), (1, 1));
        assert_eq!(glyph_cell(9), (2, 2));
        assert_eq!(glyph_cell(0), (3, 0));
    }

    #[test]
    fn glyph_rect_scales_by_tier() {
        static DATA: [u8; 15 * 72] = [0; 15 * 72];
        let sheet = SpriteSheet::new(&DATA, 120, 72);
        assert_eq!(
            sheet.glyph_rect(GlyphTier::Priority, 6),
            Ok(Rectangle::new(Point::new(80, 18), Size::new(40, 18)))
        );
        assert_eq!(
            sheet.glyph_rect(GlyphTier::Priority, 0),
            Ok(Rectangle::new(Point::new(0, 54), Size::new(40, 18)))
        );
    }

    #[test]
    fn narrow_sheet_reports_out_of_bounds() {
        // One column wide: only 1, 4, 7 and 0 are addressable.
        let sheet = least();
        assert!(sheet.glyph_rect(GlyphTier::Least, 7).is_ok());
        assert_eq!(
            sheet.glyph_rect(GlyphTier::Least, 8),
            Err(RenderError::OutOfBoundsSprite {
                sheet: SheetKind::Digits(GlyphTier::Least),
                digit: 8,
                row: 2,
                col: 1,
                max_row: 4,
                max_col: 1,
            })
        );
    }

    #[test]
    fn degenerate_sheets_are_rejected() {
        let empty = SpriteSheet::new(&[], 0, 72);
        assert_eq!(
            empty.glyph_rect(GlyphTier::Lesser, 1),
            Err(RenderError::InvalidSheetGeometry {
                sheet: SheetKind::Digits(GlyphTier::Lesser),
                width: 0,
                height: 72,
            })
        );

        let short = SpriteSheet::new(&LEAST_SHEET[..10], 13, 72);
        assert!(matches!(
            short.validate(SheetKind::AmPm),
            Err(RenderError::InvalidSheetGeometry { .. })
        ));
    }

    #[test]
    fn digits_above_nine_are_out_of_bounds() {
        static DATA: [u8; 5 * 72] = [0; 5 * 72];
        let sheet = SpriteSheet::new(&DATA, 39, 72);
        assert!(matches!(
            sheet.glyph_rect(GlyphTier::Least, 10),
            Err(RenderError::OutOfBoundsSprite { digit: 10, .. })
        ));
    }

    #[test]
    fn badge_rows_select_meridiem() {
        static DATA: [u8; 3 * 28] = [0; 3 * 28];
        let sheet = SpriteSheet::new(&DATA, 20, 28);
        assert_eq!(sheet.badge_rect(true).unwrap().top_left, Point::new(0, 0));
        assert_eq!(sheet.badge_rect(false).unwrap().top_left, Point::new(0, 14));

        let one_row = SpriteSheet::new(&DATA, 20, 14);
        assert!(one_row.badge_rect(true).is_ok());
        assert!(one_row.badge_rect(false).is_err());
    }

    #[test]
    fn pixel_reads_are_msb_first_and_clipped() {
        let data = [0b1000_0000, 0b1000_0000, 0x00, 0b0100_0000];
        let sheet = SpriteSheet::new(&data, 9, 2);
        assert!(sheet.is_set(0, 0));
        assert!(sheet.is_set(8, 0));
        assert!(!sheet.is_set(1, 0));
        assert!(!sheet.is_set(0, 1));
        // Padding bits beyond the width are never read.
        assert!(!sheet.is_set(9, 1));
        assert!(!sheet.is_set(0, 5));
    }
}
