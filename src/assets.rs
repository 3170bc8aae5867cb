//! Built-in sprite sheets, generated at compile time.
//!
//! Digits are seven-segment glyphs stretched to each tier's cell width.
//! The badge sheet holds a "P" on row 0 and an "A" on row 1.

use crate::sheet::{glyph_cell, BADGE_HEIGHT, BADGE_WIDTH, SPRITES_PER_ROW, SPRITE_ROWS};
use crate::tier::{GlyphTier, GLYPH_HEIGHT};

pub const fn sheet_len(width: u32, height: u32) -> usize {
    (width.div_ceil(8) * height) as usize
}

pub const DIGIT_SHEET_HEIGHT: u32 = GLYPH_HEIGHT * SPRITE_ROWS;
pub const BADGE_SHEET_HEIGHT: u32 = BADGE_HEIGHT * 2;

pub const PRIORITY_SHEET_WIDTH: u32 = GlyphTier::Priority.width() * SPRITES_PER_ROW;
pub const LESSER_SHEET_WIDTH: u32 = GlyphTier::Lesser.width() * SPRITES_PER_ROW;
pub const LEAST_SHEET_WIDTH: u32 = GlyphTier::Least.width() * SPRITES_PER_ROW;

pub static PRIORITY_DIGITS: [u8; sheet_len(PRIORITY_SHEET_WIDTH, DIGIT_SHEET_HEIGHT)] =
    digit_sheet(GlyphTier::Priority.width());
pub static LESSER_DIGITS: [u8; sheet_len(LESSER_SHEET_WIDTH, DIGIT_SHEET_HEIGHT)] =
    digit_sheet(GlyphTier::Lesser.width());
pub static LEAST_DIGITS: [u8; sheet_len(LEAST_SHEET_WIDTH, DIGIT_SHEET_HEIGHT)] =
    digit_sheet(GlyphTier::Least.width());
pub static AM_PM_BADGE: [u8; sheet_len(BADGE_WIDTH, BADGE_SHEET_HEIGHT)] = badge_sheet();

// Segment bits: a b c d e f g (top, upper right, lower right, bottom,
// lower left, upper left, middle).
const A: u8 = 1 << 0;
const B: u8 = 1 << 1;
const C: u8 = 1 << 2;
const D: u8 = 1 << 3;
const E: u8 = 1 << 4;
const F: u8 = 1 << 5;
const G: u8 = 1 << 6;

const SEGMENTS: [u8; 10] = [
    A | B | C | D | E | F,
    B | C,
    A | B | D | E | G,
    A | B | C | D | G,
    B | C | F | G,
    A | C | D | F | G,
    A | C | D | E | F | G,
    A | B | C,
    A | B | C | D | E | F | G,
    A | B | C | D | F | G,
];

const fn segment_ink(segments: u8, width: u32, x: u32, y: u32) -> bool {
    let bar = if width >= 20 { 3 } else { 2 };
    let stroke = if width / 6 > 2 { width / 6 } else { 2 };
    let left = 1;
    let right = width - 1;
    let mid = (GLYPH_HEIGHT - bar) / 2;

    if x < left || x >= right {
        return false;
    }
    let on_left = x < left + stroke;
    let on_right = x >= right - stroke;
    let upper = y < mid + bar;
    let lower = y >= mid;

    (segments & A != 0 && y < bar)
        || (segments & D != 0 && y >= GLYPH_HEIGHT - bar)
        || (segments & G != 0 && y >= mid && y < mid + bar)
        || (segments & F != 0 && on_left && upper)
        || (segments & E != 0 && on_left && lower)
        || (segments & B != 0 && on_right && upper)
        || (segments & C != 0 && on_right && lower)
}

const fn digit_sheet<const N: usize>(glyph_width: u32) -> [u8; N] {
    let stride = (glyph_width * SPRITES_PER_ROW).div_ceil(8);
    let mut buf = [0u8; N];
    let mut digit = 0u8;
    while digit < 10 {
        let (row, col) = glyph_cell(digit);
        let segments = SEGMENTS[digit as usize];
        let mut y = 0;
        while y < GLYPH_HEIGHT {
            let mut x = 0;
            while x < glyph_width {
                if segment_ink(segments, glyph_width, x, y) {
                    let px = col * glyph_width + x;
                    let py = row * GLYPH_HEIGHT + y;
                    buf[(py * stride + px / 8) as usize] |= 0x80u8 >> (px % 8);
                }
                x += 1;
            }
            y += 1;
        }
        digit += 1;
    }
    buf
}

// 5x7 letters, drawn at double scale.
const LETTER_P: [u8; 7] = [
    0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000,
];
const LETTER_A: [u8; 7] = [
    0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001,
];

const fn badge_sheet<const N: usize>() -> [u8; N] {
    let stride = BADGE_WIDTH.div_ceil(8);
    let letters = [LETTER_P, LETTER_A];
    let mut buf = [0u8; N];
    let mut row: usize = 0;
    while row < 2 {
        let letter = letters[row];
        let mut gy: usize = 0;
        while gy < 7 {
            let mut gx: u32 = 0;
            while gx < 5 {
                if letter[gy] & (0b10000 >> gx) != 0 {
                    let mut dy = 0;
                    while dy < 2 {
                        let mut dx = 0;
                        while dx < 2 {
                            let px = 5 + 2 * gx + dx;
                            let py = row as u32 * BADGE_HEIGHT + 2 * gy as u32 + dy;
                            buf[(py * stride + px / 8) as usize] |= 0x80u8 >> (px % 8);
                            dx += 1;
                        }
                        dy += 1;
                    }
                }
                gx += 1;
            }
            gy += 1;
        }
        row += 1;
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::SpriteSheet;

    fn ink_in(sheet: &SpriteSheet<'_>, x0: u32, y0: u32, w: u32, h: u32) -> usize {
        (y0..y0 + h)
            .flat_map(|y| (x0..x0 + w).map(move |x| (x, y)))
            .filter(|&(x, y)| sheet.is_set(x, y))
            .count()
    }

    #[test]
    fn eight_has_more_ink_than_one() {
        for tier in GlyphTier::ALL {
            let sheet = match tier {
                GlyphTier::Priority => {
                    SpriteSheet::new(&PRIORITY_DIGITS, PRIORITY_SHEET_WIDTH, DIGIT_SHEET_HEIGHT)
                }
                GlyphTier::Lesser => {
                    SpriteSheet::new(&LESSER_DIGITS, LESSER_SHEET_WIDTH, DIGIT_SHEET_HEIGHT)
                }
                GlyphTier::Least => {
                    SpriteSheet::new(&LEAST_DIGITS, LEAST_SHEET_WIDTH, DIGIT_SHEET_HEIGHT)
                }
            };
            let one = sheet.glyph_rect(tier, 1).unwrap();
            let eight = sheet.glyph_rect(tier, 8).unwrap();
            let count = |r: embedded_graphics::primitives::Rectangle| {
                ink_in(
                    &sheet,
                    r.top_left.x as u32,
                    r.top_left.y as u32,
                    r.size.width,
                    r.size.height,
                )
            };
            assert!(count(one) > 0);
            assert!(count(eight) > count(one));
        }
    }

    #[test]
    fn glyphs_leave_a_blank_column_on_each_side() {
        let sheet = SpriteSheet::new(&LESSER_DIGITS, LESSER_SHEET_WIDTH, DIGIT_SHEET_HEIGHT);
        let eight = sheet.glyph_rect(GlyphTier::Lesser, 8).unwrap();
        let x = eight.top_left.x as u32;
        let y = eight.top_left.y as u32;
        assert_eq!(ink_in(&sheet, x, y, 1, GLYPH_HEIGHT), 0);
        assert_eq!(ink_in(&sheet, x + 19, y, 1, GLYPH_HEIGHT), 0);
        assert!(ink_in(&sheet, x + 1, y, 1, GLYPH_HEIGHT) > 0);
    }

    #[test]
    fn badge_letters_differ() {
        let sheet = SpriteSheet::new(&AM_PM_BADGE, BADGE_WIDTH, BADGE_SHEET_HEIGHT);
        let pm = ink_in(&sheet, 0, 0, BADGE_WIDTH, BADGE_HEIGHT);
        let am = ink_in(&sheet, 0, BADGE_HEIGHT, BADGE_WIDTH, BADGE_HEIGHT);
        // P: 15 cells, A: 18 cells, each drawn 2x2.
        assert_eq!(pm, 15 * 4);
        assert_eq!(am, 18 * 4);
    }
}
