//! Places the classified digits on screen.
//!
//! Widths always come from the nominal tier table, so the layout of a frame
//! never depends on which sheets actually loaded.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use crate::classify::{Classification, DigitSlot};
use crate::config::FaceConfig;
use crate::sheet::{BADGE_HEIGHT, BADGE_WIDTH};
use crate::tier::{GlyphTier, GLYPH_HEIGHT};

pub const COLON_WIDTH: u32 = 8;
pub const DIGIT_SPACING: u32 = 2;

/// Side of each colon dot.
pub const COLON_DOT_SIZE: u32 = 4;
/// Dot offsets from the colon column's top-left corner.
pub const COLON_DOTS: [Point; 2] = [Point::new(2, 4), Point::new(2, 10)];

pub const BADGE_ORIGIN: Point = Point::new(10, 10);

/// Four digits, the colon and the badge.
pub const MAX_COMMANDS: usize = 6;

/// Widest possible time block, e.g. `11:47`.
pub const MIN_SCREEN_WIDTH: u32 = GlyphTier::Least.width()
    + GlyphTier::Priority.width()
    + COLON_WIDTH
    + GlyphTier::Priority.width()
    + GlyphTier::Lesser.width()
    + 4 * DIGIT_SPACING;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandKind {
    Digit { tier: GlyphTier, value: u8 },
    Colon,
    AmPmBadge { is_pm: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawCommand {
    pub kind: CommandKind,
    /// Target rectangle on screen.
    pub area: Rectangle,
}

/// Everything one redraw needs to put on screen, in drawing order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub commands: Vec<DrawCommand, MAX_COMMANDS>,
    /// Width of the centered `H:MM` block, spacing included.
    pub total_width: u32,
    pub start_x: i32,
    /// Top edge shared by every digit glyph.
    pub glyph_y: i32,
}

#[derive(Clone, Copy)]
enum Element {
    Digit(DigitSlot),
    Colon,
}

impl Element {
    const fn width(&self) -> u32 {
        match self {
            Element::Digit(slot) => slot.tier.width(),
            Element::Colon => COLON_WIDTH,
        }
    }
}

fn elements(classification: &Classification) -> Vec<Element, 5> {
    let mut out = Vec::new();
    for element in [
        Element::Digit(classification.hour_tens),
        Element::Digit(classification.hour_ones),
        Element::Colon,
        Element::Digit(classification.minute_tens),
        Element::Digit(classification.minute_ones),
    ] {
        if let Element::Digit(slot) = element {
            if !slot.visible {
                continue;
            }
        }
        // Five slots, five elements at most.
        let _ = out.push(element);
    }
    out
}

/// Width of the time block: every visible element plus one spacing unit
/// between neighbours.
pub fn total_width(classification: &Classification) -> u32 {
    let elements = elements(classification);
    let glyphs: u32 = elements.iter().map(Element::width).sum();
    glyphs + DIGIT_SPACING * (elements.len() as u32).saturating_sub(1)
}

/// Lays out one reading, centered on a `screen`-sized target.
pub fn layout(classification: &Classification, config: &FaceConfig, screen: Size) -> Frame {
    let total_width = total_width(classification);
    let start_x = (screen.width as i32 - total_width as i32) / 2;
    let glyph_y = (screen.height as i32 - GLYPH_HEIGHT as i32) / 2;

    let mut commands = Vec::new();
    let mut cursor = start_x;
    for element in elements(classification) {
        let kind = match element {
            Element::Digit(slot) => CommandKind::Digit {
                tier: slot.tier,
                value: slot.value,
            },
            Element::Colon => CommandKind::Colon,
        };
        let area = Rectangle::new(
            Point::new(cursor, glyph_y),
            Size::new(element.width(), GLYPH_HEIGHT),
        );
        // At most five elements plus the badge fit in MAX_COMMANDS.
        let _ = commands.push(DrawCommand { kind, area });
        cursor += (element.width() + DIGIT_SPACING) as i32;
    }

    if config.badge_enabled() {
        let _ = commands.push(DrawCommand {
            kind: CommandKind::AmPmBadge {
                is_pm: classification.is_pm,
            },
            area: Rectangle::new(BADGE_ORIGIN, Size::new(BADGE_WIDTH, BADGE_HEIGHT)),
        });
    }

    Frame {
        commands,
        total_width,
        start_x,
        glyph_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::clock::TimeOfDay;
    use crate::config::{HourFormat, SCREEN_HEIGHT, SCREEN_WIDTH};

    const SCREEN: Size = Size::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    fn frame(hour: u8, minute: u8, config: &FaceConfig) -> Frame {
        let time = TimeOfDay::new(hour, minute).unwrap();
        layout(&classify(time, config.hour_format), config, SCREEN)
    }

    fn xs(frame: &Frame) -> std::vec::Vec<i32> {
        frame.commands.iter().map(|c| c.area.top_left.x).collect()
    }

    #[test]
    fn widest_block_is_min_screen_width() {
        assert_eq!(MIN_SCREEN_WIDTH, 129);
        let time = TimeOfDay::new(11, 47).unwrap();
        let c = classify(time, HourFormat::Twelve);
        assert_eq!(total_width(&c), MIN_SCREEN_WIDTH);
    }

    #[test]
    fn single_digit_hour_is_centered() {
        // 9:05 -> 40 + 2 + 8 + 2 + 13 + 2 + 40
        let f = frame(9, 5, &FaceConfig::DEFAULT);
        assert_eq!(f.total_width, 107);
        assert_eq!(f.start_x, (144 - 107) / 2);
        assert_eq!(f.glyph_y, 75);
        assert_eq!(xs(&f), [18, 60, 70, 85, 10]);
    }

    #[test]
    fn two_digit_hour_emits_tens_first() {
        let f = frame(11, 47, &FaceConfig::DEFAULT);
        assert_eq!(f.start_x, 7);
        let kinds: std::vec::Vec<_> = f.commands.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            [
                CommandKind::Digit { tier: GlyphTier::Least, value: 1 },
                CommandKind::Digit { tier: GlyphTier::Priority, value: 1 },
                CommandKind::Colon,
                CommandKind::Digit { tier: GlyphTier::Priority, value: 4 },
                CommandKind::Digit { tier: GlyphTier::Lesser, value: 7 },
                CommandKind::AmPmBadge { is_pm: false },
            ]
        );
        assert_eq!(xs(&f), [7, 22, 64, 74, 116, 10]);
    }

    #[test]
    fn colon_occupies_fixed_column() {
        let f = frame(14, 30, &FaceConfig::DEFAULT);
        let colon = f
            .commands
            .iter()
            .find(|c| c.kind == CommandKind::Colon)
            .unwrap();
        assert_eq!(colon.area.size, Size::new(COLON_WIDTH, GLYPH_HEIGHT));
        assert_eq!(colon.area.top_left.x, f.start_x + 40 + 2);
    }

    #[test]
    fn badge_is_fixed_and_outside_the_block() {
        let f = frame(13, 5, &FaceConfig::DEFAULT);
        let badge = f.commands.last().unwrap();
        assert_eq!(badge.kind, CommandKind::AmPmBadge { is_pm: true });
        assert_eq!(badge.area, Rectangle::new(Point::new(10, 10), Size::new(20, 14)));

        let hidden = FaceConfig {
            show_am_pm: false,
            ..FaceConfig::DEFAULT
        };
        let g = frame(13, 5, &hidden);
        assert_eq!(g.commands.len(), f.commands.len() - 1);
        assert_eq!(g.total_width, f.total_width);
        assert_eq!(g.start_x, f.start_x);
    }

    #[test]
    fn twenty_four_hour_format_drops_badge() {
        let config = FaceConfig {
            hour_format: HourFormat::TwentyFour,
            ..FaceConfig::DEFAULT
        };
        let f = frame(23, 59, &config);
        assert!(f
            .commands
            .iter()
            .all(|c| !matches!(c.kind, CommandKind::AmPmBadge { .. })));
        assert_eq!(f.commands.len(), 5);
    }

    #[test]
    fn widths_and_bounds_hold_for_every_reading() {
        for hour in 0..24 {
            for minute in 0..60 {
                let f = frame(hour, minute, &FaceConfig::DEFAULT);
                let block: std::vec::Vec<_> = f
                    .commands
                    .iter()
                    .filter(|c| !matches!(c.kind, CommandKind::AmPmBadge { .. }))
                    .collect();
                let widths: u32 = block.iter().map(|c| c.area.size.width).sum();
                let gaps = DIGIT_SPACING * (block.len() as u32 - 1);
                assert_eq!(widths + gaps, f.total_width);

                assert!(f.start_x >= 0);
                assert!(f.start_x + f.total_width as i32 <= SCREEN_WIDTH as i32);

                for pair in block.windows(2) {
                    let right = pair[0].area.top_left.x + pair[0].area.size.width as i32;
                    assert_eq!(pair[1].area.top_left.x, right + DIGIT_SPACING as i32);
                }
                assert!(block.iter().all(|c| c.area.top_left.y == f.glyph_y));
            }
        }
    }

    #[test]
    fn narrow_screen_still_fits_at_minimum_width() {
        let time = TimeOfDay::new(11, 47).unwrap();
        let c = classify(time, HourFormat::Twelve);
        let f = layout(&c, &FaceConfig::DEFAULT, Size::new(MIN_SCREEN_WIDTH, 18));
        assert_eq!(f.start_x, 0);
        assert_eq!(f.glyph_y, 0);
    }

    #[test]
    fn layout_is_repeatable() {
        let a = frame(0, 0, &FaceConfig::DEFAULT);
        let b = frame(0, 0, &FaceConfig::DEFAULT);
        assert_eq!(a, b);
    }
}
