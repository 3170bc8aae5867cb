//! Composites a [`Frame`] onto any binary-colour draw target.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Dimensions;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{Pixel, Point, Size};
use embedded_graphics::primitives::{Primitive, PrimitiveStyle, Rectangle};
use embedded_graphics::Drawable;
use heapless::Vec;

use crate::classify::classify;
use crate::clock::TimeOfDay;
use crate::config::{FaceConfig, Palette};
use crate::layout::{
    layout, CommandKind, DrawCommand, Frame, COLON_DOTS, COLON_DOT_SIZE, MAX_COMMANDS,
};
use crate::log::{debug, error};
use crate::resources::Resources;
use crate::sheet::{RenderError, SpriteSheet};

/// A command left out of the frame and why.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skipped {
    pub command: DrawCommand,
    pub error: RenderError,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub drawn: usize,
    pub skipped: Vec<Skipped, MAX_COMMANDS>,
}

impl RenderReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Draws `frame`. Resource faults skip the affected command and are
/// collected in the report; only errors of `target` itself are returned.
pub fn render<D>(
    target: &mut D,
    frame: &Frame,
    resources: &Resources<'_>,
    palette: Palette,
) -> Result<RenderReport, D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(palette.background)?;

    let mut report = RenderReport::default();
    for command in &frame.commands {
        let source = match command.kind {
            CommandKind::Colon => {
                draw_colon(target, command.area.top_left, palette.ink)?;
                report.drawn += 1;
                continue;
            }
            CommandKind::Digit { tier, value } => resources
                .digits(tier)
                .and_then(|sheet| sheet.glyph_rect(tier, value).map(|rect| (sheet, rect))),
            CommandKind::AmPmBadge { is_pm } => resources
                .badge()
                .and_then(|sheet| sheet.badge_rect(is_pm).map(|rect| (sheet, rect))),
        };

        match source {
            Ok((sheet, rect)) => {
                blit(target, sheet, rect, command.area.top_left, palette.ink)?;
                report.drawn += 1;
            }
            Err(error) => {
                error!("skipping {}: {}", command.kind, error);
                // One entry per command, so this cannot overflow.
                let _ = report.skipped.push(Skipped {
                    command: *command,
                    error,
                });
            }
        }
    }
    Ok(report)
}

/// Copies the set pixels of `source` to `origin`; clear pixels leave the
/// target untouched.
fn blit<D>(
    target: &mut D,
    sheet: &SpriteSheet<'_>,
    source: Rectangle,
    origin: Point,
    ink: BinaryColor,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let left = source.top_left.x as u32;
    let top = source.top_left.y as u32;
    let pixels = (0..source.size.height).flat_map(move |dy| {
        (0..source.size.width).filter_map(move |dx| {
            sheet
                .is_set(left + dx, top + dy)
                .then(|| Pixel(origin + Point::new(dx as i32, dy as i32), ink))
        })
    });
    target.draw_iter(pixels)
}

fn draw_colon<D>(target: &mut D, origin: Point, ink: BinaryColor) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = PrimitiveStyle::with_fill(ink);
    for offset in COLON_DOTS {
        Rectangle::new(origin + offset, Size::new_equal(COLON_DOT_SIZE))
            .into_styled(style)
            .draw(target)?;
    }
    Ok(())
}

/// One full redraw: classify, lay out against the target's size, render.
pub fn redraw<D>(
    target: &mut D,
    time: TimeOfDay,
    config: &FaceConfig,
    resources: &Resources<'_>,
) -> Result<RenderReport, D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let classification = classify(time, config.hour_format);
    let frame = layout(&classification, config, target.bounding_box().size);
    debug!(
        "redraw {}: width={} start_x={}",
        classification.text().as_str(),
        frame.total_width,
        frame.start_x
    );
    render(target, &frame, resources, config.palette())
}
