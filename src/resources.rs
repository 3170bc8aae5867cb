use crate::assets;
use crate::log::{error, info};
use crate::sheet::{RenderError, SheetKind, SpriteSheet, BADGE_WIDTH};
use crate::tier::GlyphTier;

/// Every sprite sheet the face draws from. Loaded once at startup and only
/// read afterwards.
#[derive(Clone, Copy, Debug, Default)]
pub struct Resources<'a> {
    pub priority: Option<SpriteSheet<'a>>,
    pub lesser: Option<SpriteSheet<'a>>,
    pub least: Option<SpriteSheet<'a>>,
    pub am_pm: Option<SpriteSheet<'a>>,
}

impl Resources<'static> {
    /// The sheets compiled into the firmware.
    pub fn bundled() -> Self {
        Self {
            priority: Some(SpriteSheet::new(
                &assets::PRIORITY_DIGITS,
                assets::PRIORITY_SHEET_WIDTH,
                assets::DIGIT_SHEET_HEIGHT,
            )),
            lesser: Some(SpriteSheet::new(
                &assets::LESSER_DIGITS,
                assets::LESSER_SHEET_WIDTH,
                assets::DIGIT_SHEET_HEIGHT,
            )),
            least: Some(SpriteSheet::new(
                &assets::LEAST_DIGITS,
                assets::LEAST_SHEET_WIDTH,
                assets::DIGIT_SHEET_HEIGHT,
            )),
            am_pm: Some(SpriteSheet::new(
                &assets::AM_PM_BADGE,
                BADGE_WIDTH,
                assets::BADGE_SHEET_HEIGHT,
            )),
        }
    }
}

impl<'a> Resources<'a> {
    pub fn digits(&self, tier: GlyphTier) -> Result<&SpriteSheet<'a>, RenderError> {
        let sheet = match tier {
            GlyphTier::Priority => &self.priority,
            GlyphTier::Lesser => &self.lesser,
            GlyphTier::Least => &self.least,
        };
        sheet.as_ref().ok_or(RenderError::MissingResource {
            sheet: SheetKind::Digits(tier),
        })
    }

    pub fn badge(&self) -> Result<&SpriteSheet<'a>, RenderError> {
        self.am_pm.as_ref().ok_or(RenderError::MissingResource {
            sheet: SheetKind::AmPm,
        })
    }

    /// Logs each sheet's size, or its absence. Returns how many are missing.
    pub fn log_summary(&self) -> usize {
        let sheets = [
            (SheetKind::Digits(GlyphTier::Priority), self.priority),
            (SheetKind::Digits(GlyphTier::Lesser), self.lesser),
            (SheetKind::Digits(GlyphTier::Least), self.least),
            (SheetKind::AmPm, self.am_pm),
        ];

        let mut missing = 0;
        for (kind, sheet) in sheets {
            match sheet {
                Some(sheet) => {
                    let size = sheet.size();
                    info!("{} loaded: {}x{}", kind, size.width, size.height);
                }
                None => {
                    error!("failed to load {}", kind);
                    missing += 1;
                }
            }
        }
        missing
    }
}
