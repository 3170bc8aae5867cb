/// Height shared by every digit glyph, in pixels.
pub const GLYPH_HEIGHT: u32 = 18;

/// Visual weight of a digit glyph. Each tier has its own sprite sheet and a
/// fixed cell width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphTier {
    Priority,
    Lesser,
    Least,
}

impl GlyphTier {
    pub const ALL: [GlyphTier; 3] = [GlyphTier::Priority, GlyphTier::Lesser, GlyphTier::Least];

    /// Cell width of this tier in pixels.
    pub const fn width(self) -> u32 {
        match self {
            GlyphTier::Priority => 40,
            GlyphTier::Lesser => 20,
            GlyphTier::Least => 13,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            GlyphTier::Priority => "priority",
            GlyphTier::Lesser => "lesser",
            GlyphTier::Least => "least",
        }
    }
}
