//! Digit classification: which glyph tier each `HH:MM` slot is drawn in.

use core::fmt::Write;

use heapless::String;

use crate::clock::TimeOfDay;
use crate::config::HourFormat;
use crate::tier::GlyphTier;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlotPosition {
    HourTens,
    HourOnes,
    MinuteTens,
    MinuteOnes,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitSlot {
    pub position: SlotPosition,
    pub value: u8,
    pub tier: GlyphTier,
    pub visible: bool,
}

impl DigitSlot {
    const fn shown(position: SlotPosition, value: u8, tier: GlyphTier) -> Self {
        Self {
            position,
            value,
            tier,
            visible: true,
        }
    }
}

/// The four slots of one reading plus its meridiem.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Classification {
    pub hour_tens: DigitSlot,
    pub hour_ones: DigitSlot,
    pub minute_tens: DigitSlot,
    pub minute_ones: DigitSlot,
    pub is_pm: bool,
}

impl Classification {
    /// Slots in left-to-right order, hidden hour tens included.
    pub fn slots(&self) -> [DigitSlot; 4] {
        [
            self.hour_tens,
            self.hour_ones,
            self.minute_tens,
            self.minute_ones,
        ]
    }

    /// The reading as displayed, e.g. `9:05` or `11:47`.
    pub fn text(&self) -> String<8> {
        let mut out = String::new();
        if self.hour_tens.visible {
            let _ = write!(out, "{}", self.hour_tens.value);
        }
        // Capacity covers the longest reading, "23:59".
        let _ = write!(
            out,
            "{}:{}{}",
            self.hour_ones.value, self.minute_tens.value, self.minute_ones.value
        );
        out
    }
}

/// Hour as shown on the face.
pub const fn display_hour(hour24: u8, format: HourFormat) -> u8 {
    match format {
        HourFormat::TwentyFour => hour24,
        HourFormat::Twelve => match hour24 {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        },
    }
}

/// Assigns a tier to every slot of `time`.
///
/// The hour is one Priority digit, preceded by a Least tens digit when it
/// has two digits. Minutes are decided by the first matching rule:
///
/// 1. `:0x` draws a Least zero then a Priority digit.
/// 2. `:x0` draws a Priority digit then a Least zero.
/// 3. With a single-digit hour, Lesser then Priority.
/// 4. Otherwise Priority then Lesser.
///
/// Rule 1 runs before rule 2, so `:00` takes the Least/Priority shape.
pub fn classify(time: TimeOfDay, format: HourFormat) -> Classification {
    let hour = display_hour(time.hour(), format);
    let hour_tens = hour / 10;
    let hour_ones = hour % 10;
    let minute_tens = time.minute() / 10;
    let minute_ones = time.minute() % 10;

    let hour_tens_slot = if hour_tens == 0 {
        DigitSlot {
            position: SlotPosition::HourTens,
            value: 0,
            tier: GlyphTier::Priority,
            visible: false,
        }
    } else {
        DigitSlot::shown(SlotPosition::HourTens, hour_tens, GlyphTier::Least)
    };

    let (minute_tens_tier, minute_ones_tier) = if minute_tens == 0 {
        (GlyphTier::Least, GlyphTier::Priority)
    } else if minute_ones == 0 {
        (GlyphTier::Priority, GlyphTier::Least)
    } else if hour_tens == 0 {
        (GlyphTier::Lesser, GlyphTier::Priority)
    } else {
        (GlyphTier::Priority, GlyphTier::Lesser)
    };

    Classification {
        hour_tens: hour_tens_slot,
        hour_ones: DigitSlot::shown(SlotPosition::HourOnes, hour_ones, GlyphTier::Priority),
        minute_tens: DigitSlot::shown(SlotPosition::MinuteTens, minute_tens, minute_tens_tier),
        minute_ones: DigitSlot::shown(SlotPosition::MinuteOnes, minute_ones, minute_ones_tier),
        is_pm: time.is_pm(),
    }
}
