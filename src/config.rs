//! Display geometry and face settings.

use embedded_graphics::pixelcolor::BinaryColor;

/// Panel width in pixels (Sharp LS013B7DH05 class memory LCD).
pub const SCREEN_WIDTH: u32 = 144;

/// Panel height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Time shown at power-up; the board has no RTC, the button sets the clock.
pub const START_TIME: (u8, u8, u8) = (12, 34, 56);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourFormat {
    #[default]
    Twelve,
    TwentyFour,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceConfig {
    /// White glyphs on a black background.
    pub dark_mode: bool,
    /// Draw the AM/PM badge. Ignored in 24-hour format.
    pub show_am_pm: bool,
    pub hour_format: HourFormat,
}

impl FaceConfig {
    pub const DEFAULT: FaceConfig = FaceConfig {
        dark_mode: false,
        show_am_pm: true,
        hour_format: HourFormat::Twelve,
    };

    pub const fn badge_enabled(&self) -> bool {
        self.show_am_pm && matches!(self.hour_format, HourFormat::Twelve)
    }

    pub const fn palette(&self) -> Palette {
        if self.dark_mode {
            Palette {
                background: BinaryColor::Off,
                ink: BinaryColor::On,
            }
        } else {
            Palette {
                background: BinaryColor::On,
                ink: BinaryColor::Off,
            }
        }
    }
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Colours used for one frame. `BinaryColor::On` is a white pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: BinaryColor,
    pub ink: BinaryColor,
}
