/// First repeat fires this long after the press, in microseconds.
pub const INITIAL_REPEAT_US: u32 = 500_000;
/// Fastest repeat rate while the button stays held.
pub const MIN_REPEAT_US: u32 = 20_000;

/// Hold-to-repeat timing for the set-time button: every repeat comes 20%
/// sooner than the last, down to [`MIN_REPEAT_US`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepeatDelay {
    current_us: u32,
}

impl RepeatDelay {
    pub const fn new() -> Self {
        Self {
            current_us: INITIAL_REPEAT_US,
        }
    }

    /// Back to the initial delay, for a fresh press.
    pub fn reset(&mut self) -> u32 {
        self.current_us = INITIAL_REPEAT_US;
        self.current_us
    }

    /// Shortens the delay and returns the wait before the next repeat.
    pub fn accelerate(&mut self) -> u32 {
        if self.current_us > MIN_REPEAT_US {
            self.current_us = (self.current_us as u64 * 8 / 10) as u32;
            if self.current_us < MIN_REPEAT_US {
                self.current_us = MIN_REPEAT_US;
            }
        }
        self.current_us
    }

    pub const fn current_us(&self) -> u32 {
        self.current_us
    }
}

impl Default for RepeatDelay {
    fn default() -> Self {
        Self::new()
    }
}
