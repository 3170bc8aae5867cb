use core::fmt;

/// A validated wall-clock reading, as consumed by one redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    Hour(u8),
    Minute(u8),
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeError::Hour(h) => write!(f, "hour {h} outside 0..=23"),
            TimeError::Minute(m) => write!(f, "minute {m} outside 0..=59"),
        }
    }
}

impl TimeOfDay {
    pub const fn new(hour: u8, minute: u8) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::Hour(hour));
        }
        if minute > 59 {
            return Err(TimeError::Minute(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Hour on the 24-hour clock, `0..=23`.
    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    pub const fn is_pm(self) -> bool {
        self.hour >= 12
    }
}

/// Shared state for the clock
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockState {
    pub hours: u8,
    pub mins: u8,
    pub secs: u8,
}

impl ClockState {
    pub fn new(hours: u8, mins: u8, secs: u8) -> Self {
        Self {
            hours: hours % 24,
            mins: mins % 60,
            secs: secs % 60,
        }
    }

    /// Increments the second. Returns true if the minute changed (display update needed).
    pub fn tick(&mut self) -> bool {
        self.secs += 1;
        if self.secs >= 60 {
            self.secs = 0;
            self.add_minute();
            return true;
        }
        false
    }

    /// Increments the minute. Handles rollover to hours.
    pub fn add_minute(&mut self) {
        self.mins += 1;
        if self.mins >= 60 {
            self.mins = 0;
            self.hours = (self.hours + 1) % 24;
        }
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        // `new` and the rollover logic keep both fields in range.
        TimeOfDay {
            hour: self.hours,
            minute: self.mins,
        }
    }
}
