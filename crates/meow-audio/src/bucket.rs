//! Time-of-day windows for the Love Recorder's messages.

use chrono::Timelike;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// One of eight named windows of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeBucket {
    /// 02:00–06:00
    Late,
    /// 06:00–10:00
    Morning,
    /// 10:00–11:30
    Commute,
    /// 11:30–13:30
    Lunch,
    /// 13:30–17:30
    Afternoon,
    /// 17:30–19:00
    Dinner,
    /// 19:00–23:00
    Evening,
    /// 23:00–02:00
    Goodnight,
}

impl TimeBucket {
    pub const ALL: [TimeBucket; 8] = [
        Self::Late,
        Self::Morning,
        Self::Commute,
        Self::Lunch,
        Self::Afternoon,
        Self::Dinner,
        Self::Evening,
        Self::Goodnight,
    ];

    /// Bucket for a minute of the day. Values past midnight wrap around.
    pub fn from_minute_of_day(minute: u32) -> Self {
        match minute % MINUTES_PER_DAY {
            120..=359 => Self::Late,
            360..=599 => Self::Morning,
            600..=689 => Self::Commute,
            690..=809 => Self::Lunch,
            810..=1049 => Self::Afternoon,
            1050..=1139 => Self::Dinner,
            1140..=1379 => Self::Evening,
            _ => Self::Goodnight,
        }
    }

    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self::from_minute_of_day(time.hour() * 60 + time.minute())
    }

    /// Bucket for the local wall clock.
    pub fn now() -> Self {
        Self::from_time(&chrono::Local::now())
    }

    /// File name prefix of this bucket's clips
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Late => "late",
            Self::Morning => "morning",
            Self::Commute => "commute",
            Self::Lunch => "lunch",
            Self::Afternoon => "afternoon",
            Self::Dinner => "dinner",
            Self::Evening => "evening",
            Self::Goodnight => "goodnight",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Late => "Late Night Whispers",
            Self::Morning => "Morning Greeting",
            Self::Commute => "Commute Cheer",
            Self::Lunch => "Lunch Break",
            Self::Afternoon => "Afternoon Boost",
            Self::Dinner => "Dinner Time",
            Self::Evening => "Evening Relax",
            Self::Goodnight => "Goodnight Kiss",
        }
    }
}

impl std::fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}
