//! Configuration for readings and trend analysis.

use chrono::{FixedOffset, Offset, Utc, Weekday};

/// Longest history, in days, a trend analysis will look at.
pub const MAX_TIMEFRAME_DAYS: u32 = 365;

/// Configuration for building readings.
#[derive(Debug, Clone)]
pub struct ReadingConfig {
    /// Number of past days analyzed for trends (1-365).
    pub timeframe_days: u32,
    /// Day the weekly card's week begins on.
    pub week_start: Weekday,
    /// Offset from UTC used to decide what "today" is.
    pub utc_offset: FixedOffset,
    /// Whether readings include a trend analysis.
    pub include_trends: bool,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            timeframe_days: 30,
            week_start: Weekday::Sun,
            utc_offset: Utc.fix(),
            include_trends: true,
        }
    }
}

impl ReadingConfig {
    /// Set the trend window (clamped to 1-365 days).
    pub fn with_timeframe(mut self, days: u32) -> Self {
        self.timeframe_days = days.clamp(1, MAX_TIMEFRAME_DAYS);
        self
    }

    /// Set the first day of the week.
    pub fn with_week_start(mut self, day: Weekday) -> Self {
        self.week_start = day;
        self
    }

    /// Set the UTC offset used for "today".
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = offset;
        self
    }

    /// Include or skip the trend analysis.
    pub fn with_trends(mut self, include: bool) -> Self {
        self.include_trends = include;
        self
    }
}
