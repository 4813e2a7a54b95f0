//! Calendar facts derived from "now". Everything is on the UTC calendar.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Day 0 of the Larry & Steve streak.
pub const STREAK_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2025, 10, 13) {
    Some(date) => date,
    None => panic!("invalid streak epoch"),
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    /// 0 = Sunday.
    pub day_of_week: u32,
    /// 1..=31.
    pub day_of_month: u32,
    /// 1..=366.
    pub day_of_year: u32,
    /// `"MM-DD"`, the special-day key.
    pub month_day: String,
}

impl CalendarDay {
    pub fn from_utc(now: DateTime<Utc>) -> Self {
        let date = now.date_naive();
        Self {
            day_of_week: date.weekday().num_days_from_sunday(),
            day_of_month: date.day(),
            day_of_year: date.ordinal(),
            month_day: date.format("%m-%d").to_string(),
        }
    }
}

/// Whole days since [`STREAK_EPOCH`]; dates before the epoch clamp to 0.
pub fn compute_streak(now: DateTime<Utc>) -> u32 {
    let days = (now.date_naive() - STREAK_EPOCH).num_days();
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}
