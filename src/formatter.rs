//! Daily message composition and SMS length accounting.

use crate::calendar::{compute_streak, CalendarDay};
use crate::emoji::{select_emoji, EmojiCategory};
use crate::penguin::{milestone, special_day, DAILY_GREETINGS, PENGUIN_FACTS, PENGUIN_WISDOM};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const CELEBRATION_LINK: &str =
    "🔗 View the celebration: https://dashedleopard.github.io/larry-steve-penguins/";

const SINGLE_SEGMENT_LIMIT: usize = 160;
const CONCAT_SEGMENT_LIMIT: usize = 153;

pub fn compose_daily_message(
    greeting: &str,
    wisdom: &str,
    fact: &str,
    day_of_week: u32,
    day_of_month: u32,
    now: DateTime<Utc>,
) -> String {
    let greeting_emoji = select_emoji(EmojiCategory::Greeting, day_of_week, day_of_month);
    let wisdom_emoji = select_emoji(EmojiCategory::Wisdom, day_of_week, day_of_month);
    let fact_emoji = select_emoji(EmojiCategory::Fact, day_of_week, day_of_month);

    let today = CalendarDay::from_utc(now);
    let streak = compute_streak(now);

    let greeting_line = match special_day(&today.month_day) {
        Some(special) => format!("{} {}", special.emoji, special.greeting),
        None => format!("{} {}", greeting_emoji, greeting),
    };

    let streak_line = match milestone(streak) {
        Some(text) => format!("🏅 Day {}: {}", streak, text),
        None => format!("📅 Day {} of Larry & Steve!", streak),
    };

    format!(
        "{greeting_line}\n\n{streak_line}\n\n{wisdom_emoji} Penguin Wisdom: \"{wisdom}\"\n\n{fact_emoji} Fun Fact: {fact}\n\n{CELEBRATION_LINK}"
    )
}

/// Today's greeting and wisdom, plus the fact of the day, composed for `now`.
pub fn daily_message(now: DateTime<Utc>) -> String {
    let today = CalendarDay::from_utc(now);
    let greeting = DAILY_GREETINGS[today.day_of_week as usize % DAILY_GREETINGS.len()];
    let wisdom =
        PENGUIN_WISDOM[today.day_of_month.saturating_sub(1) as usize % PENGUIN_WISDOM.len()];
    let fact = PENGUIN_FACTS[today.day_of_year as usize % PENGUIN_FACTS.len()];

    compose_daily_message(
        greeting,
        wisdom,
        fact,
        today.day_of_week,
        today.day_of_month,
        now,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageStats {
    pub length: usize,
    pub segments: usize,
}

/// Length is in UTF-16 code units, so astral-plane emoji count twice.
pub fn message_stats(message: &str) -> MessageStats {
    let length = message.encode_utf16().count();
    let segments = if length <= SINGLE_SEGMENT_LIMIT {
        1
    } else {
        length.div_ceil(CONCAT_SEGMENT_LIMIT)
    };
    MessageStats { length, segments }
}
