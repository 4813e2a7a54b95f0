//! Date-driven emoji rotation for the daily message.

pub const FALLBACK_EMOJI: &str = "🐧";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiCategory {
    Greeting,
    Wisdom,
    Fact,
}

impl EmojiCategory {
    fn pool(self) -> &'static [&'static str] {
        match self {
            EmojiCategory::Greeting => &["🐧", "❄️", "⛄", "🌊", "🏔️"],
            EmojiCategory::Wisdom => &["💭", "💙", "✨", "🎯", "⭐"],
            EmojiCategory::Fact => &["🐟", "🎉", "🎊", "💙", "🌟"],
        }
    }
}

/// Greeting rotates with the weekday, everything else with the day of month.
pub fn select_emoji(category: EmojiCategory, day_of_week: u32, day_of_month: u32) -> &'static str {
    let pool = category.pool();
    if pool.is_empty() {
        return FALLBACK_EMOJI;
    }

    let index = match category {
        EmojiCategory::Greeting => day_of_week as usize % pool.len(),
        _ => day_of_month.saturating_sub(1) as usize % pool.len(),
    };
    pool[index]
}
