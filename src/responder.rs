//! Replies to inbound SMS commands.

use crate::calendar::{compute_streak, CalendarDay};
use crate::penguin::{
    random_item, RandomSource, TriviaChoice, TriviaQuestion, PENGUIN_FACTS, PENGUIN_JOKES,
    PENGUIN_WISDOM, TRIVIA_QUESTIONS,
};
use chrono::{DateTime, Utc};

pub const UNKNOWN_COMMAND: &str = "🐧 Unknown command! Text HELP to see available commands.";

pub const ERROR_REPLY: &str = "🐧 Oops! Larry & Steve encountered an error. Try again later!";

pub const HELP_TEXT: &str = "🐧 Larry & Steve Commands:
• FACT - Random penguin fact
• JOKE - Penguin joke
• WISDOM - Random wisdom quote
• TRIVIA - Today's penguin trivia
• A / B / C - Answer today's trivia
• STREAK - Days of Larry & Steve
• STATUS - Check bot status
• HELP - Show this menu";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fact,
    Joke,
    Wisdom,
    Trivia,
    Answer(TriviaChoice),
    Streak,
    Status,
    Help,
    Unknown,
}

impl Command {
    /// Case- and whitespace-insensitive; a missing body is `Unknown`.
    pub fn parse(body: Option<&str>) -> Self {
        let token = body.unwrap_or_default().trim().to_uppercase();
        match token.as_str() {
            "FACT" => Command::Fact,
            "JOKE" => Command::Joke,
            "WISDOM" => Command::Wisdom,
            "TRIVIA" => Command::Trivia,
            "STREAK" => Command::Streak,
            "STATUS" => Command::Status,
            "HELP" => Command::Help,
            other => TriviaChoice::from_token(other)
                .map(Command::Answer)
                .unwrap_or(Command::Unknown),
        }
    }
}

/// The question of the day. The TRIVIA prompt and the A/B/C check both go
/// through here, so they agree as long as they see the same UTC date.
pub fn trivia_of_the_day(now: DateTime<Utc>) -> &'static TriviaQuestion {
    let day_of_year = CalendarDay::from_utc(now).day_of_year as usize;
    &TRIVIA_QUESTIONS[day_of_year % TRIVIA_QUESTIONS.len()]
}

pub fn respond(body: Option<&str>, now: DateTime<Utc>, rng: &mut impl RandomSource) -> String {
    match Command::parse(body) {
        Command::Fact => format!("🐧 {}", random_item(&PENGUIN_FACTS, rng)),
        Command::Joke => format!("😂 {}", random_item(&PENGUIN_JOKES, rng)),
        Command::Wisdom => format!("💭 \"{}\"", random_item(&PENGUIN_WISDOM, rng)),
        Command::Trivia => render_trivia(trivia_of_the_day(now)),
        Command::Answer(choice) => check_answer(trivia_of_the_day(now), choice),
        Command::Streak => {
            let streak = compute_streak(now);
            format!("📅 Larry & Steve have been waddling together for {streak} days!")
        }
        Command::Status => {
            let streak = compute_streak(now);
            format!("🐧 Larry & Steve are swimming strong! Day {streak} and the bot is working perfectly! 🌊")
        }
        Command::Help => HELP_TEXT.to_string(),
        Command::Unknown => UNKNOWN_COMMAND.to_string(),
    }
}

fn render_trivia(question: &TriviaQuestion) -> String {
    let mut text = format!("🧠 Penguin Trivia: {}\n", question.prompt);
    for choice in TriviaChoice::ALL {
        text.push_str(&format!("{}) {}\n", choice.letter(), question.choice_text(choice)));
    }
    text.push_str("Reply A, B, or C!");
    text
}

fn check_answer(question: &TriviaQuestion, choice: TriviaChoice) -> String {
    let correct = question.answer;
    if choice == correct {
        format!("🎉 Correct! {}", question.fact)
    } else {
        format!(
            "❌ Not quite! The answer was {}) {}. {}",
            correct.letter(),
            question.choice_text(correct),
            question.fact
        )
    }
}
