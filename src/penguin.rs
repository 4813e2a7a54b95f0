//! Static content for Larry & Steve: greetings, wisdom, facts, jokes, trivia,
//! special days and streak milestones.

use rand::Rng;

/// Day-of-week greetings, index 0 = Sunday.
pub const DAILY_GREETINGS: [&str; 7] = [
    "Happy Sunday from Larry & Steve! Time for a lazy penguin day!",
    "Happy Monday from Larry & Steve! Starting the week with a waddle!",
    "Happy Tuesday from Larry & Steve! Keep swimming strong!",
    "Happy Wednesday from Larry & Steve! Halfway through the week!",
    "Happy Thursday from Larry & Steve! Almost to the weekend!",
    "Happy Friday from Larry & Steve! Time to celebrate!",
    "Happy Saturday from Larry & Steve! Weekend waddles!",
];

/// Penguin wisdom, index 0 = the 1st of the month.
pub const PENGUIN_WISDOM: [&str; 31] = [
    "A penguin never slips on ice, but always learns from a stumble.",
    "The coldest waters teach the warmest lessons.",
    "Huddle together when times are tough.",
    "Sometimes the best path is a slide, not a walk.",
    "Every fish in the sea starts as a single splash.",
    "Stand tall, even when you're just 3 feet high.",
    "The best view comes after the deepest dive.",
    "Waddle at your own pace, the ice isn't going anywhere.",
    "A smooth pebble finds its way to the perfect nest.",
    "Share your catch, and the colony thrives.",
    "Even emperor penguins started as eggs.",
    "The fluffiest feathers keep the warmest hearts.",
    "When the wind blows, turn your back and wait it out.",
    "Every sunset on ice promises a new frozen dawn.",
    "Belly slides are faster than worrying about dignity.",
    "The loudest call finds the right mate.",
    "Ice doesn't melt from a single warm thought.",
    "Porpoise with purpose through the waves.",
    "Yesterday's fish is today's energy.",
    "The colony is only as strong as its smallest chick.",
    "Patience catches more fish than panic.",
    "Molt gracefully, growth looks messy.",
    "Even in a blizzard, your family knows your call.",
    "Tuxedos are always in style, no matter the occasion.",
    "The ice cracks, but penguins adapt.",
    "Dive deep, but always know your way up.",
    "A full belly and good company make any day great.",
    "Keep your flippers close and your fish closer.",
    "The aurora guides, but instinct leads.",
    "March proudly, even if the march is long.",
    "Tomorrow brings fresh ice and new adventures.",
];

// Kept short (40-70 chars) so the daily message stays within three segments.
pub const PENGUIN_FACTS: [&str; 30] = [
    "Emperor penguins can dive over 1,800 feet deep!",
    "Penguins can swim up to 22 mph underwater!",
    "A group of penguins is called a 'waddle' on land!",
    "Penguins spend up to 75% of their life in water!",
    "Emperor penguins can hold their breath for 22 minutes!",
    "The smallest penguin is only 16 inches tall!",
    "Penguins have excellent hearing underwater!",
    "A penguin's black and white coloring is camouflage!",
    "Penguins can drink salt water safely!",
    "Emperor penguin dads incubate eggs for 2 months!",
    "Penguins molt all their feathers at once!",
    "Some penguins can leap 6 feet out of the water!",
    "Penguins have been around for 60 million years!",
    "A penguin's tail helps them balance when waddling!",
    "Gentoo penguins are the fastest swimming penguins!",
    "Penguins can recognize each other's unique calls!",
    "Yellow-eyed penguins are among the rarest species!",
    "Penguins have a gland that filters salt from water!",
    "Macaroni penguins have funky yellow head feathers!",
    "Penguins can't taste sweet or savory flavors!",
    "Adelie penguins build nests from stones and pebbles!",
    "Some penguins travel 600 miles to their colonies!",
    "Penguin feathers are waterproof and windproof!",
    "King penguins don't build nests at all!",
    "Penguins have more feathers than most birds!",
    "Little blue penguins are also called fairy penguins!",
    "Rockhopper penguins hop over rocky terrain!",
    "Chinstrap penguins are named for their facial marking!",
    "Penguins can see better underwater than in air!",
    "African penguins can live up to 20 years!",
];

pub const PENGUIN_JOKES: [&str; 15] = [
    "Why don't penguins like talking to strangers? They find it hard to break the ice! 🐧",
    "What do penguins wear to the beach? A beak-ini! 👙",
    "How does a penguin build its house? Igloos it together! 🏠",
    "What's a penguin's favorite relative? Aunt Arctica! ❄️",
    "Why don't penguins fly? They're not into the cheep seats! ✈️",
    "What do you call a penguin in the desert? Lost! 🌵",
    "How do penguins drink? Out of beak-ers! 🥤",
    "What's black, white, and red all over? A sunburned penguin! ☀️",
    "Why are penguins good race drivers? They're always in pole position! 🏎️",
    "What do penguins sing on birthdays? Freeze a jolly good fellow! 🎂",
    "Where do penguins go to the movies? The dive-in! 🎬",
    "What's a penguin's favorite salad? Iceberg lettuce! 🥗",
    "Why did the penguin cross the road? To go with the floe! 🚶",
    "What do you call fifty penguins in the Arctic? Really lost! 🧭",
    "How do penguins pass exams? They just wing it! 📝",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriviaChoice {
    A,
    B,
    C,
}

impl TriviaChoice {
    pub const ALL: [TriviaChoice; 3] = [TriviaChoice::A, TriviaChoice::B, TriviaChoice::C];

    pub fn letter(self) -> char {
        match self {
            TriviaChoice::A => 'A',
            TriviaChoice::B => 'B',
            TriviaChoice::C => 'C',
        }
    }

    /// Parses an already-normalized command token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "A" => Some(TriviaChoice::A),
            "B" => Some(TriviaChoice::B),
            "C" => Some(TriviaChoice::C),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            TriviaChoice::A => 0,
            TriviaChoice::B => 1,
            TriviaChoice::C => 2,
        }
    }
}

#[derive(Debug)]
pub struct TriviaQuestion {
    pub prompt: &'static str,
    pub choices: [&'static str; 3],
    pub answer: TriviaChoice,
    pub fact: &'static str,
}

impl TriviaQuestion {
    pub fn choice_text(&self, choice: TriviaChoice) -> &'static str {
        self.choices[choice.index()]
    }
}

pub const TRIVIA_QUESTIONS: &[TriviaQuestion] = &[
    TriviaQuestion {
        prompt: "Which penguin is the tallest?",
        choices: ["King penguin", "Emperor penguin", "Gentoo penguin"],
        answer: TriviaChoice::B,
        fact: "Emperor penguins stand up to 45 inches tall and weigh up to 88 pounds!",
    },
    TriviaQuestion {
        prompt: "What is a group of penguins in the water called?",
        choices: ["A raft", "A waddle", "A huddle"],
        answer: TriviaChoice::A,
        fact: "On land they're a waddle, but bobbing in the sea they're a raft!",
    },
    TriviaQuestion {
        prompt: "Which penguin is the fastest swimmer?",
        choices: ["Adelie", "Macaroni", "Gentoo"],
        answer: TriviaChoice::C,
        fact: "Gentoo penguins can reach about 22 mph underwater!",
    },
    TriviaQuestion {
        prompt: "Where do most penguins live?",
        choices: ["The Arctic", "The Southern Hemisphere", "Europe"],
        answer: TriviaChoice::B,
        fact: "Almost all penguins live south of the equator. None live in the Arctic!",
    },
    TriviaQuestion {
        prompt: "Which penguin is the smallest?",
        choices: ["Little blue penguin", "Rockhopper penguin", "Chinstrap penguin"],
        answer: TriviaChoice::A,
        fact: "Little blue penguins are only about 13-16 inches tall!",
    },
    TriviaQuestion {
        prompt: "Who keeps emperor penguin eggs warm through winter?",
        choices: ["The mom", "The whole colony", "The dad"],
        answer: TriviaChoice::C,
        fact: "Emperor dads balance the egg on their feet for about 2 months without eating!",
    },
    TriviaQuestion {
        prompt: "What do Adelie penguins build their nests from?",
        choices: ["Seaweed", "Stones", "Feathers"],
        answer: TriviaChoice::B,
        fact: "Adelie penguins gather pebbles, and sometimes steal them from neighbors!",
    },
    TriviaQuestion {
        prompt: "How long can an emperor penguin hold its breath?",
        choices: ["About 2 minutes", "About 8 minutes", "Over 20 minutes"],
        answer: TriviaChoice::C,
        fact: "Emperor penguins have been recorded diving for over 20 minutes!",
    },
    TriviaQuestion {
        prompt: "Which penguin lives the farthest north?",
        choices: ["Galapagos penguin", "Emperor penguin", "King penguin"],
        answer: TriviaChoice::A,
        fact: "Some Galapagos penguins live just north of the equator!",
    },
    TriviaQuestion {
        prompt: "Why are penguins black and white?",
        choices: ["To stay cool", "Camouflage while swimming", "To look fancy"],
        answer: TriviaChoice::B,
        fact: "Dark backs blend with the deep sea from above, white bellies with the bright surface from below!",
    },
    TriviaQuestion {
        prompt: "Which penguin has bright yellow head feathers?",
        choices: ["Gentoo", "Adelie", "Macaroni"],
        answer: TriviaChoice::C,
        fact: "Macaroni penguins were named after a flashy 18th-century fashion style!",
    },
    TriviaQuestion {
        prompt: "How do penguins get rid of extra salt?",
        choices: ["A gland above their eyes", "They sneeze it out of their feet", "They never drink seawater"],
        answer: TriviaChoice::A,
        fact: "A supraorbital gland filters salt, which drips out through their beaks!",
    },
];

#[derive(Debug)]
pub struct SpecialDay {
    pub key: &'static str,
    pub emoji: &'static str,
    pub greeting: &'static str,
}

pub const SPECIAL_DAYS: &[SpecialDay] = &[
    SpecialDay {
        key: "01-01",
        emoji: "🎆",
        greeting: "Happy New Year from Larry & Steve! A fresh year of waddles begins!",
    },
    SpecialDay {
        key: "01-20",
        emoji: "🐧",
        greeting: "Happy Penguin Awareness Day from Larry & Steve! Spread the waddle!",
    },
    SpecialDay {
        key: "02-14",
        emoji: "💕",
        greeting: "Happy Valentine's Day from Larry & Steve! Penguins mate for life!",
    },
    SpecialDay {
        key: "04-25",
        emoji: "🌍",
        greeting: "Happy World Penguin Day from Larry & Steve! Today is OUR day!",
    },
    SpecialDay {
        key: "10-31",
        emoji: "🎃",
        greeting: "Happy Halloween from Larry & Steve! We came dressed in tuxedos!",
    },
    SpecialDay {
        key: "12-25",
        emoji: "🎄",
        greeting: "Merry Christmas from Larry & Steve! Snow is our favorite gift!",
    },
    SpecialDay {
        key: "12-31",
        emoji: "🥂",
        greeting: "Happy New Year's Eve from Larry & Steve! One last slide into the new year!",
    },
];

pub const MILESTONES: &[(u32, &str)] = &[
    (1, "The adventure begins! Larry & Steve say hello!"),
    (7, "ONE WEEK of Larry & Steve! The waddle is strong!"),
    (14, "TWO WEEKS of penguin greetings!"),
    (30, "ONE MONTH of Larry & Steve! Time for a fish feast!"),
    (50, "FIFTY days of waddles!"),
    (100, "ONE HUNDRED DAYS! Larry & Steve are doing belly slides of joy!"),
    (150, "150 days and still swimming strong!"),
    (200, "TWO HUNDRED days of penguin wisdom!"),
    (250, "250 days! The colony is proud!"),
    (300, "THREE HUNDRED days of Larry & Steve!"),
    (365, "ONE FULL YEAR of Larry & Steve! Happy penguin anniversary!"),
    (500, "FIVE HUNDRED days! Legendary waddlers!"),
    (1000, "ONE THOUSAND DAYS of Larry & Steve! Emperor status achieved!"),
];

pub fn special_day(key: &str) -> Option<&'static SpecialDay> {
    SPECIAL_DAYS.iter().find(|day| day.key == key)
}

pub fn milestone(streak: u32) -> Option<&'static str> {
    MILESTONES
        .iter()
        .find(|(day, _)| *day == streak)
        .map(|(_, text)| *text)
}

/// Uniform index source for FACT/JOKE/WISDOM replies.
pub trait RandomSource {
    /// Returns an index in `[0, len)`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

pub fn random_item<'a>(items: &[&'a str], rng: &mut impl RandomSource) -> &'a str {
    if items.is_empty() {
        return "";
    }
    items[rng.pick_index(items.len()).min(items.len() - 1)]
}
