//! Built-in offline content.

use rand::seq::SliceRandom;

use super::document::Quote;

pub const DEFAULT_AFFIRMATIONS: [&str; 7] = [
    "I can take the next right step, even if I cannot see the whole path.",
    "My discipline is a form of self-respect.",
    "Progress counts, especially when it is small and consistent.",
    "I choose actions today that future-me will thank me for.",
    "I am capable of learning what I need to learn.",
    "I do not need perfect conditions to begin.",
    "I can do hard things, one focused block at a time.",
];

/// (text, author)
pub const BUILTIN_QUOTES: [(&str, &str); 8] = [
    (
        "We are what we repeatedly do. Excellence, then, is not an act, but a habit.",
        "Often attributed to Aristotle",
    ),
    (
        "You do not rise to the level of your goals. You fall to the level of your systems.",
        "James Clear",
    ),
    ("It always seems impossible until it is done.", "Nelson Mandela"),
    (
        "If you can\u{2019}t yet do great things, do small things in a great way.",
        "Napoleon Hill",
    ),
    ("Action is the foundational key to all success.", "Pablo Picasso"),
    ("The secret of getting ahead is getting started.", "Mark Twain"),
    (
        "Discipline is choosing between what you want now and what you want most.",
        "Often attributed to Abraham Lincoln",
    ),
    ("Slow is smooth. Smooth is fast.", "Proverb"),
];

pub fn builtin_quote(index: usize) -> Option<Quote> {
    BUILTIN_QUOTES.get(index).map(|(text, author)| Quote {
        text: text.to_string(),
        author: author.to_string(),
    })
}

pub fn builtin_quotes() -> Vec<Quote> {
    (0..BUILTIN_QUOTES.len()).filter_map(builtin_quote).collect()
}

pub fn random_quote() -> Quote {
    let (text, author) = BUILTIN_QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(BUILTIN_QUOTES[0]);
    Quote {
        text: text.to_string(),
        author: author.to_string(),
    }
}
