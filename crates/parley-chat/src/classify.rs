//! Keyword-based category classifier for offline replies.
//!
//! Maps raw user text to one of a fixed set of intent categories via an
//! ordered list of regex tests. First match wins; the order is load-bearing
//! because a message can match several patterns ("thanks for the weather
//! info" is thanks, not weather).

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Intent category of a user message, used to select a canned-response pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Greeting,
    Help,
    Thanks,
    Weather,
    Time,
    Name,
    Capabilities,
    /// No pattern matched.
    Default,
}

impl Category {
    /// Category name as a static string, for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Greeting => "greeting",
            Category::Help => "help",
            Category::Thanks => "thanks",
            Category::Weather => "weather",
            Category::Time => "time",
            Category::Name => "name",
            Category::Capabilities => "capabilities",
            Category::Default => "default",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Rules are evaluated top to bottom against the lowercased input.
// Greeting is anchored to the start of the message; the rest match anywhere.
static RULES: LazyLock<Vec<(Category, Regex)>> = LazyLock::new(|| {
    let mk = |pat: &str| Regex::new(pat).expect("invalid category regex");
    vec![
        (
            Category::Greeting,
            mk(r"^(hi|hello|hey|greetings|good\s*(morning|afternoon|evening))"),
        ),
        (Category::Help, mk(r"help|assist|what can you do|how do you work")),
        (Category::Thanks, mk(r"thank|thanks|appreciate")),
        (
            Category::Weather,
            mk(r"weather|forecast|temperature|rain|sunny|cloudy"),
        ),
        (Category::Time, mk(r"time|what.*time|current.*time")),
        (Category::Name, mk(r"your name|who are you|what are you")),
        (
            Category::Capabilities,
            mk(r"what can you|capabilities|features|abilities"),
        ),
    ]
});

/// Classify raw user text into a [`Category`].
///
/// Total and deterministic: always returns exactly one category, never
/// panics. Input is lowercased before matching.
pub fn classify(text: &str) -> Category {
    let lower = text.to_lowercase();
    for (category, re) in RULES.iter() {
        if re.is_match(&lower) {
            return *category;
        }
    }
    Category::Default
}

// =============================================================================
// Tests
// =============================================================================
