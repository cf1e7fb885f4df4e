//! Canned-response pools for offline resolution.
//!
//! One non-empty ordered pool per category. Pool entries are templates; the
//! only substitution is `{time}`, rendered from the local clock at selection
//! time so the time category can answer with the current time.

use chrono::Local;

use crate::classify::Category;

static GREETING: &[&str] = &[
    "Hello! How can I assist you today?",
    "Hi there! I'm here to help. What can I do for you?",
    "Greetings! What would you like to know?",
];

static HELP: &[&str] = &[
    "I'm your personal assistant and I can help you with various tasks. You can ask me questions, get information, or just have a conversation. What would you like to explore?",
    "I'm here to assist you! Feel free to ask me anything - I can help with information, answer questions, or provide guidance on various topics.",
];

static THANKS: &[&str] = &[
    "You're welcome! Is there anything else I can help you with?",
    "Happy to help! Let me know if you need anything else.",
    "My pleasure! Feel free to ask if you have more questions.",
];

static WEATHER: &[&str] = &[
    "I don't have access to real-time weather data yet, but once I'm connected to a weather service, I'll be able to give you accurate forecasts. Is there anything else I can help with?",
    "Weather information isn't available in my current setup, but this feature will be added soon. What else can I assist you with?",
];

static TIME: &[&str] = &[
    "Based on your device, the current time appears to be {time}. Is there anything else you'd like to know?",
    "It looks like it's {time} according to your system. How else can I help?",
];

static NAME: &[&str] = &[
    "I'm your Personal Assistant, designed to help you with various tasks and questions. You can call me PA if you'd like!",
    "I go by Personal Assistant. I'm here to make your life easier by answering questions and helping with tasks.",
];

static CAPABILITIES: &[&str] = &[
    "I'm a chat interface designed to assist you with various queries. Currently, I'm running in demo mode with simulated responses. Once connected to a backend, I'll be able to provide much more comprehensive assistance!",
    "Right now, I'm demonstrating the chat interface capabilities. In the full version, I'll be able to help with a wide range of tasks, from answering questions to providing personalized recommendations.",
];

static DEFAULT: &[&str] = &[
    "That's an interesting question! Once I'm fully connected to the backend services, I'll be able to provide more detailed and accurate responses. Is there anything specific I can help clarify?",
    "I appreciate your message. In the full implementation, I'll have access to more resources to give you comprehensive answers. What else would you like to explore?",
    "Thanks for reaching out! While I'm currently in demo mode, I'm designed to handle a wide variety of questions and tasks. Feel free to ask anything!",
    "I'm here to help! Although I'm running with simulated responses right now, the full version will provide much more detailed assistance. What else can I do for you?",
];

/// Static table of canned responses, one pool per category.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseCatalog;

impl ResponseCatalog {
    /// The response pool for a category. Never empty.
    pub fn pool(category: Category) -> &'static [&'static str] {
        match category {
            Category::Greeting => GREETING,
            Category::Help => HELP,
            Category::Thanks => THANKS,
            Category::Weather => WEATHER,
            Category::Time => TIME,
            Category::Name => NAME,
            Category::Capabilities => CAPABILITIES,
            Category::Default => DEFAULT,
        }
    }

    /// Render the pool entry at `index`, substituting the `{time}`
    /// placeholder with the current local time.
    ///
    /// `index` is taken modulo the pool length so any index is valid.
    pub fn render(category: Category, index: usize) -> String {
        let pool = Self::pool(category);
        let template = pool[index % pool.len()];
        if template.contains("{time}") {
            let now = Local::now().format("%H:%M:%S").to_string();
            template.replace("{time}", &now)
        } else {
            template.to_string()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[Category] = &[
        Category::Greeting,
        Category::Help,
        Category::Thanks,
        Category::Weather,
        Category::Time,
        Category::Name,
        Category::Capabilities,
        Category::Default,
    ];

    // ---- Pool shape ----

    #[test]
    fn test_all_pools_non_empty() {
        for &category in ALL {
            assert!(
                !ResponseCatalog::pool(category).is_empty(),
                "pool for {} must not be empty",
                category
            );
        }
    }

    #[test]
    fn test_greeting_pool_has_three_entries() {
        assert_eq!(ResponseCatalog::pool(Category::Greeting).len(), 3);
    }

    // ---- Rendering ----

    #[test]
    fn test_render_returns_pool_entry() {
        let rendered = ResponseCatalog::render(Category::Greeting, 0);
        assert_eq!(rendered, "Hello! How can I assist you today?");
    }

    #[test]
    fn test_render_index_wraps() {
        let pool_len = ResponseCatalog::pool(Category::Thanks).len();
        let direct = ResponseCatalog::render(Category::Thanks, 1);
        let wrapped = ResponseCatalog::render(Category::Thanks, 1 + pool_len);
        assert_eq!(direct, wrapped);
    }

    #[test]
    fn test_render_substitutes_time_placeholder() {
        let rendered = ResponseCatalog::render(Category::Time, 0);
        assert!(!rendered.contains("{time}"));
        // HH:MM:SS leaves two colons behind.
        assert_eq!(rendered.matches(':').count(), 2);
    }

    #[test]
    fn test_render_leaves_plain_templates_untouched() {
        for &category in ALL {
            if category == Category::Time {
                continue;
            }
            let pool = ResponseCatalog::pool(category);
            for (i, entry) in pool.iter().enumerate() {
                assert_eq!(ResponseCatalog::render(category, i), *entry);
            }
        }
    }
}
