//! Example queries: rotating placeholder text and quick-search shortcuts

use iced::time;
use iced::Subscription;
use std::time::Duration;

/// Query preloaded into the search box at startup
pub const INITIAL_QUERY: &str = "spanish speaking therapist for anxiety and college stress";

pub const EXAMPLE_QUERIES: [&str; 5] = [
    "spanish speaking therapist for anxiety and college stress",
    "couples counselor with evening hours",
    "child psychologist for ADHD therapy",
    "trauma therapist accepting insurance",
    "online therapy for depression",
];

/// How often the placeholder changes while the search box is empty and unfocused
pub const ROTATE_EVERY: Duration = Duration::from_secs(4);

/// Cycles through [`EXAMPLE_QUERIES`]
#[derive(Debug, Clone, Default)]
pub struct Placeholder {
    index: usize,
}

impl Placeholder {
    pub fn current(&self) -> &'static str {
        EXAMPLE_QUERIES[self.index]
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % EXAMPLE_QUERIES.len();
    }

    /// Rotate only while the box is empty and not being typed into.
    /// Returns whether the text changed.
    pub fn tick(&mut self, query_empty: bool, input_focused: bool) -> bool {
        if query_empty && !input_focused {
            self.advance();
            return true;
        }
        false
    }
}

/// Tick event for rotation
#[derive(Debug, Clone)]
pub struct PlaceholderTick;

pub fn rotation_subscription() -> Subscription<PlaceholderTick> {
    time::every(ROTATE_EVERY).map(|_| PlaceholderTick)
}
