use std::fmt::Display;

/// Separator between a gift name and its reason
pub const REASON_SEPARATOR: char = '—';

/// One ranked line of the final recommendation list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub rank: usize,
    pub text: String,
}

impl Suggestion {
    /// Builds a ranked suggestion, appending a generic reason when `text`
    /// has no separator.
    pub fn new(rank: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let text = if text.contains(REASON_SEPARATOR) {
            text
        } else {
            format!("{} {} good choice", text, REASON_SEPARATOR)
        };
        Self { rank, text }
    }
}

impl Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.rank, self.text)
    }
}

/// Where the final list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionSource {
    Model,
    Fallback,
}

impl Display for SuggestionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionSource::Model => write!(f, "model"),
            SuggestionSource::Fallback => write!(f, "fallback"),
        }
    }
}
