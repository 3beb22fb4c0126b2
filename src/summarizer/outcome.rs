// Result slot for the summarizer
//
// Success and failure live in separate variants so the UI can style them
// differently. The failure display string keeps the familiar prefix.

/// Prefix shown in front of engine error messages
pub const ERROR_PREFIX: &str = "Error during summarization";

/// Outcome of the most recent resolved summarization request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// Nothing has resolved yet
    #[default]
    Empty,
    /// The engine produced a summary
    Success(String),
    /// The engine failed with a recognized error message
    Failure(String),
}

impl SummaryOutcome {
    /// Text shown in the result panel, `None` when there is nothing to show
    pub fn display_text(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Success(text) if text.is_empty() => None,
            Self::Success(text) => Some(text.clone()),
            Self::Failure(message) => Some(format!("{}: {}", ERROR_PREFIX, message)),
        }
    }

    /// Whether the result panel has anything to display (and copy)
    pub fn has_content(&self) -> bool {
        self.display_text().is_some()
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}
