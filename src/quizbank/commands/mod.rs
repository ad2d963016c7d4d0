use crate::config::QuizConfig;
use crate::model::Question;
use uuid::Uuid;

pub mod add;
pub mod config;
pub mod edit;
pub mod list;
pub mod report;
pub mod search;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A question paired with its 1-based display index, as shown by `list`
/// and `search` and accepted by `edit`.
#[derive(Debug, Clone)]
pub struct ListedQuestion {
    pub index: usize,
    pub id: Uuid,
    pub question: Question,
}

/// Outcome of a search. "Nothing searched" and "nothing found" are
/// distinct states, not an empty list wearing two hats.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    NotSearched,
    NoMatches,
    Matches(Vec<ListedQuestion>),
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Question>,
    pub listed: Vec<ListedQuestion>,
    pub search: Option<SearchOutcome>,
    pub summary: Option<report::TrackSummary>,
    pub config: Option<QuizConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, listed: Vec<ListedQuestion>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_search(mut self, outcome: SearchOutcome) -> Self {
        self.search = Some(outcome);
        self
    }

    pub fn with_summary(mut self, summary: report::TrackSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_config(mut self, config: QuizConfig) -> Self {
        self.config = Some(config);
        self
    }
}
