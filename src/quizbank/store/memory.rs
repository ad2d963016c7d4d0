use super::QuestionStore;
use crate::error::Result;
use crate::model::{Question, QuestionTable};

/// In-memory storage for testing and development.
/// Does NOT persist data, but keeps the same memoize/invalidate contract
/// as the file store so cache behavior is testable without a filesystem.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Vec<Question>,
    cache: Option<QuestionTable>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Question>) -> Self {
        Self {
            saved: rows,
            cache: None,
        }
    }

    /// The rows as last saved, bypassing the cache.
    pub fn persisted(&self) -> &[Question] {
        &self.saved
    }
}

impl QuestionStore for InMemoryStore {
    fn load(&mut self) -> Result<QuestionTable> {
        if let Some(table) = &self.cache {
            return Ok(table.clone());
        }
        let table = QuestionTable::from_rows(self.saved.clone());
        self.cache = Some(table.clone());
        Ok(table)
    }

    fn save(&mut self, table: &QuestionTable) -> Result<()> {
        self.saved = table.rows().cloned().collect();
        self.cache = None;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn question(track: &str, text: &str, options: [&str; 4], correct: &str) -> Question {
        Question {
            track: track.to_string(),
            question: text.to_string(),
            option1: options[0].to_string(),
            option2: options[1].to_string(),
            option3: options[2].to_string(),
            option4: options[3].to_string(),
            correct_answer: correct.to_string(),
            mark: 1.0,
            time_seconds: 30,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_question(mut self, track: &str, text: &str) -> Self {
            self.store
                .saved
                .push(question(track, text, ["yes", "no", "", ""], "yes"));
            self.store.cache = None;
            self
        }

        pub fn with_row(mut self, row: Question) -> Self {
            self.store.saved.push(row);
            self.store.cache = None;
            self
        }
    }
}
