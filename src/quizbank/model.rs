use crate::error::{QuizError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the question table, mapping 1:1 to the CSV columns.
///
/// Field order is the on-disk column order. The serde renames keep the
/// header row byte-compatible with the legacy dashboard export:
/// `track,question,option1,option2,option3,option4,correctAnswer,mark,time(seconds)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub track: String,
    pub question: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
    pub mark: f64,
    #[serde(rename = "time(seconds)")]
    pub time_seconds: u32,
}

impl Question {
    /// Column names in on-disk order. Written explicitly when the table is
    /// empty, since the csv writer only emits headers alongside a record.
    pub const HEADERS: [&'static str; 9] = [
        "track",
        "question",
        "option1",
        "option2",
        "option3",
        "option4",
        "correctAnswer",
        "mark",
        "time(seconds)",
    ];

    /// All four option slots, empty or not.
    pub fn options(&self) -> [&str; 4] {
        [&self.option1, &self.option2, &self.option3, &self.option4]
    }

    /// The non-empty options in slot order. This is the set a correct
    /// answer must belong to.
    pub fn choices(&self) -> Vec<&str> {
        self.options().into_iter().filter(|o| !o.is_empty()).collect()
    }
}

/// A question plus its in-memory identity.
///
/// Ids are minted at load/creation time and are never persisted; they are
/// stable for exactly one loaded snapshot, which is the lifetime edits need.
#[derive(Debug, Clone)]
pub struct QuestionRecord {
    pub id: Uuid,
    pub question: Question,
}

impl QuestionRecord {
    pub fn new(question: Question) -> Self {
        Self {
            id: Uuid::new_v4(),
            question,
        }
    }
}

/// The full in-memory question table. Ordered; row order is file order.
#[derive(Debug, Clone, Default)]
pub struct QuestionTable {
    records: Vec<QuestionRecord>,
}

impl QuestionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Question>) -> Self {
        Self {
            records: rows.into_iter().map(QuestionRecord::new).collect(),
        }
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn rows(&self) -> impl Iterator<Item = &Question> {
        self.records.iter().map(|r| &r.question)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&QuestionRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Record at a 0-based position, if any.
    pub fn by_position(&self, position: usize) -> Option<&QuestionRecord> {
        self.records.get(position)
    }

    /// Append a new row at the end of the table, returning its id.
    pub fn push(&mut self, question: Question) -> Uuid {
        let record = QuestionRecord::new(question);
        let id = record.id;
        self.records.push(record);
        id
    }

    /// Overwrite the row with the given id in place.
    pub fn replace(&mut self, id: Uuid, question: Question) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(QuizError::QuestionNotFound(id))?;
        record.question = question;
        Ok(())
    }

    /// Unique track labels in first-seen order.
    pub fn tracks(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.question.track) {
                seen.push(record.question.track.clone());
            }
        }
        seen
    }
}
