//! The question form controller: the add/edit workflow from field values to
//! a persisted row.
//!
//! A [`QuestionForm`] starts in ADD mode, or in EDIT mode when built from an
//! existing record (carrying that record's id). Field values live in an
//! explicit [`FormSeed`] value rather than ambient session state, so a UI
//! renders exactly what the seed says. A successful submit persists through
//! the store and resets the form to ADD with a fresh default seed; a
//! validation failure changes nothing.

use crate::error::{QuizError, Result};
use crate::model::{Question, QuestionRecord};
use crate::store::QuestionStore;
use log::debug;
use uuid::Uuid;

pub const DEFAULT_MARK: f64 = 1.0;
pub const DEFAULT_TIME_SECONDS: u32 = 30;

/// Seed values a fresh ADD-mode form starts from.
#[derive(Debug, Clone)]
pub struct FormDefaults {
    pub track: String,
    pub mark: f64,
    pub time_seconds: u32,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            track: "General".to_string(),
            mark: DEFAULT_MARK,
            time_seconds: DEFAULT_TIME_SECONDS,
        }
    }
}

/// The current field values of the form. In EDIT mode this is pre-filled
/// from the selected record; in ADD mode it starts from the defaults.
#[derive(Debug, Clone)]
pub struct FormSeed {
    pub track: String,
    pub question: String,
    pub options: [String; 4],
    pub correct_answer: String,
    pub mark: f64,
    pub time_seconds: u32,
}

impl FormSeed {
    fn from_defaults(defaults: &FormDefaults) -> Self {
        Self {
            track: defaults.track.clone(),
            question: String::new(),
            options: Default::default(),
            correct_answer: String::new(),
            mark: defaults.mark,
            time_seconds: defaults.time_seconds,
        }
    }

    fn from_question(question: &Question) -> Self {
        Self {
            track: question.track.clone(),
            question: question.question.clone(),
            options: question.options().map(str::to_string),
            correct_answer: question.correct_answer.clone(),
            mark: question.mark,
            time_seconds: question.time_seconds,
        }
    }
}

/// Explicit field updates to merge over the seed. Unset fields keep the
/// pre-filled values, which is what makes partial edits work.
#[derive(Debug, Clone, Default)]
pub struct FormPatch {
    pub track: Option<String>,
    pub question: Option<String>,
    pub option1: Option<String>,
    pub option2: Option<String>,
    pub option3: Option<String>,
    pub option4: Option<String>,
    pub correct_answer: Option<String>,
    pub mark: Option<f64>,
    pub time_seconds: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit { id: Uuid },
}

pub struct QuestionForm {
    mode: FormMode,
    seed: FormSeed,
    defaults: FormDefaults,
    // An explicit correct-answer choice must be validated against the
    // current options; a pre-filled one that went stale falls back instead.
    correct_is_explicit: bool,
}

impl QuestionForm {
    pub fn add(defaults: FormDefaults) -> Self {
        let seed = FormSeed::from_defaults(&defaults);
        Self {
            mode: FormMode::Add,
            seed,
            defaults,
            correct_is_explicit: false,
        }
    }

    pub fn edit(record: &QuestionRecord) -> Self {
        Self {
            mode: FormMode::Edit { id: record.id },
            seed: FormSeed::from_question(&record.question),
            defaults: FormDefaults::default(),
            correct_is_explicit: false,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn seed(&self) -> &FormSeed {
        &self.seed
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    /// The choice set offered for the correct answer: exactly the non-empty
    /// options of the current seed.
    pub fn choices(&self) -> Vec<&str> {
        self.seed
            .options
            .iter()
            .filter(|o| !o.is_empty())
            .map(String::as_str)
            .collect()
    }

    /// The correct-answer selection: the seeded answer when it is still
    /// among the choices, otherwise the first available choice.
    pub fn selected_choice(&self) -> Option<&str> {
        let choices = self.choices();
        if !self.seed.correct_answer.is_empty()
            && choices.iter().any(|c| *c == self.seed.correct_answer)
        {
            return Some(self.seed.correct_answer.as_str());
        }
        choices.first().copied()
    }

    /// Merge explicit field updates over the current seed.
    pub fn apply(&mut self, patch: FormPatch) {
        if let Some(track) = patch.track {
            self.seed.track = track;
        }
        if let Some(question) = patch.question {
            self.seed.question = question;
        }
        if let Some(opt) = patch.option1 {
            self.seed.options[0] = opt;
        }
        if let Some(opt) = patch.option2 {
            self.seed.options[1] = opt;
        }
        if let Some(opt) = patch.option3 {
            self.seed.options[2] = opt;
        }
        if let Some(opt) = patch.option4 {
            self.seed.options[3] = opt;
        }
        if let Some(correct) = patch.correct_answer {
            self.seed.correct_answer = correct;
            self.correct_is_explicit = true;
        }
        if let Some(mark) = patch.mark {
            self.seed.mark = mark;
        }
        if let Some(time) = patch.time_seconds {
            self.seed.time_seconds = time;
        }
    }

    /// Build the candidate row from the current seed, or a validation error.
    fn candidate(&self) -> Result<Question> {
        if self.seed.question.trim().is_empty() {
            return Err(QuizError::Validation(
                "question text is required".to_string(),
            ));
        }
        let choices = self.choices();
        if choices.len() < 2 {
            return Err(QuizError::Validation(
                "at least two non-empty options are required".to_string(),
            ));
        }
        if self.seed.mark.is_nan() || self.seed.mark < 0.0 {
            return Err(QuizError::Validation(
                "mark must be a non-negative number".to_string(),
            ));
        }
        if self.seed.time_seconds == 0 {
            return Err(QuizError::Validation(
                "time must be at least one second".to_string(),
            ));
        }

        let correct_answer = if self.correct_is_explicit {
            if !choices.iter().any(|c| *c == self.seed.correct_answer) {
                return Err(QuizError::Validation(format!(
                    "correct answer {:?} is not one of the options",
                    self.seed.correct_answer
                )));
            }
            self.seed.correct_answer.clone()
        } else {
            let selected = self
                .selected_choice()
                .ok_or_else(|| QuizError::Validation("no options available".to_string()))?;
            if !self.seed.correct_answer.is_empty() && selected != self.seed.correct_answer {
                debug!(
                    "stored correct answer {:?} no longer among options, falling back to {:?}",
                    self.seed.correct_answer, selected
                );
            }
            selected.to_string()
        };

        let track = if self.seed.track.is_empty() {
            self.defaults.track.clone()
        } else {
            self.seed.track.clone()
        };

        Ok(Question {
            track,
            question: self.seed.question.clone(),
            option1: self.seed.options[0].clone(),
            option2: self.seed.options[1].clone(),
            option3: self.seed.options[2].clone(),
            option4: self.seed.options[3].clone(),
            correct_answer,
            mark: self.seed.mark,
            time_seconds: self.seed.time_seconds,
        })
    }

    /// Commit the form: validate, append (ADD) or overwrite in place (EDIT),
    /// persist the whole table, then reset to ADD with a fresh seed.
    ///
    /// On a validation error nothing changes: not the store, not the mode,
    /// not the seed. The caller may fix the fields and resubmit.
    pub fn submit<S: QuestionStore>(&mut self, store: &mut S) -> Result<Question> {
        let row = self.candidate()?;

        let mut table = store.load()?;
        match self.mode {
            FormMode::Edit { id } => table.replace(id, row.clone())?,
            FormMode::Add => {
                table.push(row.clone());
            }
        }
        store.save(&table)?;

        self.mode = FormMode::Add;
        self.seed = FormSeed::from_defaults(&self.defaults);
        self.correct_is_explicit = false;
        Ok(row)
    }
}
