//! # API Facade
//!
//! The single entry point for all quizbank operations, regardless of UI.
//! Dispatches to the command layer and returns structured `CmdResult`
//! values; never prints, never exits.
//!
//! Generic over [`QuestionStore`] so the same facade runs on the CSV file
//! store in production and the in-memory store in tests.

use crate::commands;
use crate::error::Result;
use crate::form::{FormDefaults, FormPatch};
use crate::store::QuestionStore;
use std::path::PathBuf;

pub struct QuizApi<S: QuestionStore> {
    store: S,
    defaults: FormDefaults,
    config_dir: PathBuf,
}

impl<S: QuestionStore> QuizApi<S> {
    pub fn new(store: S, defaults: FormDefaults, config_dir: PathBuf) -> Self {
        Self {
            store,
            defaults,
            config_dir,
        }
    }

    pub fn add_question(&mut self, patch: FormPatch) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, self.defaults.clone(), patch)
    }

    /// `index` is the 1-based display index printed by `list`/`search`.
    pub fn edit_question(&mut self, index: usize, patch: FormPatch) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, index, patch)
    }

    pub fn search_questions(&mut self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&mut self.store, term)
    }

    pub fn list_questions(&mut self) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.store)
    }

    pub fn report(&mut self) -> Result<commands::CmdResult> {
        commands::report::run(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ListedQuestion, MessageLevel, SearchOutcome};
