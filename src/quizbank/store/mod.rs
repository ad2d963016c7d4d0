//! # Storage Layer
//!
//! The [`QuestionStore`] trait abstracts where the question table lives so
//! business logic never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::CsvFileStore`]: production store over a single CSV file. The
//!   whole table is rewritten on every save; loads are memoized until the
//!   next save.
//! - [`memory::InMemoryStore`]: in-memory store for tests, with the same
//!   memoize-then-invalidate contract.
//!
//! ## Caching contract
//!
//! `load` returns the memoized snapshot when one exists. `save` persists the
//! full table and then clears the memo, so the next `load` re-reads and
//! mints fresh record ids. The invalidation is unconditional and happens
//! exactly once per successful write.

use crate::error::Result;
use crate::model::QuestionTable;

pub mod fs;
pub mod memory;

/// Abstract interface for question-table storage.
///
/// The table is read and written whole: there is no per-row access at this
/// layer, and no delete operation exists anywhere in the system.
pub trait QuestionStore {
    /// The full current table. Missing backing storage yields an empty
    /// table; unparseable backing storage is a fatal error.
    fn load(&mut self) -> Result<QuestionTable>;

    /// Persist the entire table, replacing whatever was there, then
    /// invalidate the memoized load result.
    fn save(&mut self, table: &QuestionTable) -> Result<()>;
}
