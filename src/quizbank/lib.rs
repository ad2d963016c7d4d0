//! # Quizbank Architecture
//!
//! Quizbank is a **UI-agnostic question-bank library**. The CLI binary is one
//! client of the library, not the other way around, and the layering below is
//! what keeps it that way.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                                │
//! │  - Parses arguments, renders tables/charts, colors messages │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                          │
//! │  - Thin facade over commands                                 │
//! │  - Normalizes inputs (display indexes → record ids)          │
//! │  - Returns structured Result types                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, form.rs)                      │
//! │  - Pure business logic, no I/O assumptions                   │
//! │  - form.rs owns the add/edit workflow and validation         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                      │
//! │  - Abstract QuestionStore trait                              │
//! │  - CsvFileStore (production), InMemoryStore (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Record identity
//!
//! Rows in the backing CSV have no persisted key. Each loaded snapshot mints
//! a `Uuid` per record, and everything above the store resolves edit targets
//! by that id. Ids live exactly as long as one snapshot: any save invalidates
//! the store's cache and the next load mints fresh ids. The CLI maps 1-based
//! display indexes (as printed by `list` and `search`) to ids against a fresh
//! load, so users never handle uuids directly.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`form`]: The add/edit form controller and its validation rules
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Question`, `QuestionRecord`, `QuestionTable`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod store;
