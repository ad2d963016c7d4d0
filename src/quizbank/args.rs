use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quizbank")]
#[command(about = "CSV-backed admin tool for a multiple-choice question bank", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the question CSV file (overrides the configured path)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Track (category) label
    #[arg(long)]
    pub track: Option<String>,

    /// Question text
    #[arg(long)]
    pub question: Option<String>,

    /// Option 1 (required together with option 2 for a valid question)
    #[arg(long)]
    pub option1: Option<String>,

    /// Option 2
    #[arg(long)]
    pub option2: Option<String>,

    /// Option 3 (pass an empty string to clear)
    #[arg(long)]
    pub option3: Option<String>,

    /// Option 4 (pass an empty string to clear)
    #[arg(long)]
    pub option4: Option<String>,

    /// Correct answer; must match one of the non-empty options
    #[arg(long)]
    pub correct: Option<String>,

    /// Score weight (non-negative)
    #[arg(long)]
    pub mark: Option<f64>,

    /// Time allotment in seconds
    #[arg(long)]
    pub time: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new question
    #[command(alias = "a")]
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Search questions by keyword (matches question text, case-insensitive)
    #[command(alias = "s")]
    Search {
        /// Keyword to look for
        term: String,
    },

    /// Edit the question at a display index; omitted fields keep their values
    #[command(alias = "e")]
    Edit {
        /// 1-based index as printed by list/search
        index: usize,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// List all questions
    #[command(alias = "ls")]
    List,

    /// Show question counts per track and the time/mark scatter
    Report,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, default-track)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
