use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use env_logger::Env;
use quizbank::api::{CmdMessage, ConfigAction, ListedQuestion, MessageLevel, QuizApi, SearchOutcome};
use quizbank::commands::report::TrackSummary;
use quizbank::config::QuizConfig;
use quizbank::error::Result;
use quizbank::form::FormPatch;
use quizbank::store::fs::CsvFileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, FieldArgs};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: QuizApi<CsvFileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level.clone())).init();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { fields }) => handle_add(&mut ctx, fields),
        Some(Commands::Search { term }) => handle_search(&mut ctx, term),
        Some(Commands::Edit { index, fields }) => handle_edit(&mut ctx, index, fields),
        Some(Commands::List) => handle_list(&mut ctx),
        Some(Commands::Report) => handle_report(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx),
    }
}

fn config_dir() -> PathBuf {
    if let Ok(home) = std::env::var("QUIZBANK_HOME") {
        return PathBuf::from(home);
    }
    let proj_dirs =
        ProjectDirs::from("com", "quizbank", "quizbank").expect("Could not determine config dir");
    proj_dirs.config_dir().to_path_buf()
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir();
    let config = QuizConfig::load(&config_dir).unwrap_or_default();
    let data_file = cli.file.clone().unwrap_or_else(|| config.data_file.clone());

    let store = CsvFileStore::new(data_file);
    let api = QuizApi::new(store, config.form_defaults(), config_dir);
    Ok(AppContext { api })
}

fn to_patch(fields: FieldArgs) -> FormPatch {
    FormPatch {
        track: fields.track,
        question: fields.question,
        option1: fields.option1,
        option2: fields.option2,
        option3: fields.option3,
        option4: fields.option4,
        correct_answer: fields.correct,
        mark: fields.mark,
        time_seconds: fields.time,
    }
}

fn handle_add(ctx: &mut AppContext, fields: FieldArgs) -> Result<()> {
    let result = ctx.api.add_question(to_patch(fields))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, index: usize, fields: FieldArgs) -> Result<()> {
    let result = ctx.api.edit_question(index, to_patch(fields))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, term: String) -> Result<()> {
    let result = ctx.api.search_questions(&term)?;
    if let Some(SearchOutcome::Matches(matches)) = &result.search {
        print_questions(matches);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_questions()?;
    if !result.listed.is_empty() {
        print_questions(&result.listed);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_report(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.report()?;
    if let Some(summary) = &result.summary {
        print_summary(summary);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("data-file"), None) => ConfigAction::ShowKey("data-file".to_string()),
        (Some("data-file"), Some(v)) => ConfigAction::SetDataFile(v),
        (Some("default-track"), None) => ConfigAction::ShowKey("default-track".to_string()),
        (Some("default-track"), Some(v)) => ConfigAction::SetDefaultTrack(v),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        match key.as_deref() {
            Some("data-file") => println!("data-file = {}", config.data_file.display()),
            Some("default-track") => println!("default-track = {}", config.default_track),
            _ => {
                println!("data-file = {}", config.data_file.display());
                println!("default-track = {}", config.default_track);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TRACK_WIDTH: usize = 18;
const CORRECT_WIDTH: usize = 16;
const MARK_WIDTH: usize = 6;
const BAR_WIDTH: usize = 40;

/// Read-only projection: index, track, question, correct answer, mark.
fn print_questions(rows: &[ListedQuestion]) {
    if rows.is_empty() {
        println!("No questions found.");
        return;
    }

    let header = format!(
        "  #  {} {} {} {}",
        pad_to_width("track", TRACK_WIDTH),
        pad_to_width(
            "question",
            LINE_WIDTH - TRACK_WIDTH - CORRECT_WIDTH - MARK_WIDTH - 8
        ),
        pad_to_width("correct", CORRECT_WIDTH),
        "mark"
    );
    println!("{}", header.dimmed());

    let question_width = LINE_WIDTH - TRACK_WIDTH - CORRECT_WIDTH - MARK_WIDTH - 8;
    for row in rows {
        let q = &row.question;
        println!(
            "{}  {} {} {} {:>width$.1}",
            format!("{:>3}", row.index).yellow(),
            pad_to_width(&q.track, TRACK_WIDTH),
            pad_to_width(&q.question, question_width),
            pad_to_width(&q.correct_answer, CORRECT_WIDTH),
            q.mark,
            width = MARK_WIDTH
        );
    }
}

fn print_summary(summary: &TrackSummary) {
    if summary.counts.is_empty() {
        println!("No questions to report on.");
        return;
    }

    println!("{}", "Questions by track".bold());
    let label_width = summary
        .counts
        .iter()
        .map(|c| c.track.width())
        .max()
        .unwrap_or(0);
    let max_count = summary.counts.iter().map(|c| c.count).max().unwrap_or(1);
    for (i, count) in summary.counts.iter().enumerate() {
        let bar_len = (count.count * BAR_WIDTH / max_count).max(1);
        println!(
            "  {} {} {}",
            pad_to_width(&count.track, label_width),
            track_color("█".repeat(bar_len), i),
            count.count
        );
    }

    println!();
    println!("{}", "Mark vs time".bold());
    for (i, count) in summary.counts.iter().enumerate() {
        println!("  {}", track_color(count.track.clone(), i));
        for point in summary.points.iter().filter(|p| p.track == count.track) {
            println!(
                "    {:>4}s  {:>6.1}  {}",
                point.time_seconds,
                point.mark,
                truncate_to_width(&point.question, 60).dimmed()
            );
        }
    }
}

fn track_color(s: String, i: usize) -> ColoredString {
    match i % 6 {
        0 => s.green(),
        1 => s.yellow(),
        2 => s.blue(),
        3 => s.magenta(),
        4 => s.cyan(),
        _ => s.red(),
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
