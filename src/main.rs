//! CLI entry point for the Gradebook Analyzer tool.
//!
//! Provides subcommands for analyzing a roster CSV and for interactive
//! data entry, both feeding the same analysis and reporting path.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gradebook_analyzer::analyzers::report::analyze;
use gradebook_analyzer::analyzers::types::ReportRecord;
use gradebook_analyzer::output::{append_record, print_json, render_report};
use gradebook_analyzer::parser::parse_roster;
use gradebook_analyzer::roster::ScoreBoard;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gradebook_analyzer")]
#[command(about = "A tool to analyze student gradebooks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a roster CSV from a file or stdin
    Analyze {
        /// Path to a roster CSV, or "-" for stdin
        #[arg(value_name = "FILE")]
        source: String,

        /// CSV file to append the report record to
        #[arg(short, long)]
        output: Option<String>,

        /// Print the report as JSON instead of the console table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Enter student marks interactively, then analyze them
    Enter {
        /// CSV file to append the report record to
        #[arg(short, long)]
        output: Option<String>,

        /// Print the report as JSON instead of the console table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/gradebook_analyzer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gradebook_analyzer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            source,
            output,
            json,
        } => {
            let board = load_roster(&source)?;
            run_report(&board, output.as_deref(), json)?;
        }
        Commands::Enter { output, json } => {
            let board = enter_roster()?;
            run_report(&board, output.as_deref(), json)?;
        }
    }

    Ok(())
}

/// Loads a roster from a CSV file path, or from stdin when given "-".
#[tracing::instrument(fields(source = %source))]
fn load_roster(source: &str) -> Result<ScoreBoard> {
    let board = if source == "-" {
        parse_roster(io::stdin().lock())?
    } else {
        let file =
            File::open(source).with_context(|| format!("cannot open roster file {source}"))?;
        parse_roster(file)?
    };

    info!(students = board.len(), "Roster loaded");
    Ok(board)
}

/// Analyzes the roster and emits the report on the selected outputs.
fn run_report(board: &ScoreBoard, output: Option<&str>, json: bool) -> Result<()> {
    let report = analyze(board)?;

    if json {
        print_json(&report)?;
    } else {
        print!("{}", render_report(board, &report));
    }

    if let Some(path) = output {
        let record = ReportRecord::from_report(&report);
        append_record(path, &record)?;
        info!(path, "Report record appended");
    }

    Ok(())
}

/// Prompts for student names and marks until the requested count is reached.
///
/// Invalid values are re-prompted rather than aborting, so one typo does
/// not discard already-entered data.
fn enter_roster() -> Result<ScoreBoard> {
    let count = loop {
        match prompt("Enter number of students: ")?.parse::<usize>() {
            Ok(n) if n > 0 => break n,
            _ => eprintln!("Please enter a positive whole number."),
        }
    };

    let mut board = ScoreBoard::new();
    while board.len() < count {
        let name = prompt("Enter student name: ")?;
        if name.is_empty() {
            eprintln!("Name must not be empty.");
            continue;
        }

        let score = loop {
            match prompt(&format!("Enter marks for {name}: "))?.parse::<f64>() {
                Ok(s) if (0.0..=100.0).contains(&s) => break s,
                _ => eprintln!("Marks must be a number between 0 and 100."),
            }
        };

        if board.insert(&name, score)?.is_some() {
            warn!(name = %name, "duplicate student, replaced previous marks");
        }
    }

    Ok(board)
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
