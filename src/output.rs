//! Report rendering and persistence.
//!
//! Supports the formatted console report, JSON serialization, and CSV
//! append of per-run report records.

use anyhow::Result;
use tracing::debug;

use crate::analyzers::types::{Report, ReportRecord};
use crate::roster::ScoreBoard;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Renders the full console report: statistical summary, grade
/// distribution, pass/fail summary, and the per-student results table.
pub fn render_report(board: &ScoreBoard, report: &Report) -> String {
    let mut out = String::new();

    out.push_str("--- Statistical Summary ---\n");
    out.push_str(&format!("Average Marks: {:.2}\n", report.summary.average));
    out.push_str(&format!("Median Marks: {:.2}\n", report.summary.median));
    out.push_str(&format!(
        "Highest Marks: {} ({})\n",
        report.summary.max.name, report.summary.max.score
    ));
    out.push_str(&format!(
        "Lowest Marks: {} ({})\n",
        report.summary.min.name, report.summary.min.score
    ));

    out.push_str("\n--- Grade Distribution ---\n");
    for (grade, count) in &report.histogram {
        out.push_str(&format!("Grade {grade}: {count} student(s)\n"));
    }

    out.push_str("\n--- Pass/Fail Summary ---\n");
    out.push_str(&format!(
        "Passed Students ({}): {}\n",
        report.passed.len(),
        join_or_none(&report.passed)
    ));
    out.push_str(&format!(
        "Failed Students ({}): {}\n",
        report.failed.len(),
        join_or_none(&report.failed)
    ));

    out.push('\n');
    out.push_str(&render_table(board, report));

    out
}

/// Renders the per-student results table (name, marks, grade).
pub fn render_table(board: &ScoreBoard, report: &Report) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:<14}{:<10}{}\n", "Name", "Marks", "Grade"));
    out.push_str(&format!("{}\n", "-".repeat(30)));
    for ((name, score), entry) in board.iter().zip(&report.grades) {
        out.push_str(&format!("{:<14}{:<10}{}\n", name, score, entry.grade));
    }
    out.push_str(&format!("{}\n", "-".repeat(30)));

    out
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "None".to_string()
    } else {
        names.join(", ")
    }
}

/// Prints a report as pretty JSON to stdout.
pub fn print_json(report: &Report) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Appends a [`ReportRecord`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, record: &ReportRecord) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(record)?;
    writer.flush()?;

    Ok(())
}
