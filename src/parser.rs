//! CSV parser for student rosters.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::io::Read;
use tracing::warn;

use crate::roster::ScoreBoard;

#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    score: f64,
}

/// Reads a roster from CSV with a `name,score` header.
///
/// Duplicate names keep the last score seen (a warning is logged). Scores
/// outside 0–100 are rejected here so they never reach the analysis.
///
/// # Errors
///
/// Returns an error on malformed rows, empty names, or out-of-range scores.
pub fn parse_roster<R: Read>(reader: R) -> Result<ScoreBoard> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut board = ScoreBoard::new();

    for (index, result) in rdr.deserialize().enumerate() {
        // Data starts on line 2, after the header.
        let line = index + 2;
        let row: RosterRow =
            result.with_context(|| format!("invalid roster row on line {line}"))?;

        if !(0.0..=100.0).contains(&row.score) {
            bail!(
                "score {} for '{}' on line {line} is outside the 0-100 range",
                row.score,
                row.name
            );
        }

        let replaced = board
            .insert(&row.name, row.score)
            .with_context(|| format!("invalid roster row on line {line}"))?;
        if replaced.is_some() {
            warn!(name = %row.name.trim(), line, "duplicate roster entry, keeping the last score");
        }
    }

    Ok(board)
}
