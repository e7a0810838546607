//! Descriptive statistics: average, median, highest and lowest scorer.

use anyhow::{Result, bail};

use crate::analyzers::types::{ScoreEntry, Summary};
use crate::roster::ScoreBoard;

/// Arithmetic mean of all scores.
///
/// # Errors
///
/// Returns an error for an empty roster.
pub fn average(board: &ScoreBoard) -> Result<f64> {
    if board.is_empty() {
        bail!("average is undefined for an empty roster");
    }
    Ok(board.scores().sum::<f64>() / board.len() as f64)
}

/// Median score: the middle value after sorting, or the mean of the two
/// middle values for an even-sized roster.
///
/// # Errors
///
/// Returns an error for an empty roster.
pub fn median(board: &ScoreBoard) -> Result<f64> {
    if board.is_empty() {
        bail!("median is undefined for an empty roster");
    }

    let mut scores: Vec<f64> = board.scores().collect();
    scores.sort_by(f64::total_cmp);

    let mid = scores.len() / 2;
    let median = if scores.len() % 2 == 0 {
        (scores[mid - 1] + scores[mid]) / 2.0
    } else {
        scores[mid]
    };

    Ok(median)
}

/// Student with the highest score. Ties go to the earliest roster entry.
///
/// # Errors
///
/// Returns an error for an empty roster.
pub fn max_holder(board: &ScoreBoard) -> Result<ScoreEntry> {
    match board.iter().reduce(|best, cur| if cur.1 > best.1 { cur } else { best }) {
        Some((name, score)) => Ok(ScoreEntry {
            name: name.to_string(),
            score,
        }),
        None => bail!("highest score is undefined for an empty roster"),
    }
}

/// Student with the lowest score. Ties go to the earliest roster entry.
///
/// # Errors
///
/// Returns an error for an empty roster.
pub fn min_holder(board: &ScoreBoard) -> Result<ScoreEntry> {
    match board.iter().reduce(|best, cur| if cur.1 < best.1 { cur } else { best }) {
        Some((name, score)) => Ok(ScoreEntry {
            name: name.to_string(),
            score,
        }),
        None => bail!("lowest score is undefined for an empty roster"),
    }
}

/// Computes the full statistical summary for a roster.
///
/// # Errors
///
/// Returns an error for an empty roster.
pub fn summarize(board: &ScoreBoard) -> Result<Summary> {
    Ok(Summary {
        average: average(board)?,
        median: median(board)?,
        max: max_holder(board)?,
        min: min_holder(board)?,
    })
}
