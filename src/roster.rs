//! Insertion-ordered student roster.

use anyhow::{Result, bail};

/// Mapping from student name to numeric score, preserving entry order.
///
/// Re-inserting an existing name replaces the score in place and keeps the
/// original position (last write wins).
#[derive(Debug, Default, Clone)]
pub struct ScoreBoard {
    entries: Vec<(String, f64)>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a student or replaces an existing student's score.
    ///
    /// Returns the previous score when the name was already present.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming, or the score
    /// is not a finite number.
    pub fn insert(&mut self, name: &str, score: f64) -> Result<Option<f64>> {
        let name = name.trim();
        if name.is_empty() {
            bail!("student name must not be empty");
        }
        if !score.is_finite() {
            bail!("score for '{name}' must be a finite number, got {score}");
        }

        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            let previous = entry.1;
            entry.1 = score;
            return Ok(Some(previous));
        }

        self.entries.push((name.to_string(), score));
        Ok(None)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, score)| score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, score)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), *s))
    }

    /// Iterates over scores in insertion order.
    pub fn scores(&self) -> impl Iterator<Item = f64> {
        self.entries.iter().map(|&(_, s)| s)
    }
}
