//! Full analysis pipeline over a roster.

use anyhow::{Result, bail};
use chrono::Utc;
use tracing::debug;

use crate::analyzers::grade::{assign_grades, count_grades};
use crate::analyzers::partition::partition_pass_fail;
use crate::analyzers::summary::summarize;
use crate::analyzers::types::Report;
use crate::roster::ScoreBoard;

/// Runs the complete analysis: summary statistics, per-student grades,
/// grade distribution, and the pass/fail split.
///
/// # Errors
///
/// Returns an error for an empty roster; every statistic is undefined
/// without at least one score.
pub fn analyze(board: &ScoreBoard) -> Result<Report> {
    if board.is_empty() {
        bail!("cannot analyze an empty roster");
    }

    let summary = summarize(board)?;
    let grades = assign_grades(board);
    let histogram = count_grades(&grades);
    let (passed, failed) = partition_pass_fail(board);

    debug!(class_size = board.len(), "roster analysis complete");

    Ok(Report {
        generated_at: Utc::now(),
        class_size: board.len(),
        summary,
        grades,
        histogram,
        passed,
        failed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::grade::Grade;

    #[test]
    fn test_analyze_empty_roster_fails() {
        let result = analyze(&ScoreBoard::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_analyze_single_entry() {
        let mut board = ScoreBoard::new();
        board.insert("Solo", 100.0).unwrap();

        let report = analyze(&board).unwrap();

        assert_eq!(report.class_size, 1);
        assert_eq!(report.summary.average, 100.0);
        assert_eq!(report.summary.median, 100.0);
        assert_eq!(report.summary.max.name, "Solo");
        assert_eq!(report.summary.min.name, "Solo");
        assert_eq!(report.grades[0].grade, Grade::A);
        assert_eq!(report.histogram.get(&Grade::A), Some(&1));
        assert_eq!(report.passed, vec!["Solo"]);
        assert!(report.failed.is_empty());
    }

    #[test]
    fn test_analyze_grade_and_pass_boundaries() {
        let mut board = ScoreBoard::new();
        board.insert("A", 90.0).unwrap();
        board.insert("B", 89.99).unwrap();
        board.insert("C", 40.0).unwrap();
        board.insert("D", 39.99).unwrap();

        let report = analyze(&board).unwrap();

        let grades: Vec<Grade> = report.grades.iter().map(|e| e.grade).collect();
        assert_eq!(grades, vec![Grade::A, Grade::B, Grade::F, Grade::F]);
        assert_eq!(report.passed, vec!["A", "B", "C"]);
        assert_eq!(report.failed, vec!["D"]);
    }

    #[test]
    fn test_analyze_invariants_hold() {
        let mut board = ScoreBoard::new();
        board.insert("Alice", 95.0).unwrap();
        board.insert("Bob", 61.5).unwrap();
        board.insert("Carol", 38.0).unwrap();
        board.insert("Dan", 77.0).unwrap();
        board.insert("Eve", 77.0).unwrap();

        let report = analyze(&board).unwrap();

        // Grades cover the roster, one entry per student, same order.
        let graded: Vec<&str> = report.grades.iter().map(|e| e.name.as_str()).collect();
        let roster: Vec<&str> = board.iter().map(|(n, _)| n).collect();
        assert_eq!(graded, roster);

        // Histogram counts sum to the class size.
        assert_eq!(report.histogram.values().sum::<usize>(), report.class_size);

        // Pass and fail lists partition the roster.
        assert_eq!(report.passed.len() + report.failed.len(), report.class_size);

        // Average sits between the extremes.
        assert!(report.summary.average >= report.summary.min.score);
        assert!(report.summary.average <= report.summary.max.score);
    }
}
