//! Data types produced by the analysis pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::analyzers::grade::Grade;

/// A student's name together with a score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: f64,
}

/// A student's name together with the assigned letter grade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeEntry {
    pub name: String,
    pub grade: Grade,
}

/// One entry per roster entry, in roster order.
pub type GradeBoard = Vec<GradeEntry>;

/// Count of students per letter grade; grades nobody holds are absent.
pub type GradeHistogram = BTreeMap<Grade, usize>;

/// Descriptive statistics over a roster.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub average: f64,
    pub median: f64,
    pub max: ScoreEntry,
    pub min: ScoreEntry,
}

/// Complete analysis result for a single roster.
#[derive(Debug, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub class_size: usize,
    pub summary: Summary,
    pub grades: GradeBoard,
    pub histogram: GradeHistogram,
    pub passed: Vec<String>,
    pub failed: Vec<String>,
}

/// Flat projection of a [`Report`], appended as one CSV row per run.
#[derive(Debug, Serialize)]
pub struct ReportRecord {
    pub timestamp: DateTime<Utc>,
    pub class_size: usize,
    pub average: f64,
    pub median: f64,
    pub max_name: String,
    pub max_score: f64,
    pub min_name: String,
    pub min_score: f64,
    pub grade_a: usize,
    pub grade_b: usize,
    pub grade_c: usize,
    pub grade_d: usize,
    pub grade_f: usize,
    pub passed: usize,
    pub failed: usize,
}

impl ReportRecord {
    pub fn from_report(report: &Report) -> Self {
        let count = |g: Grade| report.histogram.get(&g).copied().unwrap_or(0);

        ReportRecord {
            timestamp: report.generated_at,
            class_size: report.class_size,
            average: report.summary.average,
            median: report.summary.median,
            max_name: report.summary.max.name.clone(),
            max_score: report.summary.max.score,
            min_name: report.summary.min.name.clone(),
            min_score: report.summary.min.score,
            grade_a: count(Grade::A),
            grade_b: count(Grade::B),
            grade_c: count(Grade::C),
            grade_d: count(Grade::D),
            grade_f: count(Grade::F),
            passed: report.passed.len(),
            failed: report.failed.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_report_record_from_report() {
        let report = Report {
            generated_at: Utc::now(),
            class_size: 3,
            summary: Summary {
                average: 75.0,
                median: 80.0,
                max: ScoreEntry {
                    name: "Alice".to_string(),
                    score: 95.0,
                },
                min: ScoreEntry {
                    name: "Dan".to_string(),
                    score: 50.0,
                },
            },
            grades: vec![
                GradeEntry {
                    name: "Alice".to_string(),
                    grade: Grade::A,
                },
                GradeEntry {
                    name: "Bob".to_string(),
                    grade: Grade::B,
                },
                GradeEntry {
                    name: "Dan".to_string(),
                    grade: Grade::F,
                },
            ],
            histogram: GradeHistogram::from([(Grade::A, 1), (Grade::B, 1), (Grade::F, 1)]),
            passed: vec!["Alice".to_string(), "Bob".to_string()],
            failed: vec!["Dan".to_string()],
        };

        let record = ReportRecord::from_report(&report);

        assert_eq!(record.class_size, 3);
        assert_eq!(record.max_name, "Alice");
        assert_eq!(record.min_score, 50.0);
        assert_eq!(record.grade_a, 1);
        assert_eq!(record.grade_c, 0);
        assert_eq!(record.grade_f, 1);
        assert_eq!(record.passed, 2);
        assert_eq!(record.failed, 1);
    }
}
