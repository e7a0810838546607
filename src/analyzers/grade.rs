use serde::Serialize;
use std::fmt;

use crate::analyzers::types::{GradeBoard, GradeEntry, GradeHistogram};
use crate::roster::ScoreBoard;

/// Letter grade, ordered best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// Minimum score per grade, consulted top-down. Anything below every
/// threshold is an F.
const THRESHOLDS: &[(f64, Grade)] = &[
    (90.0, Grade::A),
    (80.0, Grade::B),
    (70.0, Grade::C),
    (60.0, Grade::D),
];

/// Converts a numeric score into a letter grade.
///
/// | Range       | Grade |
/// |-------------|-------|
/// | >= 90       | A     |
/// | >= 80       | B     |
/// | >= 70       | C     |
/// | >= 60       | D     |
/// | < 60        | F     |
pub fn grade(score: f64) -> Grade {
    THRESHOLDS
        .iter()
        .find(|(min, _)| score >= *min)
        .map(|&(_, g)| g)
        .unwrap_or(Grade::F)
}

/// Assigns a letter grade to every student, preserving roster order.
pub fn assign_grades(board: &ScoreBoard) -> GradeBoard {
    board
        .iter()
        .map(|(name, score)| GradeEntry {
            name: name.to_string(),
            grade: grade(score),
        })
        .collect()
}

/// Tallies how many students hold each grade. Grades nobody holds are
/// absent from the result.
pub fn count_grades(grades: &GradeBoard) -> GradeHistogram {
    let mut counts = GradeHistogram::new();
    for entry in grades {
        *counts.entry(entry.grade).or_insert(0) += 1;
    }
    counts
}
