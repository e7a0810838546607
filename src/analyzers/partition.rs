use crate::roster::ScoreBoard;

/// Lowest score that still counts as a pass.
pub const PASS_MARK: f64 = 40.0;

/// Splits the roster into passed and failed name lists, both in roster
/// order. A score equal to [`PASS_MARK`] passes.
pub fn partition_pass_fail(board: &ScoreBoard) -> (Vec<String>, Vec<String>) {
    let mut passed = Vec::new();
    let mut failed = Vec::new();

    for (name, score) in board.iter() {
        if score >= PASS_MARK {
            passed.push(name.to_string());
        } else {
            failed.push(name.to_string());
        }
    }

    (passed, failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_at_pass_mark_boundary() {
        let mut board = ScoreBoard::new();
        board.insert("A", 90.0).unwrap();
        board.insert("B", 89.99).unwrap();
        board.insert("C", 40.0).unwrap();
        board.insert("D", 39.99).unwrap();

        let (passed, failed) = partition_pass_fail(&board);

        assert_eq!(passed, vec!["A", "B", "C"]);
        assert_eq!(failed, vec!["D"]);
    }

    #[test]
    fn test_partition_covers_whole_roster() {
        let mut board = ScoreBoard::new();
        board.insert("Alice", 72.0).unwrap();
        board.insert("Bob", 12.0).unwrap();
        board.insert("Carol", 40.0).unwrap();

        let (passed, failed) = partition_pass_fail(&board);

        assert_eq!(passed.len() + failed.len(), board.len());
    }

    #[test]
    fn test_partition_empty_roster() {
        let (passed, failed) = partition_pass_fail(&ScoreBoard::new());
        assert!(passed.is_empty());
        assert!(failed.is_empty());
    }

    #[test]
    fn test_partition_preserves_roster_order() {
        let mut board = ScoreBoard::new();
        board.insert("Zoe", 55.0).unwrap();
        board.insert("Amy", 20.0).unwrap();
        board.insert("Mia", 80.0).unwrap();
        board.insert("Lin", 10.0).unwrap();

        let (passed, failed) = partition_pass_fail(&board);

        assert_eq!(passed, vec!["Zoe", "Mia"]);
        assert_eq!(failed, vec!["Amy", "Lin"]);
    }
}
