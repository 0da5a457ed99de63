//! Winning lines as data.
//!
//! For an N×N board there are N columns, N rows and two diagonals, each a
//! set of N cell indices (0-based, row-major). The same patterns drive both
//! the generated rule text and the native win check.

use crate::board::Player;

/// The 2N+2 winning lines of an N×N board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinPatterns {
    size: usize,
    lines: Vec<Vec<usize>>,
}

impl WinPatterns {
    /// Builds the patterns for an N×N board: columns, then rows, then the
    /// main and anti diagonals.
    pub fn for_size(size: usize) -> Self {
        let mut lines = Vec::with_capacity(2 * size + 2);

        for col in 0..size {
            lines.push((0..size).map(|row| col + row * size).collect());
        }

        for row in 0..size {
            lines.push((0..size).map(|col| row * size + col).collect());
        }

        lines.push((0..size).map(|i| i * size + i).collect());
        lines.push((0..size).map(|i| i * size + (size - 1 - i)).collect());

        WinPatterns { size, lines }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// All lines, in generation order.
    pub fn lines(&self) -> &[Vec<usize>] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns true if `player` owns every cell of some line.
    ///
    /// `cells` must be row-major with `size²` entries.
    pub fn is_winning(&self, cells: &[Option<Player>], player: Player) -> bool {
        self.lines
            .iter()
            .any(|line| line.iter().all(|&i| cells[i] == Some(player)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn size_three_has_eight_lines() {
        let p = WinPatterns::for_size(3);
        assert_eq!(p.len(), 8);
        assert_eq!(
            p.lines(),
            &[
                vec![0, 3, 6],
                vec![1, 4, 7],
                vec![2, 5, 8],
                vec![0, 1, 2],
                vec![3, 4, 5],
                vec![6, 7, 8],
                vec![0, 4, 8],
                vec![2, 4, 6],
            ]
        );
    }

    #[test]
    fn line_count_is_two_n_plus_two() {
        for n in 1..=8 {
            let p = WinPatterns::for_size(n);
            assert_eq!(p.len(), 2 * n + 2, "size {}", n);
            for line in p.lines() {
                assert_eq!(line.len(), n);
                assert!(line.iter().all(|&i| i < n * n));
            }
        }
    }

    #[test]
    fn detects_row_column_and_diagonals() {
        let p = WinPatterns::for_size(3);
        let row = Board::from_rows(&[
            vec!["X", "X", "X"],
            vec!["O", "O", ""],
            vec!["", "", ""],
        ])
        .unwrap();
        assert!(p.is_winning(row.cells(), Player::X));
        assert!(!p.is_winning(row.cells(), Player::O));

        let col = Board::from_rows(&[
            vec!["", "O", "X"],
            vec!["", "O", "X"],
            vec!["", "O", ""],
        ])
        .unwrap();
        assert!(p.is_winning(col.cells(), Player::O));
        assert!(!p.is_winning(col.cells(), Player::X));

        let anti = Board::from_rows(&[
            vec!["", "", "X"],
            vec!["", "X", ""],
            vec!["X", "", ""],
        ])
        .unwrap();
        assert!(p.is_winning(anti.cells(), Player::X));
    }

    #[test]
    fn four_by_four_main_diagonal() {
        let p = WinPatterns::for_size(4);
        let mut board = Board::empty(4).unwrap();
        for i in [0, 5, 10, 15] {
            board = board.with_move(i, Player::O).unwrap();
        }
        assert!(p.is_winning(board.cells(), Player::O));
        let partial = Board::empty(4)
            .unwrap()
            .with_move(0, Player::O)
            .unwrap()
            .with_move(5, Player::O)
            .unwrap();
        assert!(!p.is_winning(partial.cells(), Player::O));
    }
}
