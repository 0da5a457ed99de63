//! Square board representation.
//!
//! Holds an N×N grid of cells in row-major order and converts to and from
//! the host application's grid of strings ("", "X", "O").

use super::cell::Player;

/// Errors raised when a grid does not describe a well-formed square board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("board has no rows")]
    Empty,

    #[error("board is not square: {rows} rows but row {row} has {cols} cells")]
    NotSquare { rows: usize, row: usize, cols: usize },

    #[error("expected {expected} cells for a {size}x{size} board, got {actual}")]
    WrongCellCount {
        size: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid cell value: '{0}'")]
    InvalidCell(String),

    #[error("cell index {index} is outside a {size}x{size} board")]
    OutOfBounds { index: usize, size: usize },

    #[error("cell index {0} is already taken")]
    Occupied(usize),
}

/// An N×N tic-tac-toe board.
///
/// `cells` holds `size * size` entries indexed `row * size + col`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Player>>,
}

impl Board {
    /// Creates an empty board of the given size.
    pub fn empty(size: usize) -> Result<Self, ShapeError> {
        if size == 0 {
            return Err(ShapeError::Empty);
        }
        Ok(Board {
            size,
            cells: vec![None; size * size],
        })
    }

    /// Builds a board from row-major cells. The cell count must be `size²`.
    pub fn from_cells(size: usize, cells: Vec<Option<Player>>) -> Result<Self, ShapeError> {
        if size == 0 {
            return Err(ShapeError::Empty);
        }
        if size.checked_mul(size) != Some(cells.len()) {
            return Err(ShapeError::WrongCellCount {
                size,
                expected: size.saturating_mul(size),
                actual: cells.len(),
            });
        }
        Ok(Board { size, cells })
    }

    /// Parses the host grid. Empty strings are empty cells; "X"/"O" in
    /// either case are players.
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, ShapeError> {
        let size = rows.len();
        if size == 0 {
            return Err(ShapeError::Empty);
        }

        // All rows are checked before `size * size` cells are reserved.
        if let Some((r, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(ShapeError::NotSquare {
                rows: size,
                row: r,
                cols: row.len(),
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            for cell in row {
                let s = cell.as_ref();
                if s.is_empty() {
                    cells.push(None);
                } else {
                    let p = Player::from_symbol(s)
                        .ok_or_else(|| ShapeError::InvalidCell(s.to_string()))?;
                    cells.push(Some(p));
                }
            }
        }

        Ok(Board { size, cells })
    }

    /// Returns the host grid: "" for empty cells, "X"/"O" otherwise.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.cells
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|c| c.map(Player::symbol).unwrap_or("").to_string())
                    .collect()
            })
            .collect()
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[Option<Player>] {
        &self.cells
    }

    /// Returns the cell at (row, col), or None when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Option<Player>> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[row * self.size + col])
    }

    /// Indices of empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns a copy of the board with `player` placed at `index`.
    pub fn with_move(&self, index: usize, player: Player) -> Result<Board, ShapeError> {
        match self.cells.get(index) {
            None => Err(ShapeError::OutOfBounds {
                index,
                size: self.size,
            }),
            Some(Some(_)) => Err(ShapeError::Occupied(index)),
            Some(None) => {
                let mut next = self.clone();
                next.cells[index] = Some(player);
                Ok(next)
            }
        }
    }
}
