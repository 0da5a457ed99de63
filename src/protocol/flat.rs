//! Flat board encoding.
//!
//! The logic engine sees a board as a flat list of N² cells in row-major
//! order: `x` and `o` for the players and `0` for an empty cell.
//!
//! ```text
//! X | X |          [x, x, 0,
//! O | O |    <->    o, o, 0,
//!   |   |           0, 0, 0]
//! ```

use crate::board::{Board, Player, ShapeError};

use super::term::Term;

/// Engine token for an empty cell.
pub const EMPTY_TOKEN: &str = "0";

/// Encodes a board into its row-major token sequence.
pub fn encode_tokens(board: &Board) -> Vec<&'static str> {
    board
        .cells()
        .iter()
        .map(|c| c.map(Player::token).unwrap_or(EMPTY_TOKEN))
        .collect()
}

/// Encodes a board as an engine list term.
pub fn encode_term(board: &Board) -> Term {
    Term::List(
        board
            .cells()
            .iter()
            .map(|c| match c {
                Some(p) => Term::atom(p.token()),
                None => Term::Int(0),
            })
            .collect(),
    )
}

/// Encodes a board as an engine list literal, e.g. `[x, 0, o, ...]`.
pub fn encode_list(board: &Board) -> String {
    encode_term(board).to_string()
}

/// Parses a single flat token.
fn decode_token(token: &str) -> Result<Option<Player>, ShapeError> {
    if token.is_empty() || token == EMPTY_TOKEN {
        return Ok(None);
    }
    Player::from_symbol(token)
        .map(Some)
        .ok_or_else(|| ShapeError::InvalidCell(token.to_string()))
}

/// Decodes a row-major token sequence into a `size`×`size` board.
pub fn decode_tokens<S: AsRef<str>>(tokens: &[S], size: usize) -> Result<Board, ShapeError> {
    let cells = tokens
        .iter()
        .map(|t| decode_token(t.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Board::from_cells(size, cells)
}

/// Decodes an engine answer term (a list of `x`, `o` and `0`).
pub fn decode_term(term: &Term, size: usize) -> Result<Board, ShapeError> {
    let items = term
        .as_list()
        .ok_or_else(|| ShapeError::InvalidCell(term.to_string()))?;

    let cells = items
        .iter()
        .map(|item| match item {
            Term::Int(0) => Ok(None),
            Term::Atom(a) => decode_token(a),
            other => Err(ShapeError::InvalidCell(other.to_string())),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Board::from_cells(size, cells)
}
