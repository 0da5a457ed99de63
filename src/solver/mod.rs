//! Move selection and win detection.
//!
//! A `Solver` answers the two questions the host asks. `LogicSolver` relays
//! them to a logic engine through size-specific rule files; `NativeSolver`
//! runs the same depth-limited search in process over `WinPatterns`.

pub mod logic;
pub mod native;

use crate::board::{Board, Player};
use crate::error::BridgeError;

pub use logic::LogicSolver;
pub use native::NativeSolver;

/// The engine behind the query façade.
pub trait Solver {
    /// Returns `board` after the best move for `player`, searching at most
    /// `difficulty` further plies.
    fn best_move(
        &mut self,
        board: &Board,
        difficulty: u32,
        player: Player,
    ) -> Result<Board, BridgeError>;

    /// Returns true if `player` owns a complete line.
    fn has_won(&mut self, board: &Board, player: Player) -> Result<bool, BridgeError>;
}

impl<S: Solver + ?Sized> Solver for Box<S> {
    fn best_move(
        &mut self,
        board: &Board,
        difficulty: u32,
        player: Player,
    ) -> Result<Board, BridgeError> {
        (**self).best_move(board, difficulty, player)
    }

    fn has_won(&mut self, board: &Board, player: Player) -> Result<bool, BridgeError> {
        (**self).has_won(board, player)
    }
}
