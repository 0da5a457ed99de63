//! Logic-engine solver.
//!
//! Encodes the board as a flat list, makes sure the engine has the rule file
//! for the board's size, and asks the rule program:
//!
//! - `miniMax(Depth, LastPlayer, Board, BestMove)` for the best move, where
//!   `LastPlayer` is the opponent of the side to move, and
//! - `isWinning(Player, Board)` for a win check.

use crate::board::{Board, Player};
use crate::engine::{EngineError, EngineSession, LogicEngine};
use crate::error::BridgeError;
use crate::protocol::flat::{decode_term, encode_list};

use super::Solver;

/// Variable bound to the answer of a best-move query.
const BEST_MOVE_VAR: &str = "BestMove";

/// Solver backed by a logic engine session.
pub struct LogicSolver<E: LogicEngine> {
    session: EngineSession<E>,
}

impl<E: LogicEngine> LogicSolver<E> {
    pub fn new(session: EngineSession<E>) -> Self {
        LogicSolver { session }
    }

    pub fn session(&self) -> &EngineSession<E> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EngineSession<E> {
        &mut self.session
    }
}

/// Goal asking for the best move of `player`.
pub fn best_move_goal(board: &Board, difficulty: u32, player: Player) -> String {
    format!(
        "miniMax({}, {}, {}, {})",
        difficulty,
        player.other().token(),
        encode_list(board),
        BEST_MOVE_VAR
    )
}

/// Goal that succeeds if `player` owns a complete line.
pub fn winning_goal(board: &Board, player: Player) -> String {
    format!("isWinning({}, {})", player.token(), encode_list(board))
}

impl<E: LogicEngine> Solver for LogicSolver<E> {
    fn best_move(
        &mut self,
        board: &Board,
        difficulty: u32,
        player: Player,
    ) -> Result<Board, BridgeError> {
        self.session.ensure_loaded(board.size())?;
        let goal = best_move_goal(board, difficulty, player);
        let solution = self
            .session
            .query(&goal, Some(1))?
            .into_iter()
            .next()
            .ok_or(BridgeError::NoMove)?;
        let term = solution
            .get(BEST_MOVE_VAR)
            .ok_or_else(|| EngineError::MissingBinding(BEST_MOVE_VAR.to_string()))?;
        Ok(decode_term(term, board.size())?)
    }

    fn has_won(&mut self, board: &Board, player: Player) -> Result<bool, BridgeError> {
        self.session.ensure_loaded(board.size())?;
        let goal = winning_goal(board, player);
        Ok(!self.session.query(&goal, Some(1))?.is_empty())
    }
}
