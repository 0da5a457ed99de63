//! Query façade.
//!
//! Takes boards in the host's representation (rows of "", "X", "O"),
//! validates them, and answers "best move" and "is winner" through a
//! `Solver`. A `Bridge` is an owned value and every query takes `&mut self`;
//! share one across threads by wrapping it in a `Mutex`.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};
use crate::config::{Backend, BridgeConfig};
use crate::engine::{EngineSession, ScryerEngine};
use crate::error::BridgeError;
use crate::rules::RuleFileCache;
use crate::solver::{LogicSolver, NativeSolver, Solver};

/// Result of a win check from one player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Won,
    Lost,
    Undecided,
}

/// The query façade over a solver.
pub struct Bridge<S: Solver> {
    solver: S,
}

/// A bridge whose solver is chosen at runtime.
pub type DynBridge = Bridge<Box<dyn Solver>>;

impl<S: Solver> Bridge<S> {
    pub fn new(solver: S) -> Self {
        Bridge { solver }
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    pub fn solver_mut(&mut self) -> &mut S {
        &mut self.solver
    }

    /// Returns the host board after the computer's move.
    ///
    /// `player` is the symbol the computer plays; `difficulty` bounds how
    /// many further plies the solver looks ahead.
    pub fn best_move<R: AsRef<str>>(
        &mut self,
        rows: &[Vec<R>],
        difficulty: u32,
        player: Player,
    ) -> Result<Vec<Vec<String>>, BridgeError> {
        let board = Board::from_rows(rows)?;
        let next = self.solver.best_move(&board, difficulty, player)?;
        Ok(next.to_rows())
    }

    /// Reports whether `player` has won, the opponent has won, or neither.
    pub fn is_winner<R: AsRef<str>>(
        &mut self,
        rows: &[Vec<R>],
        player: Player,
    ) -> Result<Outcome, BridgeError> {
        let board = Board::from_rows(rows)?;
        if self.solver.has_won(&board, player)? {
            return Ok(Outcome::Won);
        }
        if self.solver.has_won(&board, player.other())? {
            return Ok(Outcome::Lost);
        }
        Ok(Outcome::Undecided)
    }
}

impl Bridge<Box<dyn Solver>> {
    /// Builds the solver named by `config.backend`.
    ///
    /// The Scryer backend builds its engine immediately; rule files are
    /// generated and consulted on the first query.
    pub fn from_config(config: &BridgeConfig) -> Result<Self, BridgeError> {
        let solver: Box<dyn Solver> = match config.backend {
            Backend::Native => Box::new(NativeSolver::new(config.node_limit)),
            Backend::Scryer => {
                let cache = RuleFileCache::open(&config.rules_dir, config.base_rule_file.as_str())?;
                let session = EngineSession::new(ScryerEngine::new(), cache, config.stack_limit)
                    .with_verbose(config.verbose);
                Box::new(LogicSolver::new(session))
            }
        };
        Ok(Bridge::new(solver))
    }
}
