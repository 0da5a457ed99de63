//! In-process solver.
//!
//! Depth-limited negamax over the board's `WinPatterns`, scoring exactly
//! like the rule program's `score/4`:
//!
//! - the side that just moved and completed a line scores 1,
//! - a full board or an exhausted depth scores 0,
//! - otherwise the score is minus the opponent's best reply.
//!
//! Ties go to the first empty cell in row-major order.

use std::collections::HashMap;

use crate::board::{Board, Player};
use crate::error::BridgeError;
use crate::rules::WinPatterns;

use super::Solver;

/// Default bound on positions visited by one search.
pub const DEFAULT_NODE_LIMIT: u64 = 20_000_000;

/// Native minimax solver.
pub struct NativeSolver {
    node_limit: Option<u64>,
    patterns: HashMap<usize, WinPatterns>,
    last_nodes: u64,
}

impl Default for NativeSolver {
    fn default() -> Self {
        NativeSolver::new(Some(DEFAULT_NODE_LIMIT))
    }
}

impl NativeSolver {
    /// Creates a solver. `node_limit` bounds each search; `None` is unbounded.
    pub fn new(node_limit: Option<u64>) -> Self {
        NativeSolver {
            node_limit,
            patterns: HashMap::new(),
            last_nodes: 0,
        }
    }

    /// Positions visited by the most recent `best_move`.
    pub fn last_nodes(&self) -> u64 {
        self.last_nodes
    }
}

/// State of one search.
struct Search<'a> {
    patterns: &'a WinPatterns,
    nodes: u64,
    limit: Option<u64>,
}

impl Search<'_> {
    /// Value of `cells` for `mover`, who has just moved.
    fn score(
        &mut self,
        cells: &mut [Option<Player>],
        mover: Player,
        depth: u32,
    ) -> Result<i32, BridgeError> {
        self.nodes += 1;
        if let Some(limit) = self.limit {
            if self.nodes > limit {
                return Err(BridgeError::ResourceLimit(limit));
            }
        }

        if self.patterns.is_winning(cells, mover) {
            return Ok(1);
        }
        if cells.iter().all(Option::is_some) || depth == 0 {
            return Ok(0);
        }

        let next = mover.other();
        let mut best = i32::MIN;
        for i in 0..cells.len() {
            if cells[i].is_some() {
                continue;
            }
            cells[i] = Some(next);
            let s = self.score(cells, next, depth - 1);
            cells[i] = None;
            best = best.max(s?);
        }
        Ok(-best)
    }
}

impl Solver for NativeSolver {
    fn best_move(
        &mut self,
        board: &Board,
        difficulty: u32,
        player: Player,
    ) -> Result<Board, BridgeError> {
        let size = board.size();
        let patterns = self
            .patterns
            .entry(size)
            .or_insert_with(|| WinPatterns::for_size(size));
        let mut search = Search {
            patterns,
            nodes: 0,
            limit: self.node_limit,
        };

        let mut cells = board.cells().to_vec();
        let mut best: Option<(i32, usize)> = None;
        let mut outcome = Ok(());
        for idx in board.empty_cells() {
            cells[idx] = Some(player);
            let s = search.score(&mut cells, player, difficulty);
            cells[idx] = None;
            match s {
                Ok(s) => {
                    if best.map_or(true, |(b, _)| s > b) {
                        best = Some((s, idx));
                    }
                }
                Err(e) => {
                    outcome = Err(e);
                    break;
                }
            }
        }
        self.last_nodes = search.nodes;
        outcome?;

        let (_, idx) = best.ok_or(BridgeError::NoMove)?;
        Ok(board.with_move(idx, player)?)
    }

    fn has_won(&mut self, board: &Board, player: Player) -> Result<bool, BridgeError> {
        let size = board.size();
        let patterns = self
            .patterns
            .entry(size)
            .or_insert_with(|| WinPatterns::for_size(size));
        Ok(patterns.is_winning(board.cells(), player))
    }
}
