//! Tic-tac-toe bridge library.
//!
//! Converts boards between the host's grid of symbols and a logic engine's
//! flat list, generates size-specific rule files for the engine, and answers
//! "best move" and "is winner" through either the engine or a native solver.

pub mod board;
pub mod bridge;
pub mod config;
pub mod engine;
pub mod error;
pub mod host;
pub mod protocol;
pub mod rules;
pub mod solver;

pub use board::{Board, Player};
pub use bridge::{Bridge, DynBridge, Outcome};
pub use config::BridgeConfig;
pub use error::BridgeError;
pub use solver::{LogicSolver, NativeSolver, Solver};
