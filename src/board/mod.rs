//! Board representation.
//!
//! Contains the player symbols and the square grid shared by the codec,
//! the rule generator and the solvers.

pub mod cell;
pub mod grid;

pub use cell::{Player, ALL_PLAYERS};
pub use grid::{Board, ShapeError};
