//! Errors surfaced by the bridge.
//!
//! Three families reach the caller: the board had the wrong shape, the
//! engine could not answer, or a rule file could not be read or written.

use crate::board::ShapeError;
use crate::engine::EngineError;
use crate::rules::TemplateError;

/// Any failure of a bridge operation.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("invalid board: {0}")]
    Shape(#[from] ShapeError),

    #[error("no legal move available")]
    NoMove,

    #[error("search exceeded the limit of {0} positions")]
    ResourceLimit(u64),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Template(#[from] TemplateError),
}
