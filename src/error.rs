//! Error types for the checkers engine.
//!
//! Every failure is recoverable: the engine state is left consistent and the
//! caller decides how to surface it.

use thiserror::Error;

use crate::types::{Move, Position, Side};

/// Why a selection or destination was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionFault {
    #[error("square is off the board")]
    OutOfBounds,

    #[error("square is empty")]
    EmptySquare,

    #[error("piece belongs to the side not on move")]
    WrongSide,

    #[error("a jump is available and must be taken")]
    JumpRequired,

    #[error("no piece is selected")]
    NothingSelected,

    #[error("not a legal destination for the selected piece")]
    NotALegalDestination,

    #[error("the jumping piece must continue its capture")]
    MustContinueJump,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckersError {
    /// Selection cleared (unless a jump continuation is pending); not fatal
    #[error("invalid selection at {square}: {fault}")]
    InvalidSelection {
        square: Position,
        fault: SelectionFault,
    },

    #[error("no moves to {action}")]
    EmptyHistory { action: &'static str },

    #[error("{side} has no legal move")]
    NoLegalMove { side: Side },

    #[error("game is already over, {winner} won")]
    GameOver { winner: Side },

    #[error("{side} is under automated control")]
    AutomatedTurn { side: Side },

    #[error("{side} is not under automated control")]
    NotAutomatedTurn { side: Side },

    #[error("move selector proposed an illegal move {mv}")]
    IllegalSelectorMove { mv: Move },
}

/// Result type alias for engine operations
pub type CheckersResult<T> = Result<T, CheckersError>;
