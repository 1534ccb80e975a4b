//! Error types for the chess core.

use thiserror::Error;

use crate::domain::Square;

/// Why a click could not select a piece
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionReason {
    EmptySquare,
    OpponentPiece,
}

impl std::fmt::Display for SelectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionReason::EmptySquare => f.write_str("square is empty"),
            SelectionReason::OpponentPiece => f.write_str("piece belongs to the opponent"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ChessError {
    #[error("coordinate ({file}, {rank}) is off the board")]
    OutOfBounds { file: i32, rank: i32 },

    #[error("cannot select {square}: {reason}")]
    InvalidSelection {
        square: Square,
        reason: SelectionReason,
    },

    #[error("invalid move {from} -> {to}")]
    InvalidDestination { from: Square, to: Square },

    #[error("FEN parsing failed: {0}")]
    InvalidFen(#[from] shakmaty::fen::ParseFenError),
}

pub type Result<T> = std::result::Result<T, ChessError>;
