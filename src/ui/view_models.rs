//! View models for rendering the board and the status panel.
//!
//! These types are DTOs (Data Transfer Objects) that prepare game state
//! for display in the UI. They live in the UI layer, not the domain layer.

use crate::domain::{Piece, Square};

/// Background treatment of a square, in priority order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SquareHighlight {
    LastMove,
    Selected,
    CheckedKing,
    None,
}

/// Marker drawn over a square the selected piece can reach
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DestinationMarker {
    /// Small ring on an empty destination
    Quiet,
    /// Border around an occupied destination
    Capture,
}

/// Display data for a single board square
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareDisplay {
    pub square: Square,
    pub piece: Option<Piece>,
    pub highlight: SquareHighlight,
    pub marker: Option<DestinationMarker>,
}

/// One numbered row of the move log
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveLogRow {
    pub number: u32,
    pub white: Option<String>,
    pub black: Option<String>,
}
