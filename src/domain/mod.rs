//! Chess rules: board model, move generation and check detection.

pub mod attacks;
pub mod board;
pub mod chess;
pub mod dispatch;
pub mod movegen;

pub use attacks::{Check, find_check};
pub use board::Board;
pub use chess::{Piece, PieceColor, PieceKind, Square};
pub use dispatch::legal_destinations;
pub use movegen::MoveSet;
