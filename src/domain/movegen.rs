//! Per-piece destination generators.
//!
//! Every generator is pseudo-legal: it follows the piece's movement and
//! capture pattern on one board snapshot and never looks at king safety.

use super::board::Board;
use super::chess::{PieceColor, Square};

/// Destinations for one piece from one origin, rebuilt on every query
pub type MoveSet = Vec<Square>;

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const DIAGONALS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Empty or held by the other side
fn is_open_to(board: &Board, square: Square, mover: PieceColor) -> bool {
    board.color_at(square) != Some(mover)
}

fn leaper_moves(board: &Board, origin: Square, mover: PieceColor, offsets: &[(i32, i32)]) -> MoveSet {
    offsets
        .iter()
        .filter_map(|&(df, dr)| origin.offset(df, dr))
        .filter(|&dst| is_open_to(board, dst, mover))
        .collect()
}

fn slider_moves(board: &Board, origin: Square, mover: PieceColor, rays: &[(i32, i32)]) -> MoveSet {
    let mut moves = MoveSet::new();
    for &(df, dr) in rays {
        let mut current = origin;
        while let Some(next) = current.offset(df, dr) {
            match board.color_at(next) {
                None => moves.push(next),
                Some(color) => {
                    if color != mover {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
    moves
}

pub fn pawn_moves(board: &Board, origin: Square, mover: PieceColor) -> MoveSet {
    let mut moves = MoveSet::new();
    let forward = mover.forward();

    if let Some(one) = origin.offset(0, forward) {
        if board.is_empty(one) {
            moves.push(one);
            if origin.rank() == mover.pawn_start_rank() {
                if let Some(two) = origin.offset(0, 2 * forward) {
                    if board.is_empty(two) {
                        moves.push(two);
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        if let Some(diag) = origin.offset(df, forward) {
            if board.color_at(diag) == Some(mover.opponent()) {
                moves.push(diag);
            }
        }
    }

    moves
}

pub fn knight_moves(board: &Board, origin: Square, mover: PieceColor) -> MoveSet {
    leaper_moves(board, origin, mover, &KNIGHT_OFFSETS)
}

pub fn bishop_moves(board: &Board, origin: Square, mover: PieceColor) -> MoveSet {
    slider_moves(board, origin, mover, &DIAGONALS)
}

pub fn rook_moves(board: &Board, origin: Square, mover: PieceColor) -> MoveSet {
    slider_moves(board, origin, mover, &ORTHOGONALS)
}

pub fn queen_moves(board: &Board, origin: Square, mover: PieceColor) -> MoveSet {
    let mut moves = rook_moves(board, origin, mover);
    moves.extend(bishop_moves(board, origin, mover));
    moves
}

/// No castling, and squares attacked by the opponent are not filtered out
pub fn king_moves(board: &Board, origin: Square, mover: PieceColor) -> MoveSet {
    leaper_moves(board, origin, mover, &KING_OFFSETS)
}
