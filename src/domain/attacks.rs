//! Attack and check detection on top of the move dispatcher.
//!
//! A square counts as attacked when some enemy piece lists it among its
//! pseudo-legal destinations. For pawns that means forward pushes count and
//! empty diagonals do not.

use super::board::Board;
use super::chess::{PieceColor, PieceKind, Square};
use super::dispatch::legal_destinations;

/// A king found under attack
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Check {
    pub king: Square,
    pub color: PieceColor,
    pub attacker: Square,
}

/// First attacker of `target` among pieces of the side opposing `victim`.
///
/// Squares are scanned rank by rank, files ascending within a rank, and the
/// first hit is returned.
pub fn is_square_attacked(board: &Board, target: Square, victim: PieceColor) -> Option<Square> {
    let enemy = victim.opponent();
    board
        .pieces()
        .filter(|(_, piece)| piece.color() == enemy)
        .map(|(origin, _)| origin)
        .find(|&origin| legal_destinations(board, origin).contains(&target))
}

/// First king under attack, scanning the board in row-major order
pub fn find_check(board: &Board) -> Option<Check> {
    board
        .pieces()
        .filter(|(_, piece)| piece.kind() == PieceKind::King)
        .find_map(|(king, piece)| {
            is_square_attacked(board, king, piece.color()).map(|attacker| Check {
                king,
                color: piece.color(),
                attacker,
            })
        })
}

#[allow(dead_code)]
pub fn is_king_in_check(board: &Board) -> bool {
    find_check(board).is_some()
}
