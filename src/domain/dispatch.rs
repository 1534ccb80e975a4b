//! Routes the piece on a square to its generator.

use super::board::Board;
use super::chess::{PieceKind, Square};
use super::movegen::{
    MoveSet, bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves,
};

/// Pseudo-legal destinations for whatever stands on `origin`.
///
/// An empty origin yields an empty set. Check status is never consulted.
pub fn legal_destinations(board: &Board, origin: Square) -> MoveSet {
    let Some(piece) = board.occupant(origin) else {
        return MoveSet::new();
    };
    let mover = piece.color();
    match piece.kind() {
        PieceKind::Pawn => pawn_moves(board, origin, mover),
        PieceKind::Knight => knight_moves(board, origin, mover),
        PieceKind::Bishop => bishop_moves(board, origin, mover),
        PieceKind::Rook => rook_moves(board, origin, mover),
        PieceKind::Queen => queen_moves(board, origin, mover),
        PieceKind::King => king_moves(board, origin, mover),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(file: i32, rank: i32) -> Square {
        Square::new(file, rank).unwrap()
    }

    #[test]
    fn test_empty_origin_has_no_destinations() {
        let board = Board::starting();
        assert!(legal_destinations(&board, sq(4, 4)).is_empty());
    }

    #[test]
    fn test_color_comes_from_the_piece() {
        let board = Board::starting();
        // Black pawn on e7 pushes towards rank 7, White pawn on e2 towards rank 0
        assert_eq!(legal_destinations(&board, sq(4, 1)), vec![sq(4, 2), sq(4, 3)]);
        assert_eq!(legal_destinations(&board, sq(4, 6)), vec![sq(4, 5), sq(4, 4)]);
    }

    #[test]
    fn test_initial_position_move_count() {
        let board = Board::starting();
        let white: usize = board
            .pieces()
            .filter(|(_, p)| p.color() == crate::domain::PieceColor::White)
            .map(|(s, _)| legal_destinations(&board, s).len())
            .sum();
        assert_eq!(white, 20);
    }

    #[test]
    fn test_blocked_pieces_have_no_destinations() {
        let board = Board::starting();
        for file in [0, 2, 3, 4, 5, 7] {
            assert!(legal_destinations(&board, sq(file, 7)).is_empty());
        }
    }
}
