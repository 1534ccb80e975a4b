//! Board model: an 8x8 grid of optional pieces.
//!
//! The board knows nothing about legality. It answers occupancy queries and
//! is written to only by the move-application step in the game model.

use std::fmt;

use shakmaty::fen::Fen;

use super::chess::{Piece, PieceColor, PieceKind, Square, shakmaty_to_color, shakmaty_to_piece};
use crate::error::Result;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    /// Indexed `[rank][file]`
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting position, Black on ranks 0-1 and White on ranks 6-7
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][file] = Some(Piece::new(*kind, PieceColor::Black));
            board.squares[1][file] = Some(Piece::new(PieceKind::Pawn, PieceColor::Black));
            board.squares[6][file] = Some(Piece::new(PieceKind::Pawn, PieceColor::White));
            board.squares[7][file] = Some(Piece::new(*kind, PieceColor::White));
        }
        board
    }

    /// Build a board from a FEN string, returning the side to move as well.
    ///
    /// Only piece placement and the active color are read; castling rights and
    /// en passant fields are accepted but have no meaning here.
    pub fn from_fen(fen: &str) -> Result<(Self, PieceColor)> {
        let fen: Fen = fen.parse()?;
        let setup = fen.as_setup();
        let mut board = Self::empty();
        for square in Square::all() {
            let piece = setup.board.piece_at(square.to_shakmaty()).map(shakmaty_to_piece);
            board.set(square, piece);
        }
        Ok((board, shakmaty_to_color(setup.turn)))
    }

    pub fn occupant(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    /// Occupant lookup from raw coordinates, failing when they leave the board
    #[allow(dead_code)]
    pub fn occupant_at(&self, file: i32, rank: i32) -> Result<Option<Piece>> {
        Ok(self.occupant(Square::new(file, rank)?))
    }

    pub fn color_of(piece: Piece) -> PieceColor {
        piece.color()
    }

    pub fn color_at(&self, square: Square) -> Option<PieceColor> {
        self.occupant(square).map(Board::color_of)
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.occupant(square).is_none()
    }

    pub(crate) fn set(&mut self, square: Square, value: Option<Piece>) {
        self.squares[square.rank() as usize][square.file() as usize] = value;
    }

    /// Occupied squares in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.occupant(sq).map(|p| (sq, p)))
    }

    /// First king of `color` in row-major order
    #[allow(dead_code)]
    pub fn king_square(&self, color: PieceColor) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces().find(|&(_, p)| p == king).map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in self.squares.iter() {
            let line: String = rank
                .iter()
                .map(|sq| sq.map(Piece::symbol).unwrap_or('.'))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
