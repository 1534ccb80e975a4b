//! Pure chess domain types and utilities.
//! No GPUI dependencies - this is the domain layer.

use std::fmt;

use shakmaty::{Color as SColor, File, Rank, Role};

use crate::error::{ChessError, Result};

pub const BOARD_SIZE: i32 = 8;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceColor {
    Black,
    White,
}

impl PieceColor {
    pub fn opponent(self) -> PieceColor {
        match self {
            PieceColor::Black => PieceColor::White,
            PieceColor::White => PieceColor::Black,
        }
    }

    /// Rank delta of a pawn step for this side
    pub fn forward(self) -> i32 {
        match self {
            PieceColor::Black => 1,
            PieceColor::White => -1,
        }
    }

    pub fn pawn_start_rank(self) -> u8 {
        match self {
            PieceColor::Black => 1,
            PieceColor::White => 6,
        }
    }

    pub fn promotion_rank(self) -> u8 {
        match self {
            PieceColor::Black => 7,
            PieceColor::White => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::Black => "Black",
            PieceColor::White => "White",
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Uppercase letter used in move notation and board diagrams
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A colored piece, stored as one index in `0..12`.
///
/// `0..6` are the black pawn..king, `6..12` the white pawn..king. Both the kind
/// and the color are read back from the index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece(u8);

const KINDS_PER_COLOR: u8 = 6;

impl Piece {
    pub fn new(kind: PieceKind, color: PieceColor) -> Self {
        let offset = match color {
            PieceColor::Black => 0,
            PieceColor::White => KINDS_PER_COLOR,
        };
        Piece(offset + kind as u8)
    }

    pub fn kind(self) -> PieceKind {
        PieceKind::ALL[(self.0 % KINDS_PER_COLOR) as usize]
    }

    pub fn color(self) -> PieceColor {
        if self.0 < KINDS_PER_COLOR {
            PieceColor::Black
        } else {
            PieceColor::White
        }
    }

    /// Raw index in `0..12`
    #[allow(dead_code)]
    pub fn index(self) -> u8 {
        self.0
    }

    /// The piece this one turns into when it promotes
    pub fn promoted(self) -> Self {
        Piece::new(PieceKind::Queen, self.color())
    }

    /// Diagram letter: uppercase for White, lowercase for Black
    pub fn symbol(self) -> char {
        let letter = self.kind().letter();
        match self.color() {
            PieceColor::White => letter,
            PieceColor::Black => letter.to_ascii_lowercase(),
        }
    }

    /// Unicode glyph used by the board view
    pub fn glyph(self) -> &'static str {
        match self.kind() {
            PieceKind::Pawn => "♟",
            PieceKind::Knight => "♞",
            PieceKind::Bishop => "♝",
            PieceKind::Rook => "♜",
            PieceKind::Queen => "♛",
            PieceKind::King => "♚",
        }
    }
}

/// Board coordinate. Rank 0 is Black's back rank, drawn at the top.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub fn new(file: i32, rank: i32) -> Result<Self> {
        if (0..BOARD_SIZE).contains(&file) && (0..BOARD_SIZE).contains(&rank) {
            Ok(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            Err(ChessError::OutOfBounds { file, rank })
        }
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    /// The square `(df, dr)` away, if it is still on the board
    pub fn offset(self, df: i32, dr: i32) -> Option<Self> {
        Square::new(self.file as i32 + df, self.rank as i32 + dr).ok()
    }

    /// All 64 squares, rank by rank, files ascending within each rank
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|rank| (0..BOARD_SIZE as u8).map(move |file| Square { file, rank }))
    }

    pub fn is_light(self) -> bool {
        (self.file + self.rank) % 2 == 0
    }

    /// Convert to a shakmaty square (our rank 0 is shakmaty's eighth rank)
    pub fn to_shakmaty(self) -> shakmaty::Square {
        let file = File::new(self.file as u32);
        let rank = Rank::new(7 - self.rank as u32);
        shakmaty::Square::from_coords(file, rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file) as char;
        write!(f, "{}{}", file, 8 - self.rank)
    }
}

/// Convert shakmaty piece to our domain Piece
pub fn shakmaty_to_piece(piece: shakmaty::Piece) -> Piece {
    let kind = match piece.role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    };
    Piece::new(kind, shakmaty_to_color(piece.color))
}

pub fn shakmaty_to_color(color: SColor) -> PieceColor {
    match color {
        SColor::White => PieceColor::White,
        SColor::Black => PieceColor::Black,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_index_layout() {
        assert_eq!(Piece::new(PieceKind::Pawn, PieceColor::Black).index(), 0);
        assert_eq!(Piece::new(PieceKind::King, PieceColor::Black).index(), 5);
        assert_eq!(Piece::new(PieceKind::Pawn, PieceColor::White).index(), 6);
        assert_eq!(Piece::new(PieceKind::King, PieceColor::White).index(), 11);
    }

    #[test]
    fn test_kind_and_color_derived_from_index() {
        for color in [PieceColor::Black, PieceColor::White] {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color);
                assert_eq!(piece.kind(), kind);
                assert_eq!(piece.color(), color);
            }
        }
    }

    #[test]
    fn test_promoted_keeps_color() {
        let black = Piece::new(PieceKind::Pawn, PieceColor::Black).promoted();
        assert_eq!(black, Piece::new(PieceKind::Queen, PieceColor::Black));
        let white = Piece::new(PieceKind::Pawn, PieceColor::White).promoted();
        assert_eq!(white, Piece::new(PieceKind::Queen, PieceColor::White));
    }

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(0, 0).is_ok());
        assert!(Square::new(7, 7).is_ok());
        assert!(matches!(
            Square::new(8, 0),
            Err(ChessError::OutOfBounds { file: 8, rank: 0 })
        ));
        assert!(matches!(
            Square::new(3, -1),
            Err(ChessError::OutOfBounds { file: 3, rank: -1 })
        ));
    }

    #[test]
    fn test_square_offset_stays_on_board() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 2), Some(Square::new(1, 2).unwrap()));
    }

    #[test]
    fn test_square_display_is_algebraic() {
        assert_eq!(Square::new(4, 6).unwrap().to_string(), "e2");
        assert_eq!(Square::new(0, 0).unwrap().to_string(), "a8");
        assert_eq!(Square::new(7, 7).unwrap().to_string(), "h1");
    }

    #[test]
    fn test_all_squares_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0).unwrap());
        assert_eq!(squares[1], Square::new(1, 0).unwrap());
        assert_eq!(squares[8], Square::new(0, 1).unwrap());
    }

    #[test]
    fn test_to_shakmaty_flips_rank() {
        assert_eq!(Square::new(4, 6).unwrap().to_shakmaty(), shakmaty::Square::E2);
        assert_eq!(Square::new(0, 0).unwrap().to_shakmaty(), shakmaty::Square::A8);
    }
}
