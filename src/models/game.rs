//! Game state model - the turn and selection state machine.
//!
//! A game is driven by one event, a click on a board square. The first click
//! selects a piece of the side to move and caches its destinations; the second
//! click either commits a move from that cache or drops the selection.

use std::fmt;

use tracing::{debug, info, warn};

use crate::domain::{
    Board, Check, MoveSet, Piece, PieceColor, PieceKind, Square, find_check, legal_destinations,
};
use crate::error::{ChessError, Result, SelectionReason};

/// Where the two-click protocol currently stands
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    /// A piece is picked up; `destinations` was generated for the board as it
    /// stood when the piece was selected
    Selected { origin: Square, destinations: MoveSet },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    Move,
    Capture,
}

/// What happened when a move was committed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveEvent {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub promoted: bool,
    /// Check found on the board after the move, for either king
    pub check: Option<Check>,
}

impl MoveEvent {
    pub fn kind(&self) -> MoveKind {
        if self.captured.is_some() {
            MoveKind::Capture
        } else {
            MoveKind::Move
        }
    }
}

/// One entry of the move log
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    /// Full-move number, starting at 1 and advancing after Black moves
    pub number: u32,
    pub event: MoveEvent,
}

impl MoveRecord {
    pub fn color(&self) -> PieceColor {
        self.event.piece.color()
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let event = &self.event;
        if event.piece.kind() != PieceKind::Pawn {
            write!(f, "{}", event.piece.kind().letter())?;
        }
        let separator = match event.kind() {
            MoveKind::Move => '-',
            MoveKind::Capture => 'x',
        };
        write!(f, "{}{}{}", event.from, separator, event.to)?;
        if event.promoted {
            f.write_str("=Q")?;
        }
        if event.check.is_some() {
            f.write_str("+")?;
        }
        Ok(())
    }
}

/// Result of a click that was accepted
#[allow(dead_code)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected { origin: Square, destinations: usize },
    Deselected(Square),
    Moved(MoveEvent),
}

/// The main game model containing all chess game state
#[derive(Clone, Debug)]
pub struct GameModel {
    board: Board,
    turn: PieceColor,
    selection: Selection,
    check: Option<Check>,
    last_move: Option<(Square, Square)>,
    history: Vec<MoveRecord>,
    fullmove: u32,
}

impl GameModel {
    /// Standard starting position with White to move
    pub fn new() -> Self {
        Self::with_board(Board::starting(), PieceColor::White)
    }

    /// Set up a position from FEN; only placement and side to move are used
    #[allow(dead_code)]
    pub fn from_fen(fen: &str) -> Result<Self> {
        let (board, turn) = Board::from_fen(fen)?;
        Ok(Self::with_board(board, turn))
    }

    fn with_board(board: Board, turn: PieceColor) -> Self {
        let check = find_check(&board);
        Self {
            board,
            turn,
            selection: Selection::Idle,
            check,
            last_move: None,
            history: Vec::new(),
            fullmove: 1,
        }
    }

    #[allow(dead_code)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get piece at a square of the current position
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.occupant(square)
    }

    pub fn current_turn(&self) -> PieceColor {
        self.turn
    }

    #[allow(dead_code)]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_square(&self) -> Option<Square> {
        match &self.selection {
            Selection::Idle => None,
            Selection::Selected { origin, .. } => Some(*origin),
        }
    }

    /// Cached destinations of the selected piece, empty when idle
    pub fn destinations(&self) -> &[Square] {
        match &self.selection {
            Selection::Idle => &[],
            Selection::Selected { destinations, .. } => destinations,
        }
    }

    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    pub fn check(&self) -> Option<Check> {
        self.check
    }

    pub fn in_check(&self) -> bool {
        self.check.is_some()
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Feed one board click into the state machine.
    ///
    /// Rejected clicks leave the board untouched and the model idle.
    pub fn click(&mut self, square: Square) -> Result<ClickOutcome> {
        let result = match std::mem::take(&mut self.selection) {
            Selection::Idle => self.select(square),
            Selection::Selected {
                origin,
                destinations,
            } => self.complete(origin, &destinations, square),
        };
        if let Err(err) = &result {
            warn!("{err}");
        }
        result
    }

    fn select(&mut self, square: Square) -> Result<ClickOutcome> {
        let reason = match self.board.occupant(square) {
            None => SelectionReason::EmptySquare,
            Some(piece) if piece.color() != self.turn => SelectionReason::OpponentPiece,
            Some(piece) => {
                let destinations = legal_destinations(&self.board, square);
                debug!(
                    "selected {:?} on {square} with {} destinations",
                    piece.kind(),
                    destinations.len()
                );
                let count = destinations.len();
                self.selection = Selection::Selected {
                    origin: square,
                    destinations,
                };
                return Ok(ClickOutcome::Selected {
                    origin: square,
                    destinations: count,
                });
            }
        };
        Err(ChessError::InvalidSelection { square, reason })
    }

    fn complete(
        &mut self,
        origin: Square,
        destinations: &[Square],
        target: Square,
    ) -> Result<ClickOutcome> {
        let Some(piece) = self.board.occupant(origin) else {
            return Err(ChessError::InvalidDestination {
                from: origin,
                to: target,
            });
        };

        if self.board.color_at(target) == Some(piece.color()) {
            debug!("deselected {origin}");
            return Ok(ClickOutcome::Deselected(origin));
        }

        if !destinations.contains(&target) {
            return Err(ChessError::InvalidDestination {
                from: origin,
                to: target,
            });
        }

        Ok(ClickOutcome::Moved(self.apply_move(piece, origin, target)))
    }

    fn apply_move(&mut self, piece: Piece, from: Square, to: Square) -> MoveEvent {
        let captured = self.board.occupant(to);
        let promoted =
            piece.kind() == PieceKind::Pawn && to.rank() == piece.color().promotion_rank();
        let placed = if promoted { piece.promoted() } else { piece };

        self.board.set(from, None);
        self.board.set(to, Some(placed));
        self.last_move = Some((from, to));
        self.turn = self.turn.opponent();
        self.check = find_check(&self.board);

        let event = MoveEvent {
            piece,
            from,
            to,
            captured,
            promoted,
            check: self.check,
        };
        let record = MoveRecord {
            number: self.fullmove,
            event,
        };
        if piece.color() == PieceColor::Black {
            self.fullmove += 1;
        }
        self.history.push(record);

        info!("{}. {} {record}", record.number, piece.color());
        if let Some(check) = self.check {
            info!("{} king on {} in check from {}", check.color, check.king, check.attacker);
        }
        debug!("board after move:\n{}", self.board);
        event
    }
}

impl Default for GameModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(file: i32, rank: i32) -> Square {
        Square::new(file, rank).unwrap()
    }

    fn play(game: &mut GameModel, from: Square, to: Square) -> MoveEvent {
        assert!(matches!(game.click(from), Ok(ClickOutcome::Selected { .. })));
        match game.click(to) {
            Ok(ClickOutcome::Moved(event)) => event,
            other => panic!("expected a move {from} -> {to}, got {other:?}"),
        }
    }

    #[test]
    fn test_new_game() {
        let game = GameModel::new();
        assert_eq!(game.current_turn(), PieceColor::White);
        assert_eq!(game.selection(), &Selection::Idle);
        assert_eq!(game.last_move(), None);
        assert!(!game.in_check());
        assert_eq!(game.board(), &Board::starting());
    }

    #[test]
    fn test_click_empty_square_is_invalid_selection() {
        let mut game = GameModel::new();
        let err = game.click(sq(4, 4)).unwrap_err();
        assert!(matches!(
            err,
            ChessError::InvalidSelection {
                reason: SelectionReason::EmptySquare,
                ..
            }
        ));
        assert_eq!(game.selection(), &Selection::Idle);
    }

    #[test]
    fn test_click_opponent_piece_is_invalid_selection() {
        let mut game = GameModel::new();
        let err = game.click(sq(4, 1)).unwrap_err();
        assert!(matches!(
            err,
            ChessError::InvalidSelection {
                reason: SelectionReason::OpponentPiece,
                ..
            }
        ));
        assert_eq!(err.to_string(), "cannot select e7: piece belongs to the opponent");
        assert_eq!(game.selection(), &Selection::Idle);
    }

    #[test]
    fn test_select_caches_destinations() {
        let mut game = GameModel::new();
        let outcome = game.click(sq(6, 7)).unwrap();
        assert_eq!(
            outcome,
            ClickOutcome::Selected {
                origin: sq(6, 7),
                destinations: 2
            }
        );
        assert_eq!(game.selected_square(), Some(sq(6, 7)));
        assert_eq!(game.destinations(), &[sq(7, 5), sq(5, 5)]);
    }

    #[test]
    fn test_click_same_square_deselects() {
        let mut game = GameModel::new();
        game.click(sq(4, 6)).unwrap();
        assert_eq!(game.click(sq(4, 6)).unwrap(), ClickOutcome::Deselected(sq(4, 6)));
        assert_eq!(game.selection(), &Selection::Idle);
        assert!(game.destinations().is_empty());
        assert_eq!(game.board(), &Board::starting());
        assert_eq!(game.current_turn(), PieceColor::White);
    }

    #[test]
    fn test_click_other_friendly_piece_deselects() {
        let mut game = GameModel::new();
        game.click(sq(4, 6)).unwrap();
        assert_eq!(game.click(sq(3, 6)).unwrap(), ClickOutcome::Deselected(sq(4, 6)));
        assert_eq!(game.selected_square(), None);
    }

    #[test]
    fn test_invalid_destination_returns_to_idle() {
        let mut game = GameModel::new();
        game.click(sq(4, 6)).unwrap();
        let err = game.click(sq(4, 3)).unwrap_err();
        assert!(matches!(err, ChessError::InvalidDestination { .. }));
        assert_eq!(err.to_string(), "invalid move e2 -> e5");
        assert_eq!(game.selection(), &Selection::Idle);
        assert_eq!(game.board(), &Board::starting());
        assert_eq!(game.current_turn(), PieceColor::White);
    }

    #[test]
    fn test_move_toggles_turn_and_sets_last_move() {
        let mut game = GameModel::new();
        let event = play(&mut game, sq(4, 6), sq(4, 4));
        assert_eq!(event.kind(), MoveKind::Move);
        assert_eq!(game.current_turn(), PieceColor::Black);
        assert_eq!(game.last_move(), Some((sq(4, 6), sq(4, 4))));
        assert!(game.board().is_empty(sq(4, 6)));
        assert_eq!(
            game.piece_at(sq(4, 4)),
            Some(Piece::new(PieceKind::Pawn, PieceColor::White))
        );
        assert_eq!(game.selection(), &Selection::Idle);
    }

    #[test]
    fn test_same_side_cannot_move_twice() {
        let mut game = GameModel::new();
        play(&mut game, sq(4, 6), sq(4, 4));
        let err = game.click(sq(4, 4)).unwrap_err();
        assert!(matches!(
            err,
            ChessError::InvalidSelection {
                reason: SelectionReason::OpponentPiece,
                ..
            }
        ));
        assert_eq!(game.current_turn(), PieceColor::Black);
        assert_eq!(game.last_move(), Some((sq(4, 6), sq(4, 4))));
    }

    #[test]
    fn test_capture_event() {
        let mut game = GameModel::new();
        play(&mut game, sq(4, 6), sq(4, 4));
        play(&mut game, sq(3, 1), sq(3, 3));
        let event = play(&mut game, sq(4, 4), sq(3, 3));
        assert_eq!(event.kind(), MoveKind::Capture);
        assert_eq!(
            event.captured,
            Some(Piece::new(PieceKind::Pawn, PieceColor::Black))
        );
        assert_eq!(game.board().pieces().count(), 31);
    }

    #[test]
    fn test_white_pawn_promotes_to_white_queen() {
        let mut game = GameModel::from_fen("8/1P2k3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let event = play(&mut game, sq(1, 1), sq(1, 0));
        assert!(event.promoted);
        assert_eq!(
            game.piece_at(sq(1, 0)),
            Some(Piece::new(PieceKind::Queen, PieceColor::White))
        );
        assert_eq!(game.history()[0].to_string(), "b7-b8=Q");
    }

    #[test]
    fn test_black_pawn_promotes_to_black_queen() {
        let mut game = GameModel::from_fen("4k3/8/8/8/8/8/6p1/K6R b - - 0 1").unwrap();
        let event = play(&mut game, sq(6, 6), sq(7, 7));
        assert!(event.promoted);
        assert_eq!(event.kind(), MoveKind::Capture);
        assert_eq!(
            game.piece_at(sq(7, 7)),
            Some(Piece::new(PieceKind::Queen, PieceColor::Black))
        );
        assert!(game.board().is_empty(sq(6, 6)));
    }

    #[test]
    fn test_check_is_reported_after_move() {
        let mut game = GameModel::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        let event = play(&mut game, sq(0, 7), sq(0, 0));
        let check = event.check.unwrap();
        assert_eq!(check.king, sq(4, 0));
        assert_eq!(check.attacker, sq(0, 0));
        assert!(game.in_check());
        assert_eq!(game.check(), Some(check));
        assert_eq!(game.history()[0].to_string(), "Ra1-a8+");
    }

    #[test]
    fn test_check_clears_when_resolved() {
        let mut game = GameModel::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        play(&mut game, sq(0, 7), sq(0, 0));
        play(&mut game, sq(4, 0), sq(4, 1));
        assert!(!game.in_check());
    }

    #[test]
    fn test_moving_into_check_is_not_rejected() {
        // Pinned bishop on e2 may still leave the e-file
        let mut game = GameModel::from_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1").unwrap();
        let event = play(&mut game, sq(4, 6), sq(3, 5));
        assert_eq!(event.check.map(|c| c.color), Some(PieceColor::White));
        assert_eq!(game.current_turn(), PieceColor::Black);
    }

    #[test]
    fn test_reselection_uses_fresh_board() {
        let mut game = GameModel::new();
        play(&mut game, sq(6, 7), sq(5, 5));
        play(&mut game, sq(4, 1), sq(4, 3));
        game.click(sq(5, 5)).unwrap();
        let expected = legal_destinations(game.board(), sq(5, 5));
        assert_eq!(game.destinations(), expected.as_slice());
        assert!(game.destinations().contains(&sq(4, 3)));
        assert!(game.destinations().contains(&sq(6, 7)));
    }

    #[test]
    fn test_history_numbers_and_notation() {
        let mut game = GameModel::new();
        play(&mut game, sq(4, 6), sq(4, 4));
        play(&mut game, sq(4, 1), sq(4, 3));
        play(&mut game, sq(6, 7), sq(5, 5));
        let history = game.history();
        assert_eq!(history.len(), 3);
        assert_eq!((history[0].number, history[0].color()), (1, PieceColor::White));
        assert_eq!((history[1].number, history[1].color()), (1, PieceColor::Black));
        assert_eq!(history[2].number, 2);
        assert_eq!(history[2].to_string(), "Ng1-f3");
    }

    #[test]
    fn test_from_fen_honors_side_to_move() {
        let mut game = GameModel::from_fen("4k3/8/8/8/8/8/4P3/4K3 b - - 0 1").unwrap();
        assert_eq!(game.current_turn(), PieceColor::Black);
        assert!(game.click(sq(4, 6)).is_err());
        assert!(game.click(sq(4, 0)).is_ok());
    }
}
