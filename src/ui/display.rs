//! Display generation for the board and the move log.
//!
//! This module transforms game state into display-ready view models.
//! It lives in the UI layer and depends on domain + models, not vice versa.

use crate::domain::{PieceColor, Square};
use crate::models::{GameModel, MoveKind, MoveRecord};
use crate::ui::view_models::{DestinationMarker, MoveLogRow, SquareDisplay, SquareHighlight};

/// Display data for all 64 squares, rank by rank from the top of the board.
pub fn board_display(game: &GameModel) -> Vec<SquareDisplay> {
    let last_move = game.last_move();
    let selected = game.selected_square();
    let checked_king = game.check().map(|c| c.king);
    let destinations = game.destinations();

    Square::all()
        .map(|square| {
            let piece = game.piece_at(square);

            let highlight = if last_move.is_some_and(|(from, to)| square == from || square == to) {
                SquareHighlight::LastMove
            } else if selected == Some(square) {
                SquareHighlight::Selected
            } else if checked_king == Some(square) {
                SquareHighlight::CheckedKing
            } else {
                SquareHighlight::None
            };

            let marker = destinations.contains(&square).then(|| {
                if piece.is_some() {
                    DestinationMarker::Capture
                } else {
                    DestinationMarker::Quiet
                }
            });

            SquareDisplay {
                square,
                piece,
                highlight,
                marker,
            }
        })
        .collect()
}

/// Group the move log into numbered rows with a White and a Black column.
pub fn move_log_display(game: &GameModel) -> Vec<MoveLogRow> {
    let mut rows: Vec<MoveLogRow> = Vec::new();

    for record in game.history() {
        let text = record.to_string();
        match record.color() {
            PieceColor::White => rows.push(MoveLogRow {
                number: record.number,
                white: Some(text),
                black: None,
            }),
            PieceColor::Black => match rows.last_mut() {
                Some(row) if row.number == record.number && row.black.is_none() => {
                    row.black = Some(text);
                }
                // Game set up with Black to move
                _ => rows.push(MoveLogRow {
                    number: record.number,
                    white: None,
                    black: Some(text),
                }),
            },
        }
    }

    rows
}

/// Sound effect name for a committed move
pub fn sound_cue(record: &MoveRecord) -> &'static str {
    match record.event.kind() {
        MoveKind::Move => "move",
        MoveKind::Capture => "capture",
    }
}

/// Short status line for the side to move and any check
pub fn status_line(game: &GameModel) -> String {
    match game.check() {
        Some(check) => format!(
            "{} to move - {} king on {} in check from {}",
            game.current_turn(),
            check.color,
            check.king,
            check.attacker
        ),
        None => format!("{} to move", game.current_turn()),
    }
}
