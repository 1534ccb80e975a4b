mod game;

pub use game::{ClickOutcome, GameModel, MoveEvent, MoveKind, MoveRecord, Selection};
