//! Error types for chess_rules

use thiserror::Error;

use crate::types::{Color, Coordinate};

/// Why a requested move was refused.
///
/// Every variant is an invalid move and leaves the board untouched.
/// [`MoveError::KingWouldBeInCheck`] is kept apart so a front end can
/// explain that the move was geometrically fine but exposed the king.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("coordinates {from} -> {to} fall outside the board")]
    OffBoard { from: Coordinate, to: Coordinate },

    #[error("origin and destination are the same square ({0})")]
    NullMove(Coordinate),

    #[error("there is no piece on {0}")]
    EmptyOrigin(Coordinate),

    #[error("the piece on {at} belongs to {owner:?}, but it is {to_move:?}'s turn")]
    NotYourPiece {
        at: Coordinate,
        owner: Color,
        to_move: Color,
    },

    #[error("{0} is occupied by one of your own pieces")]
    OwnPieceAtDestination(Coordinate),

    #[error("the piece on {from} cannot move to {to}")]
    IllegalPieceMove { from: Coordinate, to: Coordinate },

    #[error("no capture or pawn move in the last {0} half-moves; the game is over")]
    FiftyMoveLockout(usize),

    #[error("moving {from} -> {to} would leave your king in check")]
    KingWouldBeInCheck { from: Coordinate, to: Coordinate },
}

impl MoveError {
    /// True for moves refused only because they expose the mover's king.
    pub fn is_king_exposure(&self) -> bool {
        matches!(self, MoveError::KingWouldBeInCheck { .. })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid rules configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
