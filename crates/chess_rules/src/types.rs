use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of files and ranks on the board.
pub const BOARD_SIZE: i8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank the back-rank pieces of this color start on.
    pub fn home_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const WHITE_KING: Piece = Piece::new(Color::White, PieceKind::King);
    pub const WHITE_QUEEN: Piece = Piece::new(Color::White, PieceKind::Queen);
    pub const WHITE_BISHOP: Piece = Piece::new(Color::White, PieceKind::Bishop);
    pub const WHITE_KNIGHT: Piece = Piece::new(Color::White, PieceKind::Knight);
    pub const WHITE_ROOK: Piece = Piece::new(Color::White, PieceKind::Rook);
    pub const WHITE_PAWN: Piece = Piece::new(Color::White, PieceKind::Pawn);
    pub const BLACK_KING: Piece = Piece::new(Color::Black, PieceKind::King);
    pub const BLACK_QUEEN: Piece = Piece::new(Color::Black, PieceKind::Queen);
    pub const BLACK_BISHOP: Piece = Piece::new(Color::Black, PieceKind::Bishop);
    pub const BLACK_KNIGHT: Piece = Piece::new(Color::Black, PieceKind::Knight);
    pub const BLACK_ROOK: Piece = Piece::new(Color::Black, PieceKind::Rook);
    pub const BLACK_PAWN: Piece = Piece::new(Color::Black, PieceKind::Pawn);

    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// A board square as (file, rank), both 0..8 when on the board.
///
/// Construction never rejects out-of-range values; callers check
/// [`Coordinate::is_on_board`] before looking anything up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub file: i8,
    pub rank: i8,
}

impl Coordinate {
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.file) && (0..BOARD_SIZE).contains(&self.rank)
    }

    /// Index into a 64-cell board, `None` when off the board.
    pub fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.rank as usize * BOARD_SIZE as usize + self.file as usize)
        } else {
            None
        }
    }

    pub fn offset(self, df: i8, dr: i8) -> Coordinate {
        Coordinate::new(self.file + df, self.rank + dr)
    }

    /// Iterates over all 64 squares, file-major.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|file| (0..BOARD_SIZE).map(move |rank| Coordinate::new(file, rank)))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = (b'a' + self.file as u8) as char;
            write!(f, "{file}{}", self.rank + 1)
        } else {
            write!(f, "({}, {})", self.file, self.rank)
        }
    }
}

/// How a legal move interacts with the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveType {
    /// Onto an empty square.
    Advance,
    Capture,
    Castling,
    EnPassant,
}

impl MoveType {
    /// Captures, en passant and castling can never be undone by later moves.
    pub fn is_irreversible(self) -> bool {
        !matches!(self, MoveType::Advance)
    }
}

/// A half-move accepted by the board manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Coordinate,
    pub to: Coordinate,
    pub moved_piece: Piece,
    pub move_type: MoveType,
}

impl Move {
    pub fn new(from: Coordinate, to: Coordinate, moved_piece: Piece, move_type: MoveType) -> Self {
        Self {
            from,
            to,
            moved_piece,
            move_type,
        }
    }

    /// Captures (including en passant) and pawn moves reset the fifty-move count.
    pub fn resets_fifty_move_count(&self) -> bool {
        matches!(self.move_type, MoveType::Capture | MoveType::EnPassant)
            || self.moved_piece.kind == PieceKind::Pawn
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardState {
    #[default]
    Regular,
    Check,
    CheckMate,
    StaleMate,
}
