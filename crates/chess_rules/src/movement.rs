//! Per-piece movement rules.
//!
//! Each rule answers one question: can the piece standing on `from` travel
//! to `to` on this board, and if so, what kind of move is it. Rules assume
//! the board manager has already rejected off-board coordinates, null
//! moves and destinations holding the mover's own piece.

use crate::{
    attacks::is_square_attacked,
    board::{Board, castling_rook_squares},
    types::*,
};

/// The closed set of movement rules, one per piece variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovementRule {
    Bishop,
    Rook,
    Queen,
    Knight,
    King,
    WhitePawn,
    BlackPawn,
}

impl MovementRule {
    pub fn for_piece(piece: Piece) -> MovementRule {
        match (piece.kind, piece.color) {
            (PieceKind::Bishop, _) => MovementRule::Bishop,
            (PieceKind::Rook, _) => MovementRule::Rook,
            (PieceKind::Queen, _) => MovementRule::Queen,
            (PieceKind::Knight, _) => MovementRule::Knight,
            (PieceKind::King, _) => MovementRule::King,
            (PieceKind::Pawn, Color::White) => MovementRule::WhitePawn,
            (PieceKind::Pawn, Color::Black) => MovementRule::BlackPawn,
        }
    }

    /// Classifies `from -> to` for this rule, `None` if the piece cannot
    /// make that move.
    pub fn evaluate(self, board: &Board, from: Coordinate, to: Coordinate) -> Option<MoveType> {
        match self {
            MovementRule::Bishop => bishop(board, from, to),
            MovementRule::Rook => rook(board, from, to),
            MovementRule::Queen => bishop(board, from, to).or_else(|| rook(board, from, to)),
            MovementRule::Knight => knight(board, from, to),
            MovementRule::King => king(board, from, to),
            MovementRule::WhitePawn => pawn(board, from, to, Color::White),
            MovementRule::BlackPawn => pawn(board, from, to, Color::Black),
        }
    }
}

fn occupancy_type(board: &Board, to: Coordinate) -> MoveType {
    if board.is_empty_at(to) {
        MoveType::Advance
    } else {
        MoveType::Capture
    }
}

/// True if every square strictly between `from` and `to` is empty.
/// The two squares must share a rank, file or diagonal.
fn path_is_clear(board: &Board, from: Coordinate, to: Coordinate) -> bool {
    let df = (to.file - from.file).signum();
    let dr = (to.rank - from.rank).signum();
    let mut at = from.offset(df, dr);
    while at != to {
        if !board.is_empty_at(at) {
            return false;
        }
        at = at.offset(df, dr);
    }
    true
}

fn bishop(board: &Board, from: Coordinate, to: Coordinate) -> Option<MoveType> {
    let df = (to.file - from.file).abs();
    let dr = (to.rank - from.rank).abs();
    if df == 0 || df != dr || !path_is_clear(board, from, to) {
        return None;
    }
    Some(occupancy_type(board, to))
}

fn rook(board: &Board, from: Coordinate, to: Coordinate) -> Option<MoveType> {
    let df = to.file - from.file;
    let dr = to.rank - from.rank;
    if (df == 0) == (dr == 0) || !path_is_clear(board, from, to) {
        return None;
    }
    Some(occupancy_type(board, to))
}

fn knight(board: &Board, from: Coordinate, to: Coordinate) -> Option<MoveType> {
    match ((to.file - from.file).abs(), (to.rank - from.rank).abs()) {
        (1, 2) | (2, 1) => Some(occupancy_type(board, to)),
        _ => None,
    }
}

fn king(board: &Board, from: Coordinate, to: Coordinate) -> Option<MoveType> {
    let df = to.file - from.file;
    let dr = to.rank - from.rank;
    if df.abs() <= 1 && dr.abs() <= 1 {
        if df == 0 && dr == 0 {
            return None;
        }
        return Some(occupancy_type(board, to));
    }
    if dr == 0 && df.abs() == 2 && can_castle(board, from, to) {
        return Some(MoveType::Castling);
    }
    None
}

/// Home square of the king before castling.
const KING_HOME_FILE: i8 = 4;

fn can_castle(board: &Board, from: Coordinate, to: Coordinate) -> bool {
    let Some(king) = board.piece_at(from) else {
        return false;
    };
    let color = king.color;
    if from != Coordinate::new(KING_HOME_FILE, color.home_rank()) || !board.is_empty_at(to) {
        return false;
    }

    let (rook_home, _) = castling_rook_squares(from, to);
    let rook = Piece::new(color, PieceKind::Rook);
    if board.piece_at(rook_home) != Some(rook) {
        return false;
    }

    // Neither piece may have moved, even if it came back. Anything landing
    // on the corner means the original rook left it or was captured there.
    let moved = board
        .history()
        .iter()
        .any(|mv| mv.moved_piece == king || mv.from == rook_home || mv.to == rook_home);
    if moved || !path_is_clear(board, from, rook_home) {
        return false;
    }

    // The king may not castle out of, through, or into check.
    let enemy = color.other();
    let step = (to.file - from.file).signum();
    let transit = from.offset(step, 0);
    [from, transit, to]
        .into_iter()
        .all(|sq| !is_square_attacked(board, sq, enemy))
}

fn pawn(board: &Board, from: Coordinate, to: Coordinate, color: Color) -> Option<MoveType> {
    let (dir, start_rank): (i8, i8) = match color {
        Color::White => (1, 1),
        Color::Black => (-1, 6),
    };
    let df = to.file - from.file;
    let dr = to.rank - from.rank;

    if df == 0 {
        if dr == dir && board.is_empty_at(to) {
            return Some(MoveType::Advance);
        }
        if dr == 2 * dir
            && from.rank == start_rank
            && board.is_empty_at(from.offset(0, dir))
            && board.is_empty_at(to)
        {
            return Some(MoveType::Advance);
        }
        return None;
    }

    if df.abs() != 1 || dr != dir {
        return None;
    }
    match board.piece_at(to) {
        Some(target) if target.color != color => Some(MoveType::Capture),
        Some(_) => None,
        None if is_en_passant(board, from, to, color) => Some(MoveType::EnPassant),
        None => None,
    }
}

/// The previous half-move must be an enemy pawn's double step that landed
/// right beside `from`, on the destination's file.
fn is_en_passant(board: &Board, from: Coordinate, to: Coordinate, color: Color) -> bool {
    let Some(last) = board.last_move() else {
        return false;
    };
    let enemy_pawn = Piece::new(color.other(), PieceKind::Pawn);
    let victim = Coordinate::new(to.file, from.rank);
    let enemy_dir: i8 = match color {
        Color::White => -1,
        Color::Black => 1,
    };

    last.moved_piece == enemy_pawn
        && last.to == victim
        && last.from == victim.offset(0, -2 * enemy_dir)
        && board.piece_at(victim) == Some(enemy_pawn)
}

#[cfg(test)]
#[path = "movement_tests.rs"]
mod movement_tests;
