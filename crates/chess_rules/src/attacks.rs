//! Attack detection built on the movement rules.
//!
//! A square counts as attacked when some piece of the attacking color
//! could legally capture onto it. Every candidate square is tried against
//! its piece's movement rule, so check detection and move validation can
//! never disagree about how a piece moves.

use crate::{board::Board, movement::MovementRule, types::*};

/// True if some piece of color `by` could capture on `target`.
/// `target` must hold a piece of the other color.
fn is_capturable(board: &Board, target: Coordinate, by: Color) -> bool {
    board.occupied_by(by).any(|from| {
        board.piece_at(from).is_some_and(|attacker| {
            MovementRule::for_piece(attacker).evaluate(board, from, target) == Some(MoveType::Capture)
        })
    })
}

/// Is `color`'s king attacked on this board?
///
/// A board without that king is never in check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.king_coordinate(color) {
        Some(king) => is_capturable(board, king, color.other()),
        None => false,
    }
}

/// Would a king of the side opposing `by` be attacked if it stood on
/// `target`?
///
/// Tested on a probe board where the defending king has been moved to
/// `target`, so pawns only count through their capturing diagonals.
pub fn is_square_attacked(board: &Board, target: Coordinate, by: Color) -> bool {
    if !target.is_on_board() {
        return false;
    }
    let defender = Piece::new(by.other(), PieceKind::King);
    let mut probe = board.clone();
    if let Some(king) = probe.king_coordinate(by.other()) {
        probe.set_piece_at(king, None);
    }
    probe.set_piece_at(target, Some(defender));
    is_capturable(&probe, target, by)
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
