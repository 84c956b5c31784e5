use crate::manager::BoardManager;

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`,
/// using the same legality pipeline as `perform_move`.
pub fn perft(manager: &BoardManager, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = manager.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|mv| perft(&manager.successor(mv), depth - 1))
        .sum()
}
