//! Randomized playouts checked against history replay and state derivation.

use rand::prelude::*;
use rand::rngs::StdRng;

use chess_rules::{BoardManager, BoardState, Coordinate, Move};

const GAMES: u64 = 8;
const MAX_PLIES: usize = 160;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Plays random legal moves until the game ends, the fifty-move rule
/// fires or `MAX_PLIES` is reached.
fn random_game(seed: u64) -> BoardManager {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut manager = BoardManager::new();

    while manager.board().history().len() < MAX_PLIES && !manager.check_fifty_move_rule() {
        let moves = manager.legal_moves();
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        let played = manager
            .perform_move(mv.from, mv.to)
            .unwrap_or_else(|e| panic!("seed {seed}: listed move {mv} refused: {e}"));
        assert_eq!(&played, mv);
    }
    manager
}

#[test]
fn test_replay_rebuilds_identical_board() {
    init_tracing();
    for seed in 0..GAMES {
        let game = random_game(seed);
        let replayed = BoardManager::from_moves(game.board().history())
            .unwrap_or_else(|e| panic!("seed {seed}: replay failed: {e}"));
        assert_eq!(replayed.board(), game.board(), "seed {seed}");
        assert_eq!(replayed.board_state(), game.board_state(), "seed {seed}");
    }
}

#[test]
fn test_history_survives_json() {
    let game = random_game(42);
    let json = serde_json::to_string(game.board().history()).unwrap();
    let moves: Vec<Move> = serde_json::from_str(&json).unwrap();
    assert_eq!(moves.as_slice(), game.board().history());

    let replayed = BoardManager::from_moves(&moves).unwrap();
    assert_eq!(replayed.board(), game.board());
}

#[test]
fn test_terminal_states_match_empty_move_list() {
    for seed in 0..GAMES {
        let game = random_game(seed);
        let state = game.board_state();
        let no_moves = game.legal_moves().is_empty();
        assert_eq!(
            no_moves,
            matches!(state, BoardState::CheckMate | BoardState::StaleMate),
            "seed {seed}: state {state:?}"
        );
    }
}

#[test]
fn test_rejected_moves_leave_board_untouched() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(7);
    let mut manager = BoardManager::new();
    let squares: Vec<Coordinate> = Coordinate::all().collect();
    let mut rejected = 0;

    for _ in 0..2_000 {
        let from = *squares.choose(&mut rng).unwrap();
        let to = *squares.choose(&mut rng).unwrap();
        let before = manager.board().clone();
        match manager.perform_move(from, to) {
            Ok(mv) => {
                assert_eq!(manager.board().history().len(), before.history().len() + 1);
                assert_eq!(manager.board().last_move(), Some(&mv));
            }
            Err(_) => {
                rejected += 1;
                assert_eq!(manager.board(), &before);
            }
        }
        if manager.board().history().len() >= MAX_PLIES || manager.check_fifty_move_rule() {
            break;
        }
    }
    assert!(rejected > 0);
}
