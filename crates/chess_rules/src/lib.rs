//! Chess rules engine.
//!
//! Keeps the authoritative board for one game, decides whether each
//! requested move is legal (piece geometry, blocking, captures, check
//! avoidance, castling, en passant, promotion) and derives the game state
//! and draw conditions.
//!
//! ```
//! use chess_rules::{BoardManager, BoardState, Coordinate};
//!
//! let mut game = BoardManager::new();
//! game.perform_move(Coordinate::new(4, 1), Coordinate::new(4, 3)).unwrap();
//! assert_eq!(game.update_board_state(), BoardState::Regular);
//! ```

pub mod attacks;
pub mod board;
pub mod config;
pub mod error;
pub mod manager;
pub mod movement;
pub mod perft;
pub mod types;

pub use attacks::{is_king_in_check, is_square_attacked};
pub use board::*;
pub use config::RulesConfig;
pub use error::{ConfigError, MoveError};
pub use manager::BoardManager;
pub use movement::MovementRule;
pub use perft::perft;
pub use types::*;
