//! The board manager: validates and applies moves, derives the game state
//! and checks the draw rules.

use tracing::{debug, info, trace};

use crate::{
    attacks::is_king_in_check,
    board::Board,
    config::RulesConfig,
    error::MoveError,
    movement::MovementRule,
    types::*,
};

/// Owns one game's board and runs every move through the legality
/// pipeline: structural checks, the fifty-move gate, the piece's movement
/// rule, then a king-safety test on the successor board.
#[derive(Clone, Debug)]
pub struct BoardManager {
    board: Board,
    /// Position the game started from, for rebuilding earlier layouts.
    start: Board,
    config: RulesConfig,
}

impl Default for BoardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardManager {
    /// New game from the standard starting layout.
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    pub fn with_config(config: RulesConfig) -> Self {
        Self::from_board_with_config(Board::initial(), config)
    }

    /// Takes over a custom board. Its pieces and any history it already
    /// carries become the starting point of the game.
    pub fn from_board(board: Board) -> Self {
        Self::from_board_with_config(board, RulesConfig::default())
    }

    pub fn from_board_with_config(board: Board, config: RulesConfig) -> Self {
        Self {
            start: board.clone(),
            board,
            config,
        }
    }

    /// Rebuilds a game by replaying `moves` from the starting layout
    /// through [`BoardManager::perform_move`]. Fails on the first move the
    /// rules refuse.
    pub fn from_moves(moves: &[Move]) -> Result<Self, MoveError> {
        Self::from_moves_with_config(moves, RulesConfig::default())
    }

    pub fn from_moves_with_config(moves: &[Move], config: RulesConfig) -> Result<Self, MoveError> {
        let mut manager = Self::with_config(config);
        for mv in moves {
            manager.perform_move(mv.from, mv.to)?;
        }
        Ok(manager)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn next_move_color(&self) -> Color {
        self.board.next_move_color()
    }

    /// Validates and plays `from -> to` for the side to move.
    ///
    /// On error the board is left exactly as it was.
    pub fn perform_move(&mut self, from: Coordinate, to: Coordinate) -> Result<Move, MoveError> {
        let mv = self.validate_move(from, to).inspect_err(|err| {
            debug!(%from, %to, reason = %err, "move rejected");
        })?;

        self.board.apply_move(&mv);
        debug!(
            %from,
            %to,
            piece = ?mv.moved_piece,
            move_type = ?mv.move_type,
            ply = self.board.history().len(),
            "move applied"
        );
        Ok(mv)
    }

    fn validate_move(&self, from: Coordinate, to: Coordinate) -> Result<Move, MoveError> {
        let piece = self.check_structure(from, to)?;

        if self.is_locked_out() {
            return Err(MoveError::FiftyMoveLockout(self.config.fifty_move_half_moves));
        }

        let move_type = MovementRule::for_piece(piece)
            .evaluate(&self.board, from, to)
            .ok_or(MoveError::IllegalPieceMove { from, to })?;
        let mv = Move::new(from, to, piece, move_type);

        let next = self.board.successor(&mv);
        if is_king_in_check(&next, piece.color) {
            trace!(%from, %to, "simulated move exposes the king");
            return Err(MoveError::KingWouldBeInCheck { from, to });
        }
        Ok(mv)
    }

    /// Checks that do not depend on how the piece moves. Returns the piece
    /// standing on `from`.
    fn check_structure(&self, from: Coordinate, to: Coordinate) -> Result<Piece, MoveError> {
        if !from.is_on_board() || !to.is_on_board() {
            return Err(MoveError::OffBoard { from, to });
        }
        if from == to {
            return Err(MoveError::NullMove(from));
        }

        let to_move = self.next_move_color();
        let piece = self.board.piece_at(from).ok_or(MoveError::EmptyOrigin(from))?;
        if piece.color != to_move {
            return Err(MoveError::NotYourPiece {
                at: from,
                owner: piece.color,
                to_move,
            });
        }
        if self.board.piece_at(to).is_some_and(|p| p.color == to_move) {
            return Err(MoveError::OwnPieceAtDestination(to));
        }
        Ok(piece)
    }

    /// True when the fifty-move rule holds and is configured to end the game.
    fn is_locked_out(&self) -> bool {
        self.config.fifty_move_lockout && self.check_fifty_move_rule()
    }

    /// Every move `perform_move` would accept right now. Empty once the
    /// fifty-move lockout holds.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_locked_out() {
            return Vec::new();
        }
        let color = self.next_move_color();
        self.board
            .occupied_by(color)
            .flat_map(|from| {
                Coordinate::all().filter_map(move |to| self.validate_move(from, to).ok())
            })
            .collect()
    }

    /// Copy of this game with an already-validated move played.
    pub(crate) fn successor(&self, mv: &Move) -> BoardManager {
        let mut next = self.clone();
        next.board.apply_move(mv);
        next
    }

    fn has_any_legal_move(&self) -> bool {
        if self.is_locked_out() {
            return false;
        }
        let color = self.next_move_color();
        self.board.occupied_by(color).any(|from| {
            Coordinate::all().any(|to| self.validate_move(from, to).is_ok())
        })
    }

    /// State of the position for the side to move, without recording it.
    pub fn board_state(&self) -> BoardState {
        let color = self.next_move_color();
        let in_check = is_king_in_check(&self.board, color);
        let can_move = self.has_any_legal_move();
        trace!(?color, in_check, can_move, "deriving board state");

        match (in_check, can_move) {
            (true, true) => BoardState::Check,
            (true, false) => BoardState::CheckMate,
            (false, true) => BoardState::Regular,
            (false, false) => BoardState::StaleMate,
        }
    }

    /// Derives the state of the position and records it on the board.
    /// Pieces and history are never touched.
    pub fn update_board_state(&mut self) -> BoardState {
        let state = self.board_state();
        self.board.set_state(state);
        state
    }

    /// True once the current layout has occurred the configured number of
    /// times (three by default, the current occurrence included).
    ///
    /// Layouts before the most recent capture, en passant or castling can
    /// never recur, so only the moves from there on are replayed.
    pub fn check_threefold_repetition_rule(&self) -> bool {
        let history = self.board.history();
        let seeded = self.start.history().len();

        let irreversible = history[seeded..]
            .iter()
            .rposition(|mv| mv.move_type.is_irreversible())
            .map(|i| i + seeded);
        let pivot = irreversible.unwrap_or(seeded);

        let mut parallel = self.start.clone();
        for mv in &history[seeded..pivot] {
            parallel.apply_move(mv);
        }

        let mut occurrences = 0;
        if irreversible.is_none() && parallel.same_layout(&self.board) {
            occurrences += 1;
        }
        for mv in &history[pivot..] {
            parallel.apply_move(mv);
            if parallel.same_layout(&self.board) {
                occurrences += 1;
            }
        }

        let repeated = occurrences >= self.config.repetition_occurrences;
        if repeated {
            info!(occurrences, "threefold repetition");
        }
        repeated
    }

    /// True if the last `fifty_move_half_moves` half-moves (100 by
    /// default) contain no capture and no pawn move.
    pub fn check_fifty_move_rule(&self) -> bool {
        let history = self.board.history();
        let window = self.config.fifty_move_half_moves;
        if history.len() < window {
            return false;
        }
        history[history.len() - window..]
            .iter()
            .all(|mv| !mv.resets_fifty_move_count())
    }

    /// Stalemate, threefold repetition or the fifty-move rule.
    pub fn is_draw(&self) -> bool {
        if self.check_fifty_move_rule() {
            info!(
                half_moves = self.config.fifty_move_half_moves,
                "fifty-move rule reached"
            );
            return true;
        }
        self.check_threefold_repetition_rule() || self.board_state() == BoardState::StaleMate
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod manager_tests;
