use crate::types::*;

/// Piece placement plus the game's move history.
///
/// The history is append-only and its length decides whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pieces: [Option<Piece>; 64],
    history: Vec<Move>,
    state: BoardState,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces and no history, for custom setups.
    pub fn empty() -> Self {
        Board {
            pieces: [None; 64],
            history: Vec::new(),
            state: BoardState::Regular,
        }
    }

    /// Standard starting layout.
    pub fn initial() -> Self {
        let mut b = Board::empty();

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back.iter().enumerate() {
            let file = file as i8;
            b.set_piece_at(
                Coordinate::new(file, Color::White.home_rank()),
                Some(Piece::new(Color::White, kind)),
            );
            b.set_piece_at(
                Coordinate::new(file, Color::Black.home_rank()),
                Some(Piece::new(Color::Black, kind)),
            );
        }
        // Pawns
        for file in 0..BOARD_SIZE {
            b.set_piece_at(Coordinate::new(file, 1), Some(Piece::WHITE_PAWN));
            b.set_piece_at(Coordinate::new(file, 6), Some(Piece::BLACK_PAWN));
        }
        b
    }

    /// Piece on `at`; off-board coordinates hold nothing.
    pub fn piece_at(&self, at: Coordinate) -> Option<Piece> {
        at.index().and_then(|i| self.pieces[i])
    }

    /// Places (or clears) a square. Off-board coordinates are ignored.
    pub fn set_piece_at(&mut self, at: Coordinate, piece: Option<Piece>) {
        if let Some(i) = at.index() {
            self.pieces[i] = piece;
        }
    }

    pub fn is_empty_at(&self, at: Coordinate) -> bool {
        self.piece_at(at).is_none()
    }

    pub fn king_coordinate(&self, color: Color) -> Option<Coordinate> {
        let king = Piece::new(color, PieceKind::King);
        Coordinate::all().find(|&c| self.piece_at(c) == Some(king))
    }

    /// Squares holding a piece of `color`.
    pub fn occupied_by(&self, color: Color) -> impl Iterator<Item = Coordinate> + '_ {
        Coordinate::all().filter(move |&c| self.piece_at(c).is_some_and(|p| p.color == color))
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Appends to the history without touching the pieces.
    ///
    /// Custom setups use this to hand the move to black, or to mark a
    /// piece as having moved.
    pub fn record_move(&mut self, mv: Move) {
        self.history.push(mv);
    }

    /// Side to move, from history parity.
    pub fn next_move_color(&self) -> Color {
        if self.history.len() % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: BoardState) {
        self.state = state;
    }

    /// True if both boards hold the same pieces on the same squares.
    pub fn same_layout(&self, other: &Board) -> bool {
        self.pieces == other.pieces
    }

    /// Applies an already-validated move: relocates the piece, promotes,
    /// moves the castling rook or removes the pawn taken en passant, then
    /// appends the move to history.
    pub fn apply_move(&mut self, mv: &Move) {
        if mv.move_type == MoveType::EnPassant {
            // The taken pawn sits beside the mover, on the destination file.
            self.set_piece_at(Coordinate::new(mv.to.file, mv.from.rank), None);
        }

        let moved = self.piece_at(mv.from).unwrap_or(mv.moved_piece);
        self.set_piece_at(mv.from, None);
        self.set_piece_at(mv.to, Some(moved));

        if moved.kind == PieceKind::Pawn && mv.to.rank == moved.color.other().home_rank() {
            self.set_piece_at(mv.to, Some(Piece::new(moved.color, PieceKind::Queen)));
        }

        if mv.move_type == MoveType::Castling {
            let (rook_from, rook_to) = castling_rook_squares(mv.from, mv.to);
            let rook = self.piece_at(rook_from);
            self.set_piece_at(rook_from, None);
            self.set_piece_at(rook_to, rook);
        }

        self.history.push(*mv);
    }

    /// Copy of this board with `mv` applied; `self` is left untouched.
    pub fn successor(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }
}

/// Corner the castling rook leaves and the square it lands on, given the
/// king's origin and destination.
pub fn castling_rook_squares(king_from: Coordinate, king_to: Coordinate) -> (Coordinate, Coordinate) {
    let rank = king_from.rank;
    if king_to.file < king_from.file {
        (Coordinate::new(0, rank), Coordinate::new(king_to.file + 1, rank))
    } else {
        (
            Coordinate::new(BOARD_SIZE - 1, rank),
            Coordinate::new(king_to.file - 1, rank),
        )
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
