//! The rules oracle: the only surface a search needs from a chess implementation.
//!
//! [`RulesOracle`] owns one mutable position and answers legality and
//! terminal-state questions about it. Moves are applied in place and reverted
//! with [`RulesOracle::undo`], so a search can walk the game tree without
//! copying positions.

use crate::board::{Position, Undo};
use crate::error::FenError;
use crate::movegen::{has_legal_move, legal_moves};
use crate::types::{Color, Move, Piece, Square};

/// Halfmove clock value at which the 75-move rule ends the game.
pub const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Board state plus legality and terminal-state queries.
pub trait RulesOracle {
    fn side_to_move(&self) -> Color;

    /// All legal moves for the side to move. The order is stable for a given position.
    fn legal_moves(&self) -> Vec<Move>;

    /// Plays `mv`, which must come from the latest `legal_moves()`.
    fn apply(&mut self, mv: Move);

    /// Reverts the most recent `apply`, returning the move taken back.
    /// Returns `None` when there is nothing to undo.
    fn undo(&mut self) -> Option<Move>;

    fn piece_at(&self, sq: Square) -> Option<Piece>;

    fn is_checkmate(&self) -> bool;
    fn is_stalemate(&self) -> bool;
    fn is_insufficient_material(&self) -> bool;
    fn is_seventy_five_move_draw(&self) -> bool;

    fn is_game_over(&self) -> bool {
        self.is_checkmate()
            || self.is_stalemate()
            || self.is_insufficient_material()
            || self.is_seventy_five_move_draw()
    }
}

/// A game in progress: the current position and the moves that led to it.
#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    history: Vec<(Move, Undo)>,
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            history: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::from_fen(fen).map(Self::from_position)
    }

    /// Back to the standard starting position with an empty history.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn fen(&self) -> String {
        self.position.to_fen()
    }

    /// Moves played so far, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|(mv, _)| *mv)
    }

    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    pub fn in_check(&self) -> bool {
        self.position.in_check(self.position.side_to_move)
    }

    fn has_legal_move(&self) -> bool {
        has_legal_move(&mut self.position.clone())
    }

    /// PGN-style result string: `1-0`, `0-1`, `1/2-1/2`, or `*` while the game is on.
    pub fn result(&self) -> &'static str {
        if self.is_checkmate() {
            match self.position.side_to_move {
                Color::White => "0-1",
                Color::Black => "1-0",
            }
        } else if self.is_game_over() {
            "1/2-1/2"
        } else {
            "*"
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesOracle for Game {
    fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.position)
    }

    fn apply(&mut self, mv: Move) {
        let undo = self.position.make_move(mv);
        self.history.push((mv, undo));
    }

    fn undo(&mut self) -> Option<Move> {
        let (mv, undo) = self.history.pop()?;
        self.position.unmake_move(mv, undo);
        Some(mv)
    }

    fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.position.piece_at(sq)
    }

    fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_legal_move()
    }

    fn is_stalemate(&self) -> bool {
        !self.in_check() && !self.has_legal_move()
    }

    fn is_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    fn is_seventy_five_move_draw(&self) -> bool {
        self.position.halfmove_clock >= SEVENTY_FIVE_MOVE_PLIES && self.has_legal_move()
    }
}

#[cfg(test)]
#[path = "oracle_tests.rs"]
mod oracle_tests;
