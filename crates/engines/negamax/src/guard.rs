//! Scoped apply/undo.
//!
//! Every move the search plays goes through a [`MoveGuard`]; dropping the
//! guard takes the move back. A beta cutoff, an early return or a panic
//! unwinding out of a subtree all leave the oracle exactly as they found it.

use std::ops::{Deref, DerefMut};

use chess_rules::{Move, RulesOracle};

pub struct MoveGuard<'a, R: RulesOracle> {
    oracle: &'a mut R,
    mv: Move,
}

impl<'a, R: RulesOracle> MoveGuard<'a, R> {
    /// Applies `mv`, which must be one of `oracle.legal_moves()`.
    pub fn apply(oracle: &'a mut R, mv: Move) -> Self {
        oracle.apply(mv);
        Self { oracle, mv }
    }

    pub fn played(&self) -> Move {
        self.mv
    }
}

impl<R: RulesOracle> Deref for MoveGuard<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.oracle
    }
}

impl<R: RulesOracle> DerefMut for MoveGuard<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.oracle
    }
}

impl<R: RulesOracle> Drop for MoveGuard<'_, R> {
    fn drop(&mut self) {
        match self.oracle.undo() {
            Some(undone) if undone == self.mv => {}
            undone => tracing::error!(
                expected = %self.mv,
                undone = ?undone,
                "undo history out of step with the search"
            ),
        }
    }
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod guard_tests;
