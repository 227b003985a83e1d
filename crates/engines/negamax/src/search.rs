//! Negamax search with alpha-beta pruning

use chess_rules::{Move, RulesOracle};
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::eval::{Evaluator, Score, SCORE_INFINITY};
use crate::guard::MoveGuard;

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Score of the best move in centipawns from the side to move's perspective
    pub score: Score,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Fixed-depth negamax searcher.
///
/// The searcher never copies the position: it plays moves on the oracle it
/// is given and takes every one of them back before returning.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    evaluator: Evaluator,
    /// Node counter for statistics
    nodes: u64,
}

impl SearchEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_evaluator(Evaluator::new(config.mobility))
    }

    pub fn with_evaluator(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            nodes: 0,
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Best move for the side to move, or `None` if it has no legal moves.
    pub fn find_best_move<R: RulesOracle>(&mut self, oracle: &mut R, depth: u8) -> Option<Move> {
        self.search(oracle, depth).best_move
    }

    /// Searches every root move to `depth` plies and returns the best one with its score.
    ///
    /// Among equally scored moves the first in the oracle's order wins.
    /// A depth of 0 is searched as 1.
    pub fn search<R: RulesOracle>(&mut self, oracle: &mut R, depth: u8) -> SearchResult {
        let depth = if depth == 0 {
            warn!("search depth 0 requested, searching 1 ply");
            1
        } else {
            depth
        };
        self.nodes = 0;

        let mut best_move = None;
        let mut best_score = -SCORE_INFINITY;
        let mut alpha = -SCORE_INFINITY;
        let beta = SCORE_INFINITY;

        for mv in oracle.legal_moves() {
            let mut child = MoveGuard::apply(oracle, mv);
            let score = -self.negamax(&mut *child, depth - 1, -beta, -alpha);
            debug!(mv = %child.played(), score, "root move searched");
            drop(child);

            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        }

        if best_move.is_none() {
            best_score = self.evaluator.evaluate(oracle);
        }

        info!(
            depth,
            nodes = self.nodes,
            score = best_score,
            best = ?best_move.map(|mv| mv.to_string()),
            "search finished"
        );

        SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes: self.nodes,
        }
    }

    /// Recursive negamax search with fail-soft alpha-beta pruning.
    ///
    /// Returns the value of the position for the side to move. The value is
    /// not clamped to `[alpha, beta]`.
    pub fn negamax<R: RulesOracle>(
        &mut self,
        oracle: &mut R,
        depth: u8,
        mut alpha: Score,
        beta: Score,
    ) -> Score {
        self.nodes += 1;

        if depth == 0 || oracle.is_game_over() {
            return self.evaluator.evaluate(oracle);
        }

        let mut best = -SCORE_INFINITY;

        for mv in oracle.legal_moves() {
            let score = {
                let mut child = MoveGuard::apply(oracle, mv);
                -self.negamax(&mut *child, depth - 1, -beta, -alpha)
            };

            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break; // Beta cutoff
            }
        }

        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
