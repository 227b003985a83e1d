//! Heuristic position evaluation: material, center occupation and minor-piece mobility.

use chess_rules::{
    file_of, rank_of, sq, Color, Piece, PieceKind, RulesOracle, Square, D4, D5, DIAGONALS, E4,
    E5, KNIGHT_DELTAS,
};

use crate::config::MobilityMode;

/// Score in centipawns.
pub type Score = i32;

/// Magnitude of a checkmate score.
pub const MATE_SCORE: Score = 9999;

/// Bound larger than any reachable score; safe to negate.
pub const SCORE_INFINITY: Score = 1_000_000;

/// Flat bonus for a piece standing on one of the four center squares.
pub const CENTER_BONUS: Score = 10;

const CENTER: [Square; 4] = [D4, E4, D5, E5];

/// Mobility is worth a tenth of a centipawn per move.
const MOBILITY_TENTHS_PER_MOVE: Score = 1;

/// Material values in centipawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

fn sign(color: Color) -> Score {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    mobility: MobilityMode,
}

impl Evaluator {
    pub fn new(mobility: MobilityMode) -> Self {
        Self { mobility }
    }

    pub fn mobility(&self) -> MobilityMode {
        self.mobility
    }

    /// Evaluates the position from the side-to-move's perspective.
    ///
    /// Returns a score in centipawns:
    /// - Positive = good for side to move
    /// - Negative = bad for side to move
    /// - `-MATE_SCORE` = side to move is checkmated
    /// - 0 = drawn (stalemate, insufficient material, 75-move rule)
    pub fn evaluate<R: RulesOracle>(&self, oracle: &R) -> Score {
        if oracle.is_checkmate() {
            return -MATE_SCORE;
        }
        if oracle.is_stalemate()
            || oracle.is_insufficient_material()
            || oracle.is_seventy_five_move_draw()
        {
            return 0;
        }

        let score = material(oracle) + self.positional(oracle);
        score * sign(oracle.side_to_move())
    }

    /// Center occupation plus knight/bishop mobility, White-positive.
    ///
    /// Accumulated in tenths of a centipawn and truncated once at the end.
    pub fn positional<R: RulesOracle>(&self, oracle: &R) -> Score {
        let mut tenths: Score = 0;
        let mut board_mobility: Option<Score> = None;

        for square in 0..64u8 {
            let Some(pc) = oracle.piece_at(square) else {
                continue;
            };

            if CENTER.contains(&square) {
                tenths += sign(pc.color) * CENTER_BONUS * 10;
            }

            if matches!(pc.kind, PieceKind::Knight | PieceKind::Bishop) {
                let moves = match self.mobility {
                    MobilityMode::PerPiece => piece_mobility(oracle, square, pc),
                    MobilityMode::BoardWide => *board_mobility
                        .get_or_insert_with(|| oracle.legal_moves().len() as Score),
                };
                tenths += sign(pc.color) * moves * MOBILITY_TENTHS_PER_MOVE;
            }
        }

        tenths / 10
    }
}

/// Material balance in centipawns, White-positive.
pub fn material<R: RulesOracle>(oracle: &R) -> Score {
    (0..64u8)
        .filter_map(|square| oracle.piece_at(square))
        .map(|pc| sign(pc.color) * piece_value(pc.kind))
        .sum()
}

/// Squares a knight or bishop on `from` reaches: empty ones and enemy-occupied ones.
pub fn piece_mobility<R: RulesOracle>(oracle: &R, from: Square, pc: Piece) -> Score {
    let open = |to: Square| match oracle.piece_at(to) {
        None => (1, true),
        Some(other) if other.color != pc.color => (1, false),
        Some(_) => (0, false),
    };

    let f0 = file_of(from);
    let r0 = rank_of(from);
    let mut count = 0;
    match pc.kind {
        PieceKind::Knight => {
            for (df, dr) in KNIGHT_DELTAS {
                if let Some(to) = sq(f0 + df, r0 + dr) {
                    count += open(to).0;
                }
            }
        }
        PieceKind::Bishop => {
            for (df, dr) in DIAGONALS {
                let (mut f, mut r) = (f0 + df, r0 + dr);
                while let Some(to) = sq(f, r) {
                    let (reached, keep_going) = open(to);
                    count += reached;
                    if !keep_going {
                        break;
                    }
                    f += df;
                    r += dr;
                }
            }
        }
        _ => {}
    }
    count
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
