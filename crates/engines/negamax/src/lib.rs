//! Negamax Chess Engine
//!
//! Fixed-depth negamax search with alpha-beta pruning over any
//! [`chess_rules::RulesOracle`], scored by a small hand-written evaluator.
//!
//! This engine uses:
//! - Negamax search with fail-soft alpha-beta pruning, no move ordering
//! - Material, center occupation and knight/bishop mobility
//! - In-place apply/undo on a single shared position, guarded so every
//!   applied move is taken back

pub mod config;
pub mod eval;
pub mod guard;
pub mod search;

pub use config::{ConfigError, EngineConfig, MobilityMode, DEFAULT_DEPTH, MAX_DEPTH};
pub use eval::{material, piece_value, Evaluator, Score, MATE_SCORE, SCORE_INFINITY};
pub use guard::MoveGuard;
pub use search::{SearchEngine, SearchResult};
