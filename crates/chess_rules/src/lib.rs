//! Chess rules for the negamax engine.
//!
//! A mailbox board with make/unmake, legal move generation, FEN, and the
//! [`RulesOracle`] trait the search is written against. [`Game`] is the
//! oracle implementation: a position plus the history needed to undo moves.

pub mod board;
pub mod error;
pub mod movegen;
pub mod oracle;
pub mod perft;
pub mod types;
pub mod uci;

pub use board::*;
pub use error::*;
pub use movegen::*;
pub use oracle::*;
pub use perft::perft;
pub use types::*;
pub use uci::*;
