//! Error types for position setup and move parsing.

use thiserror::Error;

/// Errors raised while parsing Forsyth-Edwards Notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 fields, found {0}")]
    MissingFields(usize),

    #[error("expected 8 ranks in board section, found {0}")]
    RankCount(usize),

    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),

    #[error("rank {rank} describes {files} files")]
    BadRankLength { rank: usize, files: i8 },

    #[error("invalid side to move '{0}'")]
    InvalidSideToMove(String),

    #[error("invalid castling character '{0}'")]
    InvalidCastling(char),

    #[error("invalid en-passant square '{0}'")]
    InvalidEnPassant(String),

    #[error("invalid move counter '{0}'")]
    InvalidCounter(String),
}

/// Errors raised when turning move text into a legal move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("malformed move text '{0}'")]
    Malformed(String),

    #[error("illegal move '{0}' in current position")]
    Illegal(String),
}

/// Errors raised by a UCI `position` command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("expected 'startpos' or 'fen', found '{0}'")]
    UnknownKeyword(String),

    #[error(transparent)]
    Fen(#[from] FenError),

    #[error(transparent)]
    Move(#[from] MoveError),
}
