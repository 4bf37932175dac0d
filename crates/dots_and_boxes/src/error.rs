//! Error types for board construction, moves, and the game controller.

use derive_more::{Display, Error, From};

/// A move the board cannot accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The segment was already played, or is not part of this board's
    /// segment universe. The caller reports it and re-prompts; board
    /// state is left untouched.
    #[display("segment is not open on this board")]
    NotOpen,
}

/// Invalid game configuration, fatal at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Zero rows or columns.
    #[display("board dimensions must be positive (got {}x{})", rows, cols)]
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// A ply limit of zero would evaluate forever without ever moving.
    #[display("search depth must be at least 1")]
    InvalidPlyLimit,
}

/// Errors surfaced by the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// The underlying board rejected the move; recoverable by re-prompting.
    #[display("{}", _0)]
    #[from]
    Move(MoveError),
    /// A move was submitted in the wrong phase. This is a caller bug, not
    /// a user-facing condition.
    #[display("move submitted out of turn")]
    OutOfTurn,
}
