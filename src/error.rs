//! Error types for the gomoku crate

use thiserror::Error;

use crate::board::Mark;

/// Main error type for the gomoku crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("invalid move: ({x}, {y}) has a negative coordinate")]
    NegativeCoordinate { x: i32, y: i32 },

    #[error("invalid move: ({x}, {y}) is outside the board (0..={side})")]
    OutOfBounds { x: i32, y: i32, side: i32 },

    #[error("invalid move: ({x}, {y}) is already occupied")]
    Occupied { x: i32, y: i32 },

    #[error("game already over")]
    GameOver,

    #[error("not {0}'s turn")]
    NotYourTurn(Mark),

    #[error("no empty cell left to play")]
    NoMoveAvailable,

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, GameError>;
