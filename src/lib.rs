//! Gomoku engine with greedy and forward-pruning move selection
//!
//! Free-style Gomoku on a 21x21 grid (coordinates `0..=20`):
//! - Five or more in a row on any axis wins
//! - A full board without five is a draw
//! - No captures, no forbidden moves
//!
//! # Architecture
//!
//! - [`board`]: Sparse board, region of interest and line windows
//! - [`rules`]: Terminal detection anchored on the last move
//! - [`eval`]: Per-cell heuristic score
//! - [`search`]: Threat scanning, greedy selection, forward pruning
//! - [`engine`]: AI engine facade with search statistics
//! - [`game`]: Turn order, outcome and move history
//! - [`config`], [`error`]: Engine settings and the crate error type
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, EngineConfig, Game, GameMode, Outcome, SearchMode};
//!
//! let config = EngineConfig::new(1, 40).unwrap();
//! let mut game = Game::new(GameMode::PvP, config);
//! let mut engine = AIEngine::with_config(config);
//!
//! // Human opens in the middle, engine answers
//! assert_eq!(game.play(10, 10).unwrap(), Outcome::Continue);
//! let result = game.choose_move(&mut engine, SearchMode::ForwardPruning);
//! let reply = result.best_move.unwrap();
//! game.play(reply.x, reply.y).unwrap();
//! assert_eq!(game.history().len(), 2);
//! ```
//!
//! # Move Selection
//!
//! 1. Empty board: center
//! 2. Own instant win, then block the opponent's
//! 3. Own open four, then block the opponent's
//! 4. Greedy: best heuristic cell near the marks.
//!    Forward pruning: cells above a threshold are each played forward
//!    against a greedy opponent for a fixed number of plies.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Player, Pos, BOARD_SIDE};
pub use config::EngineConfig;
pub use engine::{AIEngine, MoveResult, SearchMode, SearchType};
pub use error::{GameError, Result};
pub use game::{Game, GameMode};
pub use rules::Outcome;
