//! Evaluation module for Gomoku AI
//!
//! Scores a single empty cell by the lines it could help complete for
//! the mover and the lines it would cut for the opponent.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{score_cell, SCORE_RADIUS};
pub use patterns::{run_bonus, span_bonus, PatternScore, MIN_SPAN};
