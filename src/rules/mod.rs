//! Game rules for Gomoku
//!
//! Freestyle five-in-a-row: the first player to complete an unbroken run
//! of five (or longer) on any axis wins; a full board without one is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{check_end, has_five_at_pos, winning_line, Outcome, WIN_LENGTH};
