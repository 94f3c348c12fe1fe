//! Engine configuration
//!
//! Board side, search depth and prune threshold are fixed when a game
//! starts and handed to every entry point that needs them.

use crate::board::BOARD_SIDE;
use crate::error::{GameError, Result};

/// Default look-ahead plies for the forward-pruning search
pub const DEFAULT_DEPTH: u8 = 2;

/// Deepest search accepted by [`EngineConfig::new`]
pub const MAX_DEPTH: u8 = 4;

/// Default minimum heuristic score a candidate needs to be searched
pub const DEFAULT_THRESHOLD: u64 = 40;

/// Immutable engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Board side; coordinates run `0..=side`
    pub side: i32,
    /// Forward-pruning look-ahead plies (my move + greedy reply each)
    pub depth: u8,
    /// Candidates scoring below this are pruned before recursion
    pub threshold: u64,
}

impl EngineConfig {
    /// Validated configuration on the standard board.
    pub fn new(depth: u8, threshold: u64) -> Result<Self> {
        if depth > MAX_DEPTH {
            return Err(GameError::InvalidConfig {
                message: format!("depth {} exceeds maximum {}", depth, MAX_DEPTH),
            });
        }
        Ok(Self {
            side: BOARD_SIDE,
            depth,
            threshold,
        })
    }

    /// Same settings on a board of another side (used by small-board tests).
    pub fn with_side(self, side: i32) -> Result<Self> {
        if side < 4 {
            return Err(GameError::InvalidConfig {
                message: format!("board side {} is too small for five in a row", side),
            });
        }
        Ok(Self { side, ..self })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            side: BOARD_SIDE,
            depth: DEFAULT_DEPTH,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}
