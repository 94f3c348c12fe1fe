//! Search module for Gomoku AI
//!
//! Contains:
//! - Threat scanning around the last marks (instant wins and open fours)
//! - Greedy selection by heuristic score
//! - Forward-pruning look-ahead with simulated greedy replies
//! - A speculation guard that rolls back trial marks

pub mod forward;
pub mod greedy;
pub mod speculation;
pub mod threat;

pub use forward::ForwardSearcher;
pub use greedy::{best_scoring, greedy_move};
pub use speculation::Speculation;
pub use threat::{find_instant_win, find_open_four, tactical_move, Threat, ThreatKind};

use crate::board::Pos;

/// Margin added around the marks' bounding box when collecting candidates
pub const REGION_MARGIN: i32 = 2;

/// Which selection tier produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Empty board, center played
    Opening,
    /// Completes five for the mover
    ImmediateWin,
    /// Blocks the opponent's five
    BlockWin,
    /// Makes an open four for the mover
    OpenFour,
    /// Blocks the opponent's open four
    BlockOpenFour,
    /// Highest heuristic score in the region
    Heuristic,
    /// Best downstream score of the forward-pruning search
    ForwardPruning,
    /// Nothing worth playing was found
    Exhausted,
}

/// A selected cell and the score it was selected with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub pos: Pos,
    pub score: u64,
    pub search_type: SearchType,
}

impl Choice {
    #[inline]
    pub fn new(pos: Pos, score: u64, search_type: SearchType) -> Self {
        Self {
            pos,
            score,
            search_type,
        }
    }
}
