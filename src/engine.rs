//! Main AI engine tying the selectors together
//!
//! Both selectors share the same tactical front end:
//!
//! 1. **Opening**: empty board, play the center
//! 2. **Immediate win**: complete five
//! 3. **Block win**: stop the opponent's five
//! 4. **Open four**: make a four with room to grow
//! 5. **Block open four**: stop the opponent's
//!
//! After that the greedy selector takes the best heuristic cell, while the
//! forward-pruning selector plays each promising cell forward against a
//! greedy opponent and keeps the one with the best outcome.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Mark, Player, Pos, SearchMode};
//!
//! // Shallow search keeps the example quick
//! let config = EngineConfig::new(1, 40).unwrap();
//! let mut engine = AIEngine::with_config(config);
//! let mut board = Board::new();
//! board.place(10, 10, Mark::Player1);
//!
//! let me = Player::new(Mark::Player2);
//! let opponent = Player::new(Mark::Player1).moved_to(Pos::new(10, 10));
//! let result = engine.choose_move(&board, me, opponent, SearchMode::ForwardPruning);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use log::debug;

use crate::board::{Board, Player, Pos};
use crate::config::EngineConfig;
use crate::search::{greedy_move, Choice, ForwardSearcher};

pub use crate::search::SearchType;

/// Which selector drives an AI player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// Tactical moves, then the best heuristic cell
    Greedy,
    /// Tactical moves, then look-ahead against a greedy opponent
    ForwardPruning,
}

impl SearchMode {
    pub fn label(self) -> &'static str {
        match self {
            SearchMode::Greedy => "Greedy",
            SearchMode::ForwardPruning => "Forward pruning",
        }
    }
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score the move was selected with
    pub score: u64,
    /// Which tier produced the move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_choice(choice: Choice, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: Some(choice.pos),
            score: choice.score,
            search_type: choice.search_type,
            time_ms,
            nodes,
        }
    }

    /// Nothing scored above zero
    #[inline]
    fn exhausted(time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::Exhausted,
            time_ms,
            nodes,
        }
    }
}

/// Main AI engine for Gomoku.
///
/// Holds the immutable [`EngineConfig`] and a reusable forward searcher.
/// The caller's board is never modified; searches run on a private copy.
pub struct AIEngine {
    config: EngineConfig,
    forward: ForwardSearcher,
}

impl AIEngine {
    /// Engine with the default configuration (depth 2, threshold 40).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            forward: ForwardSearcher::from_config(&config),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Best move for `me` using the given selector.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, me: Player, opponent: Player, mode: SearchMode) -> Option<Pos> {
        self.choose_move(board, me, opponent, mode).best_move
    }

    /// Best move with search statistics.
    ///
    /// `best_move` is `None` only when every candidate scores zero; the
    /// caller decides what to play then.
    #[must_use]
    pub fn choose_move(
        &mut self,
        board: &Board,
        me: Player,
        opponent: Player,
        mode: SearchMode,
    ) -> MoveResult {
        let start = Instant::now();

        let (choice, nodes) = match mode {
            SearchMode::Greedy => (greedy_move(board, &me, &opponent), 1),
            SearchMode::ForwardPruning => {
                let mut work_board = board.clone();
                let choice = self.forward.search(&mut work_board, me, opponent);
                (choice, self.forward.nodes())
            }
        };

        let time_ms = start.elapsed().as_millis() as u64;
        let result = match choice {
            Some(choice) => MoveResult::from_choice(choice, time_ms, nodes),
            None => MoveResult::exhausted(time_ms, nodes),
        };
        debug!(
            "{} for {}: {:?} via {:?} (score {}, {} nodes, {}ms)",
            mode.label(),
            me.mark,
            result.best_move,
            result.search_type,
            result.score,
            result.nodes,
            result.time_ms
        );
        result
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
