//! Greedy move selection
//!
//! Tactical moves first; otherwise the single best-scoring empty cell
//! near the existing marks.

use crate::board::{Board, Mark, Player};
use crate::eval::score_cell;

use super::threat::tactical_move;
use super::{Choice, SearchType, REGION_MARGIN};

/// Greedy choice for `me`.
///
/// Returns `None` only when no cell in the region scores above zero.
pub fn greedy_move(board: &Board, me: &Player, opponent: &Player) -> Option<Choice> {
    if let Some(threat) = tactical_move(board, me, opponent) {
        return Some(threat.into_choice(board, me, opponent));
    }
    best_scoring(board, me.mark, opponent.mark)
}

/// Highest-scoring empty cell of the region around the marks.
///
/// Ties go to the first cell in row-major order; zero scores never win.
pub fn best_scoring(board: &Board, me: Mark, opponent: Mark) -> Option<Choice> {
    let mut best: Option<Choice> = None;
    let mut best_score = 0;
    for pos in board.region_cells(REGION_MARGIN) {
        let score = score_cell(board, pos, me, opponent);
        if score > best_score {
            best_score = score;
            best = Some(Choice::new(pos, score, SearchType::Heuristic));
        }
    }
    best
}
