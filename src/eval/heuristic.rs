//! Heuristic desirability of an empty cell
//!
//! For every axis the cell is tried once as the mover's mark and once as
//! the opponent's. Each try looks at the stretch of the line around the
//! cell that the other side has not blocked:
//! - if that stretch can still hold five, the run through the cell
//!   earns `len^4`
//! - from the opponent's side the stretch's extra room also counts
//!   linearly

use crate::board::{scan_line, Axis, Board, LineCell, Mark, Pos, AXES};

use super::patterns::{run_bonus, span_bonus, MIN_SPAN};

/// Cells examined on each side of the candidate
pub const SCORE_RADIUS: i32 = 5;

/// Score `pos` for `me` playing against `opponent`.
///
/// The cell is treated as if it were empty; callers only pass empty cells.
#[must_use]
pub fn score_cell(board: &Board, pos: Pos, me: Mark, opponent: Mark) -> u64 {
    AXES.iter()
        .map(|&axis| {
            line_potential(board, pos, axis, me, false)
                + line_potential(board, pos, axis, opponent, true)
        })
        .sum()
}

/// Potential of one axis from one player's side with `pos` filled by that player.
fn line_potential(
    board: &Board,
    pos: Pos,
    axis: Axis,
    player: Mark,
    blocking: bool,
) -> u64 {
    let scanned = scan_line(board, pos, axis, SCORE_RADIUS, player);
    let window = scanned.with_cell(scanned.origin, LineCell::Mine);

    let (lo, hi) = window.open_span(window.origin);
    let span = hi - lo + 1;
    if span < MIN_SPAN {
        return 0;
    }

    let mut score = run_bonus(window.run_through(window.origin));
    if blocking {
        score += span_bonus(span);
    }
    score
}
