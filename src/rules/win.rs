//! Terminal detection
//!
//! Only the player who just moved can have completed a line, so the check
//! is anchored on that player's last mark and looks at most four cells
//! each way along every axis.

use crate::board::{scan_line, Board, Mark, Pos, AXES};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Reach of the terminal scan on each side of the last mark
const END_SCAN_RADIUS: i32 = WIN_LENGTH as i32 - 1;

/// Game state after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Win(Mark),
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::Continue)
    }
}

/// Does the mark at `pos` belong to a run of five or more for `mark`?
///
/// Runs stop at the first empty or foreign cell in each direction.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, mark: Mark) -> bool {
    AXES.iter().any(|&axis| {
        let window = scan_line(board, pos, axis, END_SCAN_RADIUS, mark);
        window.run_through(window.origin) >= WIN_LENGTH
    })
}

/// Decide whether the game ended with `mark`'s move at `last_move`.
///
/// A player that has not moved yet cannot have won; the board can still
/// be full, in which case the result is a draw.
pub fn check_end(board: &Board, mark: Mark, last_move: Option<Pos>) -> Outcome {
    if let Some(pos) = last_move {
        if has_five_at_pos(board, pos, mark) {
            return Outcome::Win(mark);
        }
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::Continue
}

/// First five cells of the winning run through `pos`, if any.
pub fn winning_line(board: &Board, pos: Pos, mark: Mark) -> Option<[Pos; 5]> {
    for axis in AXES {
        let window = scan_line(board, pos, axis, END_SCAN_RADIUS, mark);
        let (lo, hi) = window.run_span(window.origin);
        if window.cells[window.origin] == crate::board::LineCell::Mine && hi - lo + 1 >= WIN_LENGTH {
            let p = &window.positions;
            return Some([p[lo], p[lo + 1], p[lo + 2], p[lo + 3], p[lo + 4]]);
        }
    }
    None
}
