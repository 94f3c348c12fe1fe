//! Line windows along the four axes
//!
//! Every tactical question the engine asks (did the last mark make five,
//! does one more mark make five or an open four, how promising is a cell)
//! is answered on a short 1-D slice of the board through a point. This
//! module builds that slice once, the same way for every caller.

use super::{Board, Mark, Pos};

/// The four line axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
    /// Top-left to bottom-right (↘)
    DiagonalDown,
    /// Bottom-left to top-right (↗)
    DiagonalUp,
}

/// Scan order used by the threat scanner and the scorer.
pub const AXES: [Axis; 4] = [
    Axis::Horizontal,
    Axis::Vertical,
    Axis::DiagonalDown,
    Axis::DiagonalUp,
];

impl Axis {
    /// Unit step `(dx, dy)` in the positive direction
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
            Axis::DiagonalDown => (1, 1),
            Axis::DiagonalUp => (1, -1),
        }
    }
}

/// Cell content relative to the scanning player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCell {
    Mine,
    Other,
    Empty,
}

impl LineCell {
    #[inline]
    fn classify(cell: Option<Mark>, me: Mark) -> Self {
        match cell {
            Some(m) if m == me => LineCell::Mine,
            Some(_) => LineCell::Other,
            None => LineCell::Empty,
        }
    }
}

/// A window of cells along one axis, clipped to the board.
///
/// `cells[origin]` is the scanned point; `positions[i]` is the board
/// coordinate of `cells[i]`.
#[derive(Debug, Clone)]
pub struct LineWindow {
    pub cells: Vec<LineCell>,
    pub positions: Vec<Pos>,
    pub origin: usize,
}

impl LineWindow {
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Length of the contiguous `Mine` run through `idx` (0 if `idx` is not mine).
    pub fn run_through(&self, idx: usize) -> usize {
        let (lo, hi) = self.run_span(idx);
        if self.cells[idx] == LineCell::Mine {
            hi - lo + 1
        } else {
            0
        }
    }

    /// Inclusive index range of the `Mine` run through `idx`.
    pub fn run_span(&self, idx: usize) -> (usize, usize) {
        self.span_while(idx, |c| c == LineCell::Mine)
    }

    /// Inclusive index range around `idx` not interrupted by `Other`.
    pub fn open_span(&self, idx: usize) -> (usize, usize) {
        self.span_while(idx, |c| c != LineCell::Other)
    }

    fn span_while(&self, idx: usize, keep: impl Fn(LineCell) -> bool) -> (usize, usize) {
        let mut lo = idx;
        while lo > 0 && keep(self.cells[lo - 1]) {
            lo -= 1;
        }
        let mut hi = idx;
        while hi + 1 < self.cells.len() && keep(self.cells[hi + 1]) {
            hi += 1;
        }
        (lo, hi)
    }

    /// Copy of this window with `cells[idx]` replaced.
    pub fn with_cell(&self, idx: usize, cell: LineCell) -> LineWindow {
        let mut window = self.clone();
        window.cells[idx] = cell;
        window
    }
}

/// Build the window through `origin` along `axis`, walking up to `radius`
/// steps each way and stopping early at the board edge. The two sides are
/// walked independently, so windows near an edge are asymmetric.
pub fn scan_line(board: &Board, origin: Pos, axis: Axis, radius: i32, me: Mark) -> LineWindow {
    let (dx, dy) = axis.delta();
    let side = board.side();

    let mut back = 0;
    while back < radius && Pos::is_valid(origin.x - dx * (back + 1), origin.y - dy * (back + 1), side)
    {
        back += 1;
    }
    let mut fwd = 0;
    while fwd < radius && Pos::is_valid(origin.x + dx * (fwd + 1), origin.y + dy * (fwd + 1), side) {
        fwd += 1;
    }

    let len = (back + fwd + 1) as usize;
    let mut cells = Vec::with_capacity(len);
    let mut positions = Vec::with_capacity(len);
    for step in -back..=fwd {
        let pos = origin.offset(dx, dy, step);
        cells.push(LineCell::classify(board.get(pos), me));
        positions.push(pos);
    }

    LineWindow {
        cells,
        positions,
        origin: back as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_centered() {
        let board = Board::new();
        let w = scan_line(&board, Pos::new(10, 10), Axis::Horizontal, 5, Mark::Player1);
        assert_eq!(w.len(), 11);
        assert_eq!(w.origin, 5);
        assert_eq!(w.positions[0], Pos::new(5, 10));
        assert_eq!(w.positions[10], Pos::new(15, 10));
        assert!(w.cells.iter().all(|&c| c == LineCell::Empty));
    }

    #[test]
    fn test_window_clipped_asymmetric() {
        let board = Board::new();
        let w = scan_line(&board, Pos::new(2, 7), Axis::Horizontal, 5, Mark::Player1);
        assert_eq!(w.origin, 2);
        assert_eq!(w.len(), 8);
        assert_eq!(w.positions[0], Pos::new(0, 7));

        // Far edge is inclusive: x = side is on the board
        let w = scan_line(&board, Pos::new(18, 7), Axis::Horizontal, 5, Mark::Player1);
        assert_eq!(w.positions.last(), Some(&Pos::new(20, 7)));
        assert_eq!(w.len(), 8);
    }

    #[test]
    fn test_window_corner_diagonals() {
        let board = Board::new();
        let w = scan_line(&board, Pos::new(0, 0), Axis::DiagonalDown, 4, Mark::Player1);
        assert_eq!(w.origin, 0);
        assert_eq!(w.len(), 5);

        // ↗ from the top-left corner has nowhere to go
        let w = scan_line(&board, Pos::new(0, 0), Axis::DiagonalUp, 4, Mark::Player1);
        assert_eq!(w.len(), 1);

        let w = scan_line(&board, Pos::new(0, 20), Axis::DiagonalUp, 4, Mark::Player1);
        assert_eq!(w.positions, vec![
            Pos::new(0, 20),
            Pos::new(1, 19),
            Pos::new(2, 18),
            Pos::new(3, 17),
            Pos::new(4, 16),
        ]);
    }

    #[test]
    fn test_window_classifies_relative_to_player() {
        let mut board = Board::new();
        board.place(9, 10, Mark::Player1);
        board.place(11, 10, Mark::Player2);

        let w = scan_line(&board, Pos::new(10, 10), Axis::Horizontal, 1, Mark::Player1);
        assert_eq!(w.cells, vec![LineCell::Mine, LineCell::Empty, LineCell::Other]);

        let w = scan_line(&board, Pos::new(10, 10), Axis::Horizontal, 1, Mark::Player2);
        assert_eq!(w.cells, vec![LineCell::Other, LineCell::Empty, LineCell::Mine]);
    }

    #[test]
    fn test_vertical_window() {
        let mut board = Board::new();
        board.place(4, 3, Mark::Player2);
        let w = scan_line(&board, Pos::new(4, 4), Axis::Vertical, 2, Mark::Player2);
        assert_eq!(w.positions[0], Pos::new(4, 2));
        assert_eq!(w.cells[1], LineCell::Mine);
    }

    #[test]
    fn test_runs_and_spans() {
        let mut board = Board::new();
        for x in 6..=8 {
            board.place(x, 10, Mark::Player1);
        }
        board.place(11, 10, Mark::Player2);
        let w = scan_line(&board, Pos::new(7, 10), Axis::Horizontal, 5, Mark::Player1);
        // window covers x = 2..=12, origin at x = 7
        assert_eq!(w.run_through(w.origin), 3);
        assert_eq!(w.run_span(w.origin), (4, 6));
        // open span stops before the opponent mark at x = 11
        assert_eq!(w.open_span(w.origin), (0, 8));
        // empty cell has no run
        assert_eq!(w.run_through(0), 0);

        let filled = w.with_cell(7, LineCell::Mine);
        assert_eq!(filled.run_through(w.origin), 4);
        assert_eq!(w.run_through(w.origin), 3);
    }
}
