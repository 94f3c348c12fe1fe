//! Sparse board with a monotonic region of interest

use std::collections::HashMap;

use super::{Mark, Pos, BOARD_SIDE};
use crate::error::{GameError, Result};

/// Axis-aligned box covering every mark placed so far.
///
/// Starts inverted (`min = i32::MAX`, `max = -1`) and only ever grows:
/// removing a mark never shrinks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    pub const fn new() -> Self {
        Self {
            min_x: i32::MAX,
            min_y: i32::MAX,
            max_x: -1,
            max_y: -1,
        }
    }

    /// True until the first mark is included
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.max_x < 0 || self.max_y < 0
    }

    #[inline]
    pub fn include(&mut self, pos: Pos) {
        self.min_x = self.min_x.min(pos.x);
        self.min_y = self.min_y.min(pos.y);
        self.max_x = self.max_x.max(pos.x);
        self.max_y = self.max_y.max(pos.y);
    }

    /// Box grown by `margin` on every side and clamped to `0..=side`.
    ///
    /// Returns `(min_x, min_y, max_x, max_y)`, or `None` while empty.
    pub fn expanded(&self, margin: i32, side: i32) -> Option<(i32, i32, i32, i32)> {
        if self.is_empty() {
            return None;
        }
        Some((
            (self.min_x - margin).max(0),
            (self.min_y - margin).max(0),
            (self.max_x + margin).min(side),
            (self.max_y + margin).min(side),
        ))
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

/// Game board keyed by `y * (side + 1) + x`; a missing key is an empty cell.
#[derive(Debug, Clone)]
pub struct Board {
    side: i32,
    cells: HashMap<usize, Mark>,
    bounds: Bounds,
}

impl Board {
    pub fn new() -> Self {
        Self::with_side(BOARD_SIDE)
    }

    /// Board spanning coordinates `0..=side`
    pub fn with_side(side: i32) -> Self {
        debug_assert!(side > 0);
        Self {
            side,
            cells: HashMap::with_capacity(Self::capacity_for(side)),
            bounds: Bounds::new(),
        }
    }

    #[inline]
    fn capacity_for(side: i32) -> usize {
        ((side + 1) * (side + 1)) as usize
    }

    #[inline]
    pub fn side(&self) -> i32 {
        self.side
    }

    /// Number of cells, `(side + 1)^2`
    #[inline]
    pub fn capacity(&self) -> usize {
        Self::capacity_for(self.side)
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        Pos::is_valid(x, y, self.side)
    }

    /// Validate a placement without performing it.
    pub fn check_placement(&self, x: i32, y: i32) -> Result<Pos> {
        if x < 0 || y < 0 {
            return Err(GameError::NegativeCoordinate { x, y });
        }
        // Also reject x > side: such a cell would alias one on the next row.
        if !self.contains(x, y) {
            return Err(GameError::OutOfBounds { x, y, side: self.side });
        }
        let pos = Pos::new(x, y);
        if pos.to_index(self.side) > self.capacity() - 1 {
            return Err(GameError::OutOfBounds { x, y, side: self.side });
        }
        if self.cells.contains_key(&pos.to_index(self.side)) {
            return Err(GameError::Occupied { x, y });
        }
        Ok(pos)
    }

    /// Record a mark. Returns `false` (and changes nothing) when the
    /// cell is off the board or already taken.
    pub fn place(&mut self, x: i32, y: i32, mark: Mark) -> bool {
        match self.check_placement(x, y) {
            Ok(pos) => {
                self.cells.insert(pos.to_index(self.side), mark);
                self.bounds.include(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Remove whatever occupies `pos`. Bounds are left as they are.
    #[inline]
    pub fn unplace(&mut self, pos: Pos) -> Option<Mark> {
        if !self.contains(pos.x, pos.y) {
            return None;
        }
        self.cells.remove(&pos.to_index(self.side))
    }

    /// Mark at position, `None` for empty or off-board cells
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Mark> {
        if !self.contains(pos.x, pos.y) {
            return None;
        }
        self.cells.get(&pos.to_index(self.side)).copied()
    }

    #[inline]
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.contains(pos.x, pos.y) && !self.cells.contains_key(&pos.to_index(self.side))
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.len() == self.capacity()
    }

    /// Exact center `(side / 2, side / 2)`
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new(self.side / 2, self.side / 2)
    }

    /// All marks in row-major order
    pub fn marks(&self) -> Vec<(Pos, Mark)> {
        let mut marks: Vec<(Pos, Mark)> = self
            .cells
            .iter()
            .map(|(&idx, &mark)| (Pos::from_index(idx, self.side), mark))
            .collect();
        marks.sort_by_key(|&(pos, _)| pos);
        marks
    }

    /// First empty cell in row-major order
    pub fn first_empty(&self) -> Option<Pos> {
        (0..self.capacity())
            .find(|idx| !self.cells.contains_key(idx))
            .map(|idx| Pos::from_index(idx, self.side))
    }

    /// Empty cells of the bounding box grown by `margin`, row-major (y outer, x inner).
    pub fn region_cells(&self, margin: i32) -> Vec<Pos> {
        let Some((x0, y0, x1, y1)) = self.bounds.expanded(margin, self.side) else {
            return Vec::new();
        };
        let mut cells = Vec::with_capacity(((x1 - x0 + 1) * (y1 - y0 + 1)).max(0) as usize);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let pos = Pos::new(x, y);
                if self.is_empty_at(pos) {
                    cells.push(pos);
                }
            }
        }
        cells
    }

    /// Text rendering, one row per line: `O` for Player1, `X` for Player2.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.capacity() * 2 + 64);
        out.push_str("    ");
        for x in 0..=self.side {
            out.push_str(&format!("{:>3}", x));
        }
        out.push('\n');
        for y in 0..=self.side {
            out.push_str(&format!("{:>3} ", y));
            for x in 0..=self.side {
                let ch = match self.get(Pos::new(x, y)) {
                    Some(Mark::Player1) => 'O',
                    Some(Mark::Player2) => 'X',
                    None => '.',
                };
                out.push_str("  ");
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
