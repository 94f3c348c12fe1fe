//! Board representation for Gomoku

pub mod board;
pub mod line;


// Re-exports
pub use board::{Board, Bounds};
pub use line::{scan_line, Axis, LineCell, LineWindow, AXES};

/// Board side. Coordinates run `0..=BOARD_SIDE` on each axis,
/// so the grid has `(BOARD_SIDE + 1)^2` cells.
pub const BOARD_SIDE: i32 = 20;
pub const TOTAL_CELLS: usize = ((BOARD_SIDE + 1) * (BOARD_SIDE + 1)) as usize; // 441

/// Player marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Player1,
    Player2,
}

impl Mark {
    /// Get opponent mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::Player1 => Mark::Player2,
            Mark::Player2 => Mark::Player1,
        }
    }

    /// Player number as shown to users (1 or 2)
    #[inline]
    pub fn number(self) -> u8 {
        match self {
            Mark::Player1 => 1,
            Mark::Player2 => 2,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Grid coordinate. Signed so that off-board probes can be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Row-major linear index on a board of the given side.
    #[inline]
    pub fn to_index(self, side: i32) -> usize {
        (self.y * (side + 1) + self.x) as usize
    }

    #[inline]
    pub fn from_index(idx: usize, side: i32) -> Self {
        let width = (side + 1) as usize;
        Self {
            x: (idx % width) as i32,
            y: (idx / width) as i32,
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32, side: i32) -> bool {
        x >= 0 && x <= side && y >= 0 && y <= side
    }

    /// Step `n` cells along a direction vector.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, n: i32) -> Pos {
        Pos::new(self.x + dx * n, self.y + dy * n)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major ordering (y first, then x), matching the scan order of the selectors.
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

/// A participant: its mark and the most recent cell it placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub mark: Mark,
    /// `None` until the player has moved
    pub last_move: Option<Pos>,
}

impl Player {
    pub fn new(mark: Mark) -> Self {
        Self {
            mark,
            last_move: None,
        }
    }

    /// Same player after moving to `pos`.
    #[inline]
    pub fn moved_to(self, pos: Pos) -> Self {
        Self {
            last_move: Some(pos),
            ..self
        }
    }
}
