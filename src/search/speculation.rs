//! Trial marks that are always taken back
//!
//! The look-ahead plays candidate moves on the caller's board. A
//! [`Speculation`] records each trial mark and removes them all, newest
//! first, when it goes out of scope, including on early return. Bounds
//! grown by a trial mark stay grown.

use std::ops::{Deref, DerefMut};

use crate::board::{Board, Mark, Pos};

/// Scoped set of trial marks on a borrowed board
pub struct Speculation<'a> {
    board: &'a mut Board,
    placed: Vec<Pos>,
}

impl<'a> Speculation<'a> {
    pub fn new(board: &'a mut Board) -> Self {
        Self {
            board,
            placed: Vec::with_capacity(2),
        }
    }

    /// Place a trial mark; `false` if the cell is not available.
    pub fn place(&mut self, pos: Pos, mark: Mark) -> bool {
        if self.board.place(pos.x, pos.y, mark) {
            self.placed.push(pos);
            true
        } else {
            false
        }
    }

    /// Trial marks currently on the board, oldest first
    pub fn placed(&self) -> &[Pos] {
        &self.placed
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        while let Some(pos) = self.placed.pop() {
            self.board.unplace(pos);
        }
    }
}
