//! Board coordinates and the iterators built on them.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

use crate::BoardSize;

/// A cell coordinate, counted from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index (top to bottom).
    pub row: usize,
    /// Column index (left to right).
    pub col: usize,
}

impl Position {
    /// Creates a position. Bounds are not checked; see [`BoardSize::position`].
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the in-bounds members of the 3×3 block centered on this position.
    ///
    /// The block yields the position itself and every orthogonal or diagonal
    /// neighbor that lies on a board of `size`, in row-major order. A position
    /// outside the board yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use lightsout_core::{BoardSize, Position};
    ///
    /// let size = BoardSize::SMALL;
    /// assert_eq!(Position::new(0, 0).neighbor_block(size).len(), 4);
    /// assert_eq!(Position::new(0, 1).neighbor_block(size).len(), 6);
    /// assert_eq!(Position::new(1, 1).neighbor_block(size).len(), 9);
    /// ```
    #[must_use]
    pub fn neighbor_block(self, size: BoardSize) -> NeighborBlock {
        NeighborBlock::new(self, size)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Iterator over the in-bounds 3×3 block around a position.
///
/// Created by [`Position::neighbor_block`].
#[derive(Debug, Clone)]
pub struct NeighborBlock {
    col_start: usize,
    row_end: usize,
    col_end: usize,
    row: usize,
    col: usize,
}

impl NeighborBlock {
    fn new(center: Position, size: BoardSize) -> Self {
        if !size.contains(center) {
            return Self {
                col_start: 0,
                row_end: 0,
                col_end: 0,
                row: 0,
                col: 0,
            };
        }
        let n = size.get();
        let row_start = center.row.saturating_sub(1);
        let col_start = center.col.saturating_sub(1);
        Self {
            col_start,
            row_end: (center.row + 2).min(n),
            col_end: (center.col + 2).min(n),
            row: row_start,
            col: col_start,
        }
    }

    fn remaining(&self) -> usize {
        if self.row >= self.row_end {
            return 0;
        }
        let width = self.col_end - self.col_start;
        (self.row_end - self.row - 1) * width + (self.col_end - self.col)
    }
}

impl Iterator for NeighborBlock {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.row_end {
            return None;
        }
        let pos = Position::new(self.row, self.col);
        self.col += 1;
        if self.col == self.col_end {
            self.col = self.col_start;
            self.row += 1;
        }
        Some(pos)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl FusedIterator for NeighborBlock {}
impl ExactSizeIterator for NeighborBlock {}

/// Iterator over every position of a board in row-major order.
///
/// Created by [`BoardSize::positions`].
#[derive(Debug, Clone)]
pub struct Positions {
    side: usize,
    front: usize,
    back: usize,
}

impl Positions {
    pub(crate) fn new(size: BoardSize) -> Self {
        Self {
            side: size.get(),
            front: 0,
            back: size.cell_count(),
        }
    }

    #[inline]
    fn item_at(&self, index: usize) -> Position {
        Position::new(index / self.side, index % self.side)
    }
}

impl Iterator for Positions {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let pos = self.item_at(self.front);
        self.front += 1;
        Some(pos)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Positions {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.item_at(self.back))
    }
}

impl FusedIterator for Positions {}
impl ExactSizeIterator for Positions {}
