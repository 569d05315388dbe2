//! Square grid of lights.

use std::{
    fmt::{self, Display},
    ops::Index,
    slice,
    str::FromStr,
};

use crate::{BoardSize, OutOfRangeError, Position};

/// A square grid of lit (`true`) and unlit (`false`) cells stored in row-major order.
///
/// The grid always holds exactly `size × size` cells.
///
/// # Text format
///
/// [`Display`] writes one line per row, `#` for a lit cell and `.` for an unlit one.
/// [`FromStr`] reads the same characters and ignores whitespace, so a grid may also be
/// written on a single line as long as its length is a perfect square.
///
/// ```
/// use lightsout_core::{LightGrid, Position};
///
/// let grid: LightGrid = "
///     #..
///     .#.
///     ..#
/// "
/// .parse()
/// .unwrap();
/// assert_eq!(grid.size().get(), 3);
/// assert_eq!(grid.lit_count(), 3);
/// assert!(grid[Position::new(1, 1)]);
/// assert_eq!(grid.to_string(), "#..\n.#.\n..#");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LightGrid {
    size: BoardSize,
    cells: Vec<bool>,
}

impl LightGrid {
    /// Creates a grid with every cell set to `lit`.
    #[must_use]
    pub fn new(size: BoardSize, lit: bool) -> Self {
        Self {
            size,
            cells: vec![lit; size.cell_count()],
        }
    }

    /// Creates a grid with every cell lit.
    #[must_use]
    pub fn all_lit(size: BoardSize) -> Self {
        Self::new(size, true)
    }

    /// Creates a grid with every cell unlit.
    #[must_use]
    pub fn all_unlit(size: BoardSize) -> Self {
        Self::new(size, false)
    }

    /// Returns the side length of the grid.
    #[must_use]
    #[inline]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    #[inline]
    fn offset(&self, pos: Position) -> Option<usize> {
        self.size
            .contains(pos)
            .then(|| pos.row * self.size.get() + pos.col)
    }

    /// Returns the state of the cell at `pos`, or `None` if it is off the grid.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<bool> {
        self.offset(pos).map(|i| self.cells[i])
    }

    /// Flips the cell at `pos` and returns its new state.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `pos` is off the grid.
    pub fn flip(&mut self, pos: Position) -> Result<bool, OutOfRangeError> {
        self.size.check(pos)?;
        let cell = &mut self.cells[pos.row * self.size.get() + pos.col];
        *cell = !*cell;
        Ok(*cell)
    }

    /// Replaces every cell with the value produced by `f`, in row-major order.
    pub fn fill_with<F>(&mut self, mut f: F)
    where
        F: FnMut(Position) -> bool,
    {
        for (pos, cell) in self.size.positions().zip(&mut self.cells) {
            *cell = f(pos);
        }
    }

    /// Returns the number of lit cells.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    /// Returns `true` if no cell is lit.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }

    /// Returns an iterator over the rows of the grid.
    pub fn rows(&self) -> slice::Chunks<'_, bool> {
        self.cells.chunks(self.size.get())
    }

    /// Returns the cells as a row-major slice.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }
}

impl Index<Position> for LightGrid {
    type Output = bool;

    /// # Panics
    ///
    /// Panics if `pos` is off the grid.
    fn index(&self, pos: Position) -> &Self::Output {
        let Some(i) = self.offset(pos) else {
            panic!("{pos} is outside the {} grid", self.size);
        };
        &self.cells[i]
    }
}

impl Display for LightGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &lit in row {
                f.write_str(if lit { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

impl FromStr for LightGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .enumerate()
            .map(|(index, ch)| match ch {
                '#' => Ok(true),
                '.' => Ok(false),
                _ => Err(ParseGridError::InvalidCharacter { ch, index }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let len = cells.len();
        let side = len.isqrt();
        if side * side != len {
            return Err(ParseGridError::NotSquare { len });
        }
        let size = BoardSize::new(side).map_err(|_| ParseGridError::NotSquare { len })?;
        Ok(Self { size, cells })
    }
}

/// Error returned when parsing a [`LightGrid`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// A character other than `#`, `.`, or whitespace was found.
    #[display("invalid grid character {ch:?} at cell {index}")]
    InvalidCharacter {
        /// The rejected character.
        ch: char,
        /// Index of the cell, not counting whitespace.
        index: usize,
    },
    /// The cell count is zero or not a perfect square.
    #[display("grid has {len} cells, which is not a positive square number")]
    NotSquare {
        /// Number of cells found.
        len: usize,
    },
}
