//! Board dimensions.

use std::{
    fmt::{self, Display},
    num::NonZero,
    str::FromStr,
};

use crate::{Position, position::Positions};

/// Side length of a square Lights Out board.
///
/// A board of size `n` has `n × n` cells. The size is always at least 1 and at
/// most [`BoardSize::MAX_SIDE`].
///
/// # Examples
///
/// ```
/// use lightsout_core::BoardSize;
///
/// let size = BoardSize::new(4).unwrap();
/// assert_eq!(size.get(), 4);
/// assert_eq!(size.cell_count(), 16);
/// assert_eq!(size.to_string(), "4x4");
///
/// assert!(BoardSize::new(0).is_err());
/// assert!(BoardSize::new(usize::MAX).is_err());
/// assert!(BoardSize::try_from(-1_i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardSize(NonZero<usize>);

impl BoardSize {
    /// The 3×3 board.
    pub const SMALL: Self = Self::preset(3);
    /// The 4×4 board.
    pub const MEDIUM: Self = Self::preset(4);
    /// The 5×5 board.
    pub const LARGE: Self = Self::preset(5);

    /// Sizes offered to players, smallest first.
    pub const PRESETS: [Self; 3] = [Self::SMALL, Self::MEDIUM, Self::LARGE];

    /// The size a new game starts with.
    pub const DEFAULT: Self = Self::SMALL;

    /// The largest accepted side length.
    ///
    /// `MAX_SIDE * MAX_SIDE` never exceeds `isize::MAX`, the most cells a grid
    /// can allocate.
    pub const MAX_SIDE: usize = isize::MAX.unsigned_abs().isqrt();

    const fn preset(value: usize) -> Self {
        match NonZero::new(value) {
            Some(value) => Self(value),
            None => panic!("board size must be non-zero"),
        }
    }

    /// Creates a board size.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] if `value` is zero or greater than
    /// [`BoardSize::MAX_SIDE`].
    pub fn new(value: usize) -> Result<Self, InvalidSizeError> {
        match NonZero::new(value) {
            Some(side) if value <= Self::MAX_SIDE => Ok(Self(side)),
            _ => Err(InvalidSizeError {
                value: i128::try_from(value).unwrap_or(i128::MAX),
            }),
        }
    }

    /// Returns the side length.
    #[must_use]
    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Returns the number of cells on a board of this size.
    #[must_use]
    #[inline]
    pub const fn cell_count(self) -> usize {
        self.get() * self.get()
    }

    /// Returns `true` if this size is one of [`BoardSize::PRESETS`].
    #[must_use]
    pub fn is_preset(self) -> bool {
        Self::PRESETS.contains(&self)
    }

    /// Returns `true` if `pos` lies on a board of this size.
    #[must_use]
    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        pos.row < self.get() && pos.col < self.get()
    }

    /// Returns the position at `(row, col)` after checking it against this size.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if either coordinate is not in `0..size`.
    pub fn position(self, row: usize, col: usize) -> Result<Position, OutOfRangeError> {
        let pos = Position::new(row, col);
        self.check(pos)?;
        Ok(pos)
    }

    /// Checks that `pos` lies on a board of this size.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if either coordinate is not in `0..size`.
    pub fn check(self, pos: Position) -> Result<(), OutOfRangeError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(OutOfRangeError {
                row: pos.row,
                col: pos.col,
                size: self.get(),
            })
        }
    }

    /// Returns an iterator over every position in row-major order.
    #[must_use]
    pub fn positions(self) -> Positions {
        Positions::new(self)
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.get())
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> usize {
        size.get()
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = InvalidSizeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for BoardSize {
    type Error = InvalidSizeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|side| Self::new(side).ok())
            .ok_or(InvalidSizeError {
                value: value.into(),
            })
    }
}

impl FromStr for BoardSize {
    type Err = ParseBoardSizeError;

    /// Parses `"N"` or `"NxN"` (the separator may also be `X` or `×`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let side = match s.split_once(['x', 'X', '×']) {
            Some((rows, cols)) => {
                let rows = parse_side(rows, s)?;
                let cols = parse_side(cols, s)?;
                if rows != cols {
                    return Err(ParseBoardSizeError::NotSquare { rows, cols });
                }
                rows
            }
            None => parse_side(s, s)?,
        };
        Ok(Self::try_from(side)?)
    }
}

fn parse_side(part: &str, input: &str) -> Result<i64, ParseBoardSizeError> {
    part.trim()
        .parse()
        .map_err(|_| ParseBoardSizeError::Syntax {
            input: input.to_owned(),
        })
}

/// Error returned when a board size is not in `1..=BoardSize::MAX_SIDE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("board size must be between 1 and {}, got {value}", BoardSize::MAX_SIDE)]
pub struct InvalidSizeError {
    /// The rejected value.
    pub value: i128,
}

/// Error returned when a coordinate lies outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("position ({row}, {col}) is outside the {size}x{size} board")]
pub struct OutOfRangeError {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
    /// Side length of the board.
    pub size: usize,
}

/// Error returned when parsing a [`BoardSize`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardSizeError {
    /// The text is not `N` or `NxN`.
    #[display("invalid board size: {input:?}")]
    Syntax {
        /// The rejected text.
        input: String,
    },
    /// Rows and columns differ.
    #[display("board must be square, got {rows}x{cols}")]
    NotSquare {
        /// Parsed row count.
        rows: i64,
        /// Parsed column count.
        cols: i64,
    },
    /// The side length is out of range.
    #[display("{_0}")]
    InvalidSize(InvalidSizeError),
}

impl From<InvalidSizeError> for ParseBoardSizeError {
    fn from(err: InvalidSizeError) -> Self {
        Self::InvalidSize(err)
    }
}
