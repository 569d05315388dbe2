//! Core data structures for Lights Out.
//!
//! This crate provides the value types shared by the game model and its front ends.
//!
//! # Overview
//!
//! - [`size`]: [`BoardSize`], the validated side length of a square board, and the
//!   errors for invalid sizes and out-of-range coordinates
//! - [`position`]: [`Position`] coordinates and the [`NeighborBlock`] iterator over the
//!   3×3 block a move affects
//! - [`grid`]: [`LightGrid`], a row-major grid of lit/unlit cells with a compact text
//!   format
//!
//! # Examples
//!
//! ```
//! use lightsout_core::{BoardSize, LightGrid, Position};
//!
//! let size = BoardSize::SMALL;
//! let mut grid = LightGrid::all_lit(size);
//!
//! for pos in Position::new(1, 1).neighbor_block(size) {
//!     grid.flip(pos).unwrap();
//! }
//! assert!(grid.is_dark());
//! ```

pub mod grid;
pub mod position;
pub mod size;

// Re-export commonly used types
pub use self::{
    grid::{LightGrid, ParseGridError},
    position::{NeighborBlock, Position, Positions},
    size::{BoardSize, InvalidSizeError, OutOfRangeError, ParseBoardSizeError},
};
