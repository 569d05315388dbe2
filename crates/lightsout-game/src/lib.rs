//! Lights Out game state management.
//!
//! This crate provides the game model that presentation layers drive: a [`Game`]
//! owns the board, applies moves, randomizes or resets it, and reports when every
//! light is off.
//!
//! # Overview
//!
//! - [`Game`] - a game session over a [`LightGrid`](lightsout_core::LightGrid)
//! - [`BoardSeed`] - the seed behind a randomized board, for reproducing it later
//! - [`GameError`] - errors for invalid sizes and coordinates
//!
//! # Examples
//!
//! ```
//! use lightsout_core::BoardSize;
//! use lightsout_game::Game;
//!
//! let mut game = Game::new(BoardSize::MEDIUM);
//! let seed = game.randomize();
//!
//! let mut replay = Game::new(BoardSize::MEDIUM);
//! replay.randomize_with_seed(seed);
//! assert_eq!(game, replay);
//!
//! // Moves outside the board are rejected.
//! assert!(game.toggle_at(4, 0).is_err());
//! ```

pub use self::{error::*, game::*, seed::*};

mod error;
mod game;
mod seed;
