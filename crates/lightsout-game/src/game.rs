use lightsout_core::{BoardSize, LightGrid, Position};
use rand::distr::{Distribution as _, StandardUniform};

use crate::{BoardSeed, GameError};

/// A Lights Out game session.
///
/// Owns a square grid of lights. A move toggles the chosen cell together with every
/// orthogonal and diagonal neighbor on the board; the game is solved once every light
/// is off. Solving does not lock the board: further moves remain legal, and it is up to
/// the caller to decide what happens after a win.
///
/// # Example
///
/// ```
/// use lightsout_core::BoardSize;
/// use lightsout_game::Game;
///
/// let mut game = Game::new(BoardSize::SMALL);
/// assert!(!game.is_solved()); // every light starts on
///
/// // On a 3×3 board the center move covers the whole grid.
/// game.toggle_at(1, 1).unwrap();
/// assert!(game.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: LightGrid,
}

impl Game {
    /// Creates a game with every light on.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            grid: LightGrid::all_lit(size),
        }
    }

    /// Creates a game with every light on after validating `size`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidArgument`] if `size` is zero or larger than
    /// [`BoardSize::MAX_SIDE`].
    pub fn with_size(size: usize) -> Result<Self, GameError> {
        Ok(Self::new(BoardSize::new(size)?))
    }

    /// Creates a game from an existing grid.
    ///
    /// # Example
    ///
    /// ```
    /// use lightsout_game::Game;
    ///
    /// let game = Game::from_grid("#.. ... ...".parse().unwrap());
    /// assert_eq!(game.lit_count(), 1);
    /// assert_eq!(game.cell_at(0, 0), Ok(true));
    /// ```
    #[must_use]
    pub fn from_grid(grid: LightGrid) -> Self {
        Self { grid }
    }

    /// Returns the side length of the board.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.grid.size()
    }

    /// Returns the underlying grid.
    #[must_use]
    pub fn grid(&self) -> &LightGrid {
        &self.grid
    }

    /// Returns the state of the light at `pos`, or `None` if it is off the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<bool> {
        self.grid.get(pos)
    }

    /// Returns the state of the light at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] if `row` or `col` is not in `0..size`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<bool, GameError> {
        let pos = self.size().position(row, col)?;
        Ok(self.grid[pos])
    }

    /// Returns the number of lights that are on.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.grid.lit_count()
    }

    /// Checks if the game is solved, i.e. every light is off.
    ///
    /// A freshly created game has every light on and is therefore not solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.grid.is_dark()
    }

    /// Toggles the light at `pos` and its in-bounds neighbors.
    ///
    /// A corner move flips 4 lights, an edge move 6 and an interior move 9.
    /// Applying the same move twice restores the previous board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] if `pos` is off the board. The board is
    /// left unchanged in that case.
    pub fn toggle(&mut self, pos: Position) -> Result<(), GameError> {
        let size = self.size();
        size.check(pos)?;
        for neighbor in pos.neighbor_block(size) {
            self.grid.flip(neighbor)?;
        }
        log::trace!("toggled {pos}, {} lights on", self.grid.lit_count());
        Ok(())
    }

    /// Toggles the light at `(row, col)` and its in-bounds neighbors.
    ///
    /// See [`Game::toggle`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] if `row` or `col` is not in `0..size`.
    pub fn toggle_at(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        self.toggle(Position::new(row, col))
    }

    /// Replaces the board with a `size × size` board with every light on.
    ///
    /// Used both to start over at the current size and to switch sizes.
    pub fn reset(&mut self, size: BoardSize) {
        log::debug!("reset board to {size}");
        self.grid = LightGrid::all_lit(size);
    }

    /// Turns every light on again without changing the size.
    pub fn restart(&mut self) {
        self.reset(self.size());
    }

    /// Sets every light independently to on or off with equal probability.
    ///
    /// Returns the seed that was used, so the board can be recreated with
    /// [`Game::randomize_with_seed`]. The resulting board is not guaranteed to be
    /// solvable.
    pub fn randomize(&mut self) -> BoardSeed {
        let seed = BoardSeed::random();
        self.randomize_with_seed(seed);
        seed
    }

    /// Sets every light from the random stream determined by `seed`.
    ///
    /// The same seed and size always produce the same board.
    pub fn randomize_with_seed(&mut self, seed: BoardSeed) {
        let mut rng = seed.rng();
        self.grid.fill_with(|_| StandardUniform.sample(&mut rng));
        log::debug!(
            "randomized {} board with seed {seed}, {} lights on",
            self.size(),
            self.grid.lit_count()
        );
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(BoardSize::DEFAULT)
    }
}

impl TryFrom<i64> for Game {
    type Error = GameError;

    fn try_from(size: i64) -> Result<Self, Self::Error> {
        Ok(Self::new(BoardSize::try_from(size)?))
    }
}

#[cfg(test)]
mod tests {
    use lightsout_core::{InvalidSizeError, OutOfRangeError};
    use proptest::prelude::*;

    use super::*;

    const SEED: &str = "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3";

    fn flipped_count(before: &Game, after: &Game) -> usize {
        before
            .grid()
            .as_slice()
            .iter()
            .zip(after.grid().as_slice())
            .filter(|(a, b)| a != b)
            .count()
    }

    #[test]
    fn test_new_game_is_all_lit() {
        for side in 1..=6 {
            let game = Game::with_size(side).unwrap();
            assert_eq!(game.size().get(), side);
            assert_eq!(game.grid().as_slice().len(), side * side);
            assert_eq!(game.lit_count(), side * side);
            assert!(!game.is_solved());
        }
        assert_eq!(Game::default().size(), BoardSize::SMALL);
    }

    #[test]
    fn test_invalid_sizes_are_rejected() {
        assert_eq!(
            Game::with_size(0),
            Err(GameError::InvalidArgument(InvalidSizeError { value: 0 }))
        );
        assert_eq!(
            Game::try_from(-1_i64),
            Err(GameError::InvalidArgument(InvalidSizeError { value: -1 }))
        );
        assert!(Game::try_from(0_i64).unwrap_err().is_invalid_argument());
        assert!(Game::with_size(usize::MAX).unwrap_err().is_invalid_argument());
        assert!(
            Game::with_size(BoardSize::MAX_SIDE + 1)
                .unwrap_err()
                .is_invalid_argument()
        );
        assert_eq!(Game::try_from(4_i64).map(|g| g.size()), Ok(BoardSize::MEDIUM));
    }

    #[test]
    fn test_center_move_solves_3x3() {
        let mut game = Game::new(BoardSize::SMALL);
        game.toggle_at(1, 1).unwrap();
        assert!(game.is_solved());
        assert_eq!(game.lit_count(), 0);

        // Solving does not lock the board.
        game.toggle_at(0, 0).unwrap();
        assert!(!game.is_solved());
        assert_eq!(game.lit_count(), 4);
    }

    #[test]
    fn test_neighbor_counts() {
        for size in [BoardSize::SMALL, BoardSize::MEDIUM, BoardSize::LARGE] {
            let last = size.get() - 1;
            let cases = [
                ((0, 0), 4),
                ((0, last), 4),
                ((last, 0), 4),
                ((last, last), 4),
                ((0, 1), 6),
                ((1, 0), 6),
                ((last, 1), 6),
                ((1, last), 6),
                ((1, 1), 9),
            ];
            for ((row, col), expected) in cases {
                let before = Game::new(size);
                let mut after = before.clone();
                after.toggle_at(row, col).unwrap();
                assert_eq!(
                    flipped_count(&before, &after),
                    expected,
                    "{size} board, move ({row}, {col})"
                );
            }
        }
    }

    #[test]
    fn test_toggle_corner_pattern() {
        let mut game = Game::new(BoardSize::MEDIUM);
        game.toggle_at(3, 3).unwrap();
        assert_eq!(game.grid().to_string(), "####\n####\n##..\n##..");
    }

    #[test]
    fn test_out_of_range_is_rejected_without_mutation() {
        for size in BoardSize::PRESETS {
            let n = size.get();
            let mut game = Game::new(size);
            let expected = GameError::OutOfRange(OutOfRangeError {
                row: n,
                col: 0,
                size: n,
            });
            assert_eq!(game.toggle_at(n, 0), Err(expected));
            assert!(game.toggle_at(0, n).unwrap_err().is_out_of_range());
            assert!(game.toggle_at(usize::MAX, 0).is_err());
            assert_eq!(game, Game::new(size));

            assert_eq!(game.cell_at(n, 0), Err(expected));
            assert_eq!(game.cell(Position::new(0, n)), None);
        }
    }

    #[test]
    fn test_cell_at_reads_state() {
        let mut game = Game::new(BoardSize::MEDIUM);
        game.toggle_at(0, 0).unwrap();
        assert_eq!(game.cell_at(0, 0), Ok(false));
        assert_eq!(game.cell_at(1, 1), Ok(false));
        assert_eq!(game.cell_at(2, 2), Ok(true));
        assert_eq!(game.cell(Position::new(0, 2)), Some(true));
    }

    #[test]
    fn test_reset_and_restart() {
        let mut game = Game::new(BoardSize::SMALL);
        game.toggle_at(0, 0).unwrap();

        game.restart();
        assert_eq!(game, Game::new(BoardSize::SMALL));

        game.reset(BoardSize::LARGE);
        assert_eq!(game.size(), BoardSize::LARGE);
        assert_eq!(game.lit_count(), 25);

        let snapshot = game.clone();
        game.reset(BoardSize::LARGE);
        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_randomize_with_seed_is_deterministic() {
        let seed: BoardSeed = SEED.parse().unwrap();
        let mut a = Game::new(BoardSize::LARGE);
        let mut b = Game::new(BoardSize::LARGE);
        a.randomize_with_seed(seed);
        b.randomize_with_seed(seed);
        assert_eq!(a, b);

        let mut c = Game::new(BoardSize::LARGE);
        c.randomize_with_seed(BoardSeed::from_bytes([0; 32]));
        let mut d = Game::new(BoardSize::LARGE);
        d.randomize_with_seed(BoardSeed::from_bytes([1; 32]));
        assert_ne!(c, d);
    }

    #[test]
    fn test_randomize_returns_reproducible_seed() {
        let mut game = Game::new(BoardSize::MEDIUM);
        let seed = game.randomize();
        let mut replay = Game::new(BoardSize::MEDIUM);
        replay.randomize_with_seed(seed);
        assert_eq!(game, replay);
    }

    #[test]
    fn test_randomize_keeps_size_and_covers_both_states() {
        let size = BoardSize::LARGE;
        let mut game = Game::new(size);
        let mut seen_lit = vec![false; size.cell_count()];
        let mut seen_unlit = vec![false; size.cell_count()];

        for _ in 0..200 {
            game.randomize();
            assert_eq!(game.size(), size);
            assert_eq!(game.grid().as_slice().len(), size.cell_count());
            for (i, &lit) in game.grid().as_slice().iter().enumerate() {
                if lit {
                    seen_lit[i] = true;
                } else {
                    seen_unlit[i] = true;
                }
            }
        }

        assert!(seen_lit.iter().all(|&seen| seen));
        assert!(seen_unlit.iter().all(|&seen| seen));
    }

    #[test]
    fn test_game_error_display() {
        let err = GameError::from(OutOfRangeError {
            row: 5,
            col: 1,
            size: 5,
        });
        assert_eq!(
            err.to_string(),
            "out of range: position (5, 1) is outside the 5x5 board"
        );
        let err = GameError::from(InvalidSizeError { value: 0 });
        assert_eq!(
            err.to_string(),
            format!(
                "invalid argument: board size must be between 1 and {}, got 0",
                BoardSize::MAX_SIDE
            )
        );
    }

    proptest! {
        #[test]
        fn toggle_twice_restores_board(
            side in 1usize..7,
            seed in any::<[u8; 32]>(),
            row in 0usize..7,
            col in 0usize..7,
        ) {
            prop_assume!(row < side && col < side);
            let mut game = Game::with_size(side).unwrap();
            game.randomize_with_seed(BoardSeed::from_bytes(seed));
            let before = game.clone();

            game.toggle_at(row, col).unwrap();
            game.toggle_at(row, col).unwrap();
            prop_assert_eq!(game, before);
        }

        #[test]
        fn toggles_commute(
            side in 2usize..7,
            moves in proptest::collection::vec((0usize..7, 0usize..7), 1..12),
        ) {
            let size = BoardSize::new(side).unwrap();
            let moves: Vec<_> = moves
                .into_iter()
                .filter(|&(row, col)| row < side && col < side)
                .collect();

            let mut forward = Game::new(size);
            for &(row, col) in &moves {
                forward.toggle_at(row, col).unwrap();
            }
            let mut backward = Game::new(size);
            for &(row, col) in moves.iter().rev() {
                backward.toggle_at(row, col).unwrap();
            }
            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn solved_iff_all_unlit(side in 1usize..6, seed in any::<[u8; 32]>()) {
            let mut game = Game::with_size(side).unwrap();
            game.randomize_with_seed(BoardSeed::from_bytes(seed));
            let all_unlit = game.grid().as_slice().iter().all(|&lit| !lit);
            prop_assert_eq!(game.is_solved(), all_unlit);
        }
    }
}
