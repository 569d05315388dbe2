//! Command-line options.

use clap::Parser;
use lightsout_core::BoardSize;
use lightsout_game::{BoardSeed, Game};

#[derive(Debug, Parser)]
#[command(name = "lightsout", version = crate::version::build_version(), about)]
pub struct Args {
    /// Board size: 3, 4 or 5 (`NxN` is accepted too).
    #[arg(short, long, value_name = "SIZE", default_value = "3", value_parser = parse_preset_size)]
    pub size: BoardSize,

    /// Start from a random board instead of one with every light on.
    #[arg(long)]
    pub shuffle: bool,

    /// Start from the random board produced by this seed (64 hex digits).
    #[arg(long, value_name = "HEX")]
    pub seed: Option<BoardSeed>,
}

impl Args {
    /// Builds the starting game and returns the seed it was randomized with, if any.
    #[must_use]
    pub fn initial_game(&self) -> (Game, Option<BoardSeed>) {
        let mut game = Game::new(self.size);
        let seed = match (self.seed, self.shuffle) {
            (Some(seed), _) => {
                game.randomize_with_seed(seed);
                Some(seed)
            }
            (None, true) => Some(game.randomize()),
            (None, false) => None,
        };
        (game, seed)
    }
}

fn parse_preset_size(s: &str) -> Result<BoardSize, String> {
    let size: BoardSize = s.parse().map_err(|err| format!("{err}"))?;
    if !size.is_preset() {
        return Err(format!("{size} is not offered, choose 3, 4 or 5"));
    }
    Ok(size)
}
