//! Lights Out in the terminal.
//!
//! Reads moves from standard input and prints the board after each one.

use std::io::{self, Write as _};

use clap::Parser as _;
use lightsout_app::{cli::Args, command::HELP, session::Session, version};

fn main() -> io::Result<()> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    log::info!(
        "starting lightsout, version={}, size={}",
        version::build_version(),
        args.size
    );

    let (game, seed) = args.initial_game();
    let mut session = Session::new(game);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Lights Out: turn every light off.")?;
    writeln!(out, "Enter `<row> <col>` to make a move, or `help` ({} commands).", HELP.len())?;
    if let Some(seed) = seed {
        writeln!(out, "seed {seed}")?;
    }
    session.write_board(&mut out)?;
    out.flush()?;

    session.run(io::stdin().lock(), &mut out)
}
