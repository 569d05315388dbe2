//! Terminal play session driving a [`Game`].

use std::io::{self, BufRead, Write};

use lightsout_core::BoardSize;
use lightsout_game::Game;

use crate::command::{Command, HELP};

pub const WIN_MESSAGE: &str = "Congratulations! You've won!";

/// Whether the input loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
}

impl Session {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Reads commands line by line until `quit` or end of input.
    pub fn run<R, W>(&mut self, input: R, out: &mut W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let flow = match line.parse::<Command>() {
                Ok(command) => self.execute(command, out)?,
                Err(err) => {
                    log::debug!("rejected input {line:?}: {err}");
                    writeln!(out, "error: {err} (type `help` for commands)")?;
                    Flow::Continue
                }
            };
            out.flush()?;
            if flow.is_quit() {
                break;
            }
        }
        Ok(())
    }

    /// Applies one command and writes its result.
    pub fn execute<W>(&mut self, command: Command, out: &mut W) -> io::Result<Flow>
    where
        W: Write,
    {
        log::debug!("executing {command:?}");
        match command {
            Command::Toggle(pos) => match self.game.toggle(pos) {
                Ok(()) => {
                    self.write_board(out)?;
                    if self.game.is_solved() {
                        log::info!("board solved");
                        writeln!(out, "{WIN_MESSAGE}")?;
                    }
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
            Command::Shuffle => {
                let seed = self.game.randomize();
                writeln!(out, "new board, seed {seed}")?;
                self.write_board(out)?;
            }
            Command::Reset => {
                self.game.restart();
                self.write_board(out)?;
            }
            Command::Resize(size) => {
                if !size.is_preset() {
                    writeln!(out, "error: size must be one of {}", preset_list())?;
                    return Ok(Flow::Continue);
                }
                self.game.reset(size);
                self.write_board(out)?;
            }
            Command::Show => self.write_board(out)?,
            Command::Help => write_help(out)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Writes the board with row and column numbers.
    pub fn write_board<W>(&self, out: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        out.write_all(render_board(&self.game).as_bytes())
    }
}

/// Renders the board as text, `#` for a lit cell and `.` for an unlit one.
///
/// ```
/// use lightsout_app::session::render_board;
/// use lightsout_game::Game;
///
/// let game = Game::with_size(3).unwrap();
/// assert_eq!(render_board(&game), "   0 1 2\n0  # # #\n1  # # #\n2  # # #\n");
/// ```
#[must_use]
pub fn render_board(game: &Game) -> String {
    let grid = game.grid();
    let n = grid.size().get();
    let width = (n - 1).to_string().len();

    let mut text = format!("{:width$} ", "");
    for col in 0..n {
        text.push_str(&format!(" {col:>width$}"));
    }
    text.push('\n');

    for (row, cells) in grid.rows().enumerate() {
        text.push_str(&format!("{row:>width$} "));
        for &lit in cells {
            let mark = if lit { '#' } else { '.' };
            text.push_str(&format!(" {mark:>width$}"));
        }
        text.push('\n');
    }
    text
}

pub fn write_help<W>(out: &mut W) -> io::Result<()>
where
    W: Write,
{
    let width = HELP.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
    for (usage, summary) in HELP {
        writeln!(out, "  {usage:<width$}  {summary}")?;
    }
    Ok(())
}

fn preset_list() -> String {
    BoardSize::PRESETS
        .iter()
        .map(|size| size.get().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
