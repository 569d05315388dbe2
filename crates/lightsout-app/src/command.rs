//! Text commands accepted by the terminal front end.

use std::str::FromStr;

use lightsout_core::{BoardSize, ParseBoardSizeError, Position};

/// A single line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Toggle the light at a position and its neighbors.
    Toggle(Position),
    /// Randomize the board.
    Shuffle,
    /// Turn every light back on at the current size.
    Reset,
    /// Switch to another board size and turn every light on.
    Resize(BoardSize),
    /// Print the board again.
    Show,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// One-line summaries of every command, in display order.
pub const HELP: &[(&str, &str)] = &[
    ("<row> <col>", "toggle the light at (row, col) and its neighbors"),
    ("new", "start a new random board"),
    ("reset", "turn every light back on"),
    ("size <3|4|5>", "switch board size"),
    ("show", "print the board"),
    ("help", "show this list"),
    ("quit", "leave the game"),
];

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCommandError {
    #[display("empty command")]
    Empty,
    #[display("unknown command {name:?}")]
    Unknown { name: String },
    #[display("`{command}` expects {expected}")]
    WrongArguments {
        command: &'static str,
        expected: &'static str,
    },
    #[display("invalid coordinate {text:?}, expected a number from 0")]
    InvalidCoordinate { text: String },
    #[display("{_0}")]
    InvalidSize(ParseBoardSizeError),
}

impl From<ParseBoardSizeError> for ParseCommandError {
    fn from(err: ParseBoardSizeError) -> Self {
        Self::InvalidSize(err)
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<_> = s.split_whitespace().collect();
        let Some((&head, args)) = words.split_first() else {
            return Err(ParseCommandError::Empty);
        };

        if head.starts_with(|ch: char| ch.is_ascii_digit() || ch == '-' || ch == '+') {
            return parse_toggle(&words, "<row> <col>");
        }

        let command = match head.to_ascii_lowercase().as_str() {
            "t" | "toggle" => return parse_toggle(args, "toggle"),
            "n" | "new" | "shuffle" => Self::Shuffle,
            "r" | "reset" => Self::Reset,
            "s" | "size" => {
                let [size] = args else {
                    return Err(ParseCommandError::WrongArguments {
                        command: "size",
                        expected: "one board size",
                    });
                };
                return Ok(Self::Resize(size.parse()?));
            }
            "show" | "board" => Self::Show,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => {
                return Err(ParseCommandError::Unknown {
                    name: head.to_owned(),
                });
            }
        };

        if !args.is_empty() {
            return Err(ParseCommandError::WrongArguments {
                command: head_name(command),
                expected: "no arguments",
            });
        }
        Ok(command)
    }
}

fn head_name(command: Command) -> &'static str {
    match command {
        Command::Toggle(_) => "toggle",
        Command::Shuffle => "new",
        Command::Reset => "reset",
        Command::Resize(_) => "size",
        Command::Show => "show",
        Command::Help => "help",
        Command::Quit => "quit",
    }
}

fn parse_toggle(args: &[&str], command: &'static str) -> Result<Command, ParseCommandError> {
    let [row, col] = args else {
        return Err(ParseCommandError::WrongArguments {
            command,
            expected: "a row and a column",
        });
    };
    Ok(Command::Toggle(Position::new(
        parse_coordinate(row)?,
        parse_coordinate(col)?,
    )))
}

fn parse_coordinate(text: &str) -> Result<usize, ParseCommandError> {
    text.parse()
        .map_err(|_| ParseCommandError::InvalidCoordinate {
            text: text.to_owned(),
        })
}
