use lightsout_core::{InvalidSizeError, OutOfRangeError};

/// Errors returned by [`Game`](crate::Game) operations.
///
/// Both variants signal a caller bug: presentation layers are expected to validate
/// sizes and map pointer locations to cells before calling into the model.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum GameError {
    /// The requested board size is not positive.
    #[display("invalid argument: {_0}")]
    InvalidArgument(InvalidSizeError),
    /// A row or column lies outside the board.
    #[display("out of range: {_0}")]
    OutOfRange(OutOfRangeError),
}
