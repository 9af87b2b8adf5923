//! Error types for level construction and board operations.
//!
//! Level construction fails with a [`LevelError`], which tells a malformed definition ([`ParseError`])
//! apart from a well-formed one that breaks the rules of the game ([`StructuralError`]).
//! Board operations fail with a [`MoveError`] and leave the board untouched.

use thiserror::Error;

use crate::cell_type::CellType;
use crate::coordinate::Coordinate;

/// The level definition could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Boards must be at least 3 cells wide and small enough to fit in memory.
    #[error("invalid board size {0}")]
    InvalidBoardSize(i64),

    /// The difficulty line names no known difficulty.
    #[error("invalid difficulty {0:?}")]
    InvalidDifficulty(String),

    /// A line is missing or could not be read.
    #[error("malformed level at line {line}: {reason}")]
    MalformedLevel {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// No tile is written this way.
    #[error("unknown cell symbol {0:?}")]
    UnknownSymbol(char),

    /// Not a row letter followed by a column number.
    #[error("invalid coordinate {0:?} (expected a row letter and a column number, e.g. a1)")]
    InvalidCoordinate(String),
}

/// The level definition is readable but describes an unplayable board.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralError {
    /// No start on the bottom row.
    #[error("no start cell on the bottom row")]
    NoStartCell,

    /// No finish on the top row.
    #[error("no finish cell on the top row")]
    NoFinishCell,

    /// More than one start anywhere on the board.
    #[error("more than one start cell")]
    DuplicateStart,

    /// More than one finish anywhere on the board.
    #[error("more than one finish cell")]
    DuplicateFinish,

    /// Nothing the player could move or rotate.
    #[error("no movable or rotatable road cell")]
    NoRoadCell,
}

/// A coordinate does not address the intended cell.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    /// No cell at this coordinate.
    #[error("coordinate {0} is outside the board")]
    OutOfBounds(Coordinate),

    /// A cell was about to be stored at a coordinate other than its own position.
    #[error("cell does not belong at {0}")]
    InvalidCell(Coordinate),
}

/// The targeted cell cannot do what was asked of it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityError {
    /// The cell here cannot be swapped.
    #[error("cell at {0} is not movable")]
    NotMovable(Coordinate),

    /// The cell here cannot be turned.
    #[error("cell at {0} is not rotatable")]
    NotRotatable(Coordinate),

    /// This tile type has no next orientation.
    #[error("{0:?} tiles have no rotation")]
    UnsupportedRotation(CellType),
}

/// Errors building a [`Level`](crate::Level).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// See [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// See [`StructuralError`].
    #[error(transparent)]
    Structural(#[from] StructuralError),

    /// A tile was placed off the board.
    #[error(transparent)]
    Bounds(#[from] BoundsError),
}

/// Errors applying a move to a [`Level`](crate::Level).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The move named a coordinate off the board.
    #[error(transparent)]
    Bounds(#[from] BoundsError),

    /// The cell cannot perform the move.
    #[error(transparent)]
    Capability(#[from] CapabilityError),
}

/// Result of building or loading a level.
pub type LevelResult<T> = Result<T, LevelError>;
