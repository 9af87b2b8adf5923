#![warn(missing_docs)]

//! # `roadlink`
//!
//! A board model for road building puzzles: a square grid of tiles where the player swaps movable road pieces and turns
//! rotatable ones until a road runs from the start on the bottom row to the finish on the top row.
//!
//! Begin by reading a level definition with [`load_level`] (see the [`parser`] module for the format) or by placing tiles
//! with a [`LevelBuilder`]. Either way, the resulting [`Level`] satisfies the rules of the game: exactly one start on the
//! bottom row, exactly one finish on the top row and at least one piece the player can move or rotate.
//! Then call [`swap`](Level::swap) and [`rotate`](Level::rotate), and ask [`is_solved`](Level::is_solved) at any time.
//!
//! # Internals
//! Each [`CellType`] declares which sides of its tile are open. Two neighboring cells are connected only if both open
//! toward each other; these connections form a graph with at most two edges per vertex, so the road is a simple walk.
//! [`Level::trace`] follows it from the start and reports the path taken and where it ended.
//! This crate only checks arrangements, it never searches for one.

pub use builder::LevelBuilder;
pub use cell::Cell;
pub use cell_type::{CellKind, CellType};
pub use coordinate::Coordinate;
pub use difficulty::Difficulty;
pub use direction::{Connections, Direction};
pub use level::{Level, Move};
pub use parser::load_level;
pub use trace::{Trace, TraceOutcome};

pub mod builder;
pub(crate) mod cell;
pub(crate) mod cell_type;
pub(crate) mod coordinate;
pub(crate) mod difficulty;
pub(crate) mod direction;
pub mod error;
pub(crate) mod level;
pub mod parser;
pub mod trace;
