//! Reading level definitions.
//!
//! A definition is line oriented. Blank lines and lines starting with `#` are skipped anywhere. The remaining lines are,
//! in order: the board size, the difficulty, and one line per row holding exactly `size` cell symbols
//! (see [`CellType::symbol`]).
//!
//! ```text
//! # a straight road
//! 3
//! STARTER
//! ·F·
//! ·G·
//! ·S·
//! ```

use std::str::FromStr;

use itertools::Itertools;
use log::warn;

use crate::builder::{LevelBuilder, MINIMUM_BOARD_SIZE};
use crate::cell_type::CellType;
use crate::difficulty::Difficulty;
use crate::error::{LevelResult, ParseError};
use crate::level::Level;

fn malformed(line: usize, reason: impl Into<String>) -> ParseError {
    ParseError::MalformedLevel { line, reason: reason.into() }
}

/// Parse a level definition into a [`Level`].
///
/// Nothing is returned unless the whole definition is valid: a [`ParseError`] reports text that cannot be read,
/// a [`StructuralError`](crate::error::StructuralError) a board that breaks the rules of the game.
/// Lines left over after the last row are ignored.
pub fn load_level(text: &str) -> LevelResult<Level> {
    let end_of_input = text.lines().count() + 1;
    // 1-based line numbers, for error messages
    let mut lines = text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim_end()))
        .filter(|(_, line)| !line.trim_start().is_empty() && !line.starts_with('#'))
        .collect_vec()
        .into_iter();

    let (line, size) = lines.next().ok_or_else(|| malformed(end_of_input, "missing board size"))?;
    let size = size.trim().parse::<i64>()
        .map_err(|_| malformed(line, format!("board size {:?} is not a number", size.trim())))?;
    let size = usize::try_from(size).ok()
        .filter(|size| *size >= MINIMUM_BOARD_SIZE)
        .ok_or(ParseError::InvalidBoardSize(size))?;

    let (_, difficulty) = lines.next().ok_or_else(|| malformed(end_of_input, "missing difficulty"))?;
    let difficulty = Difficulty::from_str(difficulty.trim())
        .map_err(|_| ParseError::InvalidDifficulty(difficulty.trim().to_string()))?;

    // the grid is only allocated once every row is known to be present
    if lines.len() < size {
        return Err(malformed(end_of_input, format!("expected {size} rows, found {}", lines.len())).into());
    }
    let mut builder = LevelBuilder::with_size(size)?;
    builder.difficulty(difficulty);

    for row in 0..size {
        let (line, symbols) = lines.next().ok_or_else(|| malformed(end_of_input, format!("expected {size} rows, found {row}")))?;

        let cell_types = symbols.chars()
            .map(CellType::from_symbol)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| malformed(line, err.to_string()))?;
        if cell_types.len() != size {
            return Err(malformed(line, format!("row has {} cells, expected {size}", cell_types.len())).into());
        }

        builder.place_row(row, cell_types);
    }

    let leftover = lines.count();
    if leftover > 0 {
        warn!("ignoring {leftover} line(s) after the last row");
    }

    builder.build()
}
