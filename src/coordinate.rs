use std::fmt::{Display, Formatter};
use std::num::NonZero;
use std::str::FromStr;

use ndarray::Ix;

use crate::error::ParseError;

/// One axis of a board position.
pub type Coord = usize;
/// The side length of a board.
pub type Dimension = NonZero<Coord>;

/// A `(row, column)` position on a board. The top left corner is `Coordinate(0, 0)`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Coordinate(pub Coord, pub Coord);

impl Coordinate {
    /// Row, counted from the top.
    #[inline]
    pub fn row(&self) -> Coord {
        self.0
    }

    /// Column, counted from the left.
    #[inline]
    pub fn column(&self) -> Coord {
        self.1
    }

    /// The label of this row on a rendered board: `a` for the top row, then `b`, `c`... `z`, `aa`, `ab`...
    pub fn row_label(row: Coord) -> String {
        let mut label = Vec::new();
        let mut remaining = row as u128 + 1;
        while remaining > 0 {
            remaining -= 1;
            label.push((b'a' + (remaining % 26) as u8) as char);
            remaining /= 26;
        }

        label.into_iter().rev().collect()
    }

    /// This coordinate as a row label and a 1-based column number, e.g. `Coordinate(2, 0)` is `c1`.
    pub fn notation(&self) -> String {
        format!("{}{}", Self::row_label(self.0), self.1 + 1)
    }

    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.0, self.1)
    }

    /// Shift by `(d_row, d_column)`. Stepping off the top or left edge wraps around to a huge index,
    /// which every bounds check then rejects.
    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}

impl From<(Ix, Ix)> for Coordinate {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

/// Parses the notation used by the rendered board: the lowercase row label followed by a 1-based column number, e.g. `a1` or `c12`.
impl FromStr for Coordinate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidCoordinate(s.to_string());

        let s = s.trim();
        let split = s.find(|c: char| !c.is_ascii_lowercase()).unwrap_or(s.len());
        let (letters, digits) = s.split_at(split);
        if letters.is_empty() {
            return Err(invalid());
        }

        // labels count a..z, aa..zz, aaa.. with no zero digit
        let label = letters.bytes().try_fold(0 as Coord, |label, letter| {
            label.checked_mul(26)?.checked_add((letter - b'a') as Coord + 1)
        });
        let row = label.ok_or_else(invalid)? - 1;
        let column = digits.parse::<Coord>().map_err(|_| invalid())?;
        if column == 0 {
            return Err(invalid());
        }

        Ok(Self(row, column - 1))
    }
}
