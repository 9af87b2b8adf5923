use std::fmt::{Debug, Formatter};

use strum::{Display, VariantArray};

use crate::coordinate::Coordinate;

/// The four ways out of a square cell.
#[derive(Copy, Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward higher columns.
    Right,
    /// Toward higher rows.
    Down,
    /// Toward column 0.
    Left,
}

impl Direction {
    /// Directions which, stepping in row-major order, lead to a higher indexed cell.
    /// Every edge of the grid is reached exactly once by stepping forward from each cell.
    pub const FORWARD_VARIANTS: &'static [Self] = &[Self::Right, Self::Down];

    /// `(d_row, d_column)`
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
        }
    }

    /// The direction pointing back.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Take one step from `coordinate`. The result may lie outside the board; callers check bounds.
    pub fn attempt_from(&self, coordinate: Coordinate) -> Coordinate {
        coordinate.offset_by(self.delta())
    }

    /// The direction leading from `a` to an orthogonally adjacent `b`, if there is one.
    pub fn direction_to(a: Coordinate, b: Coordinate) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// An immutable set of [`Direction`]s, one bit each.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct Connections(u8);

impl Connections {
    /// No open sides.
    pub const NONE: Self = Self(0);

    /// The set holding exactly `directions`.
    pub const fn of(directions: &[Direction]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < directions.len() {
            bits |= directions[i].bit();
            i += 1;
        }

        Self(bits)
    }

    /// Whether `direction` is in the set.
    pub const fn contains(&self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// This set with `direction` removed.
    pub const fn without(&self, direction: Direction) -> Self {
        Self(self.0 & !direction.bit())
    }

    /// Number of directions in the set.
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members of the set in [`Direction`] declaration order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::VARIANTS.iter().copied().filter(move |dir| self.contains(*dir))
    }
}

impl Debug for Connections {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
