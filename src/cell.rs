use std::fmt::{Display, Formatter};

use crate::cell_type::{CellKind, CellType};
use crate::coordinate::Coordinate;
use crate::error::CapabilityError;

/// A tile together with where it sits on the board.
///
/// The [`CellKind`] is fixed when the cell is created and decides which of [`move_to`](Self::move_to)
/// and [`rotate`](Self::rotate) the cell accepts.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Cell {
    kind: CellKind,
    cell_type: CellType,
    position: Coordinate,
}

impl Cell {
    /// A cell of type `cell_type` at `position`, with the capability that type grants.
    pub fn new(position: Coordinate, cell_type: CellType) -> Self {
        Self {
            kind: cell_type.kind(),
            cell_type,
            position,
        }
    }

    /// What the player may do with this cell.
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// The tile currently in this cell.
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// Where this cell sits on the board.
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Whether [`move_to`](Self::move_to) is allowed.
    pub fn is_movable(&self) -> bool {
        self.kind == CellKind::Movable
    }

    /// Whether [`rotate`](Self::rotate) is allowed.
    pub fn is_rotatable(&self) -> bool {
        self.kind == CellKind::Rotatable
    }

    /// Relocate a movable cell. Its type is untouched.
    pub fn move_to(&mut self, destination: Coordinate) -> Result<(), CapabilityError> {
        if !self.is_movable() {
            return Err(CapabilityError::NotMovable(self.position));
        }

        self.position = destination;
        Ok(())
    }

    /// Turn a rotatable cell to its next orientation. Its position is untouched.
    pub fn rotate(&mut self) -> Result<(), CapabilityError> {
        if !self.is_rotatable() {
            return Err(CapabilityError::NotRotatable(self.position));
        }

        self.cell_type = self.cell_type.next()?;
        Ok(())
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cell_type.glyph())
    }
}
