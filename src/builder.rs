//! Constructing levels tile by tile.

use std::mem;

use itertools::Itertools;
use log::debug;
use ndarray::{Array2, AssignElem};

use crate::cell::Cell;
use crate::cell_type::{CellKind, CellType};
use crate::coordinate::{Coord, Coordinate, Dimension};
use crate::difficulty::Difficulty;
use crate::error::{BoundsError, LevelResult, ParseError, StructuralError};
use crate::level::Level;

/// Boards smaller than this cannot hold a start, a finish and a road between them.
pub const MINIMUM_BOARD_SIZE: Coord = 3;

/// A builder for square levels.
///
/// Every cell starts out as [`Free`](CellType::Free) land. Place tiles with [`place`](Self::place) or [`place_row`](Self::place_row),
/// then call [`build`](Self::build), which checks the rules every playable level must follow:
/// a single start on the bottom row, a single finish on the top row and at least one tile the player can move or rotate.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone, Debug)]
pub struct LevelBuilder {
    size: Dimension,
    difficulty: Difficulty,
    cells: Array2<CellType>,
    invalid_reasons: Vec<BoundsError>,
}

impl LevelBuilder {
    /// Construct a new [`Self`] for a `size` by `size` board.
    ///
    /// Fails with [`InvalidBoardSize`](ParseError::InvalidBoardSize) if `size` is below [`MINIMUM_BOARD_SIZE`]
    /// or the board would have more cells than can be allocated.
    pub fn with_size(size: Coord) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidBoardSize(i64::try_from(size).unwrap_or(i64::MAX));
        if size < MINIMUM_BOARD_SIZE {
            return Err(invalid());
        }
        size.checked_mul(size)
            .filter(|cells| *cells <= isize::MAX as usize / mem::size_of::<Cell>())
            .ok_or_else(invalid)?;
        let size = Dimension::new(size).ok_or_else(invalid)?;

        Ok(Self {
            size,
            difficulty: Default::default(),
            cells: Array2::from_elem((size.get(), size.get()), CellType::Free),
            invalid_reasons: Default::default(),
        })
    }

    /// Set the difficulty carried by the built level.
    pub fn difficulty(&mut self, difficulty: Difficulty) -> &mut Self {
        self.difficulty = difficulty;
        self
    }

    /// Put a tile of type `cell_type` at `coordinate`, replacing whatever was there.
    ///
    /// May cause the builder to enter an [`OutOfBounds`](BoundsError::OutOfBounds) invalid state if `coordinate` is off the board.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn place(&mut self, coordinate: Coordinate, cell_type: CellType) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        match self.cells.get_mut(coordinate.as_index()) {
            Some(ptr) => ptr.assign_elem(cell_type),
            None => self.invalid_reasons.push(BoundsError::OutOfBounds(coordinate)),
        }

        self
    }

    /// Shorthand for calling [`Self::place`] on consecutive columns of `row`, starting from the left edge.
    pub fn place_row(&mut self, row: Coord, cell_types: impl IntoIterator<Item = CellType>) -> &mut Self {
        for (column, cell_type) in cell_types.into_iter().enumerate() {
            self.place(Coordinate(row, column), cell_type);
        }

        self
    }

    /// Check the validity of this builder, ensuring nothing was placed off the board.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BoundsError>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BoundsError>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    fn positions_of(&self, wanted: CellType) -> Vec<Coordinate> {
        self.cells.indexed_iter()
            .filter(|(_, cell_type)| **cell_type == wanted)
            .map(|(index, _)| Coordinate::from(index))
            .collect_vec()
    }

    /// Find the start and finish, enforcing the rules on where they sit and that there is something to play with.
    fn check_structure(&self) -> Result<(Coordinate, Coordinate), StructuralError> {
        let bottom_row = self.size.get() - 1;
        let starts = self.positions_of(CellType::Start);
        let finishes = self.positions_of(CellType::Finish);

        if starts.len() > 1 {
            return Err(StructuralError::DuplicateStart);
        }
        if finishes.len() > 1 {
            return Err(StructuralError::DuplicateFinish);
        }

        let start = starts.into_iter()
            .find(|start| start.row() == bottom_row)
            .ok_or(StructuralError::NoStartCell)?;
        let finish = finishes.into_iter()
            .find(|finish| finish.row() == 0)
            .ok_or(StructuralError::NoFinishCell)?;

        if self.cells.iter().all(|cell_type| cell_type.kind() == CellKind::Fixed) {
            return Err(StructuralError::NoRoadCell);
        }

        Ok((start, finish))
    }

    /// Convert the state of this builder into a [`Level`] with no moves made.
    ///
    /// Placement errors are reported first, then the first broken rule in the order
    /// duplicate start, duplicate finish, missing start, missing finish, missing road.
    pub fn build(&self) -> LevelResult<Level> {
        if let Some(reason) = self.invalid_reasons.first() {
            return Err((*reason).into());
        }

        let (start, finish) = self.check_structure()?;

        let grid = Array2::from_shape_fn(self.cells.raw_dim(), |index| {
            Cell::new(Coordinate::from(index), self.cells[index])
        });

        debug!("built {size}x{size} {} level, start at {start}, finish at {finish}", self.difficulty, size = self.size);

        Ok(Level::new(self.size, self.difficulty, grid, start, finish))
    }
}
