use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use log::debug;
use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::cell::Cell;
use crate::coordinate::{Coord, Coordinate, Dimension};
use crate::difficulty::Difficulty;
use crate::direction::Direction;
use crate::error::{BoundsError, CapabilityError, LevelError, MoveError, ParseError};
use crate::parser;
use crate::trace::{self, RouteTracer, Trace};

/// A single player action.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub enum Move {
    /// Exchange two movable cells. The order of the pair does not matter.
    Swap(UnorderedPair<Coordinate>),
    /// Turn a rotatable cell.
    Rotate(Coordinate),
}

impl Move {
    /// Swap the cells at `first` and `second`.
    pub fn swap(first: Coordinate, second: Coordinate) -> Self {
        Self::Swap(UnorderedPair(first, second))
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Swap(UnorderedPair(first, second)) => f.debug_tuple("Swap").field(first).field(second).finish(),
            Self::Rotate(coordinate) => f.debug_tuple("Rotate").field(coordinate).finish(),
        }
    }
}

/// `a1:b2` for a swap, `c3` for a rotation.
impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Swap(UnorderedPair(first, second)) => write!(f, "{}:{}", first.notation(), second.notation()),
            Self::Rotate(coordinate) => write!(f, "{}", coordinate.notation()),
        }
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((first, second)) => Ok(Self::swap(first.parse()?, second.parse()?)),
            None => Ok(Self::Rotate(s.parse()?)),
        }
    }
}

/// A square board of cells with a start on the bottom row and a finish on the top row.
///
/// [`Level`]s come from [`load_level`](crate::load_level) or a [`LevelBuilder`](crate::LevelBuilder), both of which only hand out boards satisfying the rules of the game.
/// After that, [`swap`](Self::swap) and [`rotate`](Self::rotate) are the only ways to change the board, and each accepted call counts as one move.
#[derive(Clone, Debug)]
pub struct Level {
    size: Dimension,
    difficulty: Difficulty,
    grid: Array2<Cell>,
    start: Coordinate,
    finish: Coordinate,
    history: Vec<Move>,
}

impl Level {
    pub(crate) fn new(size: Dimension, difficulty: Difficulty, grid: Array2<Cell>, start: Coordinate, finish: Coordinate) -> Self {
        Self {
            size,
            difficulty,
            grid,
            start,
            finish,
            history: Vec::new(),
        }
    }

    /// Width and height of the board.
    pub fn size(&self) -> Coord {
        self.size.get()
    }

    /// Difficulty declared by the level definition.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Number of moves accepted so far. Rejected moves are not counted.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Coordinate of the start cell.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Coordinate of the finish cell.
    pub fn finish(&self) -> Coordinate {
        self.finish
    }

    /// Whether `coordinate` lies on the board.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row() < self.size() && coordinate.column() < self.size()
    }

    /// The cell at `coordinate`.
    pub fn cell(&self, coordinate: Coordinate) -> Result<&Cell, BoundsError> {
        self.grid.get(coordinate.as_index()).ok_or(BoundsError::OutOfBounds(coordinate))
    }

    fn cell_mut(&mut self, coordinate: Coordinate) -> Result<&mut Cell, BoundsError> {
        self.grid.get_mut(coordinate.as_index()).ok_or(BoundsError::OutOfBounds(coordinate))
    }

    /// Store `cell` at `coordinate`, which must be where the cell believes it is.
    pub(crate) fn set_cell(&mut self, coordinate: Coordinate, cell: Cell) -> Result<(), BoundsError> {
        let slot = self.cell_mut(coordinate)?;
        if cell.position() != coordinate {
            return Err(BoundsError::InvalidCell(coordinate));
        }

        *slot = cell;
        Ok(())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter()
    }

    /// Exchange the movable cells at `first` and `second`.
    ///
    /// Both cells are checked before either is touched, so on failure the board and the move count are unchanged.
    /// Swapping a cell with itself is accepted and counts as a move.
    pub fn swap(&mut self, first: Coordinate, second: Coordinate) -> Result<(), MoveError> {
        let mut first_cell = *self.cell(first)?;
        let mut second_cell = *self.cell(second)?;

        for (coordinate, cell) in [(first, &first_cell), (second, &second_cell)] {
            if !cell.is_movable() {
                return Err(CapabilityError::NotMovable(coordinate).into());
            }
        }

        first_cell.move_to(second)?;
        second_cell.move_to(first)?;
        self.set_cell(first, second_cell)?;
        self.set_cell(second, first_cell)?;

        self.history.push(Move::swap(first, second));
        debug!("swapped {} and {}, {} move(s) made", first.notation(), second.notation(), self.move_count());
        Ok(())
    }

    /// Turn the rotatable cell at `coordinate` to its next orientation.
    pub fn rotate(&mut self, coordinate: Coordinate) -> Result<(), MoveError> {
        let cell = self.cell_mut(coordinate)?;
        cell.rotate()?;
        let cell_type = cell.cell_type();

        self.history.push(Move::Rotate(coordinate));
        debug!("rotated {} to {:?}, {} move(s) made", coordinate.notation(), cell_type, self.move_count());
        Ok(())
    }

    /// Perform `mv` with [`swap`](Self::swap) or [`rotate`](Self::rotate).
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        match mv {
            Move::Swap(UnorderedPair(first, second)) => self.swap(first, second),
            Move::Rotate(coordinate) => self.rotate(coordinate),
        }
    }

    /// Pairs of neighboring cells whose tiles open toward each other, labelled with the direction from the lower indexed cell.
    pub fn passable_edges(&self) -> UnGraphMap<Coordinate, Direction> {
        trace::passable_edges(self)
    }

    /// Follow the road from the start as far as it goes.
    pub fn trace(&self) -> Trace {
        RouteTracer::from(self).trace()
    }

    /// Whether the road currently leads from the start all the way into the finish.
    pub fn is_solved(&self) -> bool {
        self.trace().is_solved()
    }

    /// The current arrangement in the level definition format accepted by [`load_level`](crate::load_level).
    pub fn definition(&self) -> String {
        let mut out = String::with_capacity((self.size() + 1) * (self.size() + 2) + 8);
        out.push_str(&format!("{}\n{}\n", self.size(), self.difficulty));

        for row in self.grid.rows() {
            out.extend(row.iter().map(|cell| cell.cell_type().symbol()));
            out.push('\n');
        }

        out
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::load_level(s)
    }
}

/// Column numbers across the top (last digit only), then one line per row: the row label, a bar and the glyph of each cell.
/// Labels are right aligned once the board is taller than 26 rows.
impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let width = Coordinate::row_label(self.size() - 1).len();
        writeln!(f, "{:width$} {}", "", (1..=self.size()).map(|column| column % 10).join(""))?;

        for (row, cells) in self.grid.rows().into_iter().enumerate() {
            writeln!(f, "{:>width$}|{}", Coordinate::row_label(row), cells.iter().join(""))?;
        }

        Ok(())
    }
}
