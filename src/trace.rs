//! Following the road from the start cell.
//!
//! The board is viewed as an undirected graph whose vertices are coordinates.
//! Two neighboring cells share an edge only when *both* tiles open toward each other; a tile pointing at a neighbor that
//! does not point back is a dead end, not a passage.
//!
//! Every tile opens on at most two sides, so no vertex has more than two edges and the road through any cell is unambiguous:
//! the walk leaves each tile through the one open side it did not enter by.
//! A visited set bounds the walk by the number of cells, whatever the arrangement.

use std::collections::HashSet;

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;

use crate::cell::Cell;
use crate::cell_type::CellType;
use crate::coordinate::Coordinate;
use crate::direction::Direction;
use crate::level::Level;

/// Where and why a trace stopped.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TraceOutcome {
    /// The road enters the finish from below.
    Reached,
    /// The tile at this coordinate leads off the edge of the board.
    LeftBoard(Coordinate),
    /// The road runs into terrain at this coordinate.
    Blocked(Coordinate),
    /// The tile at this coordinate does not open back toward the road.
    DeadEnd(Coordinate),
    /// The tile at this coordinate has no single way onward.
    Impassable(Coordinate),
    /// The road returns to a cell it already passed through.
    Cycle(Coordinate),
}

/// The result of following the road: every cell passed through, start first, and how it ended.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Trace {
    path: Vec<Coordinate>,
    outcome: TraceOutcome,
}

impl Trace {
    /// Cells the road passes through, start first.
    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    /// Why the walk stopped.
    pub fn outcome(&self) -> TraceOutcome {
        self.outcome
    }

    /// Whether the road reached the finish.
    pub fn is_solved(&self) -> bool {
        self.outcome == TraceOutcome::Reached
    }
}

/// `from` opens toward `to` in `direction` and `to` opens back.
fn agrees(from: &Cell, to: &Cell, direction: Direction) -> bool {
    from.cell_type().connections().contains(direction)
        && to.cell_type().connections().contains(direction.opposite())
}

/// Build the graph of mutually agreeing neighbors on `level`.
///
/// Every coordinate is a vertex, connected or not.
/// Edges are labelled with the direction from the lower indexed endpoint; see [`Direction::FORWARD_VARIANTS`].
pub(crate) fn passable_edges(level: &Level) -> UnGraphMap<Coordinate, Direction> {
    let mut graph = UnGraphMap::with_capacity(
        level.size() * level.size(),
        // each cell has at most two open sides, and every edge uses two of them
        level.size() * level.size(),
    );

    for cell in level.cells() {
        let here = cell.position();
        graph.add_node(here);

        for direction in Direction::FORWARD_VARIANTS {
            let there = direction.attempt_from(here);
            if let Ok(neighbor) = level.cell(there) {
                if agrees(cell, neighbor, *direction) {
                    graph.add_edge(here, there, *direction);
                }
            }
        }
    }

    graph
}

/// Walks a [`Level`] from its start along mutually agreeing connections.
///
/// Use [`Self::trace`] to run the walk; [`Level::trace`] and [`Level::is_solved`] are shorthand for this.
pub struct RouteTracer<'a> {
    level: &'a Level,
    graph: UnGraphMap<Coordinate, Direction>,
}

impl<'a> From<&'a Level> for RouteTracer<'a> {
    fn from(level: &'a Level) -> Self {
        Self {
            level,
            graph: passable_edges(level),
        }
    }
}

impl RouteTracer<'_> {
    fn stop(path: Vec<Coordinate>, outcome: TraceOutcome) -> Trace {
        Trace { path, outcome }
    }

    /// Follow the road from the start.
    ///
    /// The walk heads out of the start through its single open side. At each step it looks at the cell ahead and stops if
    /// that cell is off the board, is terrain, does not open back, or was already visited. Reaching the finish ends the walk
    /// successfully; since the finish only opens downward, it can only be entered from below.
    /// Otherwise the walk turns toward the one open side of the new cell other than the side it came in through.
    pub fn trace(&self) -> Trace {
        let start = self.level.start();
        let mut path = vec![start];
        let mut visited = HashSet::from([start]);

        let mut here = start;
        let mut heading = match self.level.cell(start).map(|cell| cell.cell_type().connections().iter().exactly_one()) {
            Ok(Ok(direction)) => direction,
            _ => return Self::stop(path, TraceOutcome::Impassable(start)),
        };

        loop {
            let there = heading.attempt_from(here);
            let next = match self.level.cell(there) {
                Ok(cell) => cell,
                Err(_) => return Self::stop(path, TraceOutcome::LeftBoard(here)),
            };

            if next.cell_type().is_terrain() {
                return Self::stop(path, TraceOutcome::Blocked(there));
            }
            if !self.graph.contains_edge(here, there) {
                return Self::stop(path, TraceOutcome::DeadEnd(there));
            }
            if !visited.insert(there) {
                return Self::stop(path, TraceOutcome::Cycle(there));
            }
            path.push(there);

            if next.cell_type() == CellType::Finish {
                return Self::stop(path, TraceOutcome::Reached);
            }

            let arrived_through = heading.opposite();
            heading = match next.cell_type().connections().without(arrived_through).iter().exactly_one() {
                Ok(direction) => direction,
                Err(_) => return Self::stop(path, TraceOutcome::Impassable(there)),
            };
            here = there;
        }
    }
}
