use strum::VariantArray;

use crate::direction::{Connections, Direction};
use crate::error::{CapabilityError, ParseError};

/// What a player may do with a cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CellKind {
    /// Terrain and the two endpoints; never changes.
    Fixed,
    /// A road tile that can trade places with another movable tile.
    Movable,
    /// A road tile that turns in place.
    Rotatable,
}

/// Every tile that can appear on a board.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
pub enum CellType {
    /// Where the road begins, on the bottom row.
    Start,
    /// Where the road must end, on the top row.
    Finish,
    /// Impassable terrain.
    Mountains,
    /// Impassable water.
    River,
    /// Straight road, top to bottom.
    Vertical,
    /// Straight road, left to right.
    Horizontal,
    /// Corner opening right and down.
    BottomRight,
    /// Corner opening down and left.
    BottomLeft,
    /// Corner opening up and right.
    TopRight,
    /// Corner opening up and left.
    TopLeft,
    /// Empty land.
    Free,
    /// Turnable straight road, currently top to bottom.
    RotatableVertical,
    /// Turnable straight road, currently left to right.
    RotatableHorizontal,
}

impl CellType {
    /// The character standing for this tile in a level definition.
    pub fn symbol(&self) -> char {
        match self {
            Self::Start => 'S',
            Self::Finish => 'F',
            Self::Mountains => 'M',
            Self::River => '~',
            Self::Vertical => 'V',
            Self::Horizontal => 'H',
            Self::BottomRight => 'r',
            Self::BottomLeft => 'l',
            Self::TopRight => 'R',
            Self::TopLeft => 'L',
            Self::Free => '\u{00b7}',
            Self::RotatableVertical => 'G',
            Self::RotatableHorizontal => 'g',
        }
    }

    /// The character drawn for this tile when the board is rendered.
    pub fn glyph(&self) -> char {
        match self {
            Self::Start => '^',
            Self::Finish => 'v',
            Self::Mountains => 'M',
            Self::River => '~',
            Self::Vertical => '\u{2551}',
            Self::Horizontal => '\u{2550}',
            Self::BottomRight => '\u{2554}',
            Self::BottomLeft => '\u{2557}',
            Self::TopRight => '\u{255a}',
            Self::TopLeft => '\u{255d}',
            Self::Free => '\u{00b7}',
            Self::RotatableVertical => '\u{2503}',
            Self::RotatableHorizontal => '\u{2501}',
        }
    }

    /// Sides of the tile a road leaves through.
    ///
    /// The endpoints expose a single side: [`Start`](Self::Start) leads up and [`Finish`](Self::Finish) is entered from below.
    /// Terrain exposes nothing.
    pub fn connections(&self) -> Connections {
        use Direction::*;

        match self {
            Self::Start => Connections::of(&[Up]),
            Self::Finish => Connections::of(&[Down]),
            Self::Mountains | Self::River | Self::Free => Connections::NONE,
            Self::Vertical | Self::RotatableVertical => Connections::of(&[Up, Down]),
            Self::Horizontal | Self::RotatableHorizontal => Connections::of(&[Left, Right]),
            Self::BottomRight => Connections::of(&[Right, Down]),
            Self::BottomLeft => Connections::of(&[Down, Left]),
            Self::TopRight => Connections::of(&[Up, Right]),
            Self::TopLeft => Connections::of(&[Up, Left]),
        }
    }

    /// What the player may do with a tile of this type.
    pub fn kind(&self) -> CellKind {
        match self {
            Self::Vertical | Self::Horizontal
            | Self::BottomRight | Self::BottomLeft | Self::TopRight | Self::TopLeft => CellKind::Movable,
            Self::RotatableVertical | Self::RotatableHorizontal => CellKind::Rotatable,
            Self::Start | Self::Finish | Self::Mountains | Self::River | Self::Free => CellKind::Fixed,
        }
    }

    /// Mountains, rivers and free land: never part of a road.
    pub fn is_terrain(&self) -> bool {
        matches!(self, Self::Mountains | Self::River | Self::Free)
    }

    /// The shape this tile takes after a quarter turn.
    ///
    /// Straight pieces alternate between vertical and horizontal; corners turn clockwise through all four orientations.
    pub fn next(&self) -> Result<Self, CapabilityError> {
        match self {
            Self::Vertical => Ok(Self::Horizontal),
            Self::Horizontal => Ok(Self::Vertical),
            Self::BottomRight => Ok(Self::BottomLeft),
            Self::BottomLeft => Ok(Self::TopLeft),
            Self::TopLeft => Ok(Self::TopRight),
            Self::TopRight => Ok(Self::BottomRight),
            Self::RotatableVertical => Ok(Self::RotatableHorizontal),
            Self::RotatableHorizontal => Ok(Self::RotatableVertical),
            Self::Start | Self::Finish | Self::Mountains | Self::River | Self::Free => {
                Err(CapabilityError::UnsupportedRotation(*self))
            }
        }
    }

    /// The tile written as `symbol` in a level definition.
    pub fn from_symbol(symbol: char) -> Result<Self, ParseError> {
        Self::VARIANTS.iter()
            .find(|cell_type| cell_type.symbol() == symbol)
            .copied()
            .ok_or(ParseError::UnknownSymbol(symbol))
    }
}
