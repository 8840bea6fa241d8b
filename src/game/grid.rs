use super::direction::Direction;
use crate::consts;
use std::ops::Add;

/// A position on the playing field, measured in cells from the top-left
/// corner.  Coordinates are signed so that a head that has just left the
/// field can still be represented.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(super) struct Cell {
    pub(super) x: i32,
    pub(super) y: i32,
}

impl Cell {
    pub(super) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Cell {
        Cell { x, y }
    }
}

impl Add<Direction> for Cell {
    type Output = Cell;

    fn add(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The bounds of a square playing field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Grid {
    count: i32,
}

impl Grid {
    pub(super) const fn new(count: i32) -> Grid {
        Grid { count }
    }

    /// Number of cells along each side
    pub(super) fn count(self) -> i32 {
        self.count
    }

    pub(super) fn contains(self, cell: Cell) -> bool {
        (0..self.count).contains(&cell.x) && (0..self.count).contains(&cell.y)
    }

    /// Iterate over every cell, row by row
    pub(super) fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.count).flat_map(move |y| (0..self.count).map(move |x| Cell { x, y }))
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new(consts::GRID_COUNT)
    }
}
