use super::direction::Direction;
use super::grid::{Cell, Grid};
use super::{Canvas, Sprite};
use crate::consts;
use std::collections::VecDeque;

/// The player's snake
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Cell,

    /// The positions of the rest of the snake's body, starting with the
    /// segment just behind the head
    pub(super) body: VecDeque<Cell>,

    /// The direction in which the snake moved on its last advance
    pub(super) direction: Direction,

    /// The direction in which the snake will move on its next advance
    pub(super) next_direction: Direction,

    /// Whether the next advance should leave the tail in place
    pub(super) growing: bool,
}

impl Snake {
    /// Create a new snake occupying
    /// [`INITIAL_SNAKE`][consts::INITIAL_SNAKE] and facing east
    pub(super) fn new() -> Snake {
        let [head, body @ ..] = consts::INITIAL_SNAKE;
        Snake {
            head: Cell::from(head),
            body: body.into_iter().map(Cell::from).collect(),
            direction: Direction::East,
            next_direction: Direction::East,
            growing: false,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Cell {
        self.head
    }

    /// Iterate over every cell the snake occupies, head first
    #[cfg(test)]
    pub(super) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    #[cfg(test)]
    pub(super) fn len(&self) -> usize {
        self.body.len() + 1
    }

    pub(super) fn contains(&self, cell: Cell) -> bool {
        self.head == cell || self.body.contains(&cell)
    }

    /// Turn the snake to face `direction` on its next advance.  Requests to
    /// reverse onto the snake's own body are ignored.
    pub(super) fn turn(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.next_direction = direction;
        }
    }

    /// Move the snake forwards one cell.  The head may end up outside the
    /// grid; use [`Snake::hit_edge()`] to check.
    pub(super) fn advance(&mut self) {
        self.direction = self.next_direction;
        self.body.push_front(self.head);
        self.head = self.head + self.direction;
        if self.growing {
            self.growing = false;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Make the next advance lengthen the snake by one cell
    pub(super) fn grow(&mut self) {
        self.growing = true;
    }

    pub(super) fn hit_edge(&self, grid: Grid) -> bool {
        !grid.contains(self.head)
    }

    pub(super) fn hit_self(&self) -> bool {
        self.body.contains(&self.head)
    }
}

impl Sprite for Snake {
    fn paint(&self, canvas: &mut Canvas<'_>) {
        for &cell in &self.body {
            canvas.paint(cell, consts::SNAKE_COLOR);
        }
        canvas.paint(self.head, consts::SNAKE_HEAD_COLOR);
    }
}
