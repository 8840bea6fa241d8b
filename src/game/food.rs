use super::grid::{Cell, Grid};
use super::snake::Snake;
use super::{Canvas, Sprite};
use crate::consts;
use rand::{seq::IteratorRandom, Rng};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Food {
    pub(super) cell: Cell,
}

impl Food {
    /// Place food on a random cell of `grid` not occupied by `snake`, each
    /// free cell being equally likely.  Returns `None` if the snake fills the
    /// whole grid.
    pub(super) fn relocate<R: Rng>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Food> {
        Food::free_cell(rng, grid, snake).map(|cell| Food { cell })
    }

    fn free_cell<R: Rng>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Cell> {
        // Random probes first; enumerate the free cells only once the probes
        // keep landing on the snake.
        for _ in 0..consts::MAX_FOOD_SAMPLES {
            let cell = Cell::new(
                rng.random_range(0..grid.count()),
                rng.random_range(0..grid.count()),
            );
            if !snake.contains(cell) {
                return Some(cell);
            }
        }
        grid.cells().filter(|&c| !snake.contains(c)).choose(rng)
    }
}

impl Sprite for Food {
    fn paint(&self, canvas: &mut Canvas<'_>) {
        canvas.paint(self.cell, consts::FOOD_COLOR);
    }
}
