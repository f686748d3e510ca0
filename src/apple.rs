use crate::error::BoardFull;
use crate::grid::{Cell, Grid};

use rand::seq::IteratorRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    position: Cell,
}

impl Apple {
    pub fn at(position: Cell) -> Self {
        Apple { position }
    }

    /// Drops an apple on a random grid cell that `occupied` does not cover.
    pub fn place<R: Rng + ?Sized>(grid: &Grid, occupied: &[Cell], rng: &mut R) -> Result<Self, BoardFull> {
        free_cell(grid, occupied, rng).map(Apple::at)
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the apple to a random free cell. Leaves it in place and reports
    /// `BoardFull` when every cell is occupied.
    pub fn relocate<R: Rng + ?Sized>(&mut self, grid: &Grid, occupied: &[Cell], rng: &mut R) -> Result<(), BoardFull> {
        self.position = free_cell(grid, occupied, rng)?;
        Ok(())
    }
}

fn free_cell<R: Rng + ?Sized>(grid: &Grid, occupied: &[Cell], rng: &mut R) -> Result<Cell, BoardFull> {
    grid.cells()
        .filter(|cell| !occupied.contains(cell))
        .choose(rng)
        .ok_or(BoardFull)
}
