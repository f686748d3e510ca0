use crate::error::GameError;

/// A grid coordinate `(x, y)`. Heads may step outside the grid, so it is signed.
pub type Cell = (i16, i16);

/// The bounded playing field, `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i16,
    height: i16,
}

impl Grid {
    pub fn new(width: i16, height: i16) -> Result<Self, GameError> {
        if width <= 0 || height <= 0 {
            return Err(GameError::InvalidGrid { width, height });
        }
        Ok(Grid { width, height })
    }

    pub fn width(&self) -> i16 {
        self.width
    }

    pub fn height(&self) -> i16 {
        self.height
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.0) && (0..self.height).contains(&cell.1)
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Every cell of the grid, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    pub fn center(&self) -> Cell {
        (self.width / 2, self.height / 2)
    }
}
