use thiserror::Error;

/// Failures while setting up a run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidGrid { width: i16, height: i16 },

    #[error("grid is {width} cells wide, the spawning snake needs at least {min_width}")]
    GridTooSmall { width: i16, min_width: i16 },

    #[error(transparent)]
    BoardFull(#[from] BoardFull),
}

/// No free cell is left for the apple: the snake fills the grid.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no free cell left to place the apple")]
pub struct BoardFull;
