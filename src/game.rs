use crate::apple::Apple;
use crate::error::{BoardFull, GameError};
use crate::grid::{Cell, Grid};
use crate::snake::{Collision, Direction, Snake, SPAWN_LENGTH};

use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;

/// Narrowest grid the spawning snake fits on, with one cell left for the apple.
pub const MIN_GRID_WIDTH: i16 = SPAWN_LENGTH as i16 + 1;

/// Rejects grids a run cannot start on.
pub fn check_grid(grid: &Grid) -> Result<(), GameError> {
    if grid.width() < MIN_GRID_WIDTH {
        return Err(GameError::GridTooSmall { width: grid.width(), min_width: MIN_GRID_WIDTH });
    }
    Ok(())
}

/// What one tick did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// `old_tail` is `None` when the snake ate the apple and grew.
    Moved { new_head: Cell, old_head: Cell, old_tail: Option<Cell> },
    Crashed(Collision),
    /// The snake ate the last apple that could ever be placed.
    BoardFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Crashed(Collision),
    Won,
}

/// One run: a snake and an apple on a grid, advanced a tick at a time.
pub struct Game<R = ThreadRng> {
    grid: Grid,
    snake: Snake,
    apple: Apple,
    status: Status,
    ticks: u64,
    rng: R,
}

impl Game<ThreadRng> {
    pub fn new(grid: Grid) -> Result<Self, GameError> {
        Game::with_rng(grid, rand::thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(grid: Grid, mut rng: R) -> Result<Self, GameError> {
        check_grid(&grid)?;

        let snake = Snake::spawn(grid);
        let apple = Apple::place(&grid, snake.body(), &mut rng)?;
        Ok(Game::from_parts(grid, snake, apple, rng))
    }

    pub fn from_parts(grid: Grid, snake: Snake, apple: Apple, rng: R) -> Self {
        Game { grid, snake, apple, status: Status::Running, ticks: 0, rng }
    }

    /// Advances the run by one tick.
    ///
    /// Collisions are checked right after the snake moves and before the apple,
    /// so a head that lands on the apple while hitting a wall or the body ends
    /// the run without growing; the tail is still dropped. Once the run is
    /// over, further ticks change nothing and keep reporting how it ended.
    pub fn tick(&mut self, turn: Option<Direction>) -> TickResult {
        match self.status {
            Status::Crashed(collision) => return TickResult::Crashed(collision),
            Status::Won => return TickResult::BoardFull,
            Status::Running => {}
        }

        if let Some(direction) = turn {
            self.snake.set_pending_direction(direction);
        }

        let old_head = self.snake.head();
        self.snake.advance();
        self.ticks += 1;
        let new_head = self.snake.head();

        if let Some(collision) = self.snake.collision() {
            self.snake.trim_tail();
            info!("Run ended by {:?} at {:?} after {} ticks, score {}", collision, new_head, self.ticks, self.score());
            self.status = Status::Crashed(collision);
            return TickResult::Crashed(collision);
        }

        if self.snake.check_apple_collision(&self.apple) {
            debug!("Apple eaten at {:?}, length now {}", new_head, self.snake.len());

            if let Err(BoardFull) = self.apple.relocate(&self.grid, self.snake.body(), &mut self.rng) {
                info!("Board full after {} ticks, score {}", self.ticks, self.score());
                self.status = Status::Won;
                return TickResult::BoardFull;
            }
            return TickResult::Moved { new_head, old_head, old_tail: None };
        }

        let old_tail = self.snake.trim_tail();
        TickResult::Moved { new_head, old_head, old_tail }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != Status::Running
    }

    pub fn score(&self) -> usize {
        self.snake.score()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
