use crate::apple::Apple;
use crate::grid::{Cell, Grid};
use Direction::*;

/// Shortest snake that can spawn without folding onto itself.
pub const SPAWN_LENGTH: usize = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// `(dx, dy)` for one step; y grows downwards.
    pub fn delta(self) -> (i16, i16) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn step(self, from: Cell) -> Cell {
        let (dx, dy) = self.delta();
        (from.0 + dx, from.1 + dy)
    }

    /// Like `step`, but `None` where the coordinate would overflow.
    pub fn checked_step(self, from: Cell) -> Option<Cell> {
        let (dx, dy) = self.delta();
        Some((from.0.checked_add(dx)?, from.1.checked_add(dy)?))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfCollision,
}

#[derive(Debug, Clone)]
pub struct Snake {
    grid: Grid,
    /// Head first.
    body: Vec<Cell>,
    direction: Direction,
    pending: Option<Direction>,
    spawn_len: usize,
}

impl Snake {
    /// The fixed spawn: centered, heading right, tail trailing to the left.
    pub fn spawn(grid: Grid) -> Self {
        Snake::new(grid, grid.center(), SPAWN_LENGTH, Right)
    }

    /// `length` is raised to the spawn length and capped at the grid's cell
    /// count. The body stops short where a coordinate would overflow.
    pub fn new(grid: Grid, head: Cell, length: usize, direction: Direction) -> Self {
        let length = length.max(SPAWN_LENGTH).min(grid.cell_count().max(SPAWN_LENGTH));
        let back = direction.opposite();

        let mut body = Vec::with_capacity(length + 1);
        body.push(head);
        while body.len() < length {
            match back.checked_step(body[body.len() - 1]) {
                Some(cell) => body.push(cell),
                None => break,
            }
        }

        let spawn_len = body.len();
        Snake { grid, body, direction, pending: None, spawn_len }
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> usize {
        self.body.len() - self.spawn_len
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Latches `direction` for the next `advance`, unless it would reverse the
    /// committed direction. The latest accepted call wins.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.pending = Some(direction);
    }

    /// Commits the pending direction and pushes a new head one cell ahead.
    /// The tail stays; the caller trims it unless the snake grows.
    pub fn advance(&mut self) {
        if let Some(direction) = self.pending.take() {
            self.direction = direction;
        }

        let new_head = self.direction.step(self.head());
        self.body.insert(0, new_head);
    }

    /// Drops the last cell, returning it. Never shrinks below the spawn length.
    pub fn trim_tail(&mut self) -> Option<Cell> {
        if self.body.len() <= self.spawn_len {
            return None;
        }
        self.body.pop()
    }

    pub fn check_wall_collision(&self) -> bool {
        !self.grid.contains(self.head())
    }

    pub fn check_self_collision(&self) -> bool {
        self.body[1..].contains(&self.head())
    }

    pub fn check_collisions(&self) -> bool {
        self.collision().is_some()
    }

    pub fn collision(&self) -> Option<Collision> {
        if self.check_wall_collision() {
            Some(Collision::Wall)
        } else if self.check_self_collision() {
            Some(Collision::SelfCollision)
        } else {
            None
        }
    }

    pub fn check_apple_collision(&self, apple: &Apple) -> bool {
        self.head() == apple.position()
    }

    pub fn head_char(&self) -> char {
        match self.direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(10, 10).unwrap()
    }

    /// One loop step without an apple: advance, then trim.
    fn step(snake: &mut Snake, direction: Option<Direction>) {
        if let Some(d) = direction {
            snake.set_pending_direction(d);
        }
        snake.advance();
        snake.trim_tail();
    }

    #[test]
    fn opposites_pair_up() {
        assert_eq!(Up.opposite(), Down);
        assert_eq!(Down.opposite(), Up);
        assert_eq!(Left.opposite(), Right);
        assert_eq!(Right.opposite(), Left);
    }

    #[test]
    fn spawn_is_centered_heading_right() {
        let snake = Snake::spawn(grid());

        assert_eq!(snake.body(), &[(5, 5), (4, 5), (3, 5)]);
        assert_eq!(snake.direction(), Right);
        assert_eq!(snake.score(), 0);
    }

    #[test]
    fn new_never_starts_shorter_than_spawn_length() {
        let snake = Snake::new(grid(), (5, 5), 1, Up);

        assert_eq!(snake.body(), &[(5, 5), (5, 6), (5, 7)]);
    }

    #[test]
    fn new_caps_length_at_the_grid_size() {
        let snake = Snake::new(grid(), (0, 0), 40000, Right);

        assert_eq!(snake.len(), 100);
        assert_eq!(snake.score(), 0);
        assert_eq!(*snake.body().last().unwrap(), (-99, 0));
    }

    #[test]
    fn new_stops_before_coordinate_overflow() {
        let snake = Snake::new(grid(), (i16::MIN + 1, 0), 5, Right);

        assert_eq!(snake.body(), &[(i16::MIN + 1, 0), (i16::MIN, 0)]);
        assert_eq!(Left.checked_step((i16::MIN, 0)), None);
        assert_eq!(Right.checked_step((0, 0)), Some((1, 0)));
    }

    #[test]
    fn reversal_is_ignored() {
        for d in [Up, Down, Left, Right] {
            let mut snake = Snake::new(grid(), (5, 5), 3, d);
            snake.set_pending_direction(d.opposite());
            snake.advance();

            assert_eq!(snake.direction(), d);
            assert_eq!(snake.head(), d.step((5, 5)));
        }
    }

    #[test]
    fn reversal_is_checked_against_committed_direction() {
        let mut snake = Snake::spawn(grid());

        // Up is accepted, but Left is still a reversal of the committed Right.
        snake.set_pending_direction(Up);
        snake.set_pending_direction(Left);
        snake.advance();

        assert_eq!(snake.direction(), Up);
        assert_eq!(snake.head(), (5, 4));
    }

    #[test]
    fn latest_pending_direction_wins() {
        let mut snake = Snake::spawn(grid());
        snake.set_pending_direction(Up);
        snake.set_pending_direction(Down);
        snake.advance();

        assert_eq!(snake.direction(), Down);
        assert_eq!(snake.head(), (5, 6));
    }

    #[test]
    fn advance_then_trim_keeps_length() {
        let mut snake = Snake::spawn(grid());
        snake.advance();
        assert_eq!(snake.len(), 4);

        assert_eq!(snake.trim_tail(), Some((3, 5)));
        assert_eq!(snake.body(), &[(6, 5), (5, 5), (4, 5)]);
    }

    #[test]
    fn advance_without_trim_grows() {
        let mut snake = Snake::spawn(grid());
        snake.advance();
        snake.advance();
        snake.trim_tail();

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.score(), 1);
    }

    #[test]
    fn trim_never_goes_below_spawn_length() {
        let mut snake = Snake::spawn(grid());

        assert_eq!(snake.trim_tail(), None);
        assert_eq!(snake.len(), SPAWN_LENGTH);
    }

    #[test]
    fn wall_collision_on_every_side() {
        let cases = [((0, 5), Left), ((9, 5), Right), ((5, 0), Up), ((5, 9), Down)];

        for (head, direction) in cases {
            let mut snake = Snake::new(grid(), head, 3, direction);
            assert!(!snake.check_wall_collision());

            snake.advance();
            assert!(snake.check_wall_collision());
            assert_eq!(snake.collision(), Some(Collision::Wall));
        }
    }

    #[test]
    fn self_collision_when_turning_into_body() {
        let mut snake = Snake::new(grid(), (5, 5), 5, Right);

        step(&mut snake, Some(Down));
        step(&mut snake, Some(Left));
        assert!(!snake.check_collisions());

        snake.set_pending_direction(Up);
        snake.advance();

        assert_eq!(snake.head(), (4, 5));
        assert!(snake.check_self_collision());
        assert!(!snake.check_wall_collision());
        assert_eq!(snake.collision(), Some(Collision::SelfCollision));
    }

    #[test]
    fn apple_collision_only_on_head() {
        let snake = Snake::spawn(grid());

        assert!(snake.check_apple_collision(&Apple::at((5, 5))));
        assert!(!snake.check_apple_collision(&Apple::at((4, 5))));
    }

    #[test]
    fn head_char_follows_direction() {
        let mut snake = Snake::spawn(grid());
        assert_eq!(snake.head_char(), '>');

        snake.set_pending_direction(Down);
        snake.advance();
        assert_eq!(snake.head_char(), 'v');
    }
}
