use std::{thread::sleep, time::{Duration, Instant}};

use crate::clock::Clock;
use crate::game::{Game, Status, TickResult};
use crate::grid::{Cell, Grid};
use crate::input::{is_ctrl_c, AfterRun, TickInput};
use crate::snake::Direction;
use crate::speed::Speed;
use crate::term::{TermManager, CELL_COLS};

use anyhow::Result;
use crossterm::event::KeyCode;
use log::info;
use rand::Rng;

const SNAKE_BODY_CHAR: char = '█';
const APPLE_CHAR: char = 'O';
const DEAD_SNAKE_CHAR: char = 'X';

/// How long the game-over screen ignores keys, so a player still steering
/// does not skip it by accident.
const GAME_OVER_GRACE: Duration = Duration::from_millis(500);

/// Screen flow around the runs: intro, speed menu, the run itself and the
/// game-over screen.
pub struct SnakeGame {
    grid: Grid,
    paused: bool,
    term: TermManager,
}

impl SnakeGame {
    pub fn new(term: TermManager, grid: Grid) -> Self {
        SnakeGame { grid, paused: false, term }
    }

    pub fn initialize(&mut self) -> Result<()> {
        self.term.setup()?;
        self.term.clear()
    }

    pub fn shutdown(&mut self) -> Result<()> {
        self.term.restore()
    }

    /// Plays runs until the player quits. `speed` skips the first speed menu.
    pub fn run(&mut self, speed: Option<Speed>) -> Result<()> {
        if !self.show_intro()? {
            return Ok(());
        }

        let mut speed = match speed {
            Some(speed) => speed,
            None => match self.choose_speed()? {
                Some(speed) => speed,
                None => return Ok(()),
            },
        };

        loop {
            match self.play(speed)? {
                AfterRun::PlayAgain => {}
                AfterRun::ChangeSpeed => match self.choose_speed()? {
                    Some(new_speed) => speed = new_speed,
                    None => return Ok(()),
                },
                AfterRun::Quit => return Ok(()),
            }
        }
    }

    /// Returns false if the player quit instead of starting.
    fn show_intro(&mut self) -> Result<bool> {
        let lines = &[
            "Snake!",
            "",
            "Arrow keys or WASD to move",
            "Esc to pause",
            "CTRL+C to quit",
            "",
            "Press any key to begin"
        ];

        self.term.show_message(lines)?;
        let key = self.term.read_key_blocking()?;
        self.term.hide_message()?;

        Ok(!is_ctrl_c(&key))
    }

    fn choose_speed(&mut self) -> Result<Option<Speed>> {
        let entries = Speed::menu_lines();
        let mut lines = vec!["Menu:", ""];
        lines.extend(entries.iter().map(String::as_str));
        lines.extend(["", "Press 1-4 to choose a speed"]);

        self.term.clear()?;
        self.term.show_message(&lines)?;

        loop {
            let key = self.term.read_key_blocking()?;
            if is_ctrl_c(&key) {
                return Ok(None);
            }
            if let KeyCode::Char(c) = key.code {
                if let Some(speed) = Speed::from_menu_key(c) {
                    info!("Speed set to {:?} ({} ticks/s)", speed, speed.ticks_per_second());
                    self.term.hide_message()?;
                    return Ok(Some(speed));
                }
            }
        }
    }

    fn play(&mut self, speed: Speed) -> Result<AfterRun> {
        self.term.clear()?;
        self.term.draw_borders(&self.grid)?;
        self.paused = false;

        let mut game = Game::new(self.grid)?;
        info!("Run started on a {}x{} grid at {:?}", self.grid.width(), self.grid.height(), speed);

        self.print_board(&game)?;

        let mut clock = Clock::new(speed.tick_interval(), Instant::now());
        let mut turn: Option<Direction> = None;

        loop {
            let wait = if self.paused { clock.interval() } else { clock.time_until_tick(Instant::now()) };
            let keys = self.term.read_key_events_queue(wait)?;
            let mut input = TickInput::from_keys(&keys);

            if input.quit {
                info!("Quit during a run, score {}", game.score());
                return Ok(AfterRun::Quit);
            }
            if let Some(latest) = input.take_turn() {
                turn = Some(latest);
            }
            if input.toggle_pause {
                self.toggle_pause()?;
                clock.reset(Instant::now());
            }

            if self.paused { continue; }

            let now = Instant::now();
            if !clock.is_due(now) { continue; }
            clock.mark_tick(now);

            match game.tick(turn.take()) {
                TickResult::Moved { new_head, old_head, old_tail } => {
                    if let Some(old_tail_pos) = old_tail {
                        self.term.print_cell(&self.grid, old_tail_pos, ' ')?;
                    }
                    self.term.print_cell(&self.grid, old_head, SNAKE_BODY_CHAR)?;
                    self.term.print_cell(&self.grid, new_head, game.snake().head_char())?;
                    self.term.print_cell(&self.grid, game.apple().position(), APPLE_CHAR)?;
                    self.print_score(game.score())?;
                    self.term.flush()?;
                }
                TickResult::Crashed(_) | TickResult::BoardFull => break,
            }
        }

        self.game_over(&game)?;
        self.after_run()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_board(&mut self, game: &Game) -> Result<()> {
        for (pos, ch) in board_glyphs(game) {
            self.term.print_cell(&self.grid, pos, ch)?;
        }
        self.print_score(game.score())?;
        self.term.flush()
    }

    fn print_score(&mut self, score: usize) -> Result<()> {
        let label = score_label(score, &self.grid);
        self.term.print_str_at((2, 0), &label)
    }

    fn game_over(&mut self, game: &Game) -> Result<()> {
        let win = game.status() == Status::Won;
        let title = if win {"You won!"} else {"Game over!"};

        if win {
            self.print_board(game)?;
        } else {
            for pos in game.snake().body() {
                self.term.print_cell(&self.grid, *pos, DEAD_SNAKE_CHAR)?;
            }
        }

        self.term.show_message(&[
            title,
            &*format!("Score: {}", game.score()),
            "",
            "Press any key to play again,",
            "S to change the speed,",
            "or CTRL+C to quit."
        ])
    }

    fn after_run(&mut self) -> Result<AfterRun> {
        sleep(GAME_OVER_GRACE);
        self.term.discard_key_events()?;

        let key = self.term.read_key_blocking()?;
        Ok(AfterRun::from_key(&key))
    }

    fn toggle_pause(&mut self) -> Result<()> {
        if !self.paused {
            self.term.show_message(&["Paused", "Press Esc to resume", "or Ctrl+C to quit"])?;
        } else {
            self.term.hide_message()?;
        }

        self.paused = !self.paused;
        Ok(())
    }
}

/// What to draw for a full redraw, in drawing order. A won board has no
/// apple left to show; it still sits under the head.
fn board_glyphs<R: Rng>(game: &Game<R>) -> Vec<(Cell, char)> {
    let snake = game.snake();
    let mut glyphs: Vec<(Cell, char)> = snake.body()[1..].iter().map(|pos| (*pos, SNAKE_BODY_CHAR)).collect();
    if game.status() != Status::Won {
        glyphs.push((game.apple().position(), APPLE_CHAR));
    }
    glyphs.push((snake.head(), snake.head_char()));
    glyphs
}

/// The score text for the top border, cut to fit between its corners.
fn score_label(score: usize, grid: &Grid) -> String {
    let border_width = grid.width() as usize * CELL_COLS as usize + 2;
    // Starts at column 2 and must stop before the corner column.
    let room = border_width.saturating_sub(3);
    format!(" Score: {} ", score).chars().take(room).collect()
}
