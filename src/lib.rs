//! Classic snake: the snake/apple/grid state machine and its per-tick update,
//! plus the terminal front end that drives it.

pub mod app;
pub mod apple;
pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod snake;
pub mod speed;
pub mod term;
