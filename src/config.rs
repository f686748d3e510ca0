use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{warn, LevelFilter};

use crate::game::check_grid;
use crate::grid::Grid;
use crate::speed::Speed;

#[derive(Debug, Parser)]
#[command(name = "snake")]
#[command(version, about = "Classic snake in the terminal")]
pub struct Cli {
    /// Grid width in cells (default: as wide as the terminal allows)
    #[arg(long)]
    pub width: Option<u16>,

    /// Grid height in cells (default: as tall as the terminal allows)
    #[arg(long)]
    pub height: Option<u16>,

    /// Start right away at this speed instead of showing the speed menu
    #[arg(long, value_enum)]
    pub speed: Option<Speed>,

    /// Where to write the log
    #[arg(long, default_value = "snake.log")]
    pub log_file: PathBuf,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Builds the grid from the requested size, shrunk to what the terminal
    /// can show. Fails if a run could not start on it.
    pub fn grid(&self, available: (u16, u16)) -> Result<Grid> {
        let width = fit(self.width, available.0, "width");
        let height = fit(self.height, available.1, "height");
        let grid = Grid::new(width, height)?;
        check_grid(&grid)?;
        Ok(grid)
    }
}

fn fit(requested: Option<u16>, available: u16, what: &str) -> i16 {
    let size = match requested {
        Some(n) if n > available => {
            warn!("Requested grid {} {} does not fit, using {}", what, n, available);
            available
        }
        Some(n) => n,
        None => available,
    };
    i16::try_from(size).unwrap_or(i16::MAX)
}
