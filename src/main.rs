use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use simplelog::{Config, WriteLogger};

use arcade_snake::app::SnakeGame;
use arcade_snake::config::Cli;
use arcade_snake::term::TermManager;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The terminal belongs to the game, so logs go to a file
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level, Config::default(), log_file).context("Failed to initialize logger")?;

    let term = TermManager::new()?;
    let grid = cli.grid(term.max_grid_size())?;
    info!("Starting snake: {}x{} grid, speed {:?}", grid.width(), grid.height(), cli.speed);

    let mut game = SnakeGame::new(term, grid);

    // The terminal is restored however the game ends
    let result = game.initialize().and_then(|_| game.run(cli.speed));
    let restored = game.shutdown();

    if let Err(e) = &result {
        error!("Game aborted: {:#}", e);
    }
    result.and(restored)
}
