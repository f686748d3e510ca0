use std::time::Duration;

use clap::ValueEnum;

/// Tick-rate presets offered by the speed menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Speed {
    Slow,
    Medium,
    Fast,
    Why,
}

impl Speed {
    pub const ALL: [Speed; 4] = [Speed::Slow, Speed::Medium, Speed::Fast, Speed::Why];

    pub fn ticks_per_second(self) -> u32 {
        match self {
            Speed::Slow => 10,
            Speed::Medium => 15,
            Speed::Fast => 25,
            Speed::Why => 60,
        }
    }

    pub fn tick_interval(self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second()
    }

    pub fn label(self) -> &'static str {
        match self {
            Speed::Slow => "Slow",
            Speed::Medium => "Medium",
            Speed::Fast => "Fast",
            Speed::Why => "Are You Sure About This?",
        }
    }

    /// Menu entries are picked with the digits 1 to 4.
    pub fn from_menu_key(key: char) -> Option<Speed> {
        let index = key.to_digit(10)?.checked_sub(1)?;
        Speed::ALL.get(index as usize).copied()
    }

    pub fn menu_lines() -> Vec<String> {
        Speed::ALL
            .iter()
            .enumerate()
            .map(|(i, speed)| format!("{}  {}", i + 1, speed.label()))
            .collect()
    }
}
