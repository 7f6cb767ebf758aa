use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::tuning::Tuning;

// Runtime constants (not gameplay tuning).

/// Default game tick period.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Input/render poll period; several frames pass per tick.
pub const FRAME: Duration = Duration::from_millis(33);

pub const LOG_FILE_NAME: &str = "aybuben.log";

#[derive(Parser, Debug, Clone)]
#[command(name = "aybuben")]
#[command(about = "Collect Armenian letters, then jump on the boss")]
pub struct Cli {
    /// Seed for the letter roll; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Level to start on
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub level: u32,

    /// Tick period in milliseconds
    #[arg(long, default_value_t = TICK_INTERVAL.as_millis() as u64, value_parser = clap::value_parser!(u64).range(10..))]
    pub tick_ms: u64,

    /// Ticks the boss ignores further hits after being hit (0 = every tick counts)
    #[arg(long, default_value_t = 0)]
    pub boss_hit_cooldown: u32,

    /// Where to write logs; defaults to the system temp directory
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME))
    }

    pub fn tuning(&self) -> Tuning {
        Tuning {
            boss_hit_cooldown_ticks: self.boss_hit_cooldown,
            ..Tuning::default()
        }
    }
}
