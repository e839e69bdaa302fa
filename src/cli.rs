//! Command-line flags

use crate::config::{self, Config};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Watch bubble sort and quick sort rearrange a list of bars, one step at a time
#[derive(Debug, Parser)]
#[command(name = "sortty", version, about)]
pub struct Cli {
    /// Canvas width in terminal cells
    #[arg(long, default_value_t = config::DEFAULT_WIDTH)]
    pub width: u16,

    /// Canvas height in terminal cells
    #[arg(long, default_value_t = config::DEFAULT_HEIGHT)]
    pub height: u16,

    /// Number of bars to sort
    #[arg(short = 'n', long = "count", default_value_t = config::DEFAULT_ELEMENT_COUNT)]
    pub element_count: usize,

    /// Smallest random value (inclusive)
    #[arg(long, default_value_t = config::DEFAULT_VALUE_MIN, allow_negative_numbers = true)]
    pub min: i32,

    /// Largest random value (exclusive)
    #[arg(long, default_value_t = config::DEFAULT_VALUE_MAX, allow_negative_numbers = true)]
    pub max: i32,

    /// Horizontal padding around the bars
    #[arg(long, default_value_t = config::DEFAULT_SIDE_PAD)]
    pub side_pad: u16,

    /// Rows above the bars reserved for the buttons
    #[arg(long, default_value_t = config::DEFAULT_TOP_PAD)]
    pub top_pad: u16,

    /// Frames per second
    #[arg(long, default_value_t = config::DEFAULT_FPS)]
    pub fps: u32,

    /// Pause in milliseconds on every comparison
    #[arg(long = "delay", default_value_t = config::DEFAULT_STEP_DELAY_MS)]
    pub step_delay_ms: u64,

    /// Seed for the random dataset
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write the log
    #[arg(long, default_value = config::DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            width: self.width,
            height: self.height,
            element_count: self.element_count,
            value_min: self.min,
            value_max: self.max,
            side_pad: self.side_pad,
            top_pad: self.top_pad,
            fps: self.fps,
            step_delay: Duration::from_millis(self.step_delay_ms),
            seed: self.seed,
            log_file: self.log_file,
        }
    }
}
