//! Startup configuration
//!
//! All knobs are fixed for the lifetime of the program. Defaults live in the
//! constants below; [`crate::cli::Cli`] can override any of them.

use crate::errors::VisualizerError;
use std::ops::Range;
use std::path::PathBuf;
use std::time::Duration;

/// Default canvas width in terminal cells
pub const DEFAULT_WIDTH: u16 = 100;

/// Default canvas height in terminal cells
pub const DEFAULT_HEIGHT: u16 = 30;

/// Default number of bars
pub const DEFAULT_ELEMENT_COUNT: usize = 48;

/// Smallest generated value (inclusive)
pub const DEFAULT_VALUE_MIN: i32 = 10;

/// Largest generated value (exclusive)
pub const DEFAULT_VALUE_MAX: i32 = 100;

/// Horizontal padding, split evenly between the left and right edges
pub const DEFAULT_SIDE_PAD: u16 = 4;

/// Rows reserved above the bars for the buttons
pub const DEFAULT_TOP_PAD: u16 = 6;

pub const DEFAULT_FPS: u32 = 60;

/// Artificial pause applied on every comparison step
pub const DEFAULT_STEP_DELAY_MS: u64 = 10;

pub const DEFAULT_LOG_FILE: &str = "sortty.log";

/// Validated runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: u16,
    pub height: u16,
    pub element_count: usize,
    pub value_min: i32,
    pub value_max: i32,
    pub side_pad: u16,
    pub top_pad: u16,
    pub fps: u32,
    pub step_delay: Duration,
    /// Seed for reproducible datasets; `None` draws from the OS
    pub seed: Option<u64>,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            element_count: DEFAULT_ELEMENT_COUNT,
            value_min: DEFAULT_VALUE_MIN,
            value_max: DEFAULT_VALUE_MAX,
            side_pad: DEFAULT_SIDE_PAD,
            top_pad: DEFAULT_TOP_PAD,
            fps: DEFAULT_FPS,
            step_delay: Duration::from_millis(DEFAULT_STEP_DELAY_MS),
            seed: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Range the random generator draws values from
    pub fn value_range(&self) -> Range<i32> {
        self.value_min..self.value_max
    }

    /// Check every field, returning the first problem found
    pub fn validate(&self) -> Result<(), VisualizerError> {
        if self.element_count == 0 {
            return Err(VisualizerError::invalid_config(
                "element_count",
                "at least one element is required",
            ));
        }
        if self.value_min >= self.value_max {
            return Err(VisualizerError::invalid_config(
                "value_range",
                format!(
                    "minimum {} must be below maximum {}",
                    self.value_min, self.value_max
                ),
            ));
        }
        if self.fps == 0 {
            return Err(VisualizerError::invalid_config(
                "fps",
                "frame rate must be positive",
            ));
        }
        if self.side_pad >= self.width {
            return Err(VisualizerError::invalid_config(
                "side_pad",
                format!(
                    "padding {} leaves no room in a canvas {} cells wide",
                    self.side_pad, self.width
                ),
            ));
        }
        if self.top_pad >= self.height {
            return Err(VisualizerError::invalid_config(
                "top_pad",
                format!(
                    "padding {} leaves no room in a canvas {} rows high",
                    self.top_pad, self.height
                ),
            ));
        }
        Ok(())
    }
}
