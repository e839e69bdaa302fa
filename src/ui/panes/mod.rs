//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`buttons`]: Algorithm selection buttons and their click regions
//! - [`bars`]: One vertical bar per dataset value, with step highlights
//! - [`status`]: Status bar with run counters and keybindings
//!
//! Each module exports a primary `render_*` function or widget and keeps its
//! geometry in plain functions so it can be tested without a terminal.

pub mod bars;
pub mod buttons;
pub mod status;

// Re-export render functions for convenience
pub use bars::{BarGeometry, BarsWidget};
pub use buttons::{button_regions, hit_test, render_buttons, ButtonRegions};
pub use status::{render_status_bar, StatusRenderData};
