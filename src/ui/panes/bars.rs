//! Bar chart of the dataset
//!
//! Each value becomes a vertical bar whose height grows linearly from the
//! dataset's `min_val` (empty) to its `max_val` (full plot height). Heights are
//! resolved to eighths of a cell so small differences stay visible.

use crate::dataset::Dataset;
use crate::sorting::Highlight;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};
use std::ops::Range;

/// Partial-cell glyphs for 1/8 through 7/8 of a cell
const PARTIAL_BLOCKS: [&str; 7] = ["▁", "▂", "▃", "▄", "▅", "▆", "▇"];
const FULL_BLOCK: &str = "█";

/// Where each bar sits inside the plot area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarGeometry {
    area: Rect,
    start_x: u16,
    bar_width: u16,
    min_val: i32,
    max_val: i32,
}

impl BarGeometry {
    pub fn new(area: Rect, dataset: &Dataset, side_pad: u16) -> Self {
        let usable = area.width.saturating_sub(side_pad);
        let count = dataset.len().max(1);
        let bar_width = (usable as usize / count).clamp(1, u16::MAX as usize) as u16;
        BarGeometry {
            area,
            start_x: area.x.saturating_add(side_pad / 2),
            bar_width,
            min_val: dataset.min_val(),
            max_val: dataset.max_val(),
        }
    }

    pub fn bar_width(&self) -> u16 {
        self.bar_width
    }

    /// Columns covered by bar `index`, clipped to the plot area
    pub fn columns(&self, index: usize) -> Option<Range<u16>> {
        let left = self.start_x as usize + index * self.bar_width as usize;
        let right = (left + self.bar_width as usize).min(self.area.right() as usize);
        if left >= right {
            return None;
        }
        Some(left as u16..right as u16)
    }

    /// Bar height for `value`, in eighths of a cell
    pub fn height_eighths(&self, value: i32) -> u32 {
        let full = self.area.height as u64 * 8;
        let span = (self.max_val as i64 - self.min_val as i64).max(0) as u64;
        if span == 0 {
            return full as u32;
        }
        let offset = (value as i64 - self.min_val as i64).clamp(0, span as i64) as u64;
        ((offset * full + span / 2) / span) as u32
    }
}

/// Renders the dataset as bars, colouring highlighted indices
pub struct BarsWidget<'a> {
    dataset: &'a Dataset,
    highlight: Highlight,
    side_pad: u16,
}

impl<'a> BarsWidget<'a> {
    pub fn new(dataset: &'a Dataset, highlight: Highlight, side_pad: u16) -> Self {
        BarsWidget {
            dataset,
            highlight,
            side_pad,
        }
    }
}

/// Colour for bar `index`: the highlight wins over the rotating palette
pub fn bar_color(index: usize, highlight: &Highlight) -> ratatui::style::Color {
    if highlight.contains(index) {
        DEFAULT_THEME.highlight
    } else {
        DEFAULT_THEME.bars[index % DEFAULT_THEME.bars.len()]
    }
}

impl Widget for BarsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.area() == 0 {
            return;
        }
        let geometry = BarGeometry::new(area, self.dataset, self.side_pad);
        let bottom = area.bottom();

        for (index, &value) in self.dataset.values().iter().enumerate() {
            let Some(columns) = geometry.columns(index) else {
                break;
            };
            let style = Style::default()
                .fg(bar_color(index, &self.highlight))
                .bg(DEFAULT_THEME.bg);
            let eighths = geometry.height_eighths(value);
            let full_rows = (eighths / 8) as u16;
            let remainder = (eighths % 8) as usize;
            let width = (columns.end - columns.start) as usize;

            for row in 0..full_rows.min(area.height) {
                buf.set_string(columns.start, bottom - 1 - row, FULL_BLOCK.repeat(width), style);
            }
            if remainder > 0 && full_rows < area.height {
                buf.set_string(
                    columns.start,
                    bottom - 1 - full_rows,
                    PARTIAL_BLOCKS[remainder - 1].repeat(width),
                    style,
                );
            }
        }
    }
}
