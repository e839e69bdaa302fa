//! Algorithm selection buttons

use crate::sorting::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashMap;

/// Left margin of the first button inside the canvas
const BUTTON_LEFT: u16 = 2;
/// Rows above the buttons
const BUTTON_TOP: u16 = 1;
const BUTTON_WIDTH: u16 = 17;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 4;

/// Hit regions for every algorithm button
pub type ButtonRegions = FxHashMap<Algorithm, Rect>;

/// Lay out one button per algorithm at fixed offsets from the canvas origin.
///
/// Buttons that fall partly outside the canvas are clipped; fully hidden ones
/// are left out so they cannot be clicked.
pub fn button_regions(canvas: Rect) -> ButtonRegions {
    let mut regions = ButtonRegions::default();
    for (slot, algorithm) in Algorithm::ALL.into_iter().enumerate() {
        let rect = Rect {
            x: canvas
                .x
                .saturating_add(BUTTON_LEFT)
                .saturating_add(slot as u16 * (BUTTON_WIDTH + BUTTON_GAP)),
            y: canvas.y.saturating_add(BUTTON_TOP),
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
        }
        .intersection(canvas);
        if rect.area() > 0 {
            regions.insert(algorithm, rect);
        }
    }
    regions
}

/// Which button, if any, contains the cell at `(column, row)`
pub fn hit_test(regions: &ButtonRegions, column: u16, row: u16) -> Option<Algorithm> {
    Algorithm::ALL.into_iter().find(|algorithm| {
        regions.get(algorithm).is_some_and(|rect| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        })
    })
}

/// Draw the buttons, filling the active selection with a lighter colour
pub fn render_buttons(frame: &mut Frame, regions: &ButtonRegions, active: Option<Algorithm>) {
    for algorithm in Algorithm::ALL {
        let Some(&area) = regions.get(&algorithm) else {
            continue;
        };
        let is_active = active == Some(algorithm);
        let fill = if is_active {
            DEFAULT_THEME.button_active
        } else {
            DEFAULT_THEME.button_idle
        };

        let mut label_style = Style::default().fg(DEFAULT_THEME.button_label).bg(fill);
        if is_active {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(fill).bg(fill))
            .style(Style::default().bg(fill));

        let paragraph = Paragraph::new(algorithm.label())
            .style(label_style)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }
}
