//! Status bar rendering with keybindings and run counters

use crate::driver::RunStats;
use crate::sorting::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the status bar shows
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub algorithm: Option<Algorithm>,
    pub stats: RunStats,
    pub is_running: bool,
}

/// Short badge describing the driver state
pub fn state_badge(data: &StatusRenderData) -> (&'static str, Color) {
    if data.is_running {
        (" ▶ RUNNING ", DEFAULT_THEME.secondary)
    } else if data.stats.completed {
        (" ✔ DONE ", DEFAULT_THEME.success)
    } else {
        (" IDLE ", DEFAULT_THEME.primary)
    }
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let (badge, badge_color) = state_badge(data);
    let base = Style::default().bg(DEFAULT_THEME.status_bg);
    let sep_style = base.fg(DEFAULT_THEME.comment);

    let mut left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", sep_style),
    ];
    if let Some(algorithm) = data.algorithm {
        left_spans.push(Span::styled(
            format!("{} ", algorithm),
            base.fg(DEFAULT_THEME.primary).add_modifier(Modifier::BOLD),
        ));
        left_spans.push(Span::styled(
            format!(
                "cmp {} · swp {} · steps {} ",
                data.stats.comparisons, data.stats.swaps, data.stats.steps
            ),
            base.fg(DEFAULT_THEME.fg),
        ));
        left_spans.push(Span::styled("| ", sep_style));
    }
    left_spans.push(Span::styled(
        format!("{} ", data.message),
        base.fg(DEFAULT_THEME.fg),
    ));

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(base)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = base.fg(DEFAULT_THEME.fg);

    let right_spans = vec![
        Span::styled(" click/1/2 ", key_style),
        Span::styled(" sort ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" r ", key_style),
        Span::styled(" shuffle ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(base)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
