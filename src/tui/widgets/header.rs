//! Header bar: clock, entity count, sort field, status message.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;

use crate::grid::Grid;
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, grid: &Grid, status: Option<&str>) {
    let chunks = Layout::horizontal([
        Constraint::Length(21), // Time
        Constraint::Length(18), // Count
        Constraint::Length(18), // Sort
        Constraint::Min(10),    // Status
    ])
    .split(area);

    let time_str = Local::now().format(" %Y-%m-%d %H:%M:%S").to_string();
    frame.render_widget(Paragraph::new(time_str).style(Styles::header()), chunks[0]);

    let count = format!(" containers: {}", grid.count());
    frame.render_widget(Paragraph::new(count).style(Styles::header()), chunks[1]);

    frame.render_widget(
        Paragraph::new(sort_label(grid)).style(Styles::header()),
        chunks[2],
    );

    let status_style = if status.is_some() {
        Styles::header().patch(Styles::warning())
    } else {
        Styles::header()
    };
    frame.render_widget(
        Paragraph::new(status.unwrap_or_default().to_string()).style(status_style),
        chunks[3],
    );
}

/// Sort field with an arrow: `↓` in the field's natural order, `↑` reversed.
fn sort_label(grid: &Grid) -> String {
    let arrow = if grid.controller().is_reversed() {
        '↑'
    } else {
        '↓'
    };
    format!(" sort: {} {}", grid.sort_field(), arrow)
}
