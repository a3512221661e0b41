//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::TableState;

use crate::grid::Grid;

use super::widgets::{render_footer, render_grid, render_header};

/// Main render function. Draws the current state only; calling it twice
/// without an intervening mutation produces the same frame.
pub fn render(frame: &mut Frame, grid: &Grid, table_state: &mut TableState, status: Option<&str>) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(3),    // Grid
        Constraint::Length(1), // Key help
    ])
    .split(area);

    render_header(frame, chunks[0], grid, status);
    render_grid(frame, chunks[1], grid, table_state);
    render_footer(frame, chunks[2]);
}
