//! Container table: one row per entity in the grid's current order.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};

use crate::fmt::{format_mem, format_net, format_percent, truncate};
use crate::grid::{Entity, Grid};
use crate::tui::style::Styles;

/// Characters of the container id shown in the CID column.
const SHORT_ID_LEN: usize = 12;

/// Column widths; the id column fits exactly one short id.
const WIDTHS: [Constraint; 5] = [
    Constraint::Fill(2),
    Constraint::Length(SHORT_ID_LEN as u16 + 2),
    Constraint::Fill(2),
    Constraint::Fill(2),
    Constraint::Fill(2),
];

/// Renders the grid. `table_state` only carries the scroll offset; the
/// selected index is always taken from the grid cursor.
pub fn render_grid(frame: &mut Frame, area: Rect, grid: &Grid, table_state: &mut TableState) {
    table_state.select(grid.cursor().index());

    let header = Row::new(grid.header().iter().map(|h| Cell::from(*h)))
        .style(Styles::table_header())
        .height(1);

    let rows: Vec<Row> = grid
        .ordered_entities()
        .into_iter()
        .enumerate()
        .map(|(pos, entity)| {
            let style = if grid.is_selected(pos) {
                Styles::selected()
            } else {
                Styles::default()
            };
            Row::new(cells(entity)).style(style).height(1)
        })
        .collect();

    let title = format!(" Containers [{}] ", grid.count());
    let table = Table::new(rows, WIDTHS)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(Styles::selected());

    frame.render_stateful_widget(table, area, table_state);
}

fn cells(entity: &Entity) -> Vec<Cell<'_>> {
    let m = entity.metrics();
    vec![
        Cell::from(format!(" {}", entity.display_name())),
        Cell::from(truncate(entity.id(), SHORT_ID_LEN)),
        Cell::from(format_percent(m.cpu_percent)).style(Styles::cpu(m.cpu_percent)),
        Cell::from(format_mem(m.mem_usage, m.mem_limit)).style(Styles::mem(m.mem_percent())),
        Cell::from(format_net(m.net_rx, m.net_tx)).style(Styles::net()),
    ]
}
