use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::style::Styles;

const KEYS: &[(&str, &str)] = &[
    ("↑↓", "move"),
    ("PgUp/PgDn", "page"),
    ("c/m/x/n/i", "sort cpu/mem/net/name/id"),
    ("s", "next sort"),
    ("r", "reverse"),
    ("q", "quit"),
];

/// Renders the key help line.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let spans: Vec<Span> = KEYS
        .iter()
        .flat_map(|(key, what)| {
            [
                Span::styled(format!(" {}", key), Styles::help_key()),
                Span::styled(format!(" {} ", what), Styles::help()),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
