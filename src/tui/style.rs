//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

/// Dashboard color palette.
pub struct Theme;

impl Theme {
    // Background colors
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;
    pub const SELECTED_BG: Color = Color::DarkGray;

    // Foreground colors
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    // Highlight colors
    pub const HIGHLIGHT_WARN: Color = Color::Yellow;
    pub const HIGHLIGHT_CRITICAL: Color = Color::Red;

    // Metrics colors
    pub const CPU_COLOR: Color = Color::Cyan;
    pub const MEM_COLOR: Color = Color::Magenta;
    pub const NET_COLOR: Color = Color::Green;
}

/// Load thresholds (percent) for CPU and memory cells.
const WARN_PCT: f64 = 60.0;
const CRITICAL_PCT: f64 = 90.0;

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row style.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn warning() -> Style {
        Style::default().fg(Theme::HIGHLIGHT_WARN)
    }

    pub fn critical() -> Style {
        Style::default()
            .fg(Theme::HIGHLIGHT_CRITICAL)
            .add_modifier(Modifier::BOLD)
    }

    /// CPU cell style by load.
    pub fn cpu(pct: f64) -> Style {
        Self::by_load(pct).unwrap_or_else(|| Style::default().fg(Theme::CPU_COLOR))
    }

    /// Memory cell style by share of the limit.
    pub fn mem(pct: f64) -> Style {
        Self::by_load(pct).unwrap_or_else(|| Style::default().fg(Theme::MEM_COLOR))
    }

    pub fn net() -> Style {
        Style::default().fg(Theme::NET_COLOR)
    }

    /// Help text style.
    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help key style (highlighted keys in help line).
    pub fn help_key() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    fn by_load(pct: f64) -> Option<Style> {
        if pct >= CRITICAL_PCT {
            Some(Self::critical())
        } else if pct >= WARN_PCT {
            Some(Self::warning())
        } else {
            None
        }
    }
}
