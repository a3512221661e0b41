//! Terminal User Interface for ctgrid.
//!
//! The driver around the grid: owns the terminal, turns input and timer
//! events into grid operations and redraws after every event.

mod app;
mod event;
mod input;
mod render;
mod style;
mod terminal;
mod widgets;

pub use app::App;
pub use event::{Event, EventHandler};
pub use input::{Action, handle_key};
pub use terminal::Tui;
