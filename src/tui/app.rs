//! Main TUI application.

use std::io;
use std::time::Duration;

use ratatui::Frame;
use ratatui::widgets::TableState;
use tracing::{debug, info, warn};

use crate::grid::Grid;
use crate::source::{MetricsSource, Observation};

use super::event::{Event, EventHandler};
use super::input::{Action, handle_key};
use super::render::render;
use super::terminal::Tui;

/// Rows moved by PageUp / PageDown.
const PAGE_SIZE: usize = 20;

/// Main TUI application.
pub struct App {
    grid: Grid,
    table_state: TableState,
    status_message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            table_state: TableState::default(),
            status_message: None,
            should_quit: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Runs the TUI until the user quits.
    ///
    /// The terminal is released before returning, on error paths included.
    pub fn run(
        mut self,
        source: Box<dyn MetricsSource>,
        tick_rate: Duration,
        refresh: Duration,
    ) -> io::Result<()> {
        info!(source = source.name(), sort = self.grid.sort_field(), "starting dashboard");
        let mut tui = Tui::enter()?;
        let events = EventHandler::new(tick_rate, source, refresh);

        loop {
            tui.draw(|frame| self.draw(frame))?;

            match events.next() {
                Ok(event) => self.handle_event(event),
                Err(_) => self.should_quit = true,
            }

            if self.should_quit {
                break;
            }
        }

        tui.restore()?;
        info!(containers = self.grid.count(), "dashboard stopped");
        Ok(())
    }

    /// Draws the current state into `frame`.
    pub fn draw(&mut self, frame: &mut Frame) {
        render(
            frame,
            &self.grid,
            &mut self.table_state,
            self.status_message.as_deref(),
        );
    }

    /// Applies one event. Ticks and resizes change no state; the loop
    /// redraws after every event anyway.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Tick => {}
            Event::Resize(width, height) => debug!(width, height, "terminal resized"),
            Event::Key(key) => {
                let action = handle_key(key);
                self.dispatch(action);
            }
            Event::Metrics(observations) => self.apply_observations(observations),
        }
    }

    /// Performs a grid operation.
    pub fn dispatch(&mut self, action: Action) {
        if action != Action::None {
            self.status_message = None;
        }
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::Up => {
                self.grid.move_cursor_up();
            }
            Action::Down => {
                self.grid.move_cursor_down();
            }
            Action::PageUp => {
                self.grid.page_up(PAGE_SIZE);
            }
            Action::PageDown => {
                self.grid.page_down(PAGE_SIZE);
            }
            Action::Top => {
                self.grid.move_cursor_top();
            }
            Action::Bottom => {
                self.grid.move_cursor_bottom();
            }
            Action::SortBy(name) => self.request_sort(name),
            Action::CycleSort => {
                let field = self.grid.cycle_sort_field();
                debug!(field, "sort field cycled");
            }
            Action::ToggleReverse => {
                let reversed = self.grid.toggle_reverse();
                debug!(reversed, "sort direction toggled");
            }
        }
    }

    /// Switches the sort field; an unknown name keeps the current one and
    /// shows a status message.
    pub fn request_sort(&mut self, name: &str) {
        if let Err(e) = self.grid.change_sort_field(name) {
            warn!(error = %e, current = self.grid.sort_field(), "sort request rejected");
            self.status_message = Some(e.to_string());
        }
    }

    fn apply_observations(&mut self, observations: Vec<Observation>) {
        for observation in observations {
            match observation {
                Observation::Seen { id, name, metrics } => {
                    if self.grid.upsert(&id, &name) {
                        info!(id = %id, name = %name, "container appeared");
                    }
                    self.grid.update_metrics(&id, metrics);
                }
                Observation::Gone { id } => {
                    if self.grid.remove(&id).is_some() {
                        info!(id = %id, "container removed");
                    }
                }
            }
        }
    }
}
