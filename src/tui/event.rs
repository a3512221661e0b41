//! Event handling for TUI.
//!
//! Two background threads feed one channel: a terminal poller (keys, resize,
//! ticks) and a metrics feed polling the configured source. The main loop
//! consumes events one at a time, so all grid mutation is serialized.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use tracing::debug;

use crate::source::{MetricsSource, Observation};

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// Timer tick; triggers a redraw of the current state only.
    Tick,
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize (width, height).
    Resize(u16, u16),
    /// Observations from the metrics source.
    Metrics(Vec<Observation>),
}

/// Event handler that polls for terminal events and metrics in separate threads.
pub struct EventHandler {
    rx: Receiver<Event>,
    /// Kept alive to prevent channel closure.
    _tx: Sender<Event>,
}

impl EventHandler {
    /// Creates a handler ticking every `tick_rate` and polling `source`
    /// every `refresh`.
    pub fn new(tick_rate: Duration, source: Box<dyn MetricsSource>, refresh: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let input_tx = tx.clone();
        thread::spawn(move || {
            loop {
                // Poll for events with timeout
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let event = match evt {
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                                Event::Key(key)
                            }
                            CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
                            _ => continue,
                        };
                        if input_tx.send(event).is_err() {
                            break;
                        }
                    }
                } else {
                    // Timeout - send tick
                    if input_tx.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
        });

        let feed_tx = tx.clone();
        thread::spawn(move || feed(source, refresh, feed_tx));

        Self { rx, _tx: tx }
    }

    /// Receives the next event, blocking until one is available.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}

/// Polls `source` until the receiving side goes away.
fn feed(mut source: Box<dyn MetricsSource>, refresh: Duration, tx: Sender<Event>) {
    debug!(source = source.name(), ?refresh, "metrics feed started");
    loop {
        let observations = source.poll();
        if tx.send(Event::Metrics(observations)).is_err() {
            break;
        }
        thread::sleep(refresh);
    }
    debug!(source = source.name(), "metrics feed stopped");
}
