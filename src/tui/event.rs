//! Event handling for TUI.
//!
//! Uses a separate thread to poll for terminal events and timer ticks. The
//! poller and the interrupt handler feed the same channel through
//! [`EventHandler::sender`].

use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use tracing::warn;

use crate::collector::SampleError;

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// Timer tick for redraw.
    Tick,
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize.
    Resize(u16, u16),
    /// The background poller failed and stopped.
    SampleFailed(SampleError),
    /// SIGINT/SIGTERM delivered outside the terminal.
    Interrupt,
}

impl From<SampleError> for Event {
    fn from(e: SampleError) -> Self {
        Event::SampleFailed(e)
    }
}

/// Event handler that polls for terminal events in a separate thread.
pub struct EventHandler {
    rx: Receiver<Event>,
    tx: Sender<Event>,
}

impl EventHandler {
    /// Creates a new event handler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || pump_terminal_events(event_tx, tick_rate, read_terminal_event));

        Self::from_channel(tx, rx)
    }

    /// Wraps an existing channel without polling the terminal. Events only
    /// arrive through [`EventHandler::sender`].
    pub fn from_channel(tx: Sender<Event>, rx: Receiver<Event>) -> Self {
        Self { rx, tx }
    }

    /// A sender for injecting events from other threads.
    pub fn sender(&self) -> Sender<Event> {
        self.tx.clone()
    }

    /// Receives the next event, blocking until one is available.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}

/// Waits up to `timeout` for a terminal event; `None` on timeout.
fn read_terminal_event(timeout: Duration) -> io::Result<Option<CrosstermEvent>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Forwards terminal events and timeout ticks until the receiver is gone.
///
/// A failing poll is logged and retried after `tick_rate`, so a broken
/// terminal cannot turn the loop into a busy spin.
fn pump_terminal_events<P>(tx: Sender<Event>, tick_rate: Duration, mut poll: P)
where
    P: FnMut(Duration) -> io::Result<Option<CrosstermEvent>>,
{
    loop {
        let event = match poll(tick_rate) {
            // Release/repeat events would apply a hotkey twice on some terminals.
            Ok(Some(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                Event::Key(key)
            }
            Ok(Some(CrosstermEvent::Resize(w, h))) => Event::Resize(w, h),
            Ok(Some(_)) => continue,
            Ok(None) => Event::Tick,
            Err(e) => {
                warn!(error = %e, "terminal event poll failed");
                thread::sleep(tick_rate);
                Event::Tick
            }
        };
        if tx.send(event).is_err() {
            break;
        }
    }
}
