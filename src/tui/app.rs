//! Main TUI application.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing::{info, warn};

use crate::collector::Sampler;
use crate::provider::Poller;
use crate::storage::HistoryBuffer;
use crate::view::{CpuThresholds, compose_frame};

use super::AppError;
use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::ViewState;

/// Interval between pressure samples.
pub const FETCH_PERIOD: Duration = Duration::from_millis(500);
/// Interval between redraws when no key is pressed.
pub const RENDER_PERIOD: Duration = Duration::from_millis(1000);
/// Number of samples kept in the history.
pub const MAX_DATA_LENGTH: usize = 100;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Main TUI application.
pub struct App<S> {
    sampler: S,
    history: Arc<HistoryBuffer>,
    view: ViewState,
    thresholds: CpuThresholds,
}

impl<S: Sampler + 'static> App<S> {
    pub fn new(sampler: S, thresholds: CpuThresholds) -> Self {
        Self {
            sampler,
            history: Arc::new(HistoryBuffer::new(MAX_DATA_LENGTH)),
            view: ViewState::new(),
            thresholds,
        }
    }

    /// Runs the dashboard until the user quits or sampling fails.
    ///
    /// The first sample is taken before the terminal is touched, so an
    /// unsupported platform is reported on a normal screen. Once the
    /// terminal is acquired it is restored on every exit path.
    pub fn run(mut self) -> Result<(), AppError> {
        let first = self.sampler.sample().map_err(AppError::Sample)?;
        self.history.push(first);

        let events = EventHandler::new(RENDER_PERIOD);
        let interrupt_tx = events.sender();
        ctrlc::set_handler(move || {
            let _ = interrupt_tx.send(Event::Interrupt);
        })
        .map_err(|e| AppError::Init(io::Error::other(e)))?;

        let mut terminal = init_terminal().map_err(AppError::Init)?;

        let poller = Poller::spawn(
            self.sampler,
            Arc::clone(&self.history),
            FETCH_PERIOD,
            events.sender(),
        );
        info!(
            capacity = MAX_DATA_LENGTH,
            logical_cpus = self.thresholds.logical_cpus(),
            "dashboard started"
        );

        let result = event_loop(
            &mut terminal,
            &events,
            &self.history,
            &mut self.view,
            self.thresholds,
        );

        poller.stop();
        let restored = restore_terminal(&mut terminal);
        if let Err(e) = &restored {
            warn!(error = %e, "failed to restore terminal");
        }
        result?;
        restored.map_err(AppError::Terminal)?;
        info!("dashboard stopped");
        Ok(())
    }
}

/// Redraws and dispatches events until quit, interrupt or a sampling error.
fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    events: &EventHandler,
    history: &HistoryBuffer,
    view: &mut ViewState,
    thresholds: CpuThresholds,
) -> Result<(), AppError> {
    loop {
        let tail = history.snapshot_tail(history.capacity());
        let spec = compose_frame(view, &tail, thresholds, history.capacity());
        terminal
            .draw(|frame| render(frame, &spec))
            .map_err(AppError::Terminal)?;

        match events.next() {
            Ok(Event::Tick) | Ok(Event::Resize(..)) => {}
            Ok(Event::Key(key)) => {
                if handle_key(view, key) == KeyAction::Quit {
                    return Ok(());
                }
            }
            Ok(Event::SampleFailed(e)) => return Err(AppError::Sample(e)),
            Ok(Event::Interrupt) => {
                info!("interrupted");
                return Ok(());
            }
            Err(_) => return Ok(()),
        }
    }
}

fn init_terminal() -> io::Result<CrosstermTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    or_rollback(execute!(stdout, EnterAlternateScreen), || {
        let _ = disable_raw_mode();
    })?;
    or_rollback(Terminal::new(CrosstermBackend::new(stdout)), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })
}

/// Runs `rollback` when a setup step failed, then passes the result on.
fn or_rollback<T>(result: io::Result<T>, rollback: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        rollback();
    }
    result
}

fn restore_terminal(terminal: &mut CrosstermTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}
