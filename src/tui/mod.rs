//! Terminal User Interface for psitop.
//!
//! Draws the selectors, tables and graph composed by [`crate::view`] and
//! routes keyboard input into the view state.

mod app;
mod event;
mod input;
mod render;
pub mod state;
mod style;
mod widgets;

use std::fmt;
use std::io;

use crate::collector::SampleError;

pub use app::{App, FETCH_PERIOD, MAX_DATA_LENGTH, RENDER_PERIOD};
pub use input::{KeyAction, handle_key};
pub use state::ViewState;

/// Errors that end the dashboard.
#[derive(Debug)]
pub enum AppError {
    /// The terminal or the interrupt handler could not be set up.
    Init(io::Error),
    /// Drawing failed mid-run.
    Terminal(io::Error),
    /// A pressure sample could not be taken.
    Sample(SampleError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Init(e) => write!(f, "failed to initialize terminal: {}", e),
            AppError::Terminal(e) => write!(f, "terminal error: {}", e),
            AppError::Sample(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Init(e) | AppError::Terminal(e) => Some(e),
            AppError::Sample(e) => Some(e),
        }
    }
}

impl From<SampleError> for AppError {
    fn from(e: SampleError) -> Self {
        AppError::Sample(e)
    }
}
