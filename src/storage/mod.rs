//! In-memory sample storage.
//!
//! - `model`: sample types (`AllPressures` and friends)
//! - `HistoryBuffer`: bounded rolling window shared by poller and UI

mod history;
pub mod model;

pub use history::HistoryBuffer;
