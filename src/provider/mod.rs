//! Live sample source.
//!
//! The [`Poller`] owns a [`Sampler`](crate::collector::Sampler) on a
//! background thread and feeds the shared
//! [`HistoryBuffer`](crate::storage::HistoryBuffer); the UI only ever reads
//! copies of that history.

mod live;

pub use live::Poller;
