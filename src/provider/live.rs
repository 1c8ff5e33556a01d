//! Background poller feeding the live history.

use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, error};

use crate::collector::{SampleError, Sampler};
use crate::storage::HistoryBuffer;

/// Runs a [`Sampler`] on its own thread every `period` and pushes each
/// sample into the shared [`HistoryBuffer`].
///
/// The first failed sample is forwarded on the error channel and ends the
/// thread: a missing or malformed pressure file means the platform does not
/// support PSI, not a transient hiccup, so polling does not continue on
/// stale data.
pub struct Poller {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Poller {
    /// Spawns the polling thread.
    ///
    /// The first sample is taken one `period` after spawning; the caller is
    /// expected to have pushed an initial sample synchronously.
    pub fn spawn<S, E>(
        mut sampler: S,
        history: Arc<HistoryBuffer>,
        period: Duration,
        errors: Sender<E>,
    ) -> Self
    where
        S: Sampler + 'static,
        E: From<SampleError> + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => {}
                    // Stop requested or the poller handle was dropped.
                    _ => break,
                }

                match sampler.sample() {
                    Ok(sample) => history.push(sample),
                    Err(e) => {
                        error!(error = %e, "pressure sampling failed");
                        let _ = errors.send(E::from(e));
                        break;
                    }
                }
            }
            debug!("poller stopped");
        });

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Whether the polling thread has exited (after an error or a stop).
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(|h| h.is_finished())
    }

    /// Stops the thread and waits for an in-flight sample to finish.
    pub fn stop(mut self) {
        self.stop_tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        // Closing the channel wakes the thread; it is not joined here.
        self.stop_tx.take();
    }
}
