//! Background thread that runs sync cycles at a fixed rate.

use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{info, warn};

use super::reconciler::ReconcileReport;
use super::service::SyncService;
use super::source::RemoteSource;

/// Statistics from the sync worker.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncStats {
    /// Cycles started.
    pub cycles: usize,
    /// Cycles skipped because the fetch (or the store) failed.
    pub failed_cycles: usize,
    pub inserted: usize,
    pub updated: usize,
    pub skipped: usize,
}

impl SyncStats {
    fn record(&mut self, report: &ReconcileReport) {
        self.inserted += report.inserted;
        self.updated += report.updated;
        self.skipped += report.skipped;
    }
}

/// A background thread that triggers `SyncService::run_cycle` periodically.
///
/// Cycles start every `interval` measured from the previous start; a cycle
/// that overruns delays the next one rather than overlapping it.
///
/// ## Example
///
/// ```ignore
/// use std::sync::Arc;
/// use std::time::Duration;
/// use tariff_sync::{HttpRemoteSource, SyncService, SyncWorkerThread, TariffStore};
///
/// let store = TariffStore::new();
/// let source = HttpRemoteSource::new("http://localhost:8080/dummy-remote-tariffs", Duration::from_secs(10))?;
/// let service = Arc::new(SyncService::new(source, store.clone()));
///
/// let worker = SyncWorkerThread::spawn(service, Duration::ZERO, Duration::from_secs(60));
///
/// // ... serve requests ...
///
/// let stats = worker.stop();
/// println!("ran {} cycles", stats.cycles);
/// ```
pub struct SyncWorkerThread {
    stop_tx: Sender<()>,
    handle: Option<JoinHandle<SyncStats>>,
}

impl SyncWorkerThread {
    /// Spawn the worker. The first cycle runs after `initial_delay`.
    pub fn spawn<S>(service: Arc<SyncService<S>>, initial_delay: Duration, interval: Duration) -> Self
    where
        S: RemoteSource + 'static,
    {
        let (stop_tx, stop_rx) = channel();

        let handle = thread::spawn(move || {
            let mut stats = SyncStats::default();

            if stop_requested(&stop_rx, initial_delay) {
                return stats;
            }

            loop {
                let started = Instant::now();
                stats.cycles += 1;

                match service.run_cycle() {
                    Ok(report) => stats.record(&report),
                    Err(e) => {
                        stats.failed_cycles += 1;
                        warn!(error = %e, "tariff sync cycle skipped");
                    }
                }

                let stopped = match started.checked_add(interval) {
                    Some(next) => {
                        stop_requested(&stop_rx, next.saturating_duration_since(Instant::now()))
                    }
                    // Next start is past what `Instant` can represent.
                    None => {
                        let _ = stop_rx.recv();
                        true
                    }
                };
                if stopped {
                    break;
                }
            }

            info!(
                cycles = stats.cycles,
                failed = stats.failed_cycles,
                "tariff sync worker stopped"
            );
            stats
        });

        Self {
            stop_tx,
            handle: Some(handle),
        }
    }

    /// Signal the worker to stop and wait for it to finish.
    /// Returns the worker statistics.
    pub fn stop(mut self) -> SyncStats {
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap_or_default()
        } else {
            SyncStats::default()
        }
    }

    /// Signal the worker to stop without waiting.
    pub fn signal_stop(&self) {
        let _ = self.stop_tx.send(());
    }
}

impl Drop for SyncWorkerThread {
    fn drop(&mut self) {
        let _ = self.stop_tx.send(());
    }
}

/// Wait up to `timeout` for a stop signal.
fn stop_requested(stop_rx: &Receiver<()>, timeout: Duration) -> bool {
    match stop_rx.recv_timeout(timeout) {
        Ok(()) | Err(RecvTimeoutError::Disconnected) => true,
        Err(RecvTimeoutError::Timeout) => false,
    }
}
