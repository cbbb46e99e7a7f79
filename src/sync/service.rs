//! SyncService - one fetch-then-reconcile cycle, never two at once.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use super::error::SyncError;
use super::reconciler::{ReconcileReport, Reconciler};
use super::source::RemoteSource;
use crate::store::TariffStore;

pub struct SyncService<S> {
    source: S,
    reconciler: Reconciler,
    running: AtomicBool,
}

impl<S: RemoteSource> SyncService<S> {
    pub fn new(source: S, store: TariffStore) -> Self {
        Self {
            source,
            reconciler: Reconciler::new(store),
            running: AtomicBool::new(false),
        }
    }

    pub fn store(&self) -> &TariffStore {
        self.reconciler.store()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Whether a cycle is in progress right now.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Fetch the remote batch and merge it.
    ///
    /// Returns `SyncError::AlreadyRunning` without touching the source if a
    /// cycle is in progress. A failed fetch leaves the store untouched.
    pub fn run_cycle(&self) -> Result<ReconcileReport, SyncError> {
        let _guard = RunGuard::acquire(&self.running).ok_or(SyncError::AlreadyRunning)?;

        let batch = self.source.fetch()?;
        if batch.is_empty() {
            debug!("remote feed returned no tariffs");
            return Ok(ReconcileReport::default());
        }

        let fetched = batch.len();
        let report = self.reconciler.reconcile(batch)?;
        info!(
            fetched,
            inserted = report.inserted,
            updated = report.updated,
            skipped = report.skipped,
            "tariff sync cycle complete"
        );
        Ok(report)
    }
}

/// Holds the running flag for the duration of a cycle.
struct RunGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> RunGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RunGuard { flag })
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
