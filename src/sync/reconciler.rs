//! Reconciler - merges a remote batch into the local store.
//!
//! For every remote record, in batch order:
//!
//! 1. look for a local record whose `remote_id` equals the remote id
//!    (records without a remote id never match);
//! 2. if found, replace its name, features and prices, keeping its local
//!    id and remote id;
//! 3. otherwise insert a new record under the next local id, carrying the
//!    remote id for future matches.
//!
//! Local records missing from the batch are left alone. Each record is
//! matched and written inside one store transaction against live state, so
//! a remote id repeated within a batch updates the record inserted for its
//! first occurrence instead of inserting twice.

use tracing::{debug, warn};

use super::error::SyncError;
use super::record::{RemoteRecord, RemoteTariff};
use crate::store::{TariffStore, TariffTable};
use crate::tariff::Tariff;

/// Counts from one reconcile pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileReport {
    pub inserted: usize,
    pub updated: usize,
    pub skipped: usize,
}

impl ReconcileReport {
    pub fn merged(&self) -> usize {
        self.inserted + self.updated
    }
}

/// What an upsert did, with the affected local id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upserted {
    Inserted(u64),
    Updated(u64),
}

#[derive(Clone)]
pub struct Reconciler {
    store: TariffStore,
}

impl Reconciler {
    pub fn new(store: TariffStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TariffStore {
        &self.store
    }

    /// Merge `batch` into the store.
    ///
    /// Malformed records are skipped and counted; only a store failure
    /// aborts the pass.
    pub fn reconcile(&self, batch: Vec<RemoteRecord>) -> Result<ReconcileReport, SyncError> {
        let mut report = ReconcileReport::default();

        for (position, record) in batch.into_iter().enumerate() {
            let remote = match record.validate() {
                Ok(remote) => remote,
                Err(e) => {
                    warn!(position, error = %e, "skipping remote tariff");
                    report.skipped += 1;
                    continue;
                }
            };

            let remote_id = remote.remote_id;
            match self.store.transaction(|table| upsert(table, remote))? {
                Upserted::Inserted(id) => {
                    debug!(remote_id, local_id = id, "inserted remote tariff");
                    report.inserted += 1;
                }
                Upserted::Updated(id) => {
                    debug!(remote_id, local_id = id, "updated remote tariff");
                    report.updated += 1;
                }
            }
        }

        Ok(report)
    }
}

/// Upsert one remote tariff keyed by its remote id.
pub fn upsert(table: &mut TariffTable, remote: RemoteTariff) -> Upserted {
    if let Some(id) = table.find_by_remote_id(remote.remote_id).map(|t| t.id) {
        table.update_fields(id, remote.fields);
        return Upserted::Updated(id);
    }

    let id = table.next_id();
    table.put(Tariff {
        id,
        name: remote.fields.name,
        features: remote.fields.features,
        prices: remote.fields.prices,
        remote_id: Some(remote.remote_id),
    });
    Upserted::Inserted(id)
}
