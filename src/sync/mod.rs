//! Tariff sync - pulls the remote feed and upserts it into the store.
//!
//! The pieces, leaves first:
//!
//! - `RemoteSource` produces a batch of `RemoteRecord`s (`HttpRemoteSource`
//!   reads it from a JSON endpoint);
//! - `Reconciler` merges a batch into a `TariffStore`, keyed by remote id;
//! - `SyncService` runs one fetch-then-reconcile cycle and refuses to start
//!   a second while one is in flight;
//! - `SyncWorkerThread` triggers cycles at a fixed rate and keeps stats.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tariff_sync::sync::{Reconciler, RemoteRecord};
//! use tariff_sync::TariffStore;
//!
//! let store = TariffStore::new();
//! let reconciler = Reconciler::new(store.clone());
//!
//! let report = reconciler.reconcile(vec![
//!     RemoteRecord::new(100, "A").with_feature("f").with_price("monthly", 10.0),
//! ])?;
//! assert_eq!(report.inserted, 1);
//! assert_eq!(store.find_by_remote_id(100)?.unwrap().id, 1);
//! ```

mod error;
mod reconciler;
mod record;
mod service;
mod source;
mod thread;

pub use error::{RemoteFetchError, SyncError};
pub use reconciler::{upsert, ReconcileReport, Reconciler, Upserted};
pub use record::{RemoteRecord, RemoteTariff};
pub use service::SyncService;
pub use source::{HttpRemoteSource, RemoteSource};
pub use thread::{SyncStats, SyncWorkerThread};
