pub mod config;
pub mod dummy;
#[cfg(feature = "http")]
pub mod http;
mod store;
pub mod sync;
mod tariff;

pub use config::{AppConfig, SyncConfig};
pub use store::{StoreError, TariffStore, TariffTable};
pub use sync::{
    HttpRemoteSource, ReconcileReport, Reconciler, RemoteFetchError, RemoteRecord, RemoteSource,
    SyncError, SyncService, SyncStats, SyncWorkerThread,
};
pub use tariff::{Prices, Tariff, TariffFields, TariffInput};
