//! Record store - the authoritative local id to tariff mapping.
//!
//! `TariffTable` holds the records and the id counter without any locking.
//! `TariffStore` wraps it in a single `RwLock` and is the handle passed to
//! every collaborator (HTTP handlers, the reconciler, the sync worker).
//!
//! ## Example
//!
//! ```ignore
//! use tariff_sync::{TariffInput, TariffStore};
//!
//! let store = TariffStore::new();
//! let tariff = store.create(TariffInput::named("Basic").with_price("monthly", 19.0))?;
//!
//! // Multi-step sequences go through one transaction.
//! let bound = store.transaction(|table| table.find_by_remote_id(5001).map(|t| t.id))?;
//! ```

mod error;
mod in_memory;
mod table;

pub use error::StoreError;
pub use in_memory::TariffStore;
pub use table::TariffTable;
