//! TariffStore - shared, lock-guarded handle over a `TariffTable`.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::error::StoreError;
use super::table::TariffTable;
use crate::tariff::{Tariff, TariffFields, TariffInput};

/// In-memory tariff store.
///
/// Clone-friendly via Arc: every clone shares the same table. One lock covers
/// both the records and the id counter, so multi-step sequences run through
/// `transaction` cannot interleave with each other or with single operations.
#[derive(Clone, Default)]
pub struct TariffStore {
    table: Arc<RwLock<TariffTable>>,
}

impl TariffStore {
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(TariffTable::new())),
        }
    }

    fn read(&self, operation: &'static str) -> Result<RwLockReadGuard<'_, TariffTable>, StoreError> {
        self.table
            .read()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }

    fn write(
        &self,
        operation: &'static str,
    ) -> Result<RwLockWriteGuard<'_, TariffTable>, StoreError> {
        self.table
            .write()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }

    /// Run `f` with exclusive access to the table.
    pub fn transaction<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut TariffTable) -> T,
    {
        let mut table = self.write("transaction")?;
        Ok(f(&mut table))
    }

    pub fn next_id(&self) -> Result<u64, StoreError> {
        Ok(self.write("next_id")?.next_id())
    }

    pub fn get(&self, id: u64) -> Result<Option<Tariff>, StoreError> {
        Ok(self.read("get")?.get(id))
    }

    pub fn put(&self, tariff: Tariff) -> Result<(), StoreError> {
        self.write("put")?.put(tariff);
        Ok(())
    }

    /// Returns whether a record existed at `id`.
    pub fn update_fields(&self, id: u64, fields: TariffFields) -> Result<bool, StoreError> {
        Ok(self.write("update_fields")?.update_fields(id, fields))
    }

    pub fn remove(&self, id: u64) -> Result<Option<Tariff>, StoreError> {
        Ok(self.write("remove")?.remove(id))
    }

    pub fn all(&self) -> Result<Vec<Tariff>, StoreError> {
        Ok(self.read("all")?.all())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read("len")?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read("is_empty")?.is_empty())
    }

    pub fn find_by_remote_id(&self, remote_id: u64) -> Result<Option<Tariff>, StoreError> {
        Ok(self.read("find_by_remote_id")?.find_by_remote_id(remote_id).cloned())
    }

    /// Clear all records and restart ids at 1. Test harness use only.
    pub fn reset(&self) -> Result<(), StoreError> {
        self.write("reset")?.reset();
        Ok(())
    }

    /// Create a record from manual input, assigning the next local id.
    pub fn create(&self, input: TariffInput) -> Result<Tariff, StoreError> {
        let mut table = self.write("create")?;
        ensure_remote_id_free(&table, input.remote_id, None)?;
        let id = table.next_id();
        let tariff = input.into_tariff(id);
        table.put(tariff.clone());
        Ok(tariff)
    }

    /// Replace the full record at `id`, including its remote id.
    pub fn replace(&self, id: u64, input: TariffInput) -> Result<Tariff, StoreError> {
        let mut table = self.write("replace")?;
        if !table.contains(id) {
            return Err(StoreError::NotFound(id));
        }
        ensure_remote_id_free(&table, input.remote_id, Some(id))?;
        let tariff = input.into_tariff(id);
        table.put(tariff.clone());
        Ok(tariff)
    }

    pub fn delete(&self, id: u64) -> Result<Tariff, StoreError> {
        self.remove(id)?.ok_or(StoreError::NotFound(id))
    }
}

/// Manual writes may bind a remote id only if no other record holds it.
fn ensure_remote_id_free(
    table: &TariffTable,
    remote_id: Option<u64>,
    owner: Option<u64>,
) -> Result<(), StoreError> {
    let Some(remote_id) = remote_id else {
        return Ok(());
    };
    match table.find_by_remote_id(remote_id) {
        Some(existing) if Some(existing.id) != owner => Err(StoreError::RemoteIdConflict {
            remote_id,
            existing_id: existing.id,
        }),
        _ => Ok(()),
    }
}
