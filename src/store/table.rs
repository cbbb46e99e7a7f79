//! TariffTable - the unlocked record table and id generator.

use std::collections::BTreeMap;

use crate::tariff::{Tariff, TariffFields};

/// Records keyed by local id, plus the id counter.
///
/// Iteration is in ascending local id, which for generated ids is insertion
/// order. Not synchronized; reach it through `TariffStore`.
#[derive(Debug)]
pub struct TariffTable {
    tariffs: BTreeMap<u64, Tariff>,
    next_id: u64,
}

impl Default for TariffTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TariffTable {
    pub fn new() -> Self {
        Self {
            tariffs: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Hand out the next local id. Ids start at 1 and are never reused,
    /// even after the record holding one is removed.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn get(&self, id: u64) -> Option<Tariff> {
        self.tariffs.get(&id).cloned()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.tariffs.contains_key(&id)
    }

    /// Insert or overwrite the entry at `tariff.id`.
    ///
    /// Remote id uniqueness is not checked here.
    pub fn put(&mut self, tariff: Tariff) {
        self.tariffs.insert(tariff.id, tariff);
    }

    /// Replace name, features and prices of the record at `id`.
    /// Returns `false` (and does nothing) when there is no such record.
    pub fn update_fields(&mut self, id: u64, fields: TariffFields) -> bool {
        match self.tariffs.get_mut(&id) {
            Some(existing) => {
                existing.apply(fields);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> Option<Tariff> {
        self.tariffs.remove(&id)
    }

    pub fn all(&self) -> Vec<Tariff> {
        self.tariffs.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.tariffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tariffs.is_empty()
    }

    /// First record (lowest local id) bound to `remote_id`.
    pub fn find_by_remote_id(&self, remote_id: u64) -> Option<&Tariff> {
        self.tariffs
            .values()
            .find(|tariff| tariff.remote_id == Some(remote_id))
    }

    /// Drop every record and restart ids at 1.
    pub fn reset(&mut self) {
        self.tariffs.clear();
        self.next_id = 1;
    }
}
