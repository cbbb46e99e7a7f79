//! Reconciliation running alongside manual creates and replaces.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use tariff_sync::{Reconciler, StoreError, TariffInput, TariffStore};

use crate::support::{by_remote_id, remote};

const REMOTE_IDS: [u64; 8] = [5001, 5002, 5003, 5004, 5005, 5006, 5007, 5008];
const SYNC_RUNS: usize = 200;

fn tolerate_conflict<T>(result: Result<T, StoreError>) {
    match result {
        Ok(_) | Err(StoreError::RemoteIdConflict { .. }) | Err(StoreError::NotFound(_)) => {}
        Err(e) => panic!("unexpected store error: {e}"),
    }
}

#[test]
fn sync_racing_manual_writes_keeps_remote_ids_unique() {
    let store = TariffStore::new();
    let done = Arc::new(AtomicBool::new(false));

    let syncer = thread::spawn({
        let reconciler = Reconciler::new(store.clone());
        let done = done.clone();
        move || {
            for run in 0..SYNC_RUNS {
                let batch = REMOTE_IDS
                    .iter()
                    .map(|&id| remote(id, &format!("remote {id} run {run}")))
                    .collect();
                reconciler.reconcile(batch).unwrap();
            }
            done.store(true, Ordering::SeqCst);
        }
    });

    let writers: Vec<_> = (0..4u64)
        .map(|writer| {
            let store = store.clone();
            let done = done.clone();
            thread::spawn(move || {
                let mut round = 0usize;
                while !done.load(Ordering::SeqCst) {
                    let remote_id = REMOTE_IDS[(round + writer as usize) % REMOTE_IDS.len()];
                    tolerate_conflict(store.create(
                        TariffInput::named(format!("manual {writer}")).with_remote_id(remote_id),
                    ));

                    let target = (round as u64 % 16) + 1;
                    tolerate_conflict(store.replace(
                        target,
                        TariffInput::named(format!("replaced by {writer}")).with_remote_id(remote_id),
                    ));
                    round += 1;
                }
            })
        })
        .collect();

    syncer.join().unwrap();
    for writer in writers {
        writer.join().unwrap();
    }

    for (remote_id, holders) in by_remote_id(&store) {
        assert_eq!(holders.len(), 1, "remote id {remote_id} held by {holders:?}");
    }

    // One more sync settles every remote id onto exactly one record.
    Reconciler::new(store.clone())
        .reconcile(REMOTE_IDS.iter().map(|&id| remote(id, "final")).collect())
        .unwrap();
    let grouped = by_remote_id(&store);
    for remote_id in REMOTE_IDS {
        assert_eq!(grouped[&remote_id].len(), 1);
        assert_eq!(grouped[&remote_id][0].name, "final");
    }
}
