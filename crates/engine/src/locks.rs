use std::collections::HashMap;
use std::sync::Arc;

use fixmatch_core::models::MasterId;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Per-master mutual exclusion for schedule mutations.
///
/// Every mutation of a schedule record is a load-mutate-save cycle over the
/// whole record, and the store offers no compare-and-swap; two unguarded
/// writers on the same master would silently lose one update. Holding the
/// master's lock across the cycle removes that race inside this process.
/// One registry must be shared by every component that mutates the same
/// store. Writers in other processes remain unguarded.
#[derive(Default)]
pub struct MasterLocks {
    locks: Mutex<HashMap<MasterId, Arc<Mutex<()>>>>,
}

impl MasterLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for one master, creating it on first use. The
    /// guard is held across the caller's load-mutate-save cycle.
    pub async fn acquire(&self, master_id: MasterId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks
                .entry(master_id)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}
