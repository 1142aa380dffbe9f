//! Record storage, keyed by record id.
//!
//! Records are already encrypted when they reach the store; the store never
//! sees key material or plaintext.

use std::collections::HashMap;

use envelope::SecureRecord;
use parking_lot::RwLock;

/// Put/get storage of [`SecureRecord`]s.
#[cfg_attr(test, mockall::automock)]
pub trait RecordStore: Send + Sync {
    /// Insert `record` under its own id, replacing any previous entry.
    fn put(&self, record: SecureRecord);

    /// Return a copy of the record stored under `id`, if any.
    fn get(&self, id: &str) -> Option<SecureRecord>;

    /// Number of stored records.
    fn len(&self) -> usize;
}

/// Process-local [`RecordStore`].
///
/// Many concurrent readers, one writer at a time. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<String, SecureRecord>>,
}

impl InMemoryRecordStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn put(&self, record: SecureRecord) {
        self.records.write().insert(record.id.clone(), record);
    }

    fn get(&self, id: &str) -> Option<SecureRecord> {
        self.records.read().get(id).cloned()
    }

    fn len(&self) -> usize {
        self.records.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    fn record(party: &str) -> SecureRecord {
        envelope::encrypt_transaction(party, &json!({"n": 1}), &"ab".repeat(32)).unwrap()
    }

    #[test]
    fn initially_empty() {
        let store = InMemoryRecordStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn put_and_get() {
        let store = InMemoryRecordStore::new();
        let r = record("party_123");
        store.put(r.clone());
        assert_eq!(store.get(&r.id), Some(r));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn put_same_id_replaces() {
        let store = InMemoryRecordStore::new();
        let r = record("a");
        let mut replacement = record("b");
        replacement.id = r.id.clone();
        store.put(r.clone());
        store.put(replacement.clone());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&r.id).unwrap().party_id, "b");
    }

    #[test]
    fn concurrent_writers() {
        let store = Arc::new(InMemoryRecordStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.put(record(&format!("party_{i}"))))
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.len(), 8);
    }
}
