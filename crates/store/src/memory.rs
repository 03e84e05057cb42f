use std::collections::HashMap;
use std::sync::RwLock;

use staffhub_core::RecordId;

/// In-memory record store for dev/test.
///
/// Lock poisoning degrades to "not found"/empty rather than propagating a
/// panic across requests; these stores hold disposable data.
#[derive(Debug)]
pub struct InMemoryRecordStore<T> {
    inner: RwLock<HashMap<RecordId, T>>,
}

impl<T> InMemoryRecordStore<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> Default for InMemoryRecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> InMemoryRecordStore<T> {
    pub fn get(&self, id: RecordId) -> Option<T> {
        let map = self.inner.read().ok()?;
        map.get(&id).cloned()
    }

    pub fn insert(&self, id: RecordId, record: T) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(id, record);
        }
    }

    /// Apply `f` to the stored record, if present.
    pub fn update<F>(&self, id: RecordId, f: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut map = self.inner.write().ok()?;
        let record = map.get_mut(&id)?;
        f(record);
        Some(record.clone())
    }

    pub fn remove(&self, id: RecordId) -> Option<T> {
        let mut map = self.inner.write().ok()?;
        map.remove(&id)
    }

    pub fn list_where<F>(&self, mut predicate: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };
        map.values().filter(|r| predicate(r)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crud_round_trip() {
        let store: InMemoryRecordStore<String> = InMemoryRecordStore::new();
        let id = RecordId::new();

        assert_eq!(store.get(id), None);
        store.insert(id, "draft".to_string());
        assert_eq!(store.get(id).as_deref(), Some("draft"));

        store.update(id, |v| v.push_str("-final"));
        assert_eq!(store.get(id).as_deref(), Some("draft-final"));

        assert_eq!(store.remove(id).as_deref(), Some("draft-final"));
        assert_eq!(store.get(id), None);
    }

    #[test]
    fn list_where_filters() {
        let store: InMemoryRecordStore<i32> = InMemoryRecordStore::new();
        for n in [1, 2, 3, 4] {
            store.insert(RecordId::new(), n);
        }
        let mut evens = store.list_where(|n| n % 2 == 0);
        evens.sort();
        assert_eq!(evens, vec![2, 4]);
    }

    #[test]
    fn update_missing_record_is_none() {
        let store: InMemoryRecordStore<i32> = InMemoryRecordStore::new();
        assert_eq!(store.update(RecordId::new(), |n| *n += 1), None);
    }
}
