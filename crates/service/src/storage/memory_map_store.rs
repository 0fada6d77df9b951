use std::{collections::HashMap, hash::Hash};
use tokio::sync::Mutex;

/// Generic in-memory key-value map guarded by one mutex.
///
/// Reads and writes alike take the same lock, and each helper holds it only
/// across the map access itself. Values are cloned out so no caller ever
/// observes the map after the lock is released.
pub struct MemoryMapStore<K, V> {
    inner: Mutex<HashMap<K, V>>,
}

impl<K, V> Default for MemoryMapStore<K, V> {
    fn default() -> Self {
        Self { inner: Mutex::new(HashMap::new()) }
    }
}

impl<K, V> MemoryMapStore<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot all values. Order follows the map's iteration order.
    pub async fn values(&self) -> Vec<V> {
        let map = self.inner.lock().await;
        map.values().cloned().collect()
    }

    /// Get value by key.
    pub async fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let map = self.inner.lock().await;
        map.get(key).cloned()
    }

    /// Insert or overwrite; returns the previous value.
    pub async fn insert(&self, key: K, value: V) -> Option<V> {
        let mut map = self.inner.lock().await;
        map.insert(key, value)
    }

    /// Remove a key; returns the removed value.
    pub async fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let mut map = self.inner.lock().await;
        map.remove(key)
    }

    /// Mutate an existing value in place and return a copy of the result.
    /// Lookup and mutation happen under one lock acquisition.
    pub async fn modify<Q, F>(&self, key: &Q, f: F) -> Option<V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        F: FnOnce(&mut V),
    {
        let mut map = self.inner.lock().await;
        let value = map.get_mut(key)?;
        f(&mut *value);
        Some(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn memory_map_store_crud() -> Result<(), anyhow::Error> {
        let store = MemoryMapStore::<String, String>::new();

        // initially empty
        assert!(store.values().await.is_empty());

        assert_eq!(store.insert("a".into(), "1".into()).await, None);
        assert_eq!(store.insert("b".into(), "2".into()).await, None);
        assert_eq!(store.insert("a".into(), "3".into()).await.as_deref(), Some("1"));
        assert_eq!(store.get("a").await.as_deref(), Some("3"));
        assert_eq!(store.values().await.len(), 2);

        let updated = store.modify("b", |v| v.push('0')).await;
        assert_eq!(updated.as_deref(), Some("20"));
        assert_eq!(store.get("b").await.as_deref(), Some("20"));

        assert_eq!(store.modify("missing", |v| v.clear()).await, None);
        assert_eq!(store.values().await.len(), 2);

        assert_eq!(store.remove("a").await.as_deref(), Some("3"));
        assert_eq!(store.remove("a").await, None);
        assert_eq!(store.values().await, vec!["20".to_string()]);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_are_not_lost() -> Result<(), anyhow::Error> {
        let store = Arc::new(MemoryMapStore::<u32, u32>::new());
        let mut handles = Vec::new();
        for i in 0..200u32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move { store.insert(i, i * 2).await }));
        }
        for h in handles {
            h.await?;
        }
        assert_eq!(store.values().await.len(), 200);
        assert_eq!(store.get(&150).await, Some(300));
        Ok(())
    }
}
