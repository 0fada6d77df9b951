use std::{borrow::Borrow, hash::Hash};

use dashmap::DashMap;

/// Key-value map sharded by key hash.
///
/// Same surface as [`super::MemoryMapStore`], but operations on keys that land
/// in different shards do not contend. Per-key operations stay atomic: each
/// one holds its shard lock for the whole lookup and mutation.
pub struct ShardedMapStore<K, V>
where
    K: Eq + Hash,
{
    inner: DashMap<K, V>,
}

impl<K, V> Default for ShardedMapStore<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self { inner: DashMap::new() }
    }
}

impl<K, V> ShardedMapStore<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot all values shard by shard. A write racing with the snapshot
    /// may or may not be included.
    pub fn values(&self) -> Vec<V> {
        self.inner.iter().map(|entry| entry.value().clone()).collect()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.inner.get(key).map(|v| v.value().clone())
    }

    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.inner.insert(key, value)
    }

    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.inner.remove(key).map(|(_, v)| v)
    }

    /// Mutate an existing value while holding its shard's write lock.
    pub fn modify<Q, F>(&self, key: &Q, f: F) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        F: FnOnce(&mut V),
    {
        let mut entry = self.inner.get_mut(key)?;
        f(entry.value_mut());
        Some(entry.value().clone())
    }
}
