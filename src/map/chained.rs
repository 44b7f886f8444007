//! The fixed-capacity chained hash map.

use std::borrow::Borrow;

use crate::map::{BucketHash, Djb2Hash};

/// A (key, value) pair stored in a bucket.
#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// A hash map with a fixed number of buckets and chained collision
/// resolution.
///
/// The bucket count is set at construction and never changes; as the
/// number of keys grows past it, lookups degrade from O(1) average
/// toward a linear scan of the longest chain. Exactly one entry exists
/// per distinct key: inserting an existing key overwrites its value in
/// place.
///
/// Bucket selection is delegated to a [`BucketHash`] strategy;
/// [`Djb2Hash`] is the default for string-like keys.
#[derive(Debug, Clone)]
pub struct ChainedMap<K, V, H = Djb2Hash> {
    buckets: Vec<Vec<Entry<K, V>>>,
    len: usize,
    hasher: H,
}

impl<K, V> ChainedMap<K, V> {
    /// Creates an empty map with `bucket_count` buckets and the default
    /// djb2 strategy.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.
    pub fn new(bucket_count: usize) -> Self {
        Self::with_hasher(bucket_count, Djb2Hash)
    }
}

impl<K, V, H> ChainedMap<K, V, H> {
    /// Creates an empty map with `bucket_count` buckets and a custom
    /// bucket selection strategy.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.
    pub fn with_hasher(bucket_count: usize, hasher: H) -> Self {
        assert!(bucket_count > 0, "bucket_count must be at least 1");
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, Vec::new);
        Self {
            buckets,
            len: 0,
            hasher,
        }
    }

    /// Returns the number of distinct keys currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the map holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the fixed bucket count chosen at construction.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Removes all entries from all buckets. Idempotent; the bucket
    /// count is unchanged.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Iterates over all (key, value) pairs in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|entry| (&entry.key, &entry.value)))
    }

    /// Returns occupancy statistics for the table.
    pub fn stats(&self) -> MapStats {
        let occupied = self.buckets.iter().filter(|b| !b.is_empty()).count();
        let max_chain = self.buckets.iter().map(Vec::len).max().unwrap_or(0);
        let avg_chain = if occupied > 0 {
            self.len as f64 / occupied as f64
        } else {
            0.0
        };

        MapStats {
            distinct_keys: self.len,
            bucket_count: self.buckets.len(),
            occupied_buckets: occupied,
            max_chain_len: max_chain,
            avg_chain_len: avg_chain,
        }
    }
}

impl<K: Eq, V, H: BucketHash<K>> ChainedMap<K, V, H> {
    /// Inserts `value` under `key`.
    ///
    /// If the key is absent a new entry is appended to its bucket; if it
    /// is present the stored value is overwritten in place. Never
    /// duplicates a key.
    pub fn insert(&mut self, key: K, value: V) {
        let idx = self.hasher.bucket(&key, self.buckets.len());
        let bucket = &mut self.buckets[idx];

        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
            entry.value = value;
        } else {
            bucket.push(Entry { key, value });
            self.len += 1;
        }
    }

    /// Looks up `key` without mutating the map.
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: BucketHash<Q>,
    {
        let idx = self.hasher.bucket(key, self.buckets.len());
        self.buckets[idx]
            .iter()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &entry.value)
    }

    /// Looks up `key` for mutation without inserting anything.
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: BucketHash<Q>,
    {
        let idx = self.hasher.bucket(key, self.buckets.len());
        self.buckets[idx]
            .iter_mut()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &mut entry.value)
    }

    /// Pure membership test.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: BucketHash<Q>,
    {
        self.find(key).is_some()
    }

    /// Returns the value for `key`, inserting `V::default()` first if the
    /// key is absent.
    ///
    /// This is the explicit, opt-in spelling of auto-vivification: after
    /// the call the key is present and counted by [`len`](Self::len) even
    /// if the caller only meant to read. Use [`find`](Self::find) for a
    /// non-mutating lookup.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let idx = self.hasher.bucket(&key, self.buckets.len());
        let bucket = &mut self.buckets[idx];

        let pos = bucket.iter().position(|entry| entry.key == key);
        let pos = match pos {
            Some(pos) => pos,
            None => {
                bucket.push(Entry {
                    key,
                    value: V::default(),
                });
                self.len += 1;
                bucket.len() - 1
            }
        };
        &mut bucket[pos].value
    }
}

/// Occupancy statistics for a [`ChainedMap`].
#[derive(Debug, Clone)]
pub struct MapStats {
    /// Number of distinct keys stored.
    pub distinct_keys: usize,
    /// Fixed bucket count.
    pub bucket_count: usize,
    /// Number of buckets holding at least one entry.
    pub occupied_buckets: usize,
    /// Length of the longest chain.
    pub max_chain_len: usize,
    /// Average chain length over occupied buckets.
    pub avg_chain_len: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_find() {
        let mut map: ChainedMap<String, u32> = ChainedMap::new(101);
        map.insert("alpha".to_string(), 1);
        map.insert("beta".to_string(), 2);

        assert_eq!(map.len(), 2);
        assert_eq!(map.find("alpha"), Some(&1));
        assert_eq!(map.find("beta"), Some(&2));
        assert!(map.contains("alpha"));
    }

    #[test]
    fn test_insert_overwrites() {
        let mut map: ChainedMap<String, u32> = ChainedMap::new(101);
        map.insert("key".to_string(), 1);
        map.insert("key".to_string(), 7);

        assert_eq!(map.len(), 1);
        assert_eq!(map.find("key"), Some(&7));
    }

    #[test]
    fn test_find_does_not_mutate() {
        let mut map: ChainedMap<String, u32> = ChainedMap::new(101);
        map.insert("present".to_string(), 1);

        assert_eq!(map.find("absent"), None);
        assert!(!map.contains("absent"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_get_or_insert_default_creates() {
        let mut map: ChainedMap<String, Vec<u32>> = ChainedMap::new(101);

        let list = map.get_or_insert_default("fresh".to_string());
        assert!(list.is_empty());
        list.push(42);

        assert_eq!(map.len(), 1);
        assert!(map.contains("fresh"));
        assert_eq!(map.find("fresh"), Some(&vec![42]));

        // A second call reuses the existing entry.
        map.get_or_insert_default("fresh".to_string()).push(43);
        assert_eq!(map.len(), 1);
        assert_eq!(map.find("fresh"), Some(&vec![42, 43]));
    }

    #[test]
    fn test_clear() {
        let mut map: ChainedMap<String, u32> = ChainedMap::new(101);
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);

        map.clear();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert!(!map.contains("a"));
        assert!(!map.contains("b"));
        assert_eq!(map.bucket_count(), 101);

        // Idempotent.
        map.clear();
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_collision_isolation() {
        // A single bucket forces every key onto one chain.
        let mut map: ChainedMap<String, u32> = ChainedMap::new(1);
        map.insert("first".to_string(), 10);
        map.insert("second".to_string(), 20);
        map.insert("third".to_string(), 30);

        assert_eq!(map.len(), 3);
        assert_eq!(map.find("first"), Some(&10));
        assert_eq!(map.find("second"), Some(&20));
        assert_eq!(map.find("third"), Some(&30));

        map.insert("second".to_string(), 21);
        assert_eq!(map.len(), 3);
        assert_eq!(map.find("first"), Some(&10));
        assert_eq!(map.find("second"), Some(&21));
        assert_eq!(map.find("third"), Some(&30));
    }

    #[test]
    fn test_find_mut() {
        let mut map: ChainedMap<String, u32> = ChainedMap::new(101);
        map.insert("count".to_string(), 1);

        *map.find_mut("count").unwrap() += 1;
        assert_eq!(map.find("count"), Some(&2));
        assert_eq!(map.find_mut("missing"), None);
    }

    #[test]
    fn test_stats_totals() {
        let mut map: ChainedMap<String, u32> = ChainedMap::new(7);
        for (i, key) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            map.insert(key.to_string(), i as u32);
        }

        let stats = map.stats();
        assert_eq!(stats.distinct_keys, 5);
        assert_eq!(stats.bucket_count, 7);
        assert!(stats.occupied_buckets <= 5);
        assert!(stats.max_chain_len >= 1);

        // Entries across all buckets must equal the reported key count.
        assert_eq!(map.iter().count(), map.len());
    }

    #[test]
    fn test_custom_hasher() {
        struct FirstByte;

        impl BucketHash<String> for FirstByte {
            fn bucket(&self, key: &String, bucket_count: usize) -> usize {
                key.as_bytes().first().copied().unwrap_or(0) as usize % bucket_count
            }
        }

        impl BucketHash<str> for FirstByte {
            fn bucket(&self, key: &str, bucket_count: usize) -> usize {
                key.as_bytes().first().copied().unwrap_or(0) as usize % bucket_count
            }
        }

        let mut map: ChainedMap<String, u32, FirstByte> = ChainedMap::with_hasher(4, FirstByte);
        // "ant" and "axe" share a first byte, so they share a bucket.
        map.insert("ant".to_string(), 1);
        map.insert("axe".to_string(), 2);

        assert_eq!(map.find("ant"), Some(&1));
        assert_eq!(map.find("axe"), Some(&2));
        assert_eq!(map.stats().max_chain_len, 2);
    }

    #[test]
    #[should_panic(expected = "bucket_count")]
    fn test_zero_buckets_panics() {
        let _map: ChainedMap<String, u32> = ChainedMap::new(0);
    }
}
