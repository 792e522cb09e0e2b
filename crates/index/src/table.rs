//! Separately-chained hash table with doubling resize.

use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};

use crate::chain::Chain;
use crate::config::TableConfig;
use crate::error::IndexError;
use crate::hasher::DefaultBuildHasher;

/// Hash table mapping keys to owned values.
///
/// - **Placement**: `bucket = hash(key) mod capacity` with a deterministic hasher.
/// - **Collisions**: separate chaining; each bucket owns a [`Chain`].
/// - **Growth**: before every insert, if `size / capacity` exceeds the load
///   factor, capacity doubles and every entry is re-placed. Capacity never
///   shrinks.
pub struct ChainedHashTable<K, V, S = DefaultBuildHasher> {
    buckets: Vec<Chain<K, V>>,
    size: usize,
    load_factor: f64,
    resizes: usize,
    hasher: S,
}

fn empty_buckets<K, V>(capacity: usize) -> Vec<Chain<K, V>> {
    (0..capacity).map(|_| Chain::new()).collect()
}

impl<K, V> ChainedHashTable<K, V, DefaultBuildHasher>
where
    K: Hash + Eq,
{
    /// Table with 8 buckets and a 0.7 load factor.
    pub fn new() -> Self {
        Self::from_valid_config(TableConfig::default(), DefaultBuildHasher::default())
    }

    pub fn with_config(config: TableConfig) -> Result<Self, IndexError> {
        Self::with_config_and_hasher(config, DefaultBuildHasher::default())
    }
}

impl<K, V, S> ChainedHashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    pub fn with_config_and_hasher(config: TableConfig, hasher: S) -> Result<Self, IndexError> {
        config.validate()?;
        Ok(Self::from_valid_config(config, hasher))
    }

    fn from_valid_config(config: TableConfig, hasher: S) -> Self {
        Self {
            buckets: empty_buckets(config.initial_capacity),
            size: 0,
            load_factor: config.load_factor,
            resizes: 0,
            hasher,
        }
    }

    /// Number of live keys.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Current bucket count.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// How many times the table has doubled since construction.
    pub fn resize_count(&self) -> usize {
        self.resizes
    }

    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        (self.hasher.hash_one(key) % self.capacity() as u64) as usize
    }

    /// Insert or overwrite.
    ///
    /// Returns the previous value when `key` was already present; in that case
    /// `len()` is unchanged. May resize before placing the key.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.load_factor() > self.load_factor {
            self.grow();
        }
        self.place(key, value)
    }

    /// Insert without consulting the load factor. The rebuild in [`Self::grow`]
    /// goes through here so a resize can never trigger another one.
    fn place(&mut self, key: K, value: V) -> Option<V> {
        let idx = self.bucket_index(&key);
        let chain = &mut self.buckets[idx];
        if let Some(slot) = chain.get_mut(&key) {
            return Some(core::mem::replace(slot, value));
        }
        chain.push_back(key, value);
        self.size += 1;
        None
    }

    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity * 2;
        let live = self.size;

        let old_buckets = core::mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        self.size = 0;
        for chain in old_buckets {
            for node in chain {
                self.place(node.key, node.value);
            }
        }
        self.resizes += 1;

        debug_assert_eq!(self.size, live, "rebuild lost or duplicated entries");
        tracing::debug!(old_capacity, new_capacity, size = self.size, "index resized");
    }

    pub fn search<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets[self.bucket_index(key)].get(key)
    }

    pub fn search_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        self.buckets[idx].get_mut(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Unlink `key` and hand back its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        let node = self.buckets[idx].unlink(key)?;
        self.size -= 1;
        Some(node.value)
    }

    /// `true` if `key` was present and is now gone.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove(key).is_some()
    }
}

impl<K, V, S> ChainedHashTable<K, V, S> {
    /// Every entry, bucket by bucket, head to tail within a bucket.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets.iter().flat_map(|chain| chain.iter())
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    /// Chain length per bucket, in bucket order.
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(Chain::len).collect()
    }
}

impl<K, V> Default for ChainedHashTable<K, V, DefaultBuildHasher>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> core::fmt::Debug for ChainedHashTable<K, V, S>
where
    K: core::fmt::Debug,
    V: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn table() -> ChainedHashTable<String, i64> {
        ChainedHashTable::new()
    }

    /// Keys whose bucket under `capacity` is `bucket`.
    fn colliding_keys(capacity: usize, bucket: usize, count: usize) -> Vec<String> {
        (0..)
            .map(|i| format!("key-{i}"))
            .filter(|k| (DefaultBuildHasher::default().hash_one(k.as_str()) % capacity as u64) as usize == bucket)
            .take(count)
            .collect()
    }

    #[test]
    fn starts_empty_with_eight_buckets() {
        let t = table();
        assert_eq!(t.capacity(), 8);
        assert_eq!(t.len(), 0);
        assert!(t.is_empty());
        assert_eq!(t.iter().count(), 0);
    }

    #[test]
    fn insert_then_search() {
        let mut t = table();
        assert_eq!(t.insert("Screwdriver".to_string(), 50), None);
        assert_eq!(t.search("Screwdriver"), Some(&50));
        assert_eq!(t.search("Hammer"), None);
        assert!(t.contains_key("Screwdriver"));
    }

    #[test]
    fn reinserting_a_key_overwrites_without_growing() {
        let mut t = table();
        t.insert("Paint".to_string(), 20);
        assert_eq!(t.insert("Paint".to_string(), 25), Some(20));
        assert_eq!(t.len(), 1);
        assert_eq!(t.search("Paint"), Some(&25));
    }

    #[test]
    fn delete_absent_key_is_a_no_op() {
        let mut t = table();
        t.insert("Brush".to_string(), 25);
        assert!(!t.delete("Ladder"));
        assert_eq!(t.len(), 1);
        assert_eq!(t.search("Brush"), Some(&25));
    }

    #[test]
    fn delete_present_key_makes_it_unfindable() {
        let mut t = table();
        t.insert("Hammer".to_string(), 30);
        assert!(t.delete("Hammer"));
        assert_eq!(t.search("Hammer"), None);
        assert!(t.is_empty());
        assert!(!t.delete("Hammer"));
    }

    #[test]
    fn collisions_chain_in_insertion_order() {
        let keys = colliding_keys(8, 3, 4);
        let mut t = table();
        for (i, k) in keys.iter().enumerate() {
            t.insert(k.clone(), i as i64);
        }
        assert_eq!(t.chain_lengths()[3], 4);
        let order: Vec<_> = t.keys().cloned().collect();
        assert_eq!(order, keys);
    }

    #[test]
    fn unlink_from_middle_of_chain_keeps_neighbours() {
        let keys = colliding_keys(8, 5, 3);
        let mut t = table();
        for (i, k) in keys.iter().enumerate() {
            t.insert(k.clone(), i as i64);
        }
        assert!(t.delete(keys[1].as_str()));
        assert_eq!(t.search(keys[0].as_str()), Some(&0));
        assert_eq!(t.search(keys[2].as_str()), Some(&2));
        assert_eq!(t.chain_lengths()[5], 2);
    }

    #[test]
    fn resize_fires_once_load_factor_is_exceeded_before_insert() {
        let mut t = table();
        // 6 entries: 5/8 = 0.625 was checked before the sixth, so no resize.
        for i in 0..6 {
            t.insert(format!("item-{i}"), i);
        }
        assert_eq!(t.capacity(), 8);
        assert_eq!(t.resize_count(), 0);

        // 6/8 = 0.75 > 0.7 is checked before the seventh.
        t.insert("item-6".to_string(), 6);
        assert_eq!(t.capacity(), 16);
        assert_eq!(t.resize_count(), 1);
        assert_eq!(t.len(), 7);
        for i in 0..7 {
            assert_eq!(t.search(format!("item-{i}").as_str()), Some(&i));
        }
    }

    #[test]
    fn overwrite_can_still_trigger_resize() {
        let mut t = table();
        for i in 0..6 {
            t.insert(format!("item-{i}"), i);
        }
        t.insert("item-0".to_string(), 100);
        assert_eq!(t.capacity(), 16);
        assert_eq!(t.len(), 6);
        assert_eq!(t.search("item-0"), Some(&100));
    }

    #[test]
    fn rebuild_does_not_cascade() {
        let mut t = table();
        for i in 0..100 {
            t.insert(format!("item-{i}"), i);
        }
        assert_eq!((t.capacity(), t.resize_count()), (256, 5));
        assert_eq!(t.len(), 100);
    }

    #[test]
    fn rebuild_skips_load_factor_check_with_tight_threshold() {
        // At 0.1 any rebuild that re-checked the load factor would nest a
        // second resize while re-placing the old entries.
        let mut t: ChainedHashTable<String, i64> =
            ChainedHashTable::with_config(TableConfig::new(2, 0.1)).unwrap();
        t.insert("a".to_string(), 1);
        assert_eq!((t.capacity(), t.resize_count()), (2, 0));

        // 1/2 > 0.1: one doubling to 4.
        t.insert("b".to_string(), 2);
        assert_eq!((t.capacity(), t.resize_count()), (4, 1));

        // 2/4 > 0.1: one doubling to 8, no more.
        t.insert("c".to_string(), 3);
        assert_eq!((t.capacity(), t.resize_count()), (8, 2));

        assert_eq!(t.len(), 3);
        assert_eq!(t.search("a"), Some(&1));
        assert_eq!(t.search("b"), Some(&2));
        assert_eq!(t.search("c"), Some(&3));
    }

    #[test]
    fn custom_config_is_honoured() {
        let mut t: ChainedHashTable<String, i64> =
            ChainedHashTable::with_config(TableConfig::new(2, 0.5)).unwrap();
        t.insert("a".to_string(), 1);
        t.insert("b".to_string(), 2);
        assert_eq!(t.capacity(), 2);
        // 2/2 = 1.0 > 0.5
        t.insert("c".to_string(), 3);
        assert_eq!(t.capacity(), 4);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let res: Result<ChainedHashTable<String, i64>, _> =
            ChainedHashTable::with_config(TableConfig::new(0, 0.7));
        assert!(matches!(res, Err(IndexError::InvalidConfig(_))));
    }

    #[test]
    fn capacity_never_shrinks() {
        let mut t = table();
        for i in 0..20 {
            t.insert(format!("item-{i}"), i);
        }
        let grown = t.capacity();
        for i in 0..20 {
            assert!(t.delete(format!("item-{i}").as_str()));
        }
        assert!(t.is_empty());
        assert_eq!(t.capacity(), grown);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u8, i64),
        Delete(u8),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..48, any::<i64>()).prop_map(|(k, v)| Op::Insert(k, v)),
            (0u8..48).prop_map(Op::Delete),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after any insert/delete sequence the table agrees with a
        /// reference map, and `len()` equals a full-scan count.
        #[test]
        fn behaves_like_a_map(ops in prop::collection::vec(op_strategy(), 0..200)) {
            let mut t: ChainedHashTable<String, i64> = ChainedHashTable::new();
            let mut model: HashMap<String, i64> = HashMap::new();

            for op in ops {
                match op {
                    Op::Insert(k, v) => {
                        let key = format!("k{k}");
                        prop_assert_eq!(t.insert(key.clone(), v), model.insert(key, v));
                    }
                    Op::Delete(k) => {
                        let key = format!("k{k}");
                        prop_assert_eq!(t.delete(key.as_str()), model.remove(&key).is_some());
                    }
                }
                prop_assert_eq!(t.len(), t.iter().count());
                prop_assert_eq!(t.len(), model.len());
            }

            for (k, v) in &model {
                prop_assert_eq!(t.search(k.as_str()), Some(v));
            }
            prop_assert!(t.capacity().is_power_of_two());
        }

        /// Property: every key sits in the bucket its hash selects.
        #[test]
        fn keys_live_in_their_home_bucket(keys in prop::collection::hash_set("[a-z]{1,12}", 0..64)) {
            let mut t: ChainedHashTable<String, ()> = ChainedHashTable::new();
            for k in &keys {
                t.insert(k.clone(), ());
            }
            let cap = t.capacity() as u64;
            let mut seen = 0;
            for (bucket, chain) in t.buckets.iter().enumerate() {
                for (k, _) in chain.iter() {
                    prop_assert_eq!((DefaultBuildHasher::default().hash_one(k.as_str()) % cap) as usize, bucket);
                    seen += 1;
                }
            }
            prop_assert_eq!(seen, keys.len());
        }
    }
}
