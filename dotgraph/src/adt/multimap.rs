//! This module implements a multi-map that keeps its values in an arena.

use indexmap::{Equivalent, IndexMap};
use std::hash::Hash;

/// Stores values in insertion order and indexes them by a key that may repeat.
/// Removed values leave an empty slot behind. Once most slots are empty the
/// arena is compacted, which renumbers the live values but keeps their order.
#[derive(Debug, Clone)]
pub struct MultiMap<K, V> {
    slots: Vec<Option<V>>,
    index: IndexMap<K, Vec<usize>>,
}

impl<K: Hash + Eq, V> Default for MultiMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> MultiMap<K, V> {
    pub fn new() -> Self {
        MultiMap {
            slots: Vec::new(),
            index: IndexMap::new(),
        }
    }

    /// Adds \p value under \p key and returns its arena index.
    pub fn insert(&mut self, key: K, value: V) -> usize {
        let idx = self.slots.len();
        self.slots.push(Some(value));
        self.index.entry(key).or_insert_with(Vec::new).push(idx);
        idx
    }

    /// Returns the values that were stored under \p key, oldest first.
    pub fn get<Q>(&self, key: &Q) -> Vec<&V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        match self.index.get(key) {
            Some(indices) => indices
                .iter()
                .filter_map(|idx| self.slots[*idx].as_ref())
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn count<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.index.get(key).map_or(0, |indices| indices.len())
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.index.contains_key(key)
    }

    /// Removes the value at \p position among the values of \p key, or all of
    /// them if no position is given. Returns false if nothing was removed.
    pub fn remove<Q>(&mut self, key: &Q, position: Option<usize>) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let indices = match self.index.get_mut(key) {
            Some(indices) => indices,
            None => return false,
        };

        match position {
            Some(pos) => {
                if pos >= indices.len() {
                    return false;
                }
                let idx = indices.remove(pos);
                self.slots[idx] = None;
            }
            None => {
                for idx in indices.drain(..) {
                    self.slots[idx] = None;
                }
            }
        }

        if indices.is_empty() {
            self.index.shift_remove(key);
        }
        if self.slots.len() > 2 * self.len() {
            self.compact();
        }
        true
    }

    // Drops the empty slots and renumbers the indices.
    fn compact(&mut self) {
        let mut remap = vec![0; self.slots.len()];
        let mut slots = Vec::with_capacity(self.len());
        let old_slots = std::mem::take(&mut self.slots);
        for (old, slot) in old_slots.into_iter().enumerate() {
            if slot.is_some() {
                remap[old] = slots.len();
                slots.push(slot);
            }
        }
        self.slots = slots;
        for indices in self.index.values_mut() {
            for idx in indices.iter_mut() {
                *idx = remap[*idx];
            }
        }
    }

    /// Iterates over the live values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }

    /// Iterates over the live values grouped by key, in the order the keys
    /// were first inserted.
    pub fn grouped(&self) -> impl Iterator<Item = &V> + '_ {
        self.index
            .values()
            .flat_map(move |indices| indices.iter())
            .filter_map(move |idx| self.slots[*idx].as_ref())
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.index.keys()
    }

    /// Returns the number of live values.
    pub fn len(&self) -> usize {
        self.index.values().map(|indices| indices.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[test]
fn test_multimap() {
    let mut map: MultiMap<String, usize> = MultiMap::new();
    map.insert("a".to_string(), 1);
    map.insert("b".to_string(), 2);
    map.insert("a".to_string(), 3);
    assert_eq!(map.len(), 3);
    assert_eq!(map.get("a"), vec![&1, &3]);
    assert_eq!(map.count("b"), 1);
    assert!(map.get("c").is_empty());

    let in_order: Vec<&usize> = map.values().collect();
    assert_eq!(in_order, vec![&1, &2, &3]);
    let grouped: Vec<&usize> = map.grouped().collect();
    assert_eq!(grouped, vec![&1, &3, &2]);
}

#[test]
fn test_multimap_remove() {
    let mut map: MultiMap<String, usize> = MultiMap::new();
    map.insert("a".to_string(), 1);
    map.insert("a".to_string(), 2);
    map.insert("b".to_string(), 3);

    assert!(!map.remove("a", Some(5)));
    assert!(map.remove("a", Some(0)));
    assert_eq!(map.get("a"), vec![&2]);
    assert!(map.remove("a", None));
    assert!(!map.contains_key("a"));
    assert!(!map.remove("a", None));
    assert_eq!(map.values().collect::<Vec<_>>(), vec![&3]);

    // Two of the three slots were empty, so the arena was compacted.
    let idx = map.insert("a".to_string(), 4);
    assert_eq!(idx, 1);
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(map.get("b"), vec![&3]);
}

#[test]
fn test_multimap_reuse() {
    let mut map: MultiMap<String, usize> = MultiMap::new();
    map.insert("keep".to_string(), 0);
    for i in 0..1000 {
        map.insert("n".to_string(), i);
        map.insert("n".to_string(), i + 1);
        assert!(map.remove("n", Some(0)));
        assert!(map.remove("n", None));
    }
    assert!(map.slots.len() <= 4);
    assert_eq!(map.values().collect::<Vec<_>>(), vec![&0]);

    map.insert("n".to_string(), 7);
    map.insert("m".to_string(), 8);
    assert_eq!(map.grouped().collect::<Vec<_>>(), vec![&0, &7, &8]);
}
