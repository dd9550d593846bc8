//! Insertion-ordered map and counter.
//!
//! Iteration order is the order keys were first inserted. Mode selection in
//! [`Tally::most_common`] relies on this to break ties deterministically.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Value for `key`, inserting `V::default()` at the end if missing
    pub fn entry_or_default(&mut self, key: &K) -> &mut V
    where
        V: Default,
    {
        let idx = match self.index.get(key) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.entries.push((key.clone(), V::default()));
                self.index.insert(key.clone(), idx);
                idx
            }
        };
        &mut self.entries[idx].1
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K: Eq + Hash + Clone, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Serialize, V: Serialize> Serialize for OrderedMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Frequency counter with first-seen ordering.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    counts: OrderedMap<K, usize>,
    total: usize,
}

impl<K: Eq + Hash + Clone> Tally<K> {
    pub fn new() -> Self {
        Self {
            counts: OrderedMap::new(),
            total: 0,
        }
    }

    pub fn add(&mut self, key: &K) {
        *self.counts.entry_or_default(key) += 1;
        self.total += 1;
    }

    pub fn count(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(k, &n)| (k, n))
    }

    /// Highest-count key; among equal counts, the one seen first
    pub fn most_common(&self) -> Option<(&K, usize)> {
        let mut best: Option<(&K, usize)> = None;
        for (key, n) in self.iter() {
            if best.is_none_or(|(_, top)| n > top) {
                best = Some((key, n));
            }
        }
        best
    }
}

impl<K: Eq + Hash + Clone> Default for Tally<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Serialize> Serialize for Tally<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.counts.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(keys: &[&str]) -> Tally<String> {
        let mut t = Tally::new();
        for k in keys {
            t.add(&k.to_string());
        }
        t
    }

    #[test]
    fn test_counts() {
        let t = tally(&["love", "hate", "love"]);
        assert_eq!(t.count(&"love".to_string()), 2);
        assert_eq!(t.count(&"hate".to_string()), 1);
        assert_eq!(t.count(&"fear".to_string()), 0);
        assert_eq!(t.total(), 3);
    }

    #[test]
    fn test_most_common() {
        let t = tally(&["hate", "love", "love"]);
        assert_eq!(t.most_common(), Some((&"love".to_string(), 2)));
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        let t = tally(&["fear", "love", "love", "fear"]);
        assert_eq!(t.most_common(), Some((&"fear".to_string(), 2)));

        let t = tally(&["love", "fear", "fear", "love"]);
        assert_eq!(t.most_common(), Some((&"love".to_string(), 2)));
    }

    #[test]
    fn test_empty_has_no_mode() {
        let t: Tally<String> = Tally::new();
        assert!(t.most_common().is_none());
        assert!(t.is_empty());
    }

    #[test]
    fn test_ordered_map_keeps_insertion_order() {
        let mut map: OrderedMap<String, usize> = OrderedMap::new();
        for key in ["zeta", "alpha", "mid", "alpha"] {
            *map.entry_or_default(&key.to_string()) += 1;
        }

        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(map.get(&"alpha".to_string()), Some(&2));
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let t = tally(&["zeta", "alpha", "zeta"]);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"zeta":2,"alpha":1}"#);
    }
}
