//! Triple-keyed multimap
//!
//! `CompositeIndex` stores values under a (first, second, third) key triplet.
//! Values sharing a triplet form a [`Chain`], newest first. Levels are created
//! only by [`CompositeIndex::put`]; every read path returns `None` as soon as
//! a key along the path is missing.

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::collections::{HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};

type ThirdLevel<U, V, H> = HashMap<U, Chain<V>, H>;
type SecondLevel<S, U, V, H> = HashMap<S, ThirdLevel<U, V, H>, H>;
type FirstLevel<K, S, U, V, H> = HashMap<K, SecondLevel<S, U, V, H>, H>;

/// Values stored under one key triplet, most recently inserted first
///
/// A chain handed out by the index always holds at least one value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain<V> {
    values: VecDeque<V>,
}

impl<V> Chain<V> {
    fn new() -> Self {
        Self {
            values: VecDeque::new(),
        }
    }

    fn push_front(&mut self, value: V) {
        self.values.push_front(value);
    }

    /// Number of values in the chain
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a chain handed out by the index
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Most recently inserted value
    pub fn front(&self) -> Option<&V> {
        self.values.front()
    }

    /// Iterate from newest to oldest
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, V> {
        self.values.iter()
    }

    /// Consume the chain, newest first
    pub fn into_vec(self) -> Vec<V> {
        self.values.into()
    }
}

impl<V> IntoIterator for Chain<V> {
    type Item = V;
    type IntoIter = std::collections::vec_deque::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Chain<V> {
    type Item = &'a V;
    type IntoIter = std::collections::vec_deque::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Multimap keyed by a (first, second, third) key triplet
///
/// Conceptually `K -> (S -> (U -> Chain<V>))`. The hasher `H` is shared by
/// all three levels.
#[derive(Clone)]
pub struct CompositeIndex<K, S, U, V, H = RandomState> {
    cube: FirstLevel<K, S, U, V, H>,
}

impl<K: std::fmt::Debug, S: std::fmt::Debug, U: std::fmt::Debug, V: std::fmt::Debug, H>
    std::fmt::Debug for CompositeIndex<K, S, U, V, H>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeIndex")
            .field("cube", &self.cube)
            .finish()
    }
}

/// `CompositeIndex` backed by `rustc_hash::FxBuildHasher`
#[cfg(feature = "fx-hash")]
pub type FxCompositeIndex<K, S, U, V> = CompositeIndex<K, S, U, V, rustc_hash::FxBuildHasher>;

impl<K, S, U, V> CompositeIndex<K, S, U, V, RandomState> {
    /// Create an empty index
    pub fn new() -> Self {
        Self {
            cube: HashMap::new(),
        }
    }
}

impl<K, S, U, V, H: Default> Default for CompositeIndex<K, S, U, V, H> {
    fn default() -> Self {
        Self {
            cube: HashMap::default(),
        }
    }
}

impl<K, S, U, V, H> CompositeIndex<K, S, U, V, H> {
    /// Create an empty index whose first level uses `hasher`
    ///
    /// Nested levels are built with `H::default()`.
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            cube: HashMap::with_hasher(hasher),
        }
    }

    /// Keys present on the first axis, in no particular order
    pub fn first_axis_keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.cube.keys()
    }

    /// True when no chain is stored
    pub fn is_empty(&self) -> bool {
        self.cube.is_empty()
    }

    /// Number of live triplets (chains)
    pub fn triplet_count(&self) -> usize {
        self.cube
            .values()
            .flat_map(|second| second.values())
            .map(|third| third.len())
            .sum()
    }

    /// Number of values across all chains
    pub fn value_count(&self) -> usize {
        self.cube
            .values()
            .flat_map(|second| second.values())
            .flat_map(|third| third.values())
            .map(Chain::len)
            .sum()
    }
}

impl<K, S, U, V, H> CompositeIndex<K, S, U, V, H>
where
    K: Hash + Eq,
    S: Hash + Eq,
    U: Hash + Eq,
    H: BuildHasher + Default,
{
    /// Keys on the second axis under `first`
    ///
    /// Returns `None` when `first` is not present.
    pub fn second_axis_keys<'a, QK>(
        &'a self,
        first: &QK,
    ) -> Option<impl Iterator<Item = &'a S> + use<'a, K, S, U, V, H, QK>>
    where
        K: Borrow<QK>,
        QK: Hash + Eq + ?Sized,
    {
        keys_of(self.cube.get(first))
    }

    /// Keys on the third axis under (`first`, `second`)
    ///
    /// Returns `None` when either key is not present.
    pub fn third_axis_keys<'a, QK, QS>(
        &'a self,
        first: &QK,
        second: &QS,
    ) -> Option<impl Iterator<Item = &'a U> + use<'a, K, S, U, V, H, QK, QS>>
    where
        K: Borrow<QK>,
        S: Borrow<QS>,
        QK: Hash + Eq + ?Sized,
        QS: Hash + Eq + ?Sized,
    {
        keys_of(self.cube.get(first)?.get(second))
    }

    /// Chain stored under the triplet, if any
    pub fn chain_at<QK, QS, QU>(&self, first: &QK, second: &QS, third: &QU) -> Option<&Chain<V>>
    where
        K: Borrow<QK>,
        S: Borrow<QS>,
        U: Borrow<QU>,
        QK: Hash + Eq + ?Sized,
        QS: Hash + Eq + ?Sized,
        QU: Hash + Eq + ?Sized,
    {
        self.cube.get(first)?.get(second)?.get(third)
    }

    /// True when a chain is stored under the triplet
    pub fn contains<QK, QS, QU>(&self, first: &QK, second: &QS, third: &QU) -> bool
    where
        K: Borrow<QK>,
        S: Borrow<QS>,
        U: Borrow<QU>,
        QK: Hash + Eq + ?Sized,
        QS: Hash + Eq + ?Sized,
        QU: Hash + Eq + ?Sized,
    {
        self.chain_at(first, second, third).is_some()
    }

    /// Prepend `value` to the chain at the triplet
    ///
    /// Missing levels are created on demand. Existing values are never
    /// replaced.
    pub fn put(&mut self, first: K, second: S, third: U, value: V) {
        self.cube
            .entry(first)
            .or_default()
            .entry(second)
            .or_default()
            .entry(third)
            .or_insert_with(Chain::new)
            .push_front(value);
    }

    /// Detach and return the whole chain at the triplet
    ///
    /// Second- and first-axis entries left empty by the removal are pruned.
    /// Returns `None` and leaves the index untouched when no chain exists.
    pub fn remove<QK, QS, QU>(&mut self, first: &QK, second: &QS, third: &QU) -> Option<Chain<V>>
    where
        K: Borrow<QK>,
        S: Borrow<QS>,
        U: Borrow<QU>,
        QK: Hash + Eq + ?Sized,
        QS: Hash + Eq + ?Sized,
        QU: Hash + Eq + ?Sized,
    {
        let second_level = self.cube.get_mut(first)?;
        let third_level = second_level.get_mut(second)?;
        let chain = third_level.remove(third)?;

        if third_level.is_empty() {
            second_level.remove(second);
            if second_level.is_empty() {
                self.cube.remove(first);
            }
        }

        Some(chain)
    }
}

impl<K, S, U, V, H> Extend<((K, S, U), V)> for CompositeIndex<K, S, U, V, H>
where
    K: Hash + Eq,
    S: Hash + Eq,
    U: Hash + Eq,
    H: BuildHasher + Default,
{
    fn extend<I: IntoIterator<Item = ((K, S, U), V)>>(&mut self, iter: I) {
        for ((first, second, third), value) in iter {
            self.put(first, second, third, value);
        }
    }
}

impl<K, S, U, V, H> FromIterator<((K, S, U), V)> for CompositeIndex<K, S, U, V, H>
where
    K: Hash + Eq,
    S: Hash + Eq,
    U: Hash + Eq,
    H: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = ((K, S, U), V)>>(iter: I) -> Self {
        let mut index = Self::default();
        index.extend(iter);
        index
    }
}

/// Keys of an optional level; a missing level stays missing
fn keys_of<T, X, H>(level: Option<&HashMap<T, X, H>>) -> Option<impl Iterator<Item = &T>> {
    level.map(HashMap::keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sorted<'a, T: Ord + Clone + 'a>(keys: impl Iterator<Item = &'a T>) -> Vec<T> {
        let mut out: Vec<T> = keys.cloned().collect();
        out.sort();
        out
    }

    #[test]
    fn test_new_index_is_empty() {
        let index: CompositeIndex<u8, u8, u8, u8> = CompositeIndex::new();

        assert!(index.is_empty());
        assert_eq!(index.first_axis_keys().count(), 0);
        assert_eq!(index.triplet_count(), 0);
        assert_eq!(index.value_count(), 0);
    }

    #[test]
    fn test_put_then_chain_at() {
        let mut index = CompositeIndex::new();
        index.put("page", "cat", "sec", 7);

        let chain = index.chain_at("page", "cat", "sec").unwrap();
        assert_eq!(chain.front(), Some(&7));
        assert_eq!(chain.len(), 1);
        assert!(!chain.is_empty());
    }

    #[test]
    fn test_chain_is_newest_first() {
        let mut index = CompositeIndex::new();
        index.put(1, 2, 3, "old");
        index.put(1, 2, 3, "new");

        let values: Vec<_> = index.chain_at(&1, &2, &3).unwrap().iter().copied().collect();
        assert_eq!(values, vec!["new", "old"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut index = CompositeIndex::new();
        index.put('a', 'b', 'c', 5);
        index.put('a', 'b', 'c', 5);

        assert_eq!(index.chain_at(&'a', &'b', &'c').unwrap().len(), 2);
        assert_eq!(index.value_count(), 2);
        assert_eq!(index.triplet_count(), 1);
    }

    #[test]
    fn test_reads_do_not_create_levels() {
        let mut index: CompositeIndex<u8, u8, u8, u8> = CompositeIndex::new();
        index.put(1, 1, 1, 0);

        assert!(index.second_axis_keys(&9).is_none());
        assert!(index.third_axis_keys(&1, &9).is_none());
        assert!(index.third_axis_keys(&9, &1).is_none());
        assert!(index.chain_at(&1, &1, &9).is_none());
        assert!(index.chain_at(&9, &9, &9).is_none());

        assert_eq!(sorted(index.first_axis_keys()), vec![1]);
        assert_eq!(sorted(index.second_axis_keys(&1).unwrap()), vec![1]);
        assert_eq!(sorted(index.third_axis_keys(&1, &1).unwrap()), vec![1]);
    }

    #[test]
    fn test_axis_keys_do_not_borrow_lookup_keys() {
        let mut index = CompositeIndex::new();
        index.put("A".to_string(), "B".to_string(), "C".to_string(), 1);

        let (seconds, thirds) = {
            let first = String::from("A");
            let second = String::from("B");
            (
                index.second_axis_keys(first.as_str()).unwrap(),
                index.third_axis_keys(first.as_str(), second.as_str()).unwrap(),
            )
        };

        assert_eq!(sorted(seconds), vec!["B".to_string()]);
        assert_eq!(sorted(thirds), vec!["C".to_string()]);
    }

    #[test]
    fn test_axis_keys_after_puts() {
        let mut index = CompositeIndex::new();
        index.put("A", "B", "C", 1);
        index.put("A", "B", "D", 2);
        index.put("A", "E", "C", 3);
        index.put("F", "B", "C", 4);

        assert_eq!(sorted(index.first_axis_keys()), vec!["A", "F"]);
        assert_eq!(sorted(index.second_axis_keys("A").unwrap()), vec!["B", "E"]);
        assert_eq!(sorted(index.third_axis_keys("A", "B").unwrap()), vec!["C", "D"]);
        assert_eq!(index.triplet_count(), 4);
    }

    #[test]
    fn test_remove_returns_whole_chain() {
        let mut index = CompositeIndex::new();
        index.put("A", "B", "C", 1);
        index.put("A", "B", "C", 2);

        let chain = index.remove("A", "B", "C").unwrap();
        assert_eq!(chain.into_vec(), vec![2, 1]);
        assert!(index.chain_at("A", "B", "C").is_none());
    }

    #[test]
    fn test_remove_missing_leaves_state_unchanged() {
        let mut index = CompositeIndex::new();
        index.put("A", "B", "C", 1);

        for _ in 0..3 {
            assert!(index.remove("A", "B", "X").is_none());
            assert!(index.remove("A", "X", "C").is_none());
            assert!(index.remove("X", "B", "C").is_none());
        }

        assert_eq!(index.chain_at("A", "B", "C").unwrap().len(), 1);
        assert_eq!(sorted(index.third_axis_keys("A", "B").unwrap()), vec!["C"]);
    }

    #[test]
    fn test_remove_prunes_empty_ancestors() {
        let mut index = CompositeIndex::new();
        index.put("A", "B", "C", 1);
        index.put("A", "E", "C", 2);

        index.remove("A", "B", "C").unwrap();
        assert!(index.third_axis_keys("A", "B").is_none());
        assert_eq!(sorted(index.second_axis_keys("A").unwrap()), vec!["E"]);

        index.remove("A", "E", "C").unwrap();
        assert!(index.second_axis_keys("A").is_none());
        assert!(index.is_empty());
    }

    #[test]
    fn test_remove_keeps_siblings() {
        let mut index = CompositeIndex::new();
        index.put("A", "B", "C", 1);
        index.put("A", "B", "D", 9);

        index.remove("A", "B", "C").unwrap();

        assert_eq!(sorted(index.first_axis_keys()), vec!["A"]);
        assert_eq!(sorted(index.third_axis_keys("A", "B").unwrap()), vec!["D"]);
        assert_eq!(index.chain_at("A", "B", "D").unwrap().front(), Some(&9));
    }

    #[test]
    fn test_put_after_remove_starts_fresh_chain() {
        let mut index = CompositeIndex::new();
        index.put(1, 1, 1, 'x');
        index.remove(&1, &1, &1).unwrap();
        index.put(1, 1, 1, 'y');

        let values: Vec<_> = index.chain_at(&1, &1, &1).unwrap().iter().copied().collect();
        assert_eq!(values, vec!['y']);
    }

    #[test]
    fn test_borrowed_lookup_with_owned_keys() {
        let mut index: CompositeIndex<String, String, String, u32> = CompositeIndex::new();
        index.put("p".to_string(), "c".to_string(), "s".to_string(), 1);

        assert!(index.contains("p", "c", "s"));
        assert!(!index.contains("p", "c", "t"));
        assert_eq!(index.remove("p", "c", "s").map(|c| c.len()), Some(1));
    }

    #[test]
    fn test_from_iterator_applies_puts_in_order() {
        let index: CompositeIndex<_, _, _, _> = vec![
            ((1, 1, 1), "first"),
            ((1, 1, 1), "second"),
            ((2, 1, 1), "other"),
        ]
        .into_iter()
        .collect();

        let values: Vec<_> = index.chain_at(&1, &1, &1).unwrap().into_iter().collect();
        assert_eq!(values, vec![&"second", &"first"]);
        let firsts: HashSet<_> = index.first_axis_keys().copied().collect();
        assert_eq!(firsts, HashSet::from([1, 2]));
    }

    #[cfg(feature = "fx-hash")]
    #[test]
    fn test_fx_index_behaves_like_default() {
        let mut index: FxCompositeIndex<u32, u32, u32, u32> = FxCompositeIndex::default();
        index.put(1, 2, 3, 4);
        index.put(1, 2, 3, 5);

        assert_eq!(index.remove(&1, &2, &3).unwrap().into_vec(), vec![5, 4]);
        assert!(index.is_empty());
    }
}
