//! Combinations of sets with a non-empty common intersection.
//!
//! Combinations are grown one set at a time from the cached intersection of
//! the smaller combination, so a branch dies as soon as its intersection is
//! empty: intersections only shrink, and no superset of an empty combination
//! can be non-empty.

use std::collections::{BTreeMap, BTreeSet};

/// Sorted indices of the sets in a combination.
pub type Combination = Vec<usize>;

/// Return indices of unordered pairs `(i, j)` with `i < min(n, m)` and
/// `i + k <= j < max(n, m)`.
///
/// With `m == None` the bound is `n` on both sides; `k == 1` skips pairs of an
/// index with itself.
pub fn pair_indices(n: usize, m: Option<usize>, k: usize) -> impl Iterator<Item = (usize, usize)> {
    let m = m.unwrap_or(n);
    let (lo, hi) = if n <= m { (n, m) } else { (m, n) };
    (0..lo).flat_map(move |i| (i + k..hi).map(move |j| (i, j)))
}

/// Return unordered pairs of elements of `seq` (not the Cartesian product).
pub fn pairs<T>(seq: &[T], k: usize) -> impl Iterator<Item = (&T, &T)> {
    pair_indices(seq.len(), None, k).map(move |(i, j)| (&seq[i], &seq[j]))
}

/// Lazily yields, in increasing size, every combination of set indices whose
/// sets have a non-empty common intersection.
///
/// Only one size level, with its cached intersections, is held at a time.
#[derive(Debug, Clone)]
pub struct NonemptyIntersections<'a, T> {
    sets: &'a [BTreeSet<T>],
    min_size: usize,
    max_size: usize,
    size: usize,
    level: Vec<(Combination, BTreeSet<T>)>,
    pos: usize,
}

/// Return every combination of `sets` with non-empty intersection and size in
/// `max(2, min_size)..=max_size` (`max_size` defaults to the number of sets).
///
/// ```
/// use std::collections::BTreeSet;
/// use causal_partitions::combinations_with_nonempty_intersection;
///
/// let sets: Vec<BTreeSet<u8>> = vec![[1, 2].into(), [2, 3].into(), [3, 4].into()];
/// let combs: Vec<_> = combinations_with_nonempty_intersection(&sets, 0, None).collect();
/// assert_eq!(combs, vec![vec![0, 1], vec![1, 2]]);
/// ```
pub fn combinations_with_nonempty_intersection<T: Ord + Clone>(
    sets: &[BTreeSet<T>],
    min_size: usize,
    max_size: Option<usize>,
) -> NonemptyIntersections<'_, T> {
    NonemptyIntersections::new(sets, min_size, max_size)
}

/// Like `combinations_with_nonempty_intersection`, grouped by combination
/// size. Sizes without any combination are omitted.
pub fn combinations_with_nonempty_intersection_by_order<T: Ord + Clone>(
    sets: &[BTreeSet<T>],
    min_size: usize,
    max_size: Option<usize>,
) -> BTreeMap<usize, BTreeSet<Combination>> {
    let mut by_order: BTreeMap<usize, BTreeSet<Combination>> = BTreeMap::new();
    for c in combinations_with_nonempty_intersection(sets, min_size, max_size) {
        by_order.entry(c.len()).or_default().insert(c);
    }
    by_order
}

impl<'a, T: Ord + Clone> NonemptyIntersections<'a, T> {
    fn new(sets: &'a [BTreeSet<T>], min_size: usize, max_size: Option<usize>) -> Self {
        // a single set trivially intersects itself
        let min_size = min_size.max(2);
        let max_size = max_size.unwrap_or(sets.len()).min(sets.len());
        let level = if max_size >= 2 {
            pair_indices(sets.len(), None, 1)
                .filter_map(|(i, j)| {
                    let common: BTreeSet<T> = sets[i].intersection(&sets[j]).cloned().collect();
                    (!common.is_empty()).then(|| (vec![i, j], common))
                })
                .collect()
        } else {
            Vec::new()
        };
        NonemptyIntersections { sets, min_size, max_size, size: 2, level, pos: 0 }
    }

    /// Size of the combinations currently being yielded.
    pub fn current_size(&self) -> usize {
        self.size
    }

    // Each combination of size s+1 is built exactly once, from the combination
    // without its smallest index, by only extending with smaller indices.
    fn grow(&mut self) {
        let mut next = Vec::new();
        for (c, common) in &self.level {
            for i in 0..c[0] {
                let narrowed: BTreeSet<T> = self.sets[i].intersection(common).cloned().collect();
                if !narrowed.is_empty() {
                    let mut bigger = Vec::with_capacity(c.len() + 1);
                    bigger.push(i);
                    bigger.extend_from_slice(c);
                    next.push((bigger, narrowed));
                }
            }
        }
        next.sort_by(|x, y| x.0.cmp(&y.0));
        tracing::trace!(size = self.size + 1, count = next.len(), "grew intersection level");
        self.level = next;
        self.size += 1;
        self.pos = 0;
    }
}

impl<'a, T: Ord + Clone> Iterator for NonemptyIntersections<'a, T> {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        loop {
            if self.size > self.max_size {
                return None;
            }
            if let Some((c, _)) = self.level.get(self.pos) {
                self.pos += 1;
                if self.size >= self.min_size {
                    return Some(c.clone());
                }
                continue;
            }
            if self.level.is_empty() || self.size == self.max_size {
                self.level.clear();
                self.size = self.max_size + 1;
                return None;
            }
            self.grow();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // deterministic pseudo-random families
    fn family(n: usize, universe: usize, seed: u64) -> Vec<BTreeSet<usize>> {
        let mut state = seed;
        (0..n)
            .map(|_| {
                (0..universe)
                    .filter(|_| {
                        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                        (state >> 33) % 3 == 0
                    })
                    .collect()
            })
            .collect()
    }

    fn brute_force(sets: &[BTreeSet<usize>], min_size: usize, max_size: usize) -> BTreeMap<usize, BTreeSet<Combination>> {
        let mut out: BTreeMap<usize, BTreeSet<Combination>> = BTreeMap::new();
        for mask in 0u32..(1 << sets.len()) {
            let c: Combination = (0..sets.len()).filter(|i| mask & (1 << i) != 0).collect();
            if c.len() < min_size.max(2) || c.len() > max_size {
                continue;
            }
            let mut common = sets[c[0]].clone();
            for i in &c[1..] {
                common = common.intersection(&sets[*i]).copied().collect();
            }
            if !common.is_empty() {
                out.entry(c.len()).or_default().insert(c);
            }
        }
        out
    }

    #[test]
    fn pair_index_ranges() {
        assert_eq!(pair_indices(3, None, 1).collect::<Vec<_>>(), vec![(0, 1), (0, 2), (1, 2)]);
        assert_eq!(pair_indices(2, None, 0).collect::<Vec<_>>(), vec![(0, 0), (0, 1), (1, 1)]);
        assert_eq!(pair_indices(3, Some(1), 0).collect::<Vec<_>>(), vec![(0, 0), (0, 1), (0, 2)]);
        assert_eq!(pairs(&['a', 'b', 'c'], 1).collect::<Vec<_>>(), vec![(&'a', &'b'), (&'a', &'c'), (&'b', &'c')]);
    }

    #[test]
    fn matches_brute_force() {
        for seed in 0..20 {
            for n in 0..8 {
                let sets = family(n, 6, seed);
                for (min_size, max_size) in [(0, None), (3, None), (0, Some(3)), (2, Some(2))] {
                    let got = combinations_with_nonempty_intersection_by_order(&sets, min_size, max_size);
                    let want = brute_force(&sets, min_size, max_size.unwrap_or(n));
                    assert_eq!(got, want, "seed {} n {} bounds {:?}", seed, n, (min_size, max_size));
                }
            }
        }
    }

    #[test]
    fn no_superset_of_an_empty_intersection() {
        let sets = family(7, 5, 42);
        let found: BTreeSet<Combination> = combinations_with_nonempty_intersection(&sets, 0, None).collect();
        for c in &found {
            for drop in 0..c.len() {
                let mut sub = c.clone();
                sub.remove(drop);
                if sub.len() >= 2 {
                    assert!(found.contains(&sub), "{:?} found but not its subset {:?}", c, sub);
                }
            }
        }
    }

    #[test]
    fn disjoint_family_is_empty() {
        let sets: Vec<BTreeSet<u8>> = vec![[1].into(), [2].into(), [3].into()];
        assert_eq!(combinations_with_nonempty_intersection(&sets, 0, None).count(), 0);
        assert!(combinations_with_nonempty_intersection_by_order(&sets, 0, None).is_empty());
    }

    #[test]
    fn common_element_everywhere() {
        let sets: Vec<BTreeSet<char>> = vec![['x', 'a'].into(), ['x', 'b'].into(), ['x'].into(), ['x', 'a', 'b'].into()];
        let by_order = combinations_with_nonempty_intersection_by_order(&sets, 0, None);
        assert_eq!(by_order[&2].len(), 6);
        assert_eq!(by_order[&3].len(), 4);
        assert_eq!(by_order[&4], BTreeSet::from([vec![0, 1, 2, 3]]));

        let mut it = combinations_with_nonempty_intersection(&sets, 4, None);
        assert_eq!(it.next(), Some(vec![0, 1, 2, 3]));
        assert_eq!(it.current_size(), 4);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn bounds_below_two() {
        let sets: Vec<BTreeSet<u8>> = vec![[1].into(), [1].into()];
        assert_eq!(combinations_with_nonempty_intersection(&sets, 0, Some(1)).count(), 0);
        assert_eq!(combinations_with_nonempty_intersection(&sets[..1], 0, None).count(), 0);
    }
}
