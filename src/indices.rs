//! Index tuples for bipartitions and tripartitions of `{0..n-1}`, and the
//! wrappers that select elements of a sequence through them.
//!
//! The index lists are pure functions of `n`, so they are memoized in bounded
//! process-wide caches (see `IndexCache`) and shared as `Arc` slices.

use std::sync::{Arc, OnceLock};

use crate::cache::{IndexCache, DEFAULT_CAPACITY};

/// Indices of the two parts of a bipartition.
pub type IndexBipartition = (Vec<usize>, Vec<usize>);

/// Indices of the three parts of a tripartition.
pub type IndexTripartition = (Vec<usize>, Vec<usize>, Vec<usize>);

static BIPARTITIONS: OnceLock<IndexCache<[IndexBipartition]>> = OnceLock::new();
static DIRECTED_BIPARTITIONS: OnceLock<IndexCache<[IndexBipartition]>> = OnceLock::new();
static DIRECTED_TRIPARTITIONS: OnceLock<IndexCache<[IndexTripartition]>> = OnceLock::new();

fn bipartition_cache() -> &'static IndexCache<[IndexBipartition]> {
    BIPARTITIONS.get_or_init(|| IndexCache::new("bipartition_indices", DEFAULT_CAPACITY))
}

fn directed_bipartition_cache() -> &'static IndexCache<[IndexBipartition]> {
    DIRECTED_BIPARTITIONS.get_or_init(|| IndexCache::new("directed_bipartition_indices", DEFAULT_CAPACITY))
}

fn directed_tripartition_cache() -> &'static IndexCache<[IndexTripartition]> {
    DIRECTED_TRIPARTITIONS.get_or_init(|| IndexCache::new("directed_tripartition_indices", DEFAULT_CAPACITY))
}

/// Empty every process-wide index cache.
pub fn clear_index_caches() {
    bipartition_cache().clear();
    directed_bipartition_cache().clear();
    directed_tripartition_cache().clear();
}

/// Return indices for the undirected bipartitions of a sequence of length `n`.
///
/// Bit `j` of each `i < 2^(n-1)` decides whether element `j` goes to the first
/// part; since the last element's bit is never set, every unordered
/// bipartition appears exactly once.
///
/// ```
/// let b = causal_partitions::bipartition_indices(3);
/// assert_eq!(&b[..], &[
///     (vec![], vec![0, 1, 2]),
///     (vec![0], vec![1, 2]),
///     (vec![1], vec![0, 2]),
///     (vec![0, 1], vec![2]),
/// ]);
/// ```
///
/// # Panics
///
/// If `n` exceeds `usize::BITS`, since `2^(n-1)` is then not representable.
pub fn bipartition_indices(n: usize) -> Arc<[IndexBipartition]> {
    bipartition_cache().get_or_insert_with(n, || compute_bipartition_indices(n).into())
}

fn compute_bipartition_indices(n: usize) -> Vec<IndexBipartition> {
    if n == 0 {
        return Vec::new();
    }
    assert!(n <= usize::BITS as usize, "cannot enumerate bipartitions of {} elements", n);

    let count = 1usize << (n - 1);
    let mut result = Vec::with_capacity(count);
    for i in 0..count {
        let mut part = (Vec::new(), Vec::new());
        for j in 0..n {
            if (i >> j) & 1 == 1 {
                part.0.push(j);
            } else {
                part.1.push(j);
            }
        }
        result.push(part);
    }
    result
}

/// Return indices for the directed bipartitions of a sequence of length `n`.
///
/// The undirected list is followed by its reverse with each pair swapped, so the
/// first entry is `((), all)` and the last is `(all, ())`.
///
/// # Panics
///
/// If `n` exceeds `usize::BITS`, as for `bipartition_indices`.
pub fn directed_bipartition_indices(n: usize) -> Arc<[IndexBipartition]> {
    directed_bipartition_cache().get_or_insert_with(n, || {
        let undirected = bipartition_indices(n);
        undirected
            .iter()
            .cloned()
            .chain(undirected.iter().rev().map(|(a, b)| (b.clone(), a.clone())))
            .collect::<Vec<_>>()
            .into()
    })
}

/// Return indices for the directed tripartitions of a sequence of length `n`.
pub fn directed_tripartition_indices(n: usize) -> Arc<[IndexTripartition]> {
    directed_tripartition_cache()
        .get_or_insert_with(n, || DirectedTripartitionIndices::new(n).collect::<Vec<_>>().into())
}

/// Lazily enumerates every assignment of `n` elements to three bins.
///
/// Assignments are visited in product order: the bin of the last element
/// changes fastest.
#[derive(Debug, Clone)]
pub struct DirectedTripartitionIndices {
    digits: Vec<u8>,
    done: bool,
}

impl DirectedTripartitionIndices {
    /// Start the enumeration for `n` elements; `n == 0` yields nothing.
    pub fn new(n: usize) -> Self {
        DirectedTripartitionIndices { digits: vec![0; n], done: n == 0 }
    }

    fn increment(&mut self) -> bool {
        for d in self.digits.iter_mut().rev() {
            if *d < 2 {
                *d += 1;
                return true;
            }
            *d = 0;
        }
        false
    }
}

impl Iterator for DirectedTripartitionIndices {
    type Item = IndexTripartition;

    fn next(&mut self) -> Option<IndexTripartition> {
        if self.done {
            return None;
        }
        let mut part: [Vec<usize>; 3] = Default::default();
        for (i, d) in self.digits.iter().enumerate() {
            part[*d as usize].push(i);
        }
        self.done = !self.increment();
        let [a, b, c] = part;
        Some((a, b, c))
    }
}

fn select<T: Clone>(seq: &[T], idx: &[usize]) -> Vec<T> {
    idx.iter().map(|i| seq[*i].clone()).collect()
}

/// Return the bipartitions of a sequence.
///
/// With `nontrivial`, the first bipartition (the one with an empty part) is dropped.
/// Panics like `bipartition_indices` on sequences longer than `usize::BITS`.
///
/// ```
/// let b = causal_partitions::bipartition(&[1, 2, 3], false);
/// assert_eq!(b[2], (vec![2], vec![1, 3]));
/// assert_eq!(b.len(), 4);
/// ```
pub fn bipartition<T: Clone>(seq: &[T], nontrivial: bool) -> Vec<(Vec<T>, Vec<T>)> {
    let skip = usize::from(nontrivial);
    bipartition_indices(seq.len())
        .iter()
        .skip(skip)
        .map(|(a, b)| (select(seq, a), select(seq, b)))
        .collect()
}

/// Return the directed bipartitions of a sequence.
///
/// With `nontrivial`, the first and last bipartitions (which have an empty part)
/// are dropped. Panics like `bipartition_indices` on sequences longer than
/// `usize::BITS`.
pub fn directed_bipartition<T: Clone>(seq: &[T], nontrivial: bool) -> Vec<(Vec<T>, Vec<T>)> {
    let indices = directed_bipartition_indices(seq.len());
    let kept: &[IndexBipartition] = if nontrivial {
        indices.get(1..indices.len().saturating_sub(1)).unwrap_or(&[])
    } else {
        &indices
    };
    kept.iter()
        .map(|(a, b)| (select(seq, a), select(seq, b)))
        .collect()
}

/// Yield the bipartitions where the first part holds exactly one element.
pub fn bipartition_of_one<T: Clone>(seq: &[T]) -> impl Iterator<Item = (Vec<T>, Vec<T>)> + '_ {
    (0..seq.len()).map(move |i| {
        let rest = seq[..i].iter().chain(&seq[i + 1..]).cloned().collect();
        (vec![seq[i].clone()], rest)
    })
}

/// Yield the directed bipartitions where one part holds exactly one element:
/// first every singleton as the first part, then every singleton as the second.
///
/// ```
/// let b: Vec<_> = causal_partitions::directed_bipartition_of_one(&[1, 2, 3]).collect();
/// assert_eq!(b[0], (vec![1], vec![2, 3]));
/// assert_eq!(b[3], (vec![2, 3], vec![1]));
/// assert_eq!(b.len(), 6);
/// ```
pub fn directed_bipartition_of_one<T: Clone>(seq: &[T]) -> impl Iterator<Item = (Vec<T>, Vec<T>)> + '_ {
    bipartition_of_one(seq).chain(bipartition_of_one(seq).map(|(a, b)| (b, a)))
}

/// Yield every directed tripartition of a sequence.
pub fn directed_tripartition<T: Clone>(seq: Vec<T>) -> impl Iterator<Item = (Vec<T>, Vec<T>, Vec<T>)> {
    let indices = directed_tripartition_indices(seq.len());
    (0..indices.len()).map(move |i| {
        let (a, b, c) = &indices[i];
        (select(&seq, a), select(&seq, b), select(&seq, c))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn covers(n: usize, parts: &[&Vec<usize>]) {
        let mut all: Vec<usize> = parts.iter().flat_map(|p| p.iter().copied()).collect();
        all.sort();
        assert_eq!(all, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn bipartition_indices_of_three() {
        let expected: Vec<IndexBipartition> = vec![
            (vec![], vec![0, 1, 2]),
            (vec![0], vec![1, 2]),
            (vec![1], vec![0, 2]),
            (vec![0, 1], vec![2]),
        ];
        assert_eq!(&bipartition_indices(3)[..], &expected[..]);
    }

    #[test]
    fn directed_bipartition_indices_of_three() {
        let expected: Vec<IndexBipartition> = vec![
            (vec![], vec![0, 1, 2]),
            (vec![0], vec![1, 2]),
            (vec![1], vec![0, 2]),
            (vec![0, 1], vec![2]),
            (vec![2], vec![0, 1]),
            (vec![0, 2], vec![1]),
            (vec![1, 2], vec![0]),
            (vec![0, 1, 2], vec![]),
        ];
        assert_eq!(&directed_bipartition_indices(3)[..], &expected[..]);
    }

    #[test]
    fn directed_tripartition_indices_of_one() {
        let expected: Vec<IndexTripartition> = vec![
            (vec![0], vec![], vec![]),
            (vec![], vec![0], vec![]),
            (vec![], vec![], vec![0]),
        ];
        assert_eq!(&directed_tripartition_indices(1)[..], &expected[..]);
    }

    #[test]
    fn empty_index_sets() {
        assert!(bipartition_indices(0).is_empty());
        assert!(directed_bipartition_indices(0).is_empty());
        assert!(directed_tripartition_indices(0).is_empty());
        assert!(directed_bipartition::<u8>(&[], true).is_empty());
    }

    #[test]
    #[should_panic(expected = "cannot enumerate bipartitions")]
    fn too_many_elements_for_bit_masks() {
        bipartition_indices(usize::BITS as usize + 1);
    }

    #[test]
    fn counts_and_coverage() {
        for n in 1..9 {
            let b = bipartition_indices(n);
            assert_eq!(b.len(), 1 << (n - 1));
            let d = directed_bipartition_indices(n);
            assert_eq!(d.len(), 1 << n);
            let t = directed_tripartition_indices(n);
            assert_eq!(t.len(), 3usize.pow(n as u32));

            for (x, y) in b.iter().chain(d.iter()) {
                covers(n, &[x, y]);
            }
            for (x, y, z) in t.iter() {
                covers(n, &[x, y, z]);
            }

            let unordered: HashSet<_> = b.iter().map(|(x, y)| if x < y { (x, y) } else { (y, x) }).collect();
            assert_eq!(unordered.len(), b.len());
            assert_eq!(d.iter().collect::<HashSet<_>>().len(), d.len());
            assert_eq!(t.iter().collect::<HashSet<_>>().len(), t.len());
            let all: Vec<usize> = (0..n).collect();
            assert_eq!(d.first(), Some(&(vec![], all.clone())));
            assert_eq!(d.last(), Some(&(all, vec![])));
        }
    }

    #[test]
    fn cached_lists_are_shared() {
        let a = directed_tripartition_indices(4);
        let b = directed_tripartition_indices(4);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn nontrivial_wrappers() {
        assert_eq!(bipartition(&['a', 'b'], true), vec![(vec!['a'], vec!['b'])]);
        let d = directed_bipartition(&['a', 'b'], true);
        assert_eq!(d, vec![(vec!['a'], vec!['b']), (vec!['b'], vec!['a'])]);
        assert!(directed_bipartition(&['a'], true).is_empty());
    }

    #[test]
    fn directed_tripartition_of_two() {
        let t: Vec<_> = directed_tripartition(vec![2, 5]).collect();
        assert_eq!(t, vec![
            (vec![2, 5], vec![], vec![]),
            (vec![2], vec![5], vec![]),
            (vec![2], vec![], vec![5]),
            (vec![5], vec![2], vec![]),
            (vec![], vec![2, 5], vec![]),
            (vec![], vec![2], vec![5]),
            (vec![5], vec![], vec![2]),
            (vec![], vec![5], vec![2]),
            (vec![], vec![], vec![2, 5]),
        ]);
    }

    #[test]
    fn of_one() {
        let b: Vec<_> = directed_bipartition_of_one(&[1, 2, 3]).collect();
        assert_eq!(b, vec![
            (vec![1], vec![2, 3]),
            (vec![2], vec![1, 3]),
            (vec![3], vec![1, 2]),
            (vec![2, 3], vec![1]),
            (vec![1, 3], vec![2]),
            (vec![1, 2], vec![3]),
        ]);
    }
}
