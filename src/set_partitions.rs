//! Enumeration of every partition of a collection, with any number of blocks.
//!
//! The partitions of `[first] + rest` are the partitions of `rest` with
//! `first` put in front of each existing block in turn, and then in a new
//! singleton block in front of all the others. Unrolling that recursion gives
//! a mixed-radix counter: for each element `i` but the last, `a[i]` is the slot
//! it is inserted into, ranging over the `m[i + 1]` blocks formed by the later
//! elements plus one for a new block. Element 0 is the fastest digit.

use crate::count::bell_number;

/// Lazily enumerates the partitions of a collection.
///
/// ```
/// use causal_partitions::set_partitions;
///
/// let all: Vec<_> = set_partitions(vec![0, 1, 2], false).collect();
/// assert_eq!(all, vec![
///     vec![vec![0, 1, 2]],
///     vec![vec![0], vec![1, 2]],
///     vec![vec![0, 1], vec![2]],
///     vec![vec![1], vec![0, 2]],
///     vec![vec![0], vec![1], vec![2]],
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct SetPartitions<T> {
    collection: Vec<T>,
    // insertion slot of each element
    a: Vec<usize>,
    // m[i] is the number of blocks formed by elements i..n
    m: Vec<usize>,
    done: bool,
    remaining: Option<usize>,
}

/// Generate all set partitions of a collection.
///
/// With `nontrivial`, the first partition (everything in a single block) is skipped.
/// An empty collection has no partitions.
pub fn set_partitions<T: Clone>(collection: Vec<T>, nontrivial: bool) -> SetPartitions<T> {
    let mut sp = SetPartitions::new(collection);
    if nontrivial {
        sp.next();
    }
    sp
}

impl<T: Clone> SetPartitions<T> {
    /// Start at the partition with a single block.
    pub fn new(collection: Vec<T>) -> Self {
        let n = collection.len();
        SetPartitions {
            a: vec![0; n],
            m: vec![1; n],
            done: n == 0,
            remaining: if n == 0 { Some(0) } else { bell_number::<usize>(n) },
            collection,
        }
    }

    /// Returns the size of the collection being partitioned.
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    /// Returns `true` if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Number of blocks in the current partition.
    pub fn num_blocks(&self) -> usize {
        self.m.first().copied().unwrap_or(0)
    }

    /// Build the blocks of the current partition.
    pub fn get(&self) -> Vec<Vec<T>> {
        let n = self.collection.len();
        if n == 0 {
            return Vec::new();
        }
        let mut blocks = vec![vec![self.collection[n - 1].clone()]];
        for i in (0..n - 1).rev() {
            let x = self.collection[i].clone();
            if self.a[i] == blocks.len() {
                blocks.insert(0, vec![x]);
            } else {
                blocks[self.a[i]].insert(0, x);
            }
        }
        blocks
    }

    /// Move to the next partition, returning `true`, or return `false` if the
    /// current one was the last.
    pub fn increment(&mut self) -> bool {
        let n = self.collection.len();
        for i in 0..n.saturating_sub(1) {
            if self.a[i] < self.m[i + 1] {
                self.a[i] += 1;
                self.m[i] = self.m[i + 1] + usize::from(self.a[i] == self.m[i + 1]);
                for j in (0..i).rev() {
                    self.a[j] = 0;
                    self.m[j] = self.m[j + 1];
                }
                return true;
            }
        }
        false
    }
}

impl<T: Clone> Iterator for SetPartitions<T> {
    type Item = Vec<Vec<T>>;

    fn next(&mut self) -> Option<Vec<Vec<T>>> {
        if self.done {
            return None;
        }
        let blocks = self.get();
        self.done = !self.increment();
        self.remaining = self.remaining.map(|r| r.saturating_sub(1));
        Some(blocks)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(r) => (r, Some(r)),
            None => (0, None),
        }
    }
}
