//! Distinct permutations of a multiset.

/// Lazily yields every distinct ordering of a sequence, in lexicographic
/// order starting from the sorted sequence.
///
/// Repeated elements are only permuted once, so `[a, a, b]` gives three
/// orderings rather than six.
#[derive(Debug, Clone)]
pub struct DistinctPermutations<T> {
    current: Vec<T>,
    done: bool,
}

/// Return the distinct permutations of `items`.
pub fn distinct_permutations<T: Ord + Clone>(items: Vec<T>) -> DistinctPermutations<T> {
    DistinctPermutations::new(items)
}

impl<T: Ord + Clone> DistinctPermutations<T> {
    /// Start from the sorted sequence.
    pub fn new(mut items: Vec<T>) -> Self {
        items.sort();
        DistinctPermutations { current: items, done: false }
    }

    // Advance to the next permutation in lexicographic order, returning
    // false after the last one.
    fn advance(&mut self) -> bool {
        let v = &mut self.current;
        if v.len() < 2 {
            return false;
        }
        let mut i = v.len() - 1;
        while i > 0 && v[i - 1] >= v[i] {
            i -= 1;
        }
        if i == 0 {
            return false;
        }
        let mut j = v.len() - 1;
        while v[j] <= v[i - 1] {
            j -= 1;
        }
        v.swap(i - 1, j);
        v[i..].reverse();
        true
    }
}

impl<T: Ord + Clone> Iterator for DistinctPermutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        let item = self.current.clone();
        self.done = !self.advance();
        Some(item)
    }
}
