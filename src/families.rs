//! Set families: bounded power sets, their unions, and maximal independent
//! sets of a graph.

use std::collections::BTreeSet;

use ndarray::Array2;

/// Lazily yields the subsets of a set whose size lies within bounds, smaller
/// subsets first and each size in lexicographic order of positions.
#[derive(Debug, Clone)]
pub struct PowersetFamily<T> {
    items: Vec<T>,
    max_size: usize,
    // positions of the current subset; `None` once exhausted
    positions: Option<Vec<usize>>,
}

/// Return the subsets of `x` with `min_size..=max_size` elements (`max_size`
/// defaults to `|x|`). Each subset is sorted.
///
/// ```
/// use std::collections::BTreeSet;
/// use causal_partitions::powerset_family;
///
/// let x: BTreeSet<char> = ['a', 'b', 'c'].into();
/// let family: Vec<_> = powerset_family(&x, 2, None).collect();
/// assert_eq!(family, vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c'], vec!['a', 'b', 'c']]);
/// ```
pub fn powerset_family<T: Ord + Clone>(x: &BTreeSet<T>, min_size: usize, max_size: Option<usize>) -> PowersetFamily<T> {
    let items: Vec<T> = x.iter().cloned().collect();
    let max_size = max_size.unwrap_or(items.len()).min(items.len());
    let positions = (min_size <= max_size).then(|| (0..min_size).collect());
    PowersetFamily { items, max_size, positions }
}

impl<T> PowersetFamily<T> {
    // next combination of the same size, else the first of the next size
    fn advance(&mut self) {
        let n = self.items.len();
        let Some(pos) = self.positions.as_mut() else {
            return;
        };
        let k = pos.len();
        for i in (0..k).rev() {
            if pos[i] < n - k + i {
                pos[i] += 1;
                for j in i + 1..k {
                    pos[j] = pos[j - 1] + 1;
                }
                return;
            }
        }
        if k < self.max_size {
            *pos = (0..k + 1).collect();
        } else {
            self.positions = None;
        }
    }
}

impl<T: Clone> Iterator for PowersetFamily<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let subset = self.positions.as_ref()?.iter().map(|&p| self.items[p].clone()).collect();
        self.advance();
        Some(subset)
    }
}

/// Lazily yields the union of the bounded power sets of several sets, each
/// subset once, in order of first appearance.
#[derive(Debug, Clone)]
pub struct UnionPowersetFamily<'a, T> {
    sets: &'a [BTreeSet<T>],
    min_size: usize,
    max_size: Option<usize>,
    next_set: usize,
    current: Option<PowersetFamily<T>>,
    seen: BTreeSet<Vec<T>>,
}

/// Return the union over `sets` of `powerset_family(set, min_size, max_size)`.
pub fn union_powerset_family<T: Ord + Clone>(
    sets: &[BTreeSet<T>],
    min_size: usize,
    max_size: Option<usize>,
) -> UnionPowersetFamily<'_, T> {
    UnionPowersetFamily { sets, min_size, max_size, next_set: 0, current: None, seen: BTreeSet::new() }
}

impl<'a, T: Ord + Clone> Iterator for UnionPowersetFamily<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        loop {
            if let Some(subset) = self.current.as_mut().and_then(Iterator::next) {
                if self.seen.insert(subset.clone()) {
                    return Some(subset);
                }
                continue;
            }
            let set = self.sets.get(self.next_set)?;
            self.next_set += 1;
            self.current = Some(powerset_family(set, self.min_size, self.max_size));
        }
    }
}

/// Lazily yields the maximal independent sets of an undirected graph.
///
/// Runs Bron–Kerbosch with pivoting over the complement graph, since an
/// independent set is a clique of the complement. Search frames live on an
/// explicit stack, so dropping the iterator stops the search.
#[derive(Debug, Clone)]
pub struct MaximalIndependentSets {
    // neighbours in the complement graph
    neighbours: Vec<BTreeSet<usize>>,
    stack: Vec<Frame>,
}

#[derive(Debug, Clone)]
struct Frame {
    clique: Vec<usize>,
    candidates: BTreeSet<usize>,
    excluded: BTreeSet<usize>,
}

/// Return the maximal independent sets of the graph with adjacency matrix
/// `adjacency`. A non-zero entry in either direction is an edge and the
/// diagonal is ignored. Each set is sorted; a graph without nodes has none.
///
/// Time is exponential in the worst case.
///
/// # Panics
///
/// If `adjacency` is not square.
///
/// ```
/// use ndarray::array;
/// use causal_partitions::maximal_independent_sets;
///
/// // the path 0 - 1 - 2
/// let path = array![[0u8, 1, 0], [1, 0, 1], [0, 1, 0]];
/// let sets: Vec<_> = maximal_independent_sets(&path).collect();
/// assert_eq!(sets, vec![vec![0, 2], vec![1]]);
/// ```
pub fn maximal_independent_sets(adjacency: &Array2<u8>) -> MaximalIndependentSets {
    let n = adjacency.nrows();
    assert_eq!(n, adjacency.ncols(), "adjacency matrix must be square");
    let neighbours: Vec<BTreeSet<usize>> = (0..n)
        .map(|v| (0..n).filter(|&u| u != v && adjacency[[v, u]] == 0 && adjacency[[u, v]] == 0).collect())
        .collect();
    let stack = if n == 0 {
        Vec::new()
    } else {
        vec![Frame { clique: Vec::new(), candidates: (0..n).collect(), excluded: BTreeSet::new() }]
    };
    MaximalIndependentSets { neighbours, stack }
}

impl MaximalIndependentSets {
    // the vertex of candidates ∪ excluded covering most candidates, first on ties
    fn pivot(&self, frame: &Frame) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for &u in frame.candidates.iter().chain(&frame.excluded) {
            let covered = frame.candidates.intersection(&self.neighbours[u]).count();
            if best.map_or(true, |(_, c)| covered > c) {
                best = Some((u, covered));
            }
        }
        best.map(|(u, _)| u)
    }
}

impl Iterator for MaximalIndependentSets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        while let Some(mut frame) = self.stack.pop() {
            if frame.candidates.is_empty() {
                if frame.excluded.is_empty() {
                    frame.clique.sort_unstable();
                    return Some(frame.clique);
                }
                continue;
            }
            let Some(pivot) = self.pivot(&frame) else {
                continue;
            };
            let branches: Vec<usize> = frame.candidates.difference(&self.neighbours[pivot]).copied().collect();
            let mut children = Vec::with_capacity(branches.len());
            for v in branches {
                let mut clique = frame.clique.clone();
                clique.push(v);
                children.push(Frame {
                    clique,
                    candidates: frame.candidates.intersection(&self.neighbours[v]).copied().collect(),
                    excluded: frame.excluded.intersection(&self.neighbours[v]).copied().collect(),
                });
                frame.candidates.remove(&v);
                frame.excluded.insert(v);
            }
            // first branch on top
            self.stack.extend(children.into_iter().rev());
        }
        None
    }
}
