//! Mechanism/purview parts and the partitions built from them.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::slice;
use std::sync::Arc;

use crate::labels::{fmt_nodes, NodeLabels};

const EMPTY_SET: &str = "∅";
const HORIZONTAL_BAR: char = '─';
const CUT_SYMBOL: &str = "✕";

/// One part of a partition: a subset of the mechanism paired with a subset
/// of the purview.
///
/// Both subsets are kept sorted. Parts order lexicographically on the
/// mechanism, then the purview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Part {
    mechanism: Vec<usize>,
    purview: Vec<usize>,
}

impl Part {
    /// Create a part; both index lists are sorted.
    pub fn new(mut mechanism: Vec<usize>, mut purview: Vec<usize>) -> Self {
        mechanism.sort_unstable();
        purview.sort_unstable();
        Part { mechanism, purview }
    }

    /// The mechanism indices.
    pub fn mechanism(&self) -> &[usize] {
        &self.mechanism
    }

    /// The purview indices.
    pub fn purview(&self) -> &[usize] {
        &self.purview
    }

    /// Returns `true` if both the mechanism and the purview are empty.
    pub fn is_empty(&self) -> bool {
        self.mechanism.is_empty() && self.purview.is_empty()
    }

    // numerator, divider and denominator lines
    fn lines(&self, mechanism_labels: Option<&NodeLabels>, purview_labels: Option<&NodeLabels>) -> [String; 3] {
        let side = |nodes: &[usize], labels| {
            if nodes.is_empty() {
                EMPTY_SET.to_owned()
            } else {
                fmt_nodes(nodes, labels)
            }
        };
        let numer = side(&self.mechanism, mechanism_labels);
        let denom = side(&self.purview, purview_labels);
        let width = 3.max(numer.chars().count()).max(denom.chars().count());
        [
            format!("{:^width$}", numer, width = width),
            HORIZONTAL_BAR.to_string().repeat(width),
            format!("{:^width$}", denom, width = width),
        ]
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [numer, divider, denom] = self.lines(None, None);
        write!(f, "{}\n{}\n{}", numer, divider, denom)
    }
}

/// Which family a partition was generated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionKind {
    /// Exactly two parts
    Bipartition,
    /// Exactly three parts, the last with an empty mechanism
    Tripartition,
    /// Any number of parts
    KPartition,
    /// The mechanism and the purview are completely separated
    Complete,
    /// Every element is isolated in its own part
    Atomic,
}

/// A partition of a mechanism and a purview into parts.
///
/// The parts keep the order they were built in, but identity is the multiset
/// of parts: two partitions with the same parts in a different order, of a
/// different kind or with different labels compare equal and hash alike.
#[derive(Debug, Clone)]
pub struct KPartition {
    kind: PartitionKind,
    parts: Vec<Part>,
    labels: Option<Arc<NodeLabels>>,
}

impl KPartition {
    /// Create a partition of the given kind.
    pub fn new(kind: PartitionKind, parts: Vec<Part>, labels: Option<Arc<NodeLabels>>) -> Self {
        KPartition { kind, parts, labels }
    }

    /// Create a two-part partition.
    pub fn bipartition(a: Part, b: Part, labels: Option<Arc<NodeLabels>>) -> Self {
        KPartition::new(PartitionKind::Bipartition, vec![a, b], labels)
    }

    /// Create a three-part partition.
    pub fn tripartition(a: Part, b: Part, c: Part, labels: Option<Arc<NodeLabels>>) -> Self {
        KPartition::new(PartitionKind::Tripartition, vec![a, b, c], labels)
    }

    /// The family this partition was generated as.
    pub fn kind(&self) -> PartitionKind {
        self.kind
    }

    /// The parts, in construction order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns `true` if there are no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Labels used when displaying the partition.
    pub fn labels(&self) -> Option<&Arc<NodeLabels>> {
        self.labels.as_ref()
    }

    /// Iterate over the parts.
    pub fn iter(&self) -> slice::Iter<'_, Part> {
        self.parts.iter()
    }

    /// Union of the mechanisms of all parts, sorted.
    pub fn mechanism(&self) -> Vec<usize> {
        let mut m: Vec<usize> = self.parts.iter().flat_map(|p| p.mechanism.iter().copied()).collect();
        m.sort_unstable();
        m
    }

    /// Union of the purviews of all parts, sorted.
    pub fn purview(&self) -> Vec<usize> {
        let mut p: Vec<usize> = self.parts.iter().flat_map(|p| p.purview.iter().copied()).collect();
        p.sort_unstable();
        p
    }

    pub(crate) fn sorted_parts(&self) -> Vec<&Part> {
        let mut parts: Vec<&Part> = self.parts.iter().collect();
        parts.sort();
        parts
    }

    pub(crate) fn with_parts(&self, parts: Vec<Part>) -> Self {
        KPartition { kind: self.kind, parts, labels: self.labels.clone() }
    }
}

impl PartialEq for KPartition {
    fn eq(&self, other: &Self) -> bool {
        self.parts.len() == other.parts.len() && self.sorted_parts() == other.sorted_parts()
    }
}

impl Eq for KPartition {}

impl Hash for KPartition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_parts().hash(state);
    }
}

impl Index<usize> for KPartition {
    type Output = Part;

    fn index(&self, index: usize) -> &Part {
        &self.parts[index]
    }
}

impl<'a> IntoIterator for &'a KPartition {
    type Item = &'a Part;
    type IntoIter = slice::Iter<'a, Part>;

    fn into_iter(self) -> slice::Iter<'a, Part> {
        self.parts.iter()
    }
}

/// Lay parts out side by side, separated by the cut symbol on the divider line.
pub(crate) fn fmt_parts(
    parts: &[Part],
    mechanism_labels: Option<&NodeLabels>,
    purview_labels: Option<&NodeLabels>,
) -> String {
    let columns: Vec<[String; 3]> = parts.iter().map(|p| p.lines(mechanism_labels, purview_labels)).collect();
    let row = |i: usize, sep: &str| {
        columns.iter().map(|c| c[i].as_str()).collect::<Vec<_>>().join(sep)
    };
    let gap = " ".repeat(CUT_SYMBOL.chars().count() + 2);
    format!("{}\n{}\n{}", row(0, &gap), row(1, &format!(" {} ", CUT_SYMBOL)), row(2, &gap))
}

impl fmt::Display for KPartition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let labels = self.labels.as_deref();
        f.write_str(&fmt_parts(&self.parts, labels, labels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn parts_are_sorted() {
        let p = Part::new(vec![3, 1], vec![2, 0]);
        assert_eq!(p.mechanism(), &[1, 3]);
        assert_eq!(p.purview(), &[0, 2]);
        assert!(Part::default().is_empty());
        assert!(!Part::new(vec![], vec![1]).is_empty());
    }

    #[test]
    fn identity_ignores_order_kind_and_labels() {
        let a = Part::new(vec![0], vec![]);
        let b = Part::new(vec![], vec![1, 2]);
        let labels = Arc::new(NodeLabels::new(vec!["A", "B", "C"], &[0, 1, 2]).unwrap());
        let x = KPartition::bipartition(a.clone(), b.clone(), None);
        let y = KPartition::new(PartitionKind::KPartition, vec![b.clone(), a.clone()], Some(labels));
        assert_eq!(x, y);
        let set: HashSet<KPartition> = [x, y].into_iter().collect();
        assert_eq!(set.len(), 1);

        let z = KPartition::bipartition(a.clone(), a, None);
        assert_ne!(z, KPartition::bipartition(b.clone(), b, None));
    }

    #[test]
    fn unions() {
        let p = KPartition::tripartition(
            Part::new(vec![2], vec![0]),
            Part::new(vec![1], vec![3]),
            Part::new(vec![], vec![1]),
            None,
        );
        assert_eq!(p.mechanism(), vec![1, 2]);
        assert_eq!(p.purview(), vec![0, 1, 3]);
        assert_eq!(p[2].purview(), &[1]);
        assert_eq!(p.iter().count(), 3);
        assert_eq!((&p).into_iter().filter(|x| x.mechanism().is_empty()).count(), 1);
    }

    #[test]
    fn display() {
        let p = KPartition::bipartition(Part::new(vec![], vec![2]), Part::new(vec![0], vec![3]), None);
        assert_eq!(p.to_string(), " ∅     0 \n─── ✕ ───\n 2     3 ");

        let labels = Arc::new(NodeLabels::new(vec!["A", "B", "C", "D"], &[0, 1, 2, 3]).unwrap());
        let p = KPartition::bipartition(Part::new(vec![], vec![2, 3]), Part::new(vec![0], vec![]), Some(labels));
        assert_eq!(p.to_string(), " ∅     A \n─── ✕ ───\nC,D    ∅ ");
        assert_eq!(Part::new(vec![1], vec![]).to_string(), " 1 \n───\n ∅ ");
    }
}
