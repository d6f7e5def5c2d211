//! Canonical ordering and deduplication of generated partitions.

use std::collections::HashSet;

use crate::intersection::pairs;
use crate::models::{KPartition, Part};

impl KPartition {
    /// The same partition with its parts in canonical (sorted) order.
    pub fn normalize(&self) -> KPartition {
        self.with_parts(self.canonical_form())
    }

    /// The sorted parts, which identify the partition regardless of order.
    ///
    /// # Panics
    ///
    /// If an index appears in two parts on the same axis.
    pub fn canonical_form(&self) -> Vec<Part> {
        assert_disjoint(self.parts().iter().map(Part::mechanism), "mechanism");
        assert_disjoint(self.parts().iter().map(Part::purview), "purview");
        self.sorted_parts().into_iter().cloned().collect()
    }

    /// Returns `true` if two non-empty parts could be merged into one: both
    /// have an empty mechanism, or both have an empty purview.
    pub fn is_compressible(&self) -> bool {
        pairs(self.parts(), 1).any(|(a, b)| {
            !a.is_empty()
                && !b.is_empty()
                && ((a.mechanism().is_empty() && b.mechanism().is_empty())
                    || (a.purview().is_empty() && b.purview().is_empty()))
        })
    }
}

fn assert_disjoint<'a>(sides: impl Iterator<Item = &'a [usize]>, axis: &str) {
    let mut seen = HashSet::new();
    for side in sides {
        for i in side {
            assert!(seen.insert(*i), "malformed partition: {} index {} appears in two parts", axis, i);
        }
    }
}

/// Filters a stream of partitions down to canonical, incompressible,
/// never-seen-before ones.
#[derive(Debug, Default)]
pub struct Canonicalizer {
    seen: HashSet<Vec<Part>>,
}

impl Canonicalizer {
    /// An empty seen-set.
    pub fn new() -> Self {
        Canonicalizer::default()
    }

    /// Normalize `partition` and return it unless it is compressible or an
    /// equivalent partition was admitted before.
    ///
    /// # Panics
    ///
    /// If the partition is malformed (see `KPartition::canonical_form`).
    pub fn admit(&mut self, partition: &KPartition) -> Option<KPartition> {
        let form = partition.canonical_form();
        let normalized = partition.with_parts(form.clone());
        if normalized.is_compressible() || !self.seen.insert(form) {
            return None;
        }
        Some(normalized)
    }

    /// Number of distinct partitions admitted so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` if nothing was admitted yet.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PartitionKind;

    fn tri(a: Part, b: Part, c: Part) -> KPartition {
        KPartition::tripartition(a, b, c, None)
    }

    #[test]
    fn normalize_sorts_parts() {
        let p = tri(Part::new(vec![1], vec![2]), Part::new(vec![0], vec![]), Part::new(vec![], vec![1]));
        let n = p.normalize();
        assert_eq!(n.parts(), &[Part::new(vec![], vec![1]), Part::new(vec![0], vec![]), Part::new(vec![1], vec![2])]);
        assert_eq!(n.kind(), PartitionKind::Tripartition);
        assert_eq!(n, p);
    }

    #[test]
    fn compressible() {
        // two purview-only parts
        let p = tri(Part::new(vec![0], vec![0]), Part::new(vec![], vec![1]), Part::new(vec![], vec![2]));
        assert!(p.is_compressible());
        // two mechanism-only parts
        let p = tri(Part::new(vec![0], vec![]), Part::new(vec![1], vec![]), Part::new(vec![], vec![2]));
        assert!(p.is_compressible());
        // an empty part does not count
        let p = tri(Part::new(vec![0], vec![1]), Part::new(vec![1], vec![0]), Part::default());
        assert!(!p.is_compressible());
        let p = tri(Part::new(vec![0], vec![]), Part::new(vec![1], vec![0]), Part::new(vec![], vec![1]));
        assert!(!p.is_compressible());
    }

    #[test]
    fn admits_each_partition_once() {
        let mut c = Canonicalizer::new();
        let p = tri(Part::new(vec![0], vec![]), Part::new(vec![1], vec![0]), Part::new(vec![], vec![1]));
        let q = tri(Part::new(vec![], vec![1]), Part::new(vec![1], vec![0]), Part::new(vec![0], vec![]));
        assert!(c.admit(&p).is_some());
        assert!(c.admit(&q).is_none());
        assert_eq!(c.len(), 1);

        let compressible = tri(Part::new(vec![0], vec![]), Part::new(vec![1], vec![]), Part::new(vec![], vec![0]));
        assert!(c.admit(&compressible).is_none());
        assert_eq!(c.len(), 1);
    }

    #[test]
    #[should_panic(expected = "malformed partition")]
    fn overlapping_parts_panic() {
        let p = KPartition::bipartition(Part::new(vec![0], vec![1]), Part::new(vec![0], vec![2]), None);
        p.canonical_form();
    }
}
