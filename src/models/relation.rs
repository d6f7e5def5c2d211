//! Partitions of the overlap among several distinctions.

use std::fmt;
use std::sync::Arc;

use super::part::{fmt_parts, KPartition, Part};

/// One distinction taking part in a relation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Relatum {
    /// Mechanism of the distinction
    pub mechanism: Vec<usize>,
    /// Purview of the distinction
    pub purview: Vec<usize>,
}

impl Relatum {
    /// Create a relatum.
    pub fn new(mechanism: Vec<usize>, purview: Vec<usize>) -> Self {
        Relatum { mechanism, purview }
    }
}

/// A partition whose part mechanisms are indices into `relata` rather than
/// node indices; the purviews are node indices from the joint purview.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationPartition {
    relata: Arc<[Relatum]>,
    partition: KPartition,
}

impl RelationPartition {
    /// Pair a partition over relatum indices with the relata it indexes.
    pub fn new(relata: Arc<[Relatum]>, partition: KPartition) -> Self {
        debug_assert!(partition.mechanism().iter().all(|&i| i < relata.len()));
        RelationPartition { relata, partition }
    }

    /// The related distinctions.
    pub fn relata(&self) -> &[Relatum] {
        &self.relata
    }

    /// The underlying partition over relatum indices.
    pub fn partition(&self) -> &KPartition {
        &self.partition
    }

    /// The parts.
    pub fn parts(&self) -> &[Part] {
        self.partition.parts()
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.partition.len()
    }

    /// Returns `true` if there are no parts.
    pub fn is_empty(&self) -> bool {
        self.partition.is_empty()
    }

    /// The relata grouped in each part.
    pub fn part_relata(&self, part: usize) -> Vec<&Relatum> {
        self.partition[part].mechanism().iter().map(|&i| &self.relata[i]).collect()
    }
}

impl fmt::Display for RelationPartition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // relata are shown by position, purviews by node label
        f.write_str(&fmt_parts(self.parts(), None, self.partition.labels().map(Arc::as_ref)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_index_relata() {
        let relata: Arc<[Relatum]> = vec![
            Relatum::new(vec![0], vec![1]),
            Relatum::new(vec![1], vec![1, 2]),
            Relatum::new(vec![0, 1], vec![2]),
        ]
        .into();
        let p = KPartition::bipartition(Part::new(vec![1], vec![]), Part::new(vec![0, 2], vec![1, 2]), None);
        let rp = RelationPartition::new(relata, p);
        assert_eq!(rp.len(), 2);
        assert_eq!(rp.part_relata(0), vec![&Relatum::new(vec![1], vec![1, 2])]);
        assert_eq!(rp.part_relata(1).len(), 2);
        assert_eq!(rp.relata().len(), 3);
        assert_eq!(rp.to_string(), " 1    0,2\n─── ✕ ───\n ∅    1,2");
    }
}
