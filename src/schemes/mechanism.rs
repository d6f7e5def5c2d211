//! Partitions of a mechanism over a purview.

use std::sync::Arc;

use super::{partition_types, read, PartitionIter};
use crate::canonical::Canonicalizer;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::indices::{bipartition, directed_bipartition, directed_tripartition};
use crate::k_partitions::k_partitions;
use crate::labels::NodeLabels;
use crate::models::{KPartition, Part, PartitionKind};
use crate::permutations::distinct_permutations;
use crate::set_partitions::{set_partitions, SetPartitions};

/// Return the partitions of the configured scheme (`config.partition_type`).
pub fn mip_partitions(
    mechanism: &[usize],
    purview: &[usize],
    labels: Option<Arc<NodeLabels>>,
    config: &Config,
) -> Result<PartitionIter> {
    let scheme = read(partition_types()).get(&config.partition_type)?;
    Ok(scheme(mechanism, purview, labels))
}

/// Every bipartition of the mechanism paired with every directed bipartition
/// of the purview, except those leaving a part empty on both sides.
///
/// ```
/// use causal_partitions::schemes::mip_bipartitions;
///
/// let parts: Vec<_> = mip_bipartitions(&[0], &[2, 3], None).collect();
/// assert_eq!(parts.len(), 3);
/// assert_eq!(parts[2].to_string(), " ∅     0 \n─── ✕ ───\n2,3    ∅ ");
/// ```
pub fn mip_bipartitions(mechanism: &[usize], purview: &[usize], labels: Option<Arc<NodeLabels>>) -> PartitionIter {
    let numerators = bipartition(mechanism, false);
    let denominators = Arc::new(directed_bipartition(purview, false));
    Box::new(numerators.into_iter().flat_map(move |(n0, n1)| {
        let denominators = Arc::clone(&denominators);
        let labels = labels.clone();
        (0..denominators.len()).filter_map(move |i| {
            let (d0, d1) = &denominators[i];
            if (n0.is_empty() && d0.is_empty()) || (n1.is_empty() && d1.is_empty()) {
                return None;
            }
            Some(KPartition::bipartition(
                Part::new(n0.clone(), d0.clone()),
                Part::new(n1.clone(), d1.clone()),
                labels.clone(),
            ))
        })
    }))
}

/// Wedge partitions: the mechanism is split in two and part of the purview
/// may be cut away into a third part with an empty mechanism.
///
/// Results are normalized; compressible partitions and repeats are dropped.
pub fn wedge_partitions(mechanism: &[usize], purview: &[usize], labels: Option<Arc<NodeLabels>>) -> PartitionIter {
    Box::new(wedge(mechanism, purview, labels))
}

pub(crate) fn wedge(
    mechanism: &[usize],
    purview: &[usize],
    labels: Option<Arc<NodeLabels>>,
) -> impl Iterator<Item = KPartition> + Send {
    let numerators = bipartition(mechanism, false);
    let purview = purview.to_vec();
    let mut seen = Canonicalizer::new();
    numerators
        .into_iter()
        .flat_map(move |(n0, n1)| {
            let labels = labels.clone();
            directed_tripartition(purview.clone()).filter_map(move |(d0, d1, d2)| {
                let valid = (!n0.is_empty() || !d0.is_empty())
                    && (!n1.is_empty() || !d1.is_empty())
                    && ((!n0.is_empty() && !n1.is_empty()) || d0.is_empty() || d1.is_empty());
                valid.then(|| {
                    KPartition::tripartition(
                        Part::new(n0.clone(), d0),
                        Part::new(n1.clone(), d1),
                        Part::new(Vec::new(), d2),
                        labels.clone(),
                    )
                })
            })
        })
        .filter_map(move |p| seen.admit(&p))
}

/// Every partition of the mechanism and purview into any number of parts.
pub fn all_partitions(mechanism: &[usize], purview: &[usize], labels: Option<Arc<NodeLabels>>) -> PartitionIter {
    let mut whole = mechanism.to_vec();
    whole.sort_unstable();
    Box::new(AllPartitions {
        mechanism: whole,
        purview: purview.to_vec(),
        labels,
        mechanism_partitions: set_partitions(mechanism.to_vec(), false),
        blocks: Vec::new(),
        arrangements: Box::new(std::iter::empty()),
    })
}

type Arrangements = Box<dyn Iterator<Item = Vec<Vec<usize>>> + Send>;

struct AllPartitions {
    mechanism: Vec<usize>,
    purview: Vec<usize>,
    labels: Option<Arc<NodeLabels>>,
    mechanism_partitions: SetPartitions<usize>,
    // current mechanism blocks, with a trailing empty block
    blocks: Vec<Vec<usize>>,
    // purview blocks to zip with `blocks`
    arrangements: Arrangements,
}

// Every way to spread the purview over `n_parts` parts, some possibly empty.
fn arrangements(purview: Vec<usize>, n_parts: usize) -> Arrangements {
    Box::new((1..=purview.len().min(n_parts)).flat_map(move |k| {
        k_partitions(purview.clone(), k).flat_map(move |mut blocks| {
            blocks.resize(n_parts, Vec::new());
            distinct_permutations(blocks)
        })
    }))
}

impl Iterator for AllPartitions {
    type Item = KPartition;

    fn next(&mut self) -> Option<KPartition> {
        loop {
            if let Some(arrangement) = self.arrangements.next() {
                let parts: Vec<Part> = self
                    .blocks
                    .iter()
                    .zip(arrangement)
                    .map(|(m, p)| Part::new(m.clone(), p))
                    .collect();
                // the mechanism must be split unless the purview is cut away from it entirely
                if parts[0].mechanism() == self.mechanism.as_slice() && !parts[0].purview().is_empty() {
                    continue;
                }
                return Some(KPartition::new(PartitionKind::KPartition, parts, self.labels.clone()));
            }
            let mut blocks = self.mechanism_partitions.next()?;
            blocks.push(Vec::new());
            self.arrangements = arrangements(self.purview.clone(), blocks.len());
            self.blocks = blocks;
        }
    }
}

/// The partition separating the mechanism from the purview entirely, with as
/// many parts as the partitions of the configured scheme.
pub fn complete_partition(mechanism: &[usize], purview: &[usize], config: &Config) -> Result<KPartition> {
    let first = mip_partitions(mechanism, purview, None, config)?
        .next()
        .ok_or_else(|| Error::NoPartitions { scheme: config.partition_type.clone() })?;
    let mut parts = vec![Part::default(); first.len().saturating_sub(2)];
    parts.push(Part::new(Vec::new(), purview.to_vec()));
    parts.push(Part::new(mechanism.to_vec(), Vec::new()));
    Ok(KPartition::new(PartitionKind::Complete, parts, None))
}

/// The partition isolating every element: one `(e, e)` part per element.
pub fn atomic_partition(elements: &[usize]) -> KPartition {
    let parts = elements.iter().map(|&e| Part::new(vec![e], vec![e])).collect();
    KPartition::new(PartitionKind::Atomic, parts, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn covers(p: &KPartition, mechanism: &[usize], purview: &[usize]) {
        assert_eq!(p.mechanism(), mechanism, "{:?}", p);
        assert_eq!(p.purview(), purview, "{:?}", p);
    }

    #[test]
    fn bipartitions_of_one_over_two() {
        let got: Vec<Vec<Part>> = mip_bipartitions(&[0], &[2, 3], None).map(|p| p.parts().to_vec()).collect();
        assert_eq!(got, vec![
            vec![Part::new(vec![], vec![2]), Part::new(vec![0], vec![3])],
            vec![Part::new(vec![], vec![3]), Part::new(vec![0], vec![2])],
            vec![Part::new(vec![], vec![2, 3]), Part::new(vec![0], vec![])],
        ]);
    }

    #[test]
    fn bipartition_counts() {
        assert_eq!(mip_bipartitions(&[0, 1], &[0, 1], None).count(), 7);
        assert_eq!(mip_bipartitions(&[0, 1, 2], &[0, 1, 2], None).count(), 31);
        assert_eq!(mip_bipartitions(&[], &[0], None).count(), 0);
        for p in mip_bipartitions(&[0, 1, 2], &[3, 4], None) {
            covers(&p, &[0, 1, 2], &[3, 4]);
            assert_eq!(p.kind(), PartitionKind::Bipartition);
            assert!(p.iter().all(|part| !part.is_empty()));
        }
    }

    #[test]
    fn wedge_counts() {
        assert_eq!(wedge_partitions(&[0], &[0], None).count(), 1);
        assert_eq!(wedge_partitions(&[0], &[0, 1], None).count(), 1);
        assert_eq!(wedge_partitions(&[0, 1], &[2], None).count(), 3);
        assert_eq!(wedge_partitions(&[0, 1], &[0, 1], None).count(), 9);
        assert_eq!(wedge_partitions(&[0, 1, 2], &[0, 1, 2], None).count(), 79);
    }

    #[test]
    fn wedge_is_canonical() {
        let first: Vec<KPartition> = wedge_partitions(&[0, 1, 2], &[0, 1, 2], None).collect();
        let again: Vec<KPartition> = wedge_partitions(&[0, 1, 2], &[0, 1, 2], None).collect();
        assert_eq!(
            first.iter().map(|p| p.parts().to_vec()).collect::<Vec<_>>(),
            again.iter().map(|p| p.parts().to_vec()).collect::<Vec<_>>()
        );

        let distinct: HashSet<&KPartition> = first.iter().collect();
        assert_eq!(distinct.len(), first.len());
        for p in &first {
            assert!(!p.is_compressible(), "{}", p);
            assert_eq!(p.len(), 3);
            assert_eq!(p.kind(), PartitionKind::Tripartition);
            assert_eq!(p.parts(), p.normalize().parts());
            covers(p, &[0, 1, 2], &[0, 1, 2]);
        }
    }

    #[test]
    fn wedge_of_single_element() {
        let p: Vec<KPartition> = wedge_partitions(&[0], &[0, 1], None).collect();
        assert_eq!(p[0].parts(), &[Part::default(), Part::new(vec![], vec![0, 1]), Part::new(vec![0], vec![])]);
    }

    #[test]
    fn all_partition_counts() {
        assert_eq!(all_partitions(&[0], &[0], None).count(), 1);
        assert_eq!(all_partitions(&[0, 1], &[0, 1], None).count(), 10);
        assert_eq!(all_partitions(&[0, 1], &[2], None).count(), 4);

        let all: Vec<KPartition> = all_partitions(&[0, 1, 2], &[0, 1], None).collect();
        assert_eq!(all.len(), 44);
        assert_eq!(all.iter().collect::<HashSet<_>>().len(), 44);
        for p in &all {
            covers(p, &[0, 1, 2], &[0, 1]);
        }

        let p: Vec<KPartition> = all_partitions(&[0], &[0, 1], None).collect();
        assert_eq!(p[0].parts(), &[Part::new(vec![0], vec![]), Part::new(vec![], vec![0, 1])]);
    }

    #[test]
    fn complete_and_atomic() {
        let config = Config::default();
        let c = complete_partition(&[0, 1], &[2], &config).unwrap();
        assert_eq!(c.kind(), PartitionKind::Complete);
        assert_eq!(c.parts(), &[Part::new(vec![], vec![2]), Part::new(vec![0, 1], vec![])]);

        let c = complete_partition(&[0, 1], &[2], &config.clone().with_partition_type("TRI")).unwrap();
        assert_eq!(c.parts(), &[Part::default(), Part::new(vec![], vec![2]), Part::new(vec![0, 1], vec![])]);

        assert!(matches!(
            complete_partition(&[], &[2], &config),
            Err(Error::NoPartitions { .. })
        ));

        let a = atomic_partition(&[1, 3]);
        assert_eq!(a.kind(), PartitionKind::Atomic);
        assert_eq!(a.parts(), &[Part::new(vec![1], vec![1]), Part::new(vec![3], vec![3])]);
    }

    #[test]
    fn configured_dispatch() {
        let config = Config::default().with_partition_type("ALL");
        assert_eq!(mip_partitions(&[0, 1], &[2], None, &config).unwrap().count(), 4);
        let config = Config::default();
        assert_eq!(mip_partitions(&[0], &[2, 3], None, &config).unwrap().count(), 3);
    }
}
