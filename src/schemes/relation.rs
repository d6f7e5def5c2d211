//! Partitions of the overlap between related distinctions.

use std::sync::Arc;

use super::mechanism::wedge;
use super::{read, relation_partition_types, RelationPartitionIter};
use crate::config::Config;
use crate::error::Result;
use crate::labels::NodeLabels;
use crate::models::{KPartition, Part, RelationPartition, Relatum};

/// Return the relation partitions of the configured scheme
/// (`config.relation_partition_type`).
pub fn relation_partitions(
    relata: Arc<[Relatum]>,
    candidate_joint_purview: &[usize],
    labels: Option<Arc<NodeLabels>>,
    config: &Config,
) -> Result<RelationPartitionIter> {
    let scheme = read(relation_partition_types()).get(&config.relation_partition_type)?;
    Ok(scheme(relata, candidate_joint_purview, labels))
}

/// Wedge partitions of the relata (by position) over the joint purview.
pub fn relation_tripartitions(
    relata: Arc<[Relatum]>,
    candidate_joint_purview: &[usize],
    labels: Option<Arc<NodeLabels>>,
) -> RelationPartitionIter {
    let positions: Vec<usize> = (0..relata.len()).collect();
    Box::new(
        wedge(&positions, candidate_joint_purview, labels)
            .map(move |p| RelationPartition::new(Arc::clone(&relata), p)),
    )
}

/// For each relatum, the partition cutting it away from the joint purview
/// while the other relata keep all of it.
pub fn relation_bipartitions_of_one(
    relata: Arc<[Relatum]>,
    candidate_joint_purview: &[usize],
    labels: Option<Arc<NodeLabels>>,
) -> RelationPartitionIter {
    let purview = candidate_joint_purview.to_vec();
    Box::new((0..relata.len()).map(move |i| {
        let others: Vec<usize> = (0..relata.len()).filter(|&j| j != i).collect();
        let partition = KPartition::bipartition(
            Part::new(vec![i], Vec::new()),
            Part::new(others, purview.clone()),
            labels.clone(),
        );
        RelationPartition::new(Arc::clone(&relata), partition)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relata() -> Arc<[Relatum]> {
        vec![
            Relatum::new(vec![0], vec![1, 2]),
            Relatum::new(vec![1], vec![1]),
            Relatum::new(vec![0, 1], vec![1, 2]),
        ]
        .into()
    }

    #[test]
    fn cut_one_relatum() {
        let got: Vec<RelationPartition> = relation_bipartitions_of_one(relata(), &[1], None).collect();
        assert_eq!(got.len(), 3);
        assert_eq!(got[1].parts(), &[Part::new(vec![1], vec![]), Part::new(vec![0, 2], vec![1])]);
        assert_eq!(got[1].part_relata(0), vec![&Relatum::new(vec![1], vec![1])]);
    }

    #[test]
    fn tripartitions_match_wedge() {
        let got: Vec<RelationPartition> = relation_tripartitions(relata(), &[1, 2], None).collect();
        let want: Vec<KPartition> = wedge(&[0, 1, 2], &[1, 2], None).collect();
        assert_eq!(got.len(), want.len());
        for (g, w) in got.iter().zip(&want) {
            assert_eq!(g.parts(), w.parts());
            assert_eq!(g.relata().len(), 3);
        }
    }

    #[test]
    fn configured_dispatch() {
        let config = Config::default().with_relation_partition_type("BI_CUT_ONE");
        assert_eq!(relation_partitions(relata(), &[1], None, &config).unwrap().count(), 3);
        let config = Config::default();
        assert!(relation_partitions(relata(), &[1], None, &config).unwrap().count() > 0);
    }
}
