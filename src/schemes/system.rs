//! Cuts of a whole system of nodes.

use std::sync::Arc;

use ndarray::Array2;

use super::{read, system_partition_types, SystemCutIter};
use crate::config::Config;
use crate::error::Result;
use crate::indices::{directed_bipartition, directed_bipartition_of_one};
use crate::labels::NodeLabels;
use crate::models::{Cut, Direction, GeneralKCut, SystemCut, TemporalCut};

/// Return the cuts of `scheme`, or of `config.system_partition_type` when no
/// scheme is given.
///
/// ```
/// use causal_partitions::{schemes::system_partitions, Config};
///
/// let cuts: Vec<_> = system_partitions(&[0, 1], None, None, &Config::default())?.collect();
/// assert_eq!(cuts.len(), 2);
/// assert_eq!(cuts[0].to_string(), "0 ━━/ /━━➤ 1");
/// # Ok::<(), causal_partitions::Error>(())
/// ```
pub fn system_partitions(
    nodes: &[usize],
    labels: Option<Arc<NodeLabels>>,
    scheme: Option<&str>,
    config: &Config,
) -> Result<SystemCutIter> {
    let name = scheme.unwrap_or(&config.system_partition_type);
    let strategy = read(system_partition_types()).get(name)?;
    Ok(strategy(nodes, labels))
}

fn cuts(bipartitions: Vec<(Vec<usize>, Vec<usize>)>, labels: Option<Arc<NodeLabels>>) -> SystemCutIter {
    Box::new(
        bipartitions
            .into_iter()
            .map(move |(from, to)| SystemCut::from(Cut::new(from, to, labels.clone()))),
    )
}

fn temporal_cuts(bipartitions: Vec<(Vec<usize>, Vec<usize>)>, labels: Option<Arc<NodeLabels>>) -> SystemCutIter {
    Box::new(bipartitions.into_iter().flat_map(move |(from, to)| {
        let labels = labels.clone();
        Direction::both()
            .into_iter()
            .map(move |d| SystemCut::from(TemporalCut::new(d, from.clone(), to.clone(), labels.clone())))
    }))
}

/// Every directed bipartition with both parts non-empty, as a cut.
pub fn directed_bipartitions(nodes: &[usize], labels: Option<Arc<NodeLabels>>) -> SystemCutIter {
    cuts(directed_bipartition(nodes, true), labels)
}

/// Cuts isolating a single node, outgoing first, then incoming.
pub fn directed_bipartitions_cut_one(nodes: &[usize], labels: Option<Arc<NodeLabels>>) -> SystemCutIter {
    cuts(directed_bipartition_of_one(nodes).collect(), labels)
}

/// Prefix/suffix splits of the node order, each cut in both directions.
pub fn bipartitions_simple(nodes: &[usize], labels: Option<Arc<NodeLabels>>) -> SystemCutIter {
    let splits = (1..nodes.len())
        .flat_map(|n| {
            let (head, tail) = nodes.split_at(n);
            [(head.to_vec(), tail.to_vec()), (tail.to_vec(), head.to_vec())]
        })
        .collect();
    cuts(splits, labels)
}

/// Every non-trivial directed bipartition, cut in each temporal direction.
pub fn temporal_directed_bipartitions(nodes: &[usize], labels: Option<Arc<NodeLabels>>) -> SystemCutIter {
    temporal_cuts(directed_bipartition(nodes, true), labels)
}

/// Every single-node cut, in each temporal direction.
pub fn temporal_directed_bipartitions_cut_one(nodes: &[usize], labels: Option<Arc<NodeLabels>>) -> SystemCutIter {
    temporal_cuts(directed_bipartition_of_one(nodes).collect(), labels)
}

/// The complete cut, then every non-zero cut matrix over the nodes.
pub fn general(nodes: &[usize], labels: Option<Arc<NodeLabels>>) -> SystemCutIter {
    let node_indices = nodes.to_vec();
    let complete = GeneralKCut::complete(node_indices.clone(), labels.clone());
    Box::new(
        std::iter::once(SystemCut::from(complete)).chain(
            CutMatrices::new(nodes.len())
                .map(move |cm| SystemCut::from(GeneralKCut::new(node_indices.clone(), cm, labels.clone()))),
        ),
    )
}

/// Lazily yields every `n × n` binary matrix with a zero diagonal, except the
/// all-zero one.
///
/// The off-diagonal entries are counted through as one binary number: the
/// upper triangle (row-major) is the high half, the lower triangle
/// (row-major) the low half, so the first matrix has only the last
/// lower-triangle entry set.
#[derive(Debug, Clone)]
pub struct CutMatrices {
    n: usize,
    bits: Vec<u8>,
    done: bool,
}

impl CutMatrices {
    /// Matrices over `n` nodes; nothing for `n < 2`.
    pub fn new(n: usize) -> Self {
        let repeat = n * n.saturating_sub(1);
        CutMatrices { n, bits: vec![0; repeat], done: false }
    }

    // binary increment, last bit fastest; false on wrap-around
    fn increment(&mut self) -> bool {
        for bit in self.bits.iter_mut().rev() {
            if *bit == 0 {
                *bit = 1;
                return true;
            }
            *bit = 0;
        }
        false
    }

    fn matrix(&self) -> Array2<u8> {
        let n = self.n;
        let mut cm = Array2::zeros((n, n));
        let upper = (0..n).flat_map(|i| (i + 1..n).map(move |j| (i, j)));
        let lower = (0..n).flat_map(|i| (0..i).map(move |j| (i, j)));
        for ((i, j), &bit) in upper.chain(lower).zip(&self.bits) {
            cm[[i, j]] = bit;
        }
        cm
    }
}

impl Iterator for CutMatrices {
    type Item = Array2<u8>;

    fn next(&mut self) -> Option<Array2<u8>> {
        if self.done || !self.increment() {
            self.done = true;
            return None;
        }
        Some(self.matrix())
    }
}
