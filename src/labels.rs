//! Human-readable node labels.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};

/// Injective labels for a set of node indices, used when displaying parts and cuts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLabels {
    labels: Vec<String>,
    node_indices: Vec<usize>,
    by_label: HashMap<String, usize>,
    by_index: HashMap<usize, usize>,
}

/// The label given to a node when none is supplied.
pub fn default_label(index: usize) -> String {
    format!("n{}", index)
}

impl NodeLabels {
    /// Pair `labels` with `node_indices`, one label per index, with no label or
    /// index repeated.
    pub fn new<S: Into<String>>(labels: Vec<S>, node_indices: &[usize]) -> Result<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != node_indices.len() {
            return Err(Error::LabelCountMismatch { expected: node_indices.len(), actual: labels.len() });
        }
        let mut by_label = HashMap::with_capacity(labels.len());
        let mut by_index = HashMap::with_capacity(labels.len());
        for (pos, (label, index)) in labels.iter().zip(node_indices).enumerate() {
            if by_label.insert(label.clone(), *index).is_some() {
                return Err(Error::DuplicateLabel(label.clone()));
            }
            if by_index.insert(*index, pos).is_some() {
                return Err(Error::DuplicateNodeIndex(*index));
            }
        }
        Ok(NodeLabels { labels, node_indices: node_indices.to_vec(), by_label, by_index })
    }

    /// Default labels (`n0`, `n1`, ...) for the given indices.
    pub fn default_for(node_indices: &[usize]) -> Self {
        let labels: Vec<String> = node_indices.iter().map(|i| default_label(*i)).collect();
        let by_label = labels.iter().cloned().zip(node_indices.iter().copied()).collect();
        let by_index = node_indices.iter().enumerate().map(|(pos, i)| (*i, pos)).collect();
        NodeLabels { labels, node_indices: node_indices.to_vec(), by_label, by_index }
    }

    /// The labels, in node order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The labelled node indices.
    pub fn node_indices(&self) -> &[usize] {
        &self.node_indices
    }

    /// Label of a node index; unlabelled indices get their default label.
    pub fn label(&self, index: usize) -> String {
        match self.by_index.get(&index) {
            Some(pos) => self.labels[*pos].clone(),
            None => default_label(index),
        }
    }

    /// Labels of a sequence of indices.
    pub fn indices2labels(&self, indices: &[usize]) -> Vec<String> {
        indices.iter().map(|i| self.label(*i)).collect()
    }

    /// Indices of a sequence of labels.
    pub fn labels2indices<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<usize>> {
        labels
            .iter()
            .map(|l| {
                self.by_label
                    .get(l.as_ref())
                    .copied()
                    .ok_or_else(|| Error::UnknownLabel(l.as_ref().to_owned()))
            })
            .collect()
    }
}

impl fmt::Display for NodeLabels {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NodeLabels({})", self.labels.join(", "))
    }
}

/// Join the labels of `indices` with commas, or the bare indices without labels.
pub(crate) fn fmt_nodes(indices: &[usize], labels: Option<&NodeLabels>) -> String {
    indices
        .iter()
        .map(|i| match labels {
            Some(l) => l.label(*i),
            None => i.to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_lookup() {
        let l = NodeLabels::new(vec!["A", "B", "C"], &[0, 1, 2]).unwrap();
        assert_eq!(l.indices2labels(&[2, 0]), vec!["C", "A"]);
        assert_eq!(l.labels2indices(&["B", "C"]).unwrap(), vec![1, 2]);
        assert_eq!(l.label(7), "n7");
        assert_eq!(l.to_string(), "NodeLabels(A, B, C)");
    }

    #[test]
    fn rejects_bad_labels() {
        assert!(matches!(NodeLabels::new(vec!["A", "A"], &[0, 1]), Err(Error::DuplicateLabel(l)) if l == "A"));
        assert!(matches!(
            NodeLabels::new(vec!["A"], &[0, 1]),
            Err(Error::LabelCountMismatch { expected: 2, actual: 1 })
        ));
        assert!(matches!(NodeLabels::new(vec!["A", "B"], &[0, 0]), Err(Error::DuplicateNodeIndex(0))));
        let l = NodeLabels::default_for(&[3, 4]);
        assert!(matches!(l.labels2indices(&["Z"]), Err(Error::UnknownLabel(_))));
        assert_eq!(l.labels(), &["n3".to_owned(), "n4".to_owned()]);
    }

    #[test]
    fn node_formatting() {
        let l = NodeLabels::new(vec!["A", "B"], &[0, 1]).unwrap();
        assert_eq!(fmt_nodes(&[0, 1], Some(&l)), "A,B");
        assert_eq!(fmt_nodes(&[0, 1], None), "0,1");
        assert_eq!(fmt_nodes(&[], None), "");
    }
}
