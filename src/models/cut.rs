//! Cuts severing connections between the nodes of a system.
//!
//! Connectivity matrices are `n × n` with `cm[[i, j]] == 1` when node `i`
//! connects to node `j`. A cut marks the connections it severs in its own
//! cut matrix; applying it zeroes those entries of a connectivity matrix.

use std::fmt;
use std::sync::Arc;

use ndarray::Array2;

use crate::labels::{fmt_nodes, NodeLabels};

const CUT_ARROW: &str = "━━/ /━━➤";

fn fmt_side(nodes: &[usize], labels: Option<&NodeLabels>) -> String {
    if nodes.is_empty() {
        "∅".to_owned()
    } else {
        fmt_nodes(nodes, labels)
    }
}

// cm * (1 - cut), elementwise
fn sever(cm: &Array2<u8>, cut: &Array2<u8>) -> Array2<u8> {
    let mut out = cm.clone();
    out.zip_mut_with(cut, |c, &s| {
        if s != 0 {
            *c = 0;
        }
    });
    out
}

/// Direction of a temporal cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Toward the past
    Cause,
    /// Toward the future
    Effect,
}

impl Direction {
    /// Both directions, cause first.
    pub fn both() -> [Direction; 2] {
        [Direction::Cause, Direction::Effect]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Cause => f.write_str("CAUSE"),
            Direction::Effect => f.write_str("EFFECT"),
        }
    }
}

/// A unidirectional cut: every connection from `from_nodes` to `to_nodes`
/// is severed, connections the other way are kept.
#[derive(Debug, Clone)]
pub struct Cut {
    from_nodes: Vec<usize>,
    to_nodes: Vec<usize>,
    labels: Option<Arc<NodeLabels>>,
}

impl Cut {
    /// Create a cut; both node lists are sorted.
    pub fn new(mut from_nodes: Vec<usize>, mut to_nodes: Vec<usize>, labels: Option<Arc<NodeLabels>>) -> Self {
        from_nodes.sort_unstable();
        to_nodes.sort_unstable();
        Cut { from_nodes, to_nodes, labels }
    }

    /// Nodes whose outgoing connections are severed.
    pub fn from_nodes(&self) -> &[usize] {
        &self.from_nodes
    }

    /// Nodes whose incoming connections are severed.
    pub fn to_nodes(&self) -> &[usize] {
        &self.to_nodes
    }

    /// Labels used for display.
    pub fn labels(&self) -> Option<&Arc<NodeLabels>> {
        self.labels.as_ref()
    }

    /// Sorted union of both sides.
    pub fn indices(&self) -> Vec<usize> {
        let mut all: Vec<usize> = self.from_nodes.iter().chain(&self.to_nodes).copied().collect();
        all.sort_unstable();
        all.dedup();
        all
    }

    /// The `n × n` matrix with a 1 at each severed `from → to` connection.
    ///
    /// # Panics
    ///
    /// If a node index is not below `n`.
    pub fn cut_matrix(&self, n: usize) -> Array2<u8> {
        let mut cm = Array2::zeros((n, n));
        for &i in &self.from_nodes {
            for &j in &self.to_nodes {
                cm[[i, j]] = 1;
            }
        }
        cm
    }

    /// Zero the connections of `cm` that this cut severs.
    ///
    /// # Panics
    ///
    /// If `cm` is not square, or a node index is not below `cm.nrows()`.
    pub fn apply_cut(&self, cm: &Array2<u8>) -> Array2<u8> {
        sever(cm, &self.cut_matrix(cm.nrows()))
    }

    /// Returns `true` if the cut severs nothing.
    pub fn is_null(&self) -> bool {
        self.from_nodes.is_empty() || self.to_nodes.is_empty()
    }
}

impl PartialEq for Cut {
    fn eq(&self, other: &Self) -> bool {
        self.from_nodes == other.from_nodes && self.to_nodes == other.to_nodes
    }
}

impl Eq for Cut {}

impl fmt::Display for Cut {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let labels = self.labels.as_deref();
        write!(f, "{} {} {}", fmt_side(&self.from_nodes, labels), CUT_ARROW, fmt_side(&self.to_nodes, labels))
    }
}

/// A cut applied in one temporal direction only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalCut {
    /// Direction the cut applies to
    pub direction: Direction,
    /// The severed connections
    pub cut: Cut,
}

impl TemporalCut {
    /// Create a temporal cut from `from_nodes` to `to_nodes`.
    pub fn new(direction: Direction, from_nodes: Vec<usize>, to_nodes: Vec<usize>, labels: Option<Arc<NodeLabels>>) -> Self {
        TemporalCut { direction, cut: Cut::new(from_nodes, to_nodes, labels) }
    }
}

impl fmt::Display for TemporalCut {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.direction, self.cut)
    }
}

/// An arbitrary set of severed connections among `node_indices`.
///
/// `matrix[[a, b]] == 1` severs the connection from `node_indices[a]` to
/// `node_indices[b]`.
#[derive(Debug, Clone)]
pub struct GeneralKCut {
    node_indices: Vec<usize>,
    matrix: Array2<u8>,
    labels: Option<Arc<NodeLabels>>,
    complete: bool,
}

impl GeneralKCut {
    /// Create a cut from a `k × k` matrix over `node_indices`.
    ///
    /// # Panics
    ///
    /// If the matrix is not `k × k`.
    pub fn new(node_indices: Vec<usize>, matrix: Array2<u8>, labels: Option<Arc<NodeLabels>>) -> Self {
        let k = node_indices.len();
        assert_eq!(matrix.dim(), (k, k), "cut matrix must be {} × {}", k, k);
        GeneralKCut { node_indices, matrix, labels, complete: false }
    }

    /// The cut severing every connection among `node_indices`, self-loops
    /// included.
    pub fn complete(node_indices: Vec<usize>, labels: Option<Arc<NodeLabels>>) -> Self {
        let k = node_indices.len();
        GeneralKCut { node_indices, matrix: Array2::ones((k, k)), labels, complete: true }
    }

    /// Returns `true` for the cut built by `GeneralKCut::complete`.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The nodes the matrix is indexed by.
    pub fn node_indices(&self) -> &[usize] {
        &self.node_indices
    }

    /// The local `k × k` matrix.
    pub fn matrix(&self) -> &Array2<u8> {
        &self.matrix
    }

    /// Sorted node indices.
    pub fn indices(&self) -> Vec<usize> {
        let mut all = self.node_indices.clone();
        all.sort_unstable();
        all
    }

    /// The local matrix embedded in an `n × n` matrix.
    ///
    /// # Panics
    ///
    /// If a node index is not below `n`.
    pub fn cut_matrix(&self, n: usize) -> Array2<u8> {
        let mut cm = Array2::zeros((n, n));
        for ((a, b), &v) in self.matrix.indexed_iter() {
            cm[[self.node_indices[a], self.node_indices[b]]] = v;
        }
        cm
    }

    /// Zero the connections of `cm` that this cut severs.
    ///
    /// # Panics
    ///
    /// If `cm` is not square, or a node index is not below `cm.nrows()`.
    pub fn apply_cut(&self, cm: &Array2<u8>) -> Array2<u8> {
        sever(cm, &self.cut_matrix(cm.nrows()))
    }

    /// Returns `true` if no connection is severed.
    pub fn is_null(&self) -> bool {
        self.matrix.iter().all(|&v| v == 0)
    }
}

impl PartialEq for GeneralKCut {
    fn eq(&self, other: &Self) -> bool {
        self.node_indices == other.node_indices && self.matrix == other.matrix
    }
}

impl Eq for GeneralKCut {}

impl fmt::Display for GeneralKCut {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let labels = self.labels.as_deref();
        let names: Vec<String> = self.node_indices.iter().map(|i| fmt_nodes(&[*i], labels)).collect();
        if self.complete {
            return write!(f, "Complete cut {{{}}}", names.join(","));
        }
        let width = names.iter().map(|s| s.chars().count()).max().unwrap_or(1);
        write!(f, "{:w$}", "", w = width)?;
        for name in &names {
            write!(f, " {:>w$}", name, w = width)?;
        }
        for (name, row) in names.iter().zip(self.matrix.rows()) {
            write!(f, "\n{:>w$}", name, w = width)?;
            for v in row {
                write!(f, " {:>w$}", v, w = width)?;
            }
        }
        Ok(())
    }
}

/// Any cut a system-level scheme can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemCut {
    /// A unidirectional bipartition cut
    Directed(Cut),
    /// A bipartition cut in one temporal direction
    Temporal(TemporalCut),
    /// An arbitrary cut matrix
    General(GeneralKCut),
}

impl SystemCut {
    /// Sorted indices of the nodes the cut concerns.
    pub fn indices(&self) -> Vec<usize> {
        match self {
            SystemCut::Directed(c) => c.indices(),
            SystemCut::Temporal(t) => t.cut.indices(),
            SystemCut::General(g) => g.indices(),
        }
    }

    /// The `n × n` matrix of severed connections.
    ///
    /// # Panics
    ///
    /// If a node index is not below `n`.
    pub fn cut_matrix(&self, n: usize) -> Array2<u8> {
        match self {
            SystemCut::Directed(c) => c.cut_matrix(n),
            SystemCut::Temporal(t) => t.cut.cut_matrix(n),
            SystemCut::General(g) => g.cut_matrix(n),
        }
    }

    /// Zero the connections of `cm` that the cut severs.
    ///
    /// # Panics
    ///
    /// If `cm` is not square, or a node index is not below `cm.nrows()`.
    pub fn apply_cut(&self, cm: &Array2<u8>) -> Array2<u8> {
        match self {
            SystemCut::Directed(c) => c.apply_cut(cm),
            SystemCut::Temporal(t) => t.cut.apply_cut(cm),
            SystemCut::General(g) => g.apply_cut(cm),
        }
    }

    /// Returns `true` if the cut severs nothing.
    pub fn is_null(&self) -> bool {
        match self {
            SystemCut::Directed(c) => c.is_null(),
            SystemCut::Temporal(t) => t.cut.is_null(),
            SystemCut::General(g) => g.is_null(),
        }
    }
}

impl From<Cut> for SystemCut {
    fn from(c: Cut) -> Self {
        SystemCut::Directed(c)
    }
}

impl From<TemporalCut> for SystemCut {
    fn from(t: TemporalCut) -> Self {
        SystemCut::Temporal(t)
    }
}

impl From<GeneralKCut> for SystemCut {
    fn from(g: GeneralKCut) -> Self {
        SystemCut::General(g)
    }
}

impl fmt::Display for SystemCut {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SystemCut::Directed(c) => c.fmt(f),
            SystemCut::Temporal(t) => t.fmt(f),
            SystemCut::General(g) => g.fmt(f),
        }
    }
}
