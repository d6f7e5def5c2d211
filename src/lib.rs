#![deny(missing_docs)]

//! The **causal-partitions** crate enumerates the ways a causal system can be
//! cut apart: partitions of a mechanism over a purview, partitions of the
//! overlap between related distinctions, and cuts of a whole system of nodes.
//!
//! Underneath sit the purely combinatorial generators: bipartition and
//! tripartition index lists of `{0..n-1}`, set partitions, partitions into
//! exactly `k` blocks, combinations of sets with a non-empty common
//! intersection, bounded power sets and maximal independent sets. Each is a
//! lazy iterator; dropping it stops the work.
//!
//! # How to use
//!
//! For the combinatorics, call the free functions (`bipartition_indices`,
//! `set_partitions`, `k_partitions`, `combinations_with_nonempty_intersection`,
//! ...) directly.
//!
//! For partitions and cuts, pick a scheme by name through a `Config` and call
//! `schemes::mip_partitions`, `schemes::relation_partitions` or
//! `schemes::system_partitions`. The built-in schemes live in process-wide
//! registries; register your own with `schemes::register_partition_type` and
//! friends, then select them by name like the built-ins.
//!
//! ```
//! use causal_partitions::{schemes, Config};
//!
//! let config = Config::default().with_partition_type("TRI");
//! for partition in schemes::mip_partitions(&[0, 1], &[0, 1], None, &config)? {
//!     assert_eq!(partition.len(), 3);
//!     assert!(!partition.is_compressible());
//! }
//! # Ok::<(), causal_partitions::Error>(())
//! ```
//!
//! See <http://www-cs-faculty.stanford.edu/~uno/fasc3b.ps.gz> for the
//! restricted growth string algorithms behind `set_partitions` and
//! `k_partitions`.

mod cache;
mod canonical;
mod config;
mod count;
mod error;
mod families;
mod indices;
mod intersection;
mod k_partitions;
mod labels;
mod permutations;
mod set_partitions;

pub mod models;
pub mod registry;
pub mod schemes;

pub use crate::cache::{IndexCache, DEFAULT_CAPACITY};
pub use crate::canonical::Canonicalizer;
pub use crate::config::{Config, DuplicatePolicy};
pub use crate::count::{bell_number, num_subsets_larger_than_one_element, stirling2};
pub use crate::error::{Error, Result};
pub use crate::families::{
    maximal_independent_sets, powerset_family, union_powerset_family, MaximalIndependentSets, PowersetFamily,
    UnionPowersetFamily,
};
pub use crate::indices::{
    bipartition, bipartition_indices, bipartition_of_one, clear_index_caches, directed_bipartition,
    directed_bipartition_indices, directed_bipartition_of_one, directed_tripartition, directed_tripartition_indices,
    DirectedTripartitionIndices, IndexBipartition, IndexTripartition,
};
pub use crate::intersection::{
    combinations_with_nonempty_intersection, combinations_with_nonempty_intersection_by_order, pair_indices, pairs,
    Combination, NonemptyIntersections,
};
pub use crate::k_partitions::{k_partitions, KPartitions};
pub use crate::labels::{default_label, NodeLabels};
pub use crate::models::{
    Cut, Direction, GeneralKCut, KPartition, Part, PartitionKind, RelationPartition, Relatum, SystemCut, TemporalCut,
};
pub use crate::permutations::{distinct_permutations, DistinctPermutations};
pub use crate::registry::Registry;
pub use crate::set_partitions::{set_partitions, SetPartitions};
