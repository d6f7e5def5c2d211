//! Process-wide scheme registries for the three partition tiers.
//!
//! Each registry is created on first access with the built-in schemes and
//! guarded by a `RwLock`, so callers may add their own strategies at any
//! time. Lookups clone the strategy's `Arc` and release the lock before the
//! strategy runs.

use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::Config;
use crate::error::Result;
use crate::labels::NodeLabels;
use crate::models::{KPartition, RelationPartition, Relatum, SystemCut};
use crate::registry::Registry;

pub mod mechanism;
pub mod relation;
pub mod system;

pub use mechanism::{
    all_partitions, atomic_partition, complete_partition, mip_bipartitions, mip_partitions, wedge_partitions,
};
pub use relation::{relation_bipartitions_of_one, relation_partitions, relation_tripartitions};
pub use system::{system_partitions, CutMatrices};

/// Lazy stream of mechanism/purview partitions.
pub type PartitionIter = Box<dyn Iterator<Item = KPartition> + Send>;

/// Lazy stream of relation partitions.
pub type RelationPartitionIter = Box<dyn Iterator<Item = RelationPartition> + Send>;

/// Lazy stream of system cuts.
pub type SystemCutIter = Box<dyn Iterator<Item = SystemCut> + Send>;

/// A mechanism-tier strategy: `(mechanism, purview, labels)`.
pub type PartitionScheme = dyn Fn(&[usize], &[usize], Option<Arc<NodeLabels>>) -> PartitionIter + Send + Sync;

/// A relation-tier strategy: `(relata, candidate joint purview, labels)`.
pub type RelationPartitionScheme =
    dyn Fn(Arc<[Relatum]>, &[usize], Option<Arc<NodeLabels>>) -> RelationPartitionIter + Send + Sync;

/// A system-tier strategy: `(nodes, labels)`.
pub type SystemPartitionScheme = dyn Fn(&[usize], Option<Arc<NodeLabels>>) -> SystemCutIter + Send + Sync;

static PARTITION_TYPES: OnceLock<RwLock<Registry<PartitionScheme>>> = OnceLock::new();
static RELATION_PARTITION_TYPES: OnceLock<RwLock<Registry<RelationPartitionScheme>>> = OnceLock::new();
static SYSTEM_PARTITION_TYPES: OnceLock<RwLock<Registry<SystemPartitionScheme>>> = OnceLock::new();

// Built-ins are inserted into an empty registry, so registration cannot fail.
fn with_builtins<S: ?Sized>(desc: &'static str, builtins: Vec<(&'static str, Arc<S>)>) -> RwLock<Registry<S>> {
    let mut registry = Registry::new(desc);
    for (name, strategy) in builtins {
        if let Err(e) = registry.register(name, strategy) {
            tracing::error!(registry = desc, name, error = %e, "failed to register built-in scheme");
        }
    }
    RwLock::new(registry)
}

/// The mechanism/purview partition schemes (`BI`, `TRI`, `ALL`).
pub fn partition_types() -> &'static RwLock<Registry<PartitionScheme>> {
    PARTITION_TYPES.get_or_init(|| {
        with_builtins(
            "distinction partitions",
            vec![
                ("BI", Arc::new(mip_bipartitions) as Arc<PartitionScheme>),
                ("TRI", Arc::new(wedge_partitions) as Arc<PartitionScheme>),
                ("ALL", Arc::new(all_partitions) as Arc<PartitionScheme>),
            ],
        )
    })
}

/// The relation partition schemes (`TRI`, `BI_CUT_ONE`).
pub fn relation_partition_types() -> &'static RwLock<Registry<RelationPartitionScheme>> {
    RELATION_PARTITION_TYPES.get_or_init(|| {
        with_builtins(
            "relation partitions",
            vec![
                ("TRI", Arc::new(relation_tripartitions) as Arc<RelationPartitionScheme>),
                ("BI_CUT_ONE", Arc::new(relation_bipartitions_of_one) as Arc<RelationPartitionScheme>),
            ],
        )
    })
}

/// The whole-system cut schemes.
pub fn system_partition_types() -> &'static RwLock<Registry<SystemPartitionScheme>> {
    SYSTEM_PARTITION_TYPES.get_or_init(|| {
        with_builtins(
            "system partitions",
            vec![
                ("DIRECTED_BI", Arc::new(system::directed_bipartitions) as Arc<SystemPartitionScheme>),
                ("DIRECTED_BI_CUT_ONE", Arc::new(system::directed_bipartitions_cut_one) as Arc<SystemPartitionScheme>),
                ("DIRECTED_BI_SIMPLE", Arc::new(system::bipartitions_simple) as Arc<SystemPartitionScheme>),
                ("TEMPORAL_DIRECTED_BI", Arc::new(system::temporal_directed_bipartitions) as Arc<SystemPartitionScheme>),
                ("TEMPORAL_DIRECTED_BI_CUT_ONE", Arc::new(system::temporal_directed_bipartitions_cut_one) as Arc<SystemPartitionScheme>),
                ("GENERAL", Arc::new(system::general) as Arc<SystemPartitionScheme>),
            ],
        )
    })
}

// A panic while holding the lock cannot leave a registry half-updated.
pub(crate) fn read<S: ?Sized>(lock: &RwLock<Registry<S>>) -> RwLockReadGuard<'_, Registry<S>> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<S: ?Sized>(lock: &RwLock<Registry<S>>) -> RwLockWriteGuard<'_, Registry<S>> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Register a mechanism-tier scheme under `name`.
pub fn register_partition_type<F>(name: impl Into<String>, scheme: F) -> Result<()>
    where F: Fn(&[usize], &[usize], Option<Arc<NodeLabels>>) -> PartitionIter + Send + Sync + 'static
{
    write(partition_types()).register(name, Arc::new(scheme))
}

/// Register a relation-tier scheme under `name`.
pub fn register_relation_partition_type<F>(name: impl Into<String>, scheme: F) -> Result<()>
    where F: Fn(Arc<[Relatum]>, &[usize], Option<Arc<NodeLabels>>) -> RelationPartitionIter + Send + Sync + 'static
{
    write(relation_partition_types()).register(name, Arc::new(scheme))
}

/// Register a system-tier scheme under `name`.
pub fn register_system_partition_type<F>(name: impl Into<String>, scheme: F) -> Result<()>
    where F: Fn(&[usize], Option<Arc<NodeLabels>>) -> SystemCutIter + Send + Sync + 'static
{
    write(system_partition_types()).register(name, Arc::new(scheme))
}

/// Apply the duplicate policy of `config` to all three registries.
pub fn configure_registries(config: &Config) {
    write(partition_types()).set_policy(config.duplicate_policy);
    write(relation_partition_types()).set_policy(config.duplicate_policy);
    write(system_partition_types()).set_policy(config.duplicate_policy);
}
