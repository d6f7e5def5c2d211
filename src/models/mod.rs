//! Immutable partition and cut objects handed to consumers.

mod cut;
mod part;
mod relation;

pub use cut::{Cut, Direction, GeneralKCut, SystemCut, TemporalCut};
pub use part::{KPartition, Part, PartitionKind};
pub use relation::{RelationPartition, Relatum};
