//! Error type shared by the registries, labels and configuration.

use thiserror::Error;

/// Errors surfaced to callers of this crate.
///
/// Degenerate enumeration parameters (an empty index set, `k == 0`, ...) are
/// not errors: the generators simply yield nothing.
#[derive(Debug, Error)]
pub enum Error {
    /// A scheme identifier was looked up that no strategy is registered under.
    #[error("unknown {registry} scheme '{name}'; available: {}", available.join(", "))]
    UnknownScheme {
        /// Description of the registry that was queried
        registry: &'static str,
        /// The identifier that was requested
        name: String,
        /// Identifiers that are registered
        available: Vec<String>,
    },

    /// A scheme was registered twice into a registry that rejects duplicates.
    #[error("{registry} scheme '{name}' is already registered")]
    DuplicateScheme {
        /// Description of the registry
        registry: &'static str,
        /// The identifier that was registered twice
        name: String,
    },

    /// Two nodes were given the same label.
    #[error("duplicate node label '{0}'")]
    DuplicateLabel(String),

    /// A node index was given more than one label.
    #[error("node {0} is labelled twice")]
    DuplicateNodeIndex(usize),

    /// A label does not name any node.
    #[error("unknown node label '{0}'")]
    UnknownLabel(String),

    /// The number of labels does not match the number of nodes.
    #[error("expected {expected} node labels, got {actual}")]
    LabelCountMismatch {
        /// Number of nodes
        expected: usize,
        /// Number of labels supplied
        actual: usize,
    },

    /// A scheme produced no partition where at least one was required.
    #[error("partition scheme '{scheme}' produced no partitions")]
    NoPartitions {
        /// The scheme that was consulted
        scheme: String,
    },

    /// Configuration text could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
