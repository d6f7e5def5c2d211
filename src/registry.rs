//! Named strategy tables.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::config::DuplicatePolicy;
use crate::error::{Error, Result};

/// Maps scheme identifiers to shared strategies.
///
/// `S` is usually an unsized `dyn Fn(...)` type; strategies are stored and
/// handed out as `Arc<S>`.
pub struct Registry<S: ?Sized> {
    desc: &'static str,
    policy: DuplicatePolicy,
    store: BTreeMap<String, Arc<S>>,
}

impl<S: ?Sized> Registry<S> {
    /// An empty registry; `desc` names it in errors and logs.
    pub fn new(desc: &'static str) -> Self {
        Registry { desc, policy: DuplicatePolicy::default(), store: BTreeMap::new() }
    }

    /// Set the duplicate policy while building.
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Change the duplicate policy.
    pub fn set_policy(&mut self, policy: DuplicatePolicy) {
        self.policy = policy;
    }

    /// The current duplicate policy.
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// What this registry holds.
    pub fn desc(&self) -> &'static str {
        self.desc
    }

    /// Register `strategy` under `name`.
    pub fn register(&mut self, name: impl Into<String>, strategy: Arc<S>) -> Result<()> {
        let name = name.into();
        if self.store.contains_key(&name) {
            match self.policy {
                DuplicatePolicy::Reject => {
                    return Err(Error::DuplicateScheme { registry: self.desc, name });
                }
                DuplicatePolicy::Replace => {
                    tracing::warn!(registry = self.desc, %name, "replacing registered scheme");
                }
            }
        }
        tracing::debug!(registry = self.desc, %name, "registered scheme");
        self.store.insert(name, strategy);
        Ok(())
    }

    /// Look up the strategy registered under `name`.
    pub fn get(&self, name: &str) -> Result<Arc<S>> {
        tracing::debug!(registry = self.desc, name, "scheme lookup");
        self.store.get(name).cloned().ok_or_else(|| Error::UnknownScheme {
            registry: self.desc,
            name: name.to_owned(),
            available: self.names(),
        })
    }

    /// Returns `true` if a strategy is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.store.keys().cloned().collect()
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl<S: ?Sized> fmt::Debug for Registry<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Registry")
            .field("desc", &self.desc)
            .field("policy", &self.policy)
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Scale = dyn Fn(u32) -> u32 + Send + Sync;

    #[test]
    fn register_and_get() {
        let mut r: Registry<Scale> = Registry::new("test");
        r.register("DOUBLE", Arc::new(|x: u32| x * 2)).unwrap();
        r.register("TRIPLE", Arc::new(|x: u32| x * 3)).unwrap();
        assert_eq!(r.get("DOUBLE").unwrap()(4), 8);
        assert!(r.contains("TRIPLE"));
        assert_eq!(r.names(), vec!["DOUBLE", "TRIPLE"]);
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn unknown_lists_available() {
        let mut r: Registry<Scale> = Registry::new("test");
        r.register("ID", Arc::new(|x: u32| x)).unwrap();
        match r.get("NOPE") {
            Err(Error::UnknownScheme { registry, name, available }) => {
                assert_eq!(registry, "test");
                assert_eq!(name, "NOPE");
                assert_eq!(available, vec!["ID"]);
            }
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn duplicate_policies() {
        let mut r: Registry<Scale> = Registry::new("test");
        r.register("F", Arc::new(|x: u32| x)).unwrap();
        r.register("F", Arc::new(|x: u32| x + 1)).unwrap();
        assert_eq!(r.get("F").unwrap()(1), 2);

        let mut r: Registry<Scale> = Registry::new("test").with_policy(DuplicatePolicy::Reject);
        r.register("F", Arc::new(|x: u32| x)).unwrap();
        assert!(matches!(r.register("F", Arc::new(|x: u32| x + 1)), Err(Error::DuplicateScheme { .. })));
        assert_eq!(r.get("F").unwrap()(1), 1);
    }
}
