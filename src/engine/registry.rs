//! BindRegistry - identity side table for bound targets
//!
//! Generic over the key so the idempotence guarantee is testable on the
//! host; the engine instantiates it with DOM element handles, which
//! compare by JS object identity.

#[derive(Debug, Default)]
pub struct BindRegistry<K: PartialEq> {
    bound: Vec<K>,
}

impl<K: PartialEq> BindRegistry<K> {
    pub fn new() -> Self {
        Self { bound: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.bound.iter().any(|bound| bound == key)
    }

    /// Record a binding. Returns false (and records nothing) if the key
    /// is already present - a re-bind must stay a no-op.
    pub fn insert(&mut self, key: K) -> bool {
        if self.contains(&key) {
            return false;
        }
        self.bound.push(key);
        true
    }
}
