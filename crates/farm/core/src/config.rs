//! Access to the current policy.

use std::sync::Arc;

use crate::Policy;

/// Supplies the policy snapshot used for a tick.
///
/// How and when the policy is reloaded is up to the implementation; the
/// decision core only ever reads the snapshot it is handed.
pub trait ConfigStore: Send + Sync {
    fn policy(&self) -> Arc<Policy>;
}

/// A store that always hands out the same policy.
#[derive(Clone, Debug, Default)]
pub struct StaticConfigStore {
    policy: Arc<Policy>,
}

impl StaticConfigStore {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }
}

impl ConfigStore for StaticConfigStore {
    fn policy(&self) -> Arc<Policy> {
        Arc::clone(&self.policy)
    }
}
