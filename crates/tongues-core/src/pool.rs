use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tongues_translator::Translator;

type Pools = HashMap<String, VecDeque<Arc<dyn Translator>>>;

/// Instances grouped by provider name, in registration order, rotated round-robin
#[derive(Default)]
pub struct InstancePool {
    pools: Mutex<Pools>,
}

impl InstancePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, provider: &str, instance: Arc<dyn Translator>) {
        self.lock()
            .entry(provider.to_string())
            .or_default()
            .push_back(instance);
    }

    /// Take the front instance and move it to the back.
    ///
    /// The lock is released before returning, callers never hold it across an await.
    pub fn next(&self, provider: &str) -> Option<Arc<dyn Translator>> {
        let mut pools = self.lock();
        let pool = pools.get_mut(provider)?;
        let instance = pool.pop_front()?;
        pool.push_back(Arc::clone(&instance));
        Some(instance)
    }

    pub fn len(&self, provider: &str) -> usize {
        self.lock().get(provider).map_or(0, VecDeque::len)
    }

    // Rotation is a single push/pop, a panic elsewhere cannot leave a pool half-rotated
    fn lock(&self) -> MutexGuard<'_, Pools> {
        self.pools.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for InstancePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sizes: HashMap<String, usize> = self
            .lock()
            .iter()
            .map(|(name, pool)| (name.clone(), pool.len()))
            .collect();
        f.debug_struct("InstancePool").field("pools", &sizes).finish()
    }
}
