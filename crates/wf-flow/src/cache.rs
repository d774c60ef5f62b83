//! Bounded least-recently-used caches for trajectories and the geothermal
//! temperature function.
//!
//! Owned by whoever runs the solver (usually the service layer) and shared
//! by reference across worker threads. Insertion is insert-if-absent under
//! a mutex: when two workers race on the same key, the first stored value
//! wins and both callers get it.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::trajectory::{Trajectory, TrajectoryError};

pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Hit/miss counters for one cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub len: usize,
}

struct Slot<V> {
    value: V,
    last_used: u64,
}

struct LruInner<K, V> {
    map: HashMap<K, Slot<V>>,
    clock: u64,
}

/// Thread-safe LRU map with a fixed capacity.
pub struct BoundedCache<K, V> {
    capacity: usize,
    inner: Mutex<LruInner<K, V>>,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl<K: Eq + Hash + Clone, V: Clone> BoundedCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(LruInner {
                map: HashMap::with_capacity(capacity.min(DEFAULT_CACHE_CAPACITY)),
                clock: 0,
            }),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruInner<K, V>> {
        // Entries are written whole, so a poisoned guard still holds valid data.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up `key`, marking it most recently used.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut inner = self.lock();
        inner.clock += 1;
        let now = inner.clock;
        let found = inner.map.get_mut(key).map(|slot| {
            slot.last_used = now;
            slot.value.clone()
        });
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        found
    }

    /// Store `value` unless `key` is already present; return the stored value.
    pub fn insert_if_absent(&self, key: K, value: V) -> V {
        let mut inner = self.lock();
        inner.clock += 1;
        let now = inner.clock;
        if let Some(slot) = inner.map.get_mut(&key) {
            slot.last_used = now;
            return slot.value.clone();
        }
        if inner.map.len() >= self.capacity {
            let oldest = inner
                .map
                .iter()
                .min_by_key(|(_, slot)| slot.last_used)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                inner.map.remove(&oldest);
                self.evictions.fetch_add(1, Ordering::Relaxed);
            }
        }
        inner.map.insert(
            key,
            Slot {
                value: value.clone(),
                last_used: now,
            },
        );
        value
    }

    /// Return the cached value or build, store and return a new one.
    ///
    /// `build` runs outside the lock so slow builds do not block readers.
    pub fn get_or_try_insert_with<E>(
        &self,
        key: K,
        build: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        if let Some(v) = self.get(&key) {
            return Ok(v);
        }
        let value = build()?;
        Ok(self.insert_if_absent(key, value))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.lock().map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&self) {
        self.lock().map.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            len: self.len(),
        }
    }
}

/// Exact survey sequences, keyed bitwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrajectoryKey {
    md: Vec<u64>,
    tvd: Vec<u64>,
}

impl TrajectoryKey {
    pub fn new(md: &[f64], tvd: &[f64]) -> Self {
        Self {
            md: md.iter().map(|v| v.to_bits()).collect(),
            tvd: tvd.iter().map(|v| v.to_bits()).collect(),
        }
    }
}

/// (gradient, reference temperature, reference TVD, current TVD), bitwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemperatureKey([u64; 4]);

impl TemperatureKey {
    pub fn new(gradient: f64, t_ref: f64, tvd_ref: f64, tvd: f64) -> Self {
        Self([
            gradient.to_bits(),
            t_ref.to_bits(),
            tvd_ref.to_bits(),
            tvd.to_bits(),
        ])
    }
}

/// Linear geothermal temperature at `tvd`.
///
/// `gradient` is in degrees per 100 m; the result shares the scale of `t_ref`.
pub fn geothermal_temperature(gradient: f64, t_ref: f64, tvd_ref: f64, tvd: f64) -> f64 {
    t_ref - gradient * (tvd_ref - tvd) / 100.0
}

/// Process-lifetime caches shared by every traverse of a service.
pub struct FlowCaches {
    trajectories: BoundedCache<TrajectoryKey, Arc<Trajectory>>,
    temperatures: BoundedCache<TemperatureKey, f64>,
}

impl Default for FlowCaches {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl FlowCaches {
    pub fn new(capacity: usize) -> Self {
        Self {
            trajectories: BoundedCache::new(capacity),
            temperatures: BoundedCache::new(capacity),
        }
    }

    /// Build or fetch the trajectory for these exact survey sequences.
    pub fn trajectory(&self, md: &[f64], tvd: &[f64]) -> Result<Arc<Trajectory>, TrajectoryError> {
        self.trajectories
            .get_or_try_insert_with(TrajectoryKey::new(md, tvd), || {
                debug!(stations = md.len(), "building trajectory");
                Trajectory::new(md, tvd).map(Arc::new)
            })
    }

    /// Cached `geothermal_temperature`.
    pub fn temperature(&self, gradient: f64, t_ref: f64, tvd_ref: f64, tvd: f64) -> f64 {
        let key = TemperatureKey::new(gradient, t_ref, tvd_ref, tvd);
        if let Some(t) = self.temperatures.get(&key) {
            return t;
        }
        self.temperatures
            .insert_if_absent(key, geothermal_temperature(gradient, t_ref, tvd_ref, tvd))
    }

    pub fn trajectory_stats(&self) -> CacheStats {
        self.trajectories.stats()
    }

    pub fn temperature_stats(&self) -> CacheStats {
        self.temperatures.stats()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn never_exceeds_capacity(cap in 1_usize..16, keys in prop::collection::vec(0_u32..64, 0..200)) {
            let cache: BoundedCache<u32, u32> = BoundedCache::new(cap);
            for k in keys {
                cache.insert_if_absent(k, k);
                prop_assert!(cache.len() <= cap);
            }
        }
    }
}
