//! Bounded in-memory map whose entries expire after a period without access.
//!
//! Every read or write touches the entry. When the map is full, idle entries
//! are dropped first, then the least recently used one.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

#[derive(Debug)]
struct Entry<V> {
    value: V,
    last_accessed: Instant,
}

impl<V> Entry<V> {
    fn new(value: V) -> Self {
        Self {
            value,
            last_accessed: Instant::now(),
        }
    }

    fn is_idle(&self, idle: Duration) -> bool {
        self.last_accessed.elapsed() > idle
    }

    fn touch(&mut self) {
        self.last_accessed = Instant::now();
    }
}

/// Thread-safe map with a capacity and an idle timeout.
///
/// Callers mutate entries in place through closures, so two concurrent
/// updates of one key both apply.
#[derive(Debug)]
pub struct IdleMap<K, V> {
    entries: Mutex<HashMap<K, Entry<V>>>,
    capacity: usize,
    idle: Duration,
}

impl<K, V> IdleMap<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new(capacity: usize, idle: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
            idle,
        }
    }

    /// Copy of a live entry.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.with_existing(key, |value| value.clone())
    }

    /// Run `f` on a live entry, if there is one.
    pub fn with_existing<R>(&self, key: &K, f: impl FnOnce(&mut V) -> R) -> Option<R> {
        let mut entries = self.entries.lock();
        if entries.get(key).is_some_and(|entry| entry.is_idle(self.idle)) {
            entries.remove(key);
            return None;
        }
        let entry = entries.get_mut(key)?;
        entry.touch();
        Some(f(&mut entry.value))
    }

    /// Run `f` on the entry for `key`, starting from `V::default()` when the
    /// key is absent or idle.
    pub fn update<R>(&self, key: K, f: impl FnOnce(&mut V) -> R) -> R
    where
        V: Default,
    {
        let mut entries = self.entries.lock();
        if entries.get(&key).is_some_and(|entry| entry.is_idle(self.idle)) {
            entries.remove(&key);
        }
        if !entries.contains_key(&key) {
            self.make_room(&mut entries);
        }
        let entry = entries
            .entry(key)
            .or_insert_with(|| Entry::new(V::default()));
        entry.touch();
        f(&mut entry.value)
    }

    pub fn insert(&self, key: K, value: V) {
        let mut entries = self.entries.lock();
        if !entries.contains_key(&key) {
            self.make_room(&mut entries);
        }
        entries.insert(key, Entry::new(value));
    }

    /// Insert unless a live entry already holds `key`.
    pub fn try_insert(&self, key: K, value: V) -> bool {
        let mut entries = self.entries.lock();
        match entries.get(&key) {
            Some(entry) if !entry.is_idle(self.idle) => return false,
            Some(_) => {
                entries.remove(&key);
            }
            None => {}
        }
        self.make_room(&mut entries);
        entries.insert(key, Entry::new(value));
        true
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.entries.lock().remove(key).map(|entry| entry.value)
    }

    /// Drop idle entries, returning how many went.
    pub fn cleanup_expired(&self) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_idle(self.idle));
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Free one slot for a new key.
    fn make_room(&self, entries: &mut HashMap<K, Entry<V>>) {
        if entries.len() < self.capacity {
            return;
        }
        entries.retain(|_, entry| !entry.is_idle(self.idle));

        while entries.len() >= self.capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_accessed)
                .map(|(key, _)| key.clone());
            match oldest {
                Some(key) => {
                    entries.remove(&key);
                }
                None => break,
            }
        }
    }
}
