//! Id-keyed values that expire after sitting idle.
//!
//! Callers pass `now` explicitly; every hit refreshes the entry.

use std::{
  collections::HashMap,
  time::{Duration, Instant},
};

#[derive(Debug)]
struct Entry<T> {
  value: T,
  last_touched: Instant,
}

#[derive(Debug)]
pub struct IdleRegistry<T> {
  entries: HashMap<String, Entry<T>>,
  idle_ttl: Duration,
}

impl<T> IdleRegistry<T> {
  pub fn new(idle_ttl: Duration) -> Self {
    Self { entries: HashMap::new(), idle_ttl }
  }

  pub fn idle_ttl(&self) -> Duration {
    self.idle_ttl
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  fn expired(&self, entry: &Entry<T>, now: Instant) -> bool {
    now.saturating_duration_since(entry.last_touched) > self.idle_ttl
  }

  pub fn insert(&mut self, id: String, value: T, now: Instant) {
    self.entries.insert(id, Entry { value, last_touched: now });
  }

  /// Live entry for `id`, touched. An expired entry is dropped and reads as absent.
  pub fn get_mut(&mut self, id: &str, now: Instant) -> Option<&mut T> {
    let expired = self.entries.get(id).map(|e| self.expired(e, now))?;
    if expired {
      self.entries.remove(id);
      return None;
    }
    let entry = self.entries.get_mut(id)?;
    entry.last_touched = now;
    Some(&mut entry.value)
  }

  /// Existing live entry for `id`, or `value` stored under it.
  pub fn get_or_insert(&mut self, id: &str, value: T, now: Instant) -> &mut T {
    if self.entries.get(id).is_some_and(|e| self.expired(e, now)) {
      self.entries.remove(id);
    }
    let entry = self
      .entries
      .entry(id.to_string())
      .or_insert(Entry { value, last_touched: now });
    entry.last_touched = now;
    &mut entry.value
  }

  pub fn remove(&mut self, id: &str) -> Option<T> {
    self.entries.remove(id).map(|e| e.value)
  }

  /// Drop everything idle for longer than the TTL. Returns how many went.
  pub fn evict_idle(&mut self, now: Instant) -> usize {
    let before = self.entries.len();
    let ttl = self.idle_ttl;
    self
      .entries
      .retain(|_, e| now.saturating_duration_since(e.last_touched) <= ttl);
    before - self.entries.len()
  }
}
