use cozy_chess::Move;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::search::eval::Score;

pub const DEFAULT_CAPACITY: usize = 1_000_000;

/// How a stored entry is matched against the remaining depth of a probe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CachePolicy {
    /// Any stored entry is returned regardless of the depth it was searched to,
    /// so a shallow result can answer a deeper query.
    #[default]
    DepthAgnostic,
    /// Entries answer only probes no deeper than the depth they were stored at.
    DepthChecked,
}

/// Score is from White's point of view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry {
    pub key: u64,
    pub depth: u32,
    pub score: Score,
    pub best: Option<Move>,
}

/// Fingerprint-keyed result cache. Never evicts piecemeal: once it holds more
/// than its capacity it is emptied wholesale by `clear_if_full`.
#[derive(Debug)]
pub struct Tt {
    map: HashMap<u64, Entry>,
    capacity: usize,
    policy: CachePolicy,
}

impl Default for Tt {
    fn default() -> Self { Self::new() }
}

impl Tt {
    pub fn new() -> Self { Self { map: HashMap::new(), capacity: DEFAULT_CAPACITY, policy: CachePolicy::default() } }

    pub fn set_capacity_entries(&mut self, cap: usize) { self.capacity = cap; }
    pub fn capacity(&self) -> usize { self.capacity }

    pub fn set_policy(&mut self, policy: CachePolicy) { self.policy = policy; }
    pub fn policy(&self) -> CachePolicy { self.policy }

    pub fn get(&self, key: u64) -> Option<Entry> { self.map.get(&key).copied() }

    /// Lookup filtered by the cache policy for a node with `depth` plies left.
    pub fn probe(&self, key: u64, depth: u32) -> Option<Entry> {
        let e = self.get(key)?;
        match self.policy {
            CachePolicy::DepthAgnostic => Some(e),
            CachePolicy::DepthChecked => if e.depth >= depth { Some(e) } else { None },
        }
    }

    /// Inserts, replacing any entry with the same key.
    pub fn put(&mut self, e: Entry) { self.map.insert(e.key, e); }

    pub fn len(&self) -> usize { self.map.len() }
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    pub fn clear(&mut self) { self.map.clear(); }

    /// Empties the cache when it holds more than `capacity` entries.
    pub fn clear_if_full(&mut self) -> bool {
        if self.map.len() > self.capacity {
            log::trace!("clearing transposition cache at {} entries", self.map.len());
            self.map.clear();
            return true;
        }
        false
    }
}
