//! Bounded read-through cache for resolved bridge addresses.
//!
//! Replaces an implicit module-level map with an explicit cache that is
//! injected into the [`crate::resolver::AddressResolver`]. Entries expire
//! after a TTL, the oldest entry is evicted when the cache is full, and
//! callers can invalidate a single (chain, token) pair or everything (e.g.
//! after swapping the metadata catalog).

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use eyre::{eyre, Result};

use crate::resolver::BridgeAddresses;
use crate::types::{ChainSlug, TokenSymbol};

const DEFAULT_ADDRESS_CACHE_SIZE: usize = 256;
const DEFAULT_ADDRESS_CACHE_TTL_SECS: u64 = 3_600; // 1 hour

/// Cache sizing read from the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    pub max_entries: usize,
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_ADDRESS_CACHE_SIZE,
            ttl_secs: DEFAULT_ADDRESS_CACHE_TTL_SECS,
        }
    }
}

impl CacheConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_entries = match lookup("ADDRESS_CACHE_SIZE") {
            Some(v) => v
                .parse()
                .map_err(|_| eyre!("ADDRESS_CACHE_SIZE must be a valid usize"))?,
            None => DEFAULT_ADDRESS_CACHE_SIZE,
        };
        let ttl_secs = match lookup("ADDRESS_CACHE_TTL_SECS") {
            Some(v) => v
                .parse()
                .map_err(|_| eyre!("ADDRESS_CACHE_TTL_SECS must be a valid u64"))?,
            None => DEFAULT_ADDRESS_CACHE_TTL_SECS,
        };
        Ok(Self {
            max_entries,
            ttl_secs,
        })
    }
}

type Key = (String, ChainSlug, TokenSymbol);

/// Bounded address cache keyed by (network, chain, token).
///
/// - **Max capacity:** when full, the oldest entry is evicted on insert.
/// - **TTL:** expired entries are never returned and are dropped on insert.
pub struct AddressCache {
    map: Mutex<HashMap<Key, (BridgeAddresses, Instant)>>,
    max_size: usize,
    ttl: Duration,
}

impl AddressCache {
    pub fn new(max_size: usize, ttl_secs: u64) -> Self {
        Self {
            map: Mutex::new(HashMap::new()),
            max_size,
            ttl: Duration::from_secs(ttl_secs),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.max_entries, config.ttl_secs)
    }

    pub fn get(&self, network: &str, chain: ChainSlug, token: TokenSymbol) -> Option<BridgeAddresses> {
        let map = self.map.lock().unwrap_or_else(|e| e.into_inner());
        map.get(&(network.to_string(), chain, token))
            .filter(|(_, t)| t.elapsed() < self.ttl)
            .map(|(v, _)| *v)
    }

    pub fn insert(&self, network: &str, chain: ChainSlug, token: TokenSymbol, value: BridgeAddresses) {
        if self.max_size == 0 {
            return;
        }
        let now = Instant::now();
        let mut map = self.map.lock().unwrap_or_else(|e| e.into_inner());
        map.retain(|_, (_, t)| now.duration_since(*t) < self.ttl);
        while map.len() >= self.max_size {
            let oldest = map
                .iter()
                .min_by_key(|(_, (_, t))| *t)
                .map(|(k, _)| k.clone());
            match oldest {
                Some(k) => {
                    map.remove(&k);
                }
                None => break,
            }
        }
        map.insert((network.to_string(), chain, token), (value, now));
    }

    /// Drop a single (network, chain, token) entry
    pub fn invalidate(&self, network: &str, chain: ChainSlug, token: TokenSymbol) {
        let mut map = self.map.lock().unwrap_or_else(|e| e.into_inner());
        map.remove(&(network.to_string(), chain, token));
    }

    pub fn clear(&self) {
        self.map.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    pub fn len(&self) -> usize {
        self.map.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AddressCache {
    fn default() -> Self {
        Self::from_config(&CacheConfig::default())
    }
}
