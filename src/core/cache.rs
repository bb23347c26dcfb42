use crate::core::Price;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Storage for previously fetched price series, keyed by ticker.
///
/// The client consults the cache before any network call; a stored series is returned
/// as-is. Implementations decide on storage and expiry; writes are last-write-wins.
pub trait PriceCache: Send + Sync {
    /// Returns the stored series for `ticker`, if any.
    fn get_prices(&self, ticker: &str) -> Option<Vec<Price>>;

    /// Stores `prices` for `ticker`, replacing whatever was there.
    fn set_prices(&self, ticker: &str, prices: Vec<Price>);
}

/// Process-local [`PriceCache`] backed by a `HashMap`. Entries never expire.
#[derive(Debug, Default)]
pub struct MemoryCache {
    map: RwLock<HashMap<String, Vec<Price>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every cached series.
    pub fn clear(&self) {
        self.map
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.map.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PriceCache for MemoryCache {
    fn get_prices(&self, ticker: &str) -> Option<Vec<Price>> {
        self.map
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(ticker)
            .cloned()
    }

    fn set_prices(&self, ticker: &str, prices: Vec<Price>) {
        self.map
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(ticker.to_string(), prices);
    }
}
