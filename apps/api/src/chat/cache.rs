//! Bounded FIFO cache of full chat responses, keyed by the normalized
//! message. No TTL. Owned by the engine.

use std::sync::Mutex;

use indexmap::IndexMap;

use crate::chat::engine::EngineError;
use crate::chat::models::ChatResponse;

pub const MAX_ENTRIES: usize = 100;
/// Entries dropped in one go once `MAX_ENTRIES` is exceeded.
pub const EVICT_BATCH: usize = 20;

pub struct ResponseCache {
    enabled: bool,
    /// Insertion ordered. Overwrites keep their original position.
    entries: Mutex<IndexMap<String, ChatResponse>>,
}

impl ResponseCache {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            entries: Mutex::new(IndexMap::new()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Stored copy for `key`, if any. Always `None` when disabled.
    pub fn get(&self, key: &str) -> Result<Option<ChatResponse>, EngineError> {
        if !self.enabled {
            return Ok(None);
        }
        let entries = self.entries.lock().map_err(|_| EngineError::CachePoisoned)?;
        Ok(entries.get(key).cloned())
    }

    /// Inserts and evicts under the same lock.
    pub fn put(&self, key: String, response: ChatResponse) -> Result<(), EngineError> {
        if !self.enabled {
            return Ok(());
        }
        let mut entries = self.entries.lock().map_err(|_| EngineError::CachePoisoned)?;

        entries.insert(key, response);

        if entries.len() > MAX_ENTRIES {
            let batch = EVICT_BATCH.min(entries.len());
            entries.drain(..batch);
        }
        Ok(())
    }

    pub fn len(&self) -> Result<usize, EngineError> {
        let entries = self.entries.lock().map_err(|_| EngineError::CachePoisoned)?;
        Ok(entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn response(tag: &str) -> ChatResponse {
        let mut r = ChatResponse::apology(None);
        r.reply = tag.to_string();
        r
    }

    #[test]
    fn test_put_then_get() {
        let cache = ResponseCache::new(true);
        cache.put("hello".into(), response("a")).unwrap();
        assert_eq!(cache.get("hello").unwrap().unwrap().reply, "a");
        assert!(cache.get("other").unwrap().is_none());
    }

    #[test]
    fn test_evicts_oldest_batch_past_limit() {
        let cache = ResponseCache::new(true);
        for i in 0..=MAX_ENTRIES {
            cache.put(format!("k{i}"), response("x")).unwrap();
        }
        // 101 inserted, 20 oldest dropped
        assert_eq!(cache.len().unwrap(), MAX_ENTRIES + 1 - EVICT_BATCH);
        assert!(cache.get("k0").unwrap().is_none());
        assert!(cache.get("k19").unwrap().is_none());
        assert!(cache.get("k20").unwrap().is_some());
        assert!(cache.get(&format!("k{MAX_ENTRIES}")).unwrap().is_some());
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let cache = ResponseCache::new(true);
        cache.put("k".into(), response("first")).unwrap();
        cache.put("k".into(), response("second")).unwrap();
        assert_eq!(cache.len().unwrap(), 1);
        assert_eq!(cache.get("k").unwrap().unwrap().reply, "second");
    }

    #[test]
    fn test_overwrite_of_oldest_still_evicted_first() {
        let cache = ResponseCache::new(true);
        for i in 0..MAX_ENTRIES {
            cache.put(format!("k{i}"), response("x")).unwrap();
        }
        cache.put("k0".into(), response("fresh")).unwrap();
        cache.put("new".into(), response("x")).unwrap();
        assert!(cache.get("k0").unwrap().is_none());
        assert!(cache.get("new").unwrap().is_some());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_puts_stay_bounded() {
        let cache = Arc::new(ResponseCache::new(true));
        let mut tasks = Vec::new();
        for t in 0..8 {
            let cache = Arc::clone(&cache);
            tasks.push(tokio::spawn(async move {
                for i in 0..50 {
                    cache.put(format!("t{t}-{i}"), response("x")).unwrap();
                }
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        // 400 distinct keys; every overflow drops a batch under the lock
        let len = cache.len().unwrap();
        assert!(len <= MAX_ENTRIES);
        assert!(len > MAX_ENTRIES - EVICT_BATCH);
    }

    #[test]
    fn test_disabled_cache_stores_nothing() {
        let cache = ResponseCache::new(false);
        cache.put("k".into(), response("x")).unwrap();
        assert!(cache.get("k").unwrap().is_none());
        assert_eq!(cache.len().unwrap(), 0);
        assert!(!cache.is_enabled());
    }
}
