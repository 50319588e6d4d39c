//! Cache-augmented fetching.
//!
//! [`CacheAugmentedFetcher::fetch_with_cache`] produces a finite,
//! non-restartable sequence of at most two elements: an optional stale
//! cached response, then exactly one fresh network response. A cache miss
//! contributes zero elements, not an error. The cached element, when
//! present, always precedes the fresh one; consumers treat it as
//! provisional state that the fresh element overwrites.
//!
//! The cache step never touches the network; the network step always goes
//! through the pinned transport.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::{Stream, stream};
use launchdeck_core::NetworkError;
use tokio::sync::RwLock;
use tracing::debug;

use crate::client::TransportClient;
use crate::request::{CachePolicy, FetchRequest};

// ============================================================================
// Traits
// ============================================================================

/// The network step of the fetch pipeline.
///
/// Abstracted so the cache layer (and its tests) do not depend on a live
/// socket; [`TransportClient`] is the production implementation.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs the request and returns the raw response body.
    async fn send(&self, request: &FetchRequest) -> Result<Vec<u8>, NetworkError>;
}

#[async_trait]
impl Transport for TransportClient {
    async fn send(&self, request: &FetchRequest) -> Result<Vec<u8>, NetworkError> {
        self.request(request).await
    }
}

/// Raw-byte response cache keyed by [`FetchRequest::cache_key`].
#[async_trait]
pub trait ResponseCache: Send + Sync {
    /// Returns the cached bytes for a key, if present.
    async fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Stores the bytes for a key, replacing any previous entry.
    async fn put(&self, key: &str, bytes: &[u8]);
}

// ============================================================================
// In-memory cache
// ============================================================================

/// Process-local response cache.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResponseCache for MemoryCache {
    async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.read().await.get(key).cloned()
    }

    async fn put(&self, key: &str, bytes: &[u8]) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), bytes.to_vec());
    }
}

// ============================================================================
// Cache-augmented fetcher
// ============================================================================

/// Wraps a transport with cache-then-network fetching.
pub struct CacheAugmentedFetcher<T> {
    transport: Arc<T>,
    cache: Arc<dyn ResponseCache>,
}

impl<T> Clone for CacheAugmentedFetcher<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            cache: Arc::clone(&self.cache),
        }
    }
}

enum Step {
    Cached,
    Fresh,
    Done,
}

impl<T: Transport + 'static> CacheAugmentedFetcher<T> {
    /// Creates a fetcher over the given transport and cache backend.
    pub fn new(transport: Arc<T>, cache: Arc<dyn ResponseCache>) -> Self {
        Self { transport, cache }
    }

    /// Produces the two-step cached-then-fresh sequence for a request.
    ///
    /// With [`CachePolicy::NetworkOnly`] the cache read is skipped and the
    /// sequence holds exactly the network result. A fresh success is
    /// written back to the cache under the request's key in either mode.
    pub fn fetch_with_cache(
        &self,
        request: FetchRequest,
    ) -> impl Stream<Item = Result<Vec<u8>, NetworkError>> + Send + 'static {
        let transport = Arc::clone(&self.transport);
        let cache = Arc::clone(&self.cache);

        stream::unfold(Step::Cached, move |step| {
            let transport = Arc::clone(&transport);
            let cache = Arc::clone(&cache);
            let request = request.clone();
            async move {
                match step {
                    Step::Cached => {
                        if request.cache_policy() == CachePolicy::CacheThenNetwork {
                            if let Some(stale) = cache.get(&request.cache_key()).await {
                                debug!(key = %request.cache_key(), "Cache hit, emitting stale response");
                                return Some((Ok(stale), Step::Fresh));
                            }
                            debug!(key = %request.cache_key(), "Cache miss");
                        }
                        Some((network_step(&*transport, &*cache, &request).await, Step::Done))
                    }
                    Step::Fresh => {
                        Some((network_step(&*transport, &*cache, &request).await, Step::Done))
                    }
                    Step::Done => None,
                }
            }
        })
    }
}

/// The authoritative network step; successes are written back to the cache.
async fn network_step(
    transport: &dyn Transport,
    cache: &dyn ResponseCache,
    request: &FetchRequest,
) -> Result<Vec<u8>, NetworkError> {
    let result = transport.send(request).await;
    if let Ok(bytes) = &result {
        cache.put(&request.cache_key(), bytes).await;
    }
    result
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubTransport {
        response: Result<Vec<u8>, NetworkError>,
        calls: AtomicUsize,
    }

    impl StubTransport {
        fn ok(bytes: &[u8]) -> Self {
            Self {
                response: Ok(bytes.to_vec()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(error: NetworkError) -> Self {
            Self {
                response: Err(error),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn send(&self, _request: &FetchRequest) -> Result<Vec<u8>, NetworkError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone()
        }
    }

    fn cached_request() -> FetchRequest {
        FetchRequest::get("/v4/company").with_cache_policy(CachePolicy::CacheThenNetwork)
    }

    #[tokio::test]
    async fn cold_cache_yields_exactly_the_fresh_element() {
        let transport = Arc::new(StubTransport::ok(b"fresh"));
        let fetcher = CacheAugmentedFetcher::new(
            Arc::clone(&transport),
            Arc::new(MemoryCache::new()),
        );

        let items: Vec<_> = fetcher.fetch_with_cache(cached_request()).collect().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].as_deref().unwrap(), b"fresh");
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn warm_cache_yields_stale_then_fresh() {
        let transport = Arc::new(StubTransport::ok(b"fresh"));
        let cache: Arc<dyn ResponseCache> = Arc::new(MemoryCache::new());
        cache.put(&cached_request().cache_key(), b"stale").await;

        let fetcher = CacheAugmentedFetcher::new(Arc::clone(&transport), Arc::clone(&cache));
        let items: Vec<_> = fetcher.fetch_with_cache(cached_request()).collect().await;

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_deref().unwrap(), b"stale");
        assert_eq!(items[1].as_deref().unwrap(), b"fresh");
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn fresh_success_populates_the_cache() {
        let transport = Arc::new(StubTransport::ok(b"fresh"));
        let cache: Arc<dyn ResponseCache> = Arc::new(MemoryCache::new());
        let fetcher = CacheAugmentedFetcher::new(Arc::clone(&transport), Arc::clone(&cache));

        let _: Vec<_> = fetcher.fetch_with_cache(cached_request()).collect().await;
        let items: Vec<_> = fetcher.fetch_with_cache(cached_request()).collect().await;

        // second pass sees the first pass's fresh bytes as its stale element
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_deref().unwrap(), b"fresh");
    }

    #[tokio::test]
    async fn network_only_skips_the_cache_read() {
        let transport = Arc::new(StubTransport::ok(b"fresh"));
        let cache: Arc<dyn ResponseCache> = Arc::new(MemoryCache::new());
        cache.put("GET /v4/company", b"stale").await;

        let fetcher = CacheAugmentedFetcher::new(Arc::clone(&transport), Arc::clone(&cache));
        let items: Vec<_> = fetcher
            .fetch_with_cache(FetchRequest::get("/v4/company"))
            .collect()
            .await;

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].as_deref().unwrap(), b"fresh");
    }

    #[tokio::test]
    async fn network_failure_with_warm_cache_still_emits_the_stale_element_first() {
        let transport = Arc::new(StubTransport::failing(NetworkError::BadResponse(503)));
        let cache: Arc<dyn ResponseCache> = Arc::new(MemoryCache::new());
        cache.put(&cached_request().cache_key(), b"stale").await;

        let fetcher = CacheAugmentedFetcher::new(Arc::clone(&transport), Arc::clone(&cache));
        let items: Vec<_> = fetcher.fetch_with_cache(cached_request()).collect().await;

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_deref().unwrap(), b"stale");
        assert_eq!(items[1], Err(NetworkError::BadResponse(503)));
    }

    #[tokio::test]
    async fn network_failure_does_not_populate_the_cache() {
        let transport = Arc::new(StubTransport::failing(NetworkError::TransportFailure(
            "unreachable".into(),
        )));
        let cache: Arc<dyn ResponseCache> = Arc::new(MemoryCache::new());
        let fetcher = CacheAugmentedFetcher::new(Arc::clone(&transport), Arc::clone(&cache));

        let items: Vec<_> = fetcher.fetch_with_cache(cached_request()).collect().await;
        assert_eq!(items.len(), 1);
        assert!(items[0].is_err());
        assert!(cache.get(&cached_request().cache_key()).await.is_none());
    }
}
