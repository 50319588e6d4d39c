//! The concrete [`LaunchDataApi`] implementation for the SpaceX endpoints.
//!
//! Constructed with explicit collaborators (transport settings, cache
//! backend) rather than a process-wide singleton, so callers and tests can
//! substitute their own.

use std::sync::Arc;

use futures::{Stream, StreamExt};
use launchdeck_core::{
    Company, Launch, LaunchDataApi, LaunchFilter, LaunchPage, LaunchQuery, NetworkError, SortOrder,
};
use tracing::{debug, warn};

use crate::cache::{CacheAugmentedFetcher, MemoryCache, ResponseCache};
use crate::client::{ClientSettings, TransportClient, decode_json};
use crate::config;
use crate::request::{CachePolicy, FetchRequest};

/// Client for the company and launch resources.
#[derive(Clone)]
pub struct SpaceXApi {
    transport: Arc<TransportClient>,
    fetcher: CacheAugmentedFetcher<TransportClient>,
}

impl SpaceXApi {
    /// Creates an API client with default settings and an in-memory cache.
    pub fn new() -> Result<Self, NetworkError> {
        Self::with_cache(ClientSettings::default(), Arc::new(MemoryCache::new()))
    }

    /// Creates an API client with explicit settings and cache backend.
    pub fn with_cache(
        settings: ClientSettings,
        cache: Arc<dyn ResponseCache>,
    ) -> Result<Self, NetworkError> {
        let transport = Arc::new(TransportClient::with_settings(settings)?);
        let fetcher = CacheAugmentedFetcher::new(Arc::clone(&transport), cache);
        Ok(Self { transport, fetcher })
    }
}

impl LaunchDataApi for SpaceXApi {
    async fn fetch_company(&self) -> Result<Company, NetworkError> {
        debug!("Fetching company profile");
        self.transport
            .fetch(&FetchRequest::get(config::COMPANY_ENDPOINT))
            .await
    }

    fn fetch_company_with_cache(&self) -> impl Stream<Item = Result<Company, NetworkError>> + Send {
        let request = FetchRequest::get(config::COMPANY_ENDPOINT)
            .with_cache_policy(CachePolicy::CacheThenNetwork);
        self.fetcher
            .fetch_with_cache(request)
            .map(|item| item.and_then(|bytes| decode_json::<Company>(&bytes)))
    }

    async fn fetch_launches(&self) -> Result<Vec<Launch>, NetworkError> {
        debug!("Fetching full launch list");
        self.transport
            .fetch(&FetchRequest::get(config::LAUNCHES_ENDPOINT))
            .await
    }

    async fn query_launches(
        &self,
        page: u32,
        limit: u32,
        filter: &LaunchFilter,
        sort: SortOrder,
    ) -> Result<LaunchPage, NetworkError> {
        debug!(page, limit, ?filter, "Querying launches");
        let body = LaunchQuery::page(filter.to_query_filter(), page, limit, sort.direction());
        let request = FetchRequest::post(config::LAUNCHES_QUERY_ENDPOINT, &body)?;
        let response: LaunchPage = self.transport.fetch(&request).await?;

        if !response.is_consistent() {
            warn!(
                page = response.page,
                total_pages = response.total_pages,
                has_next_page = response.has_next_page,
                "Server paging state is inconsistent; trusting has_next_page"
            );
        }
        Ok(response)
    }
}
