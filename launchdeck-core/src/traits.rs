//! Trait definitions for Launchdeck.
//!
//! This module defines the provider trait the transport layer implements
//! and the session layer consumes. The session is generic over it, so test
//! doubles substitute for the network without process-wide mutable state.

use futures::Stream;

use crate::error::NetworkError;
use crate::models::{Company, Launch, LaunchFilter, LaunchPage, SortOrder};

/// Access to the two launch-data resources.
///
/// Implementors are responsible for:
/// - Building the outbound requests (endpoints, headers, typed bodies)
/// - Routing every connection through the pinned transport
/// - Decoding responses into the core models
pub trait LaunchDataApi: Send + Sync {
    /// Fetches the company profile over the network.
    fn fetch_company(
        &self,
    ) -> impl std::future::Future<Output = Result<Company, NetworkError>> + Send;

    /// Fetches the company profile as a cache-then-network sequence.
    ///
    /// Yields at most two items: a stale cached profile first (absent on a
    /// cache miss), then the authoritative network result. Consumers treat
    /// the first item as provisional and let the second overwrite it.
    fn fetch_company_with_cache(
        &self,
    ) -> impl Stream<Item = Result<Company, NetworkError>> + Send;

    /// Fetches the full unpaginated launch list.
    fn fetch_launches(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Launch>, NetworkError>> + Send;

    /// Fetches one page of launches with the given filter and sort order.
    ///
    /// `page` is 1-based; `limit` is the fixed page size for the session.
    fn query_launches(
        &self,
        page: u32,
        limit: u32,
        filter: &LaunchFilter,
        sort: SortOrder,
    ) -> impl std::future::Future<Output = Result<LaunchPage, NetworkError>> + Send;
}
