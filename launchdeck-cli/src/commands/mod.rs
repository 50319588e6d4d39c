//! CLI command implementations.

pub mod company;
pub mod launches;

use std::sync::Arc;

use anyhow::Result;
use launchdeck_fetch::{ClientSettings, ResponseCache, SpaceXApi};
use launchdeck_store::DiskCache;

/// Builds the API client with the disk-backed response cache.
pub fn build_api() -> Result<SpaceXApi> {
    let cache: Arc<dyn ResponseCache> = Arc::new(DiskCache::default_location());
    Ok(SpaceXApi::with_cache(ClientSettings::default(), cache)?)
}
