// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Launchdeck Fetch
//!
//! The trust-verified fetch pipeline for the Launchdeck data-access layer.
//!
//! Every connection to the pinned API host is gated by a public-key pinning
//! validator before any data is read from the socket:
//!
//! - [`pin`] - SPKI fingerprint computation and the rustls certificate
//!   verifier that enforces the pin during the TLS handshake
//! - [`client`] - The pinned HTTP transport with typed JSON decoding and
//!   response classification
//! - [`cache`] - Cache-then-network fetching as a two-step lazy sequence
//! - [`api`] - The concrete [`LaunchDataApi`](launchdeck_core::LaunchDataApi)
//!   implementation for the SpaceX endpoints
//!
//! ## Example
//!
//! ```ignore
//! use launchdeck_core::{LaunchDataApi, LaunchFilter, SortOrder};
//! use launchdeck_fetch::SpaceXApi;
//!
//! let api = SpaceXApi::new()?;
//! let company = api.fetch_company().await?;
//! let page = api
//!     .query_launches(1, 10, &LaunchFilter::default(), SortOrder::Descending)
//!     .await?;
//! ```

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod pin;
pub mod request;

// Pinning
pub use pin::{PinnedKeyFingerprint, PinnedServerCertVerifier, pinned_tls_config, spki_fingerprint};

// Transport
pub use client::{ClientSettings, TransportClient, decode_json};
pub use request::{CachePolicy, FetchRequest, Method};

// Cache
pub use cache::{CacheAugmentedFetcher, MemoryCache, ResponseCache, Transport};

// API surface
pub use api::SpaceXApi;

// Errors
pub use error::PinError;
