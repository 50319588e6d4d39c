// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Launchdeck Store
//!
//! Persistence and session state for the Launchdeck data-access layer.
//!
//! - [`persistence`] - Atomic byte-level file persistence with restrictive
//!   permissions, plus the default cache location
//! - [`DiskCache`] - A disk-backed
//!   [`ResponseCache`](launchdeck_fetch::ResponseCache) implementation
//! - [`LaunchSession`] - The page-accumulation state machine driving
//!   sequential, filter-aware launch loading

pub mod error;
pub mod persistence;
pub mod response_cache;
pub mod session;

pub use error::StoreError;
pub use response_cache::DiskCache;
pub use session::{DEFAULT_PAGE_SIZE, LaunchSession, LoadPhase, SessionSnapshot};
