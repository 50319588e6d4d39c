// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Launchdeck Core
//!
//! Core types, models, and traits for the Launchdeck data-access layer.
//!
//! This crate provides the foundational abstractions used across all other
//! Launchdeck crates, including:
//!
//! - Domain models (company profile, launch records, query and page types)
//! - The [`NetworkError`] taxonomy shared by every network-facing operation
//! - The [`LaunchDataApi`] trait that the transport layer implements and the
//!   session layer consumes (enabling substitution with test doubles)
//! - The pure sorted view projection over accumulated launch records
//!
//! ## Key Types
//!
//! ### Resources
//! - [`Company`] - Company profile from the v4 company resource
//! - [`Launch`] - A single launch record from the v5 launches resource
//! - [`LaunchPage`] - One page of a paginated launch query response
//!
//! ### Query Building
//! - [`LaunchQuery`] - Typed POST body for the launch query resource
//! - [`LaunchFilter`] - Client-side filter criteria (year, success flag)
//! - [`SortOrder`] - Launch-date sort direction
//!
//! ### Errors
//! - [`NetworkError`] - InvalidRequest / TransportFailure / BadResponse /
//!   DecodingError

pub mod error;
pub mod models;
pub mod projection;
pub mod traits;

// Re-export error types
pub use error::NetworkError;

// Re-export all model types
pub use models::{
    // Company resource
    Company,
    CompanyLinks,
    Headquarters,
    // Launch resource
    CrewAssignment,
    Fairings,
    FlickrLinks,
    Launch,
    LaunchCore,
    LaunchFailure,
    LaunchLinks,
    PatchLinks,
    RedditLinks,
    // Query building
    DateRange,
    LaunchFilter,
    LaunchQuery,
    LaunchQueryFilter,
    QueryOptions,
    SortDirection,
    SortOrder,
    SortSpec,
    // Pagination
    LaunchPage,
};

// Re-export projection helpers
pub use projection::{available_years, project};

// Re-export traits
pub use traits::LaunchDataApi;
