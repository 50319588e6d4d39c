//! Domain models for Launchdeck.
//!
//! This module contains the wire types for the two SpaceX resources the
//! pipeline resolves, plus the typed query-building structures.
//!
//! Every field the API may omit is an explicit `Option`; presence is never
//! assumed at the decode boundary.
//!
//! ## Submodules
//!
//! - [`company`] - Company profile (v4 company resource)
//! - [`launch`] - Launch records (v5 launches resource)
//! - [`query`] - Typed query body for `POST /v5/launches/query`
//! - [`page`] - Paginated query response envelope
//! - [`filter`] - Client-side filter criteria and sort order

mod company;
mod filter;
mod launch;
mod page;
mod query;

// Re-export everything at the models level
pub use company::{Company, CompanyLinks, Headquarters};
pub use filter::{LaunchFilter, SortOrder};
pub use launch::{
    CrewAssignment, Fairings, FlickrLinks, Launch, LaunchCore, LaunchFailure, LaunchLinks,
    PatchLinks, RedditLinks,
};
pub use page::LaunchPage;
pub use query::{DateRange, LaunchQuery, LaunchQueryFilter, QueryOptions, SortDirection, SortSpec};

#[cfg(test)]
mod serde_tests;
