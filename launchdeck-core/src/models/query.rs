//! Typed query body for `POST /v5/launches/query`.
//!
//! The query resource is Mongo-flavored: filter criteria under `query`,
//! paging and sorting under `options`. Every field here is a typed struct;
//! string-keyed maps for semantically fixed fields invite silent
//! key-mismatch bugs.

use serde::{Deserialize, Serialize};

/// The complete POST body for a launch query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchQuery {
    /// Filter criteria, applied server-side.
    pub query: LaunchQueryFilter,
    /// Paging and sorting options.
    pub options: QueryOptions,
}

impl LaunchQuery {
    /// Builds a query for one page with the given filter and sort direction.
    pub fn page(filter: LaunchQueryFilter, page: u32, limit: u32, sort: SortDirection) -> Self {
        Self {
            query: filter,
            options: QueryOptions {
                limit,
                page,
                sort: SortSpec { date_utc: sort },
            },
        }
    }
}

/// Server-side filter criteria.
///
/// Absent criteria are omitted from the serialized body entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchQueryFilter {
    /// Launch-date range constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_utc: Option<DateRange>,
    /// Mission-success constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

/// An inclusive UTC date-range bound, Mongo `$gte`/`$lte` style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Lower bound, inclusive.
    #[serde(rename = "$gte")]
    pub gte: String,
    /// Upper bound, inclusive.
    #[serde(rename = "$lte")]
    pub lte: String,
}

/// Paging and sorting options for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Page size, fixed per session.
    pub limit: u32,
    /// 1-based page index.
    pub page: u32,
    /// Sort specification.
    pub sort: SortSpec,
}

/// Sort specification; the sort key is fixed to the launch date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Direction for the `date_utc` sort key.
    pub date_utc: SortDirection,
}

/// Server-side sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Earliest first.
    Asc,
    /// Latest first.
    Desc,
}
