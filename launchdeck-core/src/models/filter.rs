//! Client-side filter criteria and sort order.
//!
//! Filtering is performed server-side by query parameters; these types hold
//! the active criteria and expand them into the typed query filter. An
//! in-memory re-filter of already-fetched pages is deliberately not offered:
//! it would silently under-represent filtered results across pages not yet
//! fetched.

use serde::{Deserialize, Serialize};

use super::query::{DateRange, LaunchQueryFilter, SortDirection};

/// Active filter criteria for the launch list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchFilter {
    /// Restrict to launches within this calendar year (UTC).
    pub year: Option<i32>,
    /// Restrict to successful launches only.
    pub successful_only: bool,
}

impl LaunchFilter {
    /// True when no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && !self.successful_only
    }

    /// Expands the criteria into the server-side query filter.
    ///
    /// A year becomes an inclusive UTC date range covering the whole year;
    /// the success flag maps to a `success: true` constraint.
    pub fn to_query_filter(&self) -> LaunchQueryFilter {
        LaunchQueryFilter {
            date_utc: self.year.map(|year| DateRange {
                gte: format!("{year}-01-01T00:00:00.000Z"),
                lte: format!("{year}-12-31T23:59:59.999Z"),
            }),
            success: self.successful_only.then_some(true),
        }
    }
}

/// Sort order for the launch list, keyed on the launch date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Earliest launch first.
    Ascending,
    /// Latest launch first.
    #[default]
    Descending,
}

impl SortOrder {
    /// The opposite order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// The server-side direction for the `date_utc` sort key.
    pub fn direction(self) -> SortDirection {
        match self {
            SortOrder::Ascending => SortDirection::Asc,
            SortOrder::Descending => SortDirection::Desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_produces_empty_query() {
        let filter = LaunchFilter::default();
        assert!(filter.is_empty());
        let query = filter.to_query_filter();
        assert!(query.date_utc.is_none());
        assert!(query.success.is_none());
    }

    #[test]
    fn year_expands_to_full_year_range() {
        let filter = LaunchFilter {
            year: Some(2023),
            successful_only: false,
        };
        let query = filter.to_query_filter();
        let range = query.date_utc.unwrap();
        assert_eq!(range.gte, "2023-01-01T00:00:00.000Z");
        assert_eq!(range.lte, "2023-12-31T23:59:59.999Z");
    }

    #[test]
    fn successful_only_maps_to_true_constraint() {
        let filter = LaunchFilter {
            year: None,
            successful_only: true,
        };
        assert_eq!(filter.to_query_filter().success, Some(true));
    }

    #[test]
    fn toggle_flips_order() {
        assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
    }
}
