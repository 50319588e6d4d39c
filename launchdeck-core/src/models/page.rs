//! Paginated query response envelope.

use serde::{Deserialize, Serialize};

use super::Launch;

/// One page of a launch query response.
///
/// The server echoes the requested page index and reports overall paging
/// state. `has_next_page` is authoritative for whether another page exists;
/// a consistent server also satisfies `has_next_page == (page < total_pages)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchPage {
    /// Launch records for this page, in server order.
    pub docs: Vec<Launch>,
    /// Total matching records across all pages.
    pub total_docs: u32,
    /// Page size used for this query.
    pub limit: u32,
    /// Total page count.
    pub total_pages: u32,
    /// Echo of the requested 1-based page index.
    pub page: u32,
    /// 1-based index of the first record on this page.
    pub paging_counter: u32,
    /// Whether a previous page exists.
    pub has_prev_page: bool,
    /// Whether a next page exists.
    pub has_next_page: bool,
    /// Previous page index, if any.
    pub prev_page: Option<u32>,
    /// Next page index, if any.
    pub next_page: Option<u32>,
}

impl LaunchPage {
    /// Checks the paging invariant `has_next_page == (page < total_pages)`.
    ///
    /// Violations indicate a server-side inconsistency; callers log them and
    /// keep trusting `has_next_page`.
    pub fn is_consistent(&self) -> bool {
        self.has_next_page == (self.page < self.total_pages)
    }
}
