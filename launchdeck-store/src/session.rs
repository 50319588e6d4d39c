//! The page-accumulation session.
//!
//! [`LaunchSession`] drives sequential page requests against a
//! [`LaunchDataApi`], merges the active filter into each request, and
//! appends results to an ordered collection. All state lives behind one
//! write lock; mutation happens only on the completion path, so readers
//! see either the pre-append or post-append state, never a partial page.
//!
//! Two guards keep the accumulation coherent:
//!
//! - `load_more` is accepted only while the session is [`LoadPhase::Idle`]
//!   with a next page available, so at most one page request is ever
//!   outstanding and pages arrive in order.
//! - Every full reload bumps an epoch counter, and every completion
//!   re-checks it. A superseding reload (a filter change, say) is allowed
//!   while an older load is still in flight; the older result is silently
//!   dropped when it eventually arrives.

use std::sync::Arc;

use futures::{StreamExt, pin_mut};
use launchdeck_core::{
    Company, Launch, LaunchDataApi, LaunchFilter, NetworkError, SortOrder, available_years,
    project,
};
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

/// Page size used when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

// ============================================================================
// Phase & snapshot
// ============================================================================

/// Where the session is in its load cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// No request outstanding.
    #[default]
    Idle,
    /// A full reload is in flight.
    Loading,
    /// A next-page request is in flight.
    LoadingMore,
    /// The last operation failed; accumulated pages are preserved.
    Error,
}

/// A point-in-time copy of the session state for the presentation layer.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    /// Current load phase.
    pub phase: LoadPhase,
    /// Company profile, possibly provisional while a reload runs.
    pub company: Option<Company>,
    /// Accumulated launch records in page-arrival order.
    pub launches: Vec<Launch>,
    /// Index of the last successfully loaded page (1-based).
    pub page: u32,
    /// Total matching records reported by the server.
    pub total_docs: u32,
    /// Total page count reported by the server.
    pub total_pages: u32,
    /// Whether another page can be requested.
    pub has_next_page: bool,
    /// Human-readable message for the last failure.
    pub error: Option<String>,
    /// Active filter criteria.
    pub filter: LaunchFilter,
    /// Active sort order.
    pub sort: SortOrder,
}

#[derive(Debug, Default)]
struct SessionState {
    phase: LoadPhase,
    company: Option<Company>,
    launches: Vec<Launch>,
    page: u32,
    total_docs: u32,
    total_pages: u32,
    has_next_page: bool,
    error: Option<String>,
    filter: LaunchFilter,
    sort: SortOrder,
    epoch: u64,
}

// ============================================================================
// Session
// ============================================================================

/// Accumulating launch-list session over an API implementation.
#[derive(Debug)]
pub struct LaunchSession<A> {
    api: Arc<A>,
    page_size: u32,
    state: Arc<RwLock<SessionState>>,
}

impl<A> Clone for LaunchSession<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            page_size: self.page_size,
            state: Arc::clone(&self.state),
        }
    }
}

impl<A: LaunchDataApi> LaunchSession<A> {
    /// Creates an empty session with the default page size.
    pub fn new(api: Arc<A>) -> Self {
        Self::with_page_size(api, DEFAULT_PAGE_SIZE)
    }

    /// Creates an empty session with a fixed page size.
    pub fn with_page_size(api: Arc<A>, page_size: u32) -> Self {
        Self::with_config(api, page_size, LaunchFilter::default(), SortOrder::default())
    }

    /// Creates an empty session with initial filter criteria and sort order.
    ///
    /// Nothing is fetched until [`load`](Self::load) is called.
    pub fn with_config(
        api: Arc<A>,
        page_size: u32,
        filter: LaunchFilter,
        sort: SortOrder,
    ) -> Self {
        Self {
            api,
            page_size,
            state: Arc::new(RwLock::new(SessionState {
                filter,
                sort,
                ..SessionState::default()
            })),
        }
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Performs a full reload: clears the accumulation, then fetches the
    /// company profile and launch page 1 concurrently.
    ///
    /// The company comes through the cache-then-network sequence; a cached
    /// profile is published provisionally and overwritten by the fresh one.
    /// Any in-flight older load is superseded: its completion is dropped.
    #[instrument(skip(self))]
    pub async fn load(&self) {
        let (epoch, filter, sort) = {
            let mut state = self.state.write().await;
            state.epoch += 1;
            state.phase = LoadPhase::Loading;
            state.error = None;
            state.launches.clear();
            state.page = 1;
            state.total_docs = 0;
            state.total_pages = 0;
            state.has_next_page = false;
            (state.epoch, state.filter, state.sort)
        };
        debug!(epoch, ?filter, "Starting full reload");

        let (company_result, launches_result) = tokio::join!(
            self.publish_company(epoch),
            self.api.query_launches(1, self.page_size, &filter, sort),
        );

        let mut state = self.state.write().await;
        if state.epoch != epoch {
            debug!(epoch, current = state.epoch, "Dropping superseded reload");
            return;
        }

        match (company_result, launches_result) {
            (Ok(()), Ok(page)) => {
                if !page.is_consistent() {
                    warn!(page = page.page, "Inconsistent paging state from server");
                }
                state.page = page.page;
                state.total_docs = page.total_docs;
                state.total_pages = page.total_pages;
                state.has_next_page = page.has_next_page;
                state.launches = page.docs;
                state.phase = LoadPhase::Idle;
                debug!(records = state.launches.len(), "Reload complete");
            }
            (Err(error), _) | (_, Err(error)) => {
                warn!(%error, "Reload failed");
                state.error = Some(error.to_string());
                state.phase = LoadPhase::Error;
            }
        }
    }

    /// Requests the next page and appends it to the accumulation.
    ///
    /// A no-op unless the session is idle with a next page available; in
    /// particular it is silently ignored while any request is in flight,
    /// so at most one page request is outstanding at a time. On failure
    /// the accumulated pages are preserved and only the failed page is
    /// lost; the page index advances only on success.
    #[instrument(skip(self))]
    pub async fn load_more(&self) {
        let (epoch, filter, sort, next_page) = {
            let mut state = self.state.write().await;
            if state.phase != LoadPhase::Idle || !state.has_next_page {
                debug!(phase = ?state.phase, has_next_page = state.has_next_page, "Ignoring load_more");
                return;
            }
            state.phase = LoadPhase::LoadingMore;
            state.error = None;
            (state.epoch, state.filter, state.sort, state.page + 1)
        };
        debug!(page = next_page, "Loading next page");

        let result = self
            .api
            .query_launches(next_page, self.page_size, &filter, sort)
            .await;

        let mut state = self.state.write().await;
        if state.epoch != epoch {
            debug!(epoch, current = state.epoch, "Dropping superseded page");
            return;
        }

        match result {
            Ok(page) => {
                if !page.is_consistent() {
                    warn!(page = page.page, "Inconsistent paging state from server");
                }
                state.page = next_page;
                state.total_docs = page.total_docs;
                state.total_pages = page.total_pages;
                state.has_next_page = page.has_next_page;
                state.launches.extend(page.docs);
                state.phase = LoadPhase::Idle;
                debug!(records = state.launches.len(), "Page appended");
            }
            Err(error) => {
                warn!(%error, page = next_page, "Page load failed");
                state.error = Some(error.to_string());
                state.phase = LoadPhase::Error;
            }
        }
    }

    /// Consumes the company cache-then-network sequence, publishing each
    /// profile into the session as it arrives (epoch-checked).
    async fn publish_company(&self, epoch: u64) -> Result<(), NetworkError> {
        let stream = self.api.fetch_company_with_cache();
        pin_mut!(stream);

        // the sequence always ends with the authoritative network element;
        // its outcome decides the step's result
        let mut outcome = Err(NetworkError::TransportFailure(
            "empty response sequence".to_string(),
        ));
        while let Some(item) = stream.next().await {
            match item {
                Ok(company) => {
                    let mut state = self.state.write().await;
                    if state.epoch == epoch {
                        state.company = Some(company);
                    }
                    outcome = Ok(());
                }
                Err(error) => outcome = Err(error),
            }
        }
        outcome
    }

    // ------------------------------------------------------------------
    // Filter & sort
    // ------------------------------------------------------------------

    /// Sets the year filter, triggering a full reload on change.
    pub async fn set_year(&self, year: Option<i32>) {
        {
            let mut state = self.state.write().await;
            if state.filter.year == year {
                return;
            }
            state.filter.year = year;
        }
        self.load().await;
    }

    /// Sets the successful-only filter, triggering a full reload on change.
    pub async fn set_successful_only(&self, successful_only: bool) {
        {
            let mut state = self.state.write().await;
            if state.filter.successful_only == successful_only {
                return;
            }
            state.filter.successful_only = successful_only;
        }
        self.load().await;
    }

    /// Sets the sort order, triggering a full reload on change.
    pub async fn set_sort_order(&self, sort: SortOrder) {
        {
            let mut state = self.state.write().await;
            if state.sort == sort {
                return;
            }
            state.sort = sort;
        }
        self.load().await;
    }

    /// Flips the sort order and reloads.
    pub async fn toggle_sort_order(&self) {
        let sort = self.state.read().await.sort.toggled();
        self.set_sort_order(sort).await;
    }

    /// Resets filter and sort to their defaults, reloading if anything
    /// was active.
    pub async fn clear_filters(&self) {
        {
            let mut state = self.state.write().await;
            if state.filter == LaunchFilter::default() && state.sort == SortOrder::default() {
                return;
            }
            state.filter = LaunchFilter::default();
            state.sort = SortOrder::default();
        }
        self.load().await;
    }

    // ------------------------------------------------------------------
    // Read-only access
    // ------------------------------------------------------------------

    /// A point-in-time copy of the whole session state.
    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().await;
        SessionSnapshot {
            phase: state.phase,
            company: state.company.clone(),
            launches: state.launches.clone(),
            page: state.page,
            total_docs: state.total_docs,
            total_pages: state.total_pages,
            has_next_page: state.has_next_page,
            error: state.error.clone(),
            filter: state.filter,
            sort: state.sort,
        }
    }

    /// The accumulated records ordered by the active sort order.
    pub async fn projection(&self) -> Vec<Launch> {
        let state = self.state.read().await;
        project(&state.launches, state.sort)
    }

    /// Distinct launch years present in the accumulation, latest first.
    pub async fn available_years(&self) -> Vec<i32> {
        let state = self.state.read().await;
        available_years(&state.launches)
    }

    /// Current load phase.
    pub async fn phase(&self) -> LoadPhase {
        self.state.read().await.phase
    }

    /// Whether another page can be requested.
    pub async fn has_next_page(&self) -> bool {
        self.state.read().await.has_next_page
    }

    /// Message for the last failure, if any.
    pub async fn error_message(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }
}

// ============================================================================
// Tests
// ============================================================================
