//! Page state with monotonic fetch tickets.
//!
//! Several fetches can be in flight at once (rapid page-size changes); the
//! completion order is not the issuance order. Every fetch takes a ticket
//! from [`PageState::begin`], and [`PageState::settle`] applies a result
//! only when its ticket is still the most recent - stale responses are
//! discarded instead of overwriting newer state.

use almacen_client::ApiError;
use almacen_core::{PageRequest, PageResult};

/// Token identifying one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// How a settled fetch was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The result replaced the page state.
    Applied,
    /// The fetch failed; rows cleared, totals zeroed, message to surface.
    Failed(String),
    /// A newer fetch was issued meanwhile; this response was discarded.
    Stale,
}

impl FetchOutcome {
    /// Record this outcome into a screen's error slot: applied clears it,
    /// failure fills it, stale leaves it alone.
    pub fn record(&self, slot: &mut Option<String>) {
        match self {
            Self::Applied => *slot = None,
            Self::Failed(message) => *slot = Some(message.clone()),
            Self::Stale => {}
        }
    }
}

/// Request, result, and loading state for one paginated table.
#[derive(Debug)]
pub struct PageState<T> {
    /// The page/size/sort the next fetch will use.
    pub request: PageRequest,
    /// The rows and totals currently displayed. Replaced wholesale.
    pub result: PageResult<T>,
    /// Whether a fetch is in flight.
    pub loading: bool,
    latest: u64,
}

impl<T> PageState<T> {
    /// Page state at the first page with default size and sort.
    #[must_use]
    pub fn new() -> Self {
        Self {
            request: PageRequest::default(),
            result: PageResult::empty(),
            loading: false,
            latest: 0,
        }
    }

    /// Start a fetch: enter the loading state and take the next ticket.
    pub const fn begin(&mut self) -> FetchTicket {
        self.latest += 1;
        self.loading = true;
        FetchTicket(self.latest)
    }

    /// Settle a fetch.
    ///
    /// If a newer ticket has been issued since, the response is discarded
    /// untouched. Otherwise the page state is replaced on success, or reset
    /// to the empty page on failure with the user-facing message returned.
    pub fn settle(
        &mut self,
        ticket: FetchTicket,
        result: Result<PageResult<T>, ApiError>,
    ) -> FetchOutcome {
        if ticket.0 != self.latest {
            return FetchOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.result = page;
                FetchOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, "page fetch failed");
                self.result = PageResult::empty();
                FetchOutcome::Failed(e.user_message())
            }
        }
    }

    /// Navigate to a page. Pure pagination: filters and totals untouched.
    pub const fn set_page(&mut self, page: u32) {
        self.request.page = page;
    }

    /// Change the page size. Rejected (returns `false`) when the size is
    /// not one the table offers; the current page is preserved otherwise.
    pub fn set_size(&mut self, size: u32) -> bool {
        if !PageRequest::is_allowed_size(size) {
            return false;
        }
        self.request.size = size;
        true
    }

    /// Jump back to the first page. Called on every filter commit.
    pub const fn reset_to_first_page(&mut self) {
        self.request.page = 0;
    }
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self::new()
    }
}
