//! Movement-history screen.

use almacen_core::{Movement, MovementFilters};

use crate::filter_state::FilterState;
use crate::gateway::MovementGateway;
use crate::pager::{FetchOutcome, PageState};

/// State for the inventory-movement table. No reactive search field here;
/// all filters commit through the explicit apply.
#[derive(Debug, Default)]
pub struct MovementScreen {
    pub filters: FilterState<MovementFilters>,
    pub page: PageState<Movement>,
    pub last_error: Option<String>,
}

impl MovementScreen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the current page for the committed filters.
    pub async fn refresh<G: MovementGateway>(&mut self, gateway: &G) -> FetchOutcome {
        let ticket = self.page.begin();
        let result = gateway
            .movement_page(&self.page.request, self.filters.committed())
            .await;
        let outcome = self.page.settle(ticket, result);
        outcome.record(&mut self.last_error);
        outcome
    }

    /// Commit the whole filter form, back to page 0.
    pub fn apply_filters(&mut self) {
        self.filters.apply();
        self.page.reset_to_first_page();
    }

    /// Reset filters to defaults, back to page 0.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page.reset_to_first_page();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use almacen_client::ApiError;
    use almacen_core::{PageRequest, PageResult};
    use chrono::NaiveDate;

    #[derive(Default)]
    struct StubMovements {
        pages: Mutex<VecDeque<Result<PageResult<Movement>, ApiError>>>,
        calls: Mutex<Vec<(PageRequest, MovementFilters)>>,
    }

    impl MovementGateway for StubMovements {
        async fn movement_page(
            &self,
            req: &PageRequest,
            filters: &MovementFilters,
        ) -> Result<PageResult<Movement>, ApiError> {
            self.calls
                .lock()
                .expect("lock")
                .push((req.clone(), filters.clone()));
            self.pages
                .lock()
                .expect("lock")
                .pop_front()
                .unwrap_or_else(|| Ok(PageResult::empty()))
        }
    }

    #[tokio::test]
    async fn test_apply_commits_date_range_and_resets_page() {
        let stub = StubMovements::default();

        let mut screen = MovementScreen::new();
        screen.page.set_page(4);
        screen.filters.draft_mut().kind = Some("SALIDA".to_string());
        screen.filters.draft_mut().from = NaiveDate::from_ymd_opt(2026, 8, 1);
        screen.apply_filters();

        assert_eq!(screen.page.request.page, 0);

        screen.refresh(&stub).await;
        let calls = stub.calls.lock().expect("lock");
        let (req, filters) = calls.first().expect("call");
        assert_eq!(req.page, 0);
        assert_eq!(filters.kind.as_deref(), Some("SALIDA"));
        assert_eq!(filters.from, NaiveDate::from_ymd_opt(2026, 8, 1));
    }

    #[tokio::test]
    async fn test_failed_fetch_clears_movement_rows() {
        let stub = StubMovements::default();
        stub.pages.lock().expect("lock").push_back(Err(ApiError::Api {
            status: 502,
            message: "upstream timeout".to_string(),
        }));

        let mut screen = MovementScreen::new();
        let outcome = screen.refresh(&stub).await;

        assert_eq!(outcome, FetchOutcome::Failed("upstream timeout".to_string()));
        assert!(screen.page.result.is_empty());
        assert_eq!(screen.last_error.as_deref(), Some("upstream timeout"));
    }
}
