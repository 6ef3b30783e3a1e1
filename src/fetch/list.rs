use tracing::debug;

use crate::catalog;
use crate::fetch::FetchState;
use crate::models::game::GameSummary;

/// Lifecycle of the paginated games list. Page keys are positive integers
/// starting at 1; each committed page owns its own fetch and there is no
/// caching across pages.
pub struct ListFetcher {
    page: u32,
    state: FetchState<Vec<GameSummary>>,
}

impl ListFetcher {
    pub fn new() -> ListFetcher {
        ListFetcher { page: 1, state: FetchState::Idle }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn state(&self) -> &FetchState<Vec<GameSummary>> {
        &self.state
    }

    /// Enter Loading for the current page, on first activation or a
    /// user-driven retry. Returns the page the caller must now fetch.
    pub fn refresh(&mut self) -> u32 {
        self.state = FetchState::Loading;
        self.page
    }

    /// Commit a page change. Committing the current page again, or page 0,
    /// changes nothing and requests nothing.
    pub fn set_page(&mut self, page: u32) -> Option<u32> {
        if page == 0 || page == self.page {
            return None;
        }

        self.page = page;
        self.state = FetchState::Loading;

        Some(page)
    }

    /// Install a fetch outcome, unless the page it was issued for is no
    /// longer the committed one. Returns whether the outcome was applied.
    pub fn apply(
        &mut self,
        page: u32,
        result: catalog::Result<Vec<GameSummary>>,
    ) -> bool {
        if page != self.page {
            debug!(stale = page, current = self.page, "dropping stale games page response");
            return false;
        }

        self.state = match result {
            Ok(games) => FetchState::Success(games),
            Err(e) => FetchState::Failure(e.to_string()),
        };

        true
    }
}

impl Default for ListFetcher {
    fn default() -> ListFetcher {
        ListFetcher::new()
    }
}
