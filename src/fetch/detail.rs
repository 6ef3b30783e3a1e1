use tracing::debug;

use crate::catalog;
use crate::fetch::FetchState;
use crate::models::game::{GameDetail, GameId};

/// Lifecycle of a single game's detail record, keyed by the selected id.
/// Without a selection the fetcher is Idle and never issues a request.
pub struct DetailFetcher {
    id: Option<GameId>,
    state: FetchState<GameDetail>,
}

impl DetailFetcher {
    pub fn new() -> DetailFetcher {
        DetailFetcher { id: None, state: FetchState::Idle }
    }

    pub fn selected(&self) -> Option<GameId> {
        self.id
    }

    pub fn state(&self) -> &FetchState<GameDetail> {
        &self.state
    }

    /// Commit a selection and enter Loading. Re-selecting the id that is
    /// already committed changes nothing and requests nothing.
    pub fn select(&mut self, id: GameId) -> Option<GameId> {
        if self.id == Some(id) {
            return None;
        }

        self.id = Some(id);
        self.state = FetchState::Loading;

        Some(id)
    }

    /// Drop the selection. The fetcher holds nothing without one.
    pub fn clear(&mut self) {
        self.id = None;
        self.state = FetchState::Idle;
    }

    /// Install a fetch outcome, unless the id it was issued for is no longer
    /// the committed one. Returns whether the outcome was applied.
    pub fn apply(&mut self, id: GameId, result: catalog::Result<GameDetail>) -> bool {
        if self.id != Some(id) {
            debug!(stale = %id, "dropping stale game detail response");
            return false;
        }

        self.state = match result {
            Ok(detail) => FetchState::Success(detail),
            Err(e) => FetchState::Failure(e.to_string()),
        };

        true
    }
}

impl Default for DetailFetcher {
    fn default() -> DetailFetcher {
        DetailFetcher::new()
    }
}
