//! Top-level view state: which of the two views is active, and the plumbing
//! that carries fetch outcomes back to the fetcher that asked for them.


use std::sync::Arc;

use tokio::sync::mpsc;

use crate::catalog::{self, CatalogDetailHandling, CatalogListHandling};
use crate::fetch::{DetailFetcher, FetchState, ListFetcher};
use crate::models::game::{GameDetail, GameId, GameSummary};

/// A fetch the driver must perform on behalf of a fetcher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FetchRequest {
    GamesPage(u32),
    GameDetail(GameId),
}

/// A completed fetch, tagged with the key it was issued for. The tag, not
/// arrival order, decides whether the outcome still applies.
#[derive(Debug)]
pub enum FetchOutcome {
    GamesPage {
        page: u32,
        result: catalog::Result<Vec<GameSummary>>,
    },
    GameDetail {
        id: GameId,
        result: catalog::Result<GameDetail>,
    },
}

/// What the presentation layer should draw, derived from the selection and
/// the owning fetcher's state. Never stored; recomputed per render.
#[derive(Debug, PartialEq)]
pub enum Screen<'a> {
    ListLoading,
    ListError(&'a str),
    List { page: u32, games: &'a [GameSummary] },
    DetailLoading,
    DetailError(&'a str),
    Detail(&'a GameDetail),
}

/// Single source of truth for the selection, owning both fetchers. While no
/// game is selected the list view is active; selecting one activates the
/// detail view, and clearing the selection returns to the list as it was.
///
/// The selection lives only in memory: there is no URL or storage binding,
/// so every program start begins back at the list.
pub struct App {
    selection: Option<GameId>,
    list: ListFetcher,
    detail: DetailFetcher,
}

impl App {
    pub fn new() -> App {
        App {
            selection: None,
            list: ListFetcher::new(),
            detail: DetailFetcher::new(),
        }
    }

    pub fn selection(&self) -> Option<GameId> {
        self.selection
    }

    pub fn list(&self) -> &ListFetcher {
        &self.list
    }

    pub fn detail(&self) -> &DetailFetcher {
        &self.detail
    }

    /// First activation of the list view.
    pub fn start(&mut self) -> FetchRequest {
        FetchRequest::GamesPage(self.list.refresh())
    }

    /// Show the detail view for `id`. Selecting the already-selected id
    /// changes nothing and requests nothing.
    pub fn select_game(&mut self, id: GameId) -> Option<FetchRequest> {
        self.selection = Some(id);
        self.detail.select(id).map(FetchRequest::GameDetail)
    }

    /// Back to the list. The detail state is discarded with the selection;
    /// the list redisplays from whatever state it already holds, without a
    /// refetch. A no-op when nothing is selected.
    pub fn clear_selection(&mut self) {
        if self.selection.is_none() {
            return;
        }

        self.selection = None;
        self.detail.clear();
    }

    pub fn set_page(&mut self, page: u32) -> Option<FetchRequest> {
        self.list.set_page(page).map(FetchRequest::GamesPage)
    }

    pub fn next_page(&mut self) -> Option<FetchRequest> {
        self.set_page(self.list.page() + 1)
    }

    pub fn prev_page(&mut self) -> Option<FetchRequest> {
        // set_page treats page 0 as a no-op, keeping the page-1 floor
        self.set_page(self.list.page().saturating_sub(1))
    }

    /// Route a tagged outcome to the fetcher that owns it. Returns whether
    /// anything changed, i.e. whether the caller should re-render.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        match outcome {
            FetchOutcome::GamesPage { page, result } => self.list.apply(page, result),
            FetchOutcome::GameDetail { id, result } => self.detail.apply(id, result),
        }
    }

    pub fn screen(&self) -> Screen<'_> {
        match self.selection {
            None => match self.list.state() {
                FetchState::Idle | FetchState::Loading => Screen::ListLoading,
                FetchState::Success(games) => Screen::List { page: self.list.page(), games: games },
                FetchState::Failure(msg) => Screen::ListError(msg),
            },
            Some(_) => match self.detail.state() {
                FetchState::Idle | FetchState::Loading => Screen::DetailLoading,
                FetchState::Success(detail) => Screen::Detail(detail),
                FetchState::Failure(msg) => Screen::DetailError(msg),
            },
        }
    }
}

impl Default for App {
    fn default() -> App {
        App::new()
    }
}

/// Run one fetch in the background, delivering its tagged outcome on `tx`.
/// The task holds only the client and the sender; staleness is judged by the
/// receiving fetcher when the outcome is applied, never in here.
pub fn spawn_fetch<C>(client: &Arc<C>, request: FetchRequest, tx: &mpsc::Sender<FetchOutcome>)
where
    C: CatalogListHandling + CatalogDetailHandling + Send + Sync + 'static,
{
    let client = Arc::clone(client);
    let tx = tx.clone();

    tokio::spawn(async move {
        let outcome = match request {
            FetchRequest::GamesPage(page) => FetchOutcome::GamesPage {
                page: page,
                result: client.get_games_page(page).await,
            },
            FetchRequest::GameDetail(id) => FetchOutcome::GameDetail {
                id: id,
                result: client.get_game_detail(id).await,
            },
        };

        // A closed receiver just means the driver loop already exited
        let _ = tx.send(outcome).await;
    });
}
