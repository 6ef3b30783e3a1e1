mod utils;

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use tokio::sync::mpsc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stackplay::app::{spawn_fetch, App, FetchOutcome, Screen};
use stackplay::catalog::{
    CatalogClient, CatalogDetailHandling, CatalogListHandling, Result as CatalogResult,
};
use stackplay::fetch::FetchState;
use stackplay::models::game::{GameDetail, GameId, GameSummary};

mock! {
    pub CatalogClient {}

    #[async_trait]
    impl CatalogListHandling for CatalogClient {
        async fn get_games_page(&self, page: u32) -> CatalogResult<Vec<GameSummary>>;
    }

    #[async_trait]
    impl CatalogDetailHandling for CatalogClient {
        async fn get_game_detail(&self, id: GameId) -> CatalogResult<GameDetail>;
    }
}

fn page_summary(page: u32) -> Vec<GameSummary> {
    vec![GameSummary {
        id: GameId { id: page as u64 * 100 },
        name: format!("Best game of page {}", page),
        background_image: None,
        rating: 4.0,
    }]
}

fn detail_for(id: GameId) -> GameDetail {
    GameDetail {
        id: id,
        name: format!("Game {}", id),
        background_image: None,
        description: format!("<p>All about game {}</p>", id),
    }
}

/// The whole journey: list loads, a game is opened, its details load, and
/// back returns to the list as it was. The expect(1) on the list mock pins
/// down that going back does not refetch the page.
#[tokio::test]
async fn test_list_select_detail_and_back() {
    let mock_catalog = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                utils::fixture("catalog/games-page-1.json").as_bytes(),
                "application/json",
            )
        )
        .expect(1)
        .mount(&mock_catalog)
        .await;

    Mock::given(method("GET"))
        .and(path("/games/3498"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                utils::fixture("catalog/game-detail-3498.json").as_bytes(),
                "application/json",
            )
        )
        .expect(1)
        .mount(&mock_catalog)
        .await;

    let client = Arc::new(CatalogClient::new(
        "TEST API KEY",
        &format!("http://{}", mock_catalog.address()),
        12,
        "-rating",
    ));
    let mut app = App::new();
    let (tx, mut rx) = mpsc::channel(8);

    spawn_fetch(&client, app.start(), &tx);
    assert_eq!(app.screen(), Screen::ListLoading);

    let outcome = rx.recv().await.unwrap();
    assert!(app.apply(outcome));
    match app.screen() {
        Screen::List { page: 1, games } => {
            assert_eq!(games.len(), 3);
            assert_eq!(games[0].name, "Grand Theft Auto V");
        }
        other => panic!("Expected the list screen, got {:?}", other),
    }

    let id = GameId { id: 3498 };
    let request = app.select_game(id).unwrap();
    spawn_fetch(&client, request, &tx);
    assert_eq!(app.selection(), Some(id));
    assert_eq!(app.screen(), Screen::DetailLoading);

    let outcome = rx.recv().await.unwrap();
    assert!(app.apply(outcome));
    match app.screen() {
        Screen::Detail(detail) => {
            assert_eq!(detail.name, "Grand Theft Auto V");
            assert!(detail.description.starts_with("<p>Rockstar Games went bigger"));
        }
        other => panic!("Expected the detail screen, got {:?}", other),
    }

    app.clear_selection();
    assert_eq!(app.selection(), None);
    assert_eq!(*app.detail().state(), FetchState::Idle);
    match app.screen() {
        Screen::List { page: 1, games } => assert_eq!(games[0].name, "Grand Theft Auto V"),
        other => panic!("Expected the retained list screen, got {:?}", other),
    }

    // Dropping the server verifies the expect(1) counts
}

#[tokio::test]
async fn test_stale_page_outcome_is_not_applied() {
    let mut client = MockCatalogClient::new();
    client
        .expect_get_games_page()
        .returning(|page| Ok(page_summary(page)));
    let client = Arc::new(client);

    let mut app = App::new();
    let (tx, mut rx) = mpsc::channel(8);

    spawn_fetch(&client, app.start(), &tx);
    // Page 2 is committed before the page-1 outcome has been drained
    let request = app.set_page(2).unwrap();

    let stale = rx.recv().await.unwrap();
    assert!(matches!(stale, FetchOutcome::GamesPage { page: 1, .. }));
    assert!(!app.apply(stale));
    assert_eq!(app.list().page(), 2);
    assert_eq!(app.screen(), Screen::ListLoading);

    spawn_fetch(&client, request, &tx);
    let fresh = rx.recv().await.unwrap();
    assert!(app.apply(fresh));
    match app.screen() {
        Screen::List { page: 2, games } => assert_eq!(games[0].name, "Best game of page 2"),
        other => panic!("Expected page 2, got {:?}", other),
    }
}

#[tokio::test]
async fn test_stale_detail_outcome_is_not_applied() {
    let mut client = MockCatalogClient::new();
    client
        .expect_get_game_detail()
        .returning(|id| Ok(detail_for(id)));
    let client = Arc::new(client);

    let g1 = GameId { id: 7 };
    let g2 = GameId { id: 8 };

    let mut app = App::new();
    let (tx, mut rx) = mpsc::channel(8);

    spawn_fetch(&client, app.select_game(g1).unwrap(), &tx);
    // The selection moves on before g1's response arrives
    let request = app.select_game(g2).unwrap();

    let stale = rx.recv().await.unwrap();
    assert!(!app.apply(stale));
    assert_eq!(app.selection(), Some(g2));
    assert_eq!(app.screen(), Screen::DetailLoading);

    spawn_fetch(&client, request, &tx);
    let fresh = rx.recv().await.unwrap();
    assert!(app.apply(fresh));
    match app.screen() {
        Screen::Detail(detail) => assert_eq!(detail.name, "Game 8"),
        other => panic!("Expected game 8's detail, got {:?}", other),
    }
}

#[tokio::test]
async fn test_reselecting_issues_no_second_request() {
    let mut client = MockCatalogClient::new();
    client
        .expect_get_game_detail()
        .times(1)
        .returning(|id| Ok(detail_for(id)));
    let client = Arc::new(client);

    let id = GameId { id: 7 };

    let mut app = App::new();
    let (tx, mut rx) = mpsc::channel(8);

    spawn_fetch(&client, app.select_game(id).unwrap(), &tx);
    let outcome = rx.recv().await.unwrap();
    assert!(app.apply(outcome));

    // Re-selecting hands back no request, so nothing is spawned
    assert_eq!(app.select_game(id), None);
    match app.screen() {
        Screen::Detail(detail) => assert_eq!(detail.name, "Game 7"),
        other => panic!("Expected game 7's detail, got {:?}", other),
    }
}

#[tokio::test]
async fn test_detail_fetch_failure_reaches_the_error_screen() {
    let mut client = MockCatalogClient::new();
    client
        .expect_get_game_detail()
        .returning(|_| Err(stackplay::catalog::CatalogError::Status(404)));
    let client = Arc::new(client);

    let mut app = App::new();
    let (tx, mut rx) = mpsc::channel(8);

    spawn_fetch(&client, app.select_game(GameId { id: 7 }).unwrap(), &tx);
    let outcome = rx.recv().await.unwrap();
    assert!(app.apply(outcome));

    match app.screen() {
        Screen::DetailError(msg) => assert!(msg.contains("404")),
        other => panic!("Expected the detail error screen, got {:?}", other),
    }
}
