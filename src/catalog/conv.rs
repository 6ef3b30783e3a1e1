
use crate::models::catalog::{CatalogGame, CatalogGameDetail, CatalogPage};
use crate::models::game::{GameDetail, GameId, GameSummary};

pub(super) fn extract_games_page(page: CatalogPage) -> Vec<GameSummary> {
    page.results.into_iter().map(extract_game_summary).collect()
}

fn extract_game_summary(game: CatalogGame) -> GameSummary {
    GameSummary {
        id: GameId { id: game.id },
        name: game.name,
        background_image: normalize_image(game.background_image),
        rating: game.rating,
    }
}

pub(super) fn extract_game_detail(detail: CatalogGameDetail) -> GameDetail {
    GameDetail {
        id: GameId { id: detail.id },
        name: detail.name,
        background_image: normalize_image(detail.background_image),
        description: detail.description,
    }
}

// The catalog sometimes sends "" rather than null for a missing image
fn normalize_image(url: Option<String>) -> Option<String> {
    url.filter(|u| !u.is_empty())
}
