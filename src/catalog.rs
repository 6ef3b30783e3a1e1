pub mod conv;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::models::catalog::{CatalogGameDetail, CatalogPage};
use crate::models::game::{GameDetail, GameId, GameSummary};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("An http error occurred fetching data from the catalog: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("The catalog responded with status {0}")]
    Status(u16),
    #[error("Could not parse the catalog response: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[async_trait]
pub trait CatalogListHandling {
    async fn get_games_page(&self, page: u32) -> Result<Vec<GameSummary>>;
}

#[async_trait]
pub trait CatalogDetailHandling {
    async fn get_game_detail(&self, id: GameId) -> Result<GameDetail>;
}

// The original behavior had no timeout at all; without one a hung request
// leaves its view in Loading forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct CatalogClient {
    api_key: String,
    base_url: String,
    page_size: u32,
    ordering: String,
    http: Client,
}

impl CatalogClient {
    pub fn new(api_key: &str, base_url: &str, page_size: u32, ordering: &str) -> CatalogClient {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to construct the http client");

        CatalogClient {
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
            page_size: page_size,
            ordering: ordering.to_string(),
            http: http,
        }
    }

    /// Issue a GET and hand back the body as text. The body is parsed
    /// separately so that schema breakage surfaces as Malformed rather than
    /// being folded into transport errors.
    async fn get_text(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let res = self.http
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        Ok(res.text().await?)
    }
}

#[async_trait]
impl CatalogListHandling for CatalogClient {
    async fn get_games_page(&self, page: u32) -> Result<Vec<GameSummary>> {
        debug!(page, "requesting games page");

        let body = self.get_text(
            "/games",
            &[
                ("key", self.api_key.clone()),
                ("page", page.to_string()),
                ("page_size", self.page_size.to_string()),
                ("ordering", self.ordering.clone()),
            ],
        ).await?;
        let parsed: CatalogPage = serde_json::from_str(&body)?;

        Ok(conv::extract_games_page(parsed))
    }
}

#[async_trait]
impl CatalogDetailHandling for CatalogClient {
    async fn get_game_detail(&self, id: GameId) -> Result<GameDetail> {
        debug!(%id, "requesting game detail");

        let body = self.get_text(
            &format!("/games/{}", id),
            &[("key", self.api_key.clone())],
        ).await?;
        let parsed: CatalogGameDetail = serde_json::from_str(&body)?;

        Ok(conv::extract_game_detail(parsed))
    }
}
