use std::path::PathBuf;

use clap::Parser;

use crate::app::Screen;
use crate::catalog::{CatalogClient, CatalogListHandling};
use crate::config;
use crate::render::{ScreenRendering, TextRenderer};

/// One-shot page print, for piping or a quick look without the interactive
/// loop.
#[derive(Debug, Parser)]
pub struct RunGames {
    #[arg(short, long, default_value_t = 1)]
    page: u32,
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

impl RunGames {
    pub(super) async fn run(&self) {
        let conf = config::read(self.config_file.as_ref());
        let client = CatalogClient::new(
            &conf.catalog.api_key,
            &conf.catalog.base_url,
            conf.catalog.page_size,
            &conf.catalog.ordering,
        );
        let renderer = TextRenderer::new();

        let page = self.page.max(1);
        match client.get_games_page(page).await {
            Ok(games) => renderer.render(&Screen::List { page: page, games: &games }),
            Err(e) => renderer.render(&Screen::ListError(&e.to_string())),
        }
    }
}
