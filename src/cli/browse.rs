
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::app::{spawn_fetch, App, FetchOutcome};
use crate::catalog::{CatalogClient, CatalogDetailHandling, CatalogListHandling};
use crate::config;
use crate::models::game::GameId;
use crate::render::{ScreenRendering, TextRenderer};

#[derive(Error, Debug)]
pub enum BrowseError {
    #[error("Could not read from the terminal: {0}")]
    Io(#[from] std::io::Error),
}

type Result<T> = std::result::Result<T, BrowseError>;

const HELP: &str = "Commands: next, prev, page <n>, open <id>, back, quit";

#[derive(Debug, Parser)]
pub struct RunBrowse {
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

impl RunBrowse {
    /// Primary stackplay action: browse the catalog interactively, list view
    /// and detail view, one command per line on stdin.
    pub(super) async fn run(&self) {
        let conf = config::read(self.config_file.as_ref());
        let client = Arc::new(CatalogClient::new(
            &conf.catalog.api_key,
            &conf.catalog.base_url,
            conf.catalog.page_size,
            &conf.catalog.ordering,
        ));

        println!("{}", HELP);
        browse_loop(client).await.unwrap();
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    NextPage,
    PrevPage,
    Page(u32),
    Open(GameId),
    Back,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();

    match words.next()? {
        "n" | "next" => Some(Command::NextPage),
        "p" | "prev" => Some(Command::PrevPage),
        "page" => words.next().and_then(|w| w.parse().ok()).map(Command::Page),
        "open" => words.next().and_then(|w| GameId::try_from(w).ok()).map(Command::Open),
        "b" | "back" => Some(Command::Back),
        "q" | "quit" => Some(Command::Quit),
        _ => None,
    }
}

/// The single event loop that owns the app state. Everything between its
/// await points runs to completion, so fetch outcomes and user commands
/// never interleave mid-transition; requests run as spawned tasks and come
/// back tagged through the channel.
async fn browse_loop<C>(client: Arc<C>) -> Result<()>
where
    C: CatalogListHandling + CatalogDetailHandling + Send + Sync + 'static,
{
    let renderer = TextRenderer::new();
    let mut app = App::new();
    let (tx, mut rx) = mpsc::channel::<FetchOutcome>(8);

    spawn_fetch(&client, app.start(), &tx);
    renderer.render(&app.screen());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            Some(outcome) = rx.recv() => {
                // Stale outcomes change nothing and are not worth redrawing
                if app.apply(outcome) {
                    renderer.render(&app.screen());
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let Some(command) = parse_command(&line) else {
                    println!("{}", HELP);
                    continue;
                };

                let request = match command {
                    Command::NextPage => app.next_page(),
                    Command::PrevPage => app.prev_page(),
                    Command::Page(n) => app.set_page(n),
                    Command::Open(id) => app.select_game(id),
                    Command::Back => {
                        app.clear_selection();
                        None
                    }
                    Command::Quit => break,
                };

                if let Some(request) = request {
                    spawn_fetch(&client, request, &tx);
                }
                renderer.render(&app.screen());
            }
        }
    }

    Ok(())
}
