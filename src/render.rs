use itertools::Itertools;

use crate::app::Screen;
use crate::models::game::{GameDetail, GameSummary};

// Handles turning a derived screen into user-facing output
pub trait ScreenRendering {
    fn render(&self, screen: &Screen<'_>);
}

pub struct TextRenderer {}

impl TextRenderer {
    pub fn new() -> TextRenderer {
        TextRenderer {}
    }
}

impl ScreenRendering for TextRenderer {
    fn render(&self, screen: &Screen<'_>) {
        match screen {
            Screen::ListLoading => println!("Loading games..."),
            Screen::ListError(msg) => println!("Could not load games: {}", msg),
            Screen::List { page, games } => {
                println!("Most popular games (page {})", page);
                println!("{}", games.iter().map(format_card).join("\n"));
            }
            Screen::DetailLoading => println!("Loading details..."),
            Screen::DetailError(msg) => println!("Could not load details: {}", msg),
            Screen::Detail(detail) => println!("{}", format_detail(detail)),
        }
    }
}

fn format_card(game: &GameSummary) -> String {
    format!("  [{}] {} (rating: {} / 5)", game.id, game.name, game.rating)
}

fn format_detail(detail: &GameDetail) -> String {
    let mut lines = vec![detail.name.clone()];

    if let Some(image) = &detail.background_image {
        lines.push(format!("Image: {}", image));
    }

    // Description markup comes straight from the catalog and is shown as-is
    lines.push(String::new());
    lines.push(detail.description.clone());

    lines.join("\n")
}
