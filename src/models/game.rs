use std::fmt;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameId {
    pub id: u64,
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[derive(Error, Debug)]
#[error("Not a valid game id: {0}")]
pub struct ParseGameIdError(String);

impl TryFrom<&str> for GameId {
    type Error = ParseGameIdError;

    fn try_from(s: &str) -> Result<GameId, Self::Error> {
        s.trim()
            .parse::<u64>()
            .map(|id| GameId { id })
            .map_err(|_| ParseGameIdError(s.to_string()))
    }
}

/// One row of the paginated games list. A new page replaces the previous
/// collection wholesale; summaries are never merged across pages.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSummary {
    pub id: GameId,
    pub name: String,
    pub background_image: Option<String>,
    pub rating: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameDetail {
    pub id: GameId,
    pub name: String,
    pub background_image: Option<String>,
    /// Pre-formatted markup straight from the catalog, carried verbatim.
    /// The catalog is trusted to supply safe markup; nothing here sanitizes
    /// or restricts it.
    pub description: String,
}
