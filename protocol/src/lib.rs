//! Request and response bodies exchanged with a game service built on `sweeper-core`.
//!
//! Only the shapes live here; routing, storage and authentication are up to the service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sweeper_core::{
    CellCount, Coord, Coord2, Game, GameConfig, GameError, GameStatus, VisibleGrid,
};

/// Identifier the caller assigned to a stored game.
pub type GameId = u64;

/// Body of a new-game request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub rows: Coord,
    pub columns: Coord,
    pub mines: CellCount,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameConfig::default().into()
    }
}

impl From<GameSettings> for GameConfig {
    fn from(settings: GameSettings) -> Self {
        GameConfig::new_unchecked(settings.rows, settings.columns, settings.mines)
    }
}

impl From<GameConfig> for GameSettings {
    fn from(config: GameConfig) -> Self {
        Self {
            rows: config.rows,
            columns: config.columns,
            mines: config.mines,
        }
    }
}

/// Body of a reveal or flag request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellAction {
    pub row: Coord,
    pub column: Coord,
}

impl CellAction {
    pub const fn coords(self) -> Coord2 {
        (self.row, self.column)
    }
}

/// Player-facing state of one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameInfo {
    pub id: GameId,
    pub rows: Coord,
    pub columns: Coord,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub mines_left: CellCount,
    pub status: GameStatus,
    pub board: VisibleGrid,
}

impl GameInfo {
    pub fn new(id: GameId, game: &Game) -> Self {
        Self {
            id,
            rows: game.rows(),
            columns: game.columns(),
            start_time: game.start_time(),
            end_time: game.end_time(),
            mines_left: game.mines_left(),
            status: game.status(),
            board: game.project(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: GameId,
    pub status: GameStatus,
}

impl GameSummary {
    pub fn new(id: GameId, game: &Game) -> Self {
        Self {
            id,
            status: game.status(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameList {
    pub games: Vec<GameSummary>,
}

impl FromIterator<GameSummary> for GameList {
    fn from_iter<I: IntoIterator<Item = GameSummary>>(iter: I) -> Self {
        Self {
            games: iter.into_iter().collect(),
        }
    }
}

/// Error body returned for rejected settings or moves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl From<GameError> for ErrorMessage {
    fn from(err: GameError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}
