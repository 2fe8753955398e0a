use thiserror::Error;

use crate::Coord;

/// Why a set of board settings was refused.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("all values must be greater than zero")]
    NonPositive,
    #[error("mine count must be less than board size")]
    TooManyMines,
    #[error("board must have at most {} cells", crate::MAX_CELLS)]
    TooLarge,
    #[error("mine position ({0}, {1}) is outside the board")]
    MineOutOfBounds(Coord, Coord),
}

/// Why a reveal or flag action was refused.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClearError {
    #[error("game already ended, no new moves are accepted")]
    GameOver,
    #[error("cell ({row}, {column}) is outside the board")]
    OutOfBounds { row: Coord, column: Coord },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid game settings: {0}")]
    InvalidSettings(#[from] SettingsError),
    #[error("invalid clear: {0}")]
    InvalidClear(#[from] ClearError),
}

pub type Result<T> = std::result::Result<T, GameError>;
