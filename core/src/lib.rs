//! Minesweeper board engine.
//!
//! Generates minefields, applies reveal and flag actions to a [`Game`] and projects the masked
//! view a player is allowed to see. Persistence, transport and access control are left to the
//! caller, which owns each [`Game`] and hands it in by `&mut` for every action.

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;
pub use view::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod types;
mod view;

/// Largest board accepted, in cells. Boards are allocated up front, so this bounds memory use.
pub const MAX_CELLS: CellCount = 1 << 24;

/// Board settings: `rows x columns` cells with `mines` of them mined.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub columns: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, columns: Coord, mines: CellCount) -> Self {
        Self {
            rows,
            columns,
            mines,
        }
    }

    pub fn new(rows: Coord, columns: Coord, mines: CellCount) -> Result<Self> {
        Self::new_unchecked(rows, columns, mines).validate()
    }

    /// Checks every value is positive and at least one cell stays free of mines.
    pub fn validate(self) -> Result<Self> {
        if self.rows <= 0 || self.columns <= 0 || self.mines <= 0 {
            return Err(SettingsError::NonPositive.into());
        }
        if self.total_cells() > MAX_CELLS {
            return Err(SettingsError::TooLarge.into());
        }
        if self.mines >= self.total_cells() {
            return Err(SettingsError::TooManyMines.into());
        }
        Ok(self)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 16, 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked(16, 30, 99)
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.columns)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(10, 10, 5)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    /// The cell now carries this status
    Changed(CellStatus),
}

/// Outcome of revealing a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}
