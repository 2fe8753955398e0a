use core::ops::Index;
use ndarray::{Array2, ErrorKind, ShapeError};
use serde::{Deserialize, Serialize};

use crate::*;

/// Marker shown in place of a value the player has not uncovered yet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[serde(rename = "C")]
    Covered,
    #[serde(rename = "F")]
    Flagged,
    #[serde(rename = "?")]
    Questioned,
}

impl From<Mark> for CellStatus {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Covered => CellStatus::Covered,
            Mark::Flagged => CellStatus::Flagged,
            Mark::Questioned => CellStatus::Questioned,
        }
    }
}

/// What a player may see of a single cell.
///
/// Serializes as a bare number for uncovered cells and as the status tag otherwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VisibleCell {
    Value(i8),
    Marked(Mark),
}

impl Cell {
    /// Masked form of this cell; the hidden value only shows once uncovered.
    pub const fn visible(self) -> VisibleCell {
        match self.status() {
            CellStatus::Uncovered => VisibleCell::Value(self.value()),
            CellStatus::Covered => VisibleCell::Marked(Mark::Covered),
            CellStatus::Flagged => VisibleCell::Marked(Mark::Flagged),
            CellStatus::Questioned => VisibleCell::Marked(Mark::Questioned),
        }
    }
}

/// Player-facing projection of a board, serialized as a list of rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<VisibleCell>>", try_from = "Vec<Vec<VisibleCell>>")]
pub struct VisibleGrid {
    cells: Array2<VisibleCell>,
}

impl VisibleGrid {
    pub fn size(&self) -> Coord2 {
        let (rows, columns) = self.cells.dim();
        (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(columns).unwrap_or(Coord::MAX),
        )
    }

    pub fn get(&self, coords: Coord2) -> Option<VisibleCell> {
        in_bounds(coords, self.size()).then(|| self.cells[coords.to_nd_index()])
    }

    pub fn to_rows(&self) -> Vec<Vec<VisibleCell>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}

impl Index<Coord2> for VisibleGrid {
    type Output = VisibleCell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl From<VisibleGrid> for Vec<Vec<VisibleCell>> {
    fn from(grid: VisibleGrid) -> Self {
        grid.to_rows()
    }
}

impl TryFrom<Vec<Vec<VisibleCell>>> for VisibleGrid {
    type Error = ShapeError;

    fn try_from(rows: Vec<Vec<VisibleCell>>) -> core::result::Result<Self, Self::Error> {
        let columns = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != columns) {
            return Err(ShapeError::from_kind(ErrorKind::IncompatibleShape));
        }
        let row_count = rows.len();
        let flat: Vec<_> = rows.into_iter().flatten().collect();
        Ok(Self {
            cells: Array2::from_shape_vec((row_count, columns), flat)?,
        })
    }
}

impl Board {
    /// Masks every cell, see [`Cell::visible`]. Does not modify the board.
    pub fn project(&self) -> VisibleGrid {
        VisibleGrid {
            cells: self.cells.map(|cell| cell.visible()),
        }
    }
}
