use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular grid of cells, indexed by `(row, column)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pub(crate) cells: Array2<Cell>,
}

impl Board {
    /// A board of the given size with every cell `Covered` and no mines.
    pub(crate) fn empty((rows, columns): Coord2) -> Self {
        Self {
            cells: Array2::default([rows.max(0) as usize, columns.max(0) as usize]),
        }
    }

    /// Builds a board with mines at exactly the given positions and fills in adjacency counts.
    ///
    /// Duplicate positions are placed once. The resulting settings must satisfy the same rules as
    /// [`GameConfig::new`].
    pub fn from_mine_coords((rows, columns): Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if rows <= 0 || columns <= 0 {
            return Err(SettingsError::NonPositive.into());
        }
        if mult(rows, columns) > MAX_CELLS {
            return Err(SettingsError::TooLarge.into());
        }

        let mut board = Self::empty((rows, columns));
        for &coords in mine_coords {
            if !in_bounds(coords, board.size()) {
                return Err(SettingsError::MineOutOfBounds(coords.0, coords.1).into());
            }
            board.place_mine(coords);
        }
        GameConfig::new(rows, columns, board.mine_count())?;

        board.compute_counts();
        Ok(board)
    }

    pub fn size(&self) -> Coord2 {
        (self.rows(), self.columns())
    }

    pub fn rows(&self) -> Coord {
        Coord::try_from(self.cells.nrows()).unwrap_or(Coord::MAX)
    }

    pub fn columns(&self) -> Coord {
        Coord::try_from(self.cells.ncols()).unwrap_or(Coord::MAX)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.rows(), self.columns())
    }

    pub fn mine_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_mine()).count() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    pub fn get(&self, coords: Coord2) -> Option<Cell> {
        in_bounds(coords, self.size()).then(|| self.cells[coords.to_nd_index()])
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size()) {
            Ok(coords)
        } else {
            Err(ClearError::OutOfBounds {
                row: coords.0,
                column: coords.1,
            }
            .into())
        }
    }

    /// Hidden values in row-major order, mines as [`MINE`].
    pub fn values(&self) -> Array2<i8> {
        self.cells.map(|cell| cell.value())
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Whether every non-mine cell has been uncovered. Mines may be in any other state.
    pub fn is_cleared(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.is_mine() || cell.status() == CellStatus::Uncovered)
    }

    /// Places a mine at `coords`, returns `false` when one is already there.
    pub(crate) fn place_mine(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_mine() {
            false
        } else {
            cell.set_value(MINE);
            true
        }
    }

    /// Sets every non-mine cell to the number of mines among its 8 neighbors.
    pub(crate) fn compute_counts(&mut self) {
        let (rows, columns) = self.size();
        for row in 0..rows {
            for column in 0..columns {
                let coords = (row, column);
                if self[coords].is_mine() {
                    continue;
                }
                let count = self
                    .iter_neighbors(coords)
                    .filter(|&pos| self[pos].is_mine())
                    .count();
                self.cells[coords.to_nd_index()].set_value(count as i8);
            }
        }
    }

    pub(crate) fn set_status(&mut self, coords: Coord2, status: CellStatus) {
        self.cells[coords.to_nd_index()].set_status(status);
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, arr2};

    #[test]
    fn counts_match_known_layout() {
        let board = Board::from_mine_coords((5, 5), &[(0, 0), (1, 0), (2, 0), (1, 2)]).unwrap();

        let expected: Array2<i8> = arr2(&[
            [-1, 3, 1, 1, 0],
            [-1, 4, -1, 1, 0],
            [-1, 3, 1, 1, 0],
            [1, 1, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ]);
        assert_eq!(board.values(), expected);
        assert_eq!(board.mine_count(), 4);
        assert!(
            board
                .cells
                .iter()
                .all(|cell| cell.status() == CellStatus::Covered)
        );
    }

    #[test]
    fn counts_do_not_wrap_around_edges() {
        let board = Board::from_mine_coords((3, 3), &[(0, 2)]).unwrap();

        assert_eq!(board[(0, 0)].value(), 0);
        assert_eq!(board[(2, 0)].value(), 0);
        assert_eq!(board[(1, 1)].value(), 1);
        assert_eq!(board[(1, 2)].value(), 1);
    }

    #[test]
    fn duplicate_mines_are_placed_once() {
        let board = Board::from_mine_coords((2, 2), &[(0, 0), (0, 0)]).unwrap();

        assert_eq!(board.mine_count(), 1);
        assert_eq!(board.safe_cell_count(), 3);
    }

    #[test]
    fn from_mine_coords_rejects_bad_layouts() {
        assert_eq!(
            Board::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidSettings(SettingsError::MineOutOfBounds(2, 0)))
        );
        assert_eq!(
            Board::from_mine_coords((1, 2), &[(0, 0), (0, 1)]),
            Err(GameError::InvalidSettings(SettingsError::TooManyMines))
        );
        assert_eq!(
            Board::from_mine_coords((0, 2), &[]),
            Err(GameError::InvalidSettings(SettingsError::NonPositive))
        );
        assert_eq!(
            Board::from_mine_coords((2, 2), &[]),
            Err(GameError::InvalidSettings(SettingsError::NonPositive))
        );
        assert_eq!(
            Board::from_mine_coords((1 << 20, 1 << 20), &[(0, 0)]),
            Err(GameError::InvalidSettings(SettingsError::TooLarge))
        );
    }

    #[test]
    fn get_returns_none_out_of_bounds() {
        let board = Board::from_mine_coords((2, 3), &[(0, 0)]).unwrap();

        assert!(board.get((1, 2)).is_some());
        assert!(board.get((2, 0)).is_none());
        assert!(board.get((0, -1)).is_none());
    }

    #[test]
    fn validate_coords_reports_position() {
        let board = Board::from_mine_coords((2, 2), &[(0, 0)]).unwrap();

        assert_eq!(board.validate_coords((1, 1)), Ok((1, 1)));
        assert_eq!(
            board.validate_coords((-1, 1)),
            Err(GameError::InvalidClear(ClearError::OutOfBounds {
                row: -1,
                column: 1
            }))
        );
    }
}
