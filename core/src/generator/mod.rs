use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board>;
}

/// How mines are distributed over the board. Both produce a uniform random subset of positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Draw random positions and retry on occupied ones. Retries are unbounded and grow as the
    /// mine density approaches a full board.
    Rejection,
    /// Partial Fisher-Yates shuffle over the flattened positions, bounded work at any density.
    Shuffle,
}

impl Default for Placement {
    fn default() -> Self {
        Self::Rejection
    }
}

/// Validates the settings and generates a fresh board with randomly placed mines.
pub fn generate(rows: Coord, columns: Coord, mines: CellCount) -> Result<Board> {
    let config = GameConfig::new(rows, columns, mines)?;
    RandomBoardGenerator::from_entropy().generate(config)
}
