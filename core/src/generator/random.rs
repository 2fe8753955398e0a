use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Purely random generation strategy, reproducible from its seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
    placement: Placement,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64, placement: Placement) -> Self {
        Self { seed, placement }
    }

    /// Rejection placement with a seed drawn from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::random(), Placement::default())
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        let config = config.validate()?;
        log::debug!(
            "Generating {}x{} board with {} mines, placement: {:?}, seed: {}",
            config.rows,
            config.columns,
            config.mines,
            self.placement,
            self.seed
        );

        let mut board = Board::empty(config.size());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        match self.placement {
            Placement::Rejection => place_by_rejection(&mut board, config.mines, &mut rng),
            Placement::Shuffle => place_by_shuffle(&mut board, config.mines, &mut rng),
        }
        board.compute_counts();

        // double check mine count
        let count = board.mine_count();
        if count != config.mines {
            log::warn!(
                "Generated board mine count mismatch, actual: {}, requested: {}",
                count,
                config.mines
            );
        }
        Ok(board)
    }
}

fn place_by_rejection(board: &mut Board, mines: CellCount, rng: &mut impl Rng) {
    let (rows, columns) = board.size();
    let mut placed = 0;
    let mut retries: u64 = 0;
    while placed < mines {
        let coords = (rng.random_range(0..rows), rng.random_range(0..columns));
        if board.place_mine(coords) {
            placed += 1;
        } else {
            retries += 1;
        }
    }
    log::trace!("Placed {} mines with {} rejected draws", placed, retries);
}

fn place_by_shuffle(board: &mut Board, mines: CellCount, rng: &mut impl Rng) {
    let columns = board.columns() as usize;
    let mut positions: Vec<usize> = (0..board.total_cells() as usize).collect();
    let (chosen, _) = positions.partial_shuffle(rng, mines as usize);
    for &index in chosen.iter() {
        board.place_mine(((index / columns) as Coord, (index % columns) as Coord));
    }
}
