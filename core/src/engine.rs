use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::*;

/// Valid transitions:
/// - Started -> Won
/// - Started -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Moves are accepted
    Started,
    /// Every safe cell was uncovered
    Won,
    /// A mine was uncovered
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Started
    }
}

/// A single game from generation to its terminal status.
///
/// The caller owns the game and passes it by exclusive reference into each action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    mines_left: CellCount,
    status: GameStatus,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
}

impl Game {
    pub fn from_board(board: Board) -> Self {
        let mines_left = board.mine_count();
        Self {
            board,
            mines_left,
            status: Default::default(),
            start_time: None,
            end_time: None,
        }
    }

    /// Generates a random board for `config` and starts a game on it.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::start_with(RandomBoardGenerator::from_entropy(), config)
    }

    pub fn start_with(generator: impl BoardGenerator, config: GameConfig) -> Result<Self> {
        let board = generator.generate(config)?;
        Ok(Self::from_board(board))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rows(&self) -> Coord {
        self.board.rows()
    }

    pub fn columns(&self) -> Coord {
        self.board.columns()
    }

    /// Mine count the game was generated with. Flags do not change it.
    pub fn mines_left(&self) -> CellCount {
        self.mines_left
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.board.get(coords)
    }

    /// How many seconds have passed since the first reveal, 0 if there was none
    pub fn elapsed_secs(&self) -> u32 {
        if let Some(start_time) = self.start_time {
            (self.end_time.unwrap_or_else(Utc::now) - start_time)
                .num_seconds()
                .clamp(0, u32::MAX.into()) as u32
        } else {
            0
        }
    }

    /// Masked view of the board for the player.
    pub fn project(&self) -> VisibleGrid {
        self.board.project()
    }

    /// Reveal a cell, flood-filling through zero cells.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        self.reveal_at(coords, Utc::now())
    }

    /// Same as [`Game::reveal`] with an explicit clock reading for the timestamps.
    pub fn reveal_at(&mut self, coords: Coord2, now: DateTime<Utc>) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.check_move(coords)?;
        self.mark_started(now);

        let cell = self.board[coords];
        let outcome = match (cell.status(), cell.is_mine()) {
            (CellStatus::Uncovered | CellStatus::Flagged, _) => {
                log::trace!("Ignoring reveal at {:?}, status: {:?}", coords, cell.status());
                NoChange
            }
            (_, true) => {
                self.board.set_status(coords, CellStatus::Uncovered);
                log::debug!("Mine revealed at {:?}", coords);
                self.mark_ended(GameStatus::Lost, now);
                return Ok(HitMine);
            }
            (_, false) => {
                let opened = self.flood_reveal(coords);
                log::debug!("Revealed {} cells from {:?}", opened, coords);
                Revealed
            }
        };

        if self.board.is_cleared() {
            self.mark_ended(GameStatus::Won, now);
            Ok(Won)
        } else {
            Ok(outcome)
        }
    }

    /// Advance the marker of a covered cell: `Covered -> Flagged -> Questioned -> Covered`
    pub fn cycle(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.check_move(coords)?;

        Ok(match self.board[coords].status().next_mark() {
            Some(next) => {
                self.board.set_status(coords, next);
                MarkOutcome::Changed(next)
            }
            None => MarkOutcome::NoChange,
        })
    }

    /// Uncovers `start` and every cell reachable from it through zero-valued cells.
    ///
    /// Uncovered, flagged and mine cells are never opened, which also bounds the walk to one visit
    /// per cell.
    fn flood_reveal(&mut self, start: Coord2) -> CellCount {
        let mut opened = 0;
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            let cell = self.board[coords];
            if cell.is_mine() || !cell.status().is_revealable() {
                continue;
            }

            self.board.set_status(coords, CellStatus::Uncovered);
            opened += 1;
            log::trace!("Opened cell at {:?}, value: {}", coords, cell.value());

            if cell.value() == 0 {
                to_visit.extend(
                    self.board
                        .iter_neighbors(coords)
                        .filter(|&pos| self.board[pos].status().is_revealable()),
                );
            }
        }

        opened
    }

    fn check_move(&self, coords: Coord2) -> Result<Coord2> {
        if self.status.is_finished() {
            return Err(ClearError::GameOver.into());
        }
        self.board.validate_coords(coords)
    }

    /// Records the first move
    fn mark_started(&mut self, now: DateTime<Utc>) {
        if self.start_time.is_none() {
            log::debug!("started at {}", now);
            self.start_time = Some(now);
        }
    }

    fn mark_ended(&mut self, status: GameStatus, now: DateTime<Utc>) {
        if self.status.is_finished() {
            return;
        }
        self.status = status;
        self.end_time = Some(now);
        log::debug!("{} at {}", status.as_str(), now);
    }
}
