//! Hunt-and-destroy target selection.
//!
//! A player's own shot history drives everything: cells already fired at are
//! never offered again, and while some hit still has an untried neighbour the
//! choice is restricted to those neighbours.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardProvider, Coordinate};
use crate::common::EngineError;
use crate::coord_set::CoordSet;

/// One previous shot by the player choosing a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shot {
    pub coordinate: Coordinate,
    pub hit: bool,
}

impl Shot {
    pub fn new(coordinate: Coordinate, hit: bool) -> Self {
        Self { coordinate, hit }
    }
}

/// How a target was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetMode {
    /// Uniform over every untried cell.
    Seek,
    /// Uniform over untried neighbours of unresolved hits.
    Destroy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub coordinate: Coordinate,
    pub mode: TargetMode,
}

#[derive(Debug, Clone, Default)]
pub struct TargetingEngine<P = Board> {
    board: P,
}

impl TargetingEngine<Board> {
    pub fn new() -> Self {
        Self { board: Board }
    }
}

impl<P: BoardProvider> TargetingEngine<P> {
    pub fn with_board(board: P) -> Self {
        Self { board }
    }

    /// Cells not yet fired at.
    pub fn candidates(&self, history: &[Shot]) -> CoordSet {
        let fired: CoordSet = history.iter().map(|s| s.coordinate).collect();
        self.board.all_coordinates() - fired
    }

    /// Pick the next coordinate to fire at.
    pub fn next_target<R: Rng + ?Sized>(
        &self,
        history: &[Shot],
        rng: &mut R,
    ) -> Result<Coordinate, EngineError> {
        self.select(history, rng).map(|s| s.coordinate)
    }

    /// Like [`next_target`](Self::next_target) but also reports the mode used.
    pub fn select<R: Rng + ?Sized>(
        &self,
        history: &[Shot],
        rng: &mut R,
    ) -> Result<Selection, EngineError> {
        let candidates = self.candidates(history);
        if candidates.is_empty() {
            return Err(EngineError::NoAvailableCoordinates);
        }
        let focus = destroy_candidates(history, candidates);
        let (pool, mode) = if focus.is_empty() {
            (candidates, TargetMode::Seek)
        } else {
            (focus, TargetMode::Destroy)
        };
        let pool: Vec<Coordinate> = pool.iter().collect();
        let coordinate = *pool
            .choose(rng)
            .ok_or(EngineError::NoAvailableCoordinates)?;
        Ok(Selection { coordinate, mode })
    }
}

/// Hits that still have at least one neighbour among `candidates`.
pub fn open_hits(history: &[Shot], candidates: CoordSet) -> CoordSet {
    history
        .iter()
        .filter(|s| s.hit)
        .map(|s| s.coordinate)
        .filter(|c| Board::neighbors(*c).any(|n| candidates.contains(n)))
        .collect()
}

/// Union of the untried neighbours of every open hit.
pub fn destroy_candidates(history: &[Shot], candidates: CoordSet) -> CoordSet {
    open_hits(history, candidates)
        .iter()
        .flat_map(Board::neighbors)
        .filter(|n| candidates.contains(*n))
        .collect()
}
