//! Random fleet placement.
//!
//! Ships are placed one at a time in catalogue order. For each ship an axis is
//! drawn at random, every fully free window of `size` consecutive cells along
//! that axis is enumerated, and one window is chosen uniformly. A draw that
//! yields no window is retried with a fresh axis up to the configured number of
//! attempts; exhausting them fails the whole fleet.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::board::{Axis, Board, BoardProvider, Coordinate};
use crate::common::EngineError;
use crate::config::{BOARD_SIZE, DEFAULT_PLACEMENT_ATTEMPTS, FLEET};
use crate::coord_set::CoordSet;
use crate::game::PlayerId;
use crate::ship::{Fleet, Ship, ShipId, ShipType};

/// Computes valid fleets on top of a [`BoardProvider`].
#[derive(Debug, Clone)]
pub struct FleetPlacementEngine<P = Board> {
    board: P,
    max_attempts: u32,
}

impl FleetPlacementEngine<Board> {
    pub fn new() -> Self {
        Self::with_board(Board, DEFAULT_PLACEMENT_ATTEMPTS)
    }
}

impl Default for FleetPlacementEngine<Board> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: BoardProvider> FleetPlacementEngine<P> {
    pub fn with_board(board: P, max_attempts: u32) -> Self {
        Self {
            board,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Place the full catalogue for `player`. Either every ship is placed or
    /// an error is returned and nothing is handed out.
    pub fn place_fleet<R: Rng + ?Sized>(
        &self,
        player: PlayerId,
        rng: &mut R,
    ) -> Result<Fleet, EngineError> {
        let mut occupied = CoordSet::new();
        let mut ships = Vec::with_capacity(FLEET.len());
        for (i, ship_type) in FLEET.iter().enumerate() {
            let cells = self.place_ship(*ship_type, occupied, rng)?;
            occupied |= cells.iter().collect::<CoordSet>();
            ships.push(Ship::new(ShipId(i as u32 + 1), player, *ship_type, cells)?);
        }
        let fleet = Fleet::new(player, ships)?;
        log::debug!("placed fleet for player {} over {} cells", player, occupied.len());
        Ok(fleet)
    }

    /// Choose cells for one ship given the cells already taken.
    pub fn place_ship<R: Rng + ?Sized>(
        &self,
        ship_type: ShipType,
        occupied: CoordSet,
        rng: &mut R,
    ) -> Result<Vec<Coordinate>, EngineError> {
        let available = self.board.all_coordinates() - occupied;
        for attempt in 1..=self.max_attempts {
            let axis = if rng.random() {
                Axis::Horizontal
            } else {
                Axis::Vertical
            };
            let windows = candidate_windows(ship_type.size(), axis, available);
            if let Some(window) = windows.choose(rng) {
                return Ok(window.clone());
            }
            log::debug!(
                "no free {:?} window for {} (attempt {}/{})",
                axis,
                ship_type,
                attempt,
                self.max_attempts
            );
        }
        log::warn!(
            "giving up on {} after {} attempts",
            ship_type,
            self.max_attempts
        );
        Err(EngineError::Placement {
            ship: ship_type,
            attempts: self.max_attempts,
        })
    }
}

/// True when a ship of `size` starting at `start` stays on the board along `axis`.
pub fn fits_on_board(start: Coordinate, size: usize, axis: Axis) -> bool {
    start.position(axis) as usize + size - 1 <= BOARD_SIZE as usize
}

/// Every run of `size` consecutive cells along `axis` whose cells are all in
/// `available`, ordered by starting coordinate.
pub fn candidate_windows(size: usize, axis: Axis, available: CoordSet) -> Vec<Vec<Coordinate>> {
    available
        .iter()
        .filter(|start| fits_on_board(*start, size, axis))
        .filter_map(|start| {
            let window: Vec<Coordinate> = (0..size as u8)
                .map_while(|k| start.step(axis, k))
                .collect();
            let complete = window.len() == size && window.iter().all(|c| available.contains(*c));
            complete.then_some(window)
        })
        .collect()
}
