//! Common types: engine errors and shot outcomes.

use crate::board::Coordinate;
use crate::game::{GameId, PlayerId};
use crate::ship::ShipType;

/// Result of firing at a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// No component at the coordinate.
    Miss,
    /// A component of the given ship was struck.
    Hit(ShipType),
    /// The strike destroyed the last component of the given ship.
    Sunk(ShipType),
}

impl ShotOutcome {
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Faults raised by the simulation engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Every axis draw for a ship left no free window.
    #[error("unable to place {ship} after {attempts} attempts")]
    Placement { ship: ShipType, attempts: u32 },
    /// Targeting was asked for a shot with the whole board already fired at.
    #[error("no untried coordinates left to target")]
    NoAvailableCoordinates,
    /// Performance requested for a player that never fired.
    #[error("player {player} has no recorded shots")]
    InvalidPerformance { player: PlayerId },
    #[error("game {game} already has two players")]
    TooManyPlayers { game: GameId },
    #[error("invalid {ship}: {reason}")]
    InvalidShip { ship: ShipType, reason: &'static str },
    #[error("ships overlap at {coordinate}")]
    FleetOverlap { coordinate: Coordinate },
    #[error("fleet must hold {expected} ships in catalogue order, found {found}")]
    IncompleteFleet { expected: usize, found: usize },
    #[error("player {player} does not belong to this game")]
    UnknownPlayer { player: PlayerId },
    #[error("coordinate ({column}, {row}) is outside the board")]
    OutOfBounds { column: u8, row: u8 },
    #[error("cannot parse coordinate {0:?}")]
    InvalidCoordinate(String),
    /// The caller aborted the game before the given round.
    #[error("game aborted before round {round}")]
    Aborted { round: u32 },
}
