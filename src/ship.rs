//! Ship types, placed ships and fleets.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Axis, Coordinate};
use crate::common::{EngineError, ShotOutcome};
use crate::config::FLEET;
use crate::coord_set::CoordSet;
use crate::game::PlayerId;

/// Type of ship; each fixes its own length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipType {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    PatrolBoat,
}

impl ShipType {
    /// Number of cells the ship occupies.
    pub const fn size(&self) -> usize {
        match self {
            ShipType::Carrier => 5,
            ShipType::Battleship => 4,
            ShipType::Cruiser => 3,
            ShipType::Submarine => 3,
            ShipType::PatrolBoat => 2,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            ShipType::Carrier => "Carrier",
            ShipType::Battleship => "Battleship",
            ShipType::Cruiser => "Cruiser",
            ShipType::Submarine => "Submarine",
            ShipType::PatrolBoat => "Patrol Boat",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShipId(pub u32);

/// One cell of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipComponent {
    coordinate: Coordinate,
    destroyed: bool,
}

impl ShipComponent {
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

/// A ship placed on a player's board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    owner: PlayerId,
    ship_type: ShipType,
    components: Vec<ShipComponent>,
}

impl Ship {
    /// Build a ship from its cells, which must be collinear and consecutive
    /// and number exactly `ship_type.size()`. They may be given in any order;
    /// components are stored from the lowest position upwards.
    pub fn new(
        id: ShipId,
        owner: PlayerId,
        ship_type: ShipType,
        mut coordinates: Vec<Coordinate>,
    ) -> Result<Self, EngineError> {
        let invalid = |reason| EngineError::InvalidShip {
            ship: ship_type,
            reason,
        };
        if coordinates.len() != ship_type.size() {
            return Err(invalid("wrong number of cells"));
        }
        let first = coordinates[0];
        let axis = if coordinates.iter().all(|c| c.row() == first.row()) {
            Axis::Horizontal
        } else if coordinates.iter().all(|c| c.column() == first.column()) {
            Axis::Vertical
        } else {
            return Err(invalid("cells are not on one row or column"));
        };
        coordinates.sort_by_key(|c| c.position(axis));
        let consecutive = coordinates
            .windows(2)
            .all(|pair| pair[1].position(axis) == pair[0].position(axis) + 1);
        if !consecutive {
            return Err(invalid("cells are not consecutive"));
        }

        let components = coordinates
            .into_iter()
            .map(|coordinate| ShipComponent {
                coordinate,
                destroyed: false,
            })
            .collect();
        Ok(Ship {
            id,
            owner,
            ship_type,
            components,
        })
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn components(&self) -> &[ShipComponent] {
        &self.components
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.components.iter().any(|c| c.coordinate == coord)
    }

    pub fn is_sunk(&self) -> bool {
        self.components.iter().all(|c| c.destroyed)
    }

    /// Cells not yet destroyed.
    pub fn remaining(&self) -> usize {
        self.components.iter().filter(|c| !c.destroyed).count()
    }

    /// Orientation of the ship.
    pub fn axis(&self) -> Axis {
        match self.components.as_slice() {
            [a, b, ..] if a.coordinate.column() == b.coordinate.column() => Axis::Vertical,
            _ => Axis::Horizontal,
        }
    }

    /// Mark the component at `coord` destroyed. Returns `None` when the ship does
    /// not cover `coord`; a component already destroyed stays destroyed.
    fn strike(&mut self, coord: Coordinate) -> Option<ShotOutcome> {
        let component = self.components.iter_mut().find(|c| c.coordinate == coord)?;
        let fresh = !component.destroyed;
        component.destroyed = true;
        if fresh && self.is_sunk() {
            Some(ShotOutcome::Sunk(self.ship_type))
        } else {
            Some(ShotOutcome::Hit(self.ship_type))
        }
    }
}

/// The five ships owned by one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    owner: PlayerId,
    ships: Vec<Ship>,
}

impl Fleet {
    /// Assemble a fleet. Ships must follow the catalogue order and may not
    /// share a coordinate.
    pub fn new(owner: PlayerId, ships: Vec<Ship>) -> Result<Self, EngineError> {
        let in_catalogue_order = ships.len() == FLEET.len()
            && ships.iter().zip(FLEET.iter()).all(|(s, t)| s.ship_type == *t);
        if !in_catalogue_order {
            return Err(EngineError::IncompleteFleet {
                expected: FLEET.len(),
                found: ships.len(),
            });
        }
        let mut occupied = CoordSet::new();
        for ship in &ships {
            if ship.owner != owner {
                return Err(EngineError::UnknownPlayer { player: ship.owner });
            }
            for component in &ship.components {
                if !occupied.insert(component.coordinate) {
                    return Err(EngineError::FleetOverlap {
                        coordinate: component.coordinate,
                    });
                }
            }
        }
        Ok(Fleet { owner, ships })
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Every coordinate covered by a ship.
    pub fn occupied(&self) -> CoordSet {
        self.ships
            .iter()
            .flat_map(|s| s.components.iter().map(|c| c.coordinate))
            .collect()
    }

    /// Undestroyed components across the fleet.
    pub fn remaining_cells(&self) -> usize {
        self.ships.iter().map(Ship::remaining).sum()
    }

    pub fn is_destroyed(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Resolve an incoming shot, destroying the component at `coord` if any.
    pub fn receive_fire(&mut self, coord: Coordinate) -> ShotOutcome {
        self.ships
            .iter_mut()
            .find_map(|ship| ship.strike(coord))
            .unwrap_or(ShotOutcome::Miss)
    }
}
