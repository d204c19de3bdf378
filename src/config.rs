//! Board constants, the fleet catalogue and runtime simulation settings.

use crate::game::RoundRule;
use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// Ships placed per player, in placement order.
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::Carrier,
    ShipType::Battleship,
    ShipType::Cruiser,
    ShipType::Submarine,
    ShipType::PatrolBoat,
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Upper bound on rounds: each player has at most 100 distinct shots.
pub const MAX_ROUNDS: u32 = BOARD_SIZE as u32 * BOARD_SIZE as u32;

pub const DEFAULT_PLACEMENT_ATTEMPTS: u32 = 16;

/// Runtime settings for one simulation or a batch of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Axis draws per ship before placement gives up
    pub placement_attempts: u32,
    /// How the second shooter of a round is treated
    pub round_rule: RoundRule,
    /// Random seed for reproducibility (None = OS entropy)
    pub seed: Option<u64>,
    /// Maximum games running at once in a batch
    pub concurrency: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
            round_rule: RoundRule::Strict,
            seed: None,
            concurrency: 4,
        }
    }
}

impl SimConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_round_rule(mut self, rule: RoundRule) -> Self {
        self.round_rule = rule;
        self
    }

    pub fn with_placement_attempts(mut self, attempts: u32) -> Self {
        self.placement_attempts = attempts.max(1);
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}
