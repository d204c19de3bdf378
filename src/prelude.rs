//! Commonly used types for ease of import.

pub use crate::{
    analyze, AbortHandle, Board, Coordinate, EngineError, Fleet, FleetPlacementEngine, GameId,
    GameReport, GameStatus, Outcome, PlayerId, RoundRule, SimConfig, Simulation, TargetingEngine,
    TurnEngine,
};
