//! Boundaries to the collaborators that persist fleets, turns and results,
//! plus in-memory implementations.

use std::collections::BTreeMap;

use crate::game::{GameId, PlayerId, Turn};
use crate::performance::GameReport;
use crate::ship::Fleet;

/// Sink for successfully placed fleets. The engine never reads them back.
pub trait FleetStore {
    fn record_fleet(&mut self, player: PlayerId, fleet: &Fleet) -> anyhow::Result<()>;
}

/// Append-only shot log of a single game.
pub trait TurnLog {
    fn append(&mut self, turn: Turn);

    /// Shots fired by `player`, in the order they were appended.
    fn history_for(&self, player: PlayerId) -> Vec<Turn>;
}

/// Terminal sink, invoked once per concluded game.
pub trait ResultSink {
    fn record_result(&mut self, game: GameId, report: &GameReport) -> anyhow::Result<()>;

    /// Receives the full turn log of a concluded game before its result.
    fn record_turns(&mut self, _game: GameId, _turns: &[Turn]) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTurnLog {
    turns: Vec<Turn>,
}

impl MemoryTurnLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn into_turns(self) -> Vec<Turn> {
        self.turns
    }
}

impl TurnLog for MemoryTurnLog {
    fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    fn history_for(&self, player: PlayerId) -> Vec<Turn> {
        self.turns
            .iter()
            .filter(|t| t.shooter == player)
            .copied()
            .collect()
    }
}

/// Keeps everything it is given, keyed by game.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub fleets: Vec<(PlayerId, Fleet)>,
    pub turns: BTreeMap<GameId, Vec<Turn>>,
    pub results: BTreeMap<GameId, GameReport>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FleetStore for MemoryStore {
    fn record_fleet(&mut self, player: PlayerId, fleet: &Fleet) -> anyhow::Result<()> {
        self.fleets.push((player, fleet.clone()));
        Ok(())
    }
}

impl ResultSink for MemoryStore {
    fn record_result(&mut self, game: GameId, report: &GameReport) -> anyhow::Result<()> {
        if self.results.insert(game, report.clone()).is_some() {
            anyhow::bail!("result for game {} recorded twice", game);
        }
        Ok(())
    }

    fn record_turns(&mut self, game: GameId, turns: &[Turn]) -> anyhow::Result<()> {
        self.turns.insert(game, turns.to_vec());
        Ok(())
    }
}

/// Drops everything; for callers with nothing to persist.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl FleetStore for Discard {
    fn record_fleet(&mut self, _player: PlayerId, _fleet: &Fleet) -> anyhow::Result<()> {
        Ok(())
    }
}

impl ResultSink for Discard {
    fn record_result(&mut self, _game: GameId, _report: &GameReport) -> anyhow::Result<()> {
        Ok(())
    }
}
