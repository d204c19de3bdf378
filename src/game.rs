//! Games, players, turns and the round-by-round turn engine.

use core::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::Coordinate;
use crate::common::{EngineError, ShotOutcome};
use crate::ship::Fleet;
use crate::store::{MemoryTurnLog, TurnLog};
use crate::targeting::{Shot, TargetingEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

/// Groups games played as one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub game: GameId,
}

/// One shot, recorded once and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Round index, 1-based, shared by both shots of a round.
    pub sequence: u32,
    pub shooter: PlayerId,
    pub target: PlayerId,
    pub coordinate: Coordinate,
    pub hit: bool,
}

impl Turn {
    pub fn shot(&self) -> Shot {
        Shot::new(self.coordinate, self.hit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Concluded,
}

/// Whether the second shooter of a round still fires after losing its fleet
/// earlier in that same round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundRule {
    /// A shooter with no undestroyed component is skipped.
    #[default]
    Strict,
    /// A shooter alive at the start of the round fires its shot regardless.
    ReturnFire,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: GameId,
    created_at: DateTime<Utc>,
    concluded: bool,
    series: Option<SeriesId>,
    players: Vec<Player>,
}

impl Game {
    pub fn new(id: GameId, series: Option<SeriesId>) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            concluded: false,
            series,
            players: Vec::with_capacity(2),
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn series(&self) -> Option<SeriesId> {
        self.series
    }

    pub fn is_concluded(&self) -> bool {
        self.concluded
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Register the next player; a game holds exactly two.
    pub fn add_player(&mut self) -> Result<Player, EngineError> {
        if self.players.len() >= 2 {
            return Err(EngineError::TooManyPlayers { game: self.id });
        }
        let player = Player {
            id: PlayerId(self.players.len() as u32 + 1),
            game: self.id,
        };
        self.players.push(player);
        Ok(player)
    }

    fn conclude(&mut self) {
        self.concluded = true;
    }
}

/// Cloneable flag a caller flips to stop a running game between rounds.
#[derive(Debug, Clone, Default)]
pub struct AbortHandle {
    flag: Arc<AtomicBool>,
}

impl AbortHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abort(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_aborted(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Drives alternating fire between two fleets until one is gone.
pub struct TurnEngine<L = MemoryTurnLog> {
    game: Game,
    players: [PlayerId; 2],
    fleets: [Fleet; 2],
    targeting: TargetingEngine,
    log: L,
    rule: RoundRule,
    round: u32,
    status: GameStatus,
}

impl TurnEngine<MemoryTurnLog> {
    pub fn new(game: Game, first: Fleet, second: Fleet) -> Result<Self, EngineError> {
        Self::with_log(game, first, second, MemoryTurnLog::new())
    }
}

impl<L: TurnLog> TurnEngine<L> {
    /// `first` fires first every round. The fleets must belong to the game's
    /// two players, in seat order.
    pub fn with_log(game: Game, first: Fleet, second: Fleet, log: L) -> Result<Self, EngineError> {
        let [a, b] = game.players() else {
            return Err(EngineError::UnknownPlayer {
                player: first.owner(),
            });
        };
        let players = [a.id, b.id];
        for (fleet, expected) in [&first, &second].into_iter().zip(players) {
            if fleet.owner() != expected {
                return Err(EngineError::UnknownPlayer { player: fleet.owner() });
            }
        }
        Ok(Self {
            game,
            players,
            fleets: [first, second],
            targeting: TargetingEngine::new(),
            log,
            rule: RoundRule::default(),
            round: 0,
            status: GameStatus::InProgress,
        })
    }

    pub fn with_round_rule(mut self, rule: RoundRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Rounds played so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn players(&self) -> [PlayerId; 2] {
        self.players
    }

    pub fn fleets(&self) -> &[Fleet; 2] {
        &self.fleets
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Play one round: each seat fires once, in order, if allowed to.
    pub fn play_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<GameStatus, EngineError> {
        if self.status == GameStatus::Concluded {
            return Ok(self.status);
        }
        self.round += 1;
        let alive_at_start = [!self.fleets[0].is_destroyed(), !self.fleets[1].is_destroyed()];

        for shooter in 0..2 {
            let target = 1 - shooter;
            let may_fire = match self.rule {
                RoundRule::Strict => !self.fleets[shooter].is_destroyed(),
                RoundRule::ReturnFire => alive_at_start[shooter],
            };
            if !may_fire {
                log::debug!(
                    "round {}: {} has no ships left, shot skipped",
                    self.round,
                    self.players[shooter]
                );
                continue;
            }

            let history: Vec<Shot> = self
                .log
                .history_for(self.players[shooter])
                .iter()
                .map(Turn::shot)
                .collect();
            let selection = self.targeting.select(&history, rng)?;
            let outcome = self.fleets[target].receive_fire(selection.coordinate);
            log::debug!(
                "round {}: {} fires at {} ({:?}) -> {:?}",
                self.round,
                self.players[shooter],
                selection.coordinate,
                selection.mode,
                outcome
            );
            if let ShotOutcome::Sunk(ship) = outcome {
                log::debug!("{} sank the {} of {}", self.players[shooter], ship, self.players[target]);
            }
            self.log.append(Turn {
                sequence: self.round,
                shooter: self.players[shooter],
                target: self.players[target],
                coordinate: selection.coordinate,
                hit: outcome.is_hit(),
            });
        }

        if self.fleets.iter().any(Fleet::is_destroyed) {
            self.status = GameStatus::Concluded;
            self.game.conclude();
            log::info!("game {} concluded after {} rounds", self.game.id(), self.round);
        }
        Ok(self.status)
    }

    /// Play rounds until the game concludes, checking `abort` before each one.
    pub fn run<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        abort: &AbortHandle,
    ) -> Result<GameStatus, EngineError> {
        while self.status == GameStatus::InProgress {
            if abort.is_aborted() {
                log::warn!("game {} aborted before round {}", self.game.id(), self.round + 1);
                return Err(EngineError::Aborted {
                    round: self.round + 1,
                });
            }
            self.play_round(rng)?;
        }
        Ok(self.status)
    }

    /// Take apart a finished engine.
    pub fn into_parts(self) -> (Game, [Fleet; 2], L) {
        (self.game, self.fleets, self.log)
    }
}
