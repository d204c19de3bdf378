//! Game runner: placement, turn loop, analysis and hand-off to the sinks.
//!
//! A game is a self-contained sequential computation. Collaborators only hear
//! about it once it has concluded; an aborted or failed game leaves no trace in
//! any store.

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::board::Board;
use crate::config::SimConfig;
use crate::game::{AbortHandle, Game, GameId, SeriesId, Turn, TurnEngine};
use crate::performance::{analyze, GameReport};
use crate::placement::FleetPlacementEngine;
use crate::ship::Fleet;
use crate::store::{Discard, FleetStore, ResultSink};

/// Everything produced by one concluded game.
#[derive(Debug, Clone)]
pub struct CompletedGame {
    pub game: Game,
    /// Fleets as they stood at the end of play.
    pub fleets: [Fleet; 2],
    pub turns: Vec<Turn>,
    pub report: GameReport,
}

pub struct Simulation {
    config: SimConfig,
    placement: FleetPlacementEngine,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        let placement = FleetPlacementEngine::with_board(Board, config.placement_attempts);
        Self { config, placement }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Play one game to conclusion and report it to `fleet_store` and `results`.
    ///
    /// Sinks are called only after the game concluded, in this order: both
    /// fleets, the turn log, the result. The first sink error is returned and
    /// later sinks are not called; writes that already succeeded are not rolled
    /// back, so a collaborator needing all-or-nothing storage must stage fleets
    /// and turns until `record_result` arrives.
    pub fn run_game<R: Rng + ?Sized>(
        &self,
        id: GameId,
        series: Option<SeriesId>,
        rng: &mut R,
        abort: &AbortHandle,
        fleet_store: &mut dyn FleetStore,
        results: &mut dyn ResultSink,
    ) -> anyhow::Result<CompletedGame> {
        let mut game = Game::new(id, series);
        let first = game.add_player()?;
        let second = game.add_player()?;

        let placed = [
            self.placement.place_fleet(first.id, rng)?,
            self.placement.place_fleet(second.id, rng)?,
        ];
        let [fleet_a, fleet_b] = placed.clone();
        let mut engine =
            TurnEngine::new(game, fleet_a, fleet_b)?.with_round_rule(self.config.round_rule);
        engine.run(rng, abort)?;

        let players = engine.players();
        let (game, fleets, log) = engine.into_parts();
        let turns = log.into_turns();
        let report = analyze(&turns, players)?;

        for fleet in &placed {
            fleet_store.record_fleet(fleet.owner(), fleet)?;
        }
        results.record_turns(game.id(), &turns)?;
        results.record_result(game.id(), &report)?;

        log::info!(
            "game {} finished in {} rounds: {:?}",
            game.id(),
            report.rounds,
            report.outcome
        );
        Ok(CompletedGame {
            game,
            fleets,
            turns,
            report,
        })
    }

    /// Play one game without persistence or cancellation.
    pub fn play<R: Rng + ?Sized>(&self, id: GameId, rng: &mut R) -> anyhow::Result<CompletedGame> {
        self.run_game(id, None, rng, &AbortHandle::new(), &mut Discard, &mut Discard)
    }
}

/// Generator for game `index`: seeded from `seed + index` when a seed is set,
/// otherwise from OS entropy.
pub fn game_rng(seed: Option<u64>, index: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(index)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

/// Run `games` independent games on the blocking pool, at most
/// `config.concurrency` at a time. Results come back in game order; a failed
/// or aborted game yields its error in place.
pub async fn run_batch(
    config: SimConfig,
    games: usize,
    abort: AbortHandle,
) -> anyhow::Result<Vec<anyhow::Result<CompletedGame>>> {
    let series = SeriesId(config.seed.unwrap_or_else(|| rand::rng().random()));
    let semaphore = Arc::new(Semaphore::new(config.concurrency.max(1)));
    let sim = Arc::new(Simulation::new(config));
    let mut set = JoinSet::new();

    log::info!("starting series {} with {} games", series.0, games);
    for index in 0..games {
        let permit = semaphore.clone().acquire_owned().await?;
        let sim = sim.clone();
        let abort = abort.clone();
        set.spawn_blocking(move || {
            let _permit = permit;
            let mut rng = game_rng(sim.config().seed, index as u64);
            let result = sim.run_game(
                GameId(index as u64 + 1),
                Some(series),
                &mut rng,
                &abort,
                &mut Discard,
                &mut Discard,
            );
            (index, result)
        });
    }

    let mut slots: Vec<Option<anyhow::Result<CompletedGame>>> = (0..games).map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        let (index, result) = joined?;
        if let Err(e) = &result {
            log::warn!("game {} failed: {}", index + 1, e);
        }
        slots[index] = Some(result);
    }
    Ok(slots.into_iter().flatten().collect())
}
