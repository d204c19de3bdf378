use battleship_sim::prelude::*;
use battleship_sim::{
    run_batch, simulation::game_rng, MemoryStore, ResultSink, SeriesId, TOTAL_SHIP_CELLS,
};

#[test]
fn concluded_game_reaches_every_sink() {
    let sim = Simulation::new(SimConfig::default().with_seed(17));
    let mut rng = game_rng(Some(17), 0);
    let mut fleets = MemoryStore::new();
    let mut results = MemoryStore::new();

    let done = sim
        .run_game(
            GameId(4),
            Some(SeriesId(2)),
            &mut rng,
            &AbortHandle::new(),
            &mut fleets,
            &mut results,
        )
        .unwrap();

    assert!(done.game.is_concluded());
    assert_eq!(done.game.series(), Some(SeriesId(2)));
    assert!(done.game.created_at() <= chrono::Utc::now());
    assert_eq!(fleets.fleets.len(), 2);
    assert_eq!(fleets.fleets[0].0, PlayerId(1));
    assert_eq!(fleets.fleets[1].0, PlayerId(2));
    // fleets are recorded as placed, before any damage
    for (_, fleet) in &fleets.fleets {
        assert_eq!(fleet.remaining_cells(), TOTAL_SHIP_CELLS);
    }
    assert_eq!(results.results.get(&GameId(4)), Some(&done.report));
    assert_eq!(results.turns.get(&GameId(4)), Some(&done.turns));
    assert!(matches!(done.report.outcome, Outcome::Winner(_)));
}

#[test]
fn seeded_games_replay_exactly() {
    let sim = Simulation::new(SimConfig::default());
    let a = sim.play(GameId(1), &mut game_rng(Some(99), 3)).unwrap();
    let b = sim.play(GameId(1), &mut game_rng(Some(99), 3)).unwrap();
    assert_eq!(a.turns, b.turns);
    assert_eq!(a.report, b.report);
    assert_eq!(a.fleets, b.fleets);
}

#[test]
fn aborted_game_leaves_sinks_untouched() {
    let sim = Simulation::new(SimConfig::default());
    let abort = AbortHandle::new();
    abort.abort();
    let mut store = MemoryStore::new();
    let mut results = MemoryStore::new();
    let err = sim
        .run_game(
            GameId(1),
            None,
            &mut game_rng(Some(1), 0),
            &abort,
            &mut store,
            &mut results,
        )
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<EngineError>(),
        Some(&EngineError::Aborted { round: 1 })
    );
    assert!(store.fleets.is_empty());
    assert!(results.results.is_empty());
    assert!(results.turns.is_empty());
}

#[test]
fn recording_a_result_twice_fails() {
    let sim = Simulation::new(SimConfig::default());
    let done = sim.play(GameId(1), &mut game_rng(Some(8), 0)).unwrap();
    let mut results = MemoryStore::new();
    results.record_result(GameId(1), &done.report).unwrap();
    assert!(results.record_result(GameId(1), &done.report).is_err());
}

#[test]
fn return_fire_games_still_conclude() {
    let sim = Simulation::new(SimConfig::default().with_round_rule(RoundRule::ReturnFire));
    for seed in 0..20 {
        let done = sim.play(GameId(seed + 1), &mut game_rng(Some(seed), 0)).unwrap();
        assert!(done.game.is_concluded());
        assert_ne!(done.report.outcome, Outcome::Undecided);
        let [a, b] = &done.report.players;
        assert_eq!(a.shots(), b.shots());
    }
}

#[test]
fn return_fire_can_sink_both_fleets_in_one_round() {
    let sim = Simulation::new(SimConfig::default().with_round_rule(RoundRule::ReturnFire));
    let done = sim.play(GameId(1), &mut game_rng(Some(23), 0)).unwrap();

    assert!(done.game.is_concluded());
    assert_eq!(done.report.outcome, Outcome::Draw);
    assert_eq!(done.report.winner(), None);
    assert!(done.fleets.iter().all(|f| f.is_destroyed()));
    // both last hits land in the final round
    let last = done.report.rounds;
    let closing: Vec<_> = done.turns.iter().filter(|t| t.sequence == last).collect();
    assert_eq!(closing.len(), 2);
    assert!(closing.iter().all(|t| t.hit));
}

#[test]
fn strict_games_never_draw() {
    let sim = Simulation::new(SimConfig::default());
    for seed in 0..60 {
        let done = sim.play(GameId(seed + 1), &mut game_rng(Some(seed), 0)).unwrap();
        assert!(matches!(done.report.outcome, Outcome::Winner(_)), "seed {}", seed);
        assert_eq!(done.fleets.iter().filter(|f| f.is_destroyed()).count(), 1);
    }
    // the seed that draws under return fire still has a single winner
    let done = sim.play(GameId(1), &mut game_rng(Some(23), 0)).unwrap();
    assert!(done.report.winner().is_some());
}

/// Accepts turns, refuses results.
#[derive(Default)]
struct RefusingSink {
    turns: usize,
}

impl ResultSink for RefusingSink {
    fn record_result(&mut self, game: GameId, _report: &GameReport) -> anyhow::Result<()> {
        anyhow::bail!("result store for {} is offline", game)
    }

    fn record_turns(&mut self, _game: GameId, turns: &[battleship_sim::Turn]) -> anyhow::Result<()> {
        self.turns = turns.len();
        Ok(())
    }
}

#[test]
fn result_sink_failure_is_reported_after_earlier_writes() {
    let sim = Simulation::new(SimConfig::default());
    let mut fleets = MemoryStore::new();
    let mut results = RefusingSink::default();
    let err = sim
        .run_game(
            GameId(9),
            None,
            &mut game_rng(Some(4), 0),
            &AbortHandle::new(),
            &mut fleets,
            &mut results,
        )
        .unwrap_err();
    assert!(err.to_string().contains("offline"));
    assert_eq!(fleets.fleets.len(), 2);
    assert!(results.turns > 0);
}

#[tokio::test]
async fn batch_runs_every_game_in_order() {
    let config = SimConfig::default().with_seed(7).with_concurrency(2);
    let results = run_batch(config, 6, AbortHandle::new()).await.unwrap();
    assert_eq!(results.len(), 6);

    let sim = Simulation::new(SimConfig::default());
    for (i, result) in results.into_iter().enumerate() {
        let done = result.unwrap();
        assert_eq!(done.game.id(), GameId(i as u64 + 1));
        assert_eq!(done.game.series(), Some(SeriesId(7)));
        // each game is independent and matches a standalone replay
        let replay = sim
            .play(GameId(i as u64 + 1), &mut game_rng(Some(7), i as u64))
            .unwrap();
        assert_eq!(done.turns, replay.turns);
    }
}

#[tokio::test]
async fn aborted_batch_yields_errors_only() {
    let abort = AbortHandle::new();
    abort.abort();
    let results = run_batch(SimConfig::default().with_seed(1), 3, abort)
        .await
        .unwrap();
    assert_eq!(results.len(), 3);
    for result in results {
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EngineError>(),
            Some(EngineError::Aborted { .. })
        ));
    }
}
