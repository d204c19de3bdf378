//! Post-game statistics and results.

use serde::{Deserialize, Serialize};

use crate::common::EngineError;
use crate::config::TOTAL_SHIP_CELLS;
use crate::coord_set::CoordSet;
use crate::game::{PlayerId, Turn};

/// Shooting figures of one player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerPerformance {
    pub player: PlayerId,
    pub hits: u32,
    pub misses: u32,
    /// `hits / (hits + misses)`
    pub hit_rate: f64,
}

impl PlayerPerformance {
    pub fn shots(&self) -> u32 {
        self.hits + self.misses
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Exactly one fleet survived.
    Winner(PlayerId),
    /// Both fleets were destroyed.
    Draw,
    /// Neither fleet was destroyed.
    Undecided,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameReport {
    pub players: [PlayerPerformance; 2],
    pub outcome: Outcome,
    /// Highest round index present in the log.
    pub rounds: u32,
}

impl GameReport {
    pub fn winner(&self) -> Option<PlayerId> {
        match self.outcome {
            Outcome::Winner(p) => Some(p),
            Outcome::Draw | Outcome::Undecided => None,
        }
    }

    pub fn performance_of(&self, player: PlayerId) -> Option<&PlayerPerformance> {
        self.players.iter().find(|p| p.player == player)
    }
}

/// Reduce a turn log to per-player figures and the game result.
///
/// A fleet counts as destroyed once its owner has taken `TOTAL_SHIP_CELLS`
/// distinct hits. Every player must have fired at least once.
pub fn analyze(turns: &[Turn], players: [PlayerId; 2]) -> Result<GameReport, EngineError> {
    if let Some(stray) = turns
        .iter()
        .flat_map(|t| [t.shooter, t.target])
        .find(|p| !players.contains(p))
    {
        return Err(EngineError::UnknownPlayer { player: stray });
    }

    let mut performance = players.map(|player| PlayerPerformance {
        player,
        hits: 0,
        misses: 0,
        hit_rate: 0.0,
    });
    let mut struck = [CoordSet::new(); 2];
    for turn in turns {
        let seat = usize::from(turn.shooter == players[1]);
        if turn.hit {
            performance[seat].hits += 1;
            struck[1 - seat].insert(turn.coordinate);
        } else {
            performance[seat].misses += 1;
        }
    }
    for p in performance.iter_mut() {
        if p.shots() == 0 {
            return Err(EngineError::InvalidPerformance { player: p.player });
        }
        p.hit_rate = f64::from(p.hits) / f64::from(p.shots());
    }

    let destroyed = struck.map(|cells| cells.len() >= TOTAL_SHIP_CELLS);
    let outcome = match destroyed {
        [false, true] => Outcome::Winner(players[0]),
        [true, false] => Outcome::Winner(players[1]),
        [true, true] => Outcome::Draw,
        [false, false] => Outcome::Undecided,
    };
    let rounds = turns.iter().map(|t| t.sequence).max().unwrap_or(0);

    Ok(GameReport {
        players: performance,
        outcome,
        rounds,
    })
}

/// Aggregate over a series of games.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub games: usize,
    /// Wins by seat: index 0 fired first.
    pub wins: [usize; 2],
    pub draws: usize,
    pub undecided: usize,
    pub mean_rounds: f64,
    pub mean_hit_rate: f64,
}

impl SeriesSummary {
    pub fn from_reports<'a, I>(reports: I) -> Self
    where
        I: IntoIterator<Item = &'a GameReport>,
    {
        let mut summary = SeriesSummary::default();
        let mut rounds = 0u64;
        let mut rate_sum = 0.0;
        for report in reports {
            summary.games += 1;
            rounds += u64::from(report.rounds);
            rate_sum += report.players.iter().map(|p| p.hit_rate).sum::<f64>();
            match report.outcome {
                Outcome::Winner(p) if p == report.players[0].player => summary.wins[0] += 1,
                Outcome::Winner(_) => summary.wins[1] += 1,
                Outcome::Draw => summary.draws += 1,
                Outcome::Undecided => summary.undecided += 1,
            }
        }
        if summary.games > 0 {
            summary.mean_rounds = rounds as f64 / summary.games as f64;
            summary.mean_hit_rate = rate_sum / (2 * summary.games) as f64;
        }
        summary
    }
}
