use battleship_sim::{
    init_logging, render, run_batch, simulation::game_rng, AbortHandle, GameId, Outcome,
    RoundRule, SeriesSummary, SimConfig, Simulation,
};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "Self-playing Battleship simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
struct Common {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Let the second shooter answer in the round its fleet was sunk
    #[arg(long)]
    return_fire: bool,
    /// Axis draws per ship before placement gives up
    #[arg(long, default_value_t = battleship_sim::DEFAULT_PLACEMENT_ATTEMPTS)]
    placement_attempts: u32,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl Common {
    fn config(&self) -> SimConfig {
        let rule = if self.return_fire {
            RoundRule::ReturnFire
        } else {
            RoundRule::Strict
        };
        let config = SimConfig::default()
            .with_round_rule(rule)
            .with_placement_attempts(self.placement_attempts);
        match self.seed {
            Some(s) => config.with_seed(s),
            None => config,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a single game.
    Play {
        #[command(flatten)]
        common: Common,
        /// Draw both oceans after the game
        #[arg(long)]
        boards: bool,
    },
    /// Simulate a series of independent games.
    Batch {
        #[command(flatten)]
        common: Common,
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long, default_value_t = 4)]
        concurrency: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { common, boards } => {
            let config = common.config();
            let mut rng = game_rng(config.seed, 0);
            let sim = Simulation::new(config);
            let done = sim.play(GameId(1), &mut rng)?;

            if common.json {
                println!("{}", serde_json::to_string(&done.report)?);
                return Ok(());
            }
            for turn in &done.turns {
                println!(
                    "{:>3}  {} -> {}  {:<3} {}",
                    turn.sequence,
                    turn.shooter,
                    turn.target,
                    turn.coordinate.to_string(),
                    if turn.hit { "hit" } else { "miss" }
                );
            }
            if boards {
                for fleet in &done.fleets {
                    println!("\nOcean of {}:", fleet.owner());
                    print!("{}", render::ocean(fleet, &done.turns));
                }
            }
            println!();
            for p in &done.report.players {
                println!(
                    "{}: {} hits, {} misses, hit rate {:.1}%",
                    p.player,
                    p.hits,
                    p.misses,
                    p.hit_rate * 100.0
                );
            }
            match done.report.outcome {
                Outcome::Winner(p) => println!("Winner: {} after {} rounds", p, done.report.rounds),
                Outcome::Draw => println!("Draw: both fleets sank in round {}", done.report.rounds),
                Outcome::Undecided => println!("No winner"),
            }
        }
        Commands::Batch {
            common,
            games,
            concurrency,
        } => {
            let config = common.config().with_concurrency(concurrency);
            let results = run_batch(config, games, AbortHandle::new()).await?;
            let mut reports = Vec::with_capacity(results.len());
            let mut failures = 0usize;
            for result in results {
                match result {
                    Ok(done) => reports.push(done.report),
                    Err(e) => {
                        failures += 1;
                        eprintln!("game failed: {}", e);
                    }
                }
            }
            let summary = SeriesSummary::from_reports(&reports);
            if common.json {
                println!("{}", serde_json::to_string(&summary)?);
            } else {
                println!("games:         {}", summary.games);
                println!("first wins:    {}", summary.wins[0]);
                println!("second wins:   {}", summary.wins[1]);
                println!("draws:         {}", summary.draws);
                println!("undecided:     {}", summary.undecided);
                println!("mean rounds:   {:.1}", summary.mean_rounds);
                println!("mean hit rate: {:.1}%", summary.mean_hit_rate * 100.0);
                if failures > 0 {
                    println!("failed:        {}", failures);
                }
            }
        }
    }
    Ok(())
}
