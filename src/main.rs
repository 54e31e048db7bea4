//! Automation: run simulated matches and print the results.
use anyhow::Result;
use clap::Parser;
use log::{info, LevelFilter};

use automation_game::{EndReason, Game, GameRng, MatchConfig, MatchResult, PlayerId, PlayerPair};

#[derive(Debug, Parser)]
struct Cli {
    /// RNG seed, random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// How many matches to play.
    #[arg(short, long, default_value_t = 1)]
    num_games: usize,
    /// Turn cap per match.
    #[arg(long, default_value_t = automation_game::core::DEFAULT_MAX_TURNS)]
    max_turns: u32,
    /// Print each match result as a JSON line instead of text.
    #[arg(long)]
    json: bool,
    /// A log level among "off", "error", "warn", "info", "debug", "trace".
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Debug)]
struct Tally {
    wins: PlayerPair<usize>,
    turn_limit: usize,
}

impl Tally {
    fn new() -> Self {
        Self {
            wins: PlayerPair::new(|_| 0),
            turn_limit: 0,
        }
    }

    fn record(&mut self, result: &MatchResult) {
        self.wins[result.winner] += 1;
        if result.end_reason == EndReason::TurnLimit {
            self.turn_limit += 1;
        }
    }
}

fn print_result(index: usize, result: &MatchResult) {
    println!("=================================");
    println!("Match {} finished after {} turns", index + 1, result.turns);
    for (player, score) in result.scores.iter() {
        println!("{player} Automation Points: {score}");
    }
    let purchases: PlayerPair<usize> = result.purchases();
    for (player, bought) in purchases.iter() {
        println!("{player} bought {bought} cards");
    }
    if result.end_reason == EndReason::TurnLimit {
        println!("Stopped at the turn limit");
    }
    println!("Winner: {}", result.winner);
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(cli.log_level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let mut rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!("seed {}", rng.seed());

    let mut tally = Tally::new();
    for index in 0..cli.num_games {
        // A single match uses the seed as given so it can be replayed with --seed.
        let seed = if cli.num_games == 1 {
            rng.seed()
        } else {
            rng.fork().seed()
        };
        let config = MatchConfig::new()
            .with_seed(seed)
            .with_max_turns(cli.max_turns);

        let result = Game::with_config(config).play_game();
        tally.record(&result);

        if cli.json {
            println!("{}", serde_json::to_string(&result)?);
        } else {
            print_result(index, &result);
        }
    }

    if cli.num_games > 1 && !cli.json {
        println!("=================================");
        println!(
            "End result over {} matches:\n- {} wins {}\n- {} wins {}\n- {} stopped at the turn limit",
            cli.num_games,
            PlayerId::FIRST,
            tally.wins[PlayerId::FIRST],
            PlayerId::SECOND,
            tally.wins[PlayerId::SECOND],
            tally.turn_limit
        );
    }

    Ok(())
}
