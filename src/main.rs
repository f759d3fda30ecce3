//! Risk Sim - Entry Point
//!
//! Rolls single exchanges, runs batches of mass attacks, deals random
//! starting troops and estimates the baseline troop dispersion. Results go
//! to stdout as JSON or text; logs go to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use risk_sim::combat::dice::seeded_stream;
use risk_sim::combat::{resolve_exchange, run_attrition_batch, AttritionSummary, MassAttack};
use risk_sim::core::{Result, RiskError, SimulationConfig};
use risk_sim::distribution::{
    compare_dispersion, estimate_baselines, rank_players, sample_distribution,
    validate_territory_split, DispersionRank, DispersionReport,
};

/// Risk dice combat and troop allocation simulator
#[derive(Parser, Debug)]
#[command(name = "risk-sim")]
#[command(about = "Simulate Risk dice combat, mass attacks and starting troop allocation")]
struct Args {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Random seed for deterministic runs (overrides the config)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Roll one exchange
    Attack {
        /// Dice rolled by the attacker (1-3)
        #[arg(long, default_value_t = 3)]
        attack_dice: u32,

        /// Dice rolled by the defender (1-2)
        #[arg(long, default_value_t = 2)]
        defend_dice: u32,
    },

    /// Repeat exchanges until the attacker stops or the defender is wiped out
    MassAttack {
        /// Troops on the attacking territory
        #[arg(long)]
        attacker: Option<u32>,

        /// Troops on the defending territory
        #[arg(long)]
        defender: Option<u32>,

        /// Attacker stops at or below this many troops
        #[arg(long)]
        stop: Option<u32>,

        /// Number of independent mass attacks
        #[arg(long)]
        runs: Option<u32>,
    },

    /// Deal random starting troops and compare their spread to the baseline
    Allocate {
        /// Number of players (2-6)
        #[arg(long)]
        players: u32,

        /// Territories held by each player, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        territories: Vec<u32>,

        /// Player names, comma separated
        #[arg(long, value_delimiter = ',')]
        names: Vec<String>,
    },

    /// Estimate the expected troop spread for every legal setup
    MonteCarlo {
        /// Allocations sampled per setup
        #[arg(long)]
        samples: Option<u32>,
    },
}

/// JSON output of the allocate command
#[derive(Serialize)]
struct AllocationResult {
    seed: u64,
    players: Vec<DispersionReport>,
    /// Player names from widest to narrowest relative spread
    ranking: Vec<(String, f64)>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    // Determine seed
    let seed = args
        .seed
        .or(config.seed)
        .unwrap_or_else(rand::random::<u64>);
    tracing::info!("Using seed {}", seed);

    match args.command {
        Command::Attack {
            attack_dice,
            defend_dice,
        } => {
            let mut rng = seeded_stream(seed, 0);
            let result = resolve_exchange(&mut rng, attack_dice, defend_dice)?;
            match args.format {
                OutputFormat::Json => print_json(&result)?,
                OutputFormat::Text => {
                    println!("Attacker rolled: {:?}", result.attacker_rolls);
                    println!("Defender rolled: {:?}", result.defender_rolls);
                    println!("Attacker lost {} troop(s)", result.attacker_troops_lost);
                    println!("Defender lost {} troop(s)", result.defender_troops_lost);
                }
            }
        }

        Command::MassAttack {
            attacker,
            defender,
            stop,
            runs,
        } => {
            let defaults = &config.mass_attack;
            let attack = MassAttack {
                attacker: attacker.unwrap_or(defaults.attacker),
                defender: defender.unwrap_or(defaults.defender),
                stop_threshold: Some(stop.unwrap_or(defaults.stop_threshold)),
            };
            let summary = run_attrition_batch(seed, runs.unwrap_or(defaults.runs), attack)?;
            match args.format {
                OutputFormat::Json => print_json(&summary)?,
                OutputFormat::Text => print_mass_attack(&attack, &summary),
            }
        }

        Command::Allocate {
            players,
            territories,
            names,
        } => {
            let result = allocate(seed, players, &territories, names)?;
            match args.format {
                OutputFormat::Json => print_json(&result)?,
                OutputFormat::Text => print_allocation(&result),
            }
        }

        Command::MonteCarlo { samples } => {
            let samples = samples.unwrap_or(config.monte_carlo.samples);
            let estimates = estimate_baselines(samples, seed)?;
            match args.format {
                OutputFormat::Json => print_json(&estimates)?,
                OutputFormat::Text => {
                    let mut current_players = 0;
                    for estimate in &estimates {
                        if estimate.players != current_players {
                            current_players = estimate.players;
                            println!("\n{} Players:", current_players);
                        }
                        println!(
                            "  {:>2} territories: {:.4} (recorded {:.4})",
                            estimate.territories,
                            estimate.mean_std_dev,
                            estimate.recorded_std_dev.unwrap_or(f64::NAN)
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

fn allocate(
    seed: u64,
    players: u32,
    territories: &[u32],
    names: Vec<String>,
) -> Result<AllocationResult> {
    validate_territory_split(players, territories)?;

    let names: Vec<String> = if names.is_empty() {
        (1..=players).map(|i| format!("Player {}", i)).collect()
    } else if names.len() == territories.len() {
        names
    } else {
        return Err(RiskError::invalid(format!(
            "got {} names for {} players",
            names.len(),
            players
        )));
    };

    let mut reports = Vec::with_capacity(territories.len());
    for (index, (name, &count)) in names.into_iter().zip(territories).enumerate() {
        let mut rng = seeded_stream(seed, index as u64);
        let allocation = sample_distribution(&mut rng, players, count)?;
        reports.push(compare_dispersion(name, &allocation, players)?);
    }

    let ranking = rank_players(reports.clone())
        .into_iter()
        .map(|report| (report.name, report.relative_percent))
        .collect();

    Ok(AllocationResult {
        seed,
        players: reports,
        ranking,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_mass_attack(attack: &MassAttack, summary: &AttritionSummary) {
    println!(
        "Mass attack: {} vs {}, stop at {}",
        attack.attacker,
        attack.defender,
        attack.stop_threshold.unwrap_or(1)
    );
    println!("==========");
    for outcome in &summary.outcomes {
        println!(
            "attacker {:>3}, defender {:>3} after {} exchanges",
            outcome.attacker_remaining, outcome.defender_remaining, outcome.exchanges
        );
    }
    println!();
    println!(
        "Attacker victories: {}/{} ({:.1}%)",
        summary.attacker_victories,
        summary.runs,
        summary.victory_rate() * 100.0
    );
    println!("Mean attacker remaining: {:.2}", summary.mean_attacker_remaining);
    println!("Mean defender remaining: {:.2}", summary.mean_defender_remaining);
    println!("Seed: {}", summary.seed);
}

fn print_allocation(result: &AllocationResult) {
    for report in &result.players {
        println!("\n{} troops distribution:", report.name);
        for (i, troops) in report.allocation.troops.iter().enumerate() {
            println!("  Territory {}: {}", i + 1, troops);
        }
    }

    println!();
    for report in &result.players {
        let (sign, rank) = match report.rank {
            DispersionRank::Better => ("+", "better"),
            DispersionRank::Worse => ("-", "worse"),
        };
        println!(
            "{}:: Troops STD: {:.3}, Theoretical STD: {:.3}, {}{:.2}% {} STD than Theo.",
            report.name,
            report.actual_std_dev,
            report.theoretical_std_dev,
            sign,
            report.relative_percent.abs(),
            rank
        );
    }

    println!("\nPlayer Relative STD Ranking:");
    for (name, percent) in &result.ranking {
        println!("  {}: {:+.2}%", name, percent);
    }
    println!("Seed: {}", result.seed);
}
