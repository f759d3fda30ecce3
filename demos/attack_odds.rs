//! Print a table of mass attack win rates
//!
//! Rows are attacking troops, columns defending troops. Each cell runs a
//! seeded batch, so the table is identical on every run.

use risk_sim::combat::{run_attrition_batch, MassAttack};
use risk_sim::core::Result;

const RUNS: u32 = 2_000;
const SEED: u64 = 42;

fn main() -> Result<()> {
    let attackers = [3, 5, 10, 20, 30, 42];
    let defenders = [1, 2, 5, 10, 20, 42];

    println!("\n  ATTACKER WIN RATE ({} runs per cell, stop at 1)\n", RUNS);
    print!("{:>8}", "att\\def");
    for defender in defenders {
        print!("{:>8}", defender);
    }
    println!();

    for attacker in attackers {
        print!("{:>8}", attacker);
        for defender in defenders {
            let attack = MassAttack {
                attacker,
                defender,
                stop_threshold: None,
            };
            let summary = run_attrition_batch(SEED, RUNS, attack)?;
            print!("{:>7.1}%", summary.victory_rate() * 100.0);
        }
        println!();
    }

    Ok(())
}
