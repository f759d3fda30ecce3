//! Repeated mass attacks for outcome statistics
//!
//! Runs are independent and fan out over rayon. Each run owns a
//! `ChaCha8Rng` seeded from the batch seed and placed on its own stream,
//! so a batch is reproducible regardless of thread scheduling.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::attrition::{run_attrition, AttritionOutcome};
use crate::combat::dice::seeded_stream;
use crate::core::error::{Result, RiskError};

/// Parameters shared by every run of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MassAttack {
    pub attacker: u32,
    pub defender: u32,
    pub stop_threshold: Option<u32>,
}

/// Aggregate of a batch of mass attacks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttritionSummary {
    pub seed: u64,
    pub runs: u32,
    pub attacker_victories: u32,
    pub mean_attacker_remaining: f64,
    pub mean_defender_remaining: f64,
    pub outcomes: Vec<AttritionOutcome>,
}

impl AttritionSummary {
    fn from_outcomes(seed: u64, outcomes: Vec<AttritionOutcome>) -> Self {
        let runs = outcomes.len() as u32;
        let attacker_victories = outcomes.iter().filter(|o| o.attacker_won()).count() as u32;

        let (attacker_sum, defender_sum) = outcomes.iter().fold((0u64, 0u64), |(a, d), o| {
            (
                a + u64::from(o.attacker_remaining),
                d + u64::from(o.defender_remaining),
            )
        });
        let divisor = f64::from(runs.max(1));

        Self {
            seed,
            runs,
            attacker_victories,
            mean_attacker_remaining: attacker_sum as f64 / divisor,
            mean_defender_remaining: defender_sum as f64 / divisor,
            outcomes,
        }
    }

    /// Share of runs in which the defender was wiped out
    pub fn victory_rate(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        f64::from(self.attacker_victories) / f64::from(self.runs)
    }
}

/// Simulate `runs` independent mass attacks in parallel
pub fn run_attrition_batch(seed: u64, runs: u32, attack: MassAttack) -> Result<AttritionSummary> {
    if runs == 0 {
        return Err(RiskError::invalid("batch needs at least one run"));
    }

    let outcomes = (0..runs)
        .into_par_iter()
        .map(|index| {
            let mut rng = seeded_stream(seed, u64::from(index));
            run_attrition(&mut rng, attack.attacker, attack.defender, attack.stop_threshold)
        })
        .collect::<Result<Vec<_>>>()?;

    let summary = AttritionSummary::from_outcomes(seed, outcomes);
    tracing::info!(
        "Batch of {} mass attacks: {} attacker victories ({:.1}%)",
        summary.runs,
        summary.attacker_victories,
        summary.victory_rate() * 100.0
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: MassAttack = MassAttack {
        attacker: 42,
        defender: 42,
        stop_threshold: Some(10),
    };

    #[test]
    fn test_batch_is_reproducible() {
        let first = run_attrition_batch(7, 50, DEMO).unwrap();
        let second = run_attrition_batch(7, 50, DEMO).unwrap();
        assert_eq!(first.outcomes, second.outcomes);
        assert_eq!(first.attacker_victories, second.attacker_victories);
    }

    #[test]
    fn test_summary_counts() {
        let summary = run_attrition_batch(11, 100, DEMO).unwrap();
        assert_eq!(summary.runs, 100);
        assert_eq!(summary.outcomes.len(), 100);
        let wins = summary.outcomes.iter().filter(|o| o.attacker_won()).count() as u32;
        assert_eq!(summary.attacker_victories, wins);
        assert!((0.0..=1.0).contains(&summary.victory_rate()));
        assert!(summary.mean_attacker_remaining <= 42.0);
    }

    #[test]
    fn test_overwhelming_attacker_usually_wins() {
        let attack = MassAttack {
            attacker: 60,
            defender: 5,
            stop_threshold: None,
        };
        let summary = run_attrition_batch(3, 200, attack).unwrap();
        assert!(summary.victory_rate() > 0.95);
    }

    #[test]
    fn test_empty_batch_rejected() {
        assert!(matches!(
            run_attrition_batch(1, 0, DEMO),
            Err(RiskError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_invalid_threshold_propagates() {
        let attack = MassAttack {
            stop_threshold: Some(0),
            ..DEMO
        };
        assert!(run_attrition_batch(1, 10, attack).is_err());
    }
}
