//! Random starting troop allocation
//!
//! Every territory starts with one troop; each remaining troop is dropped
//! on a territory drawn uniformly at random.

use serde::{Deserialize, Serialize};

use crate::combat::dice::RandomSource;
use crate::core::error::{Result, RiskError};
use crate::distribution::setup::{starting_troops, validate_territories};

/// Troops per territory for one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TroopAllocation {
    pub troops: Vec<u32>,
}

impl TroopAllocation {
    pub fn territories(&self) -> usize {
        self.troops.len()
    }

    pub fn total(&self) -> u32 {
        self.troops.iter().sum()
    }

    pub fn mean(&self) -> f64 {
        if self.troops.is_empty() {
            return 0.0;
        }
        f64::from(self.total()) / self.troops.len() as f64
    }

    /// Population standard deviation of troops per territory
    pub fn std_dev(&self) -> f64 {
        if self.troops.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .troops
            .iter()
            .map(|&t| {
                let diff = f64::from(t) - mean;
                diff * diff
            })
            .sum::<f64>()
            / self.troops.len() as f64;
        variance.sqrt()
    }
}

/// Spread `total_troops` over `territories`, at least one troop on each
pub fn allocate_troops<S: RandomSource + ?Sized>(
    source: &mut S,
    territories: u32,
    total_troops: u32,
) -> Result<TroopAllocation> {
    if territories == 0 {
        return Err(RiskError::invalid("cannot allocate troops over zero territories"));
    }
    if total_troops < territories {
        return Err(RiskError::invalid(format!(
            "{} troops cannot cover {} territories",
            total_troops, territories
        )));
    }

    let mut troops = vec![1u32; territories as usize];
    for _ in 0..(total_troops - territories) {
        let index = source.uniform_inclusive(0, territories - 1) as usize;
        troops[index] += 1;
    }

    Ok(TroopAllocation { troops })
}

/// Sample a starting allocation for one player of a `players` game
pub fn sample_distribution<S: RandomSource + ?Sized>(
    source: &mut S,
    players: u32,
    territories: u32,
) -> Result<TroopAllocation> {
    validate_territories(players, territories)?;
    let total = starting_troops(players)?;
    allocate_troops(source, territories, total)
}
