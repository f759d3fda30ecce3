//! Monte-Carlo estimate of the expected allocation dispersion
//!
//! Samples are split into fixed-size chunks processed in parallel. Chunk
//! `i` of cell `(players, territories)` always draws from the same
//! stream, so estimates are reproducible for a given seed.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::dice::seeded_stream;
use crate::core::error::{Result, RiskError};
use crate::distribution::baseline::theoretical_std_dev;
use crate::distribution::sampler::allocate_troops;
use crate::distribution::setup::{
    starting_troops, territory_range, validate_territories, MAX_PLAYERS, MIN_PLAYERS,
};

const SAMPLES_PER_CHUNK: u32 = 4096;

/// Estimated mean standard deviation for one setup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineEstimate {
    pub players: u32,
    pub territories: u32,
    pub samples: u32,
    pub mean_std_dev: f64,
    /// Value in the recorded baseline table, if any
    pub recorded_std_dev: Option<f64>,
}

fn cell_seed(seed: u64, players: u32, territories: u32) -> u64 {
    seed ^ (u64::from(players) << 40) ^ (u64::from(territories) << 20)
}

/// Average the standard deviation of `samples` random allocations
pub fn estimate_std_dev(
    players: u32,
    territories: u32,
    samples: u32,
    seed: u64,
) -> Result<BaselineEstimate> {
    if samples == 0 {
        return Err(RiskError::invalid("Monte-Carlo estimate needs at least one sample"));
    }
    validate_territories(players, territories)?;
    let total_troops = starting_troops(players)?;
    let seed = cell_seed(seed, players, territories);

    let chunk_sums = (0..samples.div_ceil(SAMPLES_PER_CHUNK))
        .into_par_iter()
        .map(|chunk| -> Result<f64> {
            let mut rng = seeded_stream(seed, u64::from(chunk));
            let count = SAMPLES_PER_CHUNK.min(samples - chunk * SAMPLES_PER_CHUNK);
            let mut sum = 0.0;
            for _ in 0..count {
                sum += allocate_troops(&mut rng, territories, total_troops)?.std_dev();
            }
            Ok(sum)
        })
        .collect::<Result<Vec<f64>>>()?;

    let mean_std_dev = chunk_sums.iter().sum::<f64>() / f64::from(samples);
    tracing::debug!(
        "Estimated std dev {:.4} for {} players, {} territories ({} samples)",
        mean_std_dev,
        players,
        territories,
        samples
    );

    Ok(BaselineEstimate {
        players,
        territories,
        samples,
        mean_std_dev,
        recorded_std_dev: theoretical_std_dev(players, territories).ok(),
    })
}

/// Estimate every legal `(players, territories)` setup
pub fn estimate_baselines(samples: u32, seed: u64) -> Result<Vec<BaselineEstimate>> {
    let mut estimates = Vec::new();
    for players in MIN_PLAYERS..=MAX_PLAYERS {
        for territories in territory_range(players)? {
            estimates.push(estimate_std_dev(players, territories, samples, seed)?);
        }
    }
    Ok(estimates)
}
