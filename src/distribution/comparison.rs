//! Compare a player's allocation against the theoretical baseline

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::distribution::baseline::theoretical_std_dev;
use crate::distribution::sampler::TroopAllocation;

/// How an allocation's dispersion compares to the baseline
///
/// A wider spread concentrates troops, which counts as the better deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispersionRank {
    Better,
    Worse,
}

/// Dispersion of one player's allocation next to the baseline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispersionReport {
    pub name: String,
    pub allocation: TroopAllocation,
    pub actual_std_dev: f64,
    pub theoretical_std_dev: f64,
    /// `(actual / theoretical - 1) * 100`
    pub relative_percent: f64,
    pub rank: DispersionRank,
}

pub fn compare_dispersion(
    name: impl Into<String>,
    allocation: &TroopAllocation,
    players: u32,
) -> Result<DispersionReport> {
    let theoretical = theoretical_std_dev(players, allocation.territories() as u32)?;
    let actual = allocation.std_dev();

    let rank = if actual > theoretical {
        DispersionRank::Better
    } else {
        DispersionRank::Worse
    };

    Ok(DispersionReport {
        name: name.into(),
        allocation: allocation.clone(),
        actual_std_dev: actual,
        theoretical_std_dev: theoretical,
        relative_percent: (actual / theoretical - 1.0) * 100.0,
        rank,
    })
}

/// Order reports from the widest relative spread to the narrowest
pub fn rank_players(mut reports: Vec<DispersionReport>) -> Vec<DispersionReport> {
    reports.sort_by(|a, b| b.relative_percent.total_cmp(&a.relative_percent));
    reports
}
