//! Mass attack: repeated exchanges until one side can no longer continue
//!
//! The attacker keeps rolling while it holds more than
//! `max(ATTACKER_FLOOR, stop_threshold)` troops and the defender still has
//! troops. One troop always stays behind on the attacking territory, so the
//! attacker never commits more than `attacker - 1` dice.

use serde::{Deserialize, Serialize};

use crate::combat::constants::{
    ATTACKER_FLOOR, DEFAULT_STOP_THRESHOLD, MAX_ATTACK_DICE, MAX_DEFEND_DICE,
};
use crate::combat::dice::RandomSource;
use crate::combat::resolution::{resolve_exchange, CombatResult};
use crate::core::error::{Result, RiskError};

/// Whether a mass attack keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttritionState {
    /// Attacker is above its floor and the defender still holds troops
    Fighting,
    /// Attacker hit its floor or the defender was wiped out
    Resolved,
}

/// Troop counters for both sides of a mass attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forces {
    pub attacker: u32,
    pub defender: u32,
}

impl Forces {
    pub fn new(attacker: u32, defender: u32) -> Self {
        Self { attacker, defender }
    }

    pub fn state(&self, stop_threshold: u32) -> AttritionState {
        if self.attacker > ATTACKER_FLOOR.max(stop_threshold) && self.defender > 0 {
            AttritionState::Fighting
        } else {
            AttritionState::Resolved
        }
    }

    /// Dice each side may commit to the next exchange, `(attacker, defender)`
    pub fn committable_dice(&self) -> (u32, u32) {
        (
            self.attacker.saturating_sub(1).min(MAX_ATTACK_DICE),
            self.defender.min(MAX_DEFEND_DICE),
        )
    }

    pub fn apply(&mut self, result: &CombatResult) {
        self.attacker = self.attacker.saturating_sub(result.attacker_troops_lost);
        self.defender = self.defender.saturating_sub(result.defender_troops_lost);
    }
}

/// Final troop counts of a mass attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttritionOutcome {
    pub attacker_remaining: u32,
    pub defender_remaining: u32,
    /// Exchanges rolled before the attack resolved
    pub exchanges: u32,
}

impl AttritionOutcome {
    /// The defending territory was emptied
    pub fn attacker_won(&self) -> bool {
        self.defender_remaining == 0
    }
}

/// Run a mass attack to completion
///
/// # Arguments
/// * `source` - Random source for every exchange
/// * `attacker_total` - Troops on the attacking territory, garrison included
/// * `defender_total` - Troops on the defending territory
/// * `stop_threshold` - Attacker halts at or below this count (`None` means 1)
///
/// # Errors
/// `InvalidArgument` if `stop_threshold` is zero.
pub fn run_attrition<S: RandomSource + ?Sized>(
    source: &mut S,
    attacker_total: u32,
    defender_total: u32,
    stop_threshold: Option<u32>,
) -> Result<AttritionOutcome> {
    let stop_threshold = stop_threshold.unwrap_or(DEFAULT_STOP_THRESHOLD);
    if stop_threshold == 0 {
        return Err(RiskError::invalid("stop threshold must be at least 1"));
    }

    let mut forces = Forces::new(attacker_total, defender_total);
    let mut exchanges = 0u32;

    tracing::debug!(
        "Mass attack: {} attackers vs {} defenders, stop at {}",
        attacker_total,
        defender_total,
        stop_threshold
    );

    while forces.state(stop_threshold) == AttritionState::Fighting {
        let (attacking_dice, defending_dice) = forces.committable_dice();
        let result = resolve_exchange(&mut *source, attacking_dice, defending_dice)?;
        forces.apply(&result);
        exchanges += 1;
    }

    tracing::debug!(
        "Mass attack resolved after {} exchanges: {} attackers, {} defenders left",
        exchanges,
        forces.attacker,
        forces.defender
    );

    Ok(AttritionOutcome {
        attacker_remaining: forces.attacker,
        defender_remaining: forces.defender,
        exchanges,
    })
}
