//! Dice exchange resolution
//!
//! One exchange: both sides roll, dice are ranked highest first, and the
//! top pairs are compared. The defender wins every tie.

use serde::{Deserialize, Serialize};

use crate::combat::constants::{MAX_ATTACK_DICE, MAX_DEFEND_DICE, MAX_PAIRS};
use crate::combat::dice::{roll_sorted, RandomSource};
use crate::core::error::{Result, RiskError};

/// Losses produced by a single exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatResult {
    pub attacker_troops_lost: u32,
    pub defender_troops_lost: u32,
    /// Every attacking die rolled, highest first (unpaired dice included)
    pub attacker_rolls: Vec<u8>,
    /// Every defending die rolled, highest first
    pub defender_rolls: Vec<u8>,
}

impl CombatResult {
    /// Number of die pairs that were compared
    ///
    /// Each compared pair costs exactly one side one troop.
    pub fn pairs_compared(&self) -> u32 {
        self.attacker_troops_lost + self.defender_troops_lost
    }
}

/// Check dice counts against the per-side limits
pub fn validate_dice(attacking_dice: u32, defending_dice: u32) -> Result<()> {
    if !(1..=MAX_ATTACK_DICE).contains(&attacking_dice) {
        return Err(RiskError::invalid(format!(
            "attacker must roll between 1 and {} dice, got {}",
            MAX_ATTACK_DICE, attacking_dice
        )));
    }
    if !(1..=MAX_DEFEND_DICE).contains(&defending_dice) {
        return Err(RiskError::invalid(format!(
            "defender must roll between 1 and {} dice, got {}",
            MAX_DEFEND_DICE, defending_dice
        )));
    }
    Ok(())
}

/// Compare already rolled dice
///
/// Rolls may be given in any order. Only the highest `min(2, a, d)` dice
/// of each side are paired; the attacker takes a pair only with a strictly
/// higher die.
pub fn compare_rolls(attacker_rolls: &[u8], defender_rolls: &[u8]) -> CombatResult {
    let mut attacker_rolls = attacker_rolls.to_vec();
    let mut defender_rolls = defender_rolls.to_vec();
    attacker_rolls.sort_unstable_by(|a, b| b.cmp(a));
    defender_rolls.sort_unstable_by(|a, b| b.cmp(a));

    let pairs = (MAX_PAIRS as usize)
        .min(attacker_rolls.len())
        .min(defender_rolls.len());

    let defender_troops_lost = attacker_rolls[..pairs]
        .iter()
        .zip(&defender_rolls[..pairs])
        .filter(|(attack, defend)| attack > defend)
        .count() as u32;
    let attacker_troops_lost = pairs as u32 - defender_troops_lost;

    CombatResult {
        attacker_troops_lost,
        defender_troops_lost,
        attacker_rolls,
        defender_rolls,
    }
}

/// Roll and resolve one exchange
///
/// # Arguments
/// * `source` - Random source for the dice
/// * `attacking_dice` - Dice committed by the attacker, 1 to 3
/// * `defending_dice` - Dice committed by the defender, 1 to 2
///
/// # Errors
/// `InvalidArgument` if either count is out of range. Nothing is rolled
/// in that case.
pub fn resolve_exchange<S: RandomSource + ?Sized>(
    source: &mut S,
    attacking_dice: u32,
    defending_dice: u32,
) -> Result<CombatResult> {
    validate_dice(attacking_dice, defending_dice)?;

    let attacker_rolls = roll_sorted(&mut *source, attacking_dice);
    let defender_rolls = roll_sorted(&mut *source, defending_dice);
    let result = compare_rolls(&attacker_rolls, &defender_rolls);

    tracing::trace!(
        "Exchange {:?} vs {:?}: attacker lost {}, defender lost {}",
        result.attacker_rolls,
        result.defender_rolls,
        result.attacker_troops_lost,
        result.defender_troops_lost
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::dice::ScriptedDice;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_tie_goes_to_defender() {
        let result = compare_rolls(&[4], &[4]);
        assert_eq!(result.attacker_troops_lost, 1);
        assert_eq!(result.defender_troops_lost, 0);
    }

    #[test]
    fn test_split_result() {
        // 6 beats 5, 2 loses to 3
        let result = compare_rolls(&[2, 6, 1], &[5, 3]);
        assert_eq!(result.attacker_troops_lost, 1);
        assert_eq!(result.defender_troops_lost, 1);
        assert_eq!(result.attacker_rolls, vec![6, 2, 1]);
    }

    #[test]
    fn test_third_attack_die_ignored() {
        // The lowest attacking die never counts, even if it would win
        let result = compare_rolls(&[1, 1, 6], &[5, 5]);
        assert_eq!(result.attacker_troops_lost, 1);
        assert_eq!(result.defender_troops_lost, 1);

        let result = compare_rolls(&[1, 1, 1], &[1, 1]);
        assert_eq!(result.pairs_compared(), 2);
        assert_eq!(result.attacker_troops_lost, 2);
    }

    #[test]
    fn test_single_defender_die_limits_pairs() {
        let result = compare_rolls(&[6, 6, 6], &[1]);
        assert_eq!(result.pairs_compared(), 1);
        assert_eq!(result.defender_troops_lost, 1);
    }

    #[test]
    fn test_resolve_exchange_uses_source() {
        // Attacker rolls 6, 5, 1; defender rolls 5, 5
        let mut dice = ScriptedDice::new(vec![6, 1, 5, 5, 5]);
        let result = resolve_exchange(&mut dice, 3, 2).unwrap();
        assert_eq!(result.attacker_rolls, vec![6, 5, 1]);
        assert_eq!(result.defender_rolls, vec![5, 5]);
        assert_eq!(result.defender_troops_lost, 1);
        assert_eq!(result.attacker_troops_lost, 1);
        assert_eq!(dice.draws(), 5);
    }

    #[test]
    fn test_out_of_range_dice_rejected() {
        let mut dice = ScriptedDice::new(vec![6]);
        for (attack, defend) in [(0, 1), (4, 1), (1, 0), (1, 3)] {
            let result = resolve_exchange(&mut dice, attack, defend);
            assert!(
                matches!(result, Err(RiskError::InvalidArgument(_))),
                "({}, {}) should be rejected",
                attack,
                defend
            );
        }
        // Validation happens before any roll
        assert_eq!(dice.draws(), 0);
    }

    #[test]
    fn test_losses_sum_to_pairs() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for attack in 1..=3u32 {
            for defend in 1..=2u32 {
                for _ in 0..200 {
                    let result = resolve_exchange(&mut rng, attack, defend).unwrap();
                    assert_eq!(result.pairs_compared(), attack.min(defend).min(2));
                }
            }
        }
    }
}
