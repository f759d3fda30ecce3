//! Game setup rules for random troop allocation
//!
//! Territories are dealt from 42 territory cards plus 2 wild cards, so a
//! player's share depends on how many players split the deck.

use std::ops::RangeInclusive;

use crate::core::error::{Result, RiskError};

pub const TERRITORY_CARDS: u32 = 42;
pub const WILD_CARDS: u32 = 2;

pub const MIN_PLAYERS: u32 = 2;
pub const MAX_PLAYERS: u32 = 6;

pub fn validate_players(players: u32) -> Result<()> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
        return Err(RiskError::invalid(format!(
            "player count must be between {} and {}, got {}",
            MIN_PLAYERS, MAX_PLAYERS, players
        )));
    }
    Ok(())
}

/// Troops each player places at the start of the game
pub fn starting_troops(players: u32) -> Result<u32> {
    validate_players(players)?;
    Ok(match players {
        2 => 40,
        3 => 35,
        4 => 30,
        5 => 25,
        _ => 20,
    })
}

/// Territory counts a single player can legally be dealt
pub fn territory_range(players: u32) -> Result<RangeInclusive<u32>> {
    validate_players(players)?;
    let deck = TERRITORY_CARDS + WILD_CARDS;
    let min = deck / players - WILD_CARDS;
    let max = deck.div_ceil(players);
    Ok(min..=max)
}

pub fn validate_territories(players: u32, territories: u32) -> Result<()> {
    let range = territory_range(players)?;
    if !range.contains(&territories) {
        return Err(RiskError::invalid(format!(
            "with {} players each player holds between {} and {} territories, got {}",
            players,
            range.start(),
            range.end(),
            territories
        )));
    }
    Ok(())
}

/// Check a full deal: one count per player, each legal, covering the whole map
pub fn validate_territory_split(players: u32, territories: &[u32]) -> Result<()> {
    validate_players(players)?;
    if territories.len() != players as usize {
        return Err(RiskError::invalid(format!(
            "expected territory counts for {} players, got {}",
            players,
            territories.len()
        )));
    }

    for &count in territories {
        validate_territories(players, count)?;
    }

    let total: u32 = territories.iter().sum();
    if total != TERRITORY_CARDS {
        return Err(RiskError::invalid(format!(
            "{} territories accounted for, expected {}",
            total, TERRITORY_CARDS
        )));
    }
    Ok(())
}
