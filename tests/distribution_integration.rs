//! Troop distribution integration tests
//!
//! Deals full games through the public API and checks the setup rules,
//! allocation totals and the dispersion comparison.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use risk_sim::distribution::{
    allocate_troops, compare_dispersion, rank_players, sample_distribution, starting_troops,
    territory_range, theoretical_std_dev, validate_territory_split, DispersionRank,
};

#[test]
fn test_three_player_game() {
    let players = 3;
    let split = [14, 14, 14];
    validate_territory_split(players, &split).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut reports = Vec::new();
    for (i, &territories) in split.iter().enumerate() {
        let allocation = sample_distribution(&mut rng, players, territories).unwrap();
        assert_eq!(allocation.total(), 35);
        assert_eq!(allocation.territories(), 14);
        reports.push(compare_dispersion(format!("Player {}", i + 1), &allocation, players).unwrap());
    }

    let ranked = rank_players(reports);
    assert_eq!(ranked.len(), 3);
    assert!(ranked
        .windows(2)
        .all(|w| w[0].relative_percent >= w[1].relative_percent));
    for report in &ranked {
        let expected = if report.actual_std_dev > report.theoretical_std_dev {
            DispersionRank::Better
        } else {
            DispersionRank::Worse
        };
        assert_eq!(report.rank, expected);
    }
}

#[test]
fn test_uneven_split_rejected() {
    // 22 + 22 = 44 covers the wild cards too, which is not a legal deal
    assert!(validate_territory_split(2, &[22, 22]).is_err());
    assert!(validate_territory_split(6, &[7, 7, 7, 7, 7, 7]).is_ok());
    assert!(validate_territory_split(1, &[42]).is_err());
}

#[test]
fn test_baseline_lookup() {
    let value = theoretical_std_dev(2, 20).unwrap();
    assert!((value - 0.9636).abs() < 1e-4);
    assert!(theoretical_std_dev(7, 6).is_err());
}

proptest! {
    #[test]
    fn prop_allocation_covers_every_territory(
        territories in 1u32..30,
        extra in 0u32..50,
        seed in any::<u64>()
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let allocation = allocate_troops(&mut rng, territories, territories + extra).unwrap();
        prop_assert_eq!(allocation.territories() as u32, territories);
        prop_assert_eq!(allocation.total(), territories + extra);
        prop_assert!(allocation.troops.iter().all(|&t| t >= 1));
        prop_assert!(allocation.std_dev() >= 0.0);
    }

    #[test]
    fn prop_sampled_setup_has_baseline(players in 2u32..=6, pick in 0usize..4, seed in any::<u64>()) {
        let range: Vec<u32> = territory_range(players).unwrap().collect();
        let territories = range[pick % range.len()];
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let allocation = sample_distribution(&mut rng, players, territories).unwrap();
        prop_assert_eq!(allocation.total(), starting_troops(players).unwrap());
        prop_assert!(compare_dispersion("P", &allocation, players).is_ok());
    }
}
