//! Recorded theoretical dispersion of random starting allocations
//!
//! Each value is the mean population standard deviation of troops per
//! territory over 100_000 simulated allocations (see `monte_carlo`).
//! The (3, 15) and (5, 8) cells were re-estimated over 200_000 samples.

use crate::core::error::{Result, RiskError};

/// `(players, territories, standard deviation)`
pub const THEORETICAL_STD_DEVS: &[(u32, u32, f64)] = &[
    (2, 20, 0.963_574_547_731_490_8),
    (2, 21, 0.918_082_256_959_259_4),
    (2, 22, 0.874_019_752_574_442_9),
    (3, 12, 1.298_274_028_415_833),
    (3, 13, 1.224_895_355_875_612_4),
    (3, 14, 1.158_480_392_510_193_6),
    (3, 15, 1.097_505_428_036_925_6),
    (4, 9, 1.399_284_136_282_691_3),
    (4, 10, 1.306_554_680_516_975_4),
    (4, 11, 1.223_091_652_443_410_8),
    (5, 6, 1.548_111_164_726_471_4),
    (5, 7, 1.427_351_248_161_077_3),
    (5, 8, 1.320_818_649_024_862_8),
    (5, 9, 1.221_211_659_128_360_4),
    (6, 5, 1.461_349_640_909_63),
    (6, 6, 1.332_557_647_058_807_9),
    (6, 7, 1.216_087_625_008_513_5),
    (6, 8, 1.110_055_590_983_748_6),
];

pub fn theoretical_std_dev(players: u32, territories: u32) -> Result<f64> {
    THEORETICAL_STD_DEVS
        .iter()
        .find(|(p, t, _)| *p == players && *t == territories)
        .map(|&(_, _, std_dev)| std_dev)
        .ok_or(RiskError::UnknownBaseline {
            players,
            territories,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::setup::territory_range;

    #[test]
    fn test_every_legal_setup_has_baseline() {
        for players in 2..=6 {
            for territories in territory_range(players).unwrap() {
                assert!(
                    theoretical_std_dev(players, territories).is_ok(),
                    "missing baseline for {} players, {} territories",
                    players,
                    territories
                );
            }
        }
    }

    #[test]
    fn test_unknown_setup() {
        assert!(matches!(
            theoretical_std_dev(2, 30),
            Err(RiskError::UnknownBaseline {
                players: 2,
                territories: 30
            })
        ));
    }
}
