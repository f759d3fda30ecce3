//! Random starting troop allocation and its dispersion statistics

pub mod baseline;
pub mod comparison;
pub mod monte_carlo;
pub mod sampler;
pub mod setup;

pub use baseline::theoretical_std_dev;
pub use comparison::{compare_dispersion, rank_players, DispersionRank, DispersionReport};
pub use monte_carlo::{estimate_baselines, estimate_std_dev, BaselineEstimate};
pub use sampler::{allocate_troops, sample_distribution, TroopAllocation};
pub use setup::{starting_troops, territory_range, validate_territory_split};
