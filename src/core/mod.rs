pub mod config;
pub mod error;

pub use config::{MassAttackConfig, MonteCarloConfig, SimulationConfig};
pub use error::{Result, RiskError};
