//! Risk Sim - dice combat, mass attacks and starting troop allocation

pub mod combat;
pub mod core;
pub mod distribution;
