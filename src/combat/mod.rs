pub mod attrition;
pub mod batch;
pub mod constants;
pub mod dice;
pub mod resolution;

pub use attrition::{run_attrition, AttritionOutcome, AttritionState, Forces};
pub use batch::{run_attrition_batch, AttritionSummary, MassAttack};
pub use dice::{RandomSource, ScriptedDice};
pub use resolution::{compare_rolls, resolve_exchange, CombatResult};
