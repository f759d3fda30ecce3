//! Combat constants - the fixed numbers of the Risk dice rules

/// Faces on every die; rolls are uniform in `1..=DIE_FACES`
pub const DIE_FACES: u32 = 6;

/// Most dice an attacker may roll in one exchange
pub const MAX_ATTACK_DICE: u32 = 3;

/// Most dice a defender may roll in one exchange
pub const MAX_DEFEND_DICE: u32 = 2;

/// Most die pairs compared in one exchange
pub const MAX_PAIRS: u32 = 2;

/// Attacker troop count at or below which a mass attack always halts
pub const ATTACKER_FLOOR: u32 = 2;

/// Stop threshold used when the caller gives none
pub const DEFAULT_STOP_THRESHOLD: u32 = 1;
