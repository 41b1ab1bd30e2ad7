//! Damage resolution and hit-point reduction.
//!
//! Pure functions over in-memory values: the engine reads character state,
//! runs these rules, then persists the outcome. Damage amounts stay
//! fractional through resolution (resistance halves by true division); the
//! persistence boundary is where values round down to whole hit points.

use crate::error::DomainError;
use crate::value_objects::{DamageType, DefenseEntry, DefenseKind};

/// An incoming attack: a raw damage amount and its damage type.
///
/// Valid by construction: the amount is finite and non-negative, the type is
/// one of the canonical damage types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attack {
    damage: f64,
    damage_type: DamageType,
}

impl Attack {
    /// Create an attack from request input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the damage amount is negative,
    /// NaN, or infinite.
    pub fn new(damage: f64, damage_type: DamageType) -> Result<Self, DomainError> {
        if !damage.is_finite() || damage < 0.0 {
            return Err(DomainError::validation(
                "attack damage must be a non-negative number",
            ));
        }
        Ok(Self {
            damage,
            damage_type,
        })
    }

    pub fn damage(&self) -> f64 {
        self.damage
    }

    pub fn damage_type(&self) -> DamageType {
        self.damage_type
    }
}

/// Mitigated damage after the character's defenses are applied.
///
/// The first profile entry matching the attack's type governs: immunity
/// nullifies the damage, resistance halves it (fractions are preserved, a
/// 7-damage hit against resistance mitigates to 3.5). With no matching
/// entry the damage passes through unchanged.
pub fn resolve_damage(attack: &Attack, defenses: &[DefenseEntry]) -> f64 {
    for entry in defenses {
        if entry.damage_type == attack.damage_type() {
            return match entry.defense {
                DefenseKind::Immunity => 0.0,
                DefenseKind::Resistance => attack.damage() / 2.0,
            };
        }
    }
    attack.damage()
}

/// Hit points actually lost once the temporary buffer absorbs its share.
///
/// Temporary hit points absorb damage first, fully and without carryover
/// credit: a buffer larger than the hit yields zero loss, never a surplus.
pub fn hit_point_loss(temp_hit_points: f64, mitigated_damage: f64) -> f64 {
    if temp_hit_points >= mitigated_damage {
        0.0
    } else {
        mitigated_damage - temp_hit_points
    }
}

/// Temporary hit points remaining after absorbing mitigated damage.
///
/// The buffer depletes by `min(buffer, damage)`. Fractional damage rounds
/// down before consuming the buffer, matching the whole-point rounding at
/// the persistence boundary.
pub fn temp_remaining(temp_hit_points: i64, mitigated_damage: f64) -> i64 {
    let absorbed = temp_hit_points.min(mitigated_damage.floor() as i64);
    temp_hit_points - absorbed
}
