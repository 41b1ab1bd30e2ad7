//! Deal damage use case.
//!
//! Turns an incoming attack into a persisted hit-point change.

use std::sync::Arc;

use hptrackr_domain::{combat, Attack, CharacterName, DamageType, HitPointState};

use crate::infrastructure::ports::CharacterStore;

use super::apply::ApplyHitPoints;
use super::error::HitPointError;

/// Outcome of one resolved attack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageOutcome {
    /// Damage after defenses, before the temp-HP buffer. Fractions from
    /// resistance halving are preserved here.
    pub damage_received: f64,
    pub original: HitPointState,
    pub updated: HitPointState,
}

/// Deal damage use case.
///
/// Orchestrates: damage-type validation, defense lookup, damage resolution,
/// temp-HP absorption, and the atomic hit-point mutation.
pub struct DealDamage {
    store: Arc<dyn CharacterStore>,
    apply: Arc<ApplyHitPoints>,
}

impl DealDamage {
    pub fn new(store: Arc<dyn CharacterStore>, apply: Arc<ApplyHitPoints>) -> Self {
        Self { store, apply }
    }

    pub async fn execute(
        &self,
        name: &CharacterName,
        damage: f64,
        damage_type: &str,
    ) -> Result<DamageOutcome, HitPointError> {
        // Reject unrecognized types and bad amounts before touching the store.
        let damage_type: DamageType = damage_type
            .parse()
            .map_err(|_| HitPointError::UnknownDamageType(damage_type.to_string()))?;
        let attack = Attack::new(damage, damage_type)?;

        let character = self
            .store
            .get_character(name)
            .await?
            .ok_or_else(|| HitPointError::CharacterNotFound(name.clone()))?;
        let defenses = self.store.get_defenses(name).await?;

        let mitigated = combat::resolve_damage(&attack, &defenses);
        let loss = combat::hit_point_loss(character.temp_hit_points as f64, mitigated);

        // Whole points are persisted: fractional loss rounds down, and the
        // temp buffer is written back minus the damage it absorbed.
        let delta = -(loss.floor() as i64);
        let temp_after = combat::temp_remaining(character.temp_hit_points, mitigated);

        let change = self.apply.execute(name, delta, Some(temp_after)).await?;

        Ok(DamageOutcome {
            damage_received: mitigated,
            original: change.original,
            updated: change.updated,
        })
    }
}
