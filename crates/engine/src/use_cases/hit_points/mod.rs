//! Hit-point use cases: damage, healing, and temporary hit points.

use std::sync::Arc;

use crate::infrastructure::ports::CharacterStore;

mod apply;
mod deal_damage;
mod error;
mod grant_temp;
mod heal;

pub use apply::{ApplyHitPoints, HitPointChange};
pub use deal_damage::{DamageOutcome, DealDamage};
pub use error::HitPointError;
pub use grant_temp::{GrantTemporaryHitPoints, TempHpGrant};
pub use heal::Heal;

/// Container for the hit-point use cases.
pub struct HitPointUseCases {
    pub deal_damage: Arc<DealDamage>,
    pub heal: Arc<Heal>,
    pub grant_temp_hp: Arc<GrantTemporaryHitPoints>,
}

impl HitPointUseCases {
    pub fn new(store: Arc<dyn CharacterStore>) -> Self {
        let apply = Arc::new(ApplyHitPoints::new(store.clone()));
        Self {
            deal_damage: Arc::new(DealDamage::new(store.clone(), apply.clone())),
            heal: Arc::new(Heal::new(apply)),
            grant_temp_hp: Arc::new(GrantTemporaryHitPoints::new(store)),
        }
    }
}
