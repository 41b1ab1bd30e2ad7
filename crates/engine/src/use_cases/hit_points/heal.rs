//! Heal use case.

use std::sync::Arc;

use hptrackr_domain::{CharacterName, DomainError, HitPointState};

use super::apply::ApplyHitPoints;
use super::error::HitPointError;

/// Heal use case: a positive hit-point delta with no ceiling.
pub struct Heal {
    apply: Arc<ApplyHitPoints>,
}

impl Heal {
    pub fn new(apply: Arc<ApplyHitPoints>) -> Self {
        Self { apply }
    }

    pub async fn execute(
        &self,
        name: &CharacterName,
        hit_points: i64,
    ) -> Result<HitPointState, HitPointError> {
        if hit_points <= 0 {
            return Err(DomainError::validation("hit points to heal must be positive").into());
        }

        let change = self.apply.execute(name, hit_points, None).await?;
        Ok(change.updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockCharacterStore;

    fn name(raw: &str) -> CharacterName {
        CharacterName::new(raw).unwrap()
    }

    fn heal_with(store: MockCharacterStore) -> Heal {
        Heal::new(Arc::new(ApplyHitPoints::new(Arc::new(store))))
    }

    #[tokio::test]
    async fn when_amount_not_positive_rejects_before_store_access() {
        let use_case = heal_with(MockCharacterStore::new());

        assert!(matches!(
            use_case.execute(&name("Bran"), 0).await,
            Err(HitPointError::Validation(_))
        ));
        assert!(matches!(
            use_case.execute(&name("Bran"), -4).await,
            Err(HitPointError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn when_character_missing_returns_not_found() {
        let mut store = MockCharacterStore::new();
        store.expect_get_hit_points().returning(|_| Ok(None));

        let use_case = heal_with(store);
        let result = use_case.execute(&name("Grog"), 5).await;

        assert!(matches!(result, Err(HitPointError::CharacterNotFound(_))));
    }

    #[tokio::test]
    async fn when_valid_input_returns_updated_state() {
        let mut store = MockCharacterStore::new();
        let mut seq = mockall::Sequence::new();
        store
            .expect_get_hit_points()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some(HitPointState::new(11, 0))));
        store
            .expect_update_hit_points()
            .withf(|_, delta, temp| *delta == 4 && temp.is_none())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(()));
        store
            .expect_get_hit_points()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some(HitPointState::new(15, 0))));

        let use_case = heal_with(store);
        let state = use_case.execute(&name("Bran"), 4).await.unwrap();

        assert_eq!(state, HitPointState::new(15, 0));
    }
}
