//! Grant temporary hit points use case.
//!
//! Temporary hit points do not stack: a grant only takes effect when the
//! candidate strictly exceeds the current buffer. The comparison runs inside
//! the store's update statement, so two racing grants settle on the larger.

use std::sync::Arc;

use hptrackr_domain::{CharacterName, DomainError};

use crate::infrastructure::ports::CharacterStore;

use super::error::HitPointError;

/// Outcome of a temporary-HP grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempHpGrant {
    /// Whether the grant replaced the stored buffer.
    pub applied: bool,
    /// The buffer value after the grant settled.
    pub temp_hit_points: i64,
}

/// Grant temporary hit points use case.
pub struct GrantTemporaryHitPoints {
    store: Arc<dyn CharacterStore>,
}

impl GrantTemporaryHitPoints {
    pub fn new(store: Arc<dyn CharacterStore>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        name: &CharacterName,
        candidate: i64,
    ) -> Result<TempHpGrant, HitPointError> {
        if candidate < 0 {
            return Err(
                DomainError::validation("temporary hit points cannot be negative").into(),
            );
        }

        // Existence check first, so a skipped grant is distinguishable from
        // a missing character (the conditional update affects zero rows in
        // both cases).
        let current = self
            .store
            .get_hit_points(name)
            .await?
            .ok_or_else(|| HitPointError::CharacterNotFound(name.clone()))?;

        let applied = self.store.raise_temp_hit_points(name, candidate).await?;

        if applied {
            let updated = self
                .store
                .get_hit_points(name)
                .await?
                .ok_or_else(|| HitPointError::CharacterNotFound(name.clone()))?;
            Ok(TempHpGrant {
                applied: true,
                temp_hit_points: updated.temp_hit_points,
            })
        } else {
            Ok(TempHpGrant {
                applied: false,
                temp_hit_points: current.temp_hit_points,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockCharacterStore;
    use hptrackr_domain::HitPointState;

    fn name(raw: &str) -> CharacterName {
        CharacterName::new(raw).unwrap()
    }

    #[tokio::test]
    async fn when_candidate_negative_rejects_before_store_access() {
        let use_case = GrantTemporaryHitPoints::new(Arc::new(MockCharacterStore::new()));
        let result = use_case.execute(&name("Bran"), -1).await;

        assert!(matches!(result, Err(HitPointError::Validation(_))));
    }

    #[tokio::test]
    async fn when_character_missing_returns_not_found() {
        let mut store = MockCharacterStore::new();
        store.expect_get_hit_points().returning(|_| Ok(None));

        let use_case = GrantTemporaryHitPoints::new(Arc::new(store));
        let result = use_case.execute(&name("Grog"), 5).await;

        assert!(matches!(result, Err(HitPointError::CharacterNotFound(_))));
    }

    #[tokio::test]
    async fn when_candidate_exceeds_buffer_grant_applies() {
        let mut store = MockCharacterStore::new();
        let mut seq = mockall::Sequence::new();
        store
            .expect_get_hit_points()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some(HitPointState::new(20, 5))));
        store
            .expect_raise_temp_hit_points()
            .withf(|_, candidate| *candidate == 9)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(true));
        store
            .expect_get_hit_points()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some(HitPointState::new(20, 9))));

        let use_case = GrantTemporaryHitPoints::new(Arc::new(store));
        let grant = use_case.execute(&name("Bran"), 9).await.unwrap();

        assert!(grant.applied);
        assert_eq!(grant.temp_hit_points, 9);
    }

    #[tokio::test]
    async fn when_candidate_not_greater_grant_is_skipped() {
        let mut store = MockCharacterStore::new();
        store
            .expect_get_hit_points()
            .times(1)
            .returning(|_| Ok(Some(HitPointState::new(20, 5))));
        store
            .expect_raise_temp_hit_points()
            .withf(|_, candidate| *candidate == 3)
            .times(1)
            .returning(|_, _| Ok(false));

        let use_case = GrantTemporaryHitPoints::new(Arc::new(store));
        let grant = use_case.execute(&name("Bran"), 3).await.unwrap();

        assert!(!grant.applied);
        assert_eq!(grant.temp_hit_points, 5);
    }
}
