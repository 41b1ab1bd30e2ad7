//! SQLite-backed character store.
//!
//! Schema mirrors the seed-sheet shape: one core `characters` row per
//! character plus child tables for classes, stats, items, modifiers, and
//! defenses, all keyed by character name.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use hptrackr_domain::{
    AbilityScores, Character, CharacterClass, CharacterName, CharacterSheet, DamageType,
    DefenseEntry, DefenseKind, HitPointState, Item, ItemModifier,
};

use crate::infrastructure::ports::{CharacterStore, StoreError};

/// SQLite implementation of the character store.
///
/// One pool shared by all requests. No character state is cached in-process;
/// every operation reads current rows, so concurrent mutations are arbitrated
/// entirely by the update statements below.
pub struct SqliteCharacterStore {
    pool: SqlitePool,
}

impl SqliteCharacterStore {
    /// Open (or create) the database file at `db_path` and ensure the schema.
    pub async fn connect(db_path: &str) -> Result<Self, StoreError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| StoreError::database("connect", e))?;
        Self::with_pool(pool).await
    }

    /// Build the store on an existing pool. Tests use this with an in-memory
    /// database.
    pub async fn with_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        ensure_schema(&pool).await?;
        Ok(Self { pool })
    }
}

async fn ensure_schema(pool: &SqlitePool) -> Result<(), StoreError> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS characters (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            name            VARCHAR(50) NOT NULL UNIQUE,
            level           INTEGER NOT NULL,
            hit_points      INTEGER NOT NULL,
            temp_hit_points INTEGER NOT NULL DEFAULT 0
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS classes (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            character_name  VARCHAR(50) NOT NULL,
            name            VARCHAR(50) NOT NULL,
            hit_dice_value  INTEGER NOT NULL,
            class_level     INTEGER NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS stats (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            character_name  VARCHAR(50) NOT NULL,
            strength        INTEGER NOT NULL,
            dexterity       INTEGER NOT NULL,
            constitution    INTEGER NOT NULL,
            intelligence    INTEGER NOT NULL,
            wisdom          INTEGER NOT NULL,
            charisma        INTEGER NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            character_name  VARCHAR(50) NOT NULL,
            name            VARCHAR(50) NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS modifiers (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            character_name  VARCHAR(50) NOT NULL,
            item_name       VARCHAR(50) NOT NULL,
            affected_object VARCHAR(50) NOT NULL,
            affected_value  VARCHAR(50) NOT NULL,
            value           INTEGER NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS defenses (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            character_name  VARCHAR(50) NOT NULL,
            type            VARCHAR(50) NOT NULL,
            defense         VARCHAR(50) NOT NULL
        )
        "#,
        "CREATE INDEX IF NOT EXISTS idx_defenses_character ON defenses(character_name)",
    ];

    for statement in statements {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| StoreError::database("ensure_schema", e))?;
    }
    Ok(())
}

#[async_trait]
impl CharacterStore for SqliteCharacterStore {
    async fn get_character(&self, name: &CharacterName) -> Result<Option<Character>, StoreError> {
        let row = sqlx::query(
            "SELECT name, level, hit_points, temp_hit_points FROM characters WHERE name = ?",
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::database("get_character", e))?;

        match row {
            Some(row) => {
                let stored_name: String = row.get("name");
                let name = CharacterName::new(stored_name).map_err(StoreError::decode)?;
                Ok(Some(Character {
                    name,
                    level: row.get("level"),
                    hit_points: row.get("hit_points"),
                    temp_hit_points: row.get("temp_hit_points"),
                }))
            }
            None => Ok(None),
        }
    }

    async fn get_hit_points(
        &self,
        name: &CharacterName,
    ) -> Result<Option<HitPointState>, StoreError> {
        let row =
            sqlx::query("SELECT hit_points, temp_hit_points FROM characters WHERE name = ?")
                .bind(name.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| StoreError::database("get_hit_points", e))?;

        Ok(row.map(|row| HitPointState::new(row.get("hit_points"), row.get("temp_hit_points"))))
    }

    async fn get_defenses(&self, name: &CharacterName) -> Result<Vec<DefenseEntry>, StoreError> {
        let rows = sqlx::query(
            "SELECT type, defense FROM defenses WHERE character_name = ? ORDER BY id",
        )
        .bind(name.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::database("get_defenses", e))?;

        let mut defenses = Vec::with_capacity(rows.len());
        for row in &rows {
            let raw_type: String = row.get("type");
            let raw_defense: String = row.get("defense");
            match (
                raw_type.parse::<DamageType>(),
                raw_defense.parse::<DefenseKind>(),
            ) {
                (Ok(damage_type), Ok(defense)) => {
                    defenses.push(DefenseEntry::new(damage_type, defense));
                }
                _ => {
                    // A row that never parses could never match an attack
                    // either; skip it rather than failing the whole lookup.
                    tracing::warn!(
                        character = %name,
                        damage_type = %raw_type,
                        defense = %raw_defense,
                        "skipping unrecognized defense row"
                    );
                }
            }
        }
        Ok(defenses)
    }

    async fn get_classes(&self, name: &CharacterName) -> Result<Vec<CharacterClass>, StoreError> {
        let rows = sqlx::query(
            "SELECT DISTINCT name, hit_dice_value, class_level FROM classes WHERE character_name = ?",
        )
        .bind(name.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::database("get_classes", e))?;

        Ok(rows
            .iter()
            .map(|row| CharacterClass {
                name: row.get("name"),
                hit_dice_value: row.get("hit_dice_value"),
                class_level: row.get("class_level"),
            })
            .collect())
    }

    async fn get_stats(
        &self,
        name: &CharacterName,
    ) -> Result<Option<AbilityScores>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT strength, dexterity, constitution, intelligence, wisdom, charisma
            FROM stats WHERE character_name = ?
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::database("get_stats", e))?;

        Ok(row.map(|row| AbilityScores {
            strength: row.get("strength"),
            dexterity: row.get("dexterity"),
            constitution: row.get("constitution"),
            intelligence: row.get("intelligence"),
            wisdom: row.get("wisdom"),
            charisma: row.get("charisma"),
        }))
    }

    async fn get_items(&self, name: &CharacterName) -> Result<Vec<Item>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT DISTINCT items.name, modifiers.affected_object, modifiers.affected_value,
                   modifiers.value
            FROM items
            LEFT JOIN modifiers
                ON modifiers.item_name = items.name
                AND modifiers.character_name = items.character_name
            WHERE items.character_name = ?
            "#,
        )
        .bind(name.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::database("get_items", e))?;

        Ok(rows
            .iter()
            .map(|row| {
                let affected_object: Option<String> = row.get("affected_object");
                Item {
                    name: row.get("name"),
                    modifier: affected_object.map(|affected_object| ItemModifier {
                        affected_object,
                        affected_value: row.get("affected_value"),
                        value: row.get("value"),
                    }),
                }
            })
            .collect())
    }

    async fn update_hit_points(
        &self,
        name: &CharacterName,
        delta: i64,
        temp_hit_points: Option<i64>,
    ) -> Result<(), StoreError> {
        // Both the zero floor and the temp replacement are evaluated by
        // SQLite inside this one statement, so concurrent writers cannot
        // interleave between a read and a write.
        let result = sqlx::query(
            r#"
            UPDATE characters
            SET hit_points = CASE WHEN hit_points + ? < 0 THEN 0 ELSE hit_points + ? END,
                temp_hit_points = CASE WHEN ? IS NULL THEN temp_hit_points ELSE ? END
            WHERE name = ?
            "#,
        )
        .bind(delta)
        .bind(delta)
        .bind(temp_hit_points)
        .bind(temp_hit_points)
        .bind(name.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::database("update_hit_points", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(name));
        }
        Ok(())
    }

    async fn raise_temp_hit_points(
        &self,
        name: &CharacterName,
        candidate: i64,
    ) -> Result<bool, StoreError> {
        // Monotonic grant: the strictly-greater comparison happens in the
        // WHERE clause, so a stale candidate never lowers the buffer.
        let result = sqlx::query(
            "UPDATE characters SET temp_hit_points = ? WHERE name = ? AND ? > temp_hit_points",
        )
        .bind(candidate)
        .bind(name.as_str())
        .bind(candidate)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::database("raise_temp_hit_points", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn populate(&self, sheet: &CharacterSheet) -> Result<(), StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StoreError::database("populate", e))?;

        sqlx::query(
            "INSERT INTO characters (name, level, hit_points, temp_hit_points) VALUES (?, ?, ?, ?)",
        )
        .bind(sheet.name.as_str())
        .bind(sheet.level)
        .bind(sheet.hit_points)
        .bind(sheet.temp_hit_points)
        .execute(&mut *tx)
        .await
        .map_err(|e| StoreError::database("populate", e))?;

        for class in &sheet.classes {
            sqlx::query(
                r#"
                INSERT INTO classes (character_name, name, hit_dice_value, class_level)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(sheet.name.as_str())
            .bind(&class.name)
            .bind(class.hit_dice_value)
            .bind(class.class_level)
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::database("populate", e))?;
        }

        if let Some(stats) = &sheet.stats {
            sqlx::query(
                r#"
                INSERT INTO stats
                    (character_name, strength, dexterity, constitution, intelligence, wisdom, charisma)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(sheet.name.as_str())
            .bind(stats.strength)
            .bind(stats.dexterity)
            .bind(stats.constitution)
            .bind(stats.intelligence)
            .bind(stats.wisdom)
            .bind(stats.charisma)
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::database("populate", e))?;
        }

        for item in &sheet.items {
            sqlx::query("INSERT INTO items (character_name, name) VALUES (?, ?)")
                .bind(sheet.name.as_str())
                .bind(&item.name)
                .execute(&mut *tx)
                .await
                .map_err(|e| StoreError::database("populate", e))?;

            if let Some(modifier) = &item.modifier {
                sqlx::query(
                    r#"
                    INSERT INTO modifiers
                        (character_name, item_name, affected_object, affected_value, value)
                    VALUES (?, ?, ?, ?, ?)
                    "#,
                )
                .bind(sheet.name.as_str())
                .bind(&item.name)
                .bind(&modifier.affected_object)
                .bind(&modifier.affected_value)
                .bind(modifier.value)
                .execute(&mut *tx)
                .await
                .map_err(|e| StoreError::database("populate", e))?;
            }
        }

        for defense in &sheet.defenses {
            // Stored lower-case so profile rows match parsed attack types.
            sqlx::query("INSERT INTO defenses (character_name, type, defense) VALUES (?, ?, ?)")
                .bind(sheet.name.as_str())
                .bind(defense.damage_type.as_str())
                .bind(defense.defense.as_str())
                .execute(&mut *tx)
                .await
                .map_err(|e| StoreError::database("populate", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::database("populate", e))?;
        Ok(())
    }

    async fn cleanup(&self, name: &CharacterName) -> Result<(), StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StoreError::database("cleanup", e))?;

        let deletes = [
            "DELETE FROM characters WHERE name = ?",
            "DELETE FROM classes WHERE character_name = ?",
            "DELETE FROM stats WHERE character_name = ?",
            "DELETE FROM items WHERE character_name = ?",
            "DELETE FROM modifiers WHERE character_name = ?",
            "DELETE FROM defenses WHERE character_name = ?",
        ];
        for statement in deletes {
            sqlx::query(statement)
                .bind(name.as_str())
                .execute(&mut *tx)
                .await
                .map_err(|e| StoreError::database("cleanup", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::database("cleanup", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    /// In-memory store. A single connection keeps every query on the same
    /// in-memory database.
    async fn memory_store() -> SqliteCharacterStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool should connect");
        SqliteCharacterStore::with_pool(pool)
            .await
            .expect("schema creation should succeed")
    }

    fn name(raw: &str) -> CharacterName {
        CharacterName::new(raw).unwrap()
    }

    fn bran_sheet() -> CharacterSheet {
        serde_json::from_value(serde_json::json!({
            "name": "Bran",
            "level": 3,
            "hitPoints": 20,
            "classes": [
                {"name": "fighter", "hitDiceValue": 10, "classLevel": 3}
            ],
            "stats": {
                "strength": 14, "dexterity": 12, "constitution": 13,
                "intelligence": 10, "wisdom": 11, "charisma": 9
            },
            "items": [
                {
                    "name": "Cloak of Protection",
                    "modifier": {
                        "affectedObject": "stats",
                        "affectedValue": "dexterity",
                        "value": 1
                    }
                }
            ],
            "defenses": [
                {"type": "fire", "defense": "resistance"},
                {"type": "poison", "defense": "immunity"}
            ]
        }))
        .unwrap()
    }

    async fn seeded_store() -> SqliteCharacterStore {
        let store = memory_store().await;
        store
            .populate(&bran_sheet())
            .await
            .expect("populate should succeed");
        store
    }

    #[tokio::test]
    async fn populate_then_get_character_round_trips() {
        let store = seeded_store().await;
        let character = store
            .get_character(&name("Bran"))
            .await
            .unwrap()
            .expect("Bran should exist");
        assert_eq!(character.name.as_str(), "Bran");
        assert_eq!(character.level, 3);
        assert_eq!(character.hit_points, 20);
        assert_eq!(character.temp_hit_points, 0);
    }

    #[tokio::test]
    async fn missing_character_reads_as_none() {
        let store = seeded_store().await;
        assert!(store.get_character(&name("Grog")).await.unwrap().is_none());
        assert!(store.get_hit_points(&name("Grog")).await.unwrap().is_none());
        assert!(store.get_stats(&name("Grog")).await.unwrap().is_none());
        assert!(store.get_defenses(&name("Grog")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lookup_is_case_sensitive() {
        let store = seeded_store().await;
        assert!(store.get_character(&name("bran")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn defenses_come_back_in_row_order() {
        let store = seeded_store().await;
        let defenses = store.get_defenses(&name("Bran")).await.unwrap();
        assert_eq!(
            defenses,
            vec![
                DefenseEntry::new(DamageType::Fire, DefenseKind::Resistance),
                DefenseEntry::new(DamageType::Poison, DefenseKind::Immunity),
            ]
        );
    }

    #[tokio::test]
    async fn unrecognized_defense_rows_are_skipped() {
        let store = seeded_store().await;
        sqlx::query("INSERT INTO defenses (character_name, type, defense) VALUES (?, ?, ?)")
            .bind("Bran")
            .bind("ice")
            .bind("resistance")
            .execute(&store.pool)
            .await
            .unwrap();

        let defenses = store.get_defenses(&name("Bran")).await.unwrap();
        assert_eq!(
            defenses,
            vec![
                DefenseEntry::new(DamageType::Fire, DefenseKind::Resistance),
                DefenseEntry::new(DamageType::Poison, DefenseKind::Immunity),
            ]
        );
    }

    #[tokio::test]
    async fn update_applies_negative_delta() {
        let store = seeded_store().await;
        store
            .update_hit_points(&name("Bran"), -5, None)
            .await
            .unwrap();
        let state = store.get_hit_points(&name("Bran")).await.unwrap().unwrap();
        assert_eq!(state, HitPointState::new(15, 0));
    }

    #[tokio::test]
    async fn update_clamps_at_zero_floor() {
        let store = seeded_store().await;
        store
            .update_hit_points(&name("Bran"), -100, None)
            .await
            .unwrap();
        let state = store.get_hit_points(&name("Bran")).await.unwrap().unwrap();
        assert_eq!(state.hit_points, 0);
    }

    #[tokio::test]
    async fn healing_has_no_ceiling() {
        let store = seeded_store().await;
        store
            .update_hit_points(&name("Bran"), 1000, None)
            .await
            .unwrap();
        let state = store.get_hit_points(&name("Bran")).await.unwrap().unwrap();
        assert_eq!(state.hit_points, 1020);
    }

    #[tokio::test]
    async fn none_preserves_temp_and_some_replaces_it() {
        let store = seeded_store().await;
        store
            .update_hit_points(&name("Bran"), 0, Some(7))
            .await
            .unwrap();
        store
            .update_hit_points(&name("Bran"), -2, None)
            .await
            .unwrap();
        let state = store.get_hit_points(&name("Bran")).await.unwrap().unwrap();
        assert_eq!(state, HitPointState::new(18, 7));

        store
            .update_hit_points(&name("Bran"), 0, Some(0))
            .await
            .unwrap();
        let state = store.get_hit_points(&name("Bran")).await.unwrap().unwrap();
        assert_eq!(state.temp_hit_points, 0);
    }

    #[tokio::test]
    async fn update_on_missing_character_is_not_found() {
        let store = seeded_store().await;
        let err = store
            .update_hit_points(&name("Grog"), -5, None)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn temp_grant_is_monotonic() {
        let store = seeded_store().await;
        assert!(store
            .raise_temp_hit_points(&name("Bran"), 5)
            .await
            .unwrap());
        assert!(!store
            .raise_temp_hit_points(&name("Bran"), 3)
            .await
            .unwrap());
        assert!(!store
            .raise_temp_hit_points(&name("Bran"), 5)
            .await
            .unwrap());
        let state = store.get_hit_points(&name("Bran")).await.unwrap().unwrap();
        assert_eq!(state.temp_hit_points, 5);

        assert!(store
            .raise_temp_hit_points(&name("Bran"), 9)
            .await
            .unwrap());
        let state = store.get_hit_points(&name("Bran")).await.unwrap().unwrap();
        assert_eq!(state.temp_hit_points, 9);
    }

    #[tokio::test]
    async fn grant_on_missing_character_reports_no_effect() {
        let store = seeded_store().await;
        assert!(!store
            .raise_temp_hit_points(&name("Grog"), 5)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn classes_stats_and_items_round_trip() {
        let store = seeded_store().await;

        let classes = store.get_classes(&name("Bran")).await.unwrap();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, "fighter");
        assert_eq!(classes[0].hit_dice_value, 10);

        let stats = store.get_stats(&name("Bran")).await.unwrap().unwrap();
        assert_eq!(stats.strength, 14);
        assert_eq!(stats.charisma, 9);

        let items = store.get_items(&name("Bran")).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Cloak of Protection");
        let modifier = items[0].modifier.as_ref().expect("modifier should exist");
        assert_eq!(modifier.affected_value, "dexterity");
        assert_eq!(modifier.value, 1);
    }

    #[tokio::test]
    async fn item_without_modifier_maps_to_none() {
        let store = seeded_store().await;
        sqlx::query("INSERT INTO items (character_name, name) VALUES (?, ?)")
            .bind("Bran")
            .bind("Torch")
            .execute(&store.pool)
            .await
            .unwrap();

        let items = store.get_items(&name("Bran")).await.unwrap();
        let torch = items
            .iter()
            .find(|item| item.name == "Torch")
            .expect("Torch should be listed");
        assert!(torch.modifier.is_none());
    }

    #[tokio::test]
    async fn cleanup_removes_every_row() {
        let store = seeded_store().await;
        store.cleanup(&name("Bran")).await.unwrap();

        assert!(store.get_character(&name("Bran")).await.unwrap().is_none());
        assert!(store.get_classes(&name("Bran")).await.unwrap().is_empty());
        assert!(store.get_stats(&name("Bran")).await.unwrap().is_none());
        assert!(store.get_items(&name("Bran")).await.unwrap().is_empty());
        assert!(store.get_defenses(&name("Bran")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_populate_is_rejected() {
        let store = seeded_store().await;
        let result = store.populate(&bran_sheet()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn connect_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("characters.db");
        let db_path = db_path.to_str().unwrap();

        let store = SqliteCharacterStore::connect(db_path)
            .await
            .expect("connect should create the file");
        store.populate(&bran_sheet()).await.unwrap();

        assert!(std::path::Path::new(db_path).exists());
    }
}
