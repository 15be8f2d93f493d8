//! SQLite Character Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{CharacterRepositoryPort, RepositoryError};
use crate::domain::{Attribute, Character, CharacterAttributes, CharacterId, Magnitude};

const SELECT_COLUMNS: &str =
    "SELECT id, name, height, mass, hair_color, skin_color, eye_color, birth_year FROM characters";

/// SQLite Character Repository
pub struct SqliteCharacterRepository {
    pool: DbPool,
}

impl SqliteCharacterRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CharacterRow {
    id: i64,
    name: String,
    height: i64,
    mass: i64,
    hair_color: String,
    skin_color: String,
    eye_color: String,
    birth_year: i64,
}

fn corrupt(column: &str, reason: &str) -> RepositoryError {
    RepositoryError::SerializationError(format!("column {}: {}", column, reason))
}

impl TryFrom<CharacterRow> for Character {
    type Error = RepositoryError;

    fn try_from(row: CharacterRow) -> Result<Self, Self::Error> {
        let text = |column: &str, value: String| {
            Attribute::new(value).map_err(|reason| corrupt(column, reason))
        };
        let magnitude = |column: &str, value: i64| {
            Magnitude::new(value).map_err(|reason| corrupt(column, reason))
        };

        Ok(Character::new(
            CharacterId::new(row.id),
            CharacterAttributes {
                name: text("name", row.name)?,
                height: magnitude("height", row.height)?,
                mass: magnitude("mass", row.mass)?,
                hair_color: text("hair_color", row.hair_color)?,
                skin_color: text("skin_color", row.skin_color)?,
                eye_color: text("eye_color", row.eye_color)?,
                birth_year: magnitude("birth_year", row.birth_year)?,
            },
        ))
    }
}

fn map_insert_error(id: CharacterId, err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::Duplicate(format!("character {}", id))
        }
        _ => RepositoryError::DatabaseError(err.to_string()),
    }
}

#[async_trait]
impl CharacterRepositoryPort for SqliteCharacterRepository {
    async fn insert(&self, character: &Character) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO characters
                (id, name, height, mass, hair_color, skin_color, eye_color, birth_year)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(character.id().as_i64())
        .bind(character.name().as_str())
        .bind(character.height().get())
        .bind(character.mass().get())
        .bind(character.hair_color().as_str())
        .bind(character.skin_color().as_str())
        .bind(character.eye_color().as_str())
        .bind(character.birth_year().get())
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(character.id(), e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: CharacterId) -> Result<Option<Character>, RepositoryError> {
        let row: Option<CharacterRow> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(Character::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Character>, RepositoryError> {
        let rows: Vec<CharacterRow> = sqlx::query_as(&format!("{} ORDER BY id", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Character::try_from).collect()
    }

    async fn delete(&self, id: CharacterId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM characters WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM characters")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        usize::try_from(count).map_err(|e| RepositoryError::SerializationError(e.to_string()))
    }
}
