//! In-Memory Character Repository Implementation

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::application::ports::{CharacterRepositoryPort, RepositoryError};
use crate::domain::{Character, CharacterId};

/// 内存角色仓储（进程退出即丢失）
pub struct InMemoryCharacterRepository {
    characters: DashMap<CharacterId, Character>,
}

impl InMemoryCharacterRepository {
    pub fn new() -> Self {
        Self {
            characters: DashMap::new(),
        }
    }
}

impl Default for InMemoryCharacterRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CharacterRepositoryPort for InMemoryCharacterRepository {
    async fn insert(&self, character: &Character) -> Result<(), RepositoryError> {
        match self.characters.entry(character.id()) {
            Entry::Occupied(_) => Err(RepositoryError::Duplicate(format!(
                "character {}",
                character.id()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(character.clone());
                Ok(())
            }
        }
    }

    async fn find_by_id(&self, id: CharacterId) -> Result<Option<Character>, RepositoryError> {
        Ok(self.characters.get(&id).map(|c| c.clone()))
    }

    async fn find_all(&self) -> Result<Vec<Character>, RepositoryError> {
        let mut characters: Vec<Character> =
            self.characters.iter().map(|c| c.value().clone()).collect();
        characters.sort_by_key(Character::id);
        Ok(characters)
    }

    async fn delete(&self, id: CharacterId) -> Result<bool, RepositoryError> {
        Ok(self.characters.remove(&id).is_some())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.characters.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Attribute, CharacterAttributes, Magnitude};

    fn character(id: i64) -> Character {
        Character::new(
            CharacterId::new(id),
            CharacterAttributes {
                name: Attribute::new("R2-D2").unwrap(),
                height: Magnitude::new(96).unwrap(),
                mass: Magnitude::new(32).unwrap(),
                hair_color: Attribute::new("n/a").unwrap(),
                skin_color: Attribute::new("white, blue").unwrap(),
                eye_color: Attribute::new("red").unwrap(),
                birth_year: Magnitude::new(33).unwrap(),
            },
        )
    }

    #[tokio::test]
    async fn test_insert_duplicate() {
        let repo = InMemoryCharacterRepository::new();
        repo.insert(&character(1)).await.unwrap();

        let err = repo.insert(&character(1)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Duplicate(_)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_all_sorted() {
        let repo = InMemoryCharacterRepository::new();
        for id in [10, -2, 4] {
            repo.insert(&character(id)).await.unwrap();
        }

        let ids: Vec<i64> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|c| c.id().as_i64())
            .collect();
        assert_eq!(ids, vec![-2, 4, 10]);
    }

    #[tokio::test]
    async fn test_delete_reports_removal() {
        let repo = InMemoryCharacterRepository::new();
        repo.insert(&character(7)).await.unwrap();

        assert!(repo.delete(CharacterId::new(7)).await.unwrap());
        assert!(!repo.delete(CharacterId::new(7)).await.unwrap());
        assert!(repo.find_by_id(CharacterId::new(7)).await.unwrap().is_none());
    }
}
