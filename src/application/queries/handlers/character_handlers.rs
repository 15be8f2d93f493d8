//! Character Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::CharacterRepositoryPort;
use crate::application::queries::{GetCharacter, ListCharacters};
use crate::domain::{Character, CharacterSummary};

/// GetCharacter Handler
pub struct GetCharacterHandler {
    character_repo: Arc<dyn CharacterRepositoryPort>,
}

impl GetCharacterHandler {
    pub fn new(character_repo: Arc<dyn CharacterRepositoryPort>) -> Self {
        Self { character_repo }
    }

    pub async fn handle(&self, query: GetCharacter) -> Result<Character, ApplicationError> {
        self.character_repo
            .find_by_id(query.character_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Character", query.character_id))
    }
}

/// ListCharacters Handler
pub struct ListCharactersHandler {
    character_repo: Arc<dyn CharacterRepositoryPort>,
}

impl ListCharactersHandler {
    pub fn new(character_repo: Arc<dyn CharacterRepositoryPort>) -> Self {
        Self { character_repo }
    }

    pub async fn handle(
        &self,
        _query: ListCharacters,
    ) -> Result<Vec<CharacterSummary>, ApplicationError> {
        let characters = self.character_repo.find_all().await?;
        Ok(characters.iter().map(Character::summary).collect())
    }
}
