//! Character Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateCharacter, DeleteCharacter};
use crate::application::error::ApplicationError;
use crate::application::ports::{CharacterRepositoryPort, RepositoryError};
use crate::domain::{Character, CharacterDraft, CharacterId};

const RESOURCE: &str = "Character";

// ============================================================================
// CreateCharacter
// ============================================================================

/// CreateCharacter Handler
pub struct CreateCharacterHandler {
    character_repo: Arc<dyn CharacterRepositoryPort>,
}

impl CreateCharacterHandler {
    pub fn new(character_repo: Arc<dyn CharacterRepositoryPort>) -> Self {
        Self { character_repo }
    }

    pub async fn handle(&self, command: CreateCharacter) -> Result<Character, ApplicationError> {
        let fields = command
            .payload
            .as_object()
            .ok_or_else(|| ApplicationError::invalid_payload("Request body must be a JSON object"))?;

        let character = CharacterDraft::from_json(fields)?;
        let id = character.id();

        if self.character_repo.find_by_id(id).await?.is_some() {
            return Err(ApplicationError::already_exists(RESOURCE, id));
        }

        // 两次请求并发插入同一 id 时，由唯一约束兜底
        match self.character_repo.insert(&character).await {
            Ok(()) => {}
            Err(RepositoryError::Duplicate(_)) => {
                return Err(ApplicationError::already_exists(RESOURCE, id));
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(
            character_id = %id,
            name = %character.name(),
            "Character created"
        );

        Ok(character)
    }
}

// ============================================================================
// DeleteCharacter
// ============================================================================

/// DeleteCharacter Handler
pub struct DeleteCharacterHandler {
    character_repo: Arc<dyn CharacterRepositoryPort>,
}

impl DeleteCharacterHandler {
    pub fn new(character_repo: Arc<dyn CharacterRepositoryPort>) -> Self {
        Self { character_repo }
    }

    pub async fn handle(&self, command: DeleteCharacter) -> Result<CharacterId, ApplicationError> {
        let character_id = command.character_id;

        if !self.character_repo.delete(character_id).await? {
            return Err(ApplicationError::not_found(RESOURCE, character_id));
        }

        tracing::info!(character_id = %character_id, "Character deleted");

        Ok(character_id)
    }
}
