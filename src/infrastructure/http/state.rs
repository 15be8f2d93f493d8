//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateCharacterHandler, DeleteCharacterHandler,
    // Query handlers
    GetCharacterHandler, ListCharactersHandler,
    // Ports
    CharacterRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub character_repo: Arc<dyn CharacterRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_character_handler: CreateCharacterHandler,
    pub delete_character_handler: DeleteCharacterHandler,

    // ========== Query Handlers ==========
    pub get_character_handler: GetCharacterHandler,
    pub list_characters_handler: ListCharactersHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(character_repo: Arc<dyn CharacterRepositoryPort>) -> Self {
        Self {
            character_repo: character_repo.clone(),

            create_character_handler: CreateCharacterHandler::new(character_repo.clone()),
            delete_character_handler: DeleteCharacterHandler::new(character_repo.clone()),

            get_character_handler: GetCharacterHandler::new(character_repo.clone()),
            list_characters_handler: ListCharactersHandler::new(character_repo),
        }
    }
}
