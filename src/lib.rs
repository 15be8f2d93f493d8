//! Chartable - 角色表 REST API
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Character Context: 角色属性值对象、聚合根、负载校验
//!
//! 应用层 (application/):
//! - Ports: CharacterRepositoryPort
//! - Commands: 创建、删除
//! - Queries: 详情、列表
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（axum）
//! - Persistence: SQLite 存储
//! - Memory: 内存仓储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use self::config::{load_config, AppConfig};
