//! Chartable - 角色表 REST API 服务入口

use std::sync::Arc;

use chartable::application::CharacterRepositoryPort;
use chartable::config::{load_config, print_config, AppConfig, DatabaseBackend};
use chartable::infrastructure::http::{AppState, HttpServer, ServerConfig};
use chartable::infrastructure::memory::InMemoryCharacterRepository;
use chartable::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteCharacterRepository,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},chartable={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn build_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn CharacterRepositoryPort>> {
    match config.database.backend {
        DatabaseBackend::Memory => {
            tracing::warn!("Using in-memory storage, characters are lost on restart");
            Ok(Arc::new(InMemoryCharacterRepository::new()))
        }
        DatabaseBackend::Sqlite => {
            // 确保数据目录存在
            if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            let db_config = DatabaseConfig {
                database_url: config.database.database_url(),
                max_connections: config.database.max_connections,
            };
            let pool = create_pool(&db_config).await?;
            run_migrations(&pool).await?;

            Ok(Arc::new(SqliteCharacterRepository::new(pool)))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Chartable - character table API v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    let character_repo = build_repository(&config).await?;

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_body_limit(config.server.body_limit_bytes);
    let server = HttpServer::new(server_config, AppState::new(character_repo));

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("Received shutdown signal"),
                Err(e) => {
                    // 无法监听信号时不主动退出
                    tracing::error!(error = %e, "Failed to listen for ctrl-c");
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
