use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::AppConfig;
use crate::services::websocket::ConnectionManager;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub type StartupResult<T> = Result<T, Box<dyn std::error::Error>>;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
    pub connections: Arc<ConnectionManager>,
}

/// 按名称构造缓存后端
async fn build_cache(name: &str) -> StartupResult<Arc<dyn ObjectCache>> {
    let constructor = get_object_cache_plugin(name)
        .ok_or_else(|| format!("Cache backend '{name}' not found in registry"))?;
    let cache = constructor().await.map_err(|e| e.to_string())?;
    Ok(Arc::from(cache))
}

/// 创建缓存实例，配置的后端不可用时回退到内存缓存
async fn create_cache() -> StartupResult<Arc<dyn ObjectCache>> {
    let cache_type = &AppConfig::get().cache.cache_type;

    warn!("Attempting to create {} cache backend", cache_type);

    match build_cache(cache_type).await {
        Ok(cache) => {
            warn!("Successfully created {} cache backend", cache_type);
            Ok(cache)
        }
        Err(e) if cache_type != "moka" => {
            warn!("Failed to create {} cache: {}", cache_type, e);
            warn!("Falling back to memory cache");
            let cache = build_cache("moka").await?;
            warn!("Successfully created fallback Moka (in-memory) cache backend");
            Ok(cache)
        }
        Err(e) => Err(format!("No cache backend available (tried: {cache_type}): {e}").into()),
    }
}

/// 准备服务器启动的上下文
/// 包括存储、缓存和实时连接表
pub async fn prepare_server_startup() -> StartupResult<StartupContext> {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
        debug!("Debug mode: Cache registry is enabled");
    }

    let storage = crate::storage::create_storage()
        .await
        .map_err(|e| format!("Failed to create storage backend: {e}"))?;
    warn!("Storage backend initialized and migrations completed");

    let cache = create_cache().await?;
    warn!("Cache backend initialized");

    let connections = Arc::new(ConnectionManager::new());

    Ok(StartupContext {
        storage,
        cache,
        connections,
    })
}
