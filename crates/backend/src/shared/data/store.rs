use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::time::Duration;

use crate::gateway::{ApiError, DataService, MemoryService, UpstreamService};
use crate::shared::config::{self, Config};

static DATA_SERVICE: OnceCell<Arc<dyn DataService>> = OnceCell::new();

/// Выбор источника данных по конфигурации: удалённый API, если задан
/// `upstream.base_url`, иначе хранилище в памяти с необязательными фикстурами.
pub fn build_service(config: &Config) -> anyhow::Result<Arc<dyn DataService>> {
    if let Some(base_url) = config.upstream.base_url() {
        if config.upstream.access_token.is_none() {
            tracing::warn!("Upstream access token is not set, requests go without Authorization");
        }
        let service = UpstreamService::new(
            base_url,
            config.upstream.access_token.clone(),
            Duration::from_secs(config.upstream.timeout_secs),
        )?;
        tracing::info!("Data source: upstream API at {}", base_url);
        return Ok(Arc::new(service));
    }

    let service = match config.store.fixtures.as_deref() {
        Some(fixtures) => {
            let path = config::resolve_path(fixtures);
            if path.exists() {
                tracing::info!("Data source: memory store seeded from {}", path.display());
                MemoryService::from_fixtures_file(&path)?
            } else {
                tracing::warn!("Fixtures not found at {}, starting empty", path.display());
                MemoryService::new()
            }
        }
        None => {
            tracing::info!("Data source: empty memory store");
            MemoryService::new()
        }
    };
    Ok(Arc::new(service))
}

pub fn initialize(config: &Config) -> anyhow::Result<()> {
    let service = build_service(config)?;
    DATA_SERVICE
        .set(service)
        .map_err(|_| anyhow::anyhow!("Data service is already initialized"))
}

pub fn get_service() -> Result<Arc<dyn DataService>, ApiError> {
    DATA_SERVICE
        .get()
        .cloned()
        .ok_or_else(|| ApiError::Internal("Data service is not initialized".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_without_upstream() {
        let mut config = Config::default();
        config.store.fixtures = Some("/nonexistent/fixtures.json".into());
        assert_eq!(build_service(&config).unwrap().name(), "memory");
    }

    #[test]
    fn test_upstream_when_base_url_set() {
        let mut config = Config::default();
        config.upstream.base_url = Some("https://api.example.org".into());
        assert_eq!(build_service(&config).unwrap().name(), "upstream");
    }
}
