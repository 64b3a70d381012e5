use async_trait::async_trait;
use contracts::domain::common::Resource;
use serde_json::Value;

use super::ApiError;

/// Источник данных для `/api/:resource`
///
/// Записи передаются как JSON: шлюз не меняет их форму, типизированная
/// проверка выполняется до вызова `create`/`update`.
#[async_trait]
pub trait DataService: Send + Sync {
    // ============================================================================
    // Чтение
    // ============================================================================

    /// Все записи коллекции в порядке источника
    async fn list(&self, resource: Resource) -> Result<Vec<Value>, ApiError>;

    async fn get(&self, resource: Resource, id: &str) -> Result<Value, ApiError>;

    // ============================================================================
    // Запись
    // ============================================================================

    /// Создать запись; возвращает её с назначенным `id`
    async fn create(&self, resource: Resource, record: Value) -> Result<Value, ApiError>;

    async fn update(&self, resource: Resource, id: &str, record: Value) -> Result<Value, ApiError>;

    async fn delete(&self, resource: Resource, id: &str) -> Result<(), ApiError>;

    // ============================================================================
    // Метаданные
    // ============================================================================

    /// Имя источника для логов и `/health`
    fn name(&self) -> &'static str;
}
