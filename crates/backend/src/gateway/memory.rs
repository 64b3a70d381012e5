use async_trait::async_trait;
use contracts::domain::common::Resource;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ApiError, DataService};

/// Хранилище в памяти для работы без удалённого API
///
/// Коллекции хранят записи в порядке добавления. Данные теряются при
/// перезапуске.
#[derive(Default)]
pub struct MemoryService {
    collections: RwLock<HashMap<Resource, Vec<Value>>>,
}

impl MemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Загрузка начальных данных из JSON-объекта `{ "buildings": [...], ... }`
    ///
    /// Неизвестные коллекции пропускаются с предупреждением, записям без
    /// `id` назначается новый.
    pub fn from_fixtures(contents: &str) -> Result<Self, ApiError> {
        let root: Map<String, Value> = serde_json::from_str(contents)
            .map_err(|e| ApiError::Internal(format!("Invalid fixtures file: {}", e)))?;

        let mut collections = HashMap::new();
        for (name, records) in root {
            let Some(resource) = Resource::parse(&name) else {
                tracing::warn!("Fixtures: skipping unknown collection '{}'", name);
                continue;
            };
            let Value::Array(records) = records else {
                return Err(ApiError::Internal(format!(
                    "Fixtures: '{}' must be an array",
                    name
                )));
            };

            let records = records
                .into_iter()
                .map(|record| {
                    let mut object = into_object(record)
                        .map_err(|e| ApiError::Internal(format!("Fixtures: {}: {}", name, e)))?;
                    if record_id(&object).is_none() {
                        object.insert("id".into(), Value::String(new_id()));
                    }
                    Ok(Value::Object(object))
                })
                .collect::<Result<Vec<_>, ApiError>>()?;

            tracing::info!("Fixtures: loaded {} {}", records.len(), resource);
            collections.insert(resource, records);
        }

        Ok(Self {
            collections: RwLock::new(collections),
        })
    }

    pub fn from_fixtures_file(path: &Path) -> Result<Self, ApiError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ApiError::Internal(format!("Cannot read fixtures {}: {}", path.display(), e))
        })?;
        Self::from_fixtures(&contents)
    }

    pub async fn count(&self, resource: Resource) -> usize {
        self.collections
            .read()
            .await
            .get(&resource)
            .map_or(0, Vec::len)
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn into_object(record: Value) -> Result<Map<String, Value>, ApiError> {
    match record {
        Value::Object(object) => Ok(object),
        _ => Err(ApiError::BadRequest("record must be a JSON object".into())),
    }
}

fn record_id(object: &Map<String, Value>) -> Option<&str> {
    object
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
}

fn has_id(record: &Value, id: &str) -> bool {
    record.get("id").and_then(Value::as_str) == Some(id)
}

#[async_trait]
impl DataService for MemoryService {
    async fn list(&self, resource: Resource) -> Result<Vec<Value>, ApiError> {
        let collections = self.collections.read().await;
        Ok(collections.get(&resource).cloned().unwrap_or_default())
    }

    async fn get(&self, resource: Resource, id: &str) -> Result<Value, ApiError> {
        let collections = self.collections.read().await;
        collections
            .get(&resource)
            .and_then(|records| records.iter().find(|r| has_id(r, id)))
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                resource,
                id: id.to_string(),
            })
    }

    async fn create(&self, resource: Resource, record: Value) -> Result<Value, ApiError> {
        let mut object = into_object(record)?;
        let id = new_id();
        object.insert("id".into(), Value::String(id.clone()));
        let record = Value::Object(object);

        self.collections
            .write()
            .await
            .entry(resource)
            .or_default()
            .push(record.clone());

        tracing::info!("Created {} {}", resource, id);
        Ok(record)
    }

    async fn update(&self, resource: Resource, id: &str, record: Value) -> Result<Value, ApiError> {
        let mut object = into_object(record)?;
        object.insert("id".into(), Value::String(id.to_string()));
        let record = Value::Object(object);

        let mut collections = self.collections.write().await;
        let slot = collections
            .get_mut(&resource)
            .and_then(|records| records.iter_mut().find(|r| has_id(r, id)))
            .ok_or_else(|| ApiError::NotFound {
                resource,
                id: id.to_string(),
            })?;
        *slot = record.clone();

        tracing::info!("Updated {} {}", resource, id);
        Ok(record)
    }

    async fn delete(&self, resource: Resource, id: &str) -> Result<(), ApiError> {
        let mut collections = self.collections.write().await;
        let records = collections.get_mut(&resource);
        let position = records
            .as_ref()
            .and_then(|records| records.iter().position(|r| has_id(r, id)));

        match (records, position) {
            (Some(records), Some(index)) => {
                records.remove(index);
                tracing::info!("Deleted {} {}", resource, id);
                Ok(())
            }
            _ => Err(ApiError::NotFound {
                resource,
                id: id.to_string(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FIXTURES: &str = r#"{
        "buildings": [
            { "id": "b1", "legalAddress": "вул. Шевченка, 12" },
            { "legalAddress": "вул. Франка, 3" }
        ],
        "communities": [ { "id": "c1" } ]
    }"#;

    #[tokio::test]
    async fn test_fixtures_assign_missing_ids() {
        let store = MemoryService::from_fixtures(FIXTURES).unwrap();
        let buildings = store.list(Resource::Buildings).await.unwrap();
        assert_eq!(buildings.len(), 2);
        assert_eq!(buildings[0]["id"], "b1");
        assert!(!buildings[1]["id"].as_str().unwrap().is_empty());
        assert_eq!(store.count(Resource::Apartments).await, 0);
    }

    #[test]
    fn test_fixtures_reject_non_arrays() {
        assert!(MemoryService::from_fixtures(r#"{"buildings": {}}"#).is_err());
        assert!(MemoryService::from_fixtures("[]").is_err());
    }

    #[tokio::test]
    async fn test_crud_cycle() {
        let store = MemoryService::new();
        let created = store
            .create(Resource::Polls, json!({ "id": "client", "buildingId": "b1", "title": "Ремонт крыши" }))
            .await
            .unwrap();
        let id = created["id"].as_str().unwrap().to_string();
        assert_ne!(id, "client");

        let fetched = store.get(Resource::Polls, &id).await.unwrap();
        assert_eq!(fetched["title"], "Ремонт крыши");

        let updated = store
            .update(Resource::Polls, &id, json!({ "buildingId": "b1", "title": "Ремонт фасада" }))
            .await
            .unwrap();
        assert_eq!(updated["id"], id.as_str());
        assert_eq!(store.list(Resource::Polls).await.unwrap(), vec![updated]);

        store.delete(Resource::Polls, &id).await.unwrap();
        assert!(store.list(Resource::Polls).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        let store = MemoryService::from_fixtures(FIXTURES).unwrap();
        assert!(matches!(
            store.get(Resource::Buildings, "missing").await,
            Err(ApiError::NotFound { .. })
        ));
        assert!(matches!(
            store.update(Resource::Tools, "t1", json!({})).await,
            Err(ApiError::NotFound { .. })
        ));
        assert!(matches!(
            store.delete(Resource::Buildings, "missing").await,
            Err(ApiError::NotFound { .. })
        ));
        assert_eq!(store.count(Resource::Buildings).await, 2);
    }

    #[tokio::test]
    async fn test_non_object_body_rejected() {
        let store = MemoryService::new();
        assert!(matches!(
            store.create(Resource::Votes, json!([1, 2])).await,
            Err(ApiError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = MemoryService::new();
        for title in ["c", "a", "b"] {
            store
                .create(Resource::Publications, json!({ "title": title }))
                .await
                .unwrap();
        }
        let titles: Vec<String> = store
            .list(Resource::Publications)
            .await
            .unwrap()
            .iter()
            .map(|r| r["title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(titles, vec!["c", "a", "b"]);
    }
}
