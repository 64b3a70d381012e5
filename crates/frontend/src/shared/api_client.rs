//! CRUD-клиент коллекций `/api/{collection}` поверх gloo-net.
//!
//! Все функции обобщены по `T: Record`: путь коллекции берётся из
//! `Record::collection_name()`. Ошибки возвращаются строкой для баннера.

use super::api_utils::{api_path, api_url};
use contracts::domain::common::Record;
use gloo_net::http::{Request, Response};
use serde_json::Value;

fn collection_url<T: Record>() -> String {
    api_url(&api_path(T::collection_name(), None))
}

fn record_url<T: Record>(id: &str) -> String {
    api_url(&api_path(T::collection_name(), Some(id)))
}

/// Текст ошибки из ответа шлюза `{"error": "..."}`
fn error_text(status: u16, body: &str) -> String {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string));
    match message {
        Some(message) => format!("HTTP error: {} ({})", status, message),
        None => format!("HTTP error: {}", status),
    }
}

async fn check(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(error_text(status, &body))
}

async fn parse<T: Record>(response: Response) -> Result<T, String> {
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Источник данных шлюза из `GET /health` ("memory" или "upstream")
pub async fn data_source() -> Result<String, String> {
    let response = Request::get(&api_url("/health"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    let body: Value = check(response)
        .await?
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(body
        .get("source")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string())
}

/// Все записи коллекции
pub async fn list<T: Record>() -> Result<Vec<T>, String> {
    let response = Request::get(&collection_url::<T>())
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    let response = check(response).await?;

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get<T: Record>(id: &str) -> Result<T, String> {
    let response = Request::get(&record_url::<T>(id))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    parse(check(response).await?).await
}

/// Создать запись; сервер назначает `id`
pub async fn create<T: Record>(record: &T) -> Result<T, String> {
    let response = Request::post(&collection_url::<T>())
        .json(record)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    parse(check(response).await?).await
}

pub async fn update<T: Record>(record: &T) -> Result<T, String> {
    let response = Request::put(&record_url::<T>(record.id()))
        .json(record)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    parse(check(response).await?).await
}

pub async fn delete<T: Record>(id: &str) -> Result<(), String> {
    let response = Request::delete(&record_url::<T>(id))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    check(response).await.map(|_| ())
}

/// Проверить запись и отправить: POST для новой, PUT для существующей
pub async fn save<T: Record>(record: &T) -> Result<T, String> {
    record.validate()?;
    if record.id().is_empty() {
        create(record).await
    } else {
        update(record).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_text() {
        assert_eq!(
            error_text(404, r#"{"error":"tools/t1 not found"}"#),
            "HTTP error: 404 (tools/t1 not found)"
        );
        assert_eq!(error_text(502, "<html>"), "HTTP error: 502");
        assert_eq!(error_text(500, ""), "HTTP error: 500");
    }
}
