use async_trait::async_trait;
use axum::http::StatusCode;
use contracts::domain::common::Resource;
use reqwest::{Method, RequestBuilder};
use serde_json::Value;
use std::time::Duration;

use super::{ApiError, DataService};

/// HTTP-клиент удалённого API ОСББ
///
/// Запросы уходят на `{base_url}/{resource}[/{id}]`; при наличии токена
/// добавляется `Authorization: Bearer <token>`.
pub struct UpstreamService {
    client: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
}

impl UpstreamService {
    pub fn new(
        base_url: &str,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.filter(|t| !t.trim().is_empty()),
        })
    }

    fn url(&self, resource: Resource, id: Option<&str>) -> String {
        match id {
            Some(id) => format!(
                "{}/{}/{}",
                self.base_url,
                resource.path(),
                urlencoding::encode(id)
            ),
            None => format!("{}/{}", self.base_url, resource.path()),
        }
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, url)
            .header("Accept", "application/json");
        match &self.access_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Отправляет запрос и разбирает JSON-ответ. Пустое тело даёт `Value::Null`.
    async fn send(&self, builder: RequestBuilder, context: &str) -> Result<Value, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("Upstream {} failed with {}: {}", context, status, body);
            return Err(ApiError::Upstream {
                status: StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY),
                message: upstream_message(&body, status.canonical_reason()),
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Upstream {} returned invalid JSON: {}", context, e);
            ApiError::Upstream {
                status: StatusCode::BAD_GATEWAY,
                message: format!("invalid JSON: {}", e),
            }
        })
    }
}

/// Текст ошибки удалённого API: поле `error`/`message` JSON-тела или само тело
fn upstream_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["error", "message"] {
            if let Some(text) = value.get(key).and_then(Value::as_str) {
                return text.to_string();
            }
        }
    }
    let body = body.trim();
    if body.is_empty() {
        reason.unwrap_or("no response body").to_string()
    } else {
        body.chars().take(200).collect()
    }
}

#[async_trait]
impl DataService for UpstreamService {
    async fn list(&self, resource: Resource) -> Result<Vec<Value>, ApiError> {
        let url = self.url(resource, None);
        tracing::debug!("GET {}", url);
        match self.send(self.request(Method::GET, &url), resource.path()).await? {
            Value::Array(records) => Ok(records),
            Value::Null => Ok(Vec::new()),
            other => Err(ApiError::Upstream {
                status: StatusCode::BAD_GATEWAY,
                message: format!("expected an array of {}, got {}", resource, kind(&other)),
            }),
        }
    }

    async fn get(&self, resource: Resource, id: &str) -> Result<Value, ApiError> {
        let url = self.url(resource, Some(id));
        tracing::debug!("GET {}", url);
        match self.send(self.request(Method::GET, &url), resource.path()).await? {
            Value::Null => Err(ApiError::NotFound {
                resource,
                id: id.to_string(),
            }),
            record => Ok(record),
        }
    }

    async fn create(&self, resource: Resource, record: Value) -> Result<Value, ApiError> {
        let url = self.url(resource, None);
        tracing::info!("POST {}", url);
        let builder = self.request(Method::POST, &url).json(&record);
        match self.send(builder, resource.path()).await? {
            Value::Null => Ok(record),
            created => Ok(created),
        }
    }

    async fn update(&self, resource: Resource, id: &str, record: Value) -> Result<Value, ApiError> {
        let url = self.url(resource, Some(id));
        tracing::info!("PUT {}", url);
        let builder = self.request(Method::PUT, &url).json(&record);
        match self.send(builder, resource.path()).await? {
            Value::Null => Ok(record),
            updated => Ok(updated),
        }
    }

    async fn delete(&self, resource: Resource, id: &str) -> Result<(), ApiError> {
        let url = self.url(resource, Some(id));
        tracing::info!("DELETE {}", url);
        self.send(self.request(Method::DELETE, &url), resource.path())
            .await
            .map(|_| ())
    }

    fn name(&self) -> &'static str {
        "upstream"
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(token: Option<&str>) -> UpstreamService {
        UpstreamService::new(
            "https://api.example.org/v1/",
            token.map(str::to_string),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_url_building() {
        let service = service(None);
        assert_eq!(
            service.url(Resource::Buildings, None),
            "https://api.example.org/v1/buildings"
        );
        assert_eq!(
            service.url(Resource::Votes, Some("a b/c")),
            "https://api.example.org/v1/votes/a%20b%2Fc"
        );
    }

    #[test]
    fn test_bearer_header() {
        let with_token = service(Some("secret"));
        let request = with_token
            .request(Method::GET, "https://api.example.org/v1/polls")
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer secret"
        );

        let without = service(Some("  "));
        let request = without
            .request(Method::GET, "https://api.example.org/v1/polls")
            .build()
            .unwrap();
        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn test_upstream_message() {
        assert_eq!(
            upstream_message(r#"{"error":"Unauthorized"}"#, None),
            "Unauthorized"
        );
        assert_eq!(
            upstream_message(r#"{"message":"Apartment not found"}"#, None),
            "Apartment not found"
        );
        assert_eq!(upstream_message("", Some("Bad Gateway")), "Bad Gateway");
        assert_eq!(upstream_message("plain failure", None), "plain failure");
    }
}
