use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::common::Resource;
use serde_json::Value;

use crate::gateway::validation::validate_body;
use crate::gateway::ApiError;
use crate::shared::data::store;

fn parse_resource(name: &str) -> Result<Resource, ApiError> {
    Resource::parse(name).ok_or_else(|| ApiError::UnknownResource(name.to_string()))
}

fn parse_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    body.map(|Json(value)| value)
        .map_err(|e| ApiError::BadRequest(e.body_text()))
}

/// GET /api/:resource
pub async fn list(Path(resource): Path<String>) -> Result<Json<Vec<Value>>, ApiError> {
    let resource = parse_resource(&resource)?;
    let records = store::get_service()?.list(resource).await?;
    tracing::debug!("Listed {} {}", records.len(), resource);
    Ok(Json(records))
}

/// GET /api/:resource/:id
pub async fn get_by_id(
    Path((resource, id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let resource = parse_resource(&resource)?;
    let record = store::get_service()?.get(resource, &id).await?;
    Ok(Json(record))
}

/// POST /api/:resource
pub async fn create(
    Path(resource): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let resource = parse_resource(&resource)?;
    let body = parse_body(body)?;
    validate_body(resource, &body)?;

    let created = store::get_service()?.create(resource, body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/:resource/:id
pub async fn update(
    Path((resource, id)): Path<(String, String)>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let resource = parse_resource(&resource)?;
    let body = parse_body(body)?;
    validate_body(resource, &body)?;

    let updated = store::get_service()?.update(resource, &id, body).await?;
    Ok(Json(updated))
}

/// DELETE /api/:resource/:id
pub async fn delete(Path((resource, id)): Path<(String, String)>) -> Result<StatusCode, ApiError> {
    let resource = parse_resource(&resource)?;
    store::get_service()?.delete(resource, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resource() {
        assert_eq!(parse_resource("invoices").unwrap(), Resource::Invoices);
        assert!(matches!(
            parse_resource("flats"),
            Err(ApiError::UnknownResource(name)) if name == "flats"
        ));
    }
}
