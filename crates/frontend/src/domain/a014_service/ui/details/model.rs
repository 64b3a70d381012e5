use crate::shared::api_client;
use contracts::domain::a001_building::Building;
use contracts::domain::a014_service::Service;

pub async fn fetch_by_id(id: &str) -> Result<Service, String> {
    api_client::get::<Service>(id).await
}

pub async fn fetch_buildings() -> Result<Vec<Building>, String> {
    api_client::list::<Building>().await
}

pub async fn save_service(service: Service) -> Result<Service, String> {
    api_client::save(&service).await
}
