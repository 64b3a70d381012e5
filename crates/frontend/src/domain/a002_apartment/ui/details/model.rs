use crate::shared::api_client;
use contracts::domain::a001_building::Building;
use contracts::domain::a002_apartment::Apartment;

pub async fn fetch_by_id(id: &str) -> Result<Apartment, String> {
    api_client::get::<Apartment>(id).await
}

pub async fn fetch_buildings() -> Result<Vec<Building>, String> {
    api_client::list::<Building>().await
}

pub async fn save_apartment(apartment: Apartment) -> Result<Apartment, String> {
    api_client::save(&apartment).await
}
