use crate::shared::api_client;
use contracts::domain::a001_building::Building;
use contracts::domain::a009_payment::Payment;

pub async fn fetch_by_id(id: &str) -> Result<Building, String> {
    api_client::get::<Building>(id).await
}

/// Банковские счета, на которые могут приходить платежи дома
pub async fn fetch_payments() -> Result<Vec<Payment>, String> {
    api_client::list::<Payment>().await
}

pub async fn save_building(building: Building) -> Result<Building, String> {
    api_client::save(&building).await
}
