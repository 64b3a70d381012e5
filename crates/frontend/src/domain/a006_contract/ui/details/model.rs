use crate::shared::api_client;
use contracts::domain::a001_building::Building;
use contracts::domain::a006_contract::Contract;

pub async fn fetch_by_id(id: &str) -> Result<Contract, String> {
    api_client::get::<Contract>(id).await
}

/// Дома для выбора стороны договора
pub async fn fetch_buildings() -> Result<Vec<Building>, String> {
    api_client::list::<Building>().await
}

pub async fn save_contract(contract: Contract) -> Result<Contract, String> {
    api_client::save(&contract).await
}
