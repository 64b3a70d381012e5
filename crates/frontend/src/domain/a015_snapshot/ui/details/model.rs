use crate::shared::api_client;
use contracts::domain::a001_building::Building;
use contracts::domain::a005_invoice::Invoice;
use contracts::domain::a015_snapshot::Snapshot;

pub async fn fetch_by_id(id: &str) -> Result<Snapshot, String> {
    api_client::get::<Snapshot>(id).await
}

pub async fn fetch_buildings() -> Result<Vec<Building>, String> {
    api_client::list::<Building>().await
}

pub async fn fetch_invoices() -> Result<Vec<Invoice>, String> {
    api_client::list::<Invoice>().await
}

pub async fn save_snapshot(snapshot: Snapshot) -> Result<Snapshot, String> {
    api_client::save(&snapshot).await
}
