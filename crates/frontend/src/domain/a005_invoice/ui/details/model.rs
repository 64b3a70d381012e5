use crate::shared::api_client;
use contracts::domain::a002_apartment::Apartment;
use contracts::domain::a005_invoice::Invoice;

pub async fn fetch_by_id(id: &str) -> Result<Invoice, String> {
    api_client::get::<Invoice>(id).await
}

pub async fn fetch_apartments() -> Result<Vec<Apartment>, String> {
    api_client::list::<Apartment>().await
}

pub async fn save_invoice(invoice: Invoice) -> Result<Invoice, String> {
    api_client::save(&invoice).await
}
