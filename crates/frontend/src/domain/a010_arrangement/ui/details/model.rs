use crate::shared::api_client;
use contracts::domain::a009_payment::Payment;
use contracts::domain::a010_arrangement::Arrangement;

pub async fn fetch_by_id(id: &str) -> Result<Arrangement, String> {
    api_client::get::<Arrangement>(id).await
}

pub async fn fetch_payments() -> Result<Vec<Payment>, String> {
    api_client::list::<Payment>().await
}

pub async fn save_arrangement(arrangement: Arrangement) -> Result<Arrangement, String> {
    api_client::save(&arrangement).await
}
