use crate::shared::api_client;
use contracts::domain::a009_payment::Payment;

pub async fn fetch_by_id(id: &str) -> Result<Payment, String> {
    api_client::get::<Payment>(id).await
}

pub async fn save_payment(payment: Payment) -> Result<Payment, String> {
    api_client::save(&payment).await
}
