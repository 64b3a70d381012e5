use crate::shared::api_client;
use contracts::domain::a002_apartment::Apartment;
use contracts::domain::a004_account::Account;

pub async fn fetch_by_id(id: &str) -> Result<Account, String> {
    api_client::get::<Account>(id).await
}

pub async fn fetch_apartments() -> Result<Vec<Apartment>, String> {
    api_client::list::<Apartment>().await
}

pub async fn save_account(account: Account) -> Result<Account, String> {
    api_client::save(&account).await
}
