use crate::shared::api_client;
use contracts::domain::a002_apartment::Apartment;
use contracts::domain::a003_person::Person;

pub async fn fetch_by_id(id: &str) -> Result<Person, String> {
    api_client::get::<Person>(id).await
}

pub async fn fetch_apartments() -> Result<Vec<Apartment>, String> {
    api_client::list::<Apartment>().await
}

pub async fn save_person(person: Person) -> Result<Person, String> {
    api_client::save(&person).await
}
