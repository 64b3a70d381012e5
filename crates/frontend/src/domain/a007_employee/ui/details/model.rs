use crate::shared::api_client;
use contracts::domain::a007_employee::Employee;

pub async fn fetch_by_id(id: &str) -> Result<Employee, String> {
    api_client::get::<Employee>(id).await
}

pub async fn save_employee(employee: Employee) -> Result<Employee, String> {
    api_client::save(&employee).await
}
