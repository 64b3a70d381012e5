use serde::{Deserialize, Serialize};

use crate::domain::common::record::{full_name, require};
use crate::domain::common::{Record, Resource};
use crate::enums::{Currency, EmployeeType, Gender};

/// Сотрудник объединения
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub first_name: String,
    pub second_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub salary: f64,
    #[serde(rename = "type", default)]
    pub employee_type: EmployeeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl Record for Employee {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        full_name(
            &self.second_name,
            &self.first_name,
            self.middle_name.as_deref(),
        )
    }

    fn search_text(&self) -> String {
        format!(
            "{} {}",
            self.title(),
            self.phone_number.as_deref().unwrap_or("")
        )
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.first_name, "Имя не может быть пустым")?;
        require(&self.second_name, "Фамилия не может быть пустой")?;
        if self.salary < 0.0 {
            return Err("Зарплата не может быть отрицательной".into());
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn resource() -> Resource {
        Resource::Employees
    }

    fn element_name() -> &'static str {
        "Сотрудник"
    }

    fn list_name() -> &'static str {
        "Сотрудники"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize() {
        let json = r#"{
            "id": "e1",
            "firstName": "Іван",
            "secondName": "Франко",
            "middleName": "Якович",
            "gender": 1,
            "currency": 2,
            "salary": 15000,
            "type": 2
        }"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.title(), "Франко Іван Якович");
        assert_eq!(employee.currency, Currency::Uah);
        assert_eq!(employee.employee_type, EmployeeType::Entrepreneur);
        assert!(employee.validate().is_ok());
    }
}
