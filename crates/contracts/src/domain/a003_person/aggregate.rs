use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::record::{full_name, require};
use crate::domain::common::{Record, Resource};
use crate::enums::Gender;
use crate::shared::format::{calculate_age, parse_iso_date};

/// Собственник или жилец квартиры
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub apartment_id: String,
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
    /// Дата регистрации права собственности
    #[serde(default)]
    pub date: String,
    /// Доля собственности, %
    #[serde(default)]
    pub ownership_percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl Person {
    /// Полных лет на дату `today`
    pub fn age(&self, today: NaiveDate) -> Option<u32> {
        self.date_of_birth
            .as_deref()
            .and_then(parse_iso_date)
            .map(|birth| calculate_age(birth, today))
    }
}

impl Record for Person {
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
            "{} {} {}",
            self.title(),
            self.phone_number.as_deref().unwrap_or(""),
            self.email.as_deref().unwrap_or("")
        )
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.apartment_id, "Не выбрана квартира")?;
        require(&self.first_name, "Имя не может быть пустым")?;
        require(&self.second_name, "Фамилия не может быть пустой")?;
        if !(0.0..=100.0).contains(&self.ownership_percentage) {
            return Err("Доля собственности должна быть от 0 до 100%".into());
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn resource() -> Resource {
        Resource::Persons
    }

    fn element_name() -> &'static str {
        "Собственник"
    }

    fn list_name() -> &'static str {
        "Собственники"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> Person {
        Person {
            apartment_id: "ap1".into(),
            first_name: "Леся".into(),
            second_name: "Українка".into(),
            date_of_birth: Some("1971-02-25T00:00:00Z".into()),
            ownership_percentage: 50.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_title_and_age() {
        let person = person();
        assert_eq!(person.title(), "Українка Леся");
        let today = NaiveDate::from_ymd_opt(2026, 2, 24).unwrap();
        assert_eq!(person.age(today), Some(54));
        let today = NaiveDate::from_ymd_opt(2026, 2, 25).unwrap();
        assert_eq!(person.age(today), Some(55));
    }

    #[test]
    fn test_validate_ownership() {
        let mut person = person();
        assert!(person.validate().is_ok());
        person.ownership_percentage = 120.0;
        assert!(person.validate().is_err());
    }

    #[test]
    fn test_gender_code_on_wire() {
        let mut person = person();
        person.gender = Gender::Female;
        let value = serde_json::to_value(&person).unwrap();
        assert_eq!(value["gender"], 2);
        assert_eq!(value["secondName"], "Українка");
        assert!(value.get("middleName").is_none());
    }
}
