use serde::{Deserialize, Serialize};

use crate::domain::common::record::require;
use crate::domain::common::{Record, Resource};

/// Квартира в доме
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Apartment {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub building_id: String,
    pub apartment_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance_number: Option<i32>,
    /// Площадь, м²
    #[serde(default)]
    pub area: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl Record for Apartment {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        format!("№ {}", self.apartment_number)
    }

    fn search_text(&self) -> String {
        format!(
            "{} {}",
            self.apartment_number,
            self.phone_number.as_deref().unwrap_or("")
        )
    }

    /// Номер квартиры: натуральная сортировка даёт 2 < 10 < 10а
    fn sort_key(&self) -> String {
        self.apartment_number.clone()
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.building_id, "Не выбран дом")?;
        require(&self.apartment_number, "Номер квартиры не может быть пустым")
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn resource() -> Resource {
        Resource::Apartments
    }

    fn element_name() -> &'static str {
        "Квартира"
    }

    fn list_name() -> &'static str {
        "Квартиры"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::collation::{sort_by, SortDirection};

    fn apartment(number: &str) -> Apartment {
        Apartment {
            building_id: "b1".into(),
            apartment_number: number.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_sort_by_apartment_number() {
        let mut rows = vec![apartment("10"), apartment("2"), apartment("10а"), apartment("1")];
        sort_by(&mut rows, |a| a.sort_key(), SortDirection::Ascending);
        let numbers: Vec<&str> = rows.iter().map(|a| a.apartment_number.as_str()).collect();
        assert_eq!(numbers, vec!["1", "2", "10", "10а"]);
    }

    #[test]
    fn test_optional_fields() {
        let json = r#"{"id":"ap1","buildingId":"b1","apartmentNumber":"5","area":48.2,"floor":2}"#;
        let apartment: Apartment = serde_json::from_str(json).unwrap();
        assert_eq!(apartment.floor, Some(2));
        assert_eq!(apartment.entrance_number, None);
        assert_eq!(apartment.title(), "№ 5");
    }

    #[test]
    fn test_validate() {
        assert!(apartment("7").validate().is_ok());
        assert_eq!(
            Apartment::default().validate(),
            Err("Не выбран дом".to_string())
        );
    }
}
