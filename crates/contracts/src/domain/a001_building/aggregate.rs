use serde::{Deserialize, Serialize};

use crate::domain::common::record::require;
use crate::domain::common::{Record, Resource};
use crate::enums::{Construction, Elevator, Heating, Parking, Territory, Wall, Warming};

// ============================================================================
// Record
// ============================================================================

/// Многоквартирный дом под управлением ОСББ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Реквизиты, на которые приходят платежи дома
    #[serde(default)]
    pub payment_id: String,

    pub legal_address: String,

    /// Год постройки
    #[serde(default)]
    pub built: i32,
    #[serde(default)]
    pub number_of_floors: i32,
    #[serde(default)]
    pub number_of_apartments: i32,

    /// Общая площадь, м²
    #[serde(default)]
    pub area: f64,
    /// Высота потолков, м
    #[serde(default)]
    pub ceiling_height: f64,

    #[serde(default)]
    pub heating: Heating,
    #[serde(default)]
    pub warming: Warming,
    #[serde(default)]
    pub construction: Construction,
    #[serde(default)]
    pub wall: Wall,
    #[serde(default)]
    pub territory: Territory,
    #[serde(default)]
    pub parking: Parking,
    #[serde(default)]
    pub elevator: Elevator,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl Building {
    /// Средняя площадь квартиры; `None` для дома без квартир
    pub fn average_apartment_area(&self) -> Option<f64> {
        (self.number_of_apartments > 0).then(|| self.area / self.number_of_apartments as f64)
    }
}

impl Record for Building {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.legal_address.clone()
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.legal_address, self.built)
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.legal_address, "Адрес не может быть пустым")?;
        if self.number_of_floors < 0 || self.number_of_apartments < 0 {
            return Err("Количество этажей и квартир не может быть отрицательным".into());
        }
        if self.area < 0.0 {
            return Err("Площадь не может быть отрицательной".into());
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn resource() -> Resource {
        Resource::Buildings
    }

    fn element_name() -> &'static str {
        "Дом"
    }

    fn list_name() -> &'static str {
        "Дома"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_payload() {
        let json = r#"{
            "id": "b1",
            "paymentId": "p1",
            "legalAddress": "вул. Шевченка, 12",
            "built": 1987,
            "numberOfFloors": 9,
            "numberOfApartments": 72,
            "area": 4320.5,
            "ceilingHeight": 2.6,
            "heating": 1,
            "warming": 0,
            "construction": 2,
            "wall": 0,
            "territory": 0,
            "parking": 0,
            "elevator": 0
        }"#;
        let building: Building = serde_json::from_str(json).unwrap();
        assert_eq!(building.id(), "b1");
        assert_eq!(building.heating, Heating::Centralized);
        assert_eq!(building.construction, Construction::Brick);
        assert_eq!(building.remark, None);
        assert_eq!(Building::full_name(), "a001_buildings");
    }

    #[test]
    fn test_new_record_omits_id() {
        let building = Building {
            legal_address: "вул. Лесі Українки, 3".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&building).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["legalAddress"], "вул. Лесі Українки, 3");
        assert_eq!(value["heating"], 0);
    }

    #[test]
    fn test_validate() {
        let mut building = Building::default();
        assert!(building.validate().is_err());
        building.legal_address = "вул. Січових Стрільців, 1".into();
        assert!(building.validate().is_ok());
        building.area = -1.0;
        assert!(building.validate().is_err());
    }

    #[test]
    fn test_average_apartment_area() {
        let building = Building {
            area: 1000.0,
            number_of_apartments: 20,
            ..Default::default()
        };
        assert_eq!(building.average_apartment_area(), Some(50.0));
        assert_eq!(Building::default().average_apartment_area(), None);
    }
}
