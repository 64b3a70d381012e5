use serde::{Deserialize, Serialize};

use crate::domain::common::record::require;
use crate::domain::common::{Record, Resource};
use crate::enums::ServiceType;

/// Тариф дома по одной услуге
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub building_id: String,
    #[serde(rename = "type", default)]
    pub service_type: ServiceType,
    /// Стоимость единицы услуги
    #[serde(default)]
    pub cost: f64,
}

impl Service {
    /// Начисление за период по показанию счётчика
    pub fn charge(&self, indicator: f64) -> f64 {
        self.cost * indicator
    }
}

impl Record for Service {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.service_type.label().to_string()
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.building_id, "Не выбран дом")?;
        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err("Тариф не может быть отрицательным".into());
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a014"
    }

    fn resource() -> Resource {
        Resource::Services
    }

    fn element_name() -> &'static str {
        "Услуга"
    }

    fn list_name() -> &'static str {
        "Услуги"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let json = r#"{"id":"s1","buildingId":"b1","type":3,"cost":4.32}"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.service_type, ServiceType::ElectricitySupply);
        assert_eq!(service.title(), "Электроснабжение");
        assert!((service.charge(100.0) - 432.0).abs() < 1e-9);

        let value = serde_json::to_value(&service).unwrap();
        assert_eq!(value["type"], 3);
        assert_eq!(value["buildingId"], "b1");
    }

    #[test]
    fn test_validate() {
        let mut service = Service {
            building_id: "b1".into(),
            cost: 12.5,
            ..Default::default()
        };
        assert!(service.validate().is_ok());
        service.cost = -1.0;
        assert!(service.validate().is_err());
        service.cost = 0.0;
        service.building_id.clear();
        assert_eq!(service.validate(), Err("Не выбран дом".to_string()));
    }
}
