use serde::{Deserialize, Serialize};

use crate::domain::common::record::require;
use crate::domain::common::{Record, Resource};
use crate::enums::ServiceType;

/// Лицевой счёт квартиры по одной услуге
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub apartment_id: String,
    pub account_number: String,
    #[serde(rename = "type", default)]
    pub service_type: ServiceType,
    #[serde(default)]
    pub balance: f64,
}

impl Account {
    pub fn is_in_debt(&self) -> bool {
        self.balance < 0.0
    }
}

impl Record for Account {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.account_number.clone()
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.account_number, self.service_type.label())
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.apartment_id, "Не выбрана квартира")?;
        require(&self.account_number, "Номер счёта не может быть пустым")
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn resource() -> Resource {
        Resource::Accounts
    }

    fn element_name() -> &'static str {
        "Лицевой счёт"
    }

    fn list_name() -> &'static str {
        "Лицевые счета"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_on_wire() {
        let json = r#"{"id":"acc1","apartmentId":"ap1","accountNumber":"0012","type":2,"balance":-150.25}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.service_type, ServiceType::WaterSupply);
        assert!(account.is_in_debt());

        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value["type"], 2);
        assert!(value.get("serviceType").is_none());
    }

    #[test]
    fn test_unknown_service_code_rejected() {
        let json = r#"{"apartmentId":"ap1","accountNumber":"0012","type":42,"balance":0}"#;
        assert!(serde_json::from_str::<Account>(json).is_err());
    }
}
