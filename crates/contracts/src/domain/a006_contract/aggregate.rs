use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::record::require;
use crate::domain::common::{Record, Resource};
use crate::enums::ContractType;
use crate::shared::format::{parse_iso_date, to_iso_datetime};

// ============================================================================
// Record
// ============================================================================

/// Договор дома с подрядчиком или поставщиком
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub building_id: String,
    pub contract_number: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub contract_type: ContractType,
    /// Дата подписания (ISO-8601)
    #[serde(default)]
    pub date_of_signing: String,
}

impl Contract {
    /// Создать договор для отправки в API (id назначает сервер)
    pub fn new_for_insert(
        building_id: String,
        contract_number: String,
        title: String,
        contract_type: ContractType,
        date_of_signing: NaiveDate,
    ) -> Self {
        Self {
            id: String::new(),
            building_id,
            contract_number,
            title,
            description: String::new(),
            contract_type,
            date_of_signing: to_iso_datetime(date_of_signing),
        }
    }

    pub fn signed_on(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.date_of_signing)
    }

    /// Установить дату подписания из календаря
    pub fn set_signed_on(&mut self, date: NaiveDate) {
        self.date_of_signing = to_iso_datetime(date);
    }

    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }
}

impl Record for Contract {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.contract_number, self.title, self.description)
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.building_id, "Не выбран дом")?;
        require(&self.contract_number, "Номер договора не может быть пустым")?;
        require(&self.title, "Название не может быть пустым")?;
        if self.signed_on().is_none() {
            return Err("Укажите дату подписания".into());
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn resource() -> Resource {
        Resource::Contracts
    }

    fn element_name() -> &'static str {
        "Договор"
    }

    fn list_name() -> &'static str {
        "Договоры"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn test_new_for_insert() {
        let contract = Contract::new_for_insert(
            "b1".into(),
            "17/24".into(),
            "Вывоз мусора".into(),
            ContractType::Executive,
            signed(),
        );
        assert!(contract.is_new());
        assert_eq!(contract.date_of_signing, "2024-03-05T00:00:00Z");
        assert_eq!(contract.signed_on(), Some(signed()));
        assert!(contract.validate().is_ok());

        let value = serde_json::to_value(&contract).unwrap();
        assert_eq!(value["type"], 3);
        assert_eq!(value["dateOfSigning"], "2024-03-05T00:00:00Z");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_validate_requires_date() {
        let mut contract = Contract {
            building_id: "b1".into(),
            contract_number: "1".into(),
            title: "Уборка".into(),
            ..Default::default()
        };
        assert_eq!(contract.validate(), Err("Укажите дату подписания".to_string()));
        contract.set_signed_on(signed());
        assert!(contract.validate().is_ok());
    }
}
