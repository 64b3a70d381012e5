use serde::{Deserialize, Serialize};

use crate::domain::common::record::require;
use crate::domain::common::{Record, Resource};

/// Платёж с банковского счёта объединения
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrangement {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub payment_id: String,
    pub arrangement_number: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Получатель
    #[serde(default)]
    pub iban: String,
    #[serde(default)]
    pub sort_code: String,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub time: String,
}

impl Record for Arrangement {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        format!("{} {}", self.arrangement_number, self.title)
    }

    fn sort_key(&self) -> String {
        self.time.clone()
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.payment_id, "Не выбран банковский счёт")?;
        require(&self.arrangement_number, "Номер платежа не может быть пустым")?;
        if self.total <= 0.0 {
            return Err("Сумма платежа должна быть больше нуля".into());
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a010"
    }

    fn resource() -> Resource {
        Resource::Arrangements
    }

    fn element_name() -> &'static str {
        "Платёж"
    }

    fn list_name() -> &'static str {
        "Платежи"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_total() {
        let mut arrangement = Arrangement {
            payment_id: "p1".into(),
            arrangement_number: "42".into(),
            title: "Электроэнергия".into(),
            ..Default::default()
        };
        assert!(arrangement.validate().is_err());
        arrangement.total = 1200.0;
        assert!(arrangement.validate().is_ok());
        assert_eq!(arrangement.title(), "42 Электроэнергия");
    }
}
