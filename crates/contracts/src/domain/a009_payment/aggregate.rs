use serde::{Deserialize, Serialize};

use crate::domain::common::record::require;
use crate::domain::common::{Record, Resource};
use crate::enums::{Currency, PaymentType};

/// Банковский счёт объединения
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub community_id: String,
    pub title: String,
    #[serde(rename = "type", default)]
    pub payment_type: PaymentType,
    pub iban: String,
    #[serde(default)]
    pub sort_code: String,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl Record for Payment {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.title, self.iban)
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.title, "Название не может быть пустым")?;
        require(&self.iban, "IBAN не может быть пустым")?;
        let compact: String = self.iban.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.len() < 15 || !compact.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err("IBAN должен содержать не менее 15 латинских букв и цифр".into());
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn resource() -> Resource {
        Resource::Payments
    }

    fn element_name() -> &'static str {
        "Банковский счёт"
    }

    fn list_name() -> &'static str {
        "Банковские счета"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_iban() {
        let mut payment = Payment {
            title: "Ремонтный фонд".into(),
            payment_type: PaymentType::Savings,
            iban: "UA21 3223 1300 0002 6007 2335 6600 1".into(),
            ..Default::default()
        };
        assert!(payment.validate().is_ok());
        payment.iban = "UA21".into();
        assert!(payment.validate().is_err());
        payment.iban = "UA21-3223-1300-0002-6007".into();
        assert!(payment.validate().is_err());
    }

    #[test]
    fn test_search_by_iban() {
        let payment = Payment {
            title: "Текущий".into(),
            iban: "UA213223130000026007233566001".into(),
            ..Default::default()
        };
        assert!(crate::shared::search::matches(&payment.search_text(), "ua2132"));
    }
}
