use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::record::require;
use crate::domain::common::{Record, Resource};
use crate::enums::Currency;
use crate::shared::format::{parse_iso_date, to_iso_datetime};

/// Инвентарь и оборудование на балансе дома
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub tool_number: String,
    pub title: String,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub date_of_purchase: String,
    #[serde(default)]
    pub date_of_expiry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl Tool {
    pub fn purchased_on(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.date_of_purchase)
    }

    pub fn expires_on(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.date_of_expiry)
    }

    pub fn set_purchased_on(&mut self, date: NaiveDate) {
        self.date_of_purchase = to_iso_datetime(date);
    }

    pub fn set_expires_on(&mut self, date: NaiveDate) {
        self.date_of_expiry = to_iso_datetime(date);
    }

    /// Срок службы истёк к дате `today`
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expires_on().is_some_and(|expiry| expiry < today)
    }

    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }
}

impl Record for Tool {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.tool_number, self.title)
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.tool_number, "Инвентарный номер не может быть пустым")?;
        require(&self.title, "Название не может быть пустым")?;
        match (self.purchased_on(), self.expires_on()) {
            (None, _) => Err("Укажите дату покупки".into()),
            (Some(purchase), Some(expiry)) if expiry < purchase => {
                Err("Срок службы не может закончиться до покупки".into())
            }
            _ => Ok(()),
        }
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn resource() -> Resource {
        Resource::Tools
    }

    fn element_name() -> &'static str {
        "Инвентарь"
    }

    fn list_name() -> &'static str {
        "Инвентарь"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tool() -> Tool {
        Tool {
            tool_number: "INV-7".into(),
            title: "Газонокосилка".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_dates_and_expiry() {
        let mut tool = tool();
        tool.set_purchased_on(date(2022, 5, 1));
        tool.set_expires_on(date(2025, 5, 1));
        assert!(tool.validate().is_ok());
        assert!(!tool.is_expired(date(2025, 5, 1)));
        assert!(tool.is_expired(date(2025, 5, 2)));
    }

    #[test]
    fn test_validate_date_order() {
        let mut tool = tool();
        assert_eq!(tool.validate(), Err("Укажите дату покупки".to_string()));
        tool.set_purchased_on(date(2024, 1, 10));
        tool.set_expires_on(date(2023, 1, 10));
        assert!(tool.validate().is_err());
        tool.date_of_expiry.clear();
        assert!(tool.validate().is_ok());
    }
}
