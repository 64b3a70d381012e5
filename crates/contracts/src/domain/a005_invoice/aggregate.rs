use serde::{Deserialize, Serialize};

use crate::domain::common::record::require;
use crate::domain::common::{Record, Resource};
use crate::enums::InvoiceType;
use crate::shared::calendar::YearMonth;
use crate::shared::format::{format_month, parse_iso_date};

/// Ежемесячный счёт по лицевому счёту
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub apartment_id: String,
    /// Расчётный месяц (ISO-8601, первое число)
    pub date: String,
    #[serde(rename = "type", default)]
    pub invoice_type: InvoiceType,
    pub account_number: String,
    /// Остаток на начало периода
    #[serde(default)]
    pub balance: f64,
    /// Показание счётчика
    #[serde(default)]
    pub indicator: f64,
    /// Тариф
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub payer: String,
    #[serde(default)]
    pub ownership_percentage: f64,
}

impl Invoice {
    /// Расчётный месяц счёта; `None`, если дата не разбирается
    pub fn period(&self) -> Option<YearMonth> {
        parse_iso_date(&self.date).map(YearMonth::from_date)
    }

    pub fn is_in_period(&self, period: YearMonth) -> bool {
        self.period() == Some(period)
    }
}

impl Record for Invoice {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        match self.period() {
            Some(period) => format!("{} за {}", self.account_number, format_month(period)),
            None => self.account_number.clone(),
        }
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.account_number, self.payer)
    }

    /// ISO-даты сравниваются по цифрам, поэтому сортировка хронологическая
    fn sort_key(&self) -> String {
        self.date.clone()
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.apartment_id, "Не выбрана квартира")?;
        require(&self.account_number, "Номер счёта не может быть пустым")?;
        if parse_iso_date(&self.date).is_none() {
            return Err("Некорректная дата счёта".into());
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn resource() -> Resource {
        Resource::Invoices
    }

    fn element_name() -> &'static str {
        "Счёт"
    }

    fn list_name() -> &'static str {
        "Счета"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::calendar::Month;
    use crate::shared::collation::{sort_by, SortDirection};

    fn invoice(date: &str) -> Invoice {
        Invoice {
            apartment_id: "ap1".into(),
            account_number: "0012".into(),
            date: date.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_period() {
        let invoice = invoice("2024-03-01T00:00:00Z");
        let march = YearMonth::new(2024, Month::new(2).unwrap());
        assert_eq!(invoice.period(), Some(march));
        assert!(invoice.is_in_period(march));
        assert!(!invoice.is_in_period(march.next()));
        assert_eq!(invoice.title(), "0012 за 03.24");
    }

    #[test]
    fn test_sort_by_date_is_chronological() {
        let mut rows = vec![
            invoice("2024-11-01T00:00:00Z"),
            invoice("2023-12-01T00:00:00Z"),
            invoice("2024-02-01T00:00:00Z"),
        ];
        sort_by(&mut rows, |i| i.sort_key(), SortDirection::Descending);
        assert_eq!(rows[0].date, "2024-11-01T00:00:00Z");
        assert_eq!(rows[2].date, "2023-12-01T00:00:00Z");
    }

    #[test]
    fn test_validate_date() {
        assert!(invoice("2024-01-01").validate().is_ok());
        assert!(invoice("січень").validate().is_err());
    }
}
