use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a005_invoice::Invoice;
use crate::domain::common::record::require;
use crate::domain::common::{Record, Resource};
use crate::shared::calendar::YearMonth;
use crate::shared::format::{format_month, parse_iso_date, to_iso_datetime};

/// Расчётный период дома: месяц начислений и срок оплаты
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub building_id: String,
    /// Расчётный месяц (ISO-8601, первое число)
    pub date: String,
    #[serde(default)]
    pub pay_to_date: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl Snapshot {
    pub fn period(&self) -> Option<YearMonth> {
        parse_iso_date(&self.date).map(YearMonth::from_date)
    }

    pub fn pay_to(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.pay_to_date)
    }

    /// Расчётный месяц всегда хранится первым числом
    pub fn set_period(&mut self, period: YearMonth) {
        if let Some(first) = period.first_day() {
            self.date = to_iso_datetime(first);
        }
    }

    pub fn set_pay_to(&mut self, date: NaiveDate) {
        self.pay_to_date = to_iso_datetime(date);
    }

    /// Сумма к оплате за период: начисления плюс долг на начало периода
    pub fn amount(&self, invoices: &[Invoice]) -> f64 {
        let Some(period) = self.period() else {
            return 0.0;
        };
        invoices
            .iter()
            .filter(|invoice| invoice.is_in_period(period))
            .map(|invoice| invoice.total - invoice.balance)
            .sum()
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_completed && self.pay_to().is_some_and(|due| due < today)
    }
}

impl Record for Snapshot {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.period().map(format_month).unwrap_or_default()
    }

    fn sort_key(&self) -> String {
        self.date.clone()
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.building_id, "Не выбран дом")?;
        let Some(period) = self.period() else {
            return Err("Укажите расчётный месяц".into());
        };
        match self.pay_to() {
            None => Err("Укажите срок оплаты".into()),
            Some(due) if period.first_day().is_some_and(|first| due < first) => {
                Err("Срок оплаты не может быть раньше расчётного месяца".into())
            }
            Some(_) => Ok(()),
        }
    }

    fn aggregate_index() -> &'static str {
        "a015"
    }

    fn resource() -> Resource {
        Resource::Snapshots
    }

    fn element_name() -> &'static str {
        "Расчётный период"
    }

    fn list_name() -> &'static str {
        "Расчётные периоды"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::calendar::Month;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snapshot() -> Snapshot {
        let mut snapshot = Snapshot {
            building_id: "b1".into(),
            ..Default::default()
        };
        snapshot.set_period(YearMonth::new(2024, Month::FEBRUARY));
        snapshot.set_pay_to(date(2024, 3, 20));
        snapshot
    }

    fn invoice(date: &str, total: f64, balance: f64) -> Invoice {
        Invoice {
            date: date.into(),
            total,
            balance,
            ..Default::default()
        }
    }

    #[test]
    fn test_amount_sums_period_invoices() {
        let invoices = vec![
            invoice("2024-02-01T00:00:00.000Z", 300.0, -50.0),
            invoice("2024-02-01T00:00:00.000Z", 120.0, 20.0),
            invoice("2024-01-01T00:00:00.000Z", 999.0, 0.0),
        ];
        assert!((snapshot().amount(&invoices) - 450.0).abs() < 1e-9);
        assert_eq!(Snapshot::default().amount(&invoices), 0.0);
    }

    #[test]
    fn test_validate_and_overdue() {
        let mut snapshot = snapshot();
        assert!(snapshot.validate().is_ok());
        assert!(snapshot.is_overdue(date(2024, 3, 21)));
        assert!(!snapshot.is_overdue(date(2024, 3, 20)));

        snapshot.set_pay_to(date(2024, 1, 31));
        assert!(snapshot.validate().is_err());
        snapshot.pay_to_date.clear();
        assert_eq!(snapshot.validate(), Err("Укажите срок оплаты".to_string()));

        snapshot.is_completed = true;
        assert!(!snapshot.is_overdue(date(2030, 1, 1)));
    }
}
