use super::model;
use crate::shared::form_utils::{invalid, parse_amount, parse_decimal};
use contracts::domain::a002_apartment::Apartment;
use contracts::domain::a005_invoice::Invoice;
use contracts::domain::common::Record;
use contracts::enums::InvoiceType;
use contracts::shared::calendar::YearMonth;
use contracts::shared::format::to_iso_datetime;
use leptos::prelude::*;

#[derive(Clone)]
pub struct InvoiceDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub apartment_id: RwSignal<String>,
    pub period: RwSignal<Option<YearMonth>>,
    pub invoice_type: RwSignal<String>,
    pub account_number: RwSignal<String>,
    pub balance: RwSignal<String>,
    pub indicator: RwSignal<String>,
    pub cost: RwSignal<String>,
    pub total: RwSignal<String>,
    pub payer: RwSignal<String>,
    pub ownership_percentage: RwSignal<String>,

    pub apartments: RwSignal<Vec<Apartment>>,

    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl InvoiceDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            apartment_id: RwSignal::new(String::new()),
            period: RwSignal::new(None),
            invoice_type: RwSignal::new(InvoiceType::default().code().to_string()),
            account_number: RwSignal::new(String::new()),
            balance: RwSignal::new("0".to_string()),
            indicator: RwSignal::new("0".to_string()),
            cost: RwSignal::new("0".to_string()),
            total: RwSignal::new("0".to_string()),
            payer: RwSignal::new(String::new()),
            ownership_percentage: RwSignal::new("100".to_string()),
            apartments: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let id = self.id;
        Signal::derive(move || id.get().is_some())
    }

    pub fn is_save_disabled(&self) -> Signal<bool> {
        let saving = self.saving;
        let loading = self.loading;
        Signal::derive(move || saving.get() || loading.get())
    }

    /// Начисление по показанию и тарифу; `None`, пока поля не разбираются
    pub fn charge(&self) -> Signal<Option<f64>> {
        let indicator = self.indicator;
        let cost = self.cost;
        Signal::derive(move || {
            let indicator = parse_amount(&indicator.get())?;
            let cost = parse_amount(&cost.get())?;
            Some(indicator * cost)
        })
    }

    pub fn apply_charge(&self) {
        if let Some(charge) = self.charge().get_untracked() {
            self.total.set(format!("{:.2}", charge));
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.to_record()?.validate()
    }

    pub fn load_apartments(&self) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            match model::fetch_apartments().await {
                Ok(apartments) => this.apartments.set(apartments),
                Err(e) => log::warn!("Failed to load apartments: {}", e),
            }
        });
    }

    pub fn load(&self, id: String) {
        let this = self.clone();
        this.loading.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match model::fetch_by_id(&id).await {
                Ok(invoice) => {
                    this.from_record(&invoice);
                    this.loading.set(false);
                }
                Err(e) => {
                    this.error.set(Some(format!("Ошибка загрузки: {}", e)));
                    this.loading.set(false);
                }
            }
        });
    }

    pub fn save(&self, on_saved: Callback<()>) {
        let record = match self.to_record().and_then(|i| i.validate().map(|_| i)) {
            Ok(invoice) => invoice,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let this = self.clone();
        this.saving.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match model::save_invoice(record).await {
                Ok(saved) => {
                    log::info!("Saved invoice {}", saved.id);
                    this.saving.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    this.saving.set(false);
                    this.error.set(Some(e));
                }
            }
        });
    }

    fn to_record(&self) -> Result<Invoice, String> {
        let number = |label: &str, signal: RwSignal<String>, allow_negative: bool| {
            let text = signal.get_untracked();
            let parsed = if allow_negative {
                parse_decimal(&text)
            } else {
                parse_amount(&text)
            };
            parsed.ok_or_else(|| invalid(label, &text))
        };

        Ok(Invoice {
            id: self.id.get_untracked().unwrap_or_default(),
            apartment_id: self.apartment_id.get_untracked(),
            date: self
                .period
                .get_untracked()
                .and_then(YearMonth::first_day)
                .map(to_iso_datetime)
                .unwrap_or_default(),
            invoice_type: InvoiceType::parse_code(&self.invoice_type.get_untracked())
                .unwrap_or_default(),
            account_number: self.account_number.get_untracked().trim().to_string(),
            balance: number("Остаток", self.balance, true)?,
            indicator: number("Показание", self.indicator, false)?,
            cost: number("Тариф", self.cost, false)?,
            total: number("К оплате", self.total, true)?,
            payer: self.payer.get_untracked().trim().to_string(),
            ownership_percentage: number("Доля собственности", self.ownership_percentage, false)?,
        })
    }

    fn from_record(&self, invoice: &Invoice) {
        self.id.set(Some(invoice.id.clone()));
        self.apartment_id.set(invoice.apartment_id.clone());
        self.period.set(invoice.period());
        self.invoice_type
            .set(invoice.invoice_type.code().to_string());
        self.account_number.set(invoice.account_number.clone());
        self.balance.set(invoice.balance.to_string());
        self.indicator.set(invoice.indicator.to_string());
        self.cost.set(invoice.cost.to_string());
        self.total.set(invoice.total.to_string());
        self.payer.set(invoice.payer.clone());
        self.ownership_percentage
            .set(invoice.ownership_percentage.to_string());
    }
}

impl Default for InvoiceDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::calendar::Month;

    #[test]
    fn test_period_stored_as_first_day() {
        let vm = InvoiceDetailsVm::new();
        vm.apartment_id.set("ap1".into());
        vm.account_number.set("1001".into());
        vm.period
            .set(Some(YearMonth::new(2024, Month::new(2).unwrap())));

        let invoice = vm.to_record().unwrap();
        assert_eq!(invoice.date, "2024-03-01T00:00:00Z");
        assert!(vm.validate().is_ok());
    }

    #[test]
    fn test_missing_period_rejected() {
        let vm = InvoiceDetailsVm::new();
        vm.apartment_id.set("ap1".into());
        vm.account_number.set("1001".into());
        assert_eq!(vm.validate(), Err("Некорректная дата счёта".to_string()));
    }

    #[test]
    fn test_apply_charge() {
        let vm = InvoiceDetailsVm::new();
        vm.indicator.set("12,5".into());
        vm.cost.set("8".into());
        vm.apply_charge();
        assert_eq!(vm.total.get_untracked(), "100.00");

        vm.cost.set("-1".into());
        assert_eq!(vm.charge().get_untracked(), None);
        assert_eq!(
            vm.to_record().map(|_| ()),
            Err("Некорректное значение поля «Тариф»: -1".to_string())
        );
    }
}
