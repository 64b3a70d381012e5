use super::model;
use crate::shared::form_utils::{invalid, optional_text, parse_amount};
use chrono::NaiveDate;
use contracts::domain::a009_payment::Payment;
use contracts::domain::a010_arrangement::Arrangement;
use contracts::domain::common::Record;
use contracts::shared::format::{parse_iso_date, to_iso_datetime};
use leptos::prelude::*;

#[derive(Clone)]
pub struct ArrangementDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub payment_id: RwSignal<String>,
    pub arrangement_number: RwSignal<String>,
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub iban: RwSignal<String>,
    pub sort_code: RwSignal<String>,
    pub total: RwSignal<String>,
    pub date: RwSignal<Option<NaiveDate>>,
    /// Время из загруженной записи; пишется обратно, пока дата не менялась
    loaded_time: RwSignal<String>,

    pub payments: RwSignal<Vec<Payment>>,

    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ArrangementDetailsVm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            id: RwSignal::new(None),
            payment_id: RwSignal::new(String::new()),
            arrangement_number: RwSignal::new(String::new()),
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            iban: RwSignal::new(String::new()),
            sort_code: RwSignal::new(String::new()),
            total: RwSignal::new(String::new()),
            date: RwSignal::new(Some(today)),
            loaded_time: RwSignal::new(String::new()),
            payments: RwSignal::new(Vec::new()),
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

    /// Сумма больше остатка на выбранном счёте списания
    pub fn exceeds_balance(&self) -> Signal<bool> {
        let payment_id = self.payment_id;
        let payments = self.payments;
        let total = self.total;
        Signal::derive(move || {
            let Some(total) = parse_amount(&total.get()) else {
                return false;
            };
            let id = payment_id.get();
            payments.with(|all| {
                all.iter()
                    .find(|p| p.id == id)
                    .is_some_and(|p| total > p.balance)
            })
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        self.to_record()?.validate()
    }

    pub fn load_payments(&self) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            match model::fetch_payments().await {
                Ok(payments) => this.payments.set(payments),
                Err(e) => log::warn!("Failed to load payment accounts: {}", e),
            }
        });
    }

    pub fn load(&self, id: String) {
        let this = self.clone();
        this.loading.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match model::fetch_by_id(&id).await {
                Ok(arrangement) => {
                    this.from_record(&arrangement);
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
        let record = match self.to_record().and_then(|a| a.validate().map(|_| a)) {
            Ok(arrangement) => arrangement,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let this = self.clone();
        this.saving.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match model::save_arrangement(record).await {
                Ok(saved) => {
                    log::info!("Saved arrangement {}", saved.id);
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

    fn time(&self) -> String {
        let loaded = self.loaded_time.get_untracked();
        match self.date.get_untracked() {
            Some(date) if parse_iso_date(&loaded) == Some(date) => loaded,
            Some(date) => to_iso_datetime(date),
            None => String::new(),
        }
    }

    fn to_record(&self) -> Result<Arrangement, String> {
        let total_text = self.total.get_untracked();
        let total = parse_amount(&total_text).ok_or_else(|| invalid("Сумма", &total_text))?;

        Ok(Arrangement {
            id: self.id.get_untracked().unwrap_or_default(),
            payment_id: self.payment_id.get_untracked(),
            arrangement_number: self.arrangement_number.get_untracked().trim().to_string(),
            title: self.title.get_untracked().trim().to_string(),
            description: optional_text(&self.description.get_untracked()),
            iban: self.iban.get_untracked().trim().to_uppercase(),
            sort_code: self.sort_code.get_untracked().trim().to_string(),
            total,
            time: self.time(),
        })
    }

    fn from_record(&self, arrangement: &Arrangement) {
        self.id.set(Some(arrangement.id.clone()));
        self.payment_id.set(arrangement.payment_id.clone());
        self.arrangement_number
            .set(arrangement.arrangement_number.clone());
        self.title.set(arrangement.title.clone());
        self.description
            .set(arrangement.description.clone().unwrap_or_default());
        self.iban.set(arrangement.iban.clone());
        self.sort_code.set(arrangement.sort_code.clone());
        self.total.set(arrangement.total.to_string());
        self.date.set(parse_iso_date(&arrangement.time));
        self.loaded_time.set(arrangement.time.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn loaded() -> ArrangementDetailsVm {
        let vm = ArrangementDetailsVm::new(date(2024, 5, 20));
        vm.from_record(&Arrangement {
            id: "ar1".into(),
            payment_id: "pm1".into(),
            arrangement_number: "17".into(),
            title: "Вывоз мусора".into(),
            total: 1500.0,
            time: "2024-04-02T14:02:26Z".into(),
            ..Default::default()
        });
        vm
    }

    #[test]
    fn test_unchanged_date_keeps_time_of_day() {
        let vm = loaded();
        assert_eq!(vm.to_record().unwrap().time, "2024-04-02T14:02:26Z");

        vm.date.set(Some(date(2024, 4, 3)));
        assert_eq!(vm.to_record().unwrap().time, "2024-04-03T00:00:00Z");
    }

    #[test]
    fn test_total_must_be_positive() {
        let vm = loaded();
        vm.total.set("0".into());
        assert_eq!(
            vm.validate(),
            Err("Сумма платежа должна быть больше нуля".to_string())
        );
    }

    #[test]
    fn test_exceeds_selected_account_balance() {
        let vm = loaded();
        vm.payments.set(vec![Payment {
            id: "pm1".into(),
            balance: 1000.0,
            ..Default::default()
        }]);
        assert!(vm.exceeds_balance().get_untracked());

        vm.total.set("999.99".into());
        assert!(!vm.exceeds_balance().get_untracked());
    }
}
