use super::model;
use chrono::NaiveDate;
use contracts::domain::a001_building::Building;
use contracts::domain::a005_invoice::Invoice;
use contracts::domain::a015_snapshot::Snapshot;
use contracts::domain::common::Record;
use contracts::shared::calendar::YearMonth;
use leptos::prelude::*;

#[derive(Clone)]
pub struct SnapshotDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub building_id: RwSignal<String>,
    pub period: RwSignal<Option<YearMonth>>,
    pub pay_to: RwSignal<Option<NaiveDate>>,
    pub is_completed: RwSignal<bool>,

    pub buildings: RwSignal<Vec<Building>>,
    pub invoices: RwSignal<Vec<Invoice>>,

    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl SnapshotDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            building_id: RwSignal::new(String::new()),
            period: RwSignal::new(None),
            pay_to: RwSignal::new(None),
            is_completed: RwSignal::new(false),
            buildings: RwSignal::new(Vec::new()),
            invoices: RwSignal::new(Vec::new()),
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

    /// Сумма счетов за выбранный месяц
    pub fn amount(&self) -> Signal<f64> {
        let this = self.clone();
        Signal::derive(move || {
            this.period.track();
            let snapshot = this.to_record();
            this.invoices.with(|invoices| snapshot.amount(invoices))
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        self.to_record().validate()
    }

    pub fn load_lookups(&self) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            match model::fetch_buildings().await {
                Ok(buildings) => this.buildings.set(buildings),
                Err(e) => log::warn!("Failed to load buildings: {}", e),
            }
            match model::fetch_invoices().await {
                Ok(invoices) => this.invoices.set(invoices),
                Err(e) => log::warn!("Failed to load invoices: {}", e),
            }
        });
    }

    pub fn load(&self, id: String) {
        let this = self.clone();
        this.loading.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match model::fetch_by_id(&id).await {
                Ok(snapshot) => {
                    this.from_record(&snapshot);
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
        let record = self.to_record();
        if let Err(msg) = record.validate() {
            self.error.set(Some(msg));
            return;
        }

        let this = self.clone();
        this.saving.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match model::save_snapshot(record).await {
                Ok(saved) => {
                    log::info!("Saved snapshot {}", saved.id);
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

    fn to_record(&self) -> Snapshot {
        let mut snapshot = Snapshot {
            id: self.id.get_untracked().unwrap_or_default(),
            building_id: self.building_id.get_untracked(),
            is_completed: self.is_completed.get_untracked(),
            ..Default::default()
        };
        if let Some(period) = self.period.get_untracked() {
            snapshot.set_period(period);
        }
        if let Some(pay_to) = self.pay_to.get_untracked() {
            snapshot.set_pay_to(pay_to);
        }
        snapshot
    }

    fn from_record(&self, snapshot: &Snapshot) {
        self.id.set(Some(snapshot.id.clone()));
        self.building_id.set(snapshot.building_id.clone());
        self.period.set(snapshot.period());
        self.pay_to.set(snapshot.pay_to());
        self.is_completed.set(snapshot.is_completed);
    }
}

impl Default for SnapshotDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::calendar::Month;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_amount_follows_selected_period() {
        let vm = SnapshotDetailsVm::new();
        vm.invoices.set(vec![
            Invoice {
                date: "2024-02-01T00:00:00Z".into(),
                total: 300.0,
                balance: -50.0,
                ..Default::default()
            },
            Invoice {
                date: "2024-03-01T00:00:00Z".into(),
                total: 999.0,
                ..Default::default()
            },
        ]);
        assert_eq!(vm.amount().get_untracked(), 0.0);

        vm.period.set(Some(YearMonth::new(2024, Month::FEBRUARY)));
        assert_eq!(vm.amount().get_untracked(), 350.0);
    }

    #[test]
    fn test_pay_to_before_period_rejected() {
        let vm = SnapshotDetailsVm::new();
        vm.building_id.set("b1".into());
        vm.period.set(Some(YearMonth::new(2024, Month::FEBRUARY)));
        vm.pay_to.set(Some(date(2024, 1, 31)));
        assert_eq!(
            vm.validate(),
            Err("Срок оплаты не может быть раньше расчётного месяца".to_string())
        );

        vm.pay_to.set(Some(date(2024, 3, 20)));
        assert!(vm.validate().is_ok());
        assert_eq!(vm.to_record().date, "2024-02-01T00:00:00Z");
    }
}
