use super::model;
use crate::shared::form_utils::{invalid, parse_amount};
use contracts::domain::a001_building::Building;
use contracts::domain::a014_service::Service;
use contracts::domain::common::Record;
use contracts::enums::ServiceType;
use leptos::prelude::*;

#[derive(Clone)]
pub struct ServiceDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub building_id: RwSignal<String>,
    pub service_type: RwSignal<String>,
    pub cost: RwSignal<String>,
    /// Показание для пробного расчёта начисления
    pub sample_indicator: RwSignal<String>,

    pub buildings: RwSignal<Vec<Building>>,

    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ServiceDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            building_id: RwSignal::new(String::new()),
            service_type: RwSignal::new(ServiceType::default().code().to_string()),
            cost: RwSignal::new("0".to_string()),
            sample_indicator: RwSignal::new("1".to_string()),
            buildings: RwSignal::new(Vec::new()),
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

    /// Начисление по текущему тарифу для `sample_indicator`
    pub fn sample_charge(&self) -> Signal<Option<f64>> {
        let this = self.clone();
        Signal::derive(move || {
            let indicator = parse_amount(&this.sample_indicator.get())?;
            this.cost.track();
            this.to_record().ok().map(|service| service.charge(indicator))
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        self.to_record()?.validate()
    }

    pub fn load_buildings(&self) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            match model::fetch_buildings().await {
                Ok(buildings) => this.buildings.set(buildings),
                Err(e) => log::warn!("Failed to load buildings: {}", e),
            }
        });
    }

    pub fn load(&self, id: String) {
        let this = self.clone();
        this.loading.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match model::fetch_by_id(&id).await {
                Ok(service) => {
                    this.from_record(&service);
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
        let record = match self.to_record().and_then(|s| s.validate().map(|_| s)) {
            Ok(service) => service,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let this = self.clone();
        this.saving.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match model::save_service(record).await {
                Ok(saved) => {
                    log::info!("Saved service {}", saved.id);
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

    fn to_record(&self) -> Result<Service, String> {
        let cost_text = self.cost.get_untracked();
        let cost = parse_amount(&cost_text).ok_or_else(|| invalid("Тариф", &cost_text))?;

        Ok(Service {
            id: self.id.get_untracked().unwrap_or_default(),
            building_id: self.building_id.get_untracked(),
            service_type: ServiceType::parse_code(&self.service_type.get_untracked())
                .unwrap_or_default(),
            cost,
        })
    }

    fn from_record(&self, service: &Service) {
        self.id.set(Some(service.id.clone()));
        self.building_id.set(service.building_id.clone());
        self.service_type
            .set(service.service_type.code().to_string());
        self.cost.set(service.cost.to_string());
    }
}

impl Default for ServiceDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_sample_charge() {
        let vm = ServiceDetailsVm::new();
        vm.building_id.set("b1".into());
        vm.service_type.set(ServiceType::WaterSupply.code().to_string());
        vm.cost.set("30,5".into());
        vm.sample_indicator.set("4".into());

        let service = vm.to_record().unwrap();
        assert_eq!(service.service_type, ServiceType::WaterSupply);
        assert_eq!(vm.sample_charge().get_untracked(), Some(122.0));
        assert!(vm.validate().is_ok());
    }

    #[test]
    fn test_building_required() {
        let vm = ServiceDetailsVm::new();
        assert_eq!(vm.validate(), Err("Не выбран дом".to_string()));

        vm.cost.set("abc".into());
        assert_eq!(vm.sample_charge().get_untracked(), None);
    }
}
