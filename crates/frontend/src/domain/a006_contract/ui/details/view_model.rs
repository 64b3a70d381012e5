//! ViewModel for Contract details form

use super::model;
use chrono::NaiveDate;
use contracts::domain::a001_building::Building;
use contracts::domain::a006_contract::Contract;
use contracts::domain::common::Record;
use contracts::enums::ContractType;
use leptos::prelude::*;

#[derive(Clone)]
pub struct ContractDetailsVm {
    // === Form fields ===
    pub id: RwSignal<Option<String>>,
    pub building_id: RwSignal<String>,
    pub contract_number: RwSignal<String>,
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    /// Код `ContractType` строкой для `<Select>`
    pub contract_type: RwSignal<String>,
    pub date_of_signing: RwSignal<Option<NaiveDate>>,

    // === Lookups ===
    pub buildings: RwSignal<Vec<Building>>,

    // === UI State ===
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ContractDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            building_id: RwSignal::new(String::new()),
            contract_number: RwSignal::new(String::new()),
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            contract_type: RwSignal::new(ContractType::default().code().to_string()),
            date_of_signing: RwSignal::new(None),
            buildings: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    // === Derived signals ===

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let id = self.id;
        Signal::derive(move || id.get().is_some())
    }

    pub fn is_save_disabled(&self) -> Signal<bool> {
        let saving = self.saving;
        let loading = self.loading;
        Signal::derive(move || saving.get() || loading.get())
    }

    // === Validation ===

    pub fn validate(&self) -> Result<(), String> {
        self.to_record().validate()
    }

    // === Data loading ===

    pub fn load_buildings(&self) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            match model::fetch_buildings().await {
                Ok(buildings) => {
                    // Новый договор сразу привязывается к единственному дому
                    if this.building_id.get_untracked().is_empty() && buildings.len() == 1 {
                        this.building_id.set(buildings[0].id.clone());
                    }
                    this.buildings.set(buildings);
                }
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
                Ok(contract) => {
                    this.from_record(&contract);
                    this.loading.set(false);
                }
                Err(e) => {
                    this.error.set(Some(format!("Ошибка загрузки: {}", e)));
                    this.loading.set(false);
                }
            }
        });
    }

    // === Commands ===

    pub fn set_signed_on(&self, date: NaiveDate) {
        self.date_of_signing.set(Some(date));
    }

    pub fn save(&self, on_saved: Callback<()>) {
        if let Err(msg) = self.validate() {
            self.error.set(Some(msg));
            return;
        }

        let this = self.clone();
        this.saving.set(true);
        this.error.set(None);

        let record = this.to_record();

        leptos::task::spawn_local(async move {
            match model::save_contract(record).await {
                Ok(saved) => {
                    log::info!("Saved contract {}", saved.id);
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

    // === Private helpers ===

    fn contract_type(&self) -> ContractType {
        ContractType::parse_code(&self.contract_type.get_untracked()).unwrap_or_default()
    }

    fn to_record(&self) -> Contract {
        let id = self.id.get_untracked().unwrap_or_default();
        let building_id = self.building_id.get_untracked();
        let contract_number = self.contract_number.get_untracked().trim().to_string();
        let title = self.title.get_untracked().trim().to_string();
        let description = self.description.get_untracked();

        match self.date_of_signing.get_untracked() {
            Some(date) => Contract {
                id,
                description,
                ..Contract::new_for_insert(
                    building_id,
                    contract_number,
                    title,
                    self.contract_type(),
                    date,
                )
            },
            None => Contract {
                id,
                building_id,
                contract_number,
                title,
                description,
                contract_type: self.contract_type(),
                date_of_signing: String::new(),
            },
        }
    }

    fn from_record(&self, contract: &Contract) {
        self.id.set(Some(contract.id.clone()));
        self.building_id.set(contract.building_id.clone());
        self.contract_number.set(contract.contract_number.clone());
        self.title.set(contract.title.clone());
        self.description.set(contract.description.clone());
        self.contract_type
            .set(contract.contract_type.code().to_string());
        self.date_of_signing.set(contract.signed_on());
    }
}

impl Default for ContractDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}
