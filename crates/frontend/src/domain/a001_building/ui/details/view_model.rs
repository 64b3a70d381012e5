use super::model;
use crate::shared::form_utils::{invalid, optional_text, parse_amount, parse_int};
use contracts::domain::a001_building::Building;
use contracts::domain::a009_payment::Payment;
use contracts::domain::common::Record;
use contracts::enums::{Construction, Elevator, Heating, Parking, Territory, Wall, Warming};
use leptos::prelude::*;

#[derive(Clone)]
pub struct BuildingDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub legal_address: RwSignal<String>,
    pub payment_id: RwSignal<String>,
    pub built: RwSignal<String>,
    pub number_of_floors: RwSignal<String>,
    pub number_of_apartments: RwSignal<String>,
    pub area: RwSignal<String>,
    pub ceiling_height: RwSignal<String>,
    // Коды характеристик строкой для `<Select>`
    pub heating: RwSignal<String>,
    pub warming: RwSignal<String>,
    pub construction: RwSignal<String>,
    pub wall: RwSignal<String>,
    pub territory: RwSignal<String>,
    pub parking: RwSignal<String>,
    pub elevator: RwSignal<String>,
    pub remark: RwSignal<String>,

    pub payments: RwSignal<Vec<Payment>>,

    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl BuildingDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            legal_address: RwSignal::new(String::new()),
            payment_id: RwSignal::new(String::new()),
            built: RwSignal::new(String::new()),
            number_of_floors: RwSignal::new(String::new()),
            number_of_apartments: RwSignal::new(String::new()),
            area: RwSignal::new(String::new()),
            ceiling_height: RwSignal::new(String::new()),
            heating: RwSignal::new(Heating::default().code().to_string()),
            warming: RwSignal::new(Warming::default().code().to_string()),
            construction: RwSignal::new(Construction::default().code().to_string()),
            wall: RwSignal::new(Wall::default().code().to_string()),
            territory: RwSignal::new(Territory::default().code().to_string()),
            parking: RwSignal::new(Parking::default().code().to_string()),
            elevator: RwSignal::new(Elevator::default().code().to_string()),
            remark: RwSignal::new(String::new()),
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

    /// Средняя площадь квартиры по введённым значениям
    pub fn average_apartment_area(&self) -> Signal<Option<f64>> {
        let this = self.clone();
        Signal::derive(move || {
            this.area.track();
            this.number_of_apartments.track();
            this.to_record().ok()?.average_apartment_area()
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
                Err(e) => log::warn!("Failed to load payments: {}", e),
            }
        });
    }

    pub fn load(&self, id: String) {
        let this = self.clone();
        this.loading.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match model::fetch_by_id(&id).await {
                Ok(building) => {
                    this.from_record(&building);
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
        let record = match self.to_record().and_then(|b| b.validate().map(|_| b)) {
            Ok(building) => building,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let this = self.clone();
        this.saving.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match model::save_building(record).await {
                Ok(saved) => {
                    log::info!("Saved building {}", saved.id);
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

    fn to_record(&self) -> Result<Building, String> {
        let int = |label: &str, signal: RwSignal<String>| {
            let text = signal.get_untracked();
            parse_int(&text).ok_or_else(|| invalid(label, &text))
        };
        let amount = |label: &str, signal: RwSignal<String>| {
            let text = signal.get_untracked();
            parse_amount(&text).ok_or_else(|| invalid(label, &text))
        };

        Ok(Building {
            id: self.id.get_untracked().unwrap_or_default(),
            payment_id: self.payment_id.get_untracked(),
            legal_address: self.legal_address.get_untracked().trim().to_string(),
            built: int("Год постройки", self.built)?,
            number_of_floors: int("Этажей", self.number_of_floors)?,
            number_of_apartments: int("Квартир", self.number_of_apartments)?,
            area: amount("Площадь", self.area)?,
            ceiling_height: amount("Высота потолков", self.ceiling_height)?,
            heating: Heating::parse_code(&self.heating.get_untracked()).unwrap_or_default(),
            warming: Warming::parse_code(&self.warming.get_untracked()).unwrap_or_default(),
            construction: Construction::parse_code(&self.construction.get_untracked())
                .unwrap_or_default(),
            wall: Wall::parse_code(&self.wall.get_untracked()).unwrap_or_default(),
            territory: Territory::parse_code(&self.territory.get_untracked()).unwrap_or_default(),
            parking: Parking::parse_code(&self.parking.get_untracked()).unwrap_or_default(),
            elevator: Elevator::parse_code(&self.elevator.get_untracked()).unwrap_or_default(),
            remark: optional_text(&self.remark.get_untracked()),
        })
    }

    fn from_record(&self, building: &Building) {
        self.id.set(Some(building.id.clone()));
        self.legal_address.set(building.legal_address.clone());
        self.payment_id.set(building.payment_id.clone());
        self.built.set(building.built.to_string());
        self.number_of_floors.set(building.number_of_floors.to_string());
        self.number_of_apartments
            .set(building.number_of_apartments.to_string());
        self.area.set(building.area.to_string());
        self.ceiling_height.set(building.ceiling_height.to_string());
        self.heating.set(building.heating.code().to_string());
        self.warming.set(building.warming.code().to_string());
        self.construction.set(building.construction.code().to_string());
        self.wall.set(building.wall.code().to_string());
        self.territory.set(building.territory.code().to_string());
        self.parking.set(building.parking.code().to_string());
        self.elevator.set(building.elevator.code().to_string());
        self.remark.set(building.remark.clone().unwrap_or_default());
    }
}

impl Default for BuildingDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_become_record() {
        let vm = BuildingDetailsVm::new();
        vm.legal_address.set("  вул. Франка, 3 ".into());
        vm.built.set("1987".into());
        vm.number_of_apartments.set("40".into());
        vm.area.set("2000,5".into());
        vm.heating.set(Heating::Individual.code().to_string());

        let building = vm.to_record().unwrap();
        assert_eq!(building.legal_address, "вул. Франка, 3");
        assert_eq!(building.built, 1987);
        assert_eq!(building.area, 2000.5);
        assert_eq!(building.heating, Heating::Individual);
        assert_eq!(building.number_of_floors, 0);
        assert!(building.remark.is_none());
        assert!(vm.validate().is_ok());
    }

    #[test]
    fn test_bad_number_names_the_field() {
        let vm = BuildingDetailsVm::new();
        vm.legal_address.set("вул. Франка, 3".into());
        vm.number_of_floors.set("девять".into());
        assert_eq!(
            vm.to_record().unwrap_err(),
            "Некорректное значение поля «Этажей»: девять"
        );
    }
}
