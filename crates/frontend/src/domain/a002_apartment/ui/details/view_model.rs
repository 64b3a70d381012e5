use super::model;
use crate::shared::form_utils::{invalid, optional_text, parse_amount, parse_optional_int};
use contracts::domain::a001_building::Building;
use contracts::domain::a002_apartment::Apartment;
use contracts::domain::common::Record;
use leptos::prelude::*;

#[derive(Clone)]
pub struct ApartmentDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub building_id: RwSignal<String>,
    pub apartment_number: RwSignal<String>,
    pub entrance_number: RwSignal<String>,
    pub floor: RwSignal<String>,
    pub area: RwSignal<String>,
    pub phone_number: RwSignal<String>,
    pub remark: RwSignal<String>,

    pub buildings: RwSignal<Vec<Building>>,

    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ApartmentDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            building_id: RwSignal::new(String::new()),
            apartment_number: RwSignal::new(String::new()),
            entrance_number: RwSignal::new(String::new()),
            floor: RwSignal::new(String::new()),
            area: RwSignal::new(String::new()),
            phone_number: RwSignal::new(String::new()),
            remark: RwSignal::new(String::new()),
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

    pub fn validate(&self) -> Result<(), String> {
        self.to_record()?.validate()
    }

    pub fn load_buildings(&self) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            match model::fetch_buildings().await {
                Ok(buildings) => {
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
                Ok(apartment) => {
                    this.from_record(&apartment);
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
            Ok(apartment) => apartment,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let this = self.clone();
        this.saving.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match model::save_apartment(record).await {
                Ok(saved) => {
                    log::info!("Saved apartment {}", saved.id);
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

    fn to_record(&self) -> Result<Apartment, String> {
        let optional_int = |label: &str, signal: RwSignal<String>| {
            let text = signal.get_untracked();
            parse_optional_int(&text).map_err(|_| invalid(label, &text))
        };
        let area_text = self.area.get_untracked();

        Ok(Apartment {
            id: self.id.get_untracked().unwrap_or_default(),
            building_id: self.building_id.get_untracked(),
            apartment_number: self.apartment_number.get_untracked().trim().to_string(),
            phone_number: optional_text(&self.phone_number.get_untracked()),
            floor: optional_int("Этаж", self.floor)?,
            entrance_number: optional_int("Подъезд", self.entrance_number)?,
            area: parse_amount(&area_text).ok_or_else(|| invalid("Площадь", &area_text))?,
            remark: optional_text(&self.remark.get_untracked()),
        })
    }

    fn from_record(&self, apartment: &Apartment) {
        let optional = |value: Option<i32>| value.map(|v| v.to_string()).unwrap_or_default();
        self.id.set(Some(apartment.id.clone()));
        self.building_id.set(apartment.building_id.clone());
        self.apartment_number.set(apartment.apartment_number.clone());
        self.entrance_number.set(optional(apartment.entrance_number));
        self.floor.set(optional(apartment.floor));
        self.area.set(apartment.area.to_string());
        self.phone_number
            .set(apartment.phone_number.clone().unwrap_or_default());
        self.remark.set(apartment.remark.clone().unwrap_or_default());
    }
}

impl Default for ApartmentDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_floor_and_entrance_stay_unset() {
        let vm = ApartmentDetailsVm::new();
        vm.building_id.set("b1".into());
        vm.apartment_number.set(" 17 ".into());
        vm.floor.set("4".into());
        vm.area.set("54,3".into());

        let apartment = vm.to_record().unwrap();
        assert_eq!(apartment.apartment_number, "17");
        assert_eq!(apartment.floor, Some(4));
        assert_eq!(apartment.entrance_number, None);
        assert_eq!(apartment.area, 54.3);
        assert!(apartment.phone_number.is_none());
        assert!(vm.validate().is_ok());
    }

    #[test]
    fn test_validation_requires_building() {
        let vm = ApartmentDetailsVm::new();
        vm.apartment_number.set("17".into());
        assert_eq!(vm.validate(), Err("Не выбран дом".to_string()));

        vm.building_id.set("b1".into());
        vm.entrance_number.set("второй".into());
        assert!(vm.validate().unwrap_err().contains("Подъезд"));
    }
}
