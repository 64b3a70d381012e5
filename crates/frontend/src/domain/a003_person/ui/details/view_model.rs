use super::model;
use crate::shared::form_utils::{invalid, optional_text, parse_amount};
use chrono::NaiveDate;
use contracts::domain::a002_apartment::Apartment;
use contracts::domain::a003_person::Person;
use contracts::domain::common::Record;
use contracts::enums::Gender;
use contracts::shared::format::{calculate_age, parse_iso_date, to_iso_datetime};
use leptos::prelude::*;

#[derive(Clone)]
pub struct PersonDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub apartment_id: RwSignal<String>,
    pub second_name: RwSignal<String>,
    pub first_name: RwSignal<String>,
    pub middle_name: RwSignal<String>,
    pub gender: RwSignal<String>,
    pub date_of_birth: RwSignal<Option<NaiveDate>>,
    pub phone_number: RwSignal<String>,
    pub email: RwSignal<String>,
    /// Дата регистрации права собственности
    pub owned_since: RwSignal<Option<NaiveDate>>,
    pub ownership_percentage: RwSignal<String>,
    pub remark: RwSignal<String>,

    pub apartments: RwSignal<Vec<Apartment>>,

    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl PersonDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            apartment_id: RwSignal::new(String::new()),
            second_name: RwSignal::new(String::new()),
            first_name: RwSignal::new(String::new()),
            middle_name: RwSignal::new(String::new()),
            gender: RwSignal::new(Gender::default().code().to_string()),
            date_of_birth: RwSignal::new(None),
            phone_number: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            owned_since: RwSignal::new(None),
            ownership_percentage: RwSignal::new("0".to_string()),
            remark: RwSignal::new(String::new()),
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

    /// Полных лет на `today` по выбранной дате рождения
    pub fn age(&self, today: NaiveDate) -> Signal<Option<u32>> {
        let date_of_birth = self.date_of_birth;
        Signal::derive(move || date_of_birth.get().map(|birth| calculate_age(birth, today)))
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
                Ok(person) => {
                    this.from_record(&person);
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
        let record = match self.to_record().and_then(|p| p.validate().map(|_| p)) {
            Ok(person) => person,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let this = self.clone();
        this.saving.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match model::save_person(record).await {
                Ok(saved) => {
                    log::info!("Saved person {}", saved.id);
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

    fn to_record(&self) -> Result<Person, String> {
        let share_text = self.ownership_percentage.get_untracked();
        let ownership_percentage = parse_amount(&share_text)
            .ok_or_else(|| invalid("Доля собственности", &share_text))?;

        Ok(Person {
            id: self.id.get_untracked().unwrap_or_default(),
            apartment_id: self.apartment_id.get_untracked(),
            first_name: self.first_name.get_untracked().trim().to_string(),
            second_name: self.second_name.get_untracked().trim().to_string(),
            middle_name: optional_text(&self.middle_name.get_untracked()),
            gender: Gender::parse_code(&self.gender.get_untracked()).unwrap_or_default(),
            date_of_birth: self.date_of_birth.get_untracked().map(to_iso_datetime),
            phone_number: optional_text(&self.phone_number.get_untracked()),
            email: optional_text(&self.email.get_untracked()),
            date: self
                .owned_since
                .get_untracked()
                .map(to_iso_datetime)
                .unwrap_or_default(),
            ownership_percentage,
            remark: optional_text(&self.remark.get_untracked()),
        })
    }

    fn from_record(&self, person: &Person) {
        self.id.set(Some(person.id.clone()));
        self.apartment_id.set(person.apartment_id.clone());
        self.second_name.set(person.second_name.clone());
        self.first_name.set(person.first_name.clone());
        self.middle_name
            .set(person.middle_name.clone().unwrap_or_default());
        self.gender.set(person.gender.code().to_string());
        self.date_of_birth
            .set(person.date_of_birth.as_deref().and_then(parse_iso_date));
        self.phone_number
            .set(person.phone_number.clone().unwrap_or_default());
        self.email.set(person.email.clone().unwrap_or_default());
        self.owned_since.set(parse_iso_date(&person.date));
        self.ownership_percentage
            .set(person.ownership_percentage.to_string());
        self.remark.set(person.remark.clone().unwrap_or_default());
    }
}

impl Default for PersonDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_record_from_form() {
        let vm = PersonDetailsVm::new();
        vm.apartment_id.set("ap1".into());
        vm.second_name.set("Коваль".into());
        vm.first_name.set("Тарас".into());
        vm.gender.set(Gender::Male.code().to_string());
        vm.date_of_birth.set(Some(date(1980, 3, 9)));
        vm.ownership_percentage.set("50".into());

        let person = vm.to_record().unwrap();
        assert_eq!(person.title(), "Коваль Тарас");
        assert_eq!(person.gender, Gender::Male);
        assert_eq!(person.date_of_birth.as_deref(), Some("1980-03-09T00:00:00Z"));
        assert!(person.date.is_empty());
        assert_eq!(vm.age(date(2024, 3, 8)).get_untracked(), Some(43));
        assert!(vm.validate().is_ok());
    }

    #[test]
    fn test_share_over_hundred_rejected() {
        let vm = PersonDetailsVm::new();
        vm.apartment_id.set("ap1".into());
        vm.second_name.set("Коваль".into());
        vm.first_name.set("Тарас".into());
        vm.ownership_percentage.set("150".into());
        assert_eq!(
            vm.validate(),
            Err("Доля собственности должна быть от 0 до 100%".to_string())
        );
    }
}
