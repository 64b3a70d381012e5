use super::model;
use crate::shared::form_utils::{invalid, optional_text, parse_amount};
use chrono::NaiveDate;
use contracts::domain::a007_employee::Employee;
use contracts::domain::common::Record;
use contracts::enums::{Currency, EmployeeType, Gender};
use contracts::shared::format::{parse_iso_date, to_iso_datetime};
use leptos::prelude::*;

#[derive(Clone)]
pub struct EmployeeDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub second_name: RwSignal<String>,
    pub first_name: RwSignal<String>,
    pub middle_name: RwSignal<String>,
    pub gender: RwSignal<String>,
    pub date_of_birth: RwSignal<Option<NaiveDate>>,
    pub phone_number: RwSignal<String>,
    pub email: RwSignal<String>,
    pub employee_type: RwSignal<String>,
    pub currency: RwSignal<String>,
    pub salary: RwSignal<String>,
    pub remark: RwSignal<String>,

    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl EmployeeDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            second_name: RwSignal::new(String::new()),
            first_name: RwSignal::new(String::new()),
            middle_name: RwSignal::new(String::new()),
            gender: RwSignal::new(Gender::default().code().to_string()),
            date_of_birth: RwSignal::new(None),
            phone_number: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            employee_type: RwSignal::new(EmployeeType::default().code().to_string()),
            currency: RwSignal::new(Currency::default().code().to_string()),
            salary: RwSignal::new("0".to_string()),
            remark: RwSignal::new(String::new()),
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

    pub fn load(&self, id: String) {
        let this = self.clone();
        this.loading.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match model::fetch_by_id(&id).await {
                Ok(employee) => {
                    this.from_record(&employee);
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
        let record = match self.to_record().and_then(|e| e.validate().map(|_| e)) {
            Ok(employee) => employee,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let this = self.clone();
        this.saving.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match model::save_employee(record).await {
                Ok(saved) => {
                    log::info!("Saved employee {}", saved.id);
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

    fn to_record(&self) -> Result<Employee, String> {
        let salary_text = self.salary.get_untracked();
        let salary = parse_amount(&salary_text).ok_or_else(|| invalid("Зарплата", &salary_text))?;

        Ok(Employee {
            id: self.id.get_untracked().unwrap_or_default(),
            first_name: self.first_name.get_untracked().trim().to_string(),
            second_name: self.second_name.get_untracked().trim().to_string(),
            middle_name: optional_text(&self.middle_name.get_untracked()),
            gender: Gender::parse_code(&self.gender.get_untracked()).unwrap_or_default(),
            date_of_birth: self.date_of_birth.get_untracked().map(to_iso_datetime),
            phone_number: optional_text(&self.phone_number.get_untracked()),
            email: optional_text(&self.email.get_untracked()),
            currency: Currency::parse_code(&self.currency.get_untracked()).unwrap_or_default(),
            salary,
            employee_type: EmployeeType::parse_code(&self.employee_type.get_untracked())
                .unwrap_or_default(),
            remark: optional_text(&self.remark.get_untracked()),
        })
    }

    fn from_record(&self, employee: &Employee) {
        self.id.set(Some(employee.id.clone()));
        self.second_name.set(employee.second_name.clone());
        self.first_name.set(employee.first_name.clone());
        self.middle_name
            .set(employee.middle_name.clone().unwrap_or_default());
        self.gender.set(employee.gender.code().to_string());
        self.date_of_birth
            .set(employee.date_of_birth.as_deref().and_then(parse_iso_date));
        self.phone_number
            .set(employee.phone_number.clone().unwrap_or_default());
        self.email.set(employee.email.clone().unwrap_or_default());
        self.employee_type
            .set(employee.employee_type.code().to_string());
        self.currency.set(employee.currency.code().to_string());
        self.salary.set(employee.salary.to_string());
        self.remark.set(employee.remark.clone().unwrap_or_default());
    }
}

impl Default for EmployeeDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_form() {
        let vm = EmployeeDetailsVm::new();
        vm.second_name.set("Мельник".into());
        vm.first_name.set("Олена".into());
        vm.gender.set(Gender::Female.code().to_string());
        vm.employee_type
            .set(EmployeeType::Entrepreneur.code().to_string());
        vm.salary.set("12000,50".into());
        vm.email.set("  ".into());

        let employee = vm.to_record().unwrap();
        assert_eq!(employee.gender, Gender::Female);
        assert_eq!(employee.employee_type, EmployeeType::Entrepreneur);
        assert_eq!(employee.salary, 12000.5);
        assert_eq!(employee.email, None);
        assert!(vm.validate().is_ok());
    }

    #[test]
    fn test_negative_salary_names_the_field() {
        let vm = EmployeeDetailsVm::new();
        vm.second_name.set("Мельник".into());
        vm.first_name.set("Олена".into());
        vm.salary.set("-5".into());
        assert_eq!(
            vm.validate(),
            Err("Некорректное значение поля «Зарплата»: -5".to_string())
        );
    }
}
