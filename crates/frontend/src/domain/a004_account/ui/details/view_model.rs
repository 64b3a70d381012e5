use super::model;
use crate::shared::form_utils::{invalid, parse_decimal};
use contracts::domain::a002_apartment::Apartment;
use contracts::domain::a004_account::Account;
use contracts::domain::common::Record;
use contracts::enums::ServiceType;
use leptos::prelude::*;

#[derive(Clone)]
pub struct AccountDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub apartment_id: RwSignal<String>,
    pub account_number: RwSignal<String>,
    pub service_type: RwSignal<String>,
    /// Отрицательный баланс означает долг
    pub balance: RwSignal<String>,

    pub apartments: RwSignal<Vec<Apartment>>,

    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl AccountDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            apartment_id: RwSignal::new(String::new()),
            account_number: RwSignal::new(String::new()),
            service_type: RwSignal::new(ServiceType::default().code().to_string()),
            balance: RwSignal::new("0".to_string()),
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

    pub fn is_in_debt(&self) -> Signal<bool> {
        let balance = self.balance;
        Signal::derive(move || parse_decimal(&balance.get()).is_some_and(|b| b < 0.0))
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
                Ok(account) => {
                    this.from_record(&account);
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
            Ok(account) => account,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let this = self.clone();
        this.saving.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match model::save_account(record).await {
                Ok(saved) => {
                    log::info!("Saved account {}", saved.id);
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

    fn to_record(&self) -> Result<Account, String> {
        let balance_text = self.balance.get_untracked();
        let balance = parse_decimal(&balance_text).ok_or_else(|| invalid("Баланс", &balance_text))?;

        Ok(Account {
            id: self.id.get_untracked().unwrap_or_default(),
            apartment_id: self.apartment_id.get_untracked(),
            account_number: self.account_number.get_untracked().trim().to_string(),
            service_type: ServiceType::parse_code(&self.service_type.get_untracked())
                .unwrap_or_default(),
            balance,
        })
    }

    fn from_record(&self, account: &Account) {
        self.id.set(Some(account.id.clone()));
        self.apartment_id.set(account.apartment_id.clone());
        self.account_number.set(account.account_number.clone());
        self.service_type
            .set(account.service_type.code().to_string());
        self.balance.set(account.balance.to_string());
    }
}

impl Default for AccountDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_balance_is_debt() {
        let vm = AccountDetailsVm::new();
        vm.apartment_id.set("ap1".into());
        vm.account_number.set(" 1001 ".into());
        vm.service_type.set(ServiceType::BuildingMaintenance.code().to_string());
        vm.balance.set("-250,50".into());

        let account = vm.to_record().unwrap();
        assert_eq!(account.account_number, "1001");
        assert_eq!(account.service_type, ServiceType::BuildingMaintenance);
        assert_eq!(account.balance, -250.5);
        assert!(vm.is_in_debt().get_untracked());
        assert!(vm.validate().is_ok());
    }

    #[test]
    fn test_account_number_required() {
        let vm = AccountDetailsVm::new();
        vm.apartment_id.set("ap1".into());
        assert_eq!(
            vm.validate(),
            Err("Номер счёта не может быть пустым".to_string())
        );
    }
}
