use super::model;
use crate::shared::form_utils::{invalid, optional_text, parse_decimal};
use contracts::domain::a009_payment::Payment;
use contracts::domain::common::Record;
use contracts::enums::{Currency, PaymentType};
use leptos::prelude::*;

#[derive(Clone)]
pub struct PaymentDetailsVm {
    pub id: RwSignal<Option<String>>,
    /// Не редактируется в форме, сохраняется как было загружено
    pub community_id: RwSignal<String>,
    pub title: RwSignal<String>,
    pub payment_type: RwSignal<String>,
    pub iban: RwSignal<String>,
    pub sort_code: RwSignal<String>,
    pub currency: RwSignal<String>,
    pub balance: RwSignal<String>,
    pub remark: RwSignal<String>,

    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl PaymentDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            community_id: RwSignal::new(String::new()),
            title: RwSignal::new(String::new()),
            payment_type: RwSignal::new(PaymentType::default().code().to_string()),
            iban: RwSignal::new(String::new()),
            sort_code: RwSignal::new(String::new()),
            currency: RwSignal::new(Currency::default().code().to_string()),
            balance: RwSignal::new("0".to_string()),
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
                Ok(payment) => {
                    this.from_record(&payment);
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
            Ok(payment) => payment,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let this = self.clone();
        this.saving.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match model::save_payment(record).await {
                Ok(saved) => {
                    log::info!("Saved payment account {}", saved.id);
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

    fn to_record(&self) -> Result<Payment, String> {
        let balance_text = self.balance.get_untracked();
        let balance = parse_decimal(&balance_text).ok_or_else(|| invalid("Остаток", &balance_text))?;

        Ok(Payment {
            id: self.id.get_untracked().unwrap_or_default(),
            community_id: self.community_id.get_untracked(),
            title: self.title.get_untracked().trim().to_string(),
            payment_type: PaymentType::parse_code(&self.payment_type.get_untracked())
                .unwrap_or_default(),
            iban: self.iban.get_untracked().trim().to_uppercase(),
            sort_code: self.sort_code.get_untracked().trim().to_string(),
            currency: Currency::parse_code(&self.currency.get_untracked()).unwrap_or_default(),
            balance,
            remark: optional_text(&self.remark.get_untracked()),
        })
    }

    fn from_record(&self, payment: &Payment) {
        self.id.set(Some(payment.id.clone()));
        self.community_id.set(payment.community_id.clone());
        self.title.set(payment.title.clone());
        self.payment_type
            .set(payment.payment_type.code().to_string());
        self.iban.set(payment.iban.clone());
        self.sort_code.set(payment.sort_code.clone());
        self.currency.set(payment.currency.code().to_string());
        self.balance.set(payment.balance.to_string());
        self.remark.set(payment.remark.clone().unwrap_or_default());
    }
}

impl Default for PaymentDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iban_uppercased_and_community_kept() {
        let vm = PaymentDetailsVm::new();
        vm.from_record(&Payment {
            id: "pm1".into(),
            community_id: "c1".into(),
            title: "Основной".into(),
            iban: "UA213223130000026007233566001".into(),
            ..Default::default()
        });
        vm.iban.set(" ua213223130000026007233566001 ".into());
        vm.payment_type.set(PaymentType::Deposit.code().to_string());

        let payment = vm.to_record().unwrap();
        assert_eq!(payment.iban, "UA213223130000026007233566001");
        assert_eq!(payment.community_id, "c1");
        assert_eq!(payment.payment_type, PaymentType::Deposit);
        assert!(vm.is_edit_mode().get_untracked());
        assert!(vm.validate().is_ok());
    }

    #[test]
    fn test_short_iban_rejected() {
        let vm = PaymentDetailsVm::new();
        vm.title.set("Основной".into());
        vm.iban.set("UA21".into());
        assert_eq!(
            vm.validate(),
            Err("IBAN должен содержать не менее 15 латинских букв и цифр".to_string())
        );
    }
}
