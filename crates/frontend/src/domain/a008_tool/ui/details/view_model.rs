use super::model;
use crate::shared::form_utils::{invalid, optional_text, parse_amount};
use chrono::NaiveDate;
use contracts::domain::a008_tool::Tool;
use contracts::domain::common::Record;
use contracts::enums::Currency;
use leptos::prelude::*;

#[derive(Clone)]
pub struct ToolDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub tool_number: RwSignal<String>,
    pub title: RwSignal<String>,
    pub currency: RwSignal<String>,
    /// Стоимость как введена; разбирается при сохранении
    pub cost: RwSignal<String>,
    pub purchased_on: RwSignal<Option<NaiveDate>>,
    pub expires_on: RwSignal<Option<NaiveDate>>,
    pub remark: RwSignal<String>,

    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ToolDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            tool_number: RwSignal::new(String::new()),
            title: RwSignal::new(String::new()),
            currency: RwSignal::new(Currency::Uah.code().to_string()),
            cost: RwSignal::new("0".to_string()),
            purchased_on: RwSignal::new(None),
            expires_on: RwSignal::new(None),
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

    /// Срок службы истёк на сегодня
    pub fn is_expired(&self, today: NaiveDate) -> Signal<bool> {
        let expires_on = self.expires_on;
        Signal::derive(move || expires_on.get().is_some_and(|expiry| expiry < today))
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
                Ok(tool) => {
                    this.from_record(&tool);
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
        let record = match self.to_record().and_then(|tool| tool.validate().map(|_| tool)) {
            Ok(tool) => tool,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let this = self.clone();
        this.saving.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match model::save_tool(record).await {
                Ok(saved) => {
                    log::info!("Saved tool {}", saved.id);
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

    fn to_record(&self) -> Result<Tool, String> {
        let cost_text = self.cost.get_untracked();
        let cost = parse_amount(&cost_text).ok_or_else(|| invalid("Стоимость", &cost_text))?;

        let mut tool = Tool {
            id: self.id.get_untracked().unwrap_or_default(),
            tool_number: self.tool_number.get_untracked().trim().to_string(),
            title: self.title.get_untracked().trim().to_string(),
            currency: Currency::parse_code(&self.currency.get_untracked()).unwrap_or_default(),
            cost,
            remark: optional_text(&self.remark.get_untracked()),
            ..Default::default()
        };
        if let Some(date) = self.purchased_on.get_untracked() {
            tool.set_purchased_on(date);
        }
        if let Some(date) = self.expires_on.get_untracked() {
            tool.set_expires_on(date);
        }
        Ok(tool)
    }

    fn from_record(&self, tool: &Tool) {
        self.id.set(Some(tool.id.clone()));
        self.tool_number.set(tool.tool_number.clone());
        self.title.set(tool.title.clone());
        self.currency.set(tool.currency.code().to_string());
        self.cost.set(tool.cost.to_string());
        self.purchased_on.set(tool.purchased_on());
        self.expires_on.set(tool.expires_on());
        self.remark.set(tool.remark.clone().unwrap_or_default());
    }
}

impl Default for ToolDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}
