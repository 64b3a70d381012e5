use serde::{Deserialize, Serialize};

use crate::domain::common::record::require;
use crate::domain::common::{Record, Resource};

/// Опрос собственников дома
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub building_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Время создания (ISO-8601)
    #[serde(default)]
    pub time: String,
}

impl Record for Poll {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.building_id, "Не выбран дом")?;
        require(&self.title, "Тема опроса не может быть пустой")
    }

    fn aggregate_index() -> &'static str {
        "a011"
    }

    fn resource() -> Resource {
        Resource::Polls
    }

    fn element_name() -> &'static str {
        "Опрос"
    }

    fn list_name() -> &'static str {
        "Опросы"
    }
}
