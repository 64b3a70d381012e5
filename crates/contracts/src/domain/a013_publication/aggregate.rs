use serde::{Deserialize, Serialize};

use crate::domain::common::record::require;
use crate::domain::common::{Record, Resource};

/// Объявление для жильцов дома
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub building_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub time: String,
}

impl Record for Publication {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    /// Новые объявления сортируются по времени публикации
    fn sort_key(&self) -> String {
        self.time.clone()
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.building_id, "Не выбран дом")?;
        require(&self.title, "Заголовок не может быть пустым")
    }

    fn aggregate_index() -> &'static str {
        "a013"
    }

    fn resource() -> Resource {
        Resource::Publications
    }

    fn element_name() -> &'static str {
        "Объявление"
    }

    fn list_name() -> &'static str {
        "Объявления"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::collation::{sort_by, SortDirection};

    #[test]
    fn test_newest_first() {
        let publication = |time: &str| Publication {
            building_id: "b1".into(),
            title: time.into(),
            time: time.into(),
            ..Default::default()
        };
        let mut rows = vec![
            publication("2024-01-09T10:00:00Z"),
            publication("2024-01-10T08:30:00Z"),
            publication("2023-12-31T23:59:00Z"),
        ];
        sort_by(&mut rows, |p| p.sort_key(), SortDirection::Descending);
        assert_eq!(rows[0].time, "2024-01-10T08:30:00Z");
        assert_eq!(rows[2].time, "2023-12-31T23:59:00Z");
        assert_eq!(Publication::collection_name(), "publications");
    }
}
