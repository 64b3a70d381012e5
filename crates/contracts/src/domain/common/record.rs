use super::Resource;
use serde::{de::DeserializeOwned, Serialize};

/// Трейт для записей, которые приходят из API
///
/// Определяет идентификацию записи, текст для поиска и ключ сортировки,
/// а также статические метаданные коллекции.
pub trait Record: Clone + Serialize + DeserializeOwned + std::fmt::Debug + 'static {
    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    /// Идентификатор записи в API
    fn id(&self) -> &str;

    /// Заголовок записи в списке
    fn title(&self) -> String;

    /// Текст, по которому работает строка поиска
    fn search_text(&self) -> String {
        self.title()
    }

    /// Ключ сортировки списка
    fn sort_key(&self) -> String {
        self.title()
    }

    /// Проверка обязательных полей перед отправкой в API
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    // ============================================================================
    // Метаданные коллекции
    // ============================================================================

    /// Индекс записи в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Коллекция API
    fn resource() -> Resource;

    /// Сегмент пути коллекции (например, "buildings")
    fn collection_name() -> &'static str {
        Self::resource().path()
    }

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Полное имя записи (например, "a001_buildings")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}

/// Ошибка обязательного текстового поля
pub(crate) fn require(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// ФИО в порядке "Фамилия Имя Отчество" без хвостовых пробелов
pub fn full_name(second_name: &str, first_name: &str, middle_name: Option<&str>) -> String {
    format!("{} {} {}", second_name, first_name, middle_name.unwrap_or(""))
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(full_name("Шевченко", "Тарас", Some("Григорьевич")), "Шевченко Тарас Григорьевич");
        assert_eq!(full_name("Шевченко", "Тарас", None), "Шевченко Тарас");
    }

    #[test]
    fn test_require() {
        assert!(require("  ", "empty").is_err());
        assert!(require("x", "empty").is_ok());
    }
}
