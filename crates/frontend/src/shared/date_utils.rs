/// Названия месяцев и дней недели для календарей, форматирование дат из API
use chrono::{NaiveDate, Utc};
use contracts::shared::calendar::{Month, YearMonth};
use contracts::shared::format::{format_date, parse_iso_date};

pub const MONTH_NAMES: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

pub const MONTH_SHORT_NAMES: [&str; 12] = [
    "Янв", "Фев", "Мар", "Апр", "Май", "Июн", "Июл", "Авг", "Сен", "Окт", "Ноя", "Дек",
];

/// Неделя начинается с понедельника
pub const WEEKDAY_INITIALS: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

pub fn month_name(month: Month) -> &'static str {
    MONTH_NAMES[month.index() as usize]
}

/// Заголовок календаря, например "Март 2024"
pub fn month_title(value: YearMonth) -> String {
    format!("{} {}", month_name(value.month), value.year)
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// ISO-дата из API в виде `dd.mm.yy`; нераспознанное значение возвращается как есть
pub fn format_api_date(value: &str) -> String {
    match parse_iso_date(value) {
        Some(date) => format_date(date),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_title() {
        let march = YearMonth::new(2024, Month::new(2).unwrap());
        assert_eq!(month_title(march), "Март 2024");
        assert_eq!(month_name(Month::DECEMBER), "Декабрь");
    }

    #[test]
    fn test_format_api_date() {
        assert_eq!(format_api_date("2024-03-05T00:00:00Z"), "05.03.24");
        assert_eq!(format_api_date("2024-03-05"), "05.03.24");
        assert_eq!(format_api_date(""), "");
        assert_eq!(format_api_date("invalid"), "invalid");
    }
}
