//! Разбор полей ввода форм карточек.
//!
//! Поля `<Input>` хранят текст как введён; значения разбираются при
//! сохранении. Запятая принимается как десятичный разделитель, пустое
//! числовое поле означает ноль.

/// Десятичное число любого знака
pub fn parse_decimal(value: &str) -> Option<f64> {
    let value = value.trim().replace(',', ".");
    if value.is_empty() {
        return Some(0.0);
    }
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Сумма, площадь, тариф: отрицательные значения отклоняются
pub fn parse_amount(value: &str) -> Option<f64> {
    parse_decimal(value).filter(|v| *v >= 0.0)
}

/// Целое число; пусто = 0
pub fn parse_int(value: &str) -> Option<i32> {
    let value = value.trim();
    if value.is_empty() {
        return Some(0);
    }
    value.parse::<i32>().ok()
}

/// Необязательное целое: `Ok(None)` для пустого поля, `Err` для мусора
pub fn parse_optional_int(value: &str) -> Result<Option<i32>, ()> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse::<i32>().map(Some).map_err(|_| ())
}

/// Необязательный текст без пробелов по краям
pub fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Ошибка формы для поля `label` с введённым текстом
pub fn invalid(label: &str, value: &str) -> String {
    format!("Некорректное значение поля «{}»: {}", label, value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1250,50"), Some(1250.5));
        assert_eq!(parse_amount(" 99 "), Some(99.0));
        assert_eq!(parse_amount(""), Some(0.0));
        assert_eq!(parse_amount("-5"), None);
        assert_eq!(parse_amount("дорого"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn test_parse_decimal_keeps_sign() {
        assert_eq!(parse_decimal("-120,25"), Some(-120.25));
        assert_eq!(parse_decimal("NaN"), None);
    }

    #[test]
    fn test_integers() {
        assert_eq!(parse_int("16"), Some(16));
        assert_eq!(parse_int(" "), Some(0));
        assert_eq!(parse_int("2,5"), None);
        assert_eq!(parse_optional_int(""), Ok(None));
        assert_eq!(parse_optional_int(" 3 "), Ok(Some(3)));
        assert_eq!(parse_optional_int("третий"), Err(()));
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_text(" +380 44 "), Some("+380 44".to_string()));
        assert_eq!(invalid("Этаж", " x "), "Некорректное значение поля «Этаж»: x");
    }
}
