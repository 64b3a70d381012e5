//! Адрес backend-шлюза для запросов из браузера

/// Базовый URL API: хост текущей страницы, порт backend 3000.
///
/// Пустая строка, если `window` недоступен.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Полный URL по пути вида `/api/buildings`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Путь коллекции или записи: `/api/{collection}[/{id}]`
pub fn api_path(collection: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("/api/{}/{}", collection, urlencoding::encode(id)),
        None => format!("/api/{}", collection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_path() {
        assert_eq!(api_path("buildings", None), "/api/buildings");
        assert_eq!(api_path("votes", Some("a/b")), "/api/votes/a%2Fb");
    }
}
