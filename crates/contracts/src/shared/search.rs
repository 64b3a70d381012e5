//! Case-insensitive substring search used by the list pages.

/// `true` when `needle` occurs in `haystack` ignoring case. An empty
/// needle matches everything.
pub fn matches(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Keeps the records whose search text contains `needle`, in input order.
pub fn filter_records<T, F>(records: &[T], needle: &str, text_fn: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    if needle.is_empty() {
        return records.to_vec();
    }
    let needle = needle.to_lowercase();
    records
        .iter()
        .filter(|record| text_fn(record).to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        assert!(matches("вул. Хрещатик, 22", "ХРЕЩ"));
        assert!(matches("Anything", ""));
        assert!(!matches("", "a"));
        assert!(!matches("Building 9", "10"));
    }

    #[test]
    fn test_filter_keeps_order() {
        let titles = vec!["Lease 2", "Supply", "lease 1", "Management"];
        let found = filter_records(&titles, "LEASE", |t| t.to_string());
        assert_eq!(found, vec!["Lease 2", "lease 1"]);
        assert_eq!(filter_records(&titles, "", |t| t.to_string()).len(), 4);
    }
}
