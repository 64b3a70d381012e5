//! Natural, case- and accent-insensitive string ordering for list sorting.
//!
//! Behaves like a base-sensitivity collator with numeric mode: digit runs
//! compare by value ("Building 9" < "Building 10"), letters compare after
//! case folding and accent stripping ("a" == "Á", "ё" == "е"). The short
//! letters "й" and "ў" stay distinct from "и" and "у", and "ß" matches "ss".
//! Character classes order as whitespace < punctuation < symbols < digits
//! < letters.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }

    pub fn prefix(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Selected value of a sort dropdown, e.g. `ascByTitle` / `descByLegalAddress`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortOption {
    pub field: String,
    pub direction: SortDirection,
}

impl SortOption {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Parses `ascByField` / `descByField`. The field part is returned as written.
    pub fn parse(value: &str) -> Option<Self> {
        let (direction, field) = if let Some(rest) = value.strip_prefix("ascBy") {
            (SortDirection::Ascending, rest)
        } else if let Some(rest) = value.strip_prefix("descBy") {
            (SortDirection::Descending, rest)
        } else {
            return None;
        };
        if field.is_empty() {
            return None;
        }
        Some(Self::new(field, direction))
    }

    pub fn value(&self) -> String {
        format!("{}By{}", self.direction.prefix(), self.field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Symbol,
    Digit,
    Letter,
}

fn classify(ch: char) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Whitespace
    } else if ch.is_ascii_digit() {
        CharClass::Digit
    } else if ch.is_alphanumeric() {
        CharClass::Letter
    } else if ch.is_ascii_punctuation() && !"$+<=>^`|~".contains(ch) {
        CharClass::Punctuation
    } else {
        CharClass::Symbol
    }
}

/// Folded character plus its rank among letters sharing the same base.
/// Cyrillic letters outside the Russian alphabet sort right after their
/// base letter: `и < і < й`, `у < ў < ф`.
type Unit = (char, u8);

const COMBINING_BREVE: char = '\u{0306}';

fn letter_unit(ch: char) -> Unit {
    match ch {
        'ґ' => ('г', 1),
        'ђ' => ('д', 1),
        'є' => ('е', 1),
        'ѕ' => ('з', 1),
        'і' => ('и', 1),
        'й' => ('и', 2),
        'ј' => ('и', 3),
        'љ' => ('л', 1),
        'њ' => ('н', 1),
        'ћ' => ('т', 1),
        'ў' => ('у', 1),
        'џ' => ('ч', 1),
        other => (other, 0),
    }
}

/// Lowercased, accent-stripped units of `value`. The breve of `й` and `ў`
/// is kept, and `ß` expands to `ss`.
fn fold(value: &str) -> Vec<Unit> {
    let mut units: Vec<Unit> = Vec::with_capacity(value.len());
    for ch in value.nfd() {
        if is_combining_mark(ch) {
            if ch == COMBINING_BREVE {
                if let Some(last) = units.last_mut() {
                    match *last {
                        ('и', 0) => *last = letter_unit('й'),
                        ('у', 0) => *last = letter_unit('ў'),
                        _ => {}
                    }
                }
            }
            continue;
        }
        for lower in ch.to_lowercase() {
            if lower == 'ß' {
                units.extend([('s', 0), ('s', 0)]);
            } else {
                units.push(letter_unit(lower));
            }
        }
    }
    units
}

fn is_digit(unit: &Unit) -> bool {
    unit.0.is_ascii_digit()
}

fn compare_digit_runs(a: &[Unit], b: &[Unit]) -> Ordering {
    let trim = |run: &[Unit]| -> usize { run.iter().take_while(|unit| unit.0 == '0').count() };
    let a = &a[trim(a).min(a.len().saturating_sub(1))..];
    let b = &b[trim(b).min(b.len().saturating_sub(1))..];
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn digit_run_end(units: &[Unit], start: usize) -> usize {
    units[start..]
        .iter()
        .position(|unit| !is_digit(unit))
        .map_or(units.len(), |offset| start + offset)
}

/// Natural comparison at base sensitivity.
pub fn compare_natural(a: &str, b: &str) -> Ordering {
    let a = fold(a);
    let b = fold(b);
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        let (ua, ub) = (a[i], b[j]);
        if is_digit(&ua) && is_digit(&ub) {
            let end_a = digit_run_end(&a, i);
            let end_b = digit_run_end(&b, j);
            let ordering = compare_digit_runs(&a[i..end_a], &b[j..end_b]);
            if ordering != Ordering::Equal {
                return ordering;
            }
            i = end_a;
            j = end_b;
            continue;
        }

        let ordering = classify(ua.0).cmp(&classify(ub.0)).then_with(|| ua.cmp(&ub));
        if ordering != Ordering::Equal {
            return ordering;
        }
        i += 1;
        j += 1;
    }

    (a.len() - i).cmp(&(b.len() - j))
}

/// Equal under [`compare_natural`].
pub fn natural_key_eq(a: &str, b: &str) -> bool {
    compare_natural(a, b) == Ordering::Equal
}

/// Stable in-place sort by a string key. Descending swaps the comparator
/// arguments, so records with equal keys keep their input order either way.
pub fn sort_by<T, K, F>(records: &mut [T], key_fn: F, direction: SortDirection)
where
    F: Fn(&T) -> K,
    K: AsRef<str>,
{
    records.sort_by(|x, y| {
        let (kx, ky) = (key_fn(x), key_fn(y));
        match direction {
            SortDirection::Ascending => compare_natural(kx.as_ref(), ky.as_ref()),
            SortDirection::Descending => compare_natural(ky.as_ref(), kx.as_ref()),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        a: &'static str,
    }

    fn keys(rows: &[Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.a).collect()
    }

    #[test]
    fn test_numeric_and_case_insensitive() {
        let mut rows = vec![
            Row { id: 0, a: "Item 10" },
            Row { id: 1, a: "Item 2" },
            Row { id: 2, a: "item 1" },
        ];
        sort_by(&mut rows, |r| r.a, SortDirection::Ascending);
        assert_eq!(keys(&rows), vec!["item 1", "Item 2", "Item 10"]);
    }

    #[test]
    fn test_descending_is_reverse_without_ties() {
        let source = vec![
            Row { id: 0, a: "вул. Шевченка, 12" },
            Row { id: 1, a: "вул. Шевченка, 2" },
            Row { id: 2, a: "Building 10" },
            Row { id: 3, a: "Building 9" },
            Row { id: 4, a: "" },
        ];
        let mut asc = source.clone();
        let mut desc = source.clone();
        sort_by(&mut asc, |r| r.a, SortDirection::Ascending);
        sort_by(&mut desc, |r| r.a, SortDirection::Descending);
        desc.reverse();
        assert_eq!(asc, desc);
        assert_eq!(asc[0].a, "");
        assert_eq!(asc[1].a, "Building 9");
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let mut rows = vec![
            Row { id: 0, a: "Ábc" },
            Row { id: 1, a: "zz" },
            Row { id: 2, a: "abc" },
            Row { id: 3, a: "ABC" },
        ];
        sort_by(&mut rows, |r| r.a, SortDirection::Ascending);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![0, 2, 3, 1]);

        sort_by(&mut rows, |r| r.a, SortDirection::Descending);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_base_sensitivity() {
        assert!(natural_key_eq("a", "Á"));
        assert!(natural_key_eq("Ёлка", "елка"));
        assert!(natural_key_eq("", ""));
        assert_eq!(compare_natural("a", "b"), Ordering::Less);
        assert_eq!(compare_natural("", "a"), Ordering::Less);
    }

    #[test]
    fn test_short_letters_are_distinct() {
        assert_eq!(compare_natural("й", "и"), Ordering::Greater);
        assert_eq!(compare_natural("Й", "к"), Ordering::Less);
        assert_eq!(compare_natural("ў", "у"), Ordering::Greater);
        assert_eq!(compare_natural("ў", "ф"), Ordering::Less);
        assert!(natural_key_eq("Йорданська", "йорданська"));
    }

    #[test]
    fn test_sharp_s_matches_double_s() {
        assert!(natural_key_eq("Straße", "Strasse"));
        assert!(natural_key_eq("STRASSE", "straße"));
        assert_eq!(compare_natural("Straße", "Strasse 2"), Ordering::Less);
    }

    #[test]
    fn test_ukrainian_street_order() {
        let mut rows = vec![
            Row { id: 0, a: "Київська" },
            Row { id: 1, a: "Йорданська" },
            Row { id: 2, a: "Іванова" },
            Row { id: 3, a: "Кизилова" },
            Row { id: 4, a: "Иванова" },
            Row { id: 5, a: "Ґонти" },
            Row { id: 6, a: "Гоголя" },
        ];
        sort_by(&mut rows, |r| r.a, SortDirection::Ascending);
        assert_eq!(
            keys(&rows),
            vec![
                "Гоголя",
                "Ґонти",
                "Иванова",
                "Іванова",
                "Йорданська",
                "Кизилова",
                "Київська"
            ]
        );
    }

    #[test]
    fn test_digit_runs() {
        assert_eq!(compare_natural("2", "10"), Ordering::Less);
        assert_eq!(compare_natural("007", "7"), Ordering::Equal);
        assert_eq!(compare_natural("flat 0", "flat 00"), Ordering::Equal);
        assert_eq!(compare_natural("A-12b", "A-12a"), Ordering::Greater);
        assert_eq!(compare_natural("12", "12a"), Ordering::Less);
    }

    #[test]
    fn test_character_classes() {
        assert_eq!(compare_natural(" ", "."), Ordering::Less);
        assert_eq!(compare_natural(".", "$"), Ordering::Less);
        assert_eq!(compare_natural("$", "1"), Ordering::Less);
        assert_eq!(compare_natural("9", "a"), Ordering::Less);
    }

    #[test]
    fn test_sort_option_round_trip() {
        let option = SortOption::parse("descByLegalAddress").unwrap();
        assert_eq!(option.field, "LegalAddress");
        assert_eq!(option.direction, SortDirection::Descending);
        assert_eq!(option.value(), "descByLegalAddress");
        assert!(SortOption::parse("ascBy").is_none());
        assert!(SortOption::parse("byTitle").is_none());
        assert_eq!(SortDirection::Ascending.toggle(), SortDirection::Descending);
    }
}
