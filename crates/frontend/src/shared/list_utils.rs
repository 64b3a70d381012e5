//! Поиск и сортировка списков: строка поиска с debounce, выбор сортировки и
//! чистый конвейер "поиск → сортировка", который страницы применяют до пагинации.

use contracts::domain::common::Record;
use contracts::shared::collation::{sort_by, SortDirection, SortOption};
use contracts::shared::search::filter_records;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const SEARCH_DEBOUNCE_MS: u32 = 300;

// ============================================================================
// Sort fields
// ============================================================================

/// Поле, по которому можно отсортировать список
pub struct SortField<T> {
    /// Имя поля в значении сортировки (`ascByTitle` → "Title")
    pub field: &'static str,
    pub label: &'static str,
    pub key: fn(&T) -> String,
}

impl<T> SortField<T> {
    pub fn new(field: &'static str, label: &'static str, key: fn(&T) -> String) -> Self {
        Self { field, label, key }
    }
}

impl<T> Clone for SortField<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SortField<T> {}

/// Сортировка по умолчанию: первое поле по возрастанию
pub fn default_sort<T>(fields: &[SortField<T>]) -> SortOption {
    let field = fields.first().map_or("Title", |f| f.field);
    SortOption::new(field, SortDirection::Ascending)
}

/// Ключ сортировки для выбранного поля; неизвестное поле сортирует по `Record::sort_key`
pub fn sort_key_for<T: Record>(fields: &[SortField<T>], option: &SortOption) -> fn(&T) -> String {
    fields
        .iter()
        .find(|f| f.field == option.field)
        .map(|f| f.key)
        .unwrap_or(T::sort_key)
}

/// Записи, прошедшие поиск, в выбранном порядке
pub fn search_and_sort<T: Record>(
    items: &[T],
    needle: &str,
    fields: &[SortField<T>],
    option: &SortOption,
) -> Vec<T> {
    let mut rows = filter_records(items, needle.trim(), T::search_text);
    sort_by(&mut rows, sort_key_for(fields, option), option.direction);
    rows
}

// ============================================================================
// Components
// ============================================================================

/// Строка поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для подсветки)
    #[prop(into)]
    value: Signal<String>,
    /// Вызывается после паузы в наборе
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    // Локальное значение input до debounce
    let (input_value, set_input_value) = signal(value.get_untracked());
    let generation = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let current = generation.get_value() + 1;
        generation.set_value(current);
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            // Более поздний ввод отменяет этот
            if generation.try_get_value() == Some(current) {
                on_change.run(new_value);
            }
        });
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        generation.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Очистить">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Выбор сортировки: по возрастанию и по убыванию для каждого поля
#[component]
pub fn SortSelect(
    /// (поле, подпись)
    fields: Vec<(&'static str, &'static str)>,
    #[prop(into)] value: Signal<SortOption>,
    #[prop(into)] on_change: Callback<SortOption>,
) -> impl IntoView {
    let options: Vec<(String, String)> = fields
        .iter()
        .flat_map(|&(field, label)| {
            [SortDirection::Ascending, SortDirection::Descending]
                .into_iter()
                .map(move |direction| {
                    let arrow = if direction.is_ascending() { "▲" } else { "▼" };
                    (
                        SortOption::new(field, direction).value(),
                        format!("{} {}", label, arrow),
                    )
                })
        })
        .collect();

    view! {
        <select
            class="sort-select"
            prop:value=move || value.get().value()
            on:change=move |ev| {
                if let Some(option) = SortOption::parse(&event_target_value(&ev)) {
                    on_change.run(option);
                }
            }
        >
            {options.into_iter().map(|(option_value, label)| {
                let option_for_selected = option_value.clone();
                view! {
                    <option
                        value=option_value
                        selected=move || value.get().value() == option_for_selected
                    >
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_apartment::Apartment;

    fn apartment(number: &str, phone: &str) -> Apartment {
        Apartment {
            id: number.into(),
            building_id: "b1".into(),
            apartment_number: number.into(),
            phone_number: Some(phone.into()),
            ..Default::default()
        }
    }

    fn fields() -> Vec<SortField<Apartment>> {
        vec![
            SortField::new("ApartmentNumber", "Номер", |a: &Apartment| a.apartment_number.clone()),
            SortField::new("Phone", "Телефон", |a: &Apartment| a.phone_number.clone().unwrap_or_default()),
        ]
    }

    fn numbers(rows: &[Apartment]) -> Vec<&str> {
        rows.iter().map(|a| a.apartment_number.as_str()).collect()
    }

    #[test]
    fn test_default_sort() {
        assert_eq!(default_sort(&fields()).value(), "ascByApartmentNumber");
        assert_eq!(default_sort::<Apartment>(&[]).value(), "ascByTitle");
    }

    #[test]
    fn test_search_then_sort() {
        let items = vec![
            apartment("10", "+380 50 111"),
            apartment("2", "+380 67 222"),
            apartment("1", "+380 50 333"),
        ];

        let option = SortOption::new("ApartmentNumber", SortDirection::Ascending);
        assert_eq!(numbers(&search_and_sort(&items, "", &fields(), &option)), ["1", "2", "10"]);

        let option = SortOption::new("ApartmentNumber", SortDirection::Descending);
        assert_eq!(numbers(&search_and_sort(&items, " 50 ", &fields(), &option)), ["10", "1"]);
    }

    #[test]
    fn test_unknown_field_falls_back_to_sort_key() {
        let items = vec![apartment("10", "a"), apartment("9", "b")];
        let option = SortOption::new("Missing", SortDirection::Ascending);
        assert_eq!(numbers(&search_and_sort(&items, "", &fields(), &option)), ["9", "10"]);
    }
}
