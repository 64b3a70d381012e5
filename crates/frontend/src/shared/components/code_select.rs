use leptos::prelude::*;
use thaw::*;

/// Выпадающий список значений перечисления; код хранится строкой.
#[component]
pub fn CodeSelect(
    label: &'static str,
    value: RwSignal<String>,
    /// Пары (код, подпись), например `Heating::options()`
    options: Vec<(String, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <Select value=value>
                {options
                    .into_iter()
                    .map(|(code, label)| view! { <option value=code>{label}</option> })
                    .collect_view()}
            </Select>
        </div>
    }
}
