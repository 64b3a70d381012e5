//! Таблица с постраничным выводом.
//!
//! Получает уже отфильтрованные и отсортированные строки, режет их на
//! страницы через `PaginationState::page` и при сокращении набора строк
//! возвращает курсор на последнюю существующую страницу.

use super::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use contracts::shared::pagination::PaginationState;
use leptos::prelude::*;

/// Колонка таблицы: заголовок и функция значения ячейки
pub struct Column<T> {
    pub title: &'static str,
    pub value: fn(&T) -> String,
}

impl<T> Column<T> {
    pub fn new(title: &'static str, value: fn(&T) -> String) -> Self {
        Self { title, value }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

#[component]
pub fn Datatable<T>(
    #[prop(into)] rows: Signal<Vec<T>>,
    columns: Vec<Column<T>>,
    /// Клик по строке (открыть запись)
    #[prop(optional)]
    on_row_click: Option<Callback<T>>,
    /// Кнопка удаления в каждой строке
    #[prop(optional)]
    on_delete: Option<Callback<T>>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let state = RwSignal::new(PaginationState::default());
    let total = Signal::derive(move || rows.with(Vec::len));

    // Поиск мог сократить набор строк
    Effect::new(move |_| {
        let total = total.get();
        let current = state.get_untracked();
        let mut clamped = current;
        clamped.clamp(total);
        if clamped != current {
            state.set(clamped);
        }
    });

    let page_rows = Signal::derive(move || {
        let cursor = state.get();
        rows.with(|all| cursor.page(all).rows.to_vec())
    });
    let info = Signal::derive(move || {
        let cursor = state.get();
        rows.with(|all| cursor.page(all).info())
    });

    let column_count = columns.len() + usize::from(on_delete.is_some());
    let columns = StoredValue::new(columns);

    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        {columns.with_value(|cols| {
                            cols.iter()
                                .map(|c| view! { <th class="table__header-cell">{c.title}</th> })
                                .collect_view()
                        })}
                        {on_delete.is_some().then(|| view! { <th class="table__header-cell"></th> })}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = page_rows.get();
                        if rows.is_empty() {
                            return view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--empty" colspan=column_count.to_string()>
                                        "Нет данных"
                                    </td>
                                </tr>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|row| {
                                let row_for_click = row.clone();
                                let row_for_delete = row.clone();
                                view! {
                                    <tr
                                        class="table__row"
                                        class:table__row--clickable=on_row_click.is_some()
                                        on:click=move |_| {
                                            if let Some(cb) = on_row_click {
                                                cb.run(row_for_click.clone());
                                            }
                                        }
                                    >
                                        {columns.with_value(|cols| {
                                            cols.iter()
                                                .map(|c| view! { <td class="table__cell">{(c.value)(&row)}</td> })
                                                .collect_view()
                                        })}
                                        {on_delete.map(|cb| view! {
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--icon"
                                                    title="Удалить"
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        cb.run(row_for_delete.clone());
                                                    }
                                                >
                                                    {icon("delete")}
                                                </button>
                                            </td>
                                        })}
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
            <PaginationControls state=state info=info />
        </div>
    }
}
