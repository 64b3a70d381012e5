//! Страница списка коллекции: загрузка через API-клиент, поиск, сортировка,
//! постраничный вывод, обновление и удаление.

use super::datatable::{Column, Datatable};
use crate::shared::api_client;
use crate::shared::icons::icon;
use crate::shared::list_utils::{default_sort, search_and_sort, SearchInput, SortField, SortSelect};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::common::Record;
use contracts::shared::collation::SortOption;
use leptos::prelude::*;
use leptos::task::spawn_local;

// ============================================================================
// State
// ============================================================================

const DETAILS_MODAL_STYLE: &str = "max-width: min(900px, 95vw); width: min(900px, 95vw);";

/// Загруженные записи коллекции и состояние запроса
pub struct RecordListState<T: Record + Send + Sync> {
    pub items: RwSignal<Vec<T>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
}

impl<T: Record + Send + Sync> Clone for RecordListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Record + Send + Sync> Copy for RecordListState<T> {}

impl<T: Record + Send + Sync> RecordListState<T> {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    /// Перечитать коллекцию
    pub fn refresh(&self) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match api_client::list::<T>().await {
                Ok(items) => {
                    log::debug!("Loaded {} {}", items.len(), T::collection_name());
                    this.items.set(items);
                    this.error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load {}: {}", T::collection_name(), e);
                    this.error.set(Some(e));
                }
            }
            this.loading.set(false);
        });
    }

    /// Удалить запись после подтверждения и перечитать список
    pub fn delete(&self, record: T) {
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message(&format!(
                    "Удалить запись \"{}\"?",
                    record.title()
                ))
                .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let this = *self;
        let id = record.id().to_string();
        spawn_local(async move {
            match api_client::delete::<T>(&id).await {
                Ok(()) => this.refresh(),
                Err(e) => this.error.set(Some(format!("Ошибка удаления: {}", e))),
            }
        });
    }
}

impl<T: Record + Send + Sync> RecordListState<T> {
    /// Открывает карточку записи (`id = None` - новая запись) в модальном
    /// окне. Сохранение закрывает окно и перечитывает список.
    pub fn open_details<F>(
        &self,
        modal_stack: ModalStackService,
        modal_class: &'static str,
        id: Option<String>,
        render: F,
    ) where
        F: Fn(Option<String>, Callback<()>, Callback<()>) -> AnyView + Send + Sync + 'static,
    {
        let this = *self;
        modal_stack.clear();
        modal_stack.push_with_frame(
            Some(DETAILS_MODAL_STYLE.to_string()),
            Some(modal_class.to_string()),
            move |handle| {
                let on_saved = {
                    let handle = handle.clone();
                    Callback::new(move |_| {
                        handle.close();
                        this.refresh();
                    })
                };
                let on_cancel = Callback::new(move |_| handle.close());
                render(id.clone(), on_saved, on_cancel)
            },
        );
    }
}

impl<T: Record + Send + Sync> Default for RecordListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Page
// ============================================================================

#[component]
pub fn RecordListPage<T>(
    columns: Vec<Column<T>>,
    /// Поля выбора сортировки; первое - сортировка по умолчанию
    sort_fields: Vec<SortField<T>>,
    /// Состояние, если странице нужно перечитывать список извне
    #[prop(optional)]
    state: Option<RecordListState<T>>,
    /// Строки до поиска вместо всей коллекции (например, отбор по периоду)
    #[prop(optional, into)]
    scope: Option<Signal<Vec<T>>>,
    /// Открыть запись: `None` - новая
    #[prop(optional)]
    on_open: Option<Callback<Option<T>>>,
    /// Дополнительные элементы панели фильтров
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView
where
    T: Record + Send + Sync,
{
    let state = state.unwrap_or_default();
    state.refresh();

    let search = RwSignal::new(String::new());
    let sort = RwSignal::new(default_sort(&sort_fields));

    let sort_choices: Vec<(&'static str, &'static str)> =
        sort_fields.iter().map(|f| (f.field, f.label)).collect();
    let sort_fields = StoredValue::new(sort_fields);
    let source = scope.unwrap_or_else(|| state.items.into());

    let visible = Signal::derive(move || {
        let needle = search.get();
        let option = sort.get();
        source.with(|items| {
            sort_fields.with_value(|fields| search_and_sort(items, &needle, fields, &option))
        })
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{T::list_name()}</h1>
                    <span class="header__count">{move || visible.with(Vec::len)}</span>
                </div>
                <div class="header__actions">
                    {on_open.map(|open| view! {
                        <button class="button button--primary" on:click=move |_| open.run(None)>
                            {icon("plus")}
                            {"Добавить"}
                        </button>
                    })}
                    <button
                        class="button button--secondary"
                        on:click=move |_| state.refresh()
                        disabled=move || state.loading.get()
                    >
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                </div>
            </div>

            <div class="filter-panel">
                <SearchInput
                    value=search
                    on_change=move |value: String| search.set(value)
                />
                <SortSelect
                    fields=sort_choices
                    value=sort
                    on_change=move |option: SortOption| sort.set(option)
                />
                {children.map(|children| children())}
            </div>

            {move || state.error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <Datatable
                rows=visible
                columns=columns
                on_row_click=Callback::new(move |row: T| {
                    if let Some(open) = on_open {
                        open.run(Some(row));
                    }
                })
                on_delete=Callback::new(move |row: T| state.delete(row))
            />
        </div>
    }
}
