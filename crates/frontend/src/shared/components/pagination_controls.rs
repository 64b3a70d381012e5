use crate::shared::icons::icon;
use contracts::shared::pagination::{PageInfo, PageSize, PaginationState};
use leptos::prelude::*;

/// Навигация по страницам и выбор размера страницы.
///
/// Состояние хранит вызывающий компонент; флаги кнопок берутся из
/// `PageInfo` текущей страницы, смена размера удерживает номер страницы в
/// пределах нового количества страниц.
#[component]
pub fn PaginationControls(
    state: RwSignal<PaginationState>,
    /// Сводка текущей страницы после поиска
    #[prop(into)]
    info: Signal<PageInfo>,
) -> impl IntoView {
    let can_go_previous = move || info.get().can_go_previous;
    let can_go_next = move || info.get().can_go_next;

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| state.update(PaginationState::reset)
                disabled=move || !can_go_previous()
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| state.update(PaginationState::previous)
                disabled=move || !can_go_previous()
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || info.get().label()}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = info.get_untracked().total;
                    state.update(|s| s.next(total));
                }
                disabled=move || !can_go_next()
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let last = info.get_untracked().last_index();
                    state.update(|s| s.page_index = last);
                }
                disabled=move || !can_go_next()
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let size = event_target_value(&ev)
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| PageSize::new(n).ok());
                    if let Some(size) = size {
                        let total = info.get_untracked().total;
                        state.update(|s| s.set_page_size(size, total));
                    }
                }
                prop:value=move || state.get().page_size.get().to_string()
            >
                {PageSize::OPTIONS.into_iter().map(|size| {
                    view! {
                        <option
                            value=size.to_string()
                            selected=move || state.get().page_size.get() == size
                        >
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
