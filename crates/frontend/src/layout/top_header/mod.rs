//! Верхняя панель: переключатель бокового меню, название и источник данных шлюза

use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_client;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn source_label(source: &str) -> &'static str {
    match source {
        "memory" => "локальные данные",
        "upstream" => "API ОСББ",
        _ => "неизвестный источник",
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();

    // None, пока шлюз не ответил; Err - шлюз недоступен
    let source = RwSignal::new(None::<Result<String, String>>);
    spawn_local(async move {
        let result = api_client::data_source().await;
        if let Err(e) = &result {
            log::warn!("Gateway health check failed: {}", e);
        }
        source.set(Some(result));
    });

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Скрыть навигацию" } else { "Показать навигацию" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"ОСББ: администрирование"</span>
            </div>
            <div class="top-header__actions">
                {move || source.get().map(|result| match result {
                    Ok(name) => view! {
                        <span class="top-header__badge">{source_label(&name)}</span>
                    }.into_any(),
                    Err(_) => view! {
                        <span class="top-header__badge top-header__badge--error">"шлюз недоступен"</span>
                    }.into_any(),
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_label() {
        assert_eq!(source_label("memory"), "локальные данные");
        assert_eq!(source_label("upstream"), "API ОСББ");
        assert_eq!(source_label("sqlite"), "неизвестный источник");
    }
}
