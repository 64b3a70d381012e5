use crate::dashboards::d001_overview::api::{self, OverviewData, BIRTHDAY_HORIZON_DAYS};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{tab_key, tab_label_for_key};
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use contracts::dashboards::d001_overview::{Birthday, Debtor, Widget};
use contracts::domain::common::Resource;
use contracts::shared::format::{format_amount, format_date};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Ширина полосы диаграммы в процентах от самой длинной
fn bar_percent(value: usize, max: usize) -> f64 {
    if max == 0 {
        0.0
    } else {
        value as f64 * 100.0 / max as f64
    }
}

fn widget_card(widget: Widget) -> impl IntoView {
    view! {
        <div class="dashboard-widget">
            <div class="dashboard-widget__icon">{icon(widget.icon)}</div>
            <div class="dashboard-widget__body">
                <div class="dashboard-widget__value">{widget.value}</div>
                <div class="dashboard-widget__title">{widget.title}</div>
            </div>
        </div>
    }
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let data = RwSignal::new(None::<OverviewData>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let today = today();

    let reload = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::load_overview().await {
                Ok(loaded) => {
                    log::debug!("Overview loaded: {} persons", loaded.persons.len());
                    data.set(Some(loaded));
                }
                Err(e) => {
                    log::error!("Failed to load overview: {}", e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    };
    reload();

    let open_accounts = move |_| {
        let key = tab_key(Resource::Accounts);
        ctx.open_tab(&key, tab_label_for_key(&key));
    };

    let widgets = move || {
        data.with(|d| d.as_ref().map(|d| d.counts().widgets()))
            .map(|widgets| widgets.into_iter().map(widget_card).collect_view())
    };

    let age_chart = move || {
        data.with(|d| d.as_ref().map(|d| d.age_groups(today))).map(|groups| {
            let rows = groups.rows();
            let max = rows.iter().map(|(_, _, count)| *count).max().unwrap_or(0);
            rows.into_iter()
                .map(|(label, range, count)| {
                    view! {
                        <div class="bar-chart__row" title=range>
                            <span class="bar-chart__label">{label}</span>
                            <div class="bar-chart__track">
                                <div
                                    class="bar-chart__bar"
                                    style:width=format!("{:.1}%", bar_percent(count, max))
                                ></div>
                            </div>
                            <span class="bar-chart__value">{count}</span>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    let gender = move || {
        data.with(|d| d.as_ref().map(|d| d.gender_split())).map(|split| {
            let men = split.men_percent().unwrap_or(0.0);
            let women = split.women_percent().unwrap_or(0.0);
            view! {
                <div class="split-bar">
                    <div class="split-bar__part split-bar__part--men" style:width=format!("{:.1}%", men)></div>
                    <div class="split-bar__part split-bar__part--women" style:width=format!("{:.1}%", women)></div>
                </div>
                <div class="split-bar__legend">
                    <span>{format!("Мужчины: {} ({:.0}%)", split.men, men)}</span>
                    <span>{format!("Женщины: {} ({:.0}%)", split.women, women)}</span>
                </div>
            }
        })
    };

    let debtors = move || data.with(|d| d.as_ref().map(OverviewData::debtors).unwrap_or_default());
    let birthdays = move || data.with(|d| d.as_ref().map(|d| d.birthdays(today)).unwrap_or_default());

    view! {
        <div class="page dashboard">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Главная"</h1>
                </div>
                <div class="page__header-right">
                    <button
                        class="button button--secondary"
                        disabled=move || loading.get()
                        on:click=move |_| reload()
                    >
                        {icon("refresh")} " Обновить"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}
            <Show when=move || loading.get()>
                <div class="dashboard__loading">"Загрузка данных..."</div>
            </Show>

            <div class="dashboard__widgets">{widgets}</div>

            <div class="dashboard__grid">
                <section class="dashboard__card">
                    <h2 class="dashboard__card-title">"Возрастные группы жильцов"</h2>
                    <div class="bar-chart">{age_chart}</div>
                </section>

                <section class="dashboard__card">
                    <h2 class="dashboard__card-title">"Мужчины и женщины"</h2>
                    {gender}
                </section>

                <section class="dashboard__card">
                    <h2 class="dashboard__card-title">
                        "Должники по содержанию дома"
                        <button class="button button--link" on:click=open_accounts>
                            "Лицевые счета"
                        </button>
                    </h2>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Адрес"</th>
                                <th class="table__cell--number">"Долг"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=debtors
                                key=|d: &Debtor| d.account_id.clone()
                                children=|d: Debtor| view! {
                                    <tr>
                                        <td>{d.address}</td>
                                        <td class="table__cell--number">{format_amount(-d.balance)}</td>
                                    </tr>
                                }
                            />
                        </tbody>
                    </table>
                </section>

                <section class="dashboard__card">
                    <h2 class="dashboard__card-title">
                        {format!("Дни рождения в ближайшие {} дней", BIRTHDAY_HORIZON_DAYS)}
                    </h2>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Жилец"</th>
                                <th>"Дата"</th>
                                <th class="table__cell--number">"Исполнится"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=birthdays
                                key=|b: &Birthday| b.person_id.clone()
                                children=|b: Birthday| view! {
                                    <tr>
                                        <td>{b.name}</td>
                                        <td>{format_date(b.next)}</td>
                                        <td class="table__cell--number">{b.turns}</td>
                                    </tr>
                                }
                            />
                        </tbody>
                    </table>
                </section>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_percent_scales_to_longest() {
        assert_eq!(bar_percent(5, 10), 50.0);
        assert_eq!(bar_percent(10, 10), 100.0);
        assert_eq!(bar_percent(0, 0), 0.0);
    }
}
