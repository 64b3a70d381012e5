//! Боковое меню: группы коллекций, каждый пункт открывает таб списка

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{tab_key, tab_label_for_key, DASHBOARD_KEY, DASHBOARD_LABEL};
use crate::shared::icons::icon;
use contracts::domain::common::Resource;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(Resource, &'static str)>, // (collection, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "housing",
            label: "Жилфонд",
            icon: "building",
            items: vec![
                (Resource::Buildings, "building"),
                (Resource::Apartments, "home"),
                (Resource::Persons, "users"),
            ],
        },
        MenuGroup {
            id: "billing",
            label: "Начисления",
            icon: "receipt",
            items: vec![
                (Resource::Accounts, "wallet"),
                (Resource::Invoices, "receipt"),
                (Resource::Services, "droplet"),
                (Resource::Snapshots, "calendar"),
            ],
        },
        MenuGroup {
            id: "maintenance",
            label: "Обслуживание",
            icon: "briefcase",
            items: vec![
                (Resource::Contracts, "file-text"),
                (Resource::Employees, "user"),
                (Resource::Tools, "tool"),
            ],
        },
        MenuGroup {
            id: "finance",
            label: "Финансы",
            icon: "credit-card",
            items: vec![
                (Resource::Payments, "credit-card"),
                (Resource::Arrangements, "send"),
            ],
        },
        MenuGroup {
            id: "meetings",
            label: "Собрания",
            icon: "check-square",
            items: vec![
                (Resource::Polls, "check-square"),
                (Resource::Votes, "users"),
                (Resource::Publications, "megaphone"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["housing".to_string()]);

    view! {
        <div class="app-sidebar__content">
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || ctx.active.get().as_deref() == Some(DASHBOARD_KEY)
                style:padding-left="12px"
                on:click=move |_| ctx.open_tab(DASHBOARD_KEY, DASHBOARD_LABEL)
            >
                <div class="app-sidebar__item-content">
                    {icon("layout-dashboard")}
                    <span>{DASHBOARD_LABEL}</span>
                </div>
            </div>
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();
                let items_stored = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(resource, icon_name)| {
                                    let key = tab_key(resource);
                                    let label = tab_label_for_key(&key);
                                    let key_for_active = key.clone();
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(key_for_active.as_str())
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(&key, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
