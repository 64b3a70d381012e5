//! Маппинг tab.key → View

use super::tab_labels::{resource_for_key, DASHBOARD_KEY};
use crate::dashboards::OverviewDashboard;
use crate::domain::a001_building::ui::list::BuildingList;
use crate::domain::a002_apartment::ui::list::ApartmentList;
use crate::domain::a003_person::ui::list::PersonList;
use crate::domain::a004_account::ui::list::AccountList;
use crate::domain::a005_invoice::ui::list::InvoiceList;
use crate::domain::a006_contract::ui::list::ContractList;
use crate::domain::a007_employee::ui::list::EmployeeList;
use crate::domain::a008_tool::ui::list::ToolList;
use crate::domain::a009_payment::ui::list::PaymentList;
use crate::domain::a010_arrangement::ui::list::ArrangementList;
use crate::domain::a011_poll::ui::list::PollList;
use crate::domain::a012_vote::ui::list::VoteList;
use crate::domain::a013_publication::ui::list::PublicationList;
use crate::domain::a014_service::ui::list::ServiceList;
use crate::domain::a015_snapshot::ui::list::SnapshotList;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::common::Resource;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// Неизвестные ключи (например, из устаревшей ссылки `?active=`) дают
/// заглушку с кнопкой закрытия.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    if key == DASHBOARD_KEY {
        return view! { <OverviewDashboard /> }.into_any();
    }

    let Some(resource) = resource_for_key(key) else {
        log::warn!("Unknown tab key: {}", key);
        let key_for_close = key.to_string();
        return view! {
            <div class="placeholder">
                <p>{format!("Раздел '{}' не найден", key)}</p>
                <button
                    class="button button--secondary"
                    on:click=move |_| tabs_store.close_tab(&key_for_close)
                >
                    "Закрыть"
                </button>
            </div>
        }
        .into_any();
    };

    match resource {
        // Жилфонд
        Resource::Buildings => view! { <BuildingList /> }.into_any(),
        Resource::Apartments => view! { <ApartmentList /> }.into_any(),
        Resource::Persons => view! { <PersonList /> }.into_any(),

        // Начисления
        Resource::Accounts => view! { <AccountList /> }.into_any(),
        Resource::Invoices => view! { <InvoiceList /> }.into_any(),
        Resource::Services => view! { <ServiceList /> }.into_any(),
        Resource::Snapshots => view! { <SnapshotList /> }.into_any(),

        // Обслуживание
        Resource::Contracts => view! { <ContractList /> }.into_any(),
        Resource::Employees => view! { <EmployeeList /> }.into_any(),
        Resource::Tools => view! { <ToolList /> }.into_any(),

        // Финансы
        Resource::Payments => view! { <PaymentList /> }.into_any(),
        Resource::Arrangements => view! { <ArrangementList /> }.into_any(),

        // Собрания
        Resource::Polls => view! { <PollList /> }.into_any(),
        Resource::Votes => view! { <VoteList /> }.into_any(),
        Resource::Publications => view! { <PublicationList /> }.into_any(),
    }
}
