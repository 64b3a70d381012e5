use crate::domain::a004_account::ui::details::AccountDetails;
use crate::shared::components::{Column, RecordListPage, RecordListState};
use crate::shared::list_utils::SortField;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a004_account::Account;
use contracts::shared::format::format_amount;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn AccountList() -> impl IntoView {
    let state = RecordListState::<Account>::new();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details = move |account: Option<Account>| {
        state.open_details(
            modal_stack,
            "account-details-modal",
            account.map(|acc| acc.id),
            |id, on_saved, on_cancel| {
                view! { <AccountDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
            },
        );
    };

    let columns = vec![
        Column::new("Лицевой счёт", |a: &Account| a.account_number.clone()),
        Column::new("Услуга", |a: &Account| a.service_type.label().to_string()),
        Column::new("Баланс", |a: &Account| format_amount(a.balance)),
        Column::new("Долг", |a: &Account| {
            if a.is_in_debt() { "да".into() } else { String::new() }
        }),
    ];
    let sort_fields = vec![
        SortField::new("Number", "Номер счёта", |a: &Account| a.account_number.clone()),
        SortField::new("Service", "Услуга", |a: &Account| a.service_type.label().to_string()),
    ];

    view! {
        <RecordListPage
            columns=columns
            sort_fields=sort_fields
            state=state
            on_open=Callback::new(open_details)
        />
    }
}
