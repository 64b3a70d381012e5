use crate::domain::a006_contract::ui::details::ContractDetails;
use crate::shared::components::{Column, RecordListPage, RecordListState};
use crate::shared::date_utils::format_api_date;
use crate::shared::list_utils::SortField;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a006_contract::Contract;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ContractList() -> impl IntoView {
    let state = RecordListState::<Contract>::new();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details = move |contract: Option<Contract>| {
        state.open_details(
            modal_stack,
            "contract-details-modal",
            contract.map(|c| c.id),
            |id, on_saved, on_cancel| {
                view! { <ContractDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
            },
        );
    };

    let columns = vec![
        Column::new("Номер", |c: &Contract| c.contract_number.clone()),
        Column::new("Название", |c: &Contract| c.title.clone()),
        Column::new("Вид", |c: &Contract| c.contract_type.label().to_string()),
        Column::new("Подписан", |c: &Contract| format_api_date(&c.date_of_signing)),
    ];
    let sort_fields = vec![
        SortField::new("Number", "Номер", |c: &Contract| c.contract_number.clone()),
        SortField::new("Title", "Название", |c: &Contract| c.title.clone()),
        SortField::new("Signed", "Дата подписания", |c: &Contract| c.date_of_signing.clone()),
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
