use crate::domain::a014_service::ui::details::ServiceDetails;
use crate::shared::components::{Column, RecordListPage, RecordListState};
use crate::shared::list_utils::SortField;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a014_service::Service;
use contracts::domain::common::Record;
use contracts::shared::format::format_amount;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ServiceList() -> impl IntoView {
    let state = RecordListState::<Service>::new();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details = move |service: Option<Service>| {
        state.open_details(
            modal_stack,
            "service-details-modal",
            service.map(|s| s.id),
            |id, on_saved, on_cancel| {
                view! { <ServiceDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
            },
        );
    };

    let columns = vec![
        Column::new("Услуга", |s: &Service| s.title()),
        Column::new("Тариф", |s: &Service| format_amount(s.cost)),
    ];
    let sort_fields = vec![
        SortField::new("Type", "Услуга", |s: &Service| s.title()),
        SortField::new("Cost", "Тариф", |s: &Service| format_amount(s.cost)),
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
