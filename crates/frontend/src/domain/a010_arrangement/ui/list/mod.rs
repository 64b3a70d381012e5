use crate::domain::a010_arrangement::ui::details::ArrangementDetails;
use crate::shared::components::{Column, RecordListPage, RecordListState};
use crate::shared::date_utils::format_api_date;
use crate::shared::list_utils::SortField;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a010_arrangement::Arrangement;
use contracts::domain::common::Record;
use contracts::shared::format::format_amount;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ArrangementList() -> impl IntoView {
    let state = RecordListState::<Arrangement>::new();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details = move |arrangement: Option<Arrangement>| {
        state.open_details(
            modal_stack,
            "arrangement-details-modal",
            arrangement.map(|a| a.id),
            |id, on_saved, on_cancel| {
                view! { <ArrangementDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
            },
        );
    };

    let columns = vec![
        Column::new("Номер", |a: &Arrangement| a.arrangement_number.clone()),
        Column::new("Назначение", |a: &Arrangement| a.title.clone()),
        Column::new("Сумма", |a: &Arrangement| format_amount(a.total)),
        Column::new("Дата", |a: &Arrangement| format_api_date(&a.time)),
    ];
    let sort_fields = vec![
        SortField::new("Time", "Дата", |a: &Arrangement| a.sort_key()),
        SortField::new("Number", "Номер", |a: &Arrangement| a.arrangement_number.clone()),
        SortField::new("Title", "Назначение", |a: &Arrangement| a.title.clone()),
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
