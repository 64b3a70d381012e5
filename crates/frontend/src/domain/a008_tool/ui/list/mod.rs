use crate::domain::a008_tool::ui::details::ToolDetails;
use crate::shared::components::{Column, RecordListPage, RecordListState};
use crate::shared::date_utils::{format_api_date, today};
use crate::shared::list_utils::SortField;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a008_tool::Tool;
use contracts::shared::format::format_amount;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ToolList() -> impl IntoView {
    let state = RecordListState::<Tool>::new();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details = move |tool: Option<Tool>| {
        state.open_details(
            modal_stack,
            "tool-details-modal",
            tool.map(|t| t.id),
            |id, on_saved, on_cancel| {
                view! { <ToolDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
            },
        );
    };

    let columns = vec![
        Column::new("Инв. номер", |t: &Tool| t.tool_number.clone()),
        Column::new("Название", |t: &Tool| t.title.clone()),
        Column::new("Стоимость", |t: &Tool| {
            format!("{} {}", format_amount(t.cost), t.currency.label())
        }),
        Column::new("Куплен", |t: &Tool| format_api_date(&t.date_of_purchase)),
        Column::new("Годен до", |t: &Tool| format_api_date(&t.date_of_expiry)),
        Column::new("Состояние", |t: &Tool| {
            if t.is_expired(today()) { "Списать".into() } else { String::new() }
        }),
    ];
    let sort_fields = vec![
        SortField::new("Number", "Инв. номер", |t: &Tool| t.tool_number.clone()),
        SortField::new("Title", "Название", |t: &Tool| t.title.clone()),
        SortField::new("Expiry", "Срок службы", |t: &Tool| t.date_of_expiry.clone()),
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
