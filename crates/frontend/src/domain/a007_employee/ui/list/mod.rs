use crate::domain::a007_employee::ui::details::EmployeeDetails;
use crate::shared::components::{Column, RecordListPage, RecordListState};
use crate::shared::list_utils::SortField;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a007_employee::Employee;
use contracts::domain::common::Record;
use contracts::shared::format::format_amount;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    let state = RecordListState::<Employee>::new();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details = move |employee: Option<Employee>| {
        state.open_details(
            modal_stack,
            "employee-details-modal",
            employee.map(|e| e.id),
            |id, on_saved, on_cancel| {
                view! { <EmployeeDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
            },
        );
    };

    let columns = vec![
        Column::new("ФИО", |e: &Employee| e.title()),
        Column::new("Должность", |e: &Employee| e.employee_type.label().to_string()),
        Column::new("Оклад", |e: &Employee| {
            format!("{} {}", format_amount(e.salary), e.currency.label())
        }),
        Column::new("Телефон", |e: &Employee| e.phone_number.clone().unwrap_or_default()),
    ];
    let sort_fields = vec![
        SortField::new("Name", "ФИО", |e: &Employee| e.title()),
        SortField::new("Position", "Должность", |e: &Employee| {
            e.employee_type.label().to_string()
        }),
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
