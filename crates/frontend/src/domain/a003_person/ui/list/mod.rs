use crate::domain::a003_person::ui::details::PersonDetails;
use crate::shared::components::{Column, RecordListPage, RecordListState};
use crate::shared::date_utils::today;
use crate::shared::list_utils::SortField;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a003_person::Person;
use contracts::domain::common::Record;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn PersonList() -> impl IntoView {
    let state = RecordListState::<Person>::new();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details = move |person: Option<Person>| {
        state.open_details(
            modal_stack,
            "person-details-modal",
            person.map(|p| p.id),
            |id, on_saved, on_cancel| {
                view! { <PersonDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
            },
        );
    };

    let columns = vec![
        Column::new("ФИО", |p: &Person| p.title()),
        Column::new("Возраст", |p: &Person| {
            p.age(today()).map(|age| age.to_string()).unwrap_or_default()
        }),
        Column::new("Пол", |p: &Person| p.gender.label().to_string()),
        Column::new("Телефон", |p: &Person| p.phone_number.clone().unwrap_or_default()),
        Column::new("Доля, %", |p: &Person| p.ownership_percentage.to_string()),
    ];
    let sort_fields = vec![
        SortField::new("Name", "ФИО", |p: &Person| p.title()),
        SortField::new("Age", "Возраст", |p: &Person| {
            p.age(today()).map(|age| age.to_string()).unwrap_or_default()
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
