use crate::domain::a001_building::ui::details::BuildingDetails;
use crate::shared::components::{Column, RecordListPage, RecordListState};
use crate::shared::list_utils::SortField;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a001_building::Building;
use contracts::shared::format::format_amount;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn BuildingList() -> impl IntoView {
    let state = RecordListState::<Building>::new();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details = move |building: Option<Building>| {
        state.open_details(
            modal_stack,
            "building-details-modal",
            building.map(|b| b.id),
            |id, on_saved, on_cancel| {
                view! { <BuildingDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
            },
        );
    };

    let columns = vec![
        Column::new("Адрес", |b: &Building| b.legal_address.clone()),
        Column::new("Год", |b: &Building| b.built.to_string()),
        Column::new("Этажей", |b: &Building| b.number_of_floors.to_string()),
        Column::new("Квартир", |b: &Building| b.number_of_apartments.to_string()),
        Column::new("Площадь, м²", |b: &Building| format_amount(b.area)),
        Column::new("Отопление", |b: &Building| b.heating.label().to_string()),
    ];
    let sort_fields = vec![
        SortField::new("Address", "Адрес", |b: &Building| b.legal_address.clone()),
        SortField::new("Built", "Год постройки", |b: &Building| b.built.to_string()),
        SortField::new("Apartments", "Число квартир", |b: &Building| {
            b.number_of_apartments.to_string()
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
