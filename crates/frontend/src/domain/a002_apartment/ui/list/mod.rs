use crate::domain::a002_apartment::ui::details::ApartmentDetails;
use crate::shared::components::{Column, RecordListPage, RecordListState};
use crate::shared::list_utils::SortField;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a002_apartment::Apartment;
use contracts::shared::format::format_amount;
use leptos::prelude::*;

fn optional_number(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}

#[component]
#[allow(non_snake_case)]
pub fn ApartmentList() -> impl IntoView {
    let state = RecordListState::<Apartment>::new();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details = move |apartment: Option<Apartment>| {
        state.open_details(
            modal_stack,
            "apartment-details-modal",
            apartment.map(|a| a.id),
            |id, on_saved, on_cancel| {
                view! { <ApartmentDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
            },
        );
    };

    let columns = vec![
        Column::new("Квартира", |a: &Apartment| a.apartment_number.clone()),
        Column::new("Подъезд", |a: &Apartment| optional_number(a.entrance_number)),
        Column::new("Этаж", |a: &Apartment| optional_number(a.floor)),
        Column::new("Площадь, м²", |a: &Apartment| format_amount(a.area)),
        Column::new("Телефон", |a: &Apartment| a.phone_number.clone().unwrap_or_default()),
    ];
    let sort_fields = vec![
        SortField::new("Number", "Номер", |a: &Apartment| a.apartment_number.clone()),
        SortField::new("Floor", "Этаж", |a: &Apartment| optional_number(a.floor)),
        SortField::new("Area", "Площадь", |a: &Apartment| format_amount(a.area)),
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
