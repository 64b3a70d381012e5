use crate::domain::a009_payment::ui::details::PaymentDetails;
use crate::shared::components::{Column, RecordListPage, RecordListState};
use crate::shared::list_utils::SortField;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a009_payment::Payment;
use contracts::shared::format::format_amount;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn PaymentList() -> impl IntoView {
    let state = RecordListState::<Payment>::new();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details = move |payment: Option<Payment>| {
        state.open_details(
            modal_stack,
            "payment-details-modal",
            payment.map(|p| p.id),
            |id, on_saved, on_cancel| {
                view! { <PaymentDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
            },
        );
    };

    let columns = vec![
        Column::new("Название", |p: &Payment| p.title.clone()),
        Column::new("Тип", |p: &Payment| p.payment_type.label().to_string()),
        Column::new("IBAN", |p: &Payment| p.iban.clone()),
        Column::new("Валюта", |p: &Payment| p.currency.label().to_string()),
        Column::new("Остаток", |p: &Payment| format_amount(p.balance)),
    ];
    let sort_fields = vec![
        SortField::new("Title", "Название", |p: &Payment| p.title.clone()),
        SortField::new("Iban", "IBAN", |p: &Payment| p.iban.clone()),
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
